use domain::retry::{RetryPolicy, DEFAULT_MAX_RETRIES, DEFAULT_RETRY_DELAY};
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use tracing::warn;

pub const DEFAULT_API_URL: &str =
    "https://api-inference.huggingface.co/models/google/flan-t5-large";
const DEFAULT_TIMEOUT_SECS: u64 = 60;
const DEFAULT_VECTORIZER_PATH: &str = "model/vectorizer.bin";
const DEFAULT_DATASET_PATH: &str = "model/data.csv";

#[derive(Debug, Clone)]
pub struct Config {
    pub hf_token: Option<String>,
    pub api_url: String,
    pub max_retries: u32,
    pub retry_delay: Duration,
    pub request_timeout: Duration,
    pub vectorizer_path: PathBuf,
    pub dataset_path: PathBuf,
}

impl Config {
    /// Reads `.env` (if present) and then the process environment.
    pub fn load() -> Self {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let text = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        Self {
            hf_token: text("HF_TOKEN").map(|token| token.trim().to_string()),
            api_url: text("HF_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            max_retries: parse_or(&lookup, "TRAVEL_MAX_RETRIES", DEFAULT_MAX_RETRIES),
            retry_delay: Duration::from_secs(parse_or(
                &lookup,
                "TRAVEL_RETRY_DELAY_SECS",
                DEFAULT_RETRY_DELAY.as_secs(),
            )),
            request_timeout: Duration::from_secs(parse_or(
                &lookup,
                "TRAVEL_REQUEST_TIMEOUT_SECS",
                DEFAULT_TIMEOUT_SECS,
            )),
            vectorizer_path: text("TRAVEL_VECTORIZER_PATH")
                .unwrap_or_else(|| DEFAULT_VECTORIZER_PATH.to_string())
                .into(),
            dataset_path: text("TRAVEL_DATASET_PATH")
                .unwrap_or_else(|| DEFAULT_DATASET_PATH.to_string())
                .into(),
        }
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(self.max_retries, self.retry_delay)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
where
    T: FromStr + Copy + std::fmt::Display,
{
    match lookup(key) {
        Some(raw) if !raw.trim().is_empty() => raw.trim().parse().unwrap_or_else(|_| {
            warn!("Ignoring invalid {key}={raw:?}; using {default}");
            default
        }),
        _ => default,
    }
}
