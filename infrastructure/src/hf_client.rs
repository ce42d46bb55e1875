use crate::config::Config;
use anyhow::Context;
use domain::error::AttemptError;
use domain::generator::TextGenerator;
use domain::prompt::Prompt;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use shared::types::Result;
use std::sync::Arc;
use tracing::{debug, warn};

#[derive(Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
}

#[derive(Deserialize)]
struct Generation {
    generated_text: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum InferenceReply {
    Failure { error: String },
    Generations(Vec<Generation>),
    Single(Generation),
}

/// Client for the hosted inference endpoint. Cheap to clone.
#[derive(Clone)]
pub struct HuggingFaceClient {
    client: Arc<Client>,
    api_url: String,
    token: Option<String>,
}

impl HuggingFaceClient {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .context("Failed to build HTTP client")?;
        if config.hf_token.is_none() {
            warn!("HF_TOKEN is not set; sending unauthenticated requests");
        }
        Ok(Self::with_client(
            client,
            config.api_url.clone(),
            config.hf_token.clone(),
        ))
    }

    pub fn with_client(client: Client, api_url: String, token: Option<String>) -> Self {
        Self {
            client: Arc::new(client),
            api_url,
            token,
        }
    }
}

impl TextGenerator for HuggingFaceClient {
    async fn generate(&self, prompt: &Prompt) -> std::result::Result<String, AttemptError> {
        debug!(url = %self.api_url, prompt_len = prompt.as_str().len(), "posting inference request");
        let mut request = self.client.post(&self.api_url).json(&InferenceRequest {
            inputs: prompt.as_str(),
        });
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(transport)?;
        let response = response.error_for_status().map_err(transport)?;
        let body = response.text().await.map_err(transport)?;
        parse_reply(&body)
    }
}

fn transport(err: reqwest::Error) -> AttemptError {
    AttemptError::Transport(err.to_string())
}

/// Turns a response body into generated text or a classified failure.
pub fn parse_reply(body: &str) -> std::result::Result<String, AttemptError> {
    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|e| AttemptError::MalformedBody(e.to_string()))?;

    match serde_json::from_value::<InferenceReply>(value) {
        Ok(InferenceReply::Failure { error }) if !error.trim().is_empty() => {
            Err(AttemptError::from_api_message(error))
        }
        Ok(InferenceReply::Generations(generations)) => generations
            .into_iter()
            .next()
            .map(|generation| generation.generated_text)
            .ok_or_else(|| AttemptError::MalformedBody("response contained no generations".into())),
        Ok(InferenceReply::Single(generation)) => Ok(generation.generated_text),
        Ok(InferenceReply::Failure { .. }) | Err(_) => Err(AttemptError::MalformedBody(
            "response did not contain generated text".into(),
        )),
    }
}
