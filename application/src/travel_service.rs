use domain::error::AttemptError;
use domain::generator::TextGenerator;
use domain::models::{Reply, TravelQuery};
use domain::prompt::Prompt;
use domain::retry::RetryPolicy;
use infrastructure::answer_cache::AnswerCache;
use shared::telemetry::Telemetry;
use tracing::{debug, info, warn};

/// Validates a (city, question) submission, serves it from the cache when possible,
/// and otherwise asks the generator with bounded retries. Every outcome is a `Reply`.
pub struct TravelService<G> {
    generator: G,
    policy: RetryPolicy,
    cache: Option<AnswerCache>,
}

impl<G: TextGenerator> TravelService<G> {
    pub fn new(generator: G, policy: RetryPolicy) -> Self {
        Self {
            generator,
            policy,
            cache: Some(AnswerCache::new()),
        }
    }

    pub fn with_cache(mut self, enabled: bool) -> Self {
        self.cache = enabled.then(AnswerCache::new);
        self
    }

    pub fn cache(&self) -> Option<&AnswerCache> {
        self.cache.as_ref()
    }

    pub fn clear_cache(&mut self) {
        if let Some(cache) = self.cache.as_mut() {
            cache.clear();
        }
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    pub async fn ask(&mut self, city: &str, question: &str) -> Reply {
        let query = match TravelQuery::new(city, question) {
            Ok(query) => query,
            Err(err) => {
                warn!("Rejected submission: {err}");
                return Reply::Warning(err.to_string());
            }
        };

        if let Some(reply) = self.cache.as_ref().and_then(|cache| cache.get(&query)) {
            debug!(city = query.city(), "reply served from cache");
            return reply.clone();
        }

        let reply = self.ask_with_retry(&query).await;
        if let Some(cache) = self.cache.as_mut() {
            cache.insert(query, reply.clone());
        }
        reply
    }

    /// One generation round, bypassing validation and the cache.
    pub async fn ask_with_retry(&self, query: &TravelQuery) -> Reply {
        let prompt = Prompt::for_query(query);
        let attempts = self.policy.attempts();
        let delay = self.policy.retry_delay;
        let mut last_failure = None;

        for attempt in 1..=attempts {
            let timer = Telemetry::new();
            let failure = match self.generator.generate(&prompt).await {
                Ok(text) => {
                    info!(attempt, elapsed_ms = timer.elapsed_ms() as u64, "generation succeeded");
                    return Reply::Answer(text);
                }
                Err(AttemptError::Rejected(message)) => {
                    warn!("Hugging Face API rejected the request: {message}");
                    return Reply::ApiError(message);
                }
                Err(failure) => failure,
            };

            let retrying = self.policy.should_retry_after(attempt);
            match &failure {
                AttemptError::Overloaded(_) if retrying => warn!(
                    "Hugging Face API is overloaded. Retrying in {} seconds... (Attempt {attempt}/{attempts})",
                    delay.as_secs()
                ),
                AttemptError::Overloaded(_) => {
                    warn!("Hugging Face API is overloaded. (Attempt {attempt}/{attempts})")
                }
                AttemptError::MalformedBody(err) => {
                    warn!("JSON Decode Error (Attempt {attempt}/{attempts}): {err}")
                }
                _ => warn!("Request error (Attempt {attempt}/{attempts}): {failure}"),
            }

            last_failure = Some(failure);
            if retrying {
                tokio::time::sleep(delay).await;
            }
        }

        Reply::Failed(exhaustion_message(last_failure.as_ref(), attempts))
    }
}

fn exhaustion_message(last_failure: Option<&AttemptError>, attempts: u32) -> String {
    match last_failure {
        Some(AttemptError::Transport(err)) => {
            format!("Request failed after {attempts} attempts: {err}")
        }
        Some(AttemptError::MalformedBody(err)) => {
            format!("JSON Decode Error after {attempts} attempts: {err}")
        }
        _ => "Failed to get a response from Hugging Face API.".to_string(),
    }
}
