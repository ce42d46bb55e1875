use crate::error::AttemptError;
use crate::prompt::Prompt;

/// A remote text-generation backend. One call is one attempt; retrying is the caller's job.
pub trait TextGenerator {
    fn generate(
        &self,
        prompt: &Prompt,
    ) -> impl std::future::Future<Output = Result<String, AttemptError>> + Send;
}
