use application::travel_service::TravelService;
use domain::error::AttemptError;
use domain::models::{Reply, FAILURE_MARKER};
use domain::retry::RetryPolicy;
use std::time::Duration;
use tests::ScriptedGenerator;

/// The paused clock lands on timer ticks, so allow millisecond rounding.
fn assert_about(actual: Duration, expected: Duration) {
    assert!(
        actual >= expected && actual < expected + Duration::from_millis(50),
        "expected about {expected:?}, got {actual:?}"
    );
}

fn overloaded() -> Result<String, AttemptError> {
    Err(AttemptError::from_api_message(
        "Model google/flan-t5-large is overloaded, please try again later.",
    ))
}

#[tokio::test]
async fn blank_submissions_never_reach_the_api() {
    let cases = [("", "Best food?"), ("Lahore", "   "), ("\t", "\n"), ("", "")];
    let mut service = TravelService::new(
        ScriptedGenerator::always(Ok("unused".into())),
        RetryPolicy::default(),
    );
    for (city, question) in cases {
        let reply = service.ask(city, question).await;
        assert!(matches!(reply, Reply::Warning(_)), "{city:?} {question:?}");
    }
    assert_eq!(service.generator().calls(), 0);
}

#[tokio::test]
async fn success_text_is_returned_unchanged() {
    let text = "1. Badshahi Mosque\n2. Lahore Fort\n3. Shalimar Gardens ";
    let mut service = TravelService::new(
        ScriptedGenerator::new(vec![Ok(text.into())]),
        RetryPolicy::default(),
    );
    assert_eq!(service.ask("Lahore", "Top attractions?").await, Reply::Answer(text.into()));
    assert_eq!(service.generator().calls(), 1);
}

#[tokio::test(start_paused = true)]
async fn overload_exhausts_all_attempts_with_fixed_spacing() {
    let mut service = TravelService::new(ScriptedGenerator::always(overloaded()), RetryPolicy::default());
    let start = tokio::time::Instant::now();

    let reply = service.ask("Skardu", "Famous hotels?").await;

    assert_eq!(
        reply,
        Reply::Failed("Failed to get a response from Hugging Face API.".into())
    );
    assert!(reply.to_string().starts_with(FAILURE_MARKER));

    let generator = service.generator();
    assert_eq!(generator.calls(), 4);
    let times = generator.call_times();
    for pair in times.windows(2) {
        assert_about(pair[1] - pair[0], Duration::from_secs(10));
    }
    // No sleep after the final attempt.
    assert_about(start.elapsed(), Duration::from_secs(30));
}

#[tokio::test]
async fn terminal_error_returns_after_one_attempt() {
    let mut service = TravelService::new(
        ScriptedGenerator::always(Err(AttemptError::from_api_message(
            "Authorization header is correct, but the token seems invalid",
        ))),
        RetryPolicy::default(),
    );
    let reply = service.ask("Quetta", "Best food spots?").await;
    assert_eq!(
        reply.to_string(),
        "❌ Hugging Face API Error: Authorization header is correct, but the token seems invalid"
    );
    assert_eq!(service.generator().calls(), 1);
}

#[tokio::test(start_paused = true)]
async fn malformed_bodies_follow_the_transient_path() {
    let mut service = TravelService::new(
        ScriptedGenerator::always(Err(AttemptError::MalformedBody(
            "expected value at line 1 column 1".into(),
        ))),
        RetryPolicy::default(),
    );
    let reply = service.ask("Multan", "Family attractions?").await;
    assert_eq!(
        reply,
        Reply::Failed("JSON Decode Error after 4 attempts: expected value at line 1 column 1".into())
    );
    assert_eq!(service.generator().calls(), 4);
}

#[tokio::test(start_paused = true)]
async fn transport_failures_then_success() {
    let mut service = TravelService::new(
        ScriptedGenerator::new(vec![
            Err(AttemptError::Transport("operation timed out".into())),
            Ok("Visit Swat's Kalam valley.".into()),
        ]),
        RetryPolicy::default(),
    );
    let start = tokio::time::Instant::now();
    let reply = service.ask("Swat", "Winter places?").await;
    assert_eq!(reply, Reply::Answer("Visit Swat's Kalam valley.".into()));
    assert_eq!(service.generator().calls(), 2);
    assert_about(start.elapsed(), Duration::from_secs(10));
}

#[tokio::test(start_paused = true)]
async fn custom_policy_bounds_attempts() {
    let mut service = TravelService::new(
        ScriptedGenerator::always(Err(AttemptError::Transport("connection refused".into()))),
        RetryPolicy::new(2, Duration::from_secs(3)),
    );
    let start = tokio::time::Instant::now();
    let reply = service.ask("Hunza", "Where to stay?").await;
    assert_eq!(
        reply,
        Reply::Failed("Request failed after 2 attempts: connection refused".into())
    );
    assert_eq!(service.generator().calls(), 2);
    assert_about(start.elapsed(), Duration::from_secs(3));
}

#[tokio::test]
async fn repeated_questions_hit_the_cache() {
    let mut service = TravelService::new(
        ScriptedGenerator::new(vec![Ok("Attabad Lake.".into()), Ok("Passu Cones.".into())]),
        RetryPolicy::default(),
    );
    let first = service.ask("Hunza", "Must see?").await;
    let second = service.ask(" Hunza ", "Must see? ").await;
    assert_eq!(first, second);
    assert_eq!(service.generator().calls(), 1);
    assert_eq!(service.cache().map(|c| c.len()), Some(1));

    service.clear_cache();
    assert_eq!(
        service.ask("Hunza", "Must see?").await,
        Reply::Answer("Passu Cones.".into())
    );
    assert_eq!(service.generator().calls(), 2);
}

#[tokio::test]
async fn disabled_cache_calls_every_time() {
    let mut service = TravelService::new(
        ScriptedGenerator::always(Ok("Gilgit bazaar.".into())),
        RetryPolicy::default(),
    )
    .with_cache(false);
    service.ask("Gilgit", "Shopping?").await;
    service.ask("Gilgit", "Shopping?").await;
    assert_eq!(service.generator().calls(), 2);
    assert!(service.cache().is_none());
}

#[tokio::test(start_paused = true)]
async fn repeated_failing_submissions_call_once() {
    let mut service = TravelService::new(
        ScriptedGenerator::always(Err(AttemptError::from_api_message("Invalid credentials"))),
        RetryPolicy::default(),
    );
    let first = service.ask("Lahore", "Food?").await;
    let second = service.ask("Lahore", "Food?").await;
    assert_eq!(first, Reply::ApiError("Invalid credentials".into()));
    assert_eq!(second, first);
    assert_eq!(service.generator().calls(), 1);
}

#[tokio::test(start_paused = true)]
async fn exhausted_overload_is_remembered() {
    let mut service = TravelService::new(ScriptedGenerator::always(overloaded()), RetryPolicy::default());
    service.ask("Skardu", "Famous hotels?").await;
    let start = tokio::time::Instant::now();
    let again = service.ask("Skardu", "Famous hotels?").await;
    assert!(matches!(again, Reply::Failed(_)));
    assert_eq!(service.generator().calls(), 4);
    assert_eq!(start.elapsed(), Duration::ZERO);
}
