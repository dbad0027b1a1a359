use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};

use proptest::prelude::*;

use ghostwriter::providers::TextGenerator;
use ghostwriter::{
    COPIED_ACK, ClipboardWriter, Clock, GenerateError, GenerationController, ModelId, Style,
};

// Scripted generator: records every prompt, plays back queued outcomes.
struct ScriptedGenerator {
    model: ModelId,
    script: Mutex<Vec<Result<String, String>>>,
    prompts: Arc<Mutex<Vec<String>>>,
    calls: Arc<AtomicUsize>,
    configured: bool,
}

impl ScriptedGenerator {
    fn new(script: Vec<Result<String, String>>) -> Self {
        Self {
            model: ModelId::new("scripted-model"),
            script: Mutex::new(script),
            prompts: Arc::new(Mutex::new(Vec::new())),
            calls: Arc::new(AtomicUsize::new(0)),
            configured: true,
        }
    }

    fn always(text: &str) -> Self {
        Self::new(vec![Ok(text.to_string()); 8])
    }

    fn unconfigured() -> Self {
        Self {
            configured: false,
            ..Self::new(Vec::new())
        }
    }

    fn calls(&self) -> Arc<AtomicUsize> {
        self.calls.clone()
    }

    fn prompts(&self) -> Arc<Mutex<Vec<String>>> {
        self.prompts.clone()
    }
}

#[async_trait::async_trait]
impl TextGenerator for ScriptedGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, GenerateError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt.to_string());

        let mut script = self.script.lock().unwrap();
        if script.is_empty() {
            return Ok("default bars".to_string());
        }
        match script.remove(0) {
            Ok(text) => Ok(text),
            Err(msg) => Err(GenerateError::Api(msg)),
        }
    }

    fn name(&self) -> &str {
        "scripted"
    }

    fn model(&self) -> &ModelId {
        &self.model
    }

    fn validate_config(&self) -> Result<(), GenerateError> {
        if self.configured {
            Ok(())
        } else {
            Err(GenerateError::MissingApiKey("scripted".to_string()))
        }
    }
}

#[derive(Default)]
struct RecordingClipboard {
    writes: Arc<Mutex<Vec<String>>>,
}

impl RecordingClipboard {
    fn writes(&self) -> Arc<Mutex<Vec<String>>> {
        self.writes.clone()
    }
}

impl ClipboardWriter for RecordingClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), GenerateError> {
        self.writes.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

#[derive(Clone)]
struct ManualClock {
    origin: Instant,
    offset: Arc<Mutex<Duration>>,
}

impl ManualClock {
    fn new() -> Self {
        Self {
            origin: Instant::now(),
            offset: Arc::new(Mutex::new(Duration::ZERO)),
        }
    }

    fn advance(&self, by: Duration) {
        *self.offset.lock().unwrap() += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.origin + *self.offset.lock().unwrap()
    }
}

fn controller_with(generator: ScriptedGenerator) -> GenerationController {
    GenerationController::new(Box::new(generator), Box::new(RecordingClipboard::default()))
}

#[tokio::test]
async fn one_submit_makes_exactly_one_call() {
    let generator = ScriptedGenerator::always("bars");
    let calls = generator.calls();
    let prompts = generator.prompts();
    let mut controller = controller_with(generator);

    controller.submit("money", Style::Trap).await;

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    let prompts = prompts.lock().unwrap();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].starts_with("Write trap style rap lyrics about: money."));
    assert!(!controller.is_submitting());
}

#[tokio::test]
async fn result_is_stored_whitespace_trimmed() {
    let mut controller = controller_with(ScriptedGenerator::always("  Yo yo yo\nfire bars\n  "));

    controller.submit("success", Style::OldSchool).await;

    assert_eq!(controller.lyrics(), Some("Yo yo yo\nfire bars"));
}

#[tokio::test]
async fn transport_failure_then_success_recovers() {
    let mut controller = controller_with(ScriptedGenerator::new(vec![
        Ok("first bars".to_string()),
        Err("error sending request".to_string()),
        Ok("second bars".to_string()),
    ]));

    controller.submit("money", Style::Trap).await;
    assert_eq!(controller.lyrics(), Some("first bars"));
    assert!(controller.error().is_none());

    controller.submit("money", Style::Trap).await;
    assert!(controller.lyrics().is_none());
    assert_eq!(controller.error(), Some("error sending request"));

    controller.submit("money", Style::Trap).await;
    assert_eq!(controller.lyrics(), Some("second bars"));
    assert!(controller.error().is_none());
}

#[tokio::test]
async fn missing_credential_is_a_config_error_with_no_call() {
    let generator = ScriptedGenerator::unconfigured();
    let calls = generator.calls();
    let mut controller = controller_with(generator);

    controller.submit("money", Style::Trap).await;

    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert!(controller.lyrics().is_none());
    let error = controller.error().expect("config error surfaced");
    assert!(error.contains("GEMINI_API_KEY"));
}

#[tokio::test]
async fn identical_submits_are_independent_calls() {
    let generator = ScriptedGenerator::new(vec![
        Ok("take one".to_string()),
        Ok("take two".to_string()),
    ]);
    let calls = generator.calls();
    let mut controller = controller_with(generator);

    controller.submit("money", Style::Trap).await;
    assert_eq!(controller.lyrics(), Some("take one"));

    controller.submit("money", Style::Trap).await;
    assert_eq!(controller.lyrics(), Some("take two"));

    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn copy_flow_with_manual_clock() {
    let clock = ManualClock::new();
    let clipboard = RecordingClipboard::default();
    let writes = clipboard.writes();
    let mut controller = GenerationController::with_clock(
        Box::new(ScriptedGenerator::always("hook and verses")),
        Box::new(clipboard),
        Box::new(clock.clone()),
    );

    // Nothing to copy yet: no clipboard write, no acknowledgment.
    assert!(!controller.copy_result().unwrap());
    assert!(writes.lock().unwrap().is_empty());
    assert!(!controller.has_copied_recently());

    controller.submit("money", Style::Trap).await;
    assert!(controller.copy_result().unwrap());
    assert_eq!(writes.lock().unwrap().as_slice(), ["hook and verses"]);
    assert!(controller.has_copied_recently());

    clock.advance(COPIED_ACK);
    assert!(!controller.has_copied_recently());
}

proptest! {
    // Whitespace-only topics never reach the generator, whatever the style.
    #[test]
    fn whitespace_topics_never_submit(
        topic in "[ \\t\\n\\r]{0,16}",
        style_idx in 0usize..Style::ALL.len(),
    ) {
        let rt = tokio::runtime::Runtime::new().unwrap();
        rt.block_on(async {
            let generator = ScriptedGenerator::always("bars");
            let calls = generator.calls();
            let mut controller = controller_with(generator);

            controller.submit(&topic, Style::ALL[style_idx]).await;

            prop_assert_eq!(calls.load(Ordering::SeqCst), 0);
            prop_assert!(controller.lyrics().is_none());
            prop_assert!(controller.error().is_none());
            Ok(())
        })?;
    }
}
