use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::clipboard::ClipboardWriter;
use crate::errors::GenerateError;
use crate::prompt::build_prompt;
use crate::providers::TextGenerator;
use crate::types::Style;

/// How long `has_copied_recently` stays true after a copy.
pub const COPIED_ACK: Duration = Duration::from_secs(2);

/// Time source for the copy acknowledgment window.
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

/// Wall clock used outside of tests.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Owns all interaction state for the lyrics generation flow: the current
/// result or error, the in-flight flag, and the copy acknowledgment.
/// At most one request is in flight per controller.
pub struct GenerationController {
    generator: Arc<dyn TextGenerator>,
    clipboard: Box<dyn ClipboardWriter>,
    clock: Box<dyn Clock>,
    lyrics: Option<String>,
    error: Option<String>,
    is_submitting: bool,
    copied_at: Option<Instant>,
}

impl GenerationController {
    pub fn new(generator: Box<dyn TextGenerator>, clipboard: Box<dyn ClipboardWriter>) -> Self {
        Self::with_clock(generator, clipboard, Box::new(SystemClock))
    }

    pub fn with_clock(
        generator: Box<dyn TextGenerator>,
        clipboard: Box<dyn ClipboardWriter>,
        clock: Box<dyn Clock>,
    ) -> Self {
        Self {
            generator: Arc::from(generator),
            clipboard,
            clock,
            lyrics: None,
            error: None,
            is_submitting: false,
            copied_at: None,
        }
    }

    /// Run one generation request for the given topic and style.
    ///
    /// Whitespace-only topics are silently rejected, as is a submit while a
    /// request is already in flight. A failed request clears the previous
    /// result and stores the failure description; a successful one stores
    /// the trimmed text and clears any error. Either way the controller is
    /// ready for the next submit when this returns.
    pub async fn submit(&mut self, topic: &str, style: Style) {
        let topic = topic.trim();
        if topic.is_empty() || self.is_submitting {
            return;
        }

        self.is_submitting = true;
        self.error = None;

        match self.dispatch(topic, style).await {
            Ok(text) => {
                self.lyrics = Some(text.trim().to_string());
                self.error = None;
            }
            Err(e) => {
                self.lyrics = None;
                self.error = Some(e.to_string());
            }
        }

        self.is_submitting = false;
    }

    /// Issue the request on a detached task. Dropping the controller (and
    /// with it this future) does not cancel the request; the task runs to
    /// completion and its result is discarded with the join handle.
    async fn dispatch(&self, topic: &str, style: Style) -> Result<String, GenerateError> {
        self.generator.validate_config()?;

        let generator = Arc::clone(&self.generator);
        let prompt = build_prompt(style, topic);
        let handle = tokio::spawn(async move { generator.generate(&prompt).await });

        match handle.await {
            Ok(result) => result,
            Err(e) => Err(GenerateError::Api(format!("Generation task failed: {e}"))),
        }
    }

    /// Copy the current result to the clipboard and start the
    /// acknowledgment window. Returns false, touching nothing, when there
    /// is no result to copy.
    pub fn copy_result(&mut self) -> Result<bool, GenerateError> {
        let Some(lyrics) = self.lyrics.clone() else {
            return Ok(false);
        };

        self.clipboard.set_text(&lyrics)?;
        self.copied_at = Some(self.clock.now());
        Ok(true)
    }

    pub fn lyrics(&self) -> Option<&str> {
        self.lyrics.as_deref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    /// True within [`COPIED_ACK`] of the most recent copy. Copying again
    /// restarts the window.
    pub fn has_copied_recently(&self) -> bool {
        self.copied_at
            .map(|at| self.clock.now().duration_since(at) < COPIED_ACK)
            .unwrap_or(false)
    }

    /// Discard the current result and error.
    pub fn clear(&mut self) {
        self.lyrics = None;
        self.error = None;
    }
}
