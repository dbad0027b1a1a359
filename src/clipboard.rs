use crate::errors::GenerateError;

/// Write-only access to the system clipboard.
pub trait ClipboardWriter: Send {
    fn set_text(&mut self, text: &str) -> Result<(), GenerateError>;
}

/// System clipboard backed by `arboard`. The handle is opened per call;
/// headless environments fail at copy time, not at startup.
#[derive(Default)]
pub struct SystemClipboard;

impl SystemClipboard {
    pub fn new() -> Self {
        Self
    }
}

impl ClipboardWriter for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), GenerateError> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| GenerateError::Clipboard(e.to_string()))?;
        clipboard
            .set_text(text.to_string())
            .map_err(|e| GenerateError::Clipboard(e.to_string()))
    }
}
