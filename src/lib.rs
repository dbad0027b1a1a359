mod clipboard;
mod config;
mod config_file;
mod controller;
mod errors;
mod prompt;
pub mod providers;
mod types;
pub mod ui;

pub use crate::clipboard::{ClipboardWriter, SystemClipboard};
pub use crate::config::{ApiConfig, ApiKey};
pub use crate::config_file::AppConfig;
pub use crate::controller::{COPIED_ACK, Clock, GenerationController, SystemClock};
pub use crate::errors::GenerateError;
pub use crate::prompt::build_prompt;
pub use crate::types::{ModelId, Style};
