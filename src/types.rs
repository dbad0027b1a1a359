use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::GenerateError;

/// The closed set of rap styles offered by the generator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Style {
    Trap,
    BoomBap,
    Conscious,
    Drill,
    OldSchool,
}

impl Style {
    pub const ALL: [Style; 5] = [
        Style::Trap,
        Style::BoomBap,
        Style::Conscious,
        Style::Drill,
        Style::OldSchool,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Style::Trap => "trap",
            Style::BoomBap => "boom-bap",
            Style::Conscious => "conscious",
            Style::Drill => "drill",
            Style::OldSchool => "old-school",
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Style {
    type Err = GenerateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "trap" => Ok(Style::Trap),
            "boom-bap" => Ok(Style::BoomBap),
            "conscious" => Ok(Style::Conscious),
            "drill" => Ok(Style::Drill),
            "old-school" => Ok(Style::OldSchool),
            other => Err(GenerateError::UnknownStyle(other.to_string())),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModelId(String);

impl ModelId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn gemini_flash() -> Self {
        Self::new("gemini-1.5-flash")
    }
}

impl fmt::Display for ModelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
