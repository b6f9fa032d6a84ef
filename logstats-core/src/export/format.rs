use crate::export::{AdocRenderer, JsonRenderer, MarkdownRenderer, StatsRenderer};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Markdown,
    Adoc,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 3] = [Self::Json, Self::Markdown, Self::Adoc];

    pub fn name(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Markdown => "markdown",
            Self::Adoc => "adoc",
        }
    }

    /// File extension the output path must carry for this format.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Json => ".json",
            Self::Markdown => ".md",
            Self::Adoc => ".ad",
        }
    }

    pub fn renderer(self) -> Box<dyn StatsRenderer> {
        match self {
            Self::Json => Box::new(JsonRenderer),
            Self::Markdown => Box::new(MarkdownRenderer),
            Self::Adoc => Box::new(AdocRenderer),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|format| format.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| anyhow::anyhow!("invalid format: {}", s))
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
