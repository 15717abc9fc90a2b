use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::shared::DomainError;

/// Rendering mode requested from the push provider
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PushTemplate {
    /// Plain-text report; line breaks are converted before sending
    #[default]
    Markdown,
    /// Report already rendered as HTML and passed through unchanged
    Html,
}

impl PushTemplate {
    pub fn as_str(&self) -> &str {
        match self {
            PushTemplate::Markdown => "markdown",
            PushTemplate::Html => "html",
        }
    }

    /// Adapt a report body to what the provider expects for this template
    pub fn render_content(&self, content: &str) -> String {
        match self {
            PushTemplate::Markdown => content.replace('\n', "<br>"),
            PushTemplate::Html => content.to_string(),
        }
    }
}

impl FromStr for PushTemplate {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "markdown" | "md" | "" => Ok(PushTemplate::Markdown),
            "html" => Ok(PushTemplate::Html),
            other => Err(DomainError::Configuration(format!(
                "Unknown push template: {other}"
            ))),
        }
    }
}

impl fmt::Display for PushTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Push channel configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PushChannelConfig {
    pub token: String,
    pub template: PushTemplate,
}

impl PushChannelConfig {
    pub fn new(token: impl Into<String>, template: PushTemplate) -> Self {
        Self {
            token: token.into().trim().to_string(),
            template,
        }
    }

    /// An empty token disables pushing altogether
    pub fn is_enabled(&self) -> bool {
        !self.token.is_empty()
    }
}
