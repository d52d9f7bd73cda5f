//! Error types for form_spider.

use std::fmt;

/// Scrape error types.
#[derive(Debug)]
pub enum ScrapeError {
    /// HTTP request failed or returned a non-success status.
    Http(reqwest::Error),
    /// Timeout.
    Timeout,
    /// JSON serialization/deserialization error.
    Json(serde_json::Error),
    /// Reading or writing the terminal failed.
    Io(std::io::Error),
    /// The page has no `<form>` element.
    FormNotFound,
    /// A select control has no options to choose from.
    NoOptions(String),
    /// Standard input was closed while waiting for an answer.
    InputClosed,
    /// Missing required field in response.
    MissingField(&'static str),
    /// LLM provider error.
    Llm(String),
    /// Rate limit exceeded.
    RateLimited,
    /// Required setting missing.
    NotConfigured(&'static str),
}

impl fmt::Display for ScrapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http(e) => write!(f, "HTTP error: {}", e),
            Self::Timeout => write!(f, "Request timed out"),
            Self::Json(e) => write!(f, "JSON error: {}", e),
            Self::Io(e) => write!(f, "IO error: {}", e),
            Self::FormNotFound => write!(f, "Form not found"),
            Self::NoOptions(name) => write!(f, "Select '{}' has no options", name),
            Self::InputClosed => write!(f, "Input closed"),
            Self::MissingField(field) => write!(f, "Missing field: {}", field),
            Self::Llm(msg) => write!(f, "LLM error: {}", msg),
            Self::RateLimited => write!(f, "Rate limit exceeded"),
            Self::NotConfigured(what) => write!(f, "Not configured: {}", what),
        }
    }
}

impl std::error::Error for ScrapeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Http(e) => Some(e),
            Self::Json(e) => Some(e),
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ScrapeError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::Timeout
        } else {
            Self::Http(e)
        }
    }
}

impl From<serde_json::Error> for ScrapeError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

impl From<std::io::Error> for ScrapeError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

/// Result type for scrape operations.
pub type Result<T> = std::result::Result<T, ScrapeError>;
