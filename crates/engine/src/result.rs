use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use thiserror::Error;

pub type EngineResult<T> = Result<T, EngineError>;

/// Result of running an insight job.
///
/// This is display/storage material for higher layers; producing it never
/// mutates anything.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    /// Short headline (the decision text).
    pub headline: String,

    /// Confidence in \[0, 1\].
    pub confidence: f64,

    /// Optional human-readable explanation.
    pub explanation: Option<String>,

    /// Free-form metadata (rule, stance, thresholds, etc).
    pub metadata: JsonValue,
}

impl Insight {
    pub fn new(headline: impl Into<String>, confidence: f64) -> Self {
        Self {
            headline: headline.into(),
            confidence,
            explanation: None,
            metadata: JsonValue::Null,
        }
    }

    pub fn with_explanation(mut self, explanation: impl Into<String>) -> Self {
        self.explanation = Some(explanation.into());
        self
    }

    pub fn with_metadata(mut self, metadata: JsonValue) -> Self {
        self.metadata = metadata;
        self
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum EngineError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
