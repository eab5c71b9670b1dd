//! Decision triple returned by the classifier.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// How strongly the engine stands behind a decision.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl Confidence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Confidence::High => "high",
            Confidence::Medium => "medium",
            Confidence::Low => "low",
        }
    }

    /// Numeric score in \[0, 1\] for callers that rank or aggregate insights.
    pub fn score(&self) -> f64 {
        match self {
            Confidence::High => 0.9,
            Confidence::Medium => 0.7,
            Confidence::Low => 0.4,
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Confidence {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "high" => Ok(Confidence::High),
            "medium" => Ok(Confidence::Medium),
            "low" => Ok(Confidence::Low),
            other => Err(DomainError::validation(format!(
                "unknown confidence level '{other}'"
            ))),
        }
    }
}

/// A recommendation: short imperative, the reasoning behind it, and confidence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionOutput {
    pub decision: String,
    pub justification: String,
    pub confidence: Confidence,
}

impl DecisionOutput {
    pub fn new(
        decision: impl Into<String>,
        justification: impl Into<String>,
        confidence: Confidence,
    ) -> Self {
        Self {
            decision: decision.into(),
            justification: justification.into(),
            confidence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confidence_serializes_lowercase() {
        let out = DecisionOutput::new("Pause", "Because.", Confidence::Medium);
        let json = serde_json::to_value(&out).unwrap();

        assert_eq!(json["confidence"], "medium");
    }

    #[test]
    fn confidence_parses_case_insensitively() {
        assert_eq!("HIGH".parse::<Confidence>(), Ok(Confidence::High));
        assert_eq!(" low ".parse::<Confidence>(), Ok(Confidence::Low));
        assert!(matches!(
            "certain".parse::<Confidence>(),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn confidence_scores_are_ordered() {
        assert!(Confidence::High.score() > Confidence::Medium.score());
        assert!(Confidence::Medium.score() > Confidence::Low.score());
    }
}
