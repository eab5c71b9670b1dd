use serde_json::json;

use amschel_core::MetricInput;

use crate::classifier::Classifier;
use crate::result::{EngineError, Insight};
use crate::thresholds::Thresholds;

/// A unit of insight generation.
///
/// Inputs are provided by callers; jobs never fetch or store anything.
pub trait InsightJob: Send + Sync + 'static {
    type Input: Send + Sync + 'static;

    /// The input snapshot the job will analyze.
    fn input(&self) -> &Self::Input;

    /// Execute the analysis and return an insight.
    fn run(&self) -> Result<Insight, EngineError>;
}

/// Classifies one set of campaign metrics into an [`Insight`].
#[derive(Debug, Clone)]
pub struct MetricAnalysisJob {
    input: MetricInput,
    thresholds: Thresholds,
}

impl MetricAnalysisJob {
    pub fn new(input: MetricInput) -> Self {
        Self {
            input,
            thresholds: Thresholds::default(),
        }
    }

    pub fn with_thresholds(mut self, thresholds: Thresholds) -> Self {
        self.thresholds = thresholds;
        self
    }
}

impl InsightJob for MetricAnalysisJob {
    type Input = MetricInput;

    fn input(&self) -> &Self::Input {
        &self.input
    }

    fn run(&self) -> Result<Insight, EngineError> {
        let classifier = Classifier::new(self.thresholds)?;
        let classification = classifier.classify(&self.input);
        let output = &classification.output;

        Ok(Insight::new(output.decision.clone(), output.confidence.score())
            .with_explanation(output.justification.clone())
            .with_metadata(json!({
                "kind": "marketing.metric_decision",
                "rule": classification.rule,
                "stance": classification.stance,
                "confidence": output.confidence,
                "thresholds": classifier.thresholds(),
            })))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_maps_decision_to_insight() {
        let job = MetricAnalysisJob::new(MetricInput::new().with_roas(1.1));
        let insight = job.run().unwrap();

        assert_eq!(insight.headline, "Pause and restructure campaign");
        assert_eq!(insight.confidence, 0.9);
        assert!(insight.explanation.unwrap().starts_with("Poor ROAS"));
        assert_eq!(insight.metadata["rule"], "roas");
        assert_eq!(insight.metadata["stance"], "restructure");
        assert_eq!(insight.metadata["confidence"], "high");
    }

    #[test]
    fn free_text_rule_is_tagged_with_topic() {
        let job = MetricAnalysisJob::new(MetricInput::new().with_free_text("seasonal spike"));
        let insight = job.run().unwrap();

        assert_eq!(insight.metadata["rule"]["free_text"], "seasonal");
        assert_eq!(insight.confidence, 0.7);
    }

    #[test]
    fn invalid_thresholds_fail_the_job() {
        let job = MetricAnalysisJob::new(MetricInput::new()).with_thresholds(Thresholds {
            spend_ratio_low: f64::INFINITY,
            ..Thresholds::default()
        });

        assert!(matches!(job.run(), Err(EngineError::InvalidConfig(_))));
    }

    #[test]
    fn input_is_exposed_unchanged() {
        let input = MetricInput::new().with_cac(20.0);
        let job = MetricAnalysisJob::new(input.clone());
        assert_eq!(job.input(), &input);
    }
}
