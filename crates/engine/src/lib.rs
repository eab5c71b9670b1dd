//! `amschel-engine`
//!
//! **Responsibility:** turn campaign metrics (or a free-form question) into a
//! recommendation.
//!
//! Everything here is deterministic and side-effect free:
//! - the classifier is a fixed-priority decision table over [`MetricInput`];
//! - extraction and chat routing are keyword/regex matching;
//! - jobs wrap a classification into an [`Insight`] for display or storage.

pub mod classifier;
pub mod extract;
pub mod intent;
pub mod job;
pub mod playbook;
pub mod result;
pub mod thresholds;

pub use amschel_core::{Confidence, DecisionOutput, MetricInput};
pub use classifier::{Classification, Classifier, Rule, Stance, analyze_metrics, classify};
pub use extract::{analyze_question, extract_metrics};
pub use intent::{ChatIntent, ChatReply, InsightKind, reply_to, route_question};
pub use job::{InsightJob, MetricAnalysisJob};
pub use playbook::Topic;
pub use result::{EngineError, EngineResult, Insight};
pub use thresholds::Thresholds;
