//! `amschel-core` — marketing metric and decision primitives.
//!
//! This crate contains **pure data** types shared by the engine and its callers
//! (no classification logic, no infrastructure concerns).

pub mod decision;
pub mod error;
pub mod metrics;

pub use decision::{Confidence, DecisionOutput};
pub use error::DomainError;
pub use metrics::MetricInput;
