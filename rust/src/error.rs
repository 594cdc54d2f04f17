//! Error types for graph construction and analysis.

use thiserror::Error;

/// Bad input detected while building an activity graph.
///
/// The caller must fix the input and rebuild; these are never retried.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Activity ID cannot be empty")]
    EmptyId,
    #[error("Duplicate activity ID: {0}")]
    DuplicateId(String),
    #[error("Activity {id} has negative duration ({duration})")]
    NegativeDuration { id: String, duration: f64 },
    #[error("Activity {id} has a non-finite duration")]
    NonFiniteDuration { id: String },
    #[error("Missing required field '{field}' in activity {activity}")]
    MissingField { activity: String, field: &'static str },
    #[error("Unknown predecessor '{predecessor}' for activity '{activity}'")]
    UnknownPredecessor {
        activity: String,
        predecessor: String,
    },
    #[error("Project network contains circular dependencies: {}", .cycle.join(" -> "))]
    CircularDependency { cycle: Vec<String> },
    #[error("Malformed activity input: {0}")]
    Malformed(String),
}

/// Internal invariant violated during analysis.
///
/// Unreachable for a graph that passed validation, except for
/// [`CalculationError::EmptyNetwork`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalculationError {
    #[error("Analysis failed: project network has no activities")]
    EmptyNetwork,
    #[error("Analysis failed: topological sort ordered {sorted} of {total} activities")]
    TopologicalSort { sorted: usize, total: usize },
    #[error("Analysis failed: no timing computed for activity '{0}'")]
    MissingTiming(String),
}

/// Either failure kind, for the one-shot [`crate::analyze_critical_path`] entry point.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Calculation(#[from] CalculationError),
}
