//! Configuration for critical path analysis.

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// Default label for the logical time unit.
pub const DEFAULT_UNIT: &str = "days";

/// Default cap on reported optimization opportunities.
pub const DEFAULT_OPPORTUNITY_LIMIT: usize = 10;

/// Settings that shape an analysis report without affecting the schedule itself.
#[cfg_attr(feature = "python", pyclass)]
#[derive(Clone, Debug, PartialEq)]
pub struct AnalysisConfig {
    /// Time unit label attached to durations ("days", "weeks", "sprints", ...).
    #[cfg_attr(feature = "python", pyo3(get, set))]
    pub unit: String,
    /// Maximum number of optimization opportunities in the report.
    #[cfg_attr(feature = "python", pyo3(get, set))]
    pub opportunity_limit: usize,
    /// Verbosity level: 0=silent, 1=summary, 2=detail, 3=trace.
    #[cfg_attr(feature = "python", pyo3(get, set))]
    pub verbosity: u8,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            unit: DEFAULT_UNIT.to_string(),
            opportunity_limit: DEFAULT_OPPORTUNITY_LIMIT,
            verbosity: 0,
        }
    }
}

impl AnalysisConfig {
    /// Default configuration reporting in the given unit.
    pub fn with_unit(unit: impl Into<String>) -> Self {
        Self {
            unit: unit.into(),
            ..Self::default()
        }
    }

    pub fn verbosity(mut self, verbosity: u8) -> Self {
        self.verbosity = verbosity;
        self
    }

    pub fn opportunity_limit(mut self, limit: usize) -> Self {
        self.opportunity_limit = limit;
        self
    }
}

#[cfg(feature = "python")]
#[pymethods]
impl AnalysisConfig {
    #[new]
    #[pyo3(signature = (unit=None, opportunity_limit=None, verbosity=None))]
    fn py_new(unit: Option<String>, opportunity_limit: Option<usize>, verbosity: Option<u8>) -> Self {
        let defaults = Self::default();
        Self {
            unit: unit.unwrap_or(defaults.unit),
            opportunity_limit: opportunity_limit.unwrap_or(defaults.opportunity_limit),
            verbosity: verbosity.unwrap_or(defaults.verbosity),
        }
    }

    fn __repr__(&self) -> String {
        format!(
            "AnalysisConfig(unit={:?}, opportunity_limit={}, verbosity={})",
            self.unit, self.opportunity_limit, self.verbosity
        )
    }
}
