//! Critical Path Method (CPM) engine for project schedules.
//!
//! Given activities with durations and predecessor links, computes earliest and
//! latest start/finish times, slack, the critical path, converging critical
//! chains (bottlenecks) and the activities with room to slip.
//!
//! ```
//! use cpm_rust::{analyze_critical_path, ActivityRecord, AnalysisConfig};
//!
//! let result = analyze_critical_path(
//!     vec![
//!         ActivityRecord::new("A", "Design", 3.0),
//!         ActivityRecord::new("B", "Build", 5.0).with_predecessor("A"),
//!     ],
//!     AnalysisConfig::with_unit("weeks"),
//! )
//! .unwrap();
//! assert_eq!(result.critical_path, vec!["A", "B"]);
//! assert_eq!(result.project_duration, 8.0);
//! ```

// Allow clippy warning triggered by PyO3 macro expansion
#![cfg_attr(feature = "python", allow(clippy::useless_conversion))]

mod config;
pub mod critical_path;
mod error;
pub mod graph;
mod interner;
pub mod logging;
mod models;

pub use config::{AnalysisConfig, DEFAULT_OPPORTUNITY_LIMIT, DEFAULT_UNIT};
pub use critical_path::{analyze, ActivityTiming, CriticalPathAnalyzer, CRITICAL_EPSILON};
pub use error::{CalculationError, EngineError, ValidationError};
pub use graph::{Activity, ActivityGraph};
pub use interner::ActivityId;
pub use models::{
    ActivityRecord, ActivitySchedule, AnalysisResult, AnalysisStatistics, Bottleneck,
    OptimizationOpportunity, RiskLevel,
};

/// Validate `records` and analyze them in one step.
///
/// # Errors
/// * [`EngineError::Validation`] if the records do not form a valid network
/// * [`EngineError::Calculation`] if the analysis itself fails
pub fn analyze_critical_path(
    records: Vec<ActivityRecord>,
    config: AnalysisConfig,
) -> Result<AnalysisResult, EngineError> {
    let analyzer = CriticalPathAnalyzer::new(records, config)?;
    Ok(analyzer.analyze()?)
}

#[cfg(feature = "python")]
mod python {
    use pyo3::create_exception;
    use pyo3::exceptions::PyException;
    use pyo3::prelude::*;

    use crate::{ActivityGraph, AnalysisConfig};

    create_exception!(cpm_rust, ValidationError, PyException);
    create_exception!(cpm_rust, CalculationError, PyException);

    /// Analyze a JSON array of activities and return the result as JSON.
    ///
    /// # Raises
    /// * ValidationError for malformed, incomplete or cyclic input
    /// * CalculationError if the analysis fails
    #[pyfunction]
    #[pyo3(signature = (activities_json, config=None))]
    fn analyze_critical_path(
        activities_json: &str,
        config: Option<AnalysisConfig>,
    ) -> PyResult<String> {
        let config = config.unwrap_or_default();
        let graph = ActivityGraph::from_json(activities_json)
            .map_err(|e| ValidationError::new_err(e.to_string()))?;
        let result = crate::analyze(&graph, &config)
            .map_err(|e| CalculationError::new_err(e.to_string()))?;
        result
            .to_json()
            .map_err(|e| CalculationError::new_err(e.to_string()))
    }

    /// The cpm_rust Python module.
    #[pymodule]
    fn cpm_rust(m: &Bound<'_, PyModule>) -> PyResult<()> {
        m.add_class::<AnalysisConfig>()?;
        m.add("ValidationError", m.py().get_type_bound::<ValidationError>())?;
        m.add("CalculationError", m.py().get_type_bound::<CalculationError>())?;
        m.add_function(wrap_pyfunction!(analyze_critical_path, m)?)?;
        Ok(())
    }
}
