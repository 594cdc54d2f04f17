//! Critical Path Method analysis.
//!
//! [`analyze`] runs, in order: topological sort, forward pass (ES/EF and the
//! project duration), backward pass (LS/LF), slack and critical flags, then
//! the derived reports. It only reads the [`ActivityGraph`]; every run
//! allocates its own timing tables, so one graph can be analyzed from several
//! threads at once.

mod extraction;
mod passes;
mod types;

pub use types::{ActivityTiming, CRITICAL_EPSILON};

use crate::config::AnalysisConfig;
use crate::error::{CalculationError, ValidationError};
use crate::graph::ActivityGraph;
use crate::models::{ActivityRecord, ActivitySchedule, AnalysisResult};
use crate::{log_detail, log_summary, log_trace};

/// Run a complete analysis of `graph`.
///
/// All-or-nothing: on error no partial result is produced.
pub fn analyze(
    graph: &ActivityGraph,
    config: &AnalysisConfig,
) -> Result<AnalysisResult, CalculationError> {
    let result = run_analysis(graph, config);
    if let Err(e) = &result {
        log_summary!(config.verbosity, "CPM analysis failed: {}", e);
    }
    result
}

fn run_analysis(
    graph: &ActivityGraph,
    config: &AnalysisConfig,
) -> Result<AnalysisResult, CalculationError> {
    let verbosity = config.verbosity;

    let order = graph.topological_order()?;
    log_trace!(verbosity, "topological order: {:?}", graph.topological_ids()?);

    let earliest = passes::forward_pass(graph, &order, &config.unit, verbosity)?;
    let project_duration = earliest.project_duration;
    let latest = passes::backward_pass(graph, &order, project_duration, verbosity)?;

    let timings = extraction::combine_timings(&earliest, &latest);
    let critical = extraction::critical_path(&order, &timings);
    let bottlenecks = extraction::find_bottlenecks(graph, &timings, verbosity);
    let optimization_opportunities =
        extraction::find_optimization_opportunities(graph, &timings, config);
    let statistics = extraction::summarize(&timings, critical.len());

    let activities: Vec<ActivitySchedule> = graph
        .activities()
        .iter()
        .zip(&timings)
        .map(|(activity, timing)| {
            let critical = timing.is_critical();
            log_detail!(
                verbosity,
                "{}: slack={} critical={}",
                activity.id(),
                timing.slack,
                critical
            );
            ActivitySchedule {
                id: activity.id().to_string(),
                name: activity.name().to_string(),
                duration: activity.duration(),
                predecessors: activity.predecessors().to_vec(),
                earliest_start: timing.earliest_start,
                earliest_finish: timing.earliest_finish,
                latest_start: timing.latest_start,
                latest_finish: timing.latest_finish,
                slack: timing.slack,
                critical,
            }
        })
        .collect();

    let critical_path: Vec<String> = critical
        .iter()
        .map(|&index| graph.activity(index).id().to_string())
        .collect();

    log_summary!(
        verbosity,
        "CPM analysis complete: {}/{} activities critical",
        critical_path.len(),
        graph.len()
    );

    Ok(AnalysisResult {
        project_duration,
        unit: config.unit.clone(),
        activities,
        critical_path,
        critical_path_duration: project_duration,
        bottlenecks,
        optimization_opportunities,
        statistics,
    })
}

/// A validated graph paired with the configuration used to report on it.
#[derive(Clone, Debug)]
pub struct CriticalPathAnalyzer {
    graph: ActivityGraph,
    config: AnalysisConfig,
}

impl CriticalPathAnalyzer {
    /// Validate `records` and prepare them for analysis.
    pub fn new(
        records: Vec<ActivityRecord>,
        config: AnalysisConfig,
    ) -> Result<Self, ValidationError> {
        Ok(Self::from_graph(ActivityGraph::new(records)?, config))
    }

    pub fn from_graph(graph: ActivityGraph, config: AnalysisConfig) -> Self {
        Self { graph, config }
    }

    pub fn graph(&self) -> &ActivityGraph {
        &self.graph
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Run the analysis. Repeated calls return identical results.
    pub fn analyze(&self) -> Result<AnalysisResult, CalculationError> {
        analyze(&self.graph, &self.config)
    }
}
