//! Forward and backward passes over a topological order.
//!
//! Both passes write into freshly allocated tables indexed by arena position;
//! the graph itself is only read.

use crate::error::CalculationError;
use crate::graph::ActivityGraph;
use crate::interner::ActivityId;
use crate::log_summary;
use crate::log_trace;

/// Earliest start/finish per activity plus the resulting project duration.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct EarliestTimes {
    pub start: Vec<f64>,
    pub finish: Vec<f64>,
    pub project_duration: f64,
}

/// Latest start/finish per activity.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct LatestTimes {
    pub start: Vec<f64>,
    pub finish: Vec<f64>,
}

fn missing_timing(graph: &ActivityGraph, index: ActivityId) -> CalculationError {
    CalculationError::MissingTiming(graph.activity(index).id().to_string())
}

/// Unwrap a fully populated table, reporting the first hole.
fn complete(
    graph: &ActivityGraph,
    table: Vec<Option<f64>>,
) -> Result<Vec<f64>, CalculationError> {
    table
        .into_iter()
        .enumerate()
        .map(|(index, value)| value.ok_or_else(|| missing_timing(graph, index as ActivityId)))
        .collect()
}

/// Compute ES/EF in topological order.
///
/// Activities without predecessors start at 0; all others start when their
/// latest-finishing predecessor finishes.
pub(crate) fn forward_pass(
    graph: &ActivityGraph,
    order: &[ActivityId],
    unit: &str,
    verbosity: u8,
) -> Result<EarliestTimes, CalculationError> {
    if graph.is_empty() {
        return Err(CalculationError::EmptyNetwork);
    }

    let n = graph.len();
    let mut start: Vec<Option<f64>> = vec![None; n];
    let mut finish: Vec<Option<f64>> = vec![None; n];

    for &node in order {
        let mut earliest_start = 0.0;
        for &pred in graph.predecessor_indices(node) {
            let pred_finish = finish[pred as usize].ok_or_else(|| missing_timing(graph, pred))?;
            if pred_finish > earliest_start {
                earliest_start = pred_finish;
            }
        }

        let activity = graph.activity(node);
        let earliest_finish = earliest_start + activity.duration();
        start[node as usize] = Some(earliest_start);
        finish[node as usize] = Some(earliest_finish);

        log_trace!(
            verbosity,
            "forward {}: ES={} EF={}",
            activity.id(),
            earliest_start,
            earliest_finish
        );
    }

    let start = complete(graph, start)?;
    let finish = complete(graph, finish)?;
    let project_duration = finish.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    log_summary!(
        verbosity,
        "Forward pass complete. Project duration: {} {}",
        project_duration,
        unit
    );

    Ok(EarliestTimes {
        start,
        finish,
        project_duration,
    })
}

/// Compute LS/LF in reverse topological order.
///
/// Activities without successors must finish by the project duration; all
/// others must finish before their earliest-starting successor's latest start.
pub(crate) fn backward_pass(
    graph: &ActivityGraph,
    order: &[ActivityId],
    project_duration: f64,
    verbosity: u8,
) -> Result<LatestTimes, CalculationError> {
    let n = graph.len();
    let mut start: Vec<Option<f64>> = vec![None; n];
    let mut finish: Vec<Option<f64>> = vec![None; n];

    for &node in order.iter().rev() {
        let successors = graph.successor_indices(node);
        let latest_finish = if successors.is_empty() {
            project_duration
        } else {
            let mut latest_finish = f64::INFINITY;
            for &succ in successors {
                let succ_start = start[succ as usize].ok_or_else(|| missing_timing(graph, succ))?;
                if succ_start < latest_finish {
                    latest_finish = succ_start;
                }
            }
            latest_finish
        };

        let activity = graph.activity(node);
        let latest_start = latest_finish - activity.duration();
        start[node as usize] = Some(latest_start);
        finish[node as usize] = Some(latest_finish);

        log_trace!(
            verbosity,
            "backward {}: LS={} LF={}",
            activity.id(),
            latest_start,
            latest_finish
        );
    }

    log_summary!(verbosity, "Backward pass complete");

    Ok(LatestTimes {
        start: complete(graph, start)?,
        finish: complete(graph, finish)?,
    })
}
