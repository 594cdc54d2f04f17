//! Per-activity timing produced by the forward and backward passes.

/// Absolute tolerance for treating slack as zero.
///
/// Absolute rather than relative: durations are small reals and the error
/// being absorbed is additive drift along chained ES/EF/LS/LF sums.
pub const CRITICAL_EPSILON: f64 = 1e-9;

/// Earliest and latest times for one activity.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ActivityTiming {
    /// Earliest possible start (forward pass).
    pub earliest_start: f64,
    /// Earliest possible finish (forward pass).
    pub earliest_finish: f64,
    /// Latest start that does not delay the project (backward pass).
    pub latest_start: f64,
    /// Latest finish that does not delay the project (backward pass).
    pub latest_finish: f64,
    /// Slack = latest_finish - earliest_finish.
    pub slack: f64,
}

impl ActivityTiming {
    pub fn new(earliest_start: f64, earliest_finish: f64, latest_start: f64, latest_finish: f64) -> Self {
        Self {
            earliest_start,
            earliest_finish,
            latest_start,
            latest_finish,
            slack: latest_finish - earliest_finish,
        }
    }

    pub fn is_critical(&self) -> bool {
        self.slack.abs() < CRITICAL_EPSILON
    }
}
