//! Input records and the analysis result schema.
//!
//! Field names of the serialized result are a stable contract with report
//! exporters, so the serde renames below must not change.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// One activity as supplied by the caller.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ActivityRecord {
    pub id: String,
    pub name: String,
    pub duration: f64,
    #[serde(default)]
    pub predecessors: Vec<String>,
}

impl ActivityRecord {
    pub fn new(id: impl Into<String>, name: impl Into<String>, duration: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            duration,
            predecessors: Vec::new(),
        }
    }

    /// Adds a predecessor activity id.
    pub fn with_predecessor(mut self, predecessor: impl Into<String>) -> Self {
        self.predecessors.push(predecessor.into());
        self
    }

    pub fn with_predecessors<I, S>(mut self, predecessors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.predecessors
            .extend(predecessors.into_iter().map(Into::into));
        self
    }
}

/// Loosely-typed record used when parsing JSON so that absent fields are
/// reported as [`ValidationError::MissingField`] instead of a serde message.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct RawActivityRecord {
    id: Option<String>,
    name: Option<String>,
    duration: Option<f64>,
    #[serde(default)]
    predecessors: Vec<String>,
}

impl RawActivityRecord {
    pub(crate) fn into_record(self) -> Result<ActivityRecord, ValidationError> {
        let activity = self.id.clone().unwrap_or_else(|| "<unknown>".to_string());
        let missing = |field: &'static str| ValidationError::MissingField {
            activity: activity.clone(),
            field,
        };

        let id = self.id.clone().ok_or_else(|| missing("id"))?;
        let name = self.name.ok_or_else(|| missing("name"))?;
        let duration = self.duration.ok_or_else(|| missing("duration"))?;

        Ok(ActivityRecord {
            id,
            name,
            duration,
            predecessors: self.predecessors,
        })
    }
}

/// Computed schedule for a single activity.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActivitySchedule {
    pub id: String,
    pub name: String,
    pub duration: f64,
    pub predecessors: Vec<String>,
    #[serde(rename = "ES")]
    pub earliest_start: f64,
    #[serde(rename = "EF")]
    pub earliest_finish: f64,
    #[serde(rename = "LS")]
    pub latest_start: f64,
    #[serde(rename = "LF")]
    pub latest_finish: f64,
    pub slack: f64,
    pub critical: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    High,
}

/// A critical activity where two or more critical chains converge.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bottleneck {
    pub id: String,
    pub name: String,
    pub critical_predecessors: Vec<String>,
    pub risk: RiskLevel,
}

/// A non-critical activity that can slip without moving the finish date.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OptimizationOpportunity {
    pub activity: String,
    pub name: String,
    pub slack: f64,
    pub slack_unit: String,
    pub recommendation: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnalysisStatistics {
    pub total_activities: usize,
    pub critical_activities: usize,
    pub non_critical_activities: usize,
    /// Mean slack of non-critical activities (0 when every activity is critical).
    pub average_slack: f64,
}

/// Snapshot produced by one analysis run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub project_duration: f64,
    pub unit: String,
    /// Per-activity schedules in input order.
    pub activities: Vec<ActivitySchedule>,
    /// Critical activity ids in dependency order.
    pub critical_path: Vec<String>,
    pub critical_path_duration: f64,
    pub bottlenecks: Vec<Bottleneck>,
    pub optimization_opportunities: Vec<OptimizationOpportunity>,
    pub statistics: AnalysisStatistics,
}

impl AnalysisResult {
    /// Look up the schedule of one activity.
    pub fn activity(&self, id: &str) -> Option<&ActivitySchedule> {
        self.activities.iter().find(|a| a.id == id)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Copy of this result with every reported time rounded to `places` decimals.
    ///
    /// Ids, flags, counts and recommendation texts are left unchanged.
    pub fn rounded(&self, places: u32) -> Self {
        let round = |value: f64| round_to(value, places);
        let mut result = self.clone();

        result.project_duration = round(result.project_duration);
        result.critical_path_duration = round(result.critical_path_duration);
        for activity in &mut result.activities {
            activity.earliest_start = round(activity.earliest_start);
            activity.earliest_finish = round(activity.earliest_finish);
            activity.latest_start = round(activity.latest_start);
            activity.latest_finish = round(activity.latest_finish);
            activity.slack = round(activity.slack);
        }
        for opportunity in &mut result.optimization_opportunities {
            opportunity.slack = round(opportunity.slack);
        }
        result.statistics.average_slack = round(result.statistics.average_slack);
        result
    }
}

fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_builder() {
        let record = ActivityRecord::new("D", "Integration", 1.0)
            .with_predecessor("B")
            .with_predecessors(["C"]);
        assert_eq!(record.id, "D");
        assert_eq!(record.predecessors, vec!["B", "C"]);
    }

    #[test]
    fn test_raw_record_reports_missing_field() {
        let raw: RawActivityRecord =
            serde_json::from_str(r#"{"id": "A", "duration": 3}"#).unwrap();
        assert_eq!(
            raw.into_record(),
            Err(ValidationError::MissingField {
                activity: "A".to_string(),
                field: "name",
            })
        );

        let raw: RawActivityRecord =
            serde_json::from_str(r#"{"name": "Design", "duration": 3}"#).unwrap();
        assert_eq!(
            raw.into_record(),
            Err(ValidationError::MissingField {
                activity: "<unknown>".to_string(),
                field: "id",
            })
        );
    }

    #[test]
    fn test_raw_record_defaults_predecessors() {
        let raw: RawActivityRecord =
            serde_json::from_str(r#"{"id": "A", "name": "Design", "duration": 3}"#).unwrap();
        let record = raw.into_record().unwrap();
        assert_eq!(record, ActivityRecord::new("A", "Design", 3.0));
    }

    #[test]
    fn test_schedule_uses_short_time_keys() {
        let schedule = ActivitySchedule {
            id: "A".to_string(),
            name: "Design".to_string(),
            duration: 3.0,
            predecessors: vec![],
            earliest_start: 0.0,
            earliest_finish: 3.0,
            latest_start: 0.0,
            latest_finish: 3.0,
            slack: 0.0,
            critical: true,
        };
        let value = serde_json::to_value(&schedule).unwrap();
        assert_eq!(value["ES"], 0.0);
        assert_eq!(value["EF"], 3.0);
        assert_eq!(value["LS"], 0.0);
        assert_eq!(value["LF"], 3.0);
        assert_eq!(value["critical"], true);
        assert_eq!(serde_json::to_value(RiskLevel::High).unwrap(), "high");
    }

    #[test]
    fn test_round_to() {
        assert!((round_to(2.0 / 3.0, 2) - 0.67).abs() < 1e-12);
        assert!((round_to(7.125, 0) - 7.0).abs() < 1e-12);
    }
}
