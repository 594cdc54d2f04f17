//! Validated activity network.
//!
//! An [`ActivityGraph`] is an arena of activities with predecessor and
//! successor adjacency resolved to dense indices. Every graph that exists has
//! passed validation: ids are unique and non-empty, durations are finite and
//! non-negative, every predecessor exists and there are no cycles.

pub mod cycles;
mod topology;

use rustc_hash::FxHashSet;

use crate::error::{CalculationError, ValidationError};
use crate::interner::{ActivityId, ActivityInterner};
use crate::models::{ActivityRecord, RawActivityRecord};

/// A validated activity inside an [`ActivityGraph`].
#[derive(Clone, Debug, PartialEq)]
pub struct Activity {
    id: String,
    name: String,
    duration: f64,
    /// Predecessor ids in first-seen order, duplicates removed.
    predecessors: Vec<String>,
}

impl Activity {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn predecessors(&self) -> &[String] {
        &self.predecessors
    }
}

/// Immutable, acyclic network of activities.
#[derive(Clone, Debug)]
pub struct ActivityGraph {
    interner: ActivityInterner,
    activities: Vec<Activity>,
    predecessors: Vec<Vec<ActivityId>>,
    successors: Vec<Vec<ActivityId>>,
}

impl ActivityGraph {
    /// Validate the records and build the graph.
    ///
    /// Records keep their input order, which also drives tie-breaking in the
    /// topological order.
    pub fn new(records: Vec<ActivityRecord>) -> Result<Self, ValidationError> {
        let mut interner = ActivityInterner::with_capacity(records.len());
        let mut activities = Vec::with_capacity(records.len());

        for record in records {
            if record.id.is_empty() {
                return Err(ValidationError::EmptyId);
            }
            if !record.duration.is_finite() {
                return Err(ValidationError::NonFiniteDuration { id: record.id });
            }
            if record.duration < 0.0 {
                return Err(ValidationError::NegativeDuration {
                    id: record.id,
                    duration: record.duration,
                });
            }
            if interner.insert_unique(&record.id).is_none() {
                return Err(ValidationError::DuplicateId(record.id));
            }

            let mut seen = FxHashSet::default();
            let predecessors: Vec<String> = record
                .predecessors
                .into_iter()
                .filter(|p| seen.insert(p.clone()))
                .collect();

            activities.push(Activity {
                id: record.id,
                name: record.name,
                duration: record.duration,
                predecessors,
            });
        }

        let mut predecessors: Vec<Vec<ActivityId>> = vec![Vec::new(); activities.len()];
        let mut successors: Vec<Vec<ActivityId>> = vec![Vec::new(); activities.len()];

        for (index, activity) in activities.iter().enumerate() {
            for pred_id in &activity.predecessors {
                let pred = interner.get(pred_id).ok_or_else(|| {
                    ValidationError::UnknownPredecessor {
                        activity: activity.id.clone(),
                        predecessor: pred_id.clone(),
                    }
                })?;
                predecessors[index].push(pred);
                successors[pred as usize].push(index as ActivityId);
            }
        }

        if let Some(cycle) = cycles::find_cycle(&successors) {
            let cycle = cycle
                .into_iter()
                .map(|id| activities[id as usize].id.clone())
                .collect();
            return Err(ValidationError::CircularDependency { cycle });
        }

        Ok(Self {
            interner,
            activities,
            predecessors,
            successors,
        })
    }

    /// Parse a JSON array of `{id, name, duration, predecessors?}` objects and
    /// build the graph.
    pub fn from_json(json: &str) -> Result<Self, ValidationError> {
        let raw: Vec<RawActivityRecord> =
            serde_json::from_str(json).map_err(|e| ValidationError::Malformed(e.to_string()))?;
        let records = raw
            .into_iter()
            .map(RawActivityRecord::into_record)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(records)
    }

    pub fn len(&self) -> usize {
        self.interner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.interner.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.interner.get(id).is_some()
    }

    pub fn get(&self, id: &str) -> Option<&Activity> {
        self.interner
            .get(id)
            .map(|index| &self.activities[index as usize])
    }

    /// All activities in input order.
    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    /// Ids of the activities that directly depend on `id`.
    pub fn successors(&self, id: &str) -> Option<Vec<&str>> {
        let index = self.interner.get(id)?;
        Some(self.resolve_all(&self.successors[index as usize]))
    }

    /// Ids of the activities `id` directly depends on.
    pub fn predecessors(&self, id: &str) -> Option<Vec<&str>> {
        let index = self.interner.get(id)?;
        Some(self.resolve_all(&self.predecessors[index as usize]))
    }

    /// Activity ids in dependency order.
    pub fn topological_ids(&self) -> Result<Vec<&str>, CalculationError> {
        Ok(self.resolve_all(&self.topological_order()?))
    }

    pub(crate) fn topological_order(&self) -> Result<Vec<ActivityId>, CalculationError> {
        topology::topological_order(&self.predecessors, &self.successors)
    }

    pub(crate) fn activity(&self, index: ActivityId) -> &Activity {
        &self.activities[index as usize]
    }

    pub(crate) fn predecessor_indices(&self, index: ActivityId) -> &[ActivityId] {
        &self.predecessors[index as usize]
    }

    pub(crate) fn successor_indices(&self, index: ActivityId) -> &[ActivityId] {
        &self.successors[index as usize]
    }

    fn resolve_all(&self, indices: &[ActivityId]) -> Vec<&str> {
        indices
            .iter()
            .filter_map(|&index| self.interner.resolve(index))
            .collect()
    }
}
