//! Slack, critical path and the reports derived from them.

use crate::config::AnalysisConfig;
use crate::graph::ActivityGraph;
use crate::interner::ActivityId;
use crate::log_detail;
use crate::models::{AnalysisStatistics, Bottleneck, OptimizationOpportunity, RiskLevel};

use super::passes::{EarliestTimes, LatestTimes};
use super::types::ActivityTiming;

/// Merge both passes into one timing per activity, computing slack.
pub(crate) fn combine_timings(earliest: &EarliestTimes, latest: &LatestTimes) -> Vec<ActivityTiming> {
    (0..earliest.start.len())
        .map(|i| {
            ActivityTiming::new(
                earliest.start[i],
                earliest.finish[i],
                latest.start[i],
                latest.finish[i],
            )
        })
        .collect()
}

/// Critical activities ordered by earliest finish.
///
/// Ties keep topological order. A critical predecessor never finishes after
/// its successor, so the result is still dependency-respecting, and parallel
/// critical chains are merged by finish time instead of interleaved by level.
pub(crate) fn critical_path(order: &[ActivityId], timings: &[ActivityTiming]) -> Vec<ActivityId> {
    let mut path: Vec<ActivityId> = order
        .iter()
        .copied()
        .filter(|&index| timings[index as usize].is_critical())
        .collect();
    path.sort_by(|&a, &b| {
        timings[a as usize]
            .earliest_finish
            .total_cmp(&timings[b as usize].earliest_finish)
    });
    path
}

/// Critical activities fed by more than one critical predecessor.
pub(crate) fn find_bottlenecks(
    graph: &ActivityGraph,
    timings: &[ActivityTiming],
    verbosity: u8,
) -> Vec<Bottleneck> {
    let mut bottlenecks = Vec::new();

    for index in 0..graph.len() as ActivityId {
        let preds = graph.predecessor_indices(index);
        if !timings[index as usize].is_critical() || preds.len() < 2 {
            continue;
        }

        let critical_predecessors: Vec<String> = preds
            .iter()
            .filter(|&&pred| timings[pred as usize].is_critical())
            .map(|&pred| graph.activity(pred).id().to_string())
            .collect();

        if critical_predecessors.len() > 1 {
            let activity = graph.activity(index);
            log_detail!(
                verbosity,
                "bottleneck {}: critical chains converge from {:?}",
                activity.id(),
                critical_predecessors
            );
            bottlenecks.push(Bottleneck {
                id: activity.id().to_string(),
                name: activity.name().to_string(),
                critical_predecessors,
                risk: RiskLevel::High,
            });
        }
    }

    bottlenecks
}

/// Non-critical activities with positive slack, most slack first.
///
/// The sort is stable, so equal slack keeps input order.
pub(crate) fn find_optimization_opportunities(
    graph: &ActivityGraph,
    timings: &[ActivityTiming],
    config: &AnalysisConfig,
) -> Vec<OptimizationOpportunity> {
    let mut candidates: Vec<(ActivityId, f64)> = timings
        .iter()
        .enumerate()
        .filter(|(_, timing)| !timing.is_critical() && timing.slack > 0.0)
        .map(|(index, timing)| (index as ActivityId, timing.slack))
        .collect();

    candidates.sort_by(|a, b| b.1.total_cmp(&a.1));
    candidates.truncate(config.opportunity_limit);

    candidates
        .into_iter()
        .map(|(index, slack)| {
            let activity = graph.activity(index);
            OptimizationOpportunity {
                activity: activity.id().to_string(),
                name: activity.name().to_string(),
                slack,
                slack_unit: config.unit.clone(),
                recommendation: format!(
                    "Can delay up to {:.1} {} without impacting project",
                    slack, config.unit
                ),
            }
        })
        .collect()
}

pub(crate) fn summarize(timings: &[ActivityTiming], critical_count: usize) -> AnalysisStatistics {
    let total = timings.len();
    let non_critical = total - critical_count;
    let slack_sum: f64 = timings
        .iter()
        .filter(|timing| !timing.is_critical())
        .map(|timing| timing.slack)
        .sum();

    AnalysisStatistics {
        total_activities: total,
        critical_activities: critical_count,
        non_critical_activities: non_critical,
        average_slack: if non_critical == 0 {
            0.0
        } else {
            slack_sum / non_critical as f64
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ActivityRecord;

    fn make_graph(specs: &[(&str, f64, &[&str])]) -> ActivityGraph {
        ActivityGraph::new(
            specs
                .iter()
                .map(|(id, duration, preds)| {
                    ActivityRecord::new(*id, format!("Task {}", id), *duration)
                        .with_predecessors(preds.iter().copied())
                })
                .collect(),
        )
        .unwrap()
    }

    /// Timing with the given slack; only slack matters for extraction.
    fn make_timing(slack: f64) -> ActivityTiming {
        ActivityTiming::new(0.0, 1.0, slack, 1.0 + slack)
    }

    #[test]
    fn test_critical_path_follows_order() {
        let timings = vec![make_timing(0.0), make_timing(2.0), make_timing(0.0)];
        assert_eq!(critical_path(&[2, 1, 0], &timings), vec![2, 0]);
    }

    #[test]
    fn test_critical_path_orders_parallel_chains_by_finish() {
        // Two critical chains of equal length with opposite step sizes.
        let graph = make_graph(&[
            ("S", 1.0, &[]),
            ("X1", 5.0, &["S"]),
            ("Y1", 1.0, &["S"]),
            ("X2", 1.0, &["X1"]),
            ("Y2", 5.0, &["Y1"]),
            ("J", 1.0, &["X2", "Y2"]),
        ]);
        let timings: Vec<ActivityTiming> = [
            (0.0, 1.0),
            (1.0, 6.0),
            (1.0, 2.0),
            (6.0, 7.0),
            (2.0, 7.0),
            (7.0, 8.0),
        ]
        .iter()
        .map(|&(es, ef)| ActivityTiming::new(es, ef, es, ef))
        .collect();
        let order = graph.topological_order().unwrap();

        let path = critical_path(&order, &timings);
        let ids: Vec<&str> = path.iter().map(|&i| graph.activity(i).id()).collect();
        assert_eq!(ids, vec!["S", "Y1", "X1", "X2", "Y2", "J"]);
        for pair in path.windows(2) {
            assert!(
                timings[pair[0] as usize].earliest_finish
                    <= timings[pair[1] as usize].earliest_finish
            );
        }
    }

    #[test]
    fn test_zero_duration_tie_keeps_dependency_order() {
        let graph = make_graph(&[("M", 0.0, &["A"]), ("A", 2.0, &[])]);
        let timings = vec![
            ActivityTiming::new(2.0, 2.0, 2.0, 2.0),
            ActivityTiming::new(0.0, 2.0, 0.0, 2.0),
        ];
        let order = graph.topological_order().unwrap();
        assert_eq!(critical_path(&order, &timings), vec![1, 0]);
    }

    #[test]
    fn test_bottleneck_requires_two_critical_predecessors() {
        // A, B, C all feed D; A and B are critical, C is not.
        let graph = make_graph(&[
            ("A", 1.0, &[]),
            ("B", 1.0, &[]),
            ("C", 1.0, &[]),
            ("D", 1.0, &["A", "B", "C"]),
            ("E", 1.0, &["C", "D"]),
        ]);
        let timings = vec![
            make_timing(0.0),
            make_timing(0.0),
            make_timing(4.0),
            make_timing(0.0),
            make_timing(0.0),
        ];

        let bottlenecks = find_bottlenecks(&graph, &timings, 0);
        assert_eq!(bottlenecks.len(), 1);
        assert_eq!(bottlenecks[0].id, "D");
        assert_eq!(bottlenecks[0].name, "Task D");
        assert_eq!(bottlenecks[0].critical_predecessors, vec!["A", "B"]);
        assert_eq!(bottlenecks[0].risk, RiskLevel::High);
    }

    #[test]
    fn test_non_critical_join_is_not_bottleneck() {
        let graph = make_graph(&[("A", 1.0, &[]), ("B", 1.0, &[]), ("C", 1.0, &["A", "B"])]);
        let timings = vec![make_timing(0.0), make_timing(0.0), make_timing(1.0)];
        assert!(find_bottlenecks(&graph, &timings, 0).is_empty());
    }

    #[test]
    fn test_opportunities_sorted_and_capped() {
        let graph = make_graph(&[
            ("A", 1.0, &[]),
            ("B", 1.0, &[]),
            ("C", 1.0, &[]),
            ("D", 1.0, &[]),
        ]);
        let timings = vec![
            make_timing(1.5),
            make_timing(0.0),
            make_timing(3.5),
            make_timing(1.5),
        ];
        let config = AnalysisConfig::with_unit("weeks").opportunity_limit(2);

        let opportunities = find_optimization_opportunities(&graph, &timings, &config);
        assert_eq!(opportunities.len(), 2);
        assert_eq!(opportunities[0].activity, "C");
        assert_eq!(opportunities[0].slack, 3.5);
        assert_eq!(opportunities[0].slack_unit, "weeks");
        assert_eq!(
            opportunities[0].recommendation,
            "Can delay up to 3.5 weeks without impacting project"
        );
        // A and D tie; input order wins.
        assert_eq!(opportunities[1].activity, "A");
    }

    #[test]
    fn test_default_limit_is_ten() {
        let specs: Vec<(String, f64)> = (0..15).map(|i| (format!("T{}", i), 1.0)).collect();
        let records = specs
            .iter()
            .map(|(id, d)| ActivityRecord::new(id.clone(), id.clone(), *d))
            .collect();
        let graph = ActivityGraph::new(records).unwrap();
        let timings: Vec<ActivityTiming> = (0..15).map(|i| make_timing(1.0 + i as f64)).collect();

        let opportunities =
            find_optimization_opportunities(&graph, &timings, &AnalysisConfig::default());
        assert_eq!(opportunities.len(), 10);
        assert_eq!(opportunities[0].activity, "T14");
        assert_eq!(opportunities[9].activity, "T5");
    }

    #[test]
    fn test_summary_average_over_non_critical() {
        let timings = vec![make_timing(0.0), make_timing(2.0), make_timing(4.0)];
        let stats = summarize(&timings, 1);
        assert_eq!(stats.total_activities, 3);
        assert_eq!(stats.critical_activities, 1);
        assert_eq!(stats.non_critical_activities, 2);
        assert!((stats.average_slack - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_summary_all_critical_has_zero_average() {
        let timings = vec![make_timing(0.0), make_timing(0.0)];
        let stats = summarize(&timings, 2);
        assert_eq!(stats.non_critical_activities, 0);
        assert_eq!(stats.average_slack, 0.0);
    }
}
