//! Topological ordering using Kahn's algorithm.

use std::collections::VecDeque;

use crate::error::CalculationError;
use crate::interner::ActivityId;

/// Orders nodes so every node comes after all of its predecessors.
///
/// Ties are broken deterministically: zero in-degree nodes are seeded in index
/// (input) order, and each node's successors are released in the order they
/// appear in its successor list.
pub(crate) fn topological_order(
    predecessors: &[Vec<ActivityId>],
    successors: &[Vec<ActivityId>],
) -> Result<Vec<ActivityId>, CalculationError> {
    let total = predecessors.len();
    let mut in_degree: Vec<usize> = predecessors.iter().map(Vec::len).collect();

    let mut queue: VecDeque<ActivityId> = in_degree
        .iter()
        .enumerate()
        .filter(|(_, &degree)| degree == 0)
        .map(|(index, _)| index as ActivityId)
        .collect();

    let mut order: Vec<ActivityId> = Vec::with_capacity(total);

    while let Some(node) = queue.pop_front() {
        order.push(node);

        for &successor in &successors[node as usize] {
            let degree = &mut in_degree[successor as usize];
            *degree -= 1;
            if *degree == 0 {
                queue.push_back(successor);
            }
        }
    }

    if order.len() != total {
        return Err(CalculationError::TopologicalSort {
            sorted: order.len(),
            total,
        });
    }

    Ok(order)
}
