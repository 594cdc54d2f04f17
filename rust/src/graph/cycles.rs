//! Depth-first cycle detection over successor adjacency.
//!
//! Every node is used as a DFS root unless already visited, so disconnected
//! and multi-source networks are fully covered. The traversal keeps an
//! explicit stack instead of recursing; long dependency chains cannot exhaust
//! the call stack.
//!
//! Both functions take successor lists indexed by [`ActivityId`], the same
//! shape [`super::ActivityGraph`] resolves its edges into.

use crate::interner::ActivityId;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    OnStack,
    Done,
}

/// Returns `true` if the successor graph contains a directed cycle.
pub fn has_cycle(successors: &[Vec<ActivityId>]) -> bool {
    find_cycle(successors).is_some()
}

/// Finds one directed cycle, if any.
///
/// The cycle is returned in edge order with its first node repeated at the end,
/// e.g. `[a, b, a]` for `a -> b -> a`.
pub fn find_cycle(successors: &[Vec<ActivityId>]) -> Option<Vec<ActivityId>> {
    let mut marks = vec![Mark::Unvisited; successors.len()];
    // (node, index of the next successor to explore)
    let mut stack: Vec<(ActivityId, usize)> = Vec::new();

    for root in 0..successors.len() {
        if marks[root] != Mark::Unvisited {
            continue;
        }
        marks[root] = Mark::OnStack;
        stack.push((root as ActivityId, 0));

        while let Some((node, next)) = stack.last_mut() {
            let children = &successors[*node as usize];
            if *next == children.len() {
                marks[*node as usize] = Mark::Done;
                stack.pop();
                continue;
            }

            let child = children[*next];
            *next += 1;

            match marks[child as usize] {
                Mark::Unvisited => {
                    marks[child as usize] = Mark::OnStack;
                    stack.push((child, 0));
                }
                Mark::OnStack => {
                    // Back-edge: the cycle is the stack suffix starting at `child`.
                    let start = stack.iter().position(|&(n, _)| n == child)?;
                    let mut cycle: Vec<ActivityId> =
                        stack[start..].iter().map(|&(n, _)| n).collect();
                    cycle.push(child);
                    return Some(cycle);
                }
                Mark::Done => {}
            }
        }
    }

    None
}
