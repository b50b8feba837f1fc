//! Shortest-path search over the monument graph at a rotation snapshot.

use std::{cmp::Ordering, collections::BinaryHeap};

use monument_core::{NodeId, RingAngle};

use crate::graph;

/// Computes the shortest walk between two waypoints at the provided ring
/// orientation.
///
/// A* over the compiled-in graph: edge costs and the heuristic are both
/// straight-line distances between waypoint positions, so the heuristic never
/// exceeds the true remaining cost. Frontier ties are broken by the lower
/// node identifier, which makes the returned sequence reproducible. Returns
/// the inclusive start-to-goal node sequence, or `None` when the goal is
/// unreachable — the expected outcome while the required bridge is
/// disconnected.
#[must_use]
pub fn find_path(from: NodeId, to: NodeId, angle: RingAngle) -> Option<Vec<NodeId>> {
    let start = graph::index_of(from)?;
    let goal = graph::index_of(to)?;
    let nodes = graph::nodes();
    let goal_position = nodes[goal].position();

    let mut best_cost = vec![f32::INFINITY; nodes.len()];
    let mut came_from: Vec<Option<usize>> = vec![None; nodes.len()];
    let mut settled = vec![false; nodes.len()];
    let mut open = BinaryHeap::new();

    best_cost[start] = 0.0;
    open.push(Frontier {
        score: nodes[start].position().distance(goal_position),
        id: from,
        index: start,
    });

    while let Some(Frontier { index, .. }) = open.pop() {
        if settled[index] {
            continue;
        }
        settled[index] = true;

        if index == goal {
            return Some(reconstruct(&came_from, index));
        }

        let current = &nodes[index];
        for neighbor in graph::neighbors(current.id(), angle) {
            let Some(neighbor_index) = graph::index_of(neighbor) else {
                continue;
            };
            if settled[neighbor_index] {
                continue;
            }

            let neighbor_position = nodes[neighbor_index].position();
            let tentative = best_cost[index] + current.position().distance(neighbor_position);
            if tentative < best_cost[neighbor_index] {
                best_cost[neighbor_index] = tentative;
                came_from[neighbor_index] = Some(index);
                open.push(Frontier {
                    score: tentative + neighbor_position.distance(goal_position),
                    id: neighbor,
                    index: neighbor_index,
                });
            }
        }
    }

    None
}

fn reconstruct(came_from: &[Option<usize>], goal: usize) -> Vec<NodeId> {
    let nodes = graph::nodes();
    let mut path = vec![nodes[goal].id()];
    let mut cursor = goal;
    while let Some(previous) = came_from[cursor] {
        cursor = previous;
        path.push(nodes[cursor].id());
    }
    path.reverse();
    path
}

/// Open-set entry ordered so the heap pops the lowest score first, with ties
/// resolved toward the lower node identifier.
#[derive(Clone, Copy, Debug)]
struct Frontier {
    score: f32,
    id: NodeId,
    index: usize,
}

impl Ord for Frontier {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .score
            .total_cmp(&self.score)
            .then_with(|| other.id.cmp(&self.id))
    }
}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Frontier {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Frontier {}
