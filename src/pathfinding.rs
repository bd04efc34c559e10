//! Weighted best-first search across the hex grid.
//!
//! The classic A* shape: g-costs plus the hex-distance heuristic, with the
//! frontier kept in a bucket queue keyed on the truncated integer priority.
//! Buckets pop in ascending priority and FIFO within a bucket, which makes
//! the returned path deterministic for identical inputs.

use std::collections::{BTreeMap, HashMap, VecDeque};

use crate::coords::HexCoord;
use crate::grid::HexGrid;

/// Cost of a move that changes both column and row.
const DIAGONAL_COST: f64 = 1.0;
/// Cost of a move along a single axis.
const STRAIGHT_COST: f64 = 1.5;

/// How the search treats in-bounds coordinates that hold no tile.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PassabilityPolicy {
    /// Any coordinate inside the grid's declared bounds is walkable, whether
    /// or not a tile was generated there.
    #[default]
    CoordinateBounds,
    /// Coordinates without a generated tile are impassable.
    RequireTile,
}

/// Priority queue as an ordered map from integer priority to a FIFO bucket.
struct BucketQueue {
    buckets: BTreeMap<i64, VecDeque<HexCoord>>,
}

impl BucketQueue {
    fn new() -> Self {
        Self {
            buckets: BTreeMap::new(),
        }
    }

    fn push(&mut self, item: HexCoord, priority: i64) {
        self.buckets.entry(priority).or_default().push_back(item);
    }

    /// Pop from the lowest-priority bucket, oldest entry first. Emptied
    /// buckets are dropped so the ascending scan stays cheap.
    fn pop(&mut self) -> Option<HexCoord> {
        let mut entry = self.buckets.first_entry()?;
        let item = entry.get_mut().pop_front()?;
        if entry.get().is_empty() {
            entry.remove();
        }
        Some(item)
    }
}

/// Find the cheapest route from `start` to `goal`, both inclusive, or `None`
/// once the frontier drains without reaching the goal. Each call owns its
/// working state; nothing persists between searches.
pub fn find_path(
    grid: &HexGrid,
    start: HexCoord,
    goal: HexCoord,
    policy: PassabilityPolicy,
) -> Option<Vec<HexCoord>> {
    let mut frontier = BucketQueue::new();
    let mut came_from: HashMap<HexCoord, HexCoord> = HashMap::new();
    let mut cost_so_far: HashMap<HexCoord, f64> = HashMap::new();

    frontier.push(start, 0);
    cost_so_far.insert(start, 0.0);

    while let Some(current) = frontier.pop() {
        if current == goal {
            return Some(reconstruct(&came_from, start, goal));
        }

        let Some(&current_cost) = cost_so_far.get(&current) else {
            continue;
        };

        for next in current.neighbors(1) {
            if !grid.in_bounds(next) {
                continue;
            }
            if policy == PassabilityPolicy::RequireTile && grid.tile(next).is_none() {
                continue;
            }

            let step = if next.col != current.col && next.row != current.row {
                DIAGONAL_COST
            } else {
                STRAIGHT_COST
            };
            let new_cost = current_cost + step;

            let improved = match cost_so_far.get(&next) {
                None => true,
                Some(&old) => new_cost < old,
            };
            if improved {
                cost_so_far.insert(next, new_cost);
                let priority =
                    (10.0 * (new_cost + next.distance(goal) as f64)).floor() as i64;
                frontier.push(next, priority);
                came_from.insert(next, current);
            }
        }
    }

    None
}

/// Walk the breadcrumb chain back from the goal, then flip it forward.
fn reconstruct(
    came_from: &HashMap<HexCoord, HexCoord>,
    start: HexCoord,
    goal: HexCoord,
) -> Vec<HexCoord> {
    let mut path = vec![goal];
    let mut current = goal;
    while current != start {
        match came_from.get(&current) {
            Some(&previous) => {
                path.push(previous);
                current = previous;
            }
            None => break,
        }
    }
    path.reverse();
    path
}
