use fxhash::FxBuildHasher;
/// This module implements a variant of
/// [pathfinding's astar function](https://docs.rs/pathfinding/latest/pathfinding/directed/astar/index.html)
/// which breaks f-score ties on the node itself so searches are reproducible, and reports the nodes
/// it closed along the way.
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::IndexMap;
use num_traits::Zero;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

use log::debug;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::hash::Hash;

struct SmallestCostHolder<K, N> {
    estimated_cost: K,
    cost: K,
    node: N,
    index: usize,
}

impl<K: PartialEq, N: PartialEq> Eq for SmallestCostHolder<K, N> {}

impl<K: PartialEq, N: PartialEq> PartialEq for SmallestCostHolder<K, N> {
    fn eq(&self, other: &Self) -> bool {
        self.estimated_cost.eq(&other.estimated_cost) && self.node.eq(&other.node)
    }
}

impl<K: Ord, N: Ord> PartialOrd for SmallestCostHolder<K, N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord, N: Ord> Ord for SmallestCostHolder<K, N> {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap: reverse both keys so the smallest estimate, then the smallest
        // node, is popped first
        other
            .estimated_cost
            .cmp(&self.estimated_cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

/// Result of a search. `expanded` holds every node that was closed, in closing order, including
/// the goal when one was reached.
pub(crate) struct SearchOutcome<N, C> {
    pub path: Option<(Vec<N>, C)>,
    pub expanded: Vec<N>,
}

fn reverse_path<N, V, F>(parents: &FxIndexMap<N, V>, mut parent: F, start: usize) -> Vec<N>
where
    N: Eq + Hash + Clone,
    F: FnMut(&V) -> usize,
{
    let mut i = start;
    let mut path: Vec<N> = std::iter::from_fn(|| {
        parents.get_index(i).map(|(node, value)| {
            i = parent(value);
            node.clone()
        })
    })
    .collect();
    path.reverse();
    path
}

pub(crate) fn astar<N, C, FN, IN, FH, FS>(
    start: &N,
    mut successors: FN,
    mut heuristic: FH,
    mut success: FS,
) -> SearchOutcome<N, C>
where
    N: Eq + Hash + Ord + Clone,
    C: Zero + Ord + Copy,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = (N, C)>,
    FH: FnMut(&N) -> C,
    FS: FnMut(&N) -> bool,
{
    let mut to_see = BinaryHeap::new();
    to_see.push(SmallestCostHolder {
        estimated_cost: heuristic(start),
        cost: Zero::zero(),
        node: start.clone(),
        index: 0,
    });
    let mut parents: FxIndexMap<N, (usize, C)> = FxIndexMap::default();
    parents.insert(start.clone(), (usize::MAX, Zero::zero()));
    let mut expanded = Vec::new();
    while let Some(SmallestCostHolder { cost, index, .. }) = to_see.pop() {
        let successors = {
            let Some((node, &(_, c))) = parents.get_index(index) else {
                continue;
            };
            // A node may sit in the heap several times if a cheaper way to reach it was found
            // later. Only the entry matching the best known cost is processed.
            if cost > c {
                continue;
            }
            expanded.push(node.clone());
            if success(node) {
                debug!("Reached goal after expanding {} nodes", expanded.len());
                let path = reverse_path(&parents, |&(p, _)| p, index);
                return SearchOutcome {
                    path: Some((path, cost)),
                    expanded,
                };
            }
            successors(node)
        };
        for (successor, move_cost) in successors {
            let new_cost = cost + move_cost;
            let node = successor.clone();
            let h; // heuristic(&successor)
            let n; // index for successor
            match parents.entry(successor) {
                Vacant(e) => {
                    h = heuristic(e.key());
                    n = e.index();
                    e.insert((index, new_cost));
                }
                Occupied(mut e) => {
                    if e.get().1 > new_cost {
                        h = heuristic(e.key());
                        n = e.index();
                        e.insert((index, new_cost));
                    } else {
                        continue;
                    }
                }
            }

            to_see.push(SmallestCostHolder {
                estimated_cost: new_cost + h,
                cost: new_cost,
                node,
                index: n,
            });
        }
    }
    debug!("Open set exhausted after expanding {} nodes", expanded.len());
    SearchOutcome {
        path: None,
        expanded,
    }
}
