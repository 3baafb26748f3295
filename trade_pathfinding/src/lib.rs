use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};
use std::hash::Hash;

/// A trait for graphs that can be searched.
///
/// `Node`: The type of node identifiers (e.g., a country index, or a
/// (country, mode) pair in a mode-expanded graph).
/// `Ctx`: A context object passed to cost calculations (e.g., the
/// optimization objective).
pub trait Graph<Node, Ctx> {
    /// Return the neighbors reachable from a node.
    fn neighbors(&self, node: Node, context: &Ctx) -> Vec<Node>;

    /// Calculate the weight of the edge from `from` to `to`.
    ///
    /// Weights must be non-negative; Dijkstra's invariants do not hold
    /// otherwise.
    fn cost(&self, from: Node, to: Node, context: &Ctx) -> f64;
}

/// A generic Dijkstra shortest-path searcher.
pub struct Dijkstra;

impl Dijkstra {
    /// Find the minimum-weight path from `start` to `goal`.
    ///
    /// Returns the node sequence (including both endpoints) and the
    /// accumulated weight, or `None` when `goal` is unreachable.
    pub fn find_path<Node, Ctx, G>(
        graph: &G,
        start: Node,
        goal: Node,
        context: &Ctx,
    ) -> Option<(Vec<Node>, f64)>
    where
        Node: Copy + Eq + Hash,
        G: Graph<Node, Ctx>,
    {
        let mut open_set = BinaryHeap::new();
        let mut came_from: HashMap<Node, Node> = HashMap::new();
        let mut distance: HashMap<Node, f64> = HashMap::new();
        let mut settled: HashSet<Node> = HashSet::new();

        distance.insert(start, 0.0);
        open_set.push(State {
            node: start,
            weight: 0.0,
        });

        while let Some(State { node: current, .. }) = open_set.pop() {
            // Skip if already settled with a better path
            if !settled.insert(current) {
                continue;
            }

            if current == goal {
                // Reconstruct path
                let mut path = vec![current];
                let mut curr = current;
                while let Some(&prev) = came_from.get(&curr) {
                    path.push(prev);
                    curr = prev;
                }
                path.reverse();
                return Some((path, distance[&goal]));
            }

            let current_dist = distance[&current];

            for neighbor in graph.neighbors(current, context) {
                if settled.contains(&neighbor) {
                    continue;
                }

                let tentative = current_dist + graph.cost(current, neighbor, context);

                if tentative < *distance.get(&neighbor).unwrap_or(&f64::INFINITY) {
                    came_from.insert(neighbor, current);
                    distance.insert(neighbor, tentative);
                    open_set.push(State {
                        node: neighbor,
                        weight: tentative,
                    });
                }
            }
        }

        None
    }
}

/// Helper struct for the priority queue.
#[derive(Copy, Clone)]
struct State<Node> {
    node: Node,
    weight: f64,
}

impl<Node: Eq> PartialEq for State<Node> {
    fn eq(&self, other: &Self) -> bool {
        self.node == other.node && self.weight.total_cmp(&other.weight) == Ordering::Equal
    }
}

impl<Node: Eq> Eq for State<Node> {}

// The priority queue depends on `Ord`.
// Explicitly implement the trait so the queue becomes a min-heap.
// `total_cmp` gives f64 a total order (NaN never appears for finite,
// non-negative edge weights, but the comparison stays well-defined).
impl<Node: Eq> Ord for State<Node> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.weight.total_cmp(&self.weight)
    }
}

impl<Node: Eq> PartialOrd for State<Node> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
