use crate::graph::{City, RouteMap};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::{VisitMap, Visitable};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One bit per city, indexed by node index.
type VisitedSet = <DiGraph<City, ()> as Visitable>::Map;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchStrategy {
    /// Depth-first backtracking with one visited set for the whole search.
    /// Returns a direct connection as soon as one is seen and otherwise the
    /// shortest route its branches found, which is not always the shortest
    /// route in the map.
    #[default]
    Backtracking,
    /// Fewest hops over the same connections.
    ShortestHops,
}

impl RouteMap {
    /// Find a route from `from_id` to `to_id` with [`SearchStrategy::Backtracking`].
    ///
    /// Returns `None` when either end is not served or nothing connects them.
    pub fn find_path(&self, from_id: &str, to_id: &str) -> Option<Vec<String>> {
        let mut visited = self.graph.visit_map();
        let path = self.search(from_id, to_id, Vec::new(), &mut visited)?;

        debug!(
            "Found {}-stop route from {} to {}, {} cities visited",
            path.len(),
            from_id,
            to_id,
            visited.count_ones(..)
        );

        Some(self.ids(&path))
    }

    pub fn find_path_with(
        &self,
        from_id: &str,
        to_id: &str,
        strategy: SearchStrategy,
    ) -> Option<Vec<String>> {
        match strategy {
            SearchStrategy::Backtracking => self.find_path(from_id, to_id),
            SearchStrategy::ShortestHops => self.find_shortest_path(from_id, to_id),
        }
    }

    /// Fewest-hop route. A city is its own route.
    pub fn find_shortest_path(&self, from_id: &str, to_id: &str) -> Option<Vec<String>> {
        let from = *self.city_to_node.get(from_id)?;
        let to = *self.city_to_node.get(to_id)?;

        let (hops, path) =
            petgraph::algo::astar(&self.graph, from, |n| n == to, |_| 1usize, |_| 0)?;

        debug!("Found {}-hop route from {} to {}", hops, from_id, to_id);
        Some(self.ids(&path))
    }

    // `visited` is shared by every branch of one search and is written before
    // sibling branches run, so an earlier branch can close off cities a later
    // one needed. `path` is copied per branch.
    fn search(
        &self,
        from_id: &str,
        to_id: &str,
        mut path: Vec<NodeIndex>,
        visited: &mut VisitedSet,
    ) -> Option<Vec<NodeIndex>> {
        let from = *self.city_to_node.get(from_id)?;
        let to = *self.city_to_node.get(to_id)?;
        let city = &self.graph[from];

        let unvisited: Vec<&String> = city
            .neighbors
            .iter()
            .filter(|id| !self.is_visited(id, visited))
            .collect();

        if unvisited.is_empty() {
            visited.visit(from);
            return None;
        }

        if city.neighbors.contains(to_id) {
            path.push(from);
            path.push(to);
            return Some(path);
        }

        visited.visit(from);
        path.push(from);

        let mut candidates = Vec::new();
        for neighbor in unvisited {
            if let Some(found) = self.search(neighbor, to_id, path.clone(), visited) {
                candidates.push(found);
            }
        }

        // min_by_key keeps the first of equally short candidates
        candidates.into_iter().min_by_key(|candidate| candidate.len())
    }

    fn is_visited(&self, id: &str, visited: &VisitedSet) -> bool {
        self.city_to_node
            .get(id)
            .is_some_and(|node| visited.is_visited(node))
    }

    fn ids(&self, path: &[NodeIndex]) -> Vec<String> {
        path.iter().map(|&node| self.graph[node].id.clone()).collect()
    }
}
