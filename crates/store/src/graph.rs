use indexmap::{IndexMap, IndexSet};
use petgraph::graph::{DiGraph, NodeIndex};
use protocol::CityIR;
use serde::Serialize;
use tracing::{debug, info, warn};

/// A served city and the connections its record lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct City {
    pub id: String,
    pub label: String,
    /// Listed neighbor ids in feed order. May include unserved ids.
    pub neighbors: IndexSet<String>,
}

impl City {
    pub fn display_name(&self) -> String {
        format!("{} ({})", self.label, self.id)
    }
}

impl From<&CityIR> for City {
    fn from(record: &CityIR) -> Self {
        Self {
            id: record.id.clone(),
            label: record.label.clone(),
            neighbors: record.neighbors.iter().cloned().collect(),
        }
    }
}

/// In-memory route map. Read-only once built.
///
/// Cities own nothing of each other: a connection is an edge between node
/// indices, and a city's `neighbors` are resolved through `city_to_node`.
#[derive(Debug, Default)]
pub struct RouteMap {
    pub(crate) graph: DiGraph<City, ()>,
    pub(crate) city_to_node: IndexMap<String, NodeIndex>,
    unserved: IndexSet<String>,
}

impl RouteMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the map from feed records.
    ///
    /// Records with a blank id are skipped. A repeated id replaces the
    /// earlier record but keeps its position. Neighbor ids without a record
    /// end up in [`RouteMap::unserved`].
    pub fn build(records: &[CityIR]) -> Self {
        let mut map = Self::new();

        for record in records {
            if let Err(e) = record.validate() {
                warn!("Skipping city record: {}", e);
                continue;
            }
            map.add_city(record);
        }

        map.link_neighbors();

        info!(
            "Built route map with {} cities, {} connections, {} unserved airports",
            map.graph.node_count(),
            map.graph.edge_count(),
            map.unserved.len()
        );

        map
    }

    fn add_city(&mut self, record: &CityIR) -> NodeIndex {
        let city = City::from(record);

        if let Some(&node) = self.city_to_node.get(&record.id) {
            warn!("Duplicate city {}, replacing earlier record", record.id);
            self.graph[node] = city;
            return node;
        }

        let node = self.graph.add_node(city);
        self.city_to_node.insert(record.id.clone(), node);
        node
    }

    fn link_neighbors(&mut self) {
        let mut connections = Vec::new();

        for node in self.graph.node_indices() {
            for neighbor in &self.graph[node].neighbors {
                match self.city_to_node.get(neighbor) {
                    Some(&target) => connections.push((node, target)),
                    None => {
                        if self.unserved.insert(neighbor.clone()) {
                            debug!("{} lists unserved airport {}", self.graph[node].id, neighbor);
                        }
                    }
                }
            }
        }

        for (from, to) in connections {
            self.graph.add_edge(from, to, ());
        }
    }

    pub fn city(&self, id: &str) -> Option<&City> {
        self.city_to_node.get(id).map(|&node| &self.graph[node])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.city_to_node.contains_key(id)
    }

    /// Cities in the order they first appeared in the feed.
    pub fn cities(&self) -> impl Iterator<Item = &City> + '_ {
        self.city_to_node.values().map(move |&node| &self.graph[node])
    }

    /// Ids listed as neighbors that have no city record, by first appearance.
    pub fn unserved(&self) -> &IndexSet<String> {
        &self.unserved
    }

    /// Whether `from` lists `to` and both are served.
    pub fn is_connected(&self, from: &str, to: &str) -> bool {
        match (self.city_to_node.get(from), self.city_to_node.get(to)) {
            (Some(&a), Some(&b)) => self.graph.contains_edge(a, b),
            _ => false,
        }
    }

    pub fn len(&self) -> usize {
        self.graph.node_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    pub fn stats(&self) -> RouteMapStats {
        RouteMapStats {
            city_count: self.graph.node_count(),
            connection_count: self.graph.edge_count(),
            unserved_count: self.unserved.len(),
            component_count: petgraph::algo::connected_components(&self.graph),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteMapStats {
    pub city_count: usize,
    pub connection_count: usize,
    pub unserved_count: usize,
    /// Groups of cities linked by connections in either direction.
    pub component_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ids<'a>(map: &'a RouteMap) -> Vec<&'a str> {
        map.cities().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn test_build_route_map() {
        let records = vec![
            CityIR::new("GDN", "Gdansk", &["LTN", "BVA"]),
            CityIR::new("LTN", "London Luton", &["GDN"]),
            CityIR::new("BVA", "Paris Beauvais", &["GDN"]),
        ];

        let map = RouteMap::build(&records);

        let stats = map.stats();
        assert_eq!(stats.city_count, 3);
        assert_eq!(stats.connection_count, 4);
        assert_eq!(stats.unserved_count, 0);
        assert_eq!(stats.component_count, 1);
        assert_eq!(ids(&map), vec!["GDN", "LTN", "BVA"]);
        assert!(map.is_connected("GDN", "BVA"));
        assert!(map.is_connected("BVA", "GDN"));
        assert!(!map.is_connected("LTN", "BVA"));
    }

    #[test]
    fn test_empty_route_map() {
        let map = RouteMap::build(&[]);

        assert!(map.is_empty());
        assert_eq!(
            map.stats(),
            RouteMapStats {
                city_count: 0,
                connection_count: 0,
                unserved_count: 0,
                component_count: 0,
            }
        );
        assert!(map.city("GDN").is_none());
    }

    #[test]
    fn test_unserved_airports_are_collected() {
        let records = vec![
            CityIR::new("A", "Alpha", &["B", "Z"]),
            CityIR::new("B", "Bravo", &["A", "Y", "Z"]),
        ];

        let map = RouteMap::build(&records);

        let unserved: Vec<&str> = map.unserved().iter().map(|s| s.as_str()).collect();
        assert_eq!(unserved, vec!["Z", "Y"]);
        assert_eq!(map.stats().connection_count, 2);
        assert!(!map.contains("Z"));
        assert!(!map.is_connected("A", "Z"));
        // The listing is kept even though it cannot be followed.
        assert!(map.city("A").unwrap().neighbors.contains("Z"));
    }

    #[test]
    fn test_duplicate_id_last_record_wins() {
        let records = vec![
            CityIR::new("A", "Old Alpha", &["B"]),
            CityIR::new("B", "Bravo", &["A"]),
            CityIR::new("A", "New Alpha", &["C"]),
            CityIR::new("C", "Charlie", &[]),
        ];

        let map = RouteMap::build(&records);

        assert_eq!(map.len(), 3);
        assert_eq!(ids(&map), vec!["A", "B", "C"]);

        let alpha = map.city("A").unwrap();
        assert_eq!(alpha.label, "New Alpha");
        assert!(map.is_connected("A", "C"));
        assert!(!map.is_connected("A", "B"));
        assert!(map.is_connected("B", "A"));
    }

    #[test]
    fn test_blank_ids_are_skipped() {
        let records = vec![
            CityIR::new("", "Ghost", &["A"]),
            CityIR::new("A", "Alpha", &[""]),
        ];

        let map = RouteMap::build(&records);

        assert_eq!(ids(&map), vec!["A"]);
        assert!(map.city("").is_none());
        assert_eq!(map.unserved().len(), 1);
        assert!(map.unserved().contains(""));
    }

    #[test]
    fn test_ids_are_case_sensitive() {
        let records = vec![
            CityIR::new("abc", "Lower", &["ABC"]),
            CityIR::new("ABC", "Upper", &[]),
        ];

        let map = RouteMap::build(&records);

        assert_eq!(map.len(), 2);
        assert!(map.is_connected("abc", "ABC"));
        assert!(!map.is_connected("ABC", "abc"));
        assert_eq!(map.city("abc").unwrap().label, "Lower");
    }

    #[test]
    fn test_repeated_neighbor_listing_is_collapsed() {
        let records = vec![
            CityIR::new("A", "Alpha", &["B", "B", "B"]),
            CityIR::new("B", "Bravo", &[]),
        ];

        let map = RouteMap::build(&records);

        assert_eq!(map.city("A").unwrap().neighbors.len(), 1);
        assert_eq!(map.stats().connection_count, 1);
    }

    #[test]
    fn test_disconnected_components() {
        let records = vec![
            CityIR::new("A", "Alpha", &["B"]),
            CityIR::new("B", "Bravo", &[]),
            CityIR::new("X", "X-ray", &["Y"]),
            CityIR::new("Y", "Yankee", &["X"]),
            CityIR::new("L", "Lonely", &[]),
        ];

        let map = RouteMap::build(&records);

        assert_eq!(map.stats().component_count, 3);
    }

    #[test]
    fn test_display_name() {
        let map = RouteMap::build(&[CityIR::new("GDN", "Gdansk", &[])]);
        assert_eq!(map.city("GDN").unwrap().display_name(), "Gdansk (GDN)");
    }
}
