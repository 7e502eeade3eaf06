pub mod graph;
pub mod search;

pub use graph::{City, RouteMap, RouteMapStats};
pub use search::SearchStrategy;
