use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("city record has no identifier (label: {label:?})")]
    MissingId { label: String },
}

/// One city as extracted from the route map feed.
///
/// `neighbors` keeps the order the feed lists connections in and may name
/// cities that have no record of their own.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CityIR {
    pub id: String,
    pub label: String,
    pub neighbors: Vec<String>,
}

impl CityIR {
    pub fn new(id: &str, label: &str, neighbors: &[&str]) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            neighbors: neighbors.iter().map(|n| n.to_string()).collect(),
        }
    }

    pub fn validate(&self) -> Result<(), RecordError> {
        if self.id.trim().is_empty() {
            return Err(RecordError::MissingId {
                label: self.label.clone(),
            });
        }
        Ok(())
    }
}
