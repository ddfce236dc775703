//! Graph Configuration
//!
//! Construction-time capacity hints. Neither setting changes behavior; they
//! only pre-size the two indices so that large graphs built in one pass avoid
//! repeated rehashing.
//!
//! # Example
//!
//! ```rust
//! use dependency_graph::{DependencyGraph, GraphConfig};
//!
//! let config = GraphConfig::from_json(r#"{ "node_capacity": 1024 }"#).unwrap();
//! let graph = DependencyGraph::with_config(&config);
//! assert!(graph.is_empty());
//! ```

use serde::{Deserialize, Serialize};

/// Capacity hints used when creating a [`DependencyGraph`](crate::DependencyGraph).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Initial capacity of the dependents and dependees indices.
    pub node_capacity: usize,

    /// Initial capacity of every per-node neighbor set created by an insert.
    pub set_capacity: usize,
}

impl GraphConfig {
    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize this configuration to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Set the initial capacity of the two indices.
    pub fn with_node_capacity(mut self, capacity: usize) -> Self {
        self.node_capacity = capacity;
        self
    }

    /// Set the initial capacity of newly created neighbor sets.
    pub fn with_set_capacity(mut self, capacity: usize) -> Self {
        self.set_capacity = capacity;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_use_defaults() {
        let config = GraphConfig::from_json(r#"{ "set_capacity": 4 }"#).unwrap();
        assert_eq!(config.node_capacity, 0);
        assert_eq!(config.set_capacity, 4);

        let empty = GraphConfig::from_json("{}").unwrap();
        assert_eq!(empty, GraphConfig::default());
    }

    #[test]
    fn json_round_trip() {
        let config = GraphConfig::default()
            .with_node_capacity(128)
            .with_set_capacity(8);
        let json = config.to_json().unwrap();
        assert_eq!(GraphConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(GraphConfig::from_json(r#"{ "node_capacity": "lots" }"#).is_err());
    }
}
