//! Dependency Graph
//!
//! This crate provides the dependency index behind a reactive recalculation
//! engine (spreadsheet formulas, build targets, incremental computations).
//! It records which nodes depend on which and answers, in constant expected
//! time, both "what depends on this node?" and "what does this node depend
//! on?".
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - `graph`: the bidirectionally indexed dependency set
//! - `config`: construction-time capacity hints
//! - `error`: the error type shared by every operation
//!
//! The graph is a plain single-threaded value. Wrap it in a lock if several
//! threads need to share it.
//!
//! # Example
//!
//! ```rust
//! use dependency_graph::DependencyGraph;
//!
//! let mut graph = DependencyGraph::new();
//!
//! // B1 and C1 read A1
//! graph.add_dependency("A1", "B1")?;
//! graph.add_dependency("A1", "C1")?;
//!
//! // B1 is re-entered as `=D1*2`
//! graph.replace_dependees("B1", ["D1"])?;
//!
//! assert_eq!(graph.size(), 2);
//! assert_eq!(graph.get_dependents("A1")?.collect::<Vec<_>>(), ["C1"]);
//! assert_eq!(graph.get_dependees("B1")?.collect::<Vec<_>>(), ["D1"]);
//!
//! // Null identifiers are rejected
//! assert!(graph.add_dependency(None::<&str>, "B1").is_err());
//! # Ok::<(), dependency_graph::GraphError>(())
//! ```

pub mod config;
pub mod error;
pub mod graph;

pub use config::GraphConfig;
pub use error::{GraphError, GraphResult};
pub use graph::{AsNode, DependencyGraph, Neighbors};
