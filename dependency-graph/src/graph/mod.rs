//! Dependency Graph
//!
//! This module implements the edge index a recalculation engine consults to
//! find out what must be recomputed when a value changes.
//!
//! # Overview
//!
//! The graph is a set of ordered pairs `(s, t)` over string nodes, where:
//!
//! - `t` is a dependent of `s`: when `s` changes, `t` may need to update
//! - `s` is a dependee of `t`: `t` reads from `s`
//!
//! Cycles and self-loops are permitted. Ordering, cycle detection and the
//! recomputation walk itself belong to the caller.
//!
//! # Design Decisions
//!
//! 1. We maintain both forward (dependents) and reverse (dependees) indices
//!    so either direction is a single hash lookup, never a scan of all edges.
//!
//! 2. Neighbor queries hand out a borrowing iterator rather than the live
//!    set, so callers cannot bypass the add/remove/replace operations.
//!
//! 3. Every operation validates its arguments before writing, so a
//!    rejected call never leaves the indices out of sync.

mod dependency_graph;
mod neighbors;
mod node;

pub use dependency_graph::DependencyGraph;
pub use neighbors::Neighbors;
pub use node::AsNode;
