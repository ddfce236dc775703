//! Dependency Graph Index
//!
//! `DependencyGraph` stores a set of ordered pairs `(s, t)` twice: once in a
//! forward index keyed by `s` (the dependents of `s`) and once in a backward
//! index keyed by `t` (the dependees of `t`). Every mutation updates both
//! indices before returning, so the two are always mirror images.
//!
//! # Invariants
//!
//! - `(s, t)` is in `dependents[s]` iff it is in `dependees[t]`.
//! - `size` is exactly the number of distinct pairs.
//! - No key maps to an empty set. Removal paths drop a set as soon as it
//!   becomes empty.
//! - A failed call leaves the graph unchanged. All arguments are validated
//!   before the first write.

use indexmap::{IndexMap, IndexSet};
use smallvec::SmallVec;
use tracing::{debug, trace};

use super::neighbors::Neighbors;
use super::node::{require, AsNode};
use crate::config::GraphConfig;
use crate::error::{GraphError, GraphResult};

type Index = IndexMap<String, IndexSet<String>>;

/// Replacement sequences up to this length are buffered on the stack while
/// they are validated.
const INLINE_REPLACEMENTS: usize = 8;

/// A set of dependencies `(s, t)`, indexed in both directions.
///
/// `t` is a *dependent* of `s` and `s` is a *dependee* of `t`.
///
/// # Example
///
/// ```rust
/// use dependency_graph::DependencyGraph;
///
/// let mut graph = DependencyGraph::new();
/// graph.add_dependency("a", "b").unwrap();
/// graph.add_dependency("a", "c").unwrap();
/// graph.add_dependency("b", "d").unwrap();
/// graph.add_dependency("d", "d").unwrap();
///
/// assert_eq!(graph.size(), 4);
/// let mut dependents: Vec<_> = graph.get_dependents("a").unwrap().collect();
/// dependents.sort();
/// assert_eq!(dependents, ["b", "c"]);
/// assert!(!graph.has_dependees("a").unwrap());
/// ```
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    /// Forward index: `s` to every `t` with `(s, t)` in the graph.
    dependents: Index,

    /// Backward index: `t` to every `s` with `(s, t)` in the graph.
    dependees: Index,

    /// Number of distinct dependencies.
    size: usize,

    /// Initial capacity of newly created neighbor sets.
    set_capacity: usize,
}

impl DependencyGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty graph pre-sized according to `config`.
    pub fn with_config(config: &GraphConfig) -> Self {
        Self {
            dependents: IndexMap::with_capacity(config.node_capacity),
            dependees: IndexMap::with_capacity(config.node_capacity),
            size: 0,
            set_capacity: config.set_capacity,
        }
    }

    /// The number of dependencies in the graph.
    pub fn size(&self) -> usize {
        self.size
    }

    /// True if the graph holds no dependencies.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Reports whether dependents(s) is non-empty.
    pub fn has_dependents(&self, s: impl AsNode) -> GraphResult<bool> {
        let s = require(&s, "has_dependents", "s")?;
        Ok(non_empty(&self.dependents, s))
    }

    /// Reports whether dependees(t) is non-empty.
    pub fn has_dependees(&self, t: impl AsNode) -> GraphResult<bool> {
        let t = require(&t, "has_dependees", "t")?;
        Ok(non_empty(&self.dependees, t))
    }

    /// Reports whether the dependency `(s, t)` is in the graph.
    pub fn has_dependency(&self, s: impl AsNode, t: impl AsNode) -> GraphResult<bool> {
        let s = require(&s, "has_dependency", "s")?;
        let t = require(&t, "has_dependency", "t")?;
        Ok(self.contains(s, t))
    }

    /// Enumerates dependents(s). Unknown nodes have no dependents.
    pub fn get_dependents(&self, s: impl AsNode) -> GraphResult<Neighbors<'_>> {
        let s = require(&s, "get_dependents", "s")?;
        Ok(Neighbors::new(self.dependents.get(s)))
    }

    /// Enumerates dependees(t). Unknown nodes have no dependees.
    pub fn get_dependees(&self, t: impl AsNode) -> GraphResult<Neighbors<'_>> {
        let t = require(&t, "get_dependees", "t")?;
        Ok(Neighbors::new(self.dependees.get(t)))
    }

    /// The number of dependents of `s`.
    pub fn dependents_count(&self, s: impl AsNode) -> GraphResult<usize> {
        let s = require(&s, "dependents_count", "s")?;
        Ok(self.dependents.get(s).map_or(0, IndexSet::len))
    }

    /// The number of dependees of `t`.
    pub fn dependees_count(&self, t: impl AsNode) -> GraphResult<usize> {
        let t = require(&t, "dependees_count", "t")?;
        Ok(self.dependees.get(t).map_or(0, IndexSet::len))
    }

    /// Adds the dependency `(s, t)`.
    ///
    /// Has no effect if `(s, t)` is already present.
    pub fn add_dependency(&mut self, s: impl AsNode, t: impl AsNode) -> GraphResult<()> {
        let s = require(&s, "add_dependency", "s")?;
        let t = require(&t, "add_dependency", "t")?;
        self.insert_edge(s, t);
        Ok(())
    }

    /// Removes the dependency `(s, t)`.
    ///
    /// Has no effect if `(s, t)` is not present.
    pub fn remove_dependency(&mut self, s: impl AsNode, t: impl AsNode) -> GraphResult<()> {
        let s = require(&s, "remove_dependency", "s")?;
        let t = require(&t, "remove_dependency", "t")?;
        if remove_from(&mut self.dependents, s, t) {
            remove_from(&mut self.dependees, t, s);
            self.size -= 1;
            trace!(s, t, size = self.size, "removed dependency");
        }
        Ok(())
    }

    /// Removes every dependency `(s, r)`, then adds `(s, t)` for each `t` in
    /// `new_dependents`.
    ///
    /// Every element is checked before anything is removed; a null element
    /// fails the call and leaves the graph as it was.
    pub fn replace_dependents<I>(&mut self, s: impl AsNode, new_dependents: I) -> GraphResult<()>
    where
        I: IntoIterator,
        I::Item: AsNode,
    {
        let s = require(&s, "replace_dependents", "s")?;
        let incoming = collect_nodes(new_dependents, "replace_dependents")?;

        let old = self.dependents.swap_remove(s).unwrap_or_default();
        for r in &old {
            remove_from(&mut self.dependees, r, s);
        }
        self.size -= old.len();

        let mut added = 0usize;
        for t in &incoming {
            if self.insert_edge(s, t) {
                added += 1;
            }
        }

        debug!(s, removed = old.len(), added, size = self.size, "replaced dependents");
        Ok(())
    }

    /// Removes every dependency `(r, t)`, then adds `(s, t)` for each `s` in
    /// `new_dependees`.
    ///
    /// Every element is checked before anything is removed; a null element
    /// fails the call and leaves the graph as it was.
    pub fn replace_dependees<I>(&mut self, t: impl AsNode, new_dependees: I) -> GraphResult<()>
    where
        I: IntoIterator,
        I::Item: AsNode,
    {
        let t = require(&t, "replace_dependees", "t")?;
        let incoming = collect_nodes(new_dependees, "replace_dependees")?;

        let old = self.dependees.swap_remove(t).unwrap_or_default();
        for r in &old {
            remove_from(&mut self.dependents, r, t);
        }
        self.size -= old.len();

        let mut added = 0usize;
        for s in &incoming {
            if self.insert_edge(s, t) {
                added += 1;
            }
        }

        debug!(t, removed = old.len(), added, size = self.size, "replaced dependees");
        Ok(())
    }

    fn contains(&self, s: &str, t: &str) -> bool {
        self.dependents
            .get(s)
            .is_some_and(|dependents| dependents.contains(t))
    }

    /// Insert `(s, t)` into both indices. Returns false if it was already present.
    fn insert_edge(&mut self, s: &str, t: &str) -> bool {
        if self.contains(s, t) {
            return false;
        }
        insert_into(&mut self.dependents, s, t, self.set_capacity);
        insert_into(&mut self.dependees, t, s, self.set_capacity);
        self.size += 1;
        trace!(s, t, size = self.size, "added dependency");
        true
    }
}

fn non_empty(index: &Index, key: &str) -> bool {
    index.get(key).is_some_and(|set| !set.is_empty())
}

fn insert_into(index: &mut Index, key: &str, value: &str, set_capacity: usize) {
    match index.get_mut(key) {
        Some(set) => {
            set.insert(value.to_owned());
        }
        None => {
            let mut set = IndexSet::with_capacity(set_capacity);
            set.insert(value.to_owned());
            index.insert(key.to_owned(), set);
        }
    }
}

/// Remove `value` from the set under `key`, dropping the set once it is empty.
fn remove_from(index: &mut Index, key: &str, value: &str) -> bool {
    let Some(set) = index.get_mut(key) else {
        return false;
    };
    let removed = set.swap_remove(value);
    if set.is_empty() {
        index.swap_remove(key);
    }
    removed
}

fn collect_nodes<I>(
    nodes: I,
    operation: &'static str,
) -> GraphResult<SmallVec<[String; INLINE_REPLACEMENTS]>>
where
    I: IntoIterator,
    I::Item: AsNode,
{
    nodes
        .into_iter()
        .map(|node| {
            node.as_node()
                .map(str::to_owned)
                .ok_or_else(|| GraphError::null(operation, "element"))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(neighbors: Neighbors<'_>) -> Vec<&str> {
        let mut nodes: Vec<_> = neighbors.collect();
        nodes.sort_unstable();
        nodes
    }

    /// {("a","b"), ("a","c"), ("b","d"), ("d","d")}
    fn sample() -> DependencyGraph {
        let mut graph = DependencyGraph::new();
        graph.add_dependency("a", "b").unwrap();
        graph.add_dependency("a", "c").unwrap();
        graph.add_dependency("b", "d").unwrap();
        graph.add_dependency("d", "d").unwrap();
        graph
    }

    #[test]
    fn empty_graph() {
        let graph = DependencyGraph::new();
        assert_eq!(graph.size(), 0);
        assert!(graph.is_empty());
        assert!(!graph.has_dependents("x").unwrap());
        assert!(!graph.has_dependees("x").unwrap());
        assert_eq!(graph.get_dependents("x").unwrap().count(), 0);
        assert_eq!(graph.get_dependees("x").unwrap().count(), 0);
    }

    #[test]
    fn sample_graph_queries() {
        let graph = sample();
        assert_eq!(graph.size(), 4);
        assert_eq!(sorted(graph.get_dependents("a").unwrap()), ["b", "c"]);
        assert_eq!(sorted(graph.get_dependents("b").unwrap()), ["d"]);
        assert!(graph.get_dependents("c").unwrap().next().is_none());
        assert_eq!(sorted(graph.get_dependents("d").unwrap()), ["d"]);
        assert!(graph.get_dependees("a").unwrap().next().is_none());
        assert_eq!(sorted(graph.get_dependees("b").unwrap()), ["a"]);
        assert_eq!(sorted(graph.get_dependees("c").unwrap()), ["a"]);
        assert_eq!(sorted(graph.get_dependees("d").unwrap()), ["b", "d"]);

        assert!(graph.has_dependents("a").unwrap());
        assert!(!graph.has_dependents("c").unwrap());
        assert!(!graph.has_dependees("a").unwrap());
        assert!(graph.has_dependees("d").unwrap());
    }

    #[test]
    fn duplicate_add_is_noop() {
        let mut graph = DependencyGraph::new();
        graph.add_dependency("x", "y").unwrap();
        graph.add_dependency("x", "y").unwrap();
        assert_eq!(graph.size(), 1);
        assert_eq!(graph.dependents_count("x").unwrap(), 1);
        assert_eq!(graph.dependees_count("y").unwrap(), 1);
    }

    #[test]
    fn self_loop_counts_once() {
        let mut graph = DependencyGraph::new();
        graph.add_dependency("d", "d").unwrap();
        assert_eq!(graph.size(), 1);
        assert!(graph.has_dependents("d").unwrap());
        assert!(graph.has_dependees("d").unwrap());

        graph.remove_dependency("d", "d").unwrap();
        assert!(graph.is_empty());
        assert!(!graph.has_dependents("d").unwrap());
        assert!(!graph.has_dependees("d").unwrap());
    }

    #[test]
    fn remove_drops_empty_sets() {
        let mut graph = sample();
        graph.remove_dependency("b", "d").unwrap();
        assert_eq!(graph.size(), 3);
        assert!(!graph.dependents.contains_key("b"));
        assert_eq!(sorted(graph.get_dependees("d").unwrap()), ["d"]);

        graph.remove_dependency("d", "d").unwrap();
        assert!(!graph.dependents.contains_key("d"));
        assert!(!graph.dependees.contains_key("d"));
        assert_eq!(graph.get_dependees("d").unwrap().count(), 0);
    }

    #[test]
    fn remove_absent_is_noop() {
        let mut graph = sample();
        graph.remove_dependency("a", "d").unwrap();
        graph.remove_dependency("zz", "a").unwrap();
        graph.remove_dependency("c", "a").unwrap();
        assert_eq!(graph.size(), 4);
    }

    #[test]
    fn remove_restores_previous_state() {
        let mut graph = sample();
        graph.add_dependency("c", "a").unwrap();
        graph.remove_dependency("c", "a").unwrap();
        assert_eq!(graph.size(), 4);
        assert!(!graph.has_dependents("c").unwrap());
        assert!(!graph.has_dependees("a").unwrap());
    }

    #[test]
    fn replace_dependents_collapses_duplicates() {
        let mut graph = sample();
        graph.replace_dependents("a", ["x", "y", "x"]).unwrap();
        assert_eq!(graph.size(), 4);
        assert_eq!(sorted(graph.get_dependents("a").unwrap()), ["x", "y"]);
        assert!(!graph.has_dependees("b").unwrap());
        assert!(!graph.has_dependees("c").unwrap());
        assert_eq!(sorted(graph.get_dependees("x").unwrap()), ["a"]);
    }

    #[test]
    fn replace_dependents_with_empty_clears() {
        let mut graph = sample();
        graph.replace_dependents("a", Vec::<String>::new()).unwrap();
        assert_eq!(graph.size(), 2);
        assert!(!graph.has_dependents("a").unwrap());
        assert!(!graph.dependees.contains_key("c"));
    }

    #[test]
    fn replace_dependents_keeps_overlap() {
        let mut graph = sample();
        graph.replace_dependents("a", ["c", "e"]).unwrap();
        assert_eq!(graph.size(), 4);
        assert_eq!(sorted(graph.get_dependents("a").unwrap()), ["c", "e"]);
        assert_eq!(sorted(graph.get_dependees("c").unwrap()), ["a"]);
    }

    #[test]
    fn replace_dependees_on_unknown_node() {
        let mut graph = sample();
        graph.replace_dependees("q", vec!["a", "b"]).unwrap();
        assert_eq!(graph.size(), 6);
        assert_eq!(sorted(graph.get_dependees("q").unwrap()), ["a", "b"]);
        assert_eq!(sorted(graph.get_dependents("b").unwrap()), ["d", "q"]);
    }

    #[test]
    fn replace_dependees_with_self_loop() {
        let mut graph = sample();
        graph.replace_dependees("d", ["a"]).unwrap();
        assert_eq!(graph.size(), 3);
        assert_eq!(sorted(graph.get_dependees("d").unwrap()), ["a"]);
        assert!(!graph.has_dependents("b").unwrap());
        assert_eq!(sorted(graph.get_dependents("a").unwrap()), ["b", "c", "d"]);
    }

    #[test]
    fn null_arguments_are_rejected() {
        let mut graph = sample();
        let null = None::<&str>;

        assert!(graph.has_dependents(null).unwrap_err().is_invalid_argument());
        assert!(graph.has_dependees(null).is_err());
        assert!(graph.get_dependents(null).is_err());
        assert!(graph.get_dependees(null).is_err());
        assert!(graph.add_dependency(null, "a").is_err());
        assert!(graph.add_dependency("a", null).is_err());
        assert!(graph.remove_dependency("a", null).is_err());
        assert!(graph.replace_dependents(null, ["a"]).is_err());
        assert!(graph.replace_dependees(null, ["a"]).is_err());

        assert_eq!(graph.size(), 4);
    }

    #[test]
    fn null_element_leaves_graph_untouched() {
        let mut graph = sample();
        let err = graph
            .replace_dependents("a", [Some("x"), None, Some("y")])
            .unwrap_err();
        assert_eq!(
            err,
            GraphError::InvalidArgument {
                operation: "replace_dependents",
                parameter: "element",
            }
        );
        assert_eq!(graph.size(), 4);
        assert_eq!(sorted(graph.get_dependents("a").unwrap()), ["b", "c"]);

        assert!(graph.replace_dependees("d", [None::<&str>]).is_err());
        assert_eq!(sorted(graph.get_dependees("d").unwrap()), ["b", "d"]);
    }

    #[test]
    fn with_config_starts_empty() {
        let config = GraphConfig::default()
            .with_node_capacity(64)
            .with_set_capacity(4);
        let mut graph = DependencyGraph::with_config(&config);
        assert!(graph.is_empty());
        graph.add_dependency("a", "b").unwrap();
        assert!(graph.has_dependency("a", "b").unwrap());
        assert!(!graph.has_dependency("b", "a").unwrap());
    }
}
