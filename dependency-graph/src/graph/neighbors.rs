//! Neighbor iteration.

use std::iter::FusedIterator;

use indexmap::{set, IndexSet};

/// Iterator over the dependents or dependees of a single node.
///
/// Borrows the graph immutably, so the graph cannot be mutated while the
/// iterator is alive. A clone continues independently from the same
/// position; calling the accessor again starts over.
#[derive(Debug, Clone)]
pub struct Neighbors<'a> {
    inner: Option<set::Iter<'a, String>>,
}

impl<'a> Neighbors<'a> {
    pub(crate) fn new(nodes: Option<&'a IndexSet<String>>) -> Self {
        Self {
            inner: nodes.map(IndexSet::iter),
        }
    }

    /// An iterator over no nodes.
    pub fn empty() -> Self {
        Self { inner: None }
    }
}

impl<'a> Iterator for Neighbors<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.as_mut()?.next().map(String::as_str)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.inner {
            Some(iter) => iter.size_hint(),
            None => (0, Some(0)),
        }
    }
}

impl DoubleEndedIterator for Neighbors<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.as_mut()?.next_back().map(String::as_str)
    }
}

impl ExactSizeIterator for Neighbors<'_> {}

impl FusedIterator for Neighbors<'_> {}

impl Default for Neighbors<'_> {
    fn default() -> Self {
        Self::empty()
    }
}
