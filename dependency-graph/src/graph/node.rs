//! Node Identifiers
//!
//! Nodes are plain strings. They are never created or destroyed explicitly:
//! a node exists exactly as long as it is an endpoint of at least one edge.
//!
//! Callers that hold possibly-missing identifiers pass them as `Option`s;
//! `None` is the null identifier and every graph operation rejects it with
//! [`GraphError::InvalidArgument`](crate::GraphError::InvalidArgument).

use std::borrow::Cow;
use std::rc::Rc;
use std::sync::Arc;

use crate::error::{GraphError, GraphResult};

/// A value that can be used as a node identifier.
///
/// Implemented for the usual string types, for references to them, and for
/// `Option<T>` so that a null identifier can be represented.
pub trait AsNode {
    /// The identifier as a string slice, or `None` for the null identifier.
    fn as_node(&self) -> Option<&str>;
}

impl AsNode for str {
    fn as_node(&self) -> Option<&str> {
        Some(self)
    }
}

impl AsNode for String {
    fn as_node(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl AsNode for Cow<'_, str> {
    fn as_node(&self) -> Option<&str> {
        Some(&**self)
    }
}

impl AsNode for Box<str> {
    fn as_node(&self) -> Option<&str> {
        Some(&**self)
    }
}

impl AsNode for Rc<str> {
    fn as_node(&self) -> Option<&str> {
        Some(&**self)
    }
}

impl AsNode for Arc<str> {
    fn as_node(&self) -> Option<&str> {
        Some(&**self)
    }
}

impl<T: AsNode + ?Sized> AsNode for &T {
    fn as_node(&self) -> Option<&str> {
        (**self).as_node()
    }
}

impl<T: AsNode> AsNode for Option<T> {
    fn as_node(&self) -> Option<&str> {
        self.as_ref()?.as_node()
    }
}

/// Resolve a node argument, failing with `InvalidArgument` if it is null.
pub(crate) fn require<'a, N>(
    node: &'a N,
    operation: &'static str,
    parameter: &'static str,
) -> GraphResult<&'a str>
where
    N: AsNode + ?Sized,
{
    node.as_node()
        .ok_or_else(|| GraphError::null(operation, parameter))
}
