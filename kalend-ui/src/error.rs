//! Errors reported by [`Host`](crate::Host) event dispatch.

use thiserror::Error;

/// Reasons an event could not be delivered to a node.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    /// Nothing has been rendered yet.
    #[error("nothing has been rendered yet")]
    NotRendered,
    /// No node matched the query.
    #[error("no node matches {0}")]
    NotFound(String),
    /// The node is disabled and does not accept events.
    #[error("node {0} is disabled")]
    Disabled(String),
    /// The node has no handler for the event.
    #[error("node {query} has no {event} handler")]
    NoHandler {
        /// Query that located the node.
        query: String,
        /// Event name.
        event: &'static str,
    },
    /// The select does not offer the requested option.
    #[error("node {query} has no option {value:?}")]
    UnknownOption {
        /// Query that located the node.
        query: String,
        /// Requested option value.
        value: String,
    },
}
