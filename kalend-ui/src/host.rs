//! Headless host that drives build passes and dispatches events.

use std::{fmt, sync::Arc};

use parking_lot::RwLock;
use tracing::{debug, instrument, trace};

use crate::{
    error::DispatchError,
    node::{Node, Role, collect_root},
    runtime::{RuntimePhase, SlotTable, begin_pass, push_phase},
};

/// Locates a node in the rendered tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeQuery {
    /// First node with this accessible label.
    Label(String),
    /// First node whose own text equals this string.
    Text(String),
    /// The `index`-th node (zero based) with the role.
    Role(Role, usize),
}

impl NodeQuery {
    /// Matches by accessible label.
    pub fn label(label: impl Into<String>) -> Self {
        Self::Label(label.into())
    }

    /// Matches by exact text.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Matches the `index`-th node with `role`.
    pub fn role(role: Role, index: usize) -> Self {
        Self::Role(role, index)
    }

    /// Resolves the query against a tree.
    pub fn resolve<'a>(&self, root: &'a Node) -> Option<&'a Node> {
        match self {
            Self::Label(label) => root.find_by_label(label),
            Self::Text(text) => root.find(|node| node.text.as_deref() == Some(text.as_str())),
            Self::Role(role, index) => root.find_all_by_role(*role).get(*index).copied(),
        }
    }
}

impl fmt::Display for NodeQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Label(label) => write!(f, "label {label:?}"),
            Self::Text(text) => write!(f, "text {text:?}"),
            Self::Role(role, index) => write!(f, "{role:?} #{index}"),
        }
    }
}

/// Runs a root component, keeps its memoized state between build passes and
/// delivers events to the rendered tree.
///
/// # Examples
///
/// ```
/// use kalend_ui::{Callback, Host, Node, NodeQuery, component, leaf, remember};
///
/// let mut host = Host::new(|| {
///     component("counter", || {
///         let count = remember(|| 0u32);
///         let label = count.get().to_string();
///         let handle = count.clone();
///         leaf(
///             Node::button()
///                 .label("Increment")
///                 .text(label)
///                 .on_click(Callback::new(move || handle.with_mut(|c| *c += 1))),
///         );
///     });
/// });
///
/// assert_eq!(host.render().text_content(), "0");
/// host.click(&NodeQuery::label("Increment")).unwrap();
/// assert_eq!(host.render().text_content(), "1");
/// ```
pub struct Host {
    root: Box<dyn Fn()>,
    slots: Arc<RwLock<SlotTable>>,
    tree: Option<Node>,
}

impl Host {
    /// Creates a host for the given root component.
    pub fn new(root: impl Fn() + 'static) -> Self {
        Self {
            root: Box::new(root),
            slots: Arc::new(RwLock::new(SlotTable::default())),
            tree: None,
        }
    }

    /// Runs one build pass and returns the rendered tree.
    #[instrument(level = "trace", skip(self))]
    pub fn render(&mut self) -> &Node {
        let tree = {
            let _pass = begin_pass(Arc::clone(&self.slots));
            collect_root(|| (self.root)())
        };
        let mut slots = self.slots.write();
        slots.recycle();
        trace!(live_slots = slots.len(), "build pass finished");
        drop(slots);
        self.tree.insert(tree)
    }

    /// Returns the tree produced by the last build pass.
    pub fn tree(&self) -> Option<&Node> {
        self.tree.as_ref()
    }

    fn locate(&self, query: &NodeQuery) -> Result<&Node, DispatchError> {
        let tree = self.tree.as_ref().ok_or(DispatchError::NotRendered)?;
        let node = query
            .resolve(tree)
            .ok_or_else(|| DispatchError::NotFound(query.to_string()))?;
        if node.disabled {
            return Err(DispatchError::Disabled(query.to_string()));
        }
        Ok(node)
    }

    /// Clicks the node matched by `query`.
    #[instrument(level = "debug", skip(self, query), fields(query = %query))]
    pub fn click(&self, query: &NodeQuery) -> Result<(), DispatchError> {
        let node = self.locate(query)?;
        let handler = node.on_click.clone().ok_or_else(|| DispatchError::NoHandler {
            query: query.to_string(),
            event: "click",
        })?;
        let _phase = push_phase(RuntimePhase::Input);
        debug!("dispatching click");
        handler.call();
        Ok(())
    }

    /// Chooses option `value` on the select matched by `query`.
    #[instrument(level = "debug", skip(self, query), fields(query = %query))]
    pub fn select(&self, query: &NodeQuery, value: &str) -> Result<(), DispatchError> {
        let node = self.locate(query)?;
        let handler = node.on_change.clone().ok_or_else(|| DispatchError::NoHandler {
            query: query.to_string(),
            event: "change",
        })?;
        if !node.options.iter().any(|option| option.value == value) {
            return Err(DispatchError::UnknownOption {
                query: query.to_string(),
                value: value.to_string(),
            });
        }
        let _phase = push_phase(RuntimePhase::Input);
        debug!(value, "dispatching change");
        handler.call(value.to_string());
        Ok(())
    }
}
