//! View tree emitted by components during a build pass.
//!
//! ## Usage
//!
//! Components call [`element`] for nodes with children and [`leaf`] for nodes
//! without. Hosts and tests read the resulting [`Node`] tree.

use std::{cell::RefCell, fmt};

use crate::{
    prop::{Callback, CallbackWith},
    runtime::ensure_build_phase,
};

thread_local! {
    /// Children collected for every element that is currently being built.
    static BUILD_STACK: RefCell<Vec<Vec<Node>>> = const { RefCell::new(Vec::new()) };
}

/// Kind of element a node represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ElementKind {
    /// Generic layout container.
    #[default]
    Container,
    /// Section heading.
    Heading,
    /// Clickable button.
    Button,
    /// Single-choice select.
    Select,
    /// Inline text.
    Text,
}

/// Static accessibility role attached to a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Two-dimensional grid of cells.
    Grid,
    /// Header cell of a grid column.
    ColumnHeader,
    /// Cell of a grid.
    GridCell,
}

/// One option offered by a select node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    /// Value reported to the change handler.
    pub value: String,
    /// Text shown to the user.
    pub label: String,
}

impl SelectOption {
    /// Creates an option.
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// A node of the view tree.
#[derive(Debug, Clone, Default)]
pub struct Node {
    /// Element kind.
    pub kind: ElementKind,
    /// Composed class string.
    pub class: String,
    /// Accessible label.
    pub label: Option<String>,
    /// Accessibility role.
    pub role: Option<Role>,
    /// Text content of the node itself.
    pub text: Option<String>,
    /// Whether the node rejects events.
    pub disabled: bool,
    /// `aria-selected` state.
    pub aria_selected: Option<bool>,
    /// `aria-disabled` state.
    pub aria_disabled: Option<bool>,
    /// Currently selected option value of a select.
    pub value: Option<String>,
    /// Options of a select.
    pub options: Vec<SelectOption>,
    /// Click handler.
    pub on_click: Option<Callback>,
    /// Change handler receiving the chosen option value.
    pub on_change: Option<CallbackWith<String>>,
    /// Child nodes in render order.
    pub children: Vec<Node>,
}

impl Node {
    /// Creates a node of the given kind.
    pub fn new(kind: ElementKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    /// Creates a container node.
    pub fn container() -> Self {
        Self::new(ElementKind::Container)
    }

    /// Creates a button node.
    pub fn button() -> Self {
        Self::new(ElementKind::Button)
    }

    /// Creates a heading node with text.
    pub fn heading(text: impl Into<String>) -> Self {
        Self::new(ElementKind::Heading).text(text)
    }

    /// Creates a select node.
    pub fn select() -> Self {
        Self::new(ElementKind::Select)
    }

    /// Creates an inline text node.
    pub fn inline(text: impl Into<String>) -> Self {
        Self::new(ElementKind::Text).text(text)
    }

    /// Sets the class string.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    /// Sets the accessible label.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sets the accessibility role.
    pub fn role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }

    /// Sets the text content.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Sets the disabled flag.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Sets `aria-selected`.
    pub fn aria_selected(mut self, selected: bool) -> Self {
        self.aria_selected = Some(selected);
        self
    }

    /// Sets `aria-disabled`.
    pub fn aria_disabled(mut self, disabled: bool) -> Self {
        self.aria_disabled = Some(disabled);
        self
    }

    /// Sets the current value of a select.
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Sets the options of a select.
    pub fn options(mut self, options: Vec<SelectOption>) -> Self {
        self.options = options;
        self
    }

    /// Sets the click handler.
    pub fn on_click(mut self, handler: impl Into<Callback>) -> Self {
        self.on_click = Some(handler.into());
        self
    }

    /// Sets the change handler.
    pub fn on_change(mut self, handler: impl Into<CallbackWith<String>>) -> Self {
        self.on_change = Some(handler.into());
        self
    }

    /// Iterates over this node and all of its descendants, depth first.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }

    /// Returns the first node, depth first, matching the predicate.
    pub fn find(&self, predicate: impl Fn(&Node) -> bool) -> Option<&Node> {
        self.descendants().find(|node| predicate(node))
    }

    /// Returns every node, depth first, matching the predicate.
    pub fn find_all(&self, predicate: impl Fn(&Node) -> bool) -> Vec<&Node> {
        self.descendants().filter(|node| predicate(node)).collect()
    }

    /// Returns the first node carrying the given accessible label.
    pub fn find_by_label(&self, label: &str) -> Option<&Node> {
        self.find(|node| node.label.as_deref() == Some(label))
    }

    /// Returns every node with the given role.
    pub fn find_all_by_role(&self, role: Role) -> Vec<&Node> {
        self.find_all(|node| node.role == Some(role))
    }

    /// Concatenates the text of this node and its descendants.
    pub fn text_content(&self) -> String {
        self.descendants()
            .filter_map(|node| node.text.as_deref())
            .collect()
    }

    /// Returns true when the class string contains `class` as a whole token.
    pub fn has_class(&self, class: &str) -> bool {
        self.class.split_whitespace().any(|token| token == class)
    }
}

/// Depth-first iterator over a node and its descendants.
pub struct Descendants<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn write_node(node: &Node, depth: usize, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{:indent$}{:?}", "", node.kind, indent = depth * 2)?;
            if let Some(label) = &node.label {
                write!(f, " [{label}]")?;
            }
            if let Some(text) = &node.text {
                write!(f, " {text:?}")?;
            }
            if let Some(value) = &node.value {
                write!(f, " = {value}")?;
            }
            if node.aria_selected == Some(true) {
                f.write_str(" (selected)")?;
            }
            if node.disabled {
                f.write_str(" (disabled)")?;
            }
            writeln!(f)?;
            for child in &node.children {
                write_node(child, depth + 1, f)?;
            }
            Ok(())
        }
        write_node(self, 0, f)
    }
}

/// Emits `node` into the current build scope, collecting the nodes emitted by
/// `children` as its children.
pub fn element(mut node: Node, children: impl FnOnce()) {
    ensure_build_phase();
    BUILD_STACK.with(|stack| stack.borrow_mut().push(Vec::new()));
    children();
    node.children = BUILD_STACK.with(|stack| stack.borrow_mut().pop().unwrap_or_default());
    push_node(node);
}

/// Emits a node without children into the current build scope.
pub fn leaf(node: Node) {
    ensure_build_phase();
    push_node(node);
}

fn push_node(node: Node) {
    BUILD_STACK.with(|stack| {
        if let Some(parent) = stack.borrow_mut().last_mut() {
            parent.push(node);
        }
    });
}

/// Collects every node emitted by `build` into a single root.
pub(crate) fn collect_root(build: impl FnOnce()) -> Node {
    BUILD_STACK.with(|stack| stack.borrow_mut().push(Vec::new()));
    build();
    let mut nodes = BUILD_STACK.with(|stack| stack.borrow_mut().pop().unwrap_or_default());
    if nodes.len() == 1
        && let Some(root) = nodes.pop()
    {
        return root;
    }
    Node {
        children: nodes,
        ..Node::container()
    }
}
