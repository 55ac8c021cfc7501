//! In-memory document model for the greeting page.
//!
//! Nodes live in a flat arena and keep a parent link, so document order is
//! insertion order and descendant queries are a walk up the parent chain.
//! Only the handful of element kinds the page needs are modelled.

pub mod input;

use thiserror::Error;

pub use input::TextInput;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Clone, PartialEq)]
pub struct Button {
    pub label: String,
    pub disabled: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    Form,
    Heading(String),
    Label(String),
    TextInput(TextInput),
    Button(Button),
    Text(String),
}

#[derive(Debug, Clone)]
pub struct Node {
    pub id: Option<String>,
    pub parent: Option<NodeId>,
    pub kind: NodeKind,
}

#[derive(Debug, Error, PartialEq)]
pub enum DomError {
    #[error("no element matches {0}")]
    NotFound(String),
    #[error("element {0} is not a {1}")]
    WrongKind(String, &'static str),
}

/// A submit event dispatched at a form.
#[derive(Debug)]
pub struct SubmitEvent {
    target: NodeId,
    default_prevented: bool,
}

impl SubmitEvent {
    pub fn new(target: NodeId) -> Self {
        Self {
            target,
            default_prevented: false,
        }
    }

    pub fn target(&self) -> NodeId {
        self.target
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

#[derive(Debug, Clone)]
pub struct Document {
    title: String,
    nodes: Vec<Node>,
    navigations: usize,
}

impl Document {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            nodes: Vec::new(),
            navigations: 0,
        }
    }

    /// The stock greeting page: a heading, a form holding the `name` input
    /// and its submit button, and the `greeting` section after the form.
    pub fn greeter_page(title: &str) -> Self {
        let mut doc = Document::new(title);
        doc.append(None, None, NodeKind::Heading(title.to_string()));
        let form = doc.append(None, None, NodeKind::Form);
        doc.append(Some(form), None, NodeKind::Label("Enter your name: ".into()));
        doc.append(
            Some(form),
            Some("name"),
            NodeKind::TextInput(TextInput::new()),
        );
        doc.append(
            Some(form),
            None,
            NodeKind::Button(Button {
                label: "Click Me!".into(),
                disabled: false,
            }),
        );
        doc.append(None, Some("greeting"), NodeKind::Text(String::new()));
        doc
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn append(&mut self, parent: Option<NodeId>, id: Option<&str>, kind: NodeKind) -> NodeId {
        let node_id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            id: id.map(str::to_string),
            parent,
            kind,
        });
        node_id
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Nodes in document order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i), n))
    }

    pub fn query_selector_form(&self) -> Option<NodeId> {
        self.nodes()
            .find(|(_, n)| n.kind == NodeKind::Form)
            .map(|(id, _)| id)
    }

    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.nodes()
            .find(|(_, n)| n.id.as_deref() == Some(id))
            .map(|(node_id, _)| node_id)
    }

    pub fn is_descendant_of(&self, node: NodeId, ancestor: NodeId) -> bool {
        let mut cur = self.node(node).and_then(|n| n.parent);
        while let Some(p) = cur {
            if p == ancestor {
                return true;
            }
            cur = self.node(p).and_then(|n| n.parent);
        }
        false
    }

    pub fn first_button_within(&self, root: NodeId) -> Option<NodeId> {
        self.nodes()
            .find(|(id, n)| matches!(n.kind, NodeKind::Button(_)) && self.is_descendant_of(*id, root))
            .map(|(id, _)| id)
    }

    pub fn input_value(&self, id: NodeId) -> Option<&str> {
        match &self.node(id)?.kind {
            NodeKind::TextInput(input) => Some(input.text.as_str()),
            _ => None,
        }
    }

    pub fn input_mut(&mut self, id: NodeId) -> Result<&mut TextInput, DomError> {
        let node = self
            .nodes
            .get_mut(id.0)
            .ok_or_else(|| DomError::NotFound(format!("{:?}", id)))?;
        let label = describe(node, id);
        match &mut node.kind {
            NodeKind::TextInput(input) => Ok(input),
            _ => Err(DomError::WrongKind(label, "text input")),
        }
    }

    pub fn set_input_value(&mut self, id: NodeId, value: &str) -> Result<(), DomError> {
        self.input_mut(id)?.set_text(value);
        Ok(())
    }

    fn button_mut(&mut self, id: NodeId) -> Result<&mut Button, DomError> {
        let node = self
            .nodes
            .get_mut(id.0)
            .ok_or_else(|| DomError::NotFound(format!("{:?}", id)))?;
        let label = describe(node, id);
        match &mut node.kind {
            NodeKind::Button(button) => Ok(button),
            _ => Err(DomError::WrongKind(label, "button")),
        }
    }

    pub fn set_disabled(&mut self, id: NodeId, disabled: bool) -> Result<(), DomError> {
        self.button_mut(id)?.disabled = disabled;
        Ok(())
    }

    pub fn is_disabled(&self, id: NodeId) -> bool {
        matches!(
            self.node(id).map(|n| &n.kind),
            Some(NodeKind::Button(Button { disabled: true, .. }))
        )
    }

    pub fn button_label(&self, id: NodeId) -> Option<&str> {
        match &self.node(id)?.kind {
            NodeKind::Button(b) => Some(b.label.as_str()),
            _ => None,
        }
    }

    /// Replaces the node's text. Valid on text sinks, headings and labels.
    pub fn set_text_content(&mut self, id: NodeId, text: &str) -> Result<(), DomError> {
        let node = self
            .nodes
            .get_mut(id.0)
            .ok_or_else(|| DomError::NotFound(format!("{:?}", id)))?;
        let label = describe(node, id);
        match &mut node.kind {
            NodeKind::Text(s) | NodeKind::Heading(s) | NodeKind::Label(s) => {
                *s = text.to_string();
                Ok(())
            }
            _ => Err(DomError::WrongKind(label, "text element")),
        }
    }

    pub fn text_content(&self, id: NodeId) -> Option<&str> {
        match &self.node(id)?.kind {
            NodeKind::Text(s) | NodeKind::Heading(s) | NodeKind::Label(s) => Some(s.as_str()),
            NodeKind::Button(b) => Some(b.label.as_str()),
            _ => None,
        }
    }

    /// Implicit submission. A browser will not submit a form through its
    /// disabled default button, so neither do we.
    pub fn dispatch_submit(&self, form: NodeId) -> Option<SubmitEvent> {
        if let Some(button) = self.first_button_within(form) {
            if self.is_disabled(button) {
                return None;
            }
        }
        Some(SubmitEvent::new(form))
    }

    /// Runs the default action for a submit event whose handlers have
    /// finished. An unprevented submit navigates, which reloads the page.
    pub fn finish_submit(&mut self, event: &SubmitEvent) {
        if event.default_prevented() {
            return;
        }
        tracing::debug!(title = %self.title, "form submit navigated, reloading page");
        let navigations = self.navigations + 1;
        *self = Document::greeter_page(&self.title);
        self.navigations = navigations;
    }

    #[cfg(test)]
    pub fn navigations(&self) -> usize {
        self.navigations
    }
}

fn describe(node: &Node, id: NodeId) -> String {
    match &node.id {
        Some(s) => format!("#{}", s),
        None => format!("{:?}", id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeter_page_layout() {
        let doc = Document::greeter_page("doodle");
        let form = doc.query_selector_form().unwrap();
        let name = doc.get_element_by_id("name").unwrap();
        let greeting = doc.get_element_by_id("greeting").unwrap();
        let button = doc.first_button_within(form).unwrap();

        assert!(doc.is_descendant_of(name, form));
        assert!(!doc.is_descendant_of(greeting, form));
        assert_eq!(doc.button_label(button), Some("Click Me!"));
        assert_eq!(doc.input_value(name), Some(""));
        assert_eq!(doc.text_content(greeting), Some(""));
    }

    #[test]
    fn test_first_button_is_in_document_order() {
        let mut doc = Document::new("t");
        doc.append(
            None,
            None,
            NodeKind::Button(Button {
                label: "outside".into(),
                disabled: false,
            }),
        );
        let form = doc.append(None, None, NodeKind::Form);
        let first = doc.append(
            Some(form),
            None,
            NodeKind::Button(Button {
                label: "first".into(),
                disabled: false,
            }),
        );
        doc.append(
            Some(form),
            None,
            NodeKind::Button(Button {
                label: "second".into(),
                disabled: false,
            }),
        );
        assert_eq!(doc.first_button_within(form), Some(first));
    }

    #[test]
    fn test_wrong_kind_is_reported() {
        let mut doc = Document::greeter_page("t");
        let greeting = doc.get_element_by_id("greeting").unwrap();
        assert_eq!(
            doc.set_disabled(greeting, true),
            Err(DomError::WrongKind("#greeting".into(), "button"))
        );
        let name = doc.get_element_by_id("name").unwrap();
        assert!(doc.set_text_content(name, "x").is_err());
    }

    #[test]
    fn test_disabled_button_blocks_submit() {
        let mut doc = Document::greeter_page("t");
        let form = doc.query_selector_form().unwrap();
        let button = doc.first_button_within(form).unwrap();
        assert!(doc.dispatch_submit(form).is_some());

        doc.set_disabled(button, true).unwrap();
        assert!(doc.dispatch_submit(form).is_none());
    }

    #[test]
    fn test_unprevented_submit_reloads() {
        let mut doc = Document::greeter_page("t");
        let form = doc.query_selector_form().unwrap();
        let name = doc.get_element_by_id("name").unwrap();
        doc.set_input_value(name, "Ada").unwrap();

        let event = doc.dispatch_submit(form).unwrap();
        doc.finish_submit(&event);
        assert_eq!(doc.navigations(), 1);
        assert_eq!(doc.input_value(name), Some(""));
    }

    #[test]
    fn test_prevented_submit_stays() {
        let mut doc = Document::greeter_page("t");
        let form = doc.query_selector_form().unwrap();
        let name = doc.get_element_by_id("name").unwrap();
        doc.set_input_value(name, "Ada").unwrap();

        let mut event = doc.dispatch_submit(form).unwrap();
        event.prevent_default();
        doc.finish_submit(&event);
        assert_eq!(doc.navigations(), 0);
        assert_eq!(doc.input_value(name), Some("Ada"));
    }
}
