use docsite_traits::{Dom, DomAction, DomError, DomEvent, ScrollBehavior};
use indexmap::IndexMap;
use std::collections::HashMap;
use std::fmt;

/// Handle to an element in an [`InMemoryDocument`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone)]
struct ElementData {
    tag: String,
    attributes: IndexMap<String, String>,
    style: IndexMap<String, String>,
    /// Leading text run; children follow it.
    text: String,
    children: Vec<NodeId>,
    parent: Option<NodeId>,
    listeners: Vec<(DomEvent, DomAction<NodeId>)>,
}

impl ElementData {
    fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            attributes: IndexMap::new(),
            style: IndexMap::new(),
            text: String::new(),
            children: Vec::new(),
            parent: None,
            listeners: Vec::new(),
        }
    }
}

/// An arena-backed HTML document rooted at a `body` element.
///
/// Elements created with [`Dom::create_element`] stay detached, and invisible
/// to lookups, until they are appended somewhere under the body.
#[derive(Debug, Clone)]
pub struct InMemoryDocument {
    elements: Vec<ElementData>,
    body: NodeId,
    /// Scroll heights of pages a frame may load, keyed by frame `src`.
    page_heights: HashMap<String, u32>,
    scrolls: Vec<(NodeId, ScrollBehavior)>,
}

impl Default for InMemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryDocument {
    pub fn new() -> Self {
        Self {
            elements: vec![ElementData::new("body")],
            body: NodeId(0),
            page_heights: HashMap::new(),
            scrolls: Vec::new(),
        }
    }

    pub fn body(&self) -> NodeId {
        self.body
    }

    // --- Construction helpers ---

    /// Appends a new element under `parent` and returns it.
    pub fn append_element(&mut self, parent: NodeId, tag: &str) -> NodeId {
        let child = self.alloc(tag);
        self.attach(parent, child);
        child
    }

    /// Appends a new element with an `id` attribute.
    pub fn append_with_id(&mut self, parent: NodeId, tag: &str, id: &str) -> NodeId {
        let child = self.append_element(parent, tag);
        self.elements[child.0].attributes.insert("id".to_string(), id.to_string());
        child
    }

    /// Appends a new element holding a single run of text.
    pub fn append_text_element(&mut self, parent: NodeId, tag: &str, text: &str) -> NodeId {
        let child = self.append_element(parent, tag);
        self.elements[child.0].text = text.to_string();
        child
    }

    /// Registers the scroll height a frame reports once it has loaded `src`.
    pub fn register_page(&mut self, src: impl Into<String>, scroll_height: u32) {
        self.page_heights.insert(src.into(), scroll_height);
    }

    // --- Inspection ---

    pub fn tag(&self, node: NodeId) -> &str {
        &self.elements[node.0].tag
    }

    pub fn own_text(&self, node: NodeId) -> &str {
        &self.elements[node.0].text
    }

    pub fn children(&self, node: NodeId) -> &[NodeId] {
        &self.elements[node.0].children
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.elements[node.0].parent
    }

    pub fn attributes(&self, node: NodeId) -> impl Iterator<Item = (&str, &str)> {
        self.elements[node.0]
            .attributes
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn style(&self, node: NodeId, property: &str) -> Option<&str> {
        self.elements[node.0].style.get(property).map(String::as_str)
    }

    pub(crate) fn styles(&self, node: NodeId) -> impl Iterator<Item = (&str, &str)> {
        self.elements[node.0]
            .style
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Every `scroll_into_view` call so far, oldest first.
    pub fn scroll_history(&self) -> &[(NodeId, ScrollBehavior)] {
        &self.scrolls
    }

    /// The actions bound to `event` on `node`, in binding order.
    ///
    /// This is what the host would run when the event fires; executing them
    /// is up to the caller.
    pub fn fire(&self, node: NodeId, event: DomEvent) -> Vec<DomAction<NodeId>> {
        self.elements[node.0]
            .listeners
            .iter()
            .filter(|(bound, _)| *bound == event)
            .map(|(_, action)| action.clone())
            .collect()
    }

    /// Whether `node` is reachable from the body.
    pub fn is_attached(&self, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == self.body {
                return true;
            }
            current = self.elements[id.0].parent;
        }
        false
    }

    /// Attached elements in document (pre-)order, body first.
    pub fn descendants(&self) -> Vec<NodeId> {
        let mut order = Vec::with_capacity(self.elements.len());
        let mut stack = vec![self.body];
        while let Some(id) = stack.pop() {
            order.push(id);
            stack.extend(self.elements[id.0].children.iter().rev().copied());
        }
        order
    }

    // --- Internals ---

    fn alloc(&mut self, tag: &str) -> NodeId {
        self.elements.push(ElementData::new(tag));
        NodeId(self.elements.len() - 1)
    }

    fn detach(&mut self, child: NodeId) {
        if let Some(parent) = self.elements[child.0].parent.take() {
            self.elements[parent.0].children.retain(|c| *c != child);
        }
    }

    fn attach(&mut self, parent: NodeId, child: NodeId) {
        self.detach(child);
        self.elements[child.0].parent = Some(parent);
        self.elements[parent.0].children.push(child);
    }

    fn is_ancestor_or_self(&self, candidate: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == candidate {
                return true;
            }
            current = self.elements[id.0].parent;
        }
        false
    }

    fn check(&self, node: NodeId) -> Result<(), DomError> {
        if node.0 < self.elements.len() {
            Ok(())
        } else {
            Err(DomError::Host(format!("unknown node {}", node)))
        }
    }
}

impl Dom for InMemoryDocument {
    type Node = NodeId;

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.descendants()
            .into_iter()
            .find(|n| self.elements[n.0].attributes.get("id").is_some_and(|v| v == id))
    }

    fn headings(&self) -> Vec<NodeId> {
        self.descendants()
            .into_iter()
            .filter(|n| {
                let tag = self.elements[n.0].tag.as_bytes();
                tag.len() == 2 && tag[0] == b'h' && (b'1'..=b'6').contains(&tag[1])
            })
            .collect()
    }

    fn elements_by_class(&self, class: &str) -> Vec<NodeId> {
        self.descendants()
            .into_iter()
            .filter(|n| self.has_class(n, class))
            .collect()
    }

    fn tag_name(&self, node: &NodeId) -> String {
        self.elements[node.0].tag.clone()
    }

    fn text_content(&self, node: &NodeId) -> String {
        let element = &self.elements[node.0];
        let mut text = element.text.clone();
        for child in &element.children {
            text.push_str(&self.text_content(child));
        }
        text
    }

    fn set_text_content(&mut self, node: &NodeId, text: &str) {
        let children = std::mem::take(&mut self.elements[node.0].children);
        for child in children {
            self.elements[child.0].parent = None;
        }
        self.elements[node.0].text = text.to_string();
    }

    fn attribute(&self, node: &NodeId, name: &str) -> Option<String> {
        self.elements[node.0].attributes.get(name).cloned()
    }

    fn set_attribute(&mut self, node: &NodeId, name: &str, value: &str) -> Result<(), DomError> {
        self.check(*node)?;
        self.elements[node.0]
            .attributes
            .insert(name.to_string(), value.to_string());
        Ok(())
    }

    fn create_element(&mut self, tag: &str) -> Result<NodeId, DomError> {
        if tag.is_empty() || !tag.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
            return Err(DomError::Host(format!("invalid tag name '{}'", tag)));
        }
        Ok(self.alloc(tag))
    }

    fn append_child(&mut self, parent: &NodeId, child: &NodeId) -> Result<(), DomError> {
        self.check(*parent)?;
        self.check(*child)?;
        if self.is_ancestor_or_self(*child, *parent) {
            return Err(DomError::Host(format!(
                "cannot append {} inside its own subtree",
                child
            )));
        }
        self.attach(*parent, *child);
        Ok(())
    }

    fn clear_children(&mut self, node: &NodeId) {
        let children = std::mem::take(&mut self.elements[node.0].children);
        for child in children {
            self.elements[child.0].parent = None;
        }
        self.elements[node.0].text.clear();
    }

    fn set_style(&mut self, node: &NodeId, property: &str, value: &str) -> Result<(), DomError> {
        self.check(*node)?;
        self.elements[node.0]
            .style
            .insert(property.to_string(), value.to_string());
        Ok(())
    }

    fn listen(
        &mut self,
        node: &NodeId,
        event: DomEvent,
        action: DomAction<NodeId>,
    ) -> Result<(), DomError> {
        self.check(*node)?;
        self.elements[node.0].listeners.push((event, action));
        Ok(())
    }

    fn scroll_into_view(&mut self, node: &NodeId, behavior: ScrollBehavior) {
        log::debug!("scroll into view: {} ({:?})", node, behavior);
        self.scrolls.push((*node, behavior));
    }

    fn content_scroll_height(&self, frame: &NodeId) -> Option<u32> {
        let src = self.elements[frame.0].attributes.get("src")?;
        self.page_heights.get(src).copied()
    }
}
