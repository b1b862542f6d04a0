//! Dom trait for abstracting document manipulation.
//!
//! The menu, navigation and frame logic is written exclusively against this
//! trait, so the same code drives an in-memory document in tests and the
//! real browser document in the wasm build.

use docsite_types::ContentId;
use std::fmt::Debug;
use thiserror::Error;

/// Error type for document operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomError {
    #[error("Missing container: no element with id '{0}'")]
    MissingContainer(String),

    #[error("DOM operation failed: {0}")]
    Host(String),
}

/// Events a behaviour can be bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DomEvent {
    Click,
    Load,
}

/// How `scroll_into_view` moves the viewport.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScrollBehavior {
    #[default]
    Smooth,
    Instant,
}

/// A behaviour bound to an element event.
///
/// Actions are plain data rather than closures so an in-memory document can
/// record and replay them. The host decides how to execute them.
#[derive(Debug, Clone, PartialEq)]
pub enum DomAction<N> {
    /// Scroll the current document to the given heading.
    ScrollTo(N),
    /// Flip the navigation bar between its compact and expanded state.
    ToggleNav,
    /// Load the given content page into the content frame.
    ///
    /// Never bound by the renderers: navigation links reload the index page
    /// through their `href`. Hosts that swap content in place dispatch this
    /// themselves.
    ShowContent(ContentId),
    /// Fit the content frame to the height of its loaded document.
    ResizeFrame,
}

/// The contract for a mutable HTML document.
///
/// `Node` is a cheap handle to an element: an arena index for the in-memory
/// document, a `web_sys::Element` in the browser.
pub trait Dom {
    type Node: Clone + PartialEq + Debug;

    /// Looks up an element by its `id` attribute.
    fn element_by_id(&self, id: &str) -> Option<Self::Node>;

    /// All `h1`..`h6` elements in document order.
    fn headings(&self) -> Vec<Self::Node>;

    /// All elements whose class list contains `class`, in document order.
    fn elements_by_class(&self, class: &str) -> Vec<Self::Node>;

    /// The element's tag name. Case is host-dependent.
    fn tag_name(&self, node: &Self::Node) -> String;

    /// Concatenated text of the element and its descendants.
    fn text_content(&self, node: &Self::Node) -> String;

    /// Replaces all children of the element with a single run of text.
    fn set_text_content(&mut self, node: &Self::Node, text: &str);

    fn attribute(&self, node: &Self::Node, name: &str) -> Option<String>;

    fn set_attribute(&mut self, node: &Self::Node, name: &str, value: &str) -> Result<(), DomError>;

    /// Creates a detached element.
    fn create_element(&mut self, tag: &str) -> Result<Self::Node, DomError>;

    fn append_child(&mut self, parent: &Self::Node, child: &Self::Node) -> Result<(), DomError>;

    /// Removes every child of the element.
    fn clear_children(&mut self, node: &Self::Node);

    /// Sets one inline style property, e.g. `height` to `640px`.
    fn set_style(&mut self, node: &Self::Node, property: &str, value: &str) -> Result<(), DomError>;

    /// Binds an action to an event on the element.
    fn listen(
        &mut self,
        node: &Self::Node,
        event: DomEvent,
        action: DomAction<Self::Node>,
    ) -> Result<(), DomError>;

    fn scroll_into_view(&mut self, node: &Self::Node, behavior: ScrollBehavior);

    /// Scroll height of the document loaded inside a frame element, if the
    /// frame has finished loading.
    fn content_scroll_height(&self, frame: &Self::Node) -> Option<u32>;

    // --- Provided methods ---

    fn class_name(&self, node: &Self::Node) -> String {
        self.attribute(node, "class").unwrap_or_default()
    }

    fn set_class_name(&mut self, node: &Self::Node, value: &str) -> Result<(), DomError> {
        self.set_attribute(node, "class", value)
    }

    fn has_class(&self, node: &Self::Node, class: &str) -> bool {
        self.class_name(node).split_whitespace().any(|c| c == class)
    }

    fn add_class(&mut self, node: &Self::Node, class: &str) -> Result<(), DomError> {
        if self.has_class(node, class) {
            return Ok(());
        }
        let current = self.class_name(node);
        let updated = if current.trim().is_empty() {
            class.to_string()
        } else {
            format!("{} {}", current.trim_end(), class)
        };
        self.set_class_name(node, &updated)
    }

    fn remove_class(&mut self, node: &Self::Node, class: &str) -> Result<(), DomError> {
        if !self.has_class(node, class) {
            return Ok(());
        }
        let remaining: Vec<String> = self
            .class_name(node)
            .split_whitespace()
            .filter(|c| *c != class)
            .map(str::to_string)
            .collect();
        self.set_class_name(node, &remaining.join(" "))
    }

    /// Writes a `data-*` attribute. `key` is given in its attribute form,
    /// e.g. `menu-item-level`.
    fn set_data(&mut self, node: &Self::Node, key: &str, value: &str) -> Result<(), DomError> {
        self.set_attribute(node, &format!("data-{}", key), value)
    }

    fn data(&self, node: &Self::Node, key: &str) -> Option<String> {
        self.attribute(node, &format!("data-{}", key))
    }

    /// Like [`Dom::element_by_id`] but reports a missing element as an error.
    fn require_element(&self, id: &str) -> Result<Self::Node, DomError> {
        self.element_by_id(id)
            .ok_or_else(|| DomError::MissingContainer(id.to_string()))
    }
}
