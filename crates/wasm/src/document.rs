//! The browser document behind the `Dom` trait.

use docsite_traits::{Dom, DomAction, DomError, DomEvent, ScrollBehavior};
use std::fmt;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlElement, HtmlIFrameElement, ScrollIntoViewOptions};

const HEADING_SELECTOR: &str = "h1, h2, h3, h4, h5, h6";

/// Executes an action bound through [`Dom::listen`] when its event fires.
pub(crate) type Dispatcher = Rc<dyn Fn(DomAction<Element>)>;

/// A `web_sys::Document` seen through the `Dom` trait.
///
/// Listeners are registered as leaked closures that hand their action to
/// the dispatcher. They live as long as the element does.
#[derive(Clone)]
pub struct BrowserDocument {
    document: web_sys::Document,
    dispatcher: Dispatcher,
}

impl fmt::Debug for BrowserDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BrowserDocument")
            .field("url", &self.document.url().ok())
            .finish_non_exhaustive()
    }
}

impl BrowserDocument {
    pub(crate) fn new(document: web_sys::Document, dispatcher: Dispatcher) -> Self {
        Self { document, dispatcher }
    }

    pub fn inner(&self) -> &web_sys::Document {
        &self.document
    }
}

pub(crate) fn host_error(err: JsValue) -> DomError {
    let message = err
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| err.as_string())
        .unwrap_or_else(|| format!("{:?}", err));
    DomError::Host(message)
}

fn event_name(event: DomEvent) -> &'static str {
    match event {
        DomEvent::Click => "click",
        DomEvent::Load => "load",
    }
}

impl Dom for BrowserDocument {
    type Node = Element;

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn headings(&self) -> Vec<Element> {
        let list = match self.document.query_selector_all(HEADING_SELECTOR) {
            Ok(list) => list,
            Err(e) => {
                log::warn!("heading lookup failed: {}", host_error(e));
                return Vec::new();
            }
        };
        (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }

    fn elements_by_class(&self, class: &str) -> Vec<Element> {
        let collection = self.document.get_elements_by_class_name(class);
        // The collection is live; copy it before anyone edits class names.
        (0..collection.length())
            .filter_map(|i| collection.item(i))
            .collect()
    }

    fn tag_name(&self, node: &Element) -> String {
        node.tag_name()
    }

    fn text_content(&self, node: &Element) -> String {
        node.text_content().unwrap_or_default()
    }

    fn set_text_content(&mut self, node: &Element, text: &str) {
        node.set_text_content(Some(text));
    }

    fn attribute(&self, node: &Element, name: &str) -> Option<String> {
        node.get_attribute(name)
    }

    fn set_attribute(&mut self, node: &Element, name: &str, value: &str) -> Result<(), DomError> {
        node.set_attribute(name, value).map_err(host_error)
    }

    fn create_element(&mut self, tag: &str) -> Result<Element, DomError> {
        self.document.create_element(tag).map_err(host_error)
    }

    fn append_child(&mut self, parent: &Element, child: &Element) -> Result<(), DomError> {
        parent.append_child(child).map(drop).map_err(host_error)
    }

    fn clear_children(&mut self, node: &Element) {
        while let Some(child) = node.first_child() {
            if let Err(e) = node.remove_child(&child) {
                log::warn!("could not remove child: {}", host_error(e));
                break;
            }
        }
    }

    fn set_style(&mut self, node: &Element, property: &str, value: &str) -> Result<(), DomError> {
        let element = node
            .dyn_ref::<HtmlElement>()
            .ok_or_else(|| DomError::Host(format!("<{}> has no inline style", node.tag_name())))?;
        element.style().set_property(property, value).map_err(host_error)
    }

    fn listen(
        &mut self,
        node: &Element,
        event: DomEvent,
        action: DomAction<Element>,
    ) -> Result<(), DomError> {
        let dispatcher = Rc::clone(&self.dispatcher);
        let callback = Closure::<dyn FnMut()>::new(move || dispatcher(action.clone()));
        node.add_event_listener_with_callback(event_name(event), callback.as_ref().unchecked_ref())
            .map_err(host_error)?;
        callback.forget();
        Ok(())
    }

    fn scroll_into_view(&mut self, node: &Element, behavior: ScrollBehavior) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(match behavior {
            ScrollBehavior::Smooth => web_sys::ScrollBehavior::Smooth,
            ScrollBehavior::Instant => web_sys::ScrollBehavior::Instant,
        });
        node.scroll_into_view_with_scroll_into_view_options(&options);
    }

    fn content_scroll_height(&self, frame: &Element) -> Option<u32> {
        let frame = frame.dyn_ref::<HtmlIFrameElement>()?;
        let body = frame.content_document()?.body()?;
        u32::try_from(body.scroll_height()).ok()
    }
}
