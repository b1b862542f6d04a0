use crate::document::{BrowserDocument, Dispatcher, host_error};
use docsite_traits::{DomError, Window};
use std::rc::Rc;

/// The browsing context the module runs in.
///
/// When the script runs inside the content frame, `top` holds the index
/// page's document; on the index page itself it is `None` and both views
/// resolve to the same document.
#[derive(Debug, Clone)]
pub struct BrowserWindow {
    top_window: web_sys::Window,
    document: BrowserDocument,
    top: Option<BrowserDocument>,
}

impl BrowserWindow {
    /// Captures the global window, its document and the top-level document.
    pub(crate) fn current(dispatcher: Dispatcher) -> Result<Self, DomError> {
        let window =
            web_sys::window().ok_or_else(|| DomError::Host("no global window".to_string()))?;
        let document = window
            .document()
            .ok_or_else(|| DomError::Host("window has no document".to_string()))?;
        let top_window = window.top().map_err(host_error)?.unwrap_or_else(|| window.clone());

        let top = if top_window == window {
            None
        } else {
            let top_document = top_window
                .document()
                .ok_or_else(|| DomError::Host("top window has no document".to_string()))?;
            Some(BrowserDocument::new(top_document, Rc::clone(&dispatcher)))
        };

        Ok(Self {
            top_window,
            document: BrowserDocument::new(document, dispatcher),
            top,
        })
    }

    pub fn is_nested(&self) -> bool {
        self.top.is_some()
    }
}

impl Window for BrowserWindow {
    type Document = BrowserDocument;

    fn top_search(&self) -> String {
        match self.top_window.location().search() {
            Ok(search) => search.strip_prefix('?').unwrap_or(&search).to_string(),
            Err(e) => {
                log::warn!("cannot read top-level query: {}", host_error(e));
                String::new()
            }
        }
    }

    fn document(&self) -> &BrowserDocument {
        &self.document
    }

    fn document_mut(&mut self) -> &mut BrowserDocument {
        &mut self.document
    }

    fn top_document(&self) -> &BrowserDocument {
        self.top.as_ref().unwrap_or(&self.document)
    }

    fn top_document_mut(&mut self) -> &mut BrowserDocument {
        match &mut self.top {
            Some(top) => top,
            None => &mut self.document,
        }
    }

    fn navigate_top(&mut self, href: &str) {
        if let Err(e) = self.top_window.location().set_href(href) {
            log::warn!("navigation to {} failed: {}", href, host_error(e));
        }
    }
}
