use crate::document::InMemoryDocument;
use docsite_traits::Window;

/// An in-memory browsing context.
///
/// Either a top-level page (the script runs in the index document itself) or
/// a content page nested in the index page's frame.
#[derive(Debug, Clone)]
pub struct InMemoryWindow {
    top: InMemoryDocument,
    frame: Option<InMemoryDocument>,
    search: String,
    navigations: Vec<String>,
}

impl InMemoryWindow {
    /// A script running in the top-level document.
    pub fn top_level(document: InMemoryDocument, search: impl Into<String>) -> Self {
        Self {
            top: document,
            frame: None,
            search: normalize_search(search.into()),
            navigations: Vec::new(),
        }
    }

    /// A script running in `document`, framed inside `top`.
    pub fn nested(
        top: InMemoryDocument,
        document: InMemoryDocument,
        search: impl Into<String>,
    ) -> Self {
        Self {
            top,
            frame: Some(document),
            search: normalize_search(search.into()),
            navigations: Vec::new(),
        }
    }

    pub fn is_nested(&self) -> bool {
        self.frame.is_some()
    }

    /// Addresses passed to `navigate_top`, oldest first.
    pub fn navigations(&self) -> &[String] {
        &self.navigations
    }

    pub fn into_documents(self) -> (InMemoryDocument, Option<InMemoryDocument>) {
        (self.top, self.frame)
    }
}

fn normalize_search(search: String) -> String {
    match search.strip_prefix('?') {
        Some(rest) => rest.to_string(),
        None => search,
    }
}

impl Window for InMemoryWindow {
    type Document = InMemoryDocument;

    fn top_search(&self) -> String {
        self.search.clone()
    }

    fn document(&self) -> &InMemoryDocument {
        self.frame.as_ref().unwrap_or(&self.top)
    }

    fn document_mut(&mut self) -> &mut InMemoryDocument {
        self.frame.as_mut().unwrap_or(&mut self.top)
    }

    fn top_document(&self) -> &InMemoryDocument {
        &self.top
    }

    fn top_document_mut(&mut self) -> &mut InMemoryDocument {
        &mut self.top
    }

    fn navigate_top(&mut self, href: &str) {
        log::info!("navigating top window to {}", href);
        self.navigations.push(href.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docsite_traits::Dom;

    #[test]
    fn test_top_level_documents_coincide() {
        let mut doc = InMemoryDocument::new();
        let body = doc.body();
        doc.append_with_id(body, "div", "myTopnav");
        let window = InMemoryWindow::top_level(doc, "?nav=guide");

        assert!(!window.is_nested());
        assert_eq!(window.top_search(), "nav=guide");
        assert!(window.document().element_by_id("myTopnav").is_some());
        assert!(window.top_document().element_by_id("myTopnav").is_some());
    }

    #[test]
    fn test_nested_window_separates_documents() {
        let mut top = InMemoryDocument::new();
        let body = top.body();
        top.append_with_id(body, "div", "myTopnav");
        let window = InMemoryWindow::nested(top, InMemoryDocument::new(), "");

        assert!(window.is_nested());
        assert!(window.document().element_by_id("myTopnav").is_none());
        assert!(window.top_document().element_by_id("myTopnav").is_some());
    }

    #[test]
    fn test_navigations_are_recorded() {
        let mut window = InMemoryWindow::top_level(InMemoryDocument::new(), "");
        window.navigate_top("index.html?nav=demo");
        assert_eq!(window.navigations(), &["index.html?nav=demo".to_string()]);
    }
}
