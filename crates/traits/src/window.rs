//! Window trait for abstracting the browsing-context topology.

use crate::dom::Dom;

/// A browsing context: the document the script runs in, plus the top-level
/// window that hosts the navigation bar.
///
/// On the index page both are the same document. On a content page loaded
/// inside the content frame, `document` is the frame's document and
/// `top_document` is the index page around it.
pub trait Window {
    type Document: Dom;

    /// The top-level location's query string, without the leading `?`.
    fn top_search(&self) -> String;

    /// The document the current script runs in.
    fn document(&self) -> &Self::Document;

    fn document_mut(&mut self) -> &mut Self::Document;

    /// The top-level window's document.
    fn top_document(&self) -> &Self::Document;

    fn top_document_mut(&mut self) -> &mut Self::Document;

    /// Points the top-level window at a new address.
    fn navigate_top(&mut self, href: &str);
}
