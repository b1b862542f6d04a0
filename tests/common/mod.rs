pub mod fixtures;

use docsite::{Dom, DomEvent, InMemoryWindow, NodeId, Site, Window};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Fires `event` on `node` in the top document and runs the bound actions.
pub fn fire_top(site: &Site, window: &mut InMemoryWindow, node: NodeId, event: DomEvent) {
    let actions = window.top_document().fire(node, event);
    for action in actions {
        site.dispatch(window, action);
    }
}

/// Fires `event` on `node` in the current document and runs the bound
/// actions.
pub fn fire(site: &Site, window: &mut InMemoryWindow, node: NodeId, event: DomEvent) {
    let actions = window.document().fire(node, event);
    for action in actions {
        site.dispatch(window, action);
    }
}

/// Text of every heading in document order.
pub fn heading_texts(window: &InMemoryWindow) -> Vec<String> {
    let doc = window.document();
    doc.headings().iter().map(|h| doc.text_content(h)).collect()
}
