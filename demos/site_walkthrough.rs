// demos/site_walkthrough.rs
//
// Builds an index page and a content page in memory, runs the page-load
// handlers, simulates a few clicks and prints the resulting HTML.
//
// Run with: RUST_LOG=debug cargo run --example site_walkthrough

use docsite::dom::html::to_html;
use docsite::{
    ContentId, Dom, DomAction, DomEvent, InMemoryDocument, InMemoryWindow, NavEntry, NodeId, Site,
    SiteConfig, Window,
};
use std::error::Error;

fn index_page() -> InMemoryDocument {
    let mut doc = InMemoryDocument::new();
    let body = doc.body();
    doc.append_with_id(body, "div", "myTopnav");
    doc.append_with_id(body, "div", "content");
    let footer = doc.append_element(body, "footer");
    doc.append_with_id(footer, "span", "email");
    doc.register_page("guide.html", 2400);
    doc
}

fn guide_page() -> InMemoryDocument {
    let mut doc = InMemoryDocument::new();
    let body = doc.body();
    let menu = doc.append_with_id(body, "div", "menu");
    doc.append_text_element(menu, "p", "Loading...");
    doc.add_class(&menu, "hide").ok();

    let sections: [(u8, &str); 7] = [
        (1, "Installation"),
        (2, "From a release"),
        (2, "From source"),
        (1, "Configuration"),
        (2, "Navigation entries"),
        (3, "Ordering"),
        (1, "Troubleshooting"),
    ];
    for (level, title) in sections {
        doc.append_text_element(body, &format!("h{}", level), title);
    }
    doc
}

fn run_actions(site: &Site, window: &mut InMemoryWindow, actions: Vec<DomAction<NodeId>>) {
    for action in actions {
        println!("  -> {:?}", action);
        site.dispatch(window, action);
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let config = SiteConfig::builder()
        .with_entries([
            NavEntry::new("home", "Home", "index.html?nav=home"),
            NavEntry::new("guide", "Guide", "index.html?nav=guide"),
            NavEntry::new("faq", "FAQ", "index.html?nav=faq"),
        ])
        .with_email("docs;x;example.org")
        .build()?;
    let site = Site::new(config);

    println!("=== Index page, opened as index.html?nav=guide ===");
    let mut index = InMemoryWindow::top_level(index_page(), "?nav=guide");
    site.on_index_load(&mut index);

    println!("Toggle clicked:");
    let toggle = index.top_document().elements_by_class("icon")[0];
    let actions = index.top_document().fire(toggle, DomEvent::Click);
    run_actions(&site, &mut index, actions);

    println!("Content frame loaded:");
    let frame = index
        .top_document()
        .element_by_id("contentObject")
        .ok_or("content frame missing")?;
    let actions = index.top_document().fire(frame, DomEvent::Load);
    run_actions(&site, &mut index, actions);

    println!("\n{}", to_html(index.top_document()));

    println!("=== guide.html inside the content frame ===");
    let (top, _) = index.into_documents();
    let mut framed = InMemoryWindow::nested(top, guide_page(), "nav=guide");
    site.on_content_page_load(&mut framed, Some(&ContentId::new("guide")));

    let doc = framed.document();
    let menu = doc.element_by_id("menu").ok_or("menu missing")?;
    let last = *doc.children(menu).last().ok_or("menu is empty")?;
    println!("Menu entry '{}' clicked:", doc.text_content(&last));
    let actions = doc.fire(last, DomEvent::Click);
    run_actions(&site, &mut framed, actions);

    println!("\n{}", to_html(framed.document()));

    println!("=== guide.html opened on its own ===");
    let mut standalone = InMemoryWindow::nested(InMemoryDocument::new(), guide_page(), "");
    site.on_content_page_load(&mut standalone, Some(&ContentId::new("guide")));
    println!("Top window sent to: {:?}", standalone.navigations());

    Ok(())
}
