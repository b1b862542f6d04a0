use docsite::{Dom, InMemoryDocument, NavEntry, SiteConfig};

/// The configuration used across the integration tests: two entries, a
/// contact address and the default markup ids.
pub fn site_config() -> SiteConfig {
    SiteConfig::builder()
        .with_entries([
            NavEntry::new("home", "Home", "index.html?nav=home"),
            NavEntry::new("demo", "Demo", "index.html?nav=demo"),
            NavEntry::new("guide", "Guide", "index.html?nav=guide"),
        ])
        .with_email("docs;x;example.org")
        .build()
        .expect("fixture configuration is valid")
}

pub const SITE_JSON: &str = r#"{
    "navBar": {
        "logo": "img/logo.svg",
        "entries": [
            { "id": "home", "title": "Home", "target": "index.html?nav=home" },
            { "id": "demo", "title": "Demo", "target": "index.html?nav=demo" },
            { "id": "guide", "title": "Guide", "target": "index.html?nav=guide" }
        ]
    },
    "frame": { "initialHeight": 900 },
    "contact": { "obfuscated": "docs;x;example.org" }
}"#;

/// An index page: nav bar container, content container, contact element.
///
/// `guide.html` is registered with a scroll height of 640 and `demo.html`
/// with 480, so frame resizes have something to measure.
pub fn index_page() -> InMemoryDocument {
    let mut doc = InMemoryDocument::new();
    let body = doc.body();
    doc.append_with_id(body, "div", "myTopnav");
    doc.append_with_id(body, "div", "content");
    let footer = doc.append_element(body, "footer");
    doc.append_with_id(footer, "span", "email");
    doc.register_page("guide.html", 640);
    doc.register_page("demo.html", 480);
    doc
}

/// A content page with a hidden menu container and the given headings.
pub fn content_page(headings: &[(u8, &str)]) -> InMemoryDocument {
    let mut doc = InMemoryDocument::new();
    let body = doc.body();
    let menu = doc.append_with_id(body, "div", "menu");
    doc.set_class_name(&menu, "hide").expect("in-memory class update");
    let main = doc.append_element(body, "main");
    for (level, title) in headings {
        doc.append_text_element(main, &format!("h{}", level), title);
        doc.append_text_element(main, "p", "Lorem ipsum.");
    }
    doc
}

/// `[H1 Intro, H2 A, H2 B, H1 Next]`
pub fn intro_page() -> InMemoryDocument {
    content_page(&[(1, "Intro"), (2, "A"), (2, "B"), (1, "Next")])
}
