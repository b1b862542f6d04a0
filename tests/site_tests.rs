mod common;

use common::fixtures::{SITE_JSON, index_page, intro_page};
use common::{TestResult, fire, fire_top, heading_texts, init_logger};
use docsite::dom::html::to_html;
use docsite::{ContentId, Dom, DomEvent, InMemoryDocument, InMemoryWindow, Site, Window, load_config};
use std::io::Write;

fn site_from_file() -> Result<Site, Box<dyn std::error::Error>> {
    let mut file = tempfile::NamedTempFile::new()?;
    file.write_all(SITE_JSON.as_bytes())?;
    Ok(Site::new(load_config(file.path())?))
}

#[test]
fn test_index_load_from_config_file() -> TestResult {
    init_logger();
    let site = site_from_file()?;
    let mut window = InMemoryWindow::top_level(index_page(), "?nav=guide");

    site.on_index_load(&mut window);

    let doc = window.top_document();
    let nav = doc.element_by_id("myTopnav").ok_or("no nav bar")?;
    // Three links, the toggle and the logo.
    assert_eq!(doc.children(nav).len(), 5);
    let logo = doc.elements_by_class("logo");
    assert_eq!(doc.attribute(&logo[0], "src").as_deref(), Some("img/logo.svg"));

    let frame = doc.element_by_id("contentObject").ok_or("no frame")?;
    assert_eq!(doc.attribute(&frame, "src").as_deref(), Some("guide.html"));
    assert_eq!(doc.style(frame, "height"), Some("900px"));

    let guide = doc.element_by_id("guide").ok_or("no guide link")?;
    assert_eq!(doc.elements_by_class("selected"), vec![guide]);

    let email = doc.element_by_id("email").ok_or("no email")?;
    assert_eq!(doc.text_content(&email), "docs@example.org");
    Ok(())
}

#[test]
fn test_framed_content_page_load() -> TestResult {
    init_logger();
    let site = site_from_file()?;
    let mut window = InMemoryWindow::nested(index_page(), intro_page(), "nav=guide");

    site.on_content_page_load(&mut window, Some(&ContentId::new("guide")));

    assert!(window.navigations().is_empty());
    assert_eq!(heading_texts(&window), ["1. Intro", "1.1. A", "1.2. B", "2. Next"]);

    // Menu clicks scroll the content page, not the index page.
    let doc = window.document();
    let menu = doc.element_by_id("menu").ok_or("no menu")?;
    let second = doc.children(menu)[1];
    fire(&site, &mut window, second, DomEvent::Click);
    assert_eq!(window.document().scroll_history().len(), 1);
    assert!(window.top_document().scroll_history().is_empty());
    Ok(())
}

#[test]
fn test_standalone_content_page_redirects_before_building_menu() -> TestResult {
    let site = site_from_file()?;
    let mut window = InMemoryWindow::nested(InMemoryDocument::new(), intro_page(), "");

    site.on_content_page_load(&mut window, Some(&ContentId::new("demo")));

    assert_eq!(window.navigations(), &["index.html?nav=demo".to_string()]);
    assert_eq!(heading_texts(&window), ["Intro", "A", "B", "Next"]);
    Ok(())
}

#[test]
fn test_unnamed_content_page_only_builds_menu() -> TestResult {
    let site = site_from_file()?;
    let mut window = InMemoryWindow::nested(InMemoryDocument::new(), intro_page(), "");

    site.on_content_page_load(&mut window, None);

    assert!(window.navigations().is_empty());
    assert_eq!(heading_texts(&window)[0], "1. Intro");
    Ok(())
}

#[test]
fn test_full_visit() -> TestResult {
    init_logger();
    let site = site_from_file()?;
    let mut window = InMemoryWindow::top_level(index_page(), "");
    site.on_index_load(&mut window);

    // Expand the small-screen menu, then pick an entry.
    let toggle = window.top_document().elements_by_class("icon")[0];
    fire_top(&site, &mut window, toggle, DomEvent::Click);
    site.dispatch(&mut window, docsite::DomAction::ShowContent(ContentId::new("demo")));

    let frame = window.top_document().element_by_id("contentObject").ok_or("no frame")?;
    fire_top(&site, &mut window, frame, DomEvent::Load);

    let html = to_html(window.top_document());
    assert!(html.contains(r#"<div id="myTopnav" class="topnav">"#), "{}", html);
    assert!(html.contains(r#"src="demo.html""#), "{}", html);
    assert!(html.contains("height: 480px"), "{}", html);
    Ok(())
}
