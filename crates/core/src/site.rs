//! The `Site` orchestrator.
//!
//! A `Site` owns the configuration and exposes every page operation twice:
//! as a fallible method returning `Result`, and through the fail-soft event
//! entry points (`on_index_load`, `on_content_page_load`, `dispatch`) that a
//! host calls from its page-load and click callbacks. The entry points log
//! failures at `warn` level and carry on, so a broken element never takes
//! the rest of the page down with it.

use crate::config::SiteConfig;
use crate::error::SiteError;
use docsite_menu::{Menu, build_menu};
use docsite_nav::{NavGuard, NavState, RenderedNavBar};
use docsite_query::Query;
use docsite_traits::{Dom, DomAction, ScrollBehavior, Window};
use docsite_types::ContentId;

/// The node type of a window's documents.
pub type NodeOf<W> = <<W as Window>::Document as Dom>::Node;

#[derive(Debug, Clone, Default)]
pub struct Site {
    config: SiteConfig,
}

impl Site {
    pub fn new(config: SiteConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    // --- Operations ---

    /// Numbers the headings of `dom` and fills its menu container.
    pub fn build_menu<D: Dom>(&self, dom: &mut D) -> Result<Menu<D::Node>, SiteError> {
        Ok(build_menu(dom, &self.config.menu)?)
    }

    /// Renders the navigation bar and marks `active`, if given.
    ///
    /// The links are in the document before the selection is committed. If
    /// `active` names no rendered entry the bar stays rendered and the
    /// commit failure is returned.
    pub fn build_nav_bar<D: Dom>(
        &self,
        dom: &mut D,
        active: Option<&ContentId>,
    ) -> Result<RenderedNavBar<D::Node>, SiteError> {
        let mut rendered = docsite_nav::render_nav_bar(dom, &self.config.nav_bar, active)?;
        if let Some(pending) = rendered.pending.take() {
            pending.commit(dom)?;
        }
        Ok(rendered)
    }

    pub fn toggle_nav<W: Window>(&self, window: &mut W) -> Result<NavState, SiteError> {
        Ok(docsite_nav::toggle_nav(window.top_document_mut(), &self.config.nav_bar)?)
    }

    /// Loads `id` into the content frame of the top document.
    pub fn show_content<W: Window>(
        &self,
        window: &mut W,
        id: &ContentId,
    ) -> Result<NodeOf<W>, SiteError> {
        Ok(docsite_nav::show_content(
            window,
            &self.config.nav_bar,
            &self.config.frame,
            id,
        )?)
    }

    /// Shows the content named by the `nav` parameter, or the default.
    pub fn check_nav_param<W: Window>(&self, window: &mut W) -> Result<ContentId, SiteError> {
        Ok(docsite_nav::check_nav_param(
            window,
            &self.config.nav_bar,
            &self.config.frame,
        )?)
    }

    /// Strictly parses the top-level query string.
    ///
    /// Unlike the `nav` lookup in [`Site::check_nav_param`], a segment
    /// without `=` is reported instead of skipped.
    pub fn query<W: Window>(&self, window: &W) -> Result<Query, SiteError> {
        Ok(Query::parse(&window.top_search())?)
    }

    /// Fits the content frame of the top document to its loaded page.
    pub fn resize_frame<W: Window>(&self, window: &mut W) -> Result<Option<u32>, SiteError> {
        Ok(docsite_nav::resize_frame(
            window.top_document_mut(),
            &self.config.frame,
        )?)
    }

    pub fn ensure_nav_bar_visible<W: Window>(&self, window: &mut W, id: &ContentId) -> NavGuard {
        docsite_nav::ensure_nav_bar_visible(window, &self.config.nav_bar, &self.config.frame, id)
    }

    /// Reveals the configured contact address. `None` when no contact is
    /// configured.
    pub fn reveal_email<D: Dom>(&self, dom: &mut D) -> Result<Option<String>, SiteError> {
        match &self.config.contact {
            Some(contact) => Ok(Some(docsite_nav::reveal_email(dom, contact)?)),
            None => Ok(None),
        }
    }

    // --- Event entry points ---

    /// Index page load: navigation bar, initial content, contact address.
    pub fn on_index_load<W: Window>(&self, window: &mut W) {
        log::info!("index page loaded");
        report("navigation bar", self.build_nav_bar(window.top_document_mut(), None));
        report("initial content", self.check_nav_param(window));
        report("contact address", self.reveal_email(window.document_mut()));
    }

    /// Content page load: redirect guard and table-of-contents menu.
    ///
    /// After a redirect the page is going away, so nothing else runs.
    pub fn on_content_page_load<W: Window>(&self, window: &mut W, id: Option<&ContentId>) {
        log::info!("content page loaded: {}", id.map_or("<unnamed>", ContentId::as_str));
        if let Some(id) = id {
            if let NavGuard::Redirected(href) = self.ensure_nav_bar_visible(window, id) {
                log::info!("navigation bar missing, redirected to {}", href);
                return;
            }
        }
        report("menu", self.build_menu(window.document_mut()));
    }

    /// Executes an action bound to a click or load event.
    pub fn dispatch<W: Window>(&self, window: &mut W, action: DomAction<NodeOf<W>>) {
        log::debug!("dispatching {:?}", action);
        let result = match action {
            DomAction::ScrollTo(node) => {
                window.document_mut().scroll_into_view(&node, ScrollBehavior::Smooth);
                Ok(())
            }
            DomAction::ToggleNav => self.toggle_nav(window).map(drop),
            DomAction::ShowContent(id) => self.show_content(window, &id).map(drop),
            DomAction::ResizeFrame => self.resize_frame(window).map(drop),
        };
        report("dispatch", result);
    }
}

fn report<T>(what: &str, result: Result<T, SiteError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("{} skipped: {}", what, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docsite_dom::{InMemoryDocument, InMemoryWindow, NodeId};
    use docsite_traits::DomEvent;
    use docsite_types::NavEntry;

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn site() -> Site {
        let config = SiteConfig::builder()
            .with_entries([
                NavEntry::new("home", "Home", "index.html?nav=home"),
                NavEntry::new("demo", "Demo", "index.html?nav=demo"),
            ])
            .with_email("docs;x;example.org")
            .build()
            .unwrap();
        Site::new(config)
    }

    fn index_page() -> InMemoryDocument {
        let mut doc = InMemoryDocument::new();
        let body = doc.body();
        doc.append_with_id(body, "div", "myTopnav");
        doc.append_with_id(body, "div", "content");
        doc.append_with_id(body, "span", "email");
        doc.register_page("demo.html", 480);
        doc
    }

    fn content_page() -> InMemoryDocument {
        let mut doc = InMemoryDocument::new();
        let body = doc.body();
        let menu = doc.append_with_id(body, "div", "menu");
        doc.set_class_name(&menu, "hide").unwrap();
        doc.append_text_element(body, "h1", "Intro");
        doc.append_text_element(body, "h2", "Setup");
        doc
    }

    fn run(site: &Site, window: &mut InMemoryWindow, actions: Vec<DomAction<NodeId>>) {
        for action in actions {
            site.dispatch(window, action);
        }
    }

    #[test]
    fn test_index_load_renders_everything() {
        init_logger();
        let site = site();
        let mut window = InMemoryWindow::top_level(index_page(), "nav=demo");
        site.on_index_load(&mut window);

        let doc = window.top_document();
        let frame = doc.element_by_id("contentObject").unwrap();
        assert_eq!(doc.attribute(&frame, "src").as_deref(), Some("demo.html"));
        let demo = doc.element_by_id("demo").unwrap();
        assert_eq!(doc.elements_by_class("selected"), vec![demo]);
        let email = doc.element_by_id("email").unwrap();
        assert_eq!(doc.text_content(&email), "docs@example.org");
    }

    #[test]
    fn test_index_load_survives_missing_elements() {
        init_logger();
        let site = site();
        let mut window = InMemoryWindow::top_level(InMemoryDocument::new(), "");
        site.on_index_load(&mut window);
        assert!(window.top_document().element_by_id("contentObject").is_none());
    }

    #[test]
    fn test_build_nav_bar_commits_selection() {
        let site = site();
        let mut doc = index_page();
        let rendered = site.build_nav_bar(&mut doc, Some(&ContentId::new("demo"))).unwrap();
        assert!(rendered.pending.is_none());
        assert_eq!(doc.elements_by_class("selected"), vec![rendered.links[1]]);
    }

    #[test]
    fn test_build_nav_bar_unknown_active() {
        let site = site();
        let mut doc = index_page();
        let err = site.build_nav_bar(&mut doc, Some(&ContentId::new("nope"))).unwrap_err();
        assert!(err.is_missing_container());
        assert!(doc.element_by_id("home").is_some());
    }

    #[test]
    fn test_click_and_load_dispatch() {
        init_logger();
        let site = site();
        let mut window = InMemoryWindow::top_level(index_page(), "");
        let nav = site.build_nav_bar(window.top_document_mut(), None).unwrap();

        let actions = window.top_document().fire(nav.toggle, DomEvent::Click);
        run(&site, &mut window, actions);
        assert_eq!(window.top_document().class_name(&nav.container), "topnav responsive");

        site.dispatch(&mut window, DomAction::ShowContent(ContentId::new("demo")));
        // Showing content collapses the bar.
        assert_eq!(window.top_document().class_name(&nav.container), "topnav");

        let frame = window.top_document().element_by_id("contentObject").unwrap();
        let actions = window.top_document().fire(frame, DomEvent::Load);
        run(&site, &mut window, actions);
        assert_eq!(window.top_document().style(frame, "height"), Some("480px"));
    }

    #[test]
    fn test_content_load_builds_menu_and_scrolls() {
        init_logger();
        let site = site();
        let mut window = InMemoryWindow::nested(index_page(), content_page(), "nav=guide");
        site.on_content_page_load(&mut window, Some(&ContentId::new("guide")));
        assert!(window.navigations().is_empty());

        let doc = window.document();
        let menu = doc.element_by_id("menu").unwrap();
        assert!(!doc.has_class(&menu, "hide"));
        let items = doc.children(menu).to_vec();
        assert_eq!(items.len(), 2);
        let headings = doc.headings();
        assert_eq!(doc.text_content(&headings[1]), "1.1. Setup");

        let actions = doc.fire(items[1], DomEvent::Click);
        run(&site, &mut window, actions);
        assert_eq!(
            window.document().scroll_history(),
            &[(headings[1], ScrollBehavior::Smooth)]
        );
    }

    #[test]
    fn test_content_load_redirects_without_nav_bar() {
        init_logger();
        let site = site();
        let mut window = InMemoryWindow::nested(InMemoryDocument::new(), content_page(), "");
        site.on_content_page_load(&mut window, Some(&ContentId::new("guide")));

        assert_eq!(window.navigations(), &["index.html?nav=guide".to_string()]);
        let menu = window.document().element_by_id("menu").unwrap();
        assert!(window.document().has_class(&menu, "hide"));
    }

    #[test]
    fn test_query_reads_top_level_search() {
        let site = site();
        let window = InMemoryWindow::nested(index_page(), content_page(), "?nav=guide&tag=a&tag=b");

        let query = site.query(&window).unwrap();
        assert_eq!(query.first("nav"), Some("guide"));
        assert_eq!(query.get("tag").unwrap().values(), &["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_query_reports_segment_without_value() {
        let site = site();
        let mut window = InMemoryWindow::top_level(index_page(), "?debug&nav=guide");

        let err = site.query(&window).unwrap_err();
        assert!(matches!(err, SiteError::Query(_)));
        assert!(err.to_string().contains("debug"));

        // The nav lookup still tolerates the same search string.
        assert_eq!(site.check_nav_param(&mut window).unwrap().as_str(), "guide");
    }

    #[test]
    fn test_reveal_email_without_contact() {
        let site = Site::default();
        let mut doc = index_page();
        assert_eq!(site.reveal_email(&mut doc).unwrap(), None);
    }
}
