use crate::error::NavError;
use crate::options::NavBarOptions;
use docsite_traits::{Dom, DomAction, DomError, DomEvent};
use docsite_types::ContentId;

const TOGGLE_CLASS: &str = "icon";
const TOGGLE_HREF: &str = "javascript:void(0);";
const TOGGLE_GLYPH: &str = "\u{2630}";
const LOGO_CLASS: &str = "logo";

/// State of the navigation bar on small screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavState {
    Compact,
    Expanded,
}

/// A selection to apply once the rendered links are part of the document.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "the selected marker is only applied by `commit`"]
pub struct PendingSelection {
    target: ContentId,
    selected_class: String,
}

impl PendingSelection {
    pub fn target(&self) -> &ContentId {
        &self.target
    }

    /// Clears every existing marker, then marks the target entry.
    ///
    /// Fails with `MissingContainer` when no element carries the target id.
    pub fn commit<D: Dom>(self, dom: &mut D) -> Result<D::Node, NavError> {
        apply_selection(dom, &self.selected_class, &self.target)?
            .ok_or_else(|| DomError::MissingContainer(self.target.to_string()).into())
    }
}

/// The elements created by [`render_nav_bar`].
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedNavBar<N> {
    pub container: N,
    /// One link per entry, in entry order.
    pub links: Vec<N>,
    pub toggle: N,
    pub logo: Option<N>,
    /// Present when an active entry was requested.
    pub pending: Option<PendingSelection>,
}

/// Renders the configured entries into the navigation container.
///
/// Appends one `<a id=.. href=..>title</a>` per entry, then the toggle
/// control and the logo. The container is reset to the compact state. The
/// active entry is not marked yet: call [`PendingSelection::commit`] on the
/// returned selection after the render has landed.
pub fn render_nav_bar<D: Dom>(
    dom: &mut D,
    options: &NavBarOptions,
    active: Option<&ContentId>,
) -> Result<RenderedNavBar<D::Node>, NavError> {
    let container = dom.require_element(&options.container_id)?;
    dom.set_class_name(&container, &options.compact_class)?;

    let mut links = Vec::with_capacity(options.entries.len());
    for entry in &options.entries {
        let link = dom.create_element("a")?;
        dom.set_attribute(&link, "id", entry.id.as_str())?;
        dom.set_attribute(&link, "href", &entry.target)?;
        dom.set_text_content(&link, &entry.title);
        dom.append_child(&container, &link)?;
        links.push(link);
    }

    let toggle = dom.create_element("a")?;
    dom.set_attribute(&toggle, "href", TOGGLE_HREF)?;
    dom.set_class_name(&toggle, TOGGLE_CLASS)?;
    dom.set_text_content(&toggle, TOGGLE_GLYPH);
    dom.listen(&toggle, DomEvent::Click, DomAction::ToggleNav)?;
    dom.append_child(&container, &toggle)?;

    let logo = match &options.logo {
        Some(src) => {
            let img = dom.create_element("img")?;
            dom.set_class_name(&img, LOGO_CLASS)?;
            dom.set_attribute(&img, "src", src)?;
            dom.append_child(&container, &img)?;
            Some(img)
        }
        None => None,
    };

    log::debug!(
        "rendered {} navigation entries into '{}'",
        links.len(),
        options.container_id
    );

    Ok(RenderedNavBar {
        container,
        links,
        toggle,
        logo,
        pending: active.map(|id| PendingSelection {
            target: id.clone(),
            selected_class: options.selected_class.clone(),
        }),
    })
}

/// Clears `selected_class` from every element, then adds it to the element
/// whose id is `target`, if there is one.
pub fn apply_selection<D: Dom>(
    dom: &mut D,
    selected_class: &str,
    target: &ContentId,
) -> Result<Option<D::Node>, NavError> {
    for marked in dom.elements_by_class(selected_class) {
        dom.remove_class(&marked, selected_class)?;
    }
    match dom.element_by_id(target.as_str()) {
        Some(node) => {
            dom.add_class(&node, selected_class)?;
            Ok(Some(node))
        }
        None => {
            log::debug!("no navigation entry for '{}'", target);
            Ok(None)
        }
    }
}

/// Flips the navigation bar between compact and expanded.
pub fn toggle_nav<D: Dom>(dom: &mut D, options: &NavBarOptions) -> Result<NavState, NavError> {
    let nav = dom.require_element(&options.container_id)?;
    if dom.class_name(&nav) == options.compact_class {
        dom.set_class_name(
            &nav,
            &format!("{} {}", options.compact_class, options.expanded_class),
        )?;
        Ok(NavState::Expanded)
    } else {
        dom.set_class_name(&nav, &options.compact_class)?;
        Ok(NavState::Compact)
    }
}

/// Returns the navigation bar to its compact state, if it is present.
pub fn collapse_nav<D: Dom>(dom: &mut D, options: &NavBarOptions) -> Result<(), NavError> {
    if let Some(nav) = dom.element_by_id(&options.container_id) {
        dom.set_class_name(&nav, &options.compact_class)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use docsite_dom::InMemoryDocument;
    use docsite_types::NavEntry;

    fn options() -> NavBarOptions {
        NavBarOptions {
            entries: vec![
                NavEntry::new("home", "Home", "index.html?nav=home"),
                NavEntry::new("demo", "Demo", "index.html?nav=demo"),
            ],
            ..NavBarOptions::default()
        }
    }

    fn index_page() -> InMemoryDocument {
        let mut doc = InMemoryDocument::new();
        let body = doc.body();
        doc.append_with_id(body, "div", "myTopnav");
        doc
    }

    #[test]
    fn test_renders_links_toggle_and_logo() {
        let mut doc = index_page();
        let nav = render_nav_bar(&mut doc, &options(), None).unwrap();

        assert_eq!(nav.links.len(), 2);
        assert_eq!(doc.text_content(&nav.links[0]), "Home");
        assert_eq!(doc.attribute(&nav.links[1], "href").as_deref(), Some("index.html?nav=demo"));
        assert_eq!(doc.attribute(&nav.links[1], "id").as_deref(), Some("demo"));
        assert_eq!(doc.class_name(&nav.toggle), "icon");
        let logo = nav.logo.unwrap();
        assert_eq!(doc.attribute(&logo, "src").as_deref(), Some("logo.png"));

        let mut expected = nav.links.clone();
        expected.push(nav.toggle);
        expected.push(logo);
        assert_eq!(doc.children(nav.container), expected.as_slice());
        assert_eq!(doc.class_name(&nav.container), "topnav");
        assert!(nav.pending.is_none());
    }

    #[test]
    fn test_logo_is_optional() {
        let mut doc = index_page();
        let options = NavBarOptions { logo: None, ..options() };
        let nav = render_nav_bar(&mut doc, &options, None).unwrap();
        assert!(nav.logo.is_none());
        assert_eq!(doc.children(nav.container).len(), 3);
    }

    #[test]
    fn test_active_entry_selected_after_commit() {
        let mut doc = index_page();
        let active = ContentId::new("demo");
        let nav = render_nav_bar(&mut doc, &options(), Some(&active)).unwrap();
        assert!(doc.elements_by_class("selected").is_empty());

        let selected = nav.pending.unwrap().commit(&mut doc).unwrap();
        assert_eq!(selected, nav.links[1]);
        assert_eq!(doc.elements_by_class("selected"), vec![nav.links[1]]);
    }

    #[test]
    fn test_commit_replaces_previous_marker() {
        let mut doc = index_page();
        let nav = render_nav_bar(&mut doc, &options(), Some(&ContentId::new("home"))).unwrap();
        nav.pending.unwrap().commit(&mut doc).unwrap();

        apply_selection(&mut doc, "selected", &ContentId::new("demo")).unwrap();
        assert_eq!(doc.elements_by_class("selected"), vec![nav.links[1]]);
    }

    #[test]
    fn test_commit_for_unknown_entry_fails() {
        let mut doc = index_page();
        let nav = render_nav_bar(&mut doc, &options(), Some(&ContentId::new("missing"))).unwrap();
        let err = nav.pending.unwrap().commit(&mut doc).unwrap_err();
        assert_eq!(err, NavError::Dom(DomError::MissingContainer("missing".to_string())));
    }

    #[test]
    fn test_missing_container() {
        let mut doc = InMemoryDocument::new();
        assert!(matches!(
            render_nav_bar(&mut doc, &options(), None),
            Err(NavError::Dom(DomError::MissingContainer(_)))
        ));
    }

    #[test]
    fn test_toggle_flips_between_two_states() {
        let mut doc = index_page();
        let nav = render_nav_bar(&mut doc, &options(), None).unwrap();

        assert_eq!(toggle_nav(&mut doc, &options()).unwrap(), NavState::Expanded);
        assert_eq!(doc.class_name(&nav.container), "topnav responsive");
        assert_eq!(toggle_nav(&mut doc, &options()).unwrap(), NavState::Compact);
        assert_eq!(doc.class_name(&nav.container), "topnav");
    }

    #[test]
    fn test_toggle_control_is_bound() {
        let mut doc = index_page();
        let nav = render_nav_bar(&mut doc, &options(), None).unwrap();
        assert_eq!(doc.fire(nav.toggle, DomEvent::Click), vec![DomAction::ToggleNav]);
    }

    #[test]
    fn test_links_navigate_through_href_only() {
        let mut doc = index_page();
        let nav = render_nav_bar(&mut doc, &options(), None).unwrap();
        for link in &nav.links {
            assert!(doc.fire(*link, DomEvent::Click).is_empty());
        }
    }

    #[test]
    fn test_collapse_without_nav_bar_is_noop() {
        let mut doc = InMemoryDocument::new();
        assert!(collapse_nav(&mut doc, &options()).is_ok());
    }
}
