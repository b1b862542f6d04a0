use crate::error::MenuError;
use crate::outline::{HIERARCHY_DATA_KEY, HeadingOutline, LEVEL_DATA_KEY, TITLE_DATA_KEY};
use docsite_traits::{Dom, DomAction, DomEvent};
use docsite_types::{HeadingLevel, HierarchyLabel};
use serde::{Deserialize, Serialize};

/// Class shared by every menu entry; a level suffix is appended per entry.
pub const MENU_ITEM_CLASS: &str = "menuItem";
const MENU_ITEM_LEVEL_DATA_KEY: &str = "menu-item-level";

/// Where the menu goes and how it is revealed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MenuOptions {
    /// Id of the element the entries are appended to.
    pub container_id: String,
    /// Class removed from the container once it is populated.
    pub hidden_class: String,
}

impl Default for MenuOptions {
    fn default() -> Self {
        Self {
            container_id: "menu".to_string(),
            hidden_class: "hide".to_string(),
        }
    }
}

/// One clickable menu line.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuEntry<N> {
    /// The heading this entry scrolls to.
    pub heading: N,
    /// The menu element itself.
    pub item: N,
    pub level: HeadingLevel,
    pub title: String,
    pub label: HierarchyLabel,
}

/// The result of [`build_menu`].
#[derive(Debug, Clone, PartialEq)]
pub struct Menu<N> {
    pub container: N,
    pub entries: Vec<MenuEntry<N>>,
}

impl<N> Menu<N> {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Numbers the document's headings and fills the menu container.
///
/// Every heading's text becomes `"<label>. <title>"` and gets `data-level`,
/// `data-title` and `data-hierarchy` attributes. The container is emptied and
/// receives one `span.menuItem.menuItem<level>` per heading, bound to a smooth
/// scroll to that heading; then its hidden class is removed.
///
/// A page without headings yields an empty menu. A missing container is an
/// error and leaves the document untouched.
pub fn build_menu<D: Dom>(dom: &mut D, options: &MenuOptions) -> Result<Menu<D::Node>, MenuError> {
    let container = dom.require_element(&options.container_id)?;
    let outline = HeadingOutline::discover(&*dom);
    log::debug!(
        "building menu '{}' from {} headings",
        options.container_id,
        outline.len()
    );

    for record in outline.iter() {
        dom.set_text_content(&record.node, &record.numbered_text());
        dom.set_data(&record.node, LEVEL_DATA_KEY, &record.level.to_string())?;
        dom.set_data(&record.node, TITLE_DATA_KEY, &record.title)?;
        dom.set_data(&record.node, HIERARCHY_DATA_KEY, &record.label.to_string())?;
    }

    dom.clear_children(&container);
    let mut entries = Vec::with_capacity(outline.len());
    for record in outline.iter() {
        let item = dom.create_element("span")?;
        dom.append_child(&container, &item)?;
        dom.set_class_name(
            &item,
            &format!("{} {}{}", MENU_ITEM_CLASS, MENU_ITEM_CLASS, record.level),
        )?;
        dom.set_text_content(&item, &record.title);
        dom.set_data(&item, MENU_ITEM_LEVEL_DATA_KEY, &record.level.to_string())?;
        dom.listen(&item, DomEvent::Click, DomAction::ScrollTo(record.node.clone()))?;

        entries.push(MenuEntry {
            heading: record.node.clone(),
            item,
            level: record.level,
            title: record.title.clone(),
            label: record.label.clone(),
        });
    }

    dom.remove_class(&container, &options.hidden_class)?;
    Ok(Menu { container, entries })
}
