//! Content frame loading.
//!
//! The index page hosts the navigation bar and a content container. Content
//! pages are loaded into an iframe inside that container; the `nav` query
//! parameter of the top-level address says which one.

use crate::error::NavError;
use crate::navbar::{apply_selection, collapse_nav};
use crate::options::{FrameOptions, NavBarOptions};
use docsite_query::{Query, build_query};
use docsite_traits::{Dom, DomAction, DomEvent, Window};
use docsite_types::ContentId;

type NodeOf<W> = <<W as Window>::Document as Dom>::Node;

/// Outcome of [`ensure_nav_bar_visible`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavGuard {
    /// The top document already shows the navigation bar.
    Present,
    /// The top window was sent to this address.
    Redirected(String),
    /// The guard is switched off in the configuration.
    Disabled,
}

/// The content id named by the top-level query, if any.
pub fn nav_param<W: Window>(window: &W, frame: &FrameOptions) -> Option<ContentId> {
    let search = window.top_search();
    if search.is_empty() {
        return None;
    }
    Query::parse_lenient(&search)
        .first(&frame.nav_param)
        .filter(|value| !value.is_empty())
        .map(ContentId::from)
}

/// Shows the content named by the query, or the default content.
pub fn check_nav_param<W: Window>(
    window: &mut W,
    nav: &NavBarOptions,
    frame: &FrameOptions,
) -> Result<ContentId, NavError> {
    let id = nav_param(window, frame).unwrap_or_else(|| frame.default_content.clone());
    log::info!("initial content: {}", id);
    show_content(window, nav, frame, &id)?;
    Ok(id)
}

/// Loads `<id>.html` into a fresh content frame in the top document.
///
/// The content container is emptied and gets a new iframe whose load event
/// triggers a resize. The selected marker moves to the navigation entry
/// whose id equals `id` (or is just cleared if there is none), and the
/// navigation bar collapses.
pub fn show_content<W: Window>(
    window: &mut W,
    nav: &NavBarOptions,
    frame: &FrameOptions,
    id: &ContentId,
) -> Result<NodeOf<W>, NavError> {
    let dom = window.top_document_mut();
    let container = dom.require_element(&frame.container_id)?;
    dom.clear_children(&container);

    let iframe = dom.create_element("iframe")?;
    dom.set_attribute(&iframe, "id", &frame.frame_id)?;
    dom.set_attribute(&iframe, "src", &id.resource_path())?;
    dom.set_attribute(&iframe, "frameborder", "0")?;
    dom.set_attribute(&iframe, "scrolling", "no")?;
    dom.set_style(&iframe, "width", "100%")?;
    dom.set_style(&iframe, "height", &format!("{}px", frame.initial_height))?;
    dom.listen(&iframe, DomEvent::Load, DomAction::ResizeFrame)?;
    dom.append_child(&container, &iframe)?;

    apply_selection(dom, &nav.selected_class, id)?;
    collapse_nav(dom, nav)?;

    log::debug!("content frame now shows {}", id.resource_path());
    Ok(iframe)
}

/// Fits the content frame to the scroll height of its loaded document.
///
/// Returns the applied height, or `None` if the frame has not loaded yet.
pub fn resize_frame<D: Dom>(dom: &mut D, frame: &FrameOptions) -> Result<Option<u32>, NavError> {
    let node = dom.require_element(&frame.frame_id)?;
    match dom.content_scroll_height(&node) {
        Some(height) => {
            dom.set_style(&node, "height", &format!("{}px", height))?;
            log::debug!("resized content frame to {}px", height);
            Ok(Some(height))
        }
        None => {
            log::debug!("content frame has no loaded document yet");
            Ok(None)
        }
    }
}

/// Sends the top window to the index page when the navigation bar is
/// missing, e.g. when a content page was opened on its own.
///
/// The redirect carries `id` as the `nav` parameter so the index page loads
/// the same content again.
pub fn ensure_nav_bar_visible<W: Window>(
    window: &mut W,
    nav: &NavBarOptions,
    frame: &FrameOptions,
    id: &ContentId,
) -> NavGuard {
    if !frame.redirect_guard {
        return NavGuard::Disabled;
    }
    if window.top_document().element_by_id(&nav.container_id).is_some() {
        return NavGuard::Present;
    }
    let href = format!(
        "{}?{}",
        frame.index_page,
        build_query([(frame.nav_param.as_str(), id.as_str())])
    );
    window.navigate_top(&href);
    NavGuard::Redirected(href)
}
