//! `DocSite`, the JavaScript entry point.

use crate::document::Dispatcher;
use crate::error::DocSiteError;
use crate::window::BrowserWindow;
use docsite_core::nav::{NavGuard, NavState};
use docsite_core::{DomAction, Site, SiteConfig, Window};
use docsite_types::ContentId;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::Element;

/// Routes fired actions back into `site` against a fresh view of the page.
fn dispatcher(site: Rc<Site>) -> Dispatcher {
    Rc::new(move |action: DomAction<Element>| match BrowserWindow::current(dispatcher(Rc::clone(&site))) {
        Ok(mut window) => site.dispatch(&mut window, action),
        Err(e) => log::warn!("dropping {:?}: {}", action, e),
    })
}

/// The documentation site behaviour, bound to the page it runs in.
///
/// # Example
///
/// ```javascript
/// const site = new DocSite({
///   navBar: {
///     entries: [
///       { id: "home", title: "Home", target: "index.html?nav=home" },
///       { id: "guide", title: "Guide", target: "index.html?nav=guide" },
///     ],
///   },
/// });
///
/// // index.html
/// site.onIndexLoad();
///
/// // guide.html, loaded into the content frame
/// site.onContentPageLoad("guide");
/// ```
#[wasm_bindgen]
pub struct DocSite {
    site: Rc<Site>,
}

impl DocSite {
    fn window(&self) -> Result<BrowserWindow, DocSiteError> {
        Ok(BrowserWindow::current(dispatcher(Rc::clone(&self.site)))?)
    }
}

#[wasm_bindgen]
impl DocSite {
    /// Create a site from a configuration object. Missing fields take their
    /// defaults; `undefined` gives the default configuration.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<DocSite, JsValue> {
        let config: SiteConfig = if config.is_undefined() || config.is_null() {
            SiteConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)
                .map_err(|e| DocSiteError::config(format!("Invalid configuration object: {}", e)))?
        };
        config.validate().map_err(DocSiteError::from)?;
        Ok(Self {
            site: Rc::new(Site::new(config)),
        })
    }

    /// Create a site from a JSON configuration string.
    #[wasm_bindgen(js_name = fromJson)]
    pub fn from_json(json: &str) -> Result<DocSite, JsValue> {
        let config = SiteConfig::from_json(json).map_err(DocSiteError::from)?;
        Ok(Self {
            site: Rc::new(Site::new(config)),
        })
    }

    /// The effective configuration, defaults included.
    #[wasm_bindgen(getter)]
    pub fn config(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(self.site.config())
            .map_err(|e| DocSiteError::config(e.to_string()).into())
    }

    /// Number the headings of the current page and fill its menu.
    ///
    /// Returns the number of menu entries.
    #[wasm_bindgen(js_name = buildMenu)]
    pub fn build_menu(&self) -> Result<u32, JsValue> {
        let mut window = self.window()?;
        let menu = self
            .site
            .build_menu(window.document_mut())
            .map_err(DocSiteError::from)?;
        Ok(u32::try_from(menu.entries.len()).unwrap_or(u32::MAX))
    }

    /// Render the navigation bar into the top-level page and mark
    /// `activeId`, if given.
    #[wasm_bindgen(js_name = buildNavBar)]
    pub fn build_nav_bar(&self, active_id: Option<String>) -> Result<(), JsValue> {
        let mut window = self.window()?;
        let active = active_id.map(ContentId::from);
        self.site
            .build_nav_bar(window.top_document_mut(), active.as_ref())
            .map_err(DocSiteError::from)?;
        Ok(())
    }

    /// Show the content named by the `nav` query parameter, or the default
    /// content. Returns the id that was shown.
    #[wasm_bindgen(js_name = checkNavParam)]
    pub fn check_nav_param(&self) -> Result<String, JsValue> {
        let mut window = self.window()?;
        let id = self
            .site
            .check_nav_param(&mut window)
            .map_err(DocSiteError::from)?;
        Ok(id.to_string())
    }

    /// All values of `key` in the top-level query string, in order.
    ///
    /// Throws `MALFORMED_QUERY` if a segment has no `=`.
    #[wasm_bindgen(js_name = queryValues)]
    pub fn query_values(&self, key: &str) -> Result<Vec<String>, JsValue> {
        let window = self.window()?;
        let query = self.site.query(&window).map_err(DocSiteError::from)?;
        Ok(query
            .get(key)
            .map(|value| value.values().to_vec())
            .unwrap_or_default())
    }

    /// Load `<id>.html` into the content frame.
    #[wasm_bindgen(js_name = showContent)]
    pub fn show_content(&self, id: &str) -> Result<(), JsValue> {
        let mut window = self.window()?;
        self.site
            .show_content(&mut window, &ContentId::from(id))
            .map_err(DocSiteError::from)?;
        Ok(())
    }

    /// Fit the content frame to its loaded page. Returns the new height in
    /// pixels, or `undefined` if the frame has not loaded yet.
    #[wasm_bindgen(js_name = resizeFrame)]
    pub fn resize_frame(&self) -> Result<Option<u32>, JsValue> {
        let mut window = self.window()?;
        Ok(self
            .site
            .resize_frame(&mut window)
            .map_err(DocSiteError::from)?)
    }

    /// Flip the navigation bar. Returns `true` when it is now expanded.
    #[wasm_bindgen(js_name = toggleNav)]
    pub fn toggle_nav(&self) -> Result<bool, JsValue> {
        let mut window = self.window()?;
        let state = self
            .site
            .toggle_nav(&mut window)
            .map_err(DocSiteError::from)?;
        Ok(state == NavState::Expanded)
    }

    /// Redirect to the index page if this page is shown without the
    /// navigation bar. Returns the redirect address, if any.
    #[wasm_bindgen(js_name = ensureNavBarVisible)]
    pub fn ensure_nav_bar_visible(&self, id: &str) -> Result<Option<String>, JsValue> {
        let mut window = self.window()?;
        match self.site.ensure_nav_bar_visible(&mut window, &ContentId::from(id)) {
            NavGuard::Redirected(href) => Ok(Some(href)),
            NavGuard::Present | NavGuard::Disabled => Ok(None),
        }
    }

    /// Write the configured contact address into its element.
    #[wasm_bindgen(js_name = revealEmail)]
    pub fn reveal_email(&self) -> Result<Option<String>, JsValue> {
        let mut window = self.window()?;
        Ok(self
            .site
            .reveal_email(window.document_mut())
            .map_err(DocSiteError::from)?)
    }

    /// Index page load handler. Failures are logged, never thrown.
    #[wasm_bindgen(js_name = onIndexLoad)]
    pub fn on_index_load(&self) {
        match self.window() {
            Ok(mut window) => self.site.on_index_load(&mut window),
            Err(e) => log::warn!("index page load skipped: {}", e.message()),
        }
    }

    /// Content page load handler. Failures are logged, never thrown.
    #[wasm_bindgen(js_name = onContentPageLoad)]
    pub fn on_content_page_load(&self, id: Option<String>) {
        let id = id.map(ContentId::from);
        match self.window() {
            Ok(mut window) => self.site.on_content_page_load(&mut window, id.as_ref()),
            Err(e) => log::warn!("content page load skipped: {}", e.message()),
        }
    }
}
