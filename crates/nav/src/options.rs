use docsite_types::{ContentId, NavEntry};
use serde::{Deserialize, Serialize};

/// Navigation bar markup and entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NavBarOptions {
    pub container_id: String,
    /// Class of the collapsed (default) state.
    pub compact_class: String,
    /// Class added next to `compact_class` while the small-screen menu is open.
    pub expanded_class: String,
    /// Marker class of the entry matching the displayed content.
    pub selected_class: String,
    /// Logo image source; no logo is rendered when `None`.
    pub logo: Option<String>,
    pub entries: Vec<NavEntry>,
}

impl Default for NavBarOptions {
    fn default() -> Self {
        Self {
            container_id: "myTopnav".to_string(),
            compact_class: "topnav".to_string(),
            expanded_class: "responsive".to_string(),
            selected_class: "selected".to_string(),
            logo: Some("logo.png".to_string()),
            entries: Vec::new(),
        }
    }
}

/// Content frame location and query conventions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FrameOptions {
    /// Element the frame is (re)created in.
    pub container_id: String,
    pub frame_id: String,
    /// Content shown when the query names none.
    pub default_content: ContentId,
    /// Query parameter naming the content page.
    pub nav_param: String,
    /// Top-level page that hosts the navigation bar.
    pub index_page: String,
    /// Frame height in pixels until the content has loaded.
    pub initial_height: u32,
    /// Redirect framed content pages to the index page when the navigation
    /// bar is missing.
    pub redirect_guard: bool,
}

impl Default for FrameOptions {
    fn default() -> Self {
        Self {
            container_id: "content".to_string(),
            frame_id: "contentObject".to_string(),
            default_content: ContentId::new("home"),
            nav_param: "nav".to_string(),
            index_page: "index.html".to_string(),
            initial_height: 1200,
            redirect_guard: true,
        }
    }
}

/// An e-mail address kept out of the static HTML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactOptions {
    pub element_id: String,
    /// The address with `marker` in place of `@`.
    pub obfuscated: String,
    pub marker: String,
}

impl Default for ContactOptions {
    fn default() -> Self {
        Self {
            element_id: "email".to_string(),
            obfuscated: String::new(),
            marker: ";x;".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_bar_options_from_json() {
        let options: NavBarOptions = serde_json::from_str(
            r#"{
                "logo": null,
                "entries": [
                    { "id": "home", "title": "Home", "target": "index.html?nav=home" },
                    { "id": "demo", "title": "Demo", "target": "index.html?nav=demo" }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(options.container_id, "myTopnav");
        assert_eq!(options.logo, None);
        assert_eq!(options.entries.len(), 2);
        assert_eq!(options.entries[1].id.as_str(), "demo");
    }

    #[test]
    fn test_frame_options_defaults() {
        let options: FrameOptions = serde_json::from_str(r#"{ "initialHeight": 800 }"#).unwrap();
        assert_eq!(options.initial_height, 800);
        assert_eq!(options.default_content.as_str(), "home");
        assert!(options.redirect_guard);
    }
}
