//! Site configuration.

use crate::error::SiteError;
use docsite_menu::MenuOptions;
use docsite_nav::{ContactOptions, FrameOptions, NavBarOptions};
use docsite_types::{ContentId, NavEntry};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Everything a [`crate::Site`] needs to know about the page markup.
///
/// Every field has a default, so `{}` is a valid configuration that renders
/// an empty navigation bar.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteConfig {
    pub menu: MenuOptions,
    pub nav_bar: NavBarOptions,
    pub frame: FrameOptions,
    /// The e-mail reveal is skipped when absent.
    pub contact: Option<ContactOptions>,
}

impl SiteConfig {
    pub fn builder() -> SiteConfigBuilder {
        SiteConfigBuilder::default()
    }

    /// Parses and validates a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self, SiteError> {
        let config: SiteConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects configurations the page handlers cannot act on: empty
    /// element ids and duplicate navigation entry ids.
    pub fn validate(&self) -> Result<(), SiteError> {
        let required = [
            ("menu.containerId", &self.menu.container_id),
            ("navBar.containerId", &self.nav_bar.container_id),
            ("frame.containerId", &self.frame.container_id),
            ("frame.frameId", &self.frame.frame_id),
            ("frame.navParam", &self.frame.nav_param),
        ];
        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(SiteError::Config(format!("'{}' must not be empty", name)));
            }
        }
        if self.frame.default_content.as_str().is_empty() {
            return Err(SiteError::Config("'frame.defaultContent' must not be empty".to_string()));
        }

        let mut seen = HashSet::new();
        for entry in &self.nav_bar.entries {
            if entry.id.as_str().is_empty() {
                return Err(SiteError::Config(format!(
                    "navigation entry '{}' has an empty id",
                    entry.title
                )));
            }
            if !seen.insert(entry.id.as_str()) {
                return Err(SiteError::Config(format!(
                    "duplicate navigation entry id '{}'",
                    entry.id
                )));
            }
        }

        if let Some(contact) = &self.contact {
            if contact.marker.is_empty() {
                return Err(SiteError::Config("'contact.marker' must not be empty".to_string()));
            }
        }
        Ok(())
    }
}

/// Builds a [`SiteConfig`] in code.
#[derive(Debug, Clone, Default)]
pub struct SiteConfigBuilder {
    config: SiteConfig,
}

impl SiteConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_menu(mut self, menu: MenuOptions) -> Self {
        self.config.menu = menu;
        self
    }

    pub fn with_menu_container(mut self, id: impl Into<String>) -> Self {
        self.config.menu.container_id = id.into();
        self
    }

    pub fn with_nav_bar(mut self, nav_bar: NavBarOptions) -> Self {
        self.config.nav_bar = nav_bar;
        self
    }

    /// Appends one navigation entry.
    pub fn with_entry(mut self, entry: NavEntry) -> Self {
        self.config.nav_bar.entries.push(entry);
        self
    }

    pub fn with_entries(mut self, entries: impl IntoIterator<Item = NavEntry>) -> Self {
        self.config.nav_bar.entries.extend(entries);
        self
    }

    pub fn with_logo(mut self, logo: Option<String>) -> Self {
        self.config.nav_bar.logo = logo;
        self
    }

    pub fn with_frame(mut self, frame: FrameOptions) -> Self {
        self.config.frame = frame;
        self
    }

    pub fn with_default_content(mut self, id: impl Into<ContentId>) -> Self {
        self.config.frame.default_content = id.into();
        self
    }

    pub fn with_initial_height(mut self, height: u32) -> Self {
        self.config.frame.initial_height = height;
        self
    }

    pub fn with_redirect_guard(mut self, enabled: bool) -> Self {
        self.config.frame.redirect_guard = enabled;
        self
    }

    /// Enables the e-mail reveal for the default element with the default
    /// marker.
    pub fn with_email(mut self, obfuscated: impl Into<String>) -> Self {
        self.config.contact = Some(ContactOptions {
            obfuscated: obfuscated.into(),
            ..ContactOptions::default()
        });
        self
    }

    pub fn with_contact(mut self, contact: Option<ContactOptions>) -> Self {
        self.config.contact = contact;
        self
    }

    pub fn build(self) -> Result<SiteConfig, SiteError> {
        self.config.validate()?;
        Ok(self.config)
    }
}
