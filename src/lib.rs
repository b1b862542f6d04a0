//! # docsite
//!
//! Browser-side helpers for a static documentation website, written against
//! a small DOM abstraction:
//!
//! - a table-of-contents menu built from the page's headings, numbered
//!   hierarchically (`1`, `1.1`, `1.2`, `2`, ...)
//! - a top navigation bar built from a configured list of entries
//! - content pages loaded into an iframe, resized to fit, and redirected
//!   back to the index page when opened on their own
//!
//! The same logic runs against [`InMemoryDocument`] (tests, demos,
//! pre-rendering) and against the browser DOM through `docsite-wasm`.
//!
//! ```no_run
//! use docsite::{InMemoryWindow, Site, load_config};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let site = Site::new(load_config("site.json")?);
//! let mut window = InMemoryWindow::top_level(docsite::InMemoryDocument::new(), "?nav=guide");
//! site.on_index_load(&mut window);
//! # Ok(())
//! # }
//! ```

pub mod config;

pub use config::{ConfigError, load_config};

// Re-export the component crates
pub use docsite_dom as dom;
pub use docsite_menu as menu;
pub use docsite_nav as nav;
pub use docsite_query as query;
pub use docsite_traits as traits;
pub use docsite_types as types;

pub use docsite_core::{Site, SiteConfig, SiteConfigBuilder, SiteError};
pub use docsite_dom::{InMemoryDocument, InMemoryWindow, NodeId};
pub use docsite_traits::{Dom, DomAction, DomError, DomEvent, ScrollBehavior, Window};
pub use docsite_types::{ContentId, HeadingLevel, HierarchyLabel, NavEntry};
