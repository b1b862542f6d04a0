//! # docsite-core
//!
//! Platform-agnostic behaviour of the documentation site:
//! - **config**: `SiteConfig`, the single configuration value passed around
//! - **site**: `Site`, which runs the page-load handlers and executes bound
//!   click/load actions against any [`Window`] implementation
//! - **error**: `SiteError`, aggregating the errors of all behaviour crates
//!
//! ## Design Principle
//!
//! This crate never touches a real browser. Everything goes through the
//! `Dom` and `Window` traits, implemented by `docsite-dom` (in memory) and
//! `docsite-wasm` (browser).

// Re-export foundation crates
pub use docsite_traits as traits;
pub use docsite_types as types;

// Re-export behaviour crates
pub use docsite_menu as menu;
pub use docsite_nav as nav;
pub use docsite_query as query;

pub mod config;
pub mod error;
pub mod site;

pub use config::{SiteConfig, SiteConfigBuilder};
pub use error::SiteError;
pub use site::Site;

pub use traits::{Dom, DomAction, DomError, DomEvent, ScrollBehavior, Window};
pub use types::{ContentId, HeadingLevel, HierarchyLabel, NavEntry};
