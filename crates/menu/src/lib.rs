//! Table-of-contents menu for documentation pages.
//!
//! [`build_menu`] scans the page's headings in document order, numbers them
//! hierarchically (`1`, `1.1`, `1.2`, `2`, ...), prefixes each heading's text
//! with its number and fills a menu container with one clickable entry per
//! heading.

pub mod builder;
pub mod error;
pub mod numbering;
pub mod outline;

pub use builder::{Menu, MenuEntry, MenuOptions, build_menu};
pub use error::MenuError;
pub use numbering::number_levels;
pub use outline::{HeadingOutline, HeadingRecord};
