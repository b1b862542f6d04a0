//! Top navigation bar and content frame behaviour.
//!
//! - [`navbar`] renders the navigation links, the small-screen toggle and the
//!   logo, and applies the selected marker once the links exist.
//! - [`frame`] picks the content page from the `nav` query parameter, swaps
//!   it into the content frame and fits the frame to its content.
//! - [`contact`] reveals an obfuscated e-mail address.

pub mod contact;
pub mod error;
pub mod frame;
pub mod navbar;
pub mod options;

pub use contact::reveal_email;
pub use error::NavError;
pub use frame::{NavGuard, check_nav_param, ensure_nav_bar_visible, nav_param, resize_frame, show_content};
pub use navbar::{NavState, PendingSelection, RenderedNavBar, apply_selection, collapse_nav, render_nav_bar, toggle_nav};
pub use options::{ContactOptions, FrameOptions, NavBarOptions};
