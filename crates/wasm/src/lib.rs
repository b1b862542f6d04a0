//! WebAssembly bindings for the docsite behaviour.
//!
//! This crate runs the platform-agnostic `docsite-core` logic against the
//! real browser DOM through `web-sys`.
//!
//! # Architecture
//!
//! Every call builds a fresh [`BrowserWindow`]: the current document plus the
//! top-level document when the page is framed. Click and load behaviours
//! are bound as leaked closures that re-enter the shared `Site` through a
//! dispatcher, so no global mutable state is needed.
//!
//! ## Module Structure
//!
//! - [`site`] - `DocSite` class exported to JavaScript
//! - [`document`] - `BrowserDocument`, the `Dom` implementation
//! - [`window`] - `BrowserWindow`, the `Window` implementation
//! - [`error`] - Error types with JavaScript interop
//!
//! # Example
//!
//! ```javascript
//! import init, { DocSite } from '@docsite/wasm';
//!
//! await init();
//!
//! const site = DocSite.fromJson(await (await fetch('site.json')).text());
//! window.addEventListener('load', () => site.onIndexLoad());
//! ```

pub mod document;
mod error;
pub mod site;
pub mod window;

pub use document::BrowserDocument;
pub use error::{DocSiteError, ErrorCode};
pub use site::DocSite;
pub use window::BrowserWindow;

use wasm_bindgen::prelude::*;

/// Initialize the WASM module.
///
/// Sets up panic hooks for better error messages in the browser console.
/// It is called automatically when using wasm-pack's generated JavaScript.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();

    #[cfg(feature = "console-logging")]
    {
        console_log::init_with_level(log::Level::Debug).ok();
    }
}

/// Get the version of the docsite-wasm library.
#[wasm_bindgen(js_name = getVersion)]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
