//! Error handling for WASM bindings.
//!
//! Converts docsite's error types into JavaScript `Error` objects carrying a
//! `code` property.

use docsite_core::SiteError;
use docsite_traits::DomError;
use wasm_bindgen::prelude::*;

/// Error codes for TypeScript consumption.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// A required element (menu, nav bar, content container) is absent
    MissingContainer,
    /// The query string could not be parsed
    MalformedQuery,
    /// The browser rejected a DOM operation
    Dom,
    /// Invalid configuration object
    Config,
}

impl ErrorCode {
    /// The value of the `code` property on the thrown `Error`.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::MissingContainer => "MISSING_CONTAINER",
            ErrorCode::MalformedQuery => "MALFORMED_QUERY",
            ErrorCode::Dom => "DOM_ERROR",
            ErrorCode::Config => "CONFIG_ERROR",
        }
    }
}

/// A JavaScript-friendly error type.
///
/// Note: This is NOT a wasm_bindgen struct because we need custom
/// conversion to JavaScript Error objects.
#[derive(Debug)]
pub struct DocSiteError {
    code: ErrorCode,
    message: String,
}

impl DocSiteError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Config, message)
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<SiteError> for DocSiteError {
    fn from(err: SiteError) -> Self {
        let code = match &err {
            SiteError::Config(_) | SiteError::Json(_) => ErrorCode::Config,
            SiteError::Query(_) => ErrorCode::MalformedQuery,
            _ if err.is_missing_container() => ErrorCode::MissingContainer,
            _ => ErrorCode::Dom,
        };
        Self::new(code, err.to_string())
    }
}

impl From<DomError> for DocSiteError {
    fn from(err: DomError) -> Self {
        SiteError::from(err).into()
    }
}

impl From<DocSiteError> for JsValue {
    fn from(err: DocSiteError) -> Self {
        let js_error = js_sys::Error::new(&err.message);

        // Add the error code as a property
        js_sys::Reflect::set(
            &js_error,
            &"code".into(),
            &JsValue::from_str(err.code.as_str()),
        )
        .ok();

        js_error.into()
    }
}
