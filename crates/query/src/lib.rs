//! Query-string handling for the content loader.
//!
//! The query is split on `&`, each segment on its first `=`. Repeated keys
//! accumulate: the first occurrence is a scalar, the second promotes it to a
//! list, later ones append. Values are percent-decoded the way a URI
//! component is decoded (`+` stays a plus sign).

pub mod encode;
pub mod error;
mod parser;
pub mod query;

// --- Public API ---
pub use encode::{build_query, encode_component};
pub use error::QueryError;
pub use query::{Query, QueryValue, parse_query};
