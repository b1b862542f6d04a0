//! In-memory document model.
//!
//! This crate defines a small arena-backed element tree that implements the
//! [`Dom`](docsite_traits::Dom) and [`Window`](docsite_traits::Window) seams.
//! It stands in for the browser in tests and demos, and records scrolls,
//! bound events and navigations so they can be inspected afterwards.

pub mod document;
pub mod html;
pub mod window;

pub use document::{InMemoryDocument, NodeId};
pub use window::InMemoryWindow;
