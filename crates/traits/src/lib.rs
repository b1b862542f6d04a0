pub mod dom;
pub mod window;

pub use dom::{Dom, DomAction, DomError, DomEvent, ScrollBehavior};
pub use window::Window;
