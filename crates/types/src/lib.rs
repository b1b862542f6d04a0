pub mod error;
pub mod heading;
pub mod ids;
pub mod navigation;

pub use error::TypeError;
pub use heading::{HeadingLevel, HierarchyLabel};
pub use ids::ContentId;
pub use navigation::NavEntry;
