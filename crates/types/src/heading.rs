//! Heading levels and hierarchy labels.

use crate::error::TypeError;
use serde::Serialize;
use std::fmt;

/// The nesting level of a heading, 1 (`h1`) through 6 (`h6`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct HeadingLevel(u8);

impl HeadingLevel {
    pub const MIN: HeadingLevel = HeadingLevel(1);
    pub const MAX: HeadingLevel = HeadingLevel(6);

    /// Creates a level, rejecting anything outside 1..=6.
    pub fn new(level: u8) -> Result<Self, TypeError> {
        if (Self::MIN.0..=Self::MAX.0).contains(&level) {
            Ok(Self(level))
        } else {
            Err(TypeError::UnsupportedHeadingLevel(level.to_string()))
        }
    }

    /// Derives the level from an element tag name such as `h3` or `H3`.
    ///
    /// Only the exact form `h` followed by a single digit is accepted, so
    /// `h01` and `h+1` are rejected.
    pub fn from_tag_name(tag: &str) -> Result<Self, TypeError> {
        let unsupported = || TypeError::UnsupportedHeadingLevel(tag.to_string());
        match tag.as_bytes() {
            [b'h' | b'H', digit @ b'0'..=b'9'] => Self::new(digit - b'0').map_err(|_| unsupported()),
            _ => Err(unsupported()),
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// The lowercase tag name for this level, e.g. `h2`.
    pub fn tag_name(self) -> String {
        format!("h{}", self.0)
    }

    /// All levels from outermost to innermost.
    pub fn all() -> impl Iterator<Item = HeadingLevel> {
        (Self::MIN.0..=Self::MAX.0).map(HeadingLevel)
    }
}

impl TryFrom<u8> for HeadingLevel {
    type Error = TypeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for HeadingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A dot-separated section numeral such as `2.1.3`.
///
/// Components are stored in order from the outermost level inward. A
/// component can be `0` when a heading skips an intermediate level.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct HierarchyLabel(Vec<u32>);

impl HierarchyLabel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, component: u32) {
        self.0.push(component);
    }

    pub fn components(&self) -> &[u32] {
        &self.0
    }

    pub fn depth(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Formats a heading title with this label as prefix: `"1.2. Title"`.
    pub fn prefix(&self, title: &str) -> String {
        format!("{}. {}", self, title)
    }
}

impl From<Vec<u32>> for HierarchyLabel {
    fn from(components: Vec<u32>) -> Self {
        Self(components)
    }
}

impl fmt::Display for HierarchyLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for component in &self.0 {
            if !first {
                f.write_str(".")?;
            }
            write!(f, "{}", component)?;
            first = false;
        }
        Ok(())
    }
}
