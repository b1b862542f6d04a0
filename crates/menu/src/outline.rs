//! Side table of heading metadata.
//!
//! Level, original title and hierarchy label are computed once per build and
//! kept here instead of on the elements. The elements only receive `data-*`
//! mirrors of these values for styling.

use crate::numbering::number_levels;
use docsite_traits::Dom;
use docsite_types::{HeadingLevel, HierarchyLabel};

/// Attribute caching a heading's original title across builds.
pub const TITLE_DATA_KEY: &str = "title";
pub const LEVEL_DATA_KEY: &str = "level";
pub const HIERARCHY_DATA_KEY: &str = "hierarchy";

/// Computed metadata for one heading element.
#[derive(Debug, Clone, PartialEq)]
pub struct HeadingRecord<N> {
    pub node: N,
    pub level: HeadingLevel,
    /// The heading text before numbering.
    pub title: String,
    pub label: HierarchyLabel,
}

impl<N> HeadingRecord<N> {
    /// The visible text after numbering: `"<label>. <title>"`.
    pub fn numbered_text(&self) -> String {
        self.label.prefix(&self.title)
    }
}

/// All headings of a document, in document order, with their labels.
#[derive(Debug, Clone, PartialEq)]
pub struct HeadingOutline<N> {
    records: Vec<HeadingRecord<N>>,
}

impl<N: Clone> HeadingOutline<N> {
    /// Scans the document's headings and numbers them.
    ///
    /// Headings whose tag cannot be mapped to a level are logged and left
    /// out. A heading that already carries a cached title (from an earlier
    /// build) contributes that title rather than its prefixed text.
    pub fn discover<D>(dom: &D) -> Self
    where
        D: Dom<Node = N>,
    {
        let mut nodes = Vec::new();
        let mut levels = Vec::new();
        let mut titles = Vec::new();

        for node in dom.headings() {
            let tag = dom.tag_name(&node);
            let level = match HeadingLevel::from_tag_name(&tag) {
                Ok(level) => level,
                Err(e) => {
                    log::warn!("skipping heading: {}", e);
                    continue;
                }
            };
            let title = dom
                .data(&node, TITLE_DATA_KEY)
                .unwrap_or_else(|| dom.text_content(&node));
            nodes.push(node);
            levels.push(level);
            titles.push(title);
        }

        let labels = number_levels(&levels);
        let records = nodes
            .into_iter()
            .zip(levels)
            .zip(titles)
            .zip(labels)
            .map(|(((node, level), title), label)| HeadingRecord {
                node,
                level,
                title,
                label,
            })
            .collect();

        Self { records }
    }
}

impl<N> HeadingOutline<N> {
    pub fn records(&self) -> &[HeadingRecord<N>] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &HeadingRecord<N>> {
        self.records.iter()
    }
}
