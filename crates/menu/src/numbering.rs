//! Hierarchical section numbering.

use docsite_types::{HeadingLevel, HierarchyLabel};

/// Computes the hierarchy label of every heading, given the heading levels in
/// document order.
///
/// One pass runs per level, outermost first. Within a pass a counter
/// increments on headings of exactly that level, resets to zero on headings
/// of a higher rank (lower level number), and every heading at or below the
/// pass level gets the current counter appended to its label. A heading that
/// skips a level therefore carries a `0` component for the missing level.
pub fn number_levels(levels: &[HeadingLevel]) -> Vec<HierarchyLabel> {
    let mut labels = vec![HierarchyLabel::new(); levels.len()];

    for pass in HeadingLevel::all() {
        let mut counter: u32 = 0;
        for (index, (level, label)) in levels.iter().zip(labels.iter_mut()).enumerate() {
            if *level == pass {
                counter += 1;
            }
            if *level < pass {
                counter = 0;
            }
            if *level >= pass {
                label.push(counter);
                log::trace!("pass {}: heading {} (h{}) -> {}", pass, index, level, label);
            }
        }
    }

    labels
}
