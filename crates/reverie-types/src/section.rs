//! Canonical reflection section table.
//!
//! The five section names below are the single source of truth for the
//! reflection format. The prompt builder renders them into the developer
//! message, and the normalizer uses them to repair headings the generator
//! dropped. Both sides consuming one table keeps the format contract from
//! drifting between the two components.

/// The five reflection sections, in output order.
pub const CANONICAL_SECTIONS: [&str; 5] = [
    "What stands out",
    "Possible Gestalt themes",
    "Felt-sense prompts",
    "One safe experiment",
    "Grounding close",
];

/// Markdown heading marker used for every section.
pub const HEADING_MARKER: &str = "###";

/// Render a section name as its canonical Markdown heading line.
pub fn heading(name: &str) -> String {
    format!("{HEADING_MARKER} {name}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_order_is_fixed() {
        assert_eq!(CANONICAL_SECTIONS[0], "What stands out");
        assert_eq!(CANONICAL_SECTIONS[4], "Grounding close");
        assert_eq!(CANONICAL_SECTIONS.len(), 5);
    }

    #[test]
    fn test_heading_renders_with_marker() {
        assert_eq!(heading("What stands out"), "### What stands out");
    }
}
