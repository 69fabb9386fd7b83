//! Connector glyph sets.

/// The connector strings the renderer draws with.
///
/// Both built-in sets are two columns wide, so ASCII and Unicode output share
/// the same indent geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    /// Branch marker before a non-final child.
    pub branch: &'static str,
    /// Branch marker before the final child.
    pub last_branch: &'static str,
    /// Continuation column under a non-final child.
    pub cont: &'static str,
    /// Blank column under the final child.
    pub blank: &'static str,
}

/// Plain ASCII connectors.
pub const ASCII: Glyphs = Glyphs {
    branch: "+-",
    last_branch: "+-",
    cont: "| ",
    blank: "  ",
};

/// Unicode box-drawing connectors.
pub const UNICODE: Glyphs = Glyphs {
    branch: "├─",
    last_branch: "└─",
    cont: "│ ",
    blank: "  ",
};

impl Glyphs {
    /// The glyph set for `unicode` mode.
    pub fn select(unicode: bool) -> &'static Glyphs {
        if unicode {
            &UNICODE
        } else {
            &ASCII
        }
    }
}
