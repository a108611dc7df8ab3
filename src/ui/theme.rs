use crossterm::style::Color;

/// Design tokens for confirmify CLI output.
///
/// Only these semantic colors and icons may be used by the report module.
pub mod colors {
    use super::Color;

    pub const SUCCESS: Color = Color::Green;
    pub const ERROR: Color = Color::Red;
    pub const WARNING: Color = Color::Yellow;
    pub const INFO: Color = Color::Cyan;
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const UPDATED: &str = "✓";
    pub const UNCHANGED: &str = "○";
    pub const FAILED: &str = "✗";
    pub const HEADER: &str = "⟳";
}

pub mod icons_ascii {
    pub const UPDATED: &str = "[OK]";
    pub const UNCHANGED: &str = "[ ]";
    pub const FAILED: &str = "[FAIL]";
    pub const HEADER: &str = "[~]";
}
