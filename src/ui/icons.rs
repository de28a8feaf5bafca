//! Pass/fail glyphs.
//!
//! Unicode check marks where the terminal renders them reliably, bracketed
//! ASCII labels everywhere else.

use super::theme::ReliantTheme;

/// Status of a single rule in the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusKind {
    /// Rule passed.
    Pass,
    /// Rule failed.
    Fail,
}

impl StatusKind {
    /// Status for a pass flag.
    pub fn from_pass(pass: bool) -> Self {
        if pass {
            Self::Pass
        } else {
            Self::Fail
        }
    }

    /// Unicode icon for capable terminals.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Pass => "✓",
            Self::Fail => "✗",
        }
    }

    /// Bracketed text for terminals without glyph support.
    pub fn bracketed(self) -> &'static str {
        match self {
            Self::Pass => "[ok]",
            Self::Fail => "[FAIL]",
        }
    }

    /// Icon or bracketed label.
    pub fn glyph(self, ascii: bool) -> &'static str {
        if ascii {
            self.bracketed()
        } else {
            self.icon()
        }
    }

    /// Format a status line: glyph + bold name, colored by status.
    pub fn format(self, theme: &ReliantTheme, ascii: bool, name: &str) -> String {
        let (glyph_style, name_style) = match self {
            Self::Pass => (&theme.success, &theme.success_name),
            Self::Fail => (&theme.error, &theme.error_name),
        };
        format!(
            "{} {}",
            glyph_style.apply_to(self.glyph(ascii)),
            name_style.apply_to(name)
        )
    }
}
