//! Terminal presentation: theme and status glyphs.

pub mod icons;
pub mod theme;

pub use icons::StatusKind;
pub use theme::{should_use_colors, ReliantTheme};
