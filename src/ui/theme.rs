//! Visual theme and styling.

use console::Style;

/// reliant's visual theme.
#[derive(Debug, Clone)]
pub struct ReliantTheme {
    /// Style for passing rules (green).
    pub success: Style,
    /// Style for failing rules and errors (red).
    pub error: Style,
    /// Style for passing rule names (green bold).
    pub success_name: Style,
    /// Style for failing rule names (red bold).
    pub error_name: Style,
    /// Style for found versions in issue lines (red bold).
    pub error_value: Style,
    /// Style for rule names and required versions (bold).
    pub highlight: Style,
    /// Style for the report title (bold).
    pub header: Style,
    /// Style for secondary text such as commands (dim).
    pub dim: Style,
}

impl Default for ReliantTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl ReliantTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            error: Style::new().red(),
            success_name: Style::new().green().bold(),
            error_name: Style::new().red().bold(),
            error_value: Style::new().red().bold(),
            highlight: Style::new().bold(),
            header: Style::new().bold(),
            dim: Style::new().dim(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            error: Style::new(),
            success_name: Style::new(),
            error_name: Style::new(),
            error_value: Style::new(),
            highlight: Style::new(),
            header: Style::new(),
            dim: Style::new(),
        }
    }

    /// Pick the colored or plain theme.
    pub fn for_color(use_color: bool) -> Self {
        if use_color {
            // Styles are forced on; the caller already decided color is wanted.
            let theme = Self::new();
            Self {
                success: theme.success.force_styling(true),
                error: theme.error.force_styling(true),
                success_name: theme.success_name.force_styling(true),
                error_name: theme.error_name.force_styling(true),
                error_value: theme.error_value.force_styling(true),
                highlight: theme.highlight.force_styling(true),
                header: theme.header.force_styling(true),
                dim: theme.dim.force_styling(true),
            }
        } else {
            Self::plain()
        }
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check if stdout is a TTY
    console::Term::stdout().is_term()
}
