//! Color palette for the correction page.
//!
//! Carried inside [`crate::config::AppConfig`] and applied as CSS custom
//! properties on the page root, so stylesheets never hardcode brand colors.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Background tint of a regular detail block.
const DETAIL_BACKGROUND: &str = "#f4f4f9";
/// Background tint of a detail block produced by the fallback path.
const DETAIL_FALLBACK_BACKGROUND: &str = "#fff8e1";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    pub primary: &'static str,
    pub secondary: &'static str,
}

impl Default for Theme {
    fn default() -> Self {
        Self { primary: "#667eea", secondary: "#764ba2" }
    }
}

impl Theme {
    /// Inline style declaring the palette as custom properties.
    #[must_use]
    pub fn style_vars(&self) -> String {
        format!("--color-primary: {}; --color-secondary: {};", self.primary, self.secondary)
    }

    #[must_use]
    pub fn detail_background(&self, fallback: bool) -> &'static str {
        if fallback { DETAIL_FALLBACK_BACKGROUND } else { DETAIL_BACKGROUND }
    }
}
