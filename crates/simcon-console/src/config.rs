#![forbid(unsafe_code)]

//! Console configuration.

use simcon_core::FontStyle;

/// Default bound on retained log lines.
pub const DEFAULT_MAX_LINES: usize = 300;
/// Default bound on retained history entries.
pub const DEFAULT_HISTORY_SIZE: usize = 64;
/// Default edit-buffer capacity in bytes.
pub const DEFAULT_INPUT_CAPACITY: usize = 256;
/// Default console panel height in pixels.
pub const DEFAULT_HEIGHT: i32 = 322;

/// Configuration for a [`Console`](crate::Console).
///
/// # Example
/// ```
/// use simcon_console::ConsoleConfig;
///
/// let config = ConsoleConfig::default()
///     .with_small_font(true)
///     .with_max_lines(1000);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleConfig {
    /// Maximum log lines retained; older lines are evicted first.
    pub max_lines: usize,
    /// Maximum history entries retained.
    pub history_size: usize,
    /// Edit-buffer capacity in bytes (one byte reserved).
    pub input_capacity: usize,
    /// Console panel height in pixels.
    pub height: i32,
    /// Use the compact font instead of the regular one.
    pub small_font: bool,
    /// Text is rendered with a TrueType font; suppresses the glyph
    /// outline that bitmap fonts need for contrast.
    pub truetype_font: bool,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            max_lines: DEFAULT_MAX_LINES,
            history_size: DEFAULT_HISTORY_SIZE,
            input_capacity: DEFAULT_INPUT_CAPACITY,
            height: DEFAULT_HEIGHT,
            small_font: false,
            truetype_font: false,
        }
    }
}

impl ConsoleConfig {
    /// Set the log line bound (builder).
    #[must_use]
    pub fn with_max_lines(mut self, max_lines: usize) -> Self {
        self.max_lines = max_lines;
        self
    }

    /// Set the history bound (builder).
    #[must_use]
    pub fn with_history_size(mut self, history_size: usize) -> Self {
        self.history_size = history_size;
        self
    }

    /// Set the edit-buffer byte capacity (builder).
    #[must_use]
    pub fn with_input_capacity(mut self, input_capacity: usize) -> Self {
        self.input_capacity = input_capacity;
        self
    }

    /// Set the console panel height (builder).
    #[must_use]
    pub fn with_height(mut self, height: i32) -> Self {
        self.height = height;
        self
    }

    /// Use the compact font (builder).
    #[must_use]
    pub fn with_small_font(mut self, small_font: bool) -> Self {
        self.small_font = small_font;
        self
    }

    /// Mark text as TrueType-rendered (builder).
    #[must_use]
    pub fn with_truetype_font(mut self, truetype_font: bool) -> Self {
        self.truetype_font = truetype_font;
        self
    }

    /// The font style the console text uses.
    #[must_use]
    pub fn font_style(&self) -> FontStyle {
        if self.small_font {
            FontStyle::Small
        } else {
            FontStyle::Medium
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_constants() {
        let config = ConsoleConfig::default();
        assert_eq!(config.max_lines, DEFAULT_MAX_LINES);
        assert_eq!(config.history_size, DEFAULT_HISTORY_SIZE);
        assert_eq!(config.input_capacity, DEFAULT_INPUT_CAPACITY);
        assert_eq!(config.height, DEFAULT_HEIGHT);
    }

    #[test]
    fn font_style_follows_flag() {
        assert_eq!(ConsoleConfig::default().font_style(), FontStyle::Medium);
        assert_eq!(
            ConsoleConfig::default().with_small_font(true).font_style(),
            FontStyle::Small
        );
    }
}
