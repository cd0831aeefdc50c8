//! Terminal capability detection and utilities

use owo_colors::{OwoColorize, colors::css};

/// Detects whether colored output should be enabled
#[must_use]
pub fn supports_color() -> bool {
    supports_color::on(supports_color::Stream::Stdout).is_some()
}

/// Extension trait for colorizing output
pub trait Colorize {
    /// Color as success (green)
    fn success(&self) -> String;
    /// Color as warning (amber)
    fn warning(&self) -> String;
    /// Color as info (blue)
    fn info(&self) -> String;
    /// Dim the text
    fn dim(&self) -> String;
}

impl Colorize for str {
    fn success(&self) -> String {
        self.fg::<css::Green>().to_string()
    }

    fn warning(&self) -> String {
        self.fg::<css::Orange>().to_string()
    }

    fn info(&self) -> String {
        self.fg::<css::LightBlue>().to_string()
    }

    fn dim(&self) -> String {
        self.dimmed().to_string()
    }
}

/// Applies a [`Colorize`] style only when colour is switched on.
///
/// The menu writes to an arbitrary sink, so whether to colour is decided once
/// by the caller rather than by probing stdout on every message.
#[derive(Debug, Clone, Copy, Default)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    /// A palette that colours output if `enabled` is true.
    #[must_use]
    pub const fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// A palette that colours output if stdout supports it.
    #[must_use]
    pub fn detect() -> Self {
        Self::new(supports_color())
    }

    #[must_use]
    pub fn success(self, text: &str) -> String {
        self.apply(text, <str as Colorize>::success)
    }

    #[must_use]
    pub fn warning(self, text: &str) -> String {
        self.apply(text, <str as Colorize>::warning)
    }

    #[must_use]
    pub fn info(self, text: &str) -> String {
        self.apply(text, <str as Colorize>::info)
    }

    #[must_use]
    pub fn dim(self, text: &str) -> String {
        self.apply(text, <str as Colorize>::dim)
    }

    fn apply(self, text: &str, style: fn(&str) -> String) -> String {
        if self.enabled {
            style(text)
        } else {
            text.to_string()
        }
    }
}
