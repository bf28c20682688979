pub mod currency;

use crate::core::ValidationLevel;
use colored::*;
use std::env;
use std::io::IsTerminal;

pub use currency::{format_compact_inr, format_count, format_inr, group_indian};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Auto,   // Detect based on terminal
    Always, // Force colors on
    Never,  // Force colors off
}

impl ColorMode {
    pub fn should_use_color(&self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => detect_color_support(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmojiMode {
    Auto,
    Always,
    Never,
}

impl EmojiMode {
    pub fn should_use_emoji(&self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => detect_color_support(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FormattingConfig {
    pub color: ColorMode,
    pub emoji: EmojiMode,
}

impl Default for FormattingConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::Auto,
            emoji: EmojiMode::Auto,
        }
    }
}

impl FormattingConfig {
    pub fn new(color: ColorMode, emoji: EmojiMode) -> Self {
        Self { color, emoji }
    }

    pub fn from_env() -> Self {
        let mut config = Self::default();

        // NO_COLOR per no-color.org
        if env::var("NO_COLOR").is_ok() {
            config.color = ColorMode::Never;
        }

        if let Ok(val) = env::var("CLICOLOR") {
            if val == "0" {
                config.color = ColorMode::Never;
            }
        }

        if let Ok(val) = env::var("CLICOLOR_FORCE") {
            if val == "1" {
                config.color = ColorMode::Always;
            }
        }

        config
    }

    /// ASCII-only, no colors, no symbols
    pub fn plain() -> Self {
        Self {
            color: ColorMode::Never,
            emoji: EmojiMode::Never,
        }
    }
}

/// Styling seam for the terminal report.
pub trait OutputFormatter {
    /// Style a message according to its validation level.
    fn level(&self, level: ValidationLevel, text: &str) -> String;
    fn highlight(&self, text: &str) -> String;
    fn header(&self, text: &str) -> String;
    fn dim(&self, text: &str) -> String;
    /// Marker printed in front of a validation message.
    fn level_marker(&self, level: ValidationLevel) -> String;
    /// Five-slot confidence meter, e.g. `●●●○○`.
    fn confidence(&self, score: u8) -> String;
}

pub struct ColoredFormatter {
    config: FormattingConfig,
}

impl ColoredFormatter {
    pub fn new(config: FormattingConfig) -> Self {
        colored::control::set_override(config.color.should_use_color());
        Self { config }
    }

    fn colors(&self) -> bool {
        self.config.color.should_use_color()
    }

    fn symbols(&self) -> bool {
        self.config.emoji.should_use_emoji()
    }
}

impl OutputFormatter for ColoredFormatter {
    fn level(&self, level: ValidationLevel, text: &str) -> String {
        if !self.colors() {
            return text.to_string();
        }
        match level {
            ValidationLevel::Error => text.red().to_string(),
            ValidationLevel::Warning => text.yellow().to_string(),
            ValidationLevel::Info => text.blue().to_string(),
        }
    }

    fn highlight(&self, text: &str) -> String {
        if self.colors() {
            text.green().bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn header(&self, text: &str) -> String {
        if self.colors() {
            text.blue().bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn dim(&self, text: &str) -> String {
        if self.colors() {
            text.dimmed().to_string()
        } else {
            text.to_string()
        }
    }

    fn level_marker(&self, level: ValidationLevel) -> String {
        let (symbol, fallback) = level_symbol(level);
        let marker = if self.symbols() { symbol } else { fallback };
        self.level(level, marker)
    }

    fn confidence(&self, score: u8) -> String {
        let (filled, empty) = if self.symbols() {
            ("●", "○")
        } else {
            ("#", "-")
        };
        confidence_meter(score, filled, empty)
    }
}

pub struct PlainFormatter;

impl OutputFormatter for PlainFormatter {
    fn level(&self, _level: ValidationLevel, text: &str) -> String {
        text.to_string()
    }

    fn highlight(&self, text: &str) -> String {
        text.to_string()
    }

    fn header(&self, text: &str) -> String {
        text.to_string()
    }

    fn dim(&self, text: &str) -> String {
        text.to_string()
    }

    fn level_marker(&self, level: ValidationLevel) -> String {
        level_symbol(level).1.to_string()
    }

    fn confidence(&self, score: u8) -> String {
        confidence_meter(score, "#", "-")
    }
}

fn detect_color_support() -> bool {
    if let Ok(term) = env::var("TERM") {
        if term == "dumb" {
            return false;
        }
    }

    std::io::stdout().is_terminal()
}

fn level_symbol(level: ValidationLevel) -> (&'static str, &'static str) {
    match level {
        ValidationLevel::Error => ("⚠", "[ERROR]"),
        ValidationLevel::Warning => ("⚠", "[WARN]"),
        ValidationLevel::Info => ("ℹ", "[INFO]"),
    }
}

fn confidence_meter(score: u8, filled: &str, empty: &str) -> String {
    let score = score.min(5) as usize;
    format!("{}{}", filled.repeat(score), empty.repeat(5 - score))
}
