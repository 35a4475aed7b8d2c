//! Status line helpers
//!
//! One-line, emoji-prefixed console messages used for load reports,
//! validation errors and other diagnostics.

use colored::Colorize;
use std::fmt::Display;

#[must_use]
pub fn success(message: impl Display) -> String {
    format!("✅ {}", message.to_string().green())
}

#[must_use]
pub fn warn(message: impl Display) -> String {
    format!("⚠️ {}", message.to_string().yellow())
}

#[must_use]
pub fn error(message: impl Display) -> String {
    format!("❌ {}", message.to_string().red())
}

#[must_use]
pub fn info(message: impl Display) -> String {
    format!("🔍 {}", message.to_string().bright_white())
}

#[must_use]
pub fn farewell(message: impl Display) -> String {
    format!("👋 {}", message.to_string().bright_cyan())
}
