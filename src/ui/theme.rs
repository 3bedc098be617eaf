//! Color theme constants.
//!
//! Minimal dark palette shared by every page.

use ratatui::style::Color;

/// Primary border color
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Accent color for highlights and focused widgets
pub const COLOR_ACCENT: Color = Color::White;

/// Dim text for hints and secondary info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Success and availability indicators
pub const COLOR_OK: Color = Color::LightGreen;

/// Warnings: low availability, loans nearing due
pub const COLOR_WARN: Color = Color::Yellow;

/// Errors and overdue loans
pub const COLOR_ERROR: Color = Color::LightRed;

/// Selected table row background
pub const COLOR_SELECTION: Color = Color::Rgb(40, 40, 55);
