//! Centralized theme constants and style functions for consistent UI styling.
//!
//! All colors, layout constants, and common styles should be defined here
//! to ensure visual consistency across the form and its dropdowns.

use ratatui::style::{Color, Modifier, Style};

// =============================================================================
// Colors
// =============================================================================

/// Background color for the focused dropdown item
pub const COLOR_SELECTION_BG: Color = Color::DarkGray;

/// Color for account type headers
pub const COLOR_HEADER: Color = Color::Yellow;

/// Color for help text and secondary information
pub const COLOR_HELP_TEXT: Color = Color::Gray;

/// Color for the form title and accent text
pub const COLOR_TITLE: Color = Color::Cyan;

/// Background behind the matched part of a label
pub const COLOR_MATCH_BG: Color = Color::Yellow;

/// Foreground for the item whose label equals the input text
pub const COLOR_ACTIVE_ITEM: Color = Color::Cyan;

/// Color for dividers, borders and placeholders
pub const COLOR_MUTED: Color = Color::DarkGray;

/// Background for form fields when focused
pub const COLOR_FORM_FIELD_BG: Color = Color::DarkGray;

// =============================================================================
// Layout Constants
// =============================================================================

/// Standard margin around screen content
pub const SCREEN_MARGIN: u16 = 2;

/// Height of the title/header area
pub const TITLE_HEIGHT: u16 = 1;

/// Height of the help bar at the bottom
pub const HELP_BAR_HEIGHT: u16 = 3;

/// Width of the label column in front of each form field
pub const FORM_LABEL_WIDTH: u16 = 16;

/// Minimum width of a dropdown overlay
pub const DROPDOWN_MIN_WIDTH: u16 = 20;

// =============================================================================
// Style Functions
// =============================================================================

/// Style for the focused dropdown item
pub fn selection_style() -> Style {
    Style::default()
        .bg(COLOR_SELECTION_BG)
        .add_modifier(Modifier::BOLD)
}

/// Style for account type headers
pub fn header_style() -> Style {
    Style::default()
        .fg(COLOR_HEADER)
        .add_modifier(Modifier::BOLD)
}

/// Style for help bar text and header counts
pub fn help_text_style() -> Style {
    Style::default().fg(COLOR_HELP_TEXT)
}

/// Style for the form title
pub fn title_style() -> Style {
    Style::default()
        .fg(COLOR_TITLE)
        .add_modifier(Modifier::BOLD)
}

/// Style for form fields when focused
pub fn form_field_focused_style() -> Style {
    Style::default()
        .bg(COLOR_FORM_FIELD_BG)
        .add_modifier(Modifier::BOLD)
}

/// Style for form fields when not focused
pub fn form_field_style() -> Style {
    Style::default().fg(Color::White)
}

pub fn placeholder_style() -> Style {
    Style::default().fg(COLOR_MUTED)
}

/// Style for the matched part of a label
pub fn match_style() -> Style {
    Style::default().bg(COLOR_MATCH_BG).fg(Color::Black)
}

/// Style for the item whose label equals the input text
pub fn active_item_style() -> Style {
    Style::default()
        .fg(COLOR_ACTIVE_ITEM)
        .add_modifier(Modifier::BOLD)
}

/// Accounts flagged inactive in the chart
pub fn inactive_item_style() -> Style {
    Style::default().add_modifier(Modifier::DIM)
}

pub fn muted_style() -> Style {
    Style::default().fg(COLOR_MUTED)
}
