//! Palette constants shared by the views.

use iced::{Color, Theme};

/// Institutional header blue (#004080).
pub const HEADER_BLUE: Color = Color::from_rgb(0.0, 0.25, 0.50);

/// Error/danger accents.
pub const DANGER: Color = Color::from_rgb(0.86, 0.21, 0.27);

/// Success accents (validation checklist, success cards).
pub const SUCCESS: Color = Color::from_rgb(0.16, 0.65, 0.27);

/// Warning accents (toasts).
pub const WARNING: Color = Color::from_rgb(0.93, 0.60, 0.10);

/// Muted label text.
pub const MUTED: Color = Color::from_rgb(0.42, 0.45, 0.49);

pub fn app_theme() -> Theme {
    Theme::Light
}
