//! Shared color constants for the UI.

use egui::Color32;

/// Forest green color for healthy/available/success status.
pub const COLOR_GREEN: Color32 = Color32::from_rgb(34, 139, 34);

/// Red color for error/unavailable/failed status.
pub const COLOR_RED: Color32 = Color32::from_rgb(220, 53, 69);

/// Amber color for checking/pending status.
pub const COLOR_AMBER: Color32 = Color32::from_rgb(255, 193, 7);

/// Blue fill for primary action buttons (Edit).
pub const COLOR_PRIMARY: Color32 = Color32::from_rgb(13, 110, 253);

/// Red fill for destructive action buttons (Delete).
pub const COLOR_DANGER: Color32 = Color32::from_rgb(220, 53, 69);
