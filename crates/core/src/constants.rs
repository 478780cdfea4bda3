//! Shared constants for the widget

/// Stroke width for the border and the antialiasing surface stroke
pub const BORDER_WIDTH: f64 = 1.0;

/// Inset of the border outline from the widget bounds, per side
pub const BORDER_INSET: f64 = 1.0;

/// Extra pixels allocated on each axis of the off-screen surface
pub const SURFACE_PADDING: i32 = 1;
