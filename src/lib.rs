//! progress-bar: A Cairo-rendered progress bar widget
//!
//! This library provides:
//! - The [`ProgressBar`] widget with its validated value model and notifications
//! - Horizontal/vertical rendering with optional rounded corners and border
//! - Configuration loading and saving
//! - An optional GTK4 host (`gtk` feature)

pub mod config;
#[cfg(feature = "gtk")]
pub mod gtk_host;
pub mod widget;

// Re-export commonly used types
pub use progress_bar_core::{RangeError, ValueChange};
pub use progress_bar_render::{ParentSurface, SolidParent};
pub use progress_bar_types::{CenterElement, Color, Orientation, ProgressBarConfig};
pub use widget::ProgressBar;

#[cfg(feature = "gtk")]
pub use gtk_host::GtkProgressBar;
