//! progress-bar-types: Shared data types for the progress bar widget.
//!
//! Pure data (colors, enums, the serializable widget config) with no Cairo
//! dependency unless the `cairo` feature is enabled, so it can sit under
//! every other crate in the workspace.

pub mod color;
pub mod progress_bar;

pub use color::Color;
pub use progress_bar::{
    BorderConfig, CenterElement, Orientation, ProgressBarConfig, DEFAULT_FONT, DEFAULT_HEIGHT,
    DEFAULT_MAXIMUM, DEFAULT_MINIMUM, DEFAULT_WIDTH,
};
