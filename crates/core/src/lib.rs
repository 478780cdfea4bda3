//! progress-bar-core: Value model and widget state for the progress bar.
//!
//! Everything here is plain state with no drawing dependency: the bounded
//! progress value, the corner radius rules and the listener registry.

pub mod constants;
mod notify;
mod radius;
mod range;

pub use constants::{BORDER_INSET, BORDER_WIDTH, SURFACE_PADDING};
pub use notify::{ProgressCallback, ProgressListeners};
pub use radius::{governing_half, CornerRadius};
pub use range::{ProgressRange, RangeError, ValueChange};

// Re-export types used in signatures for convenience
pub use progress_bar_types::{CenterElement, Color, Orientation};
