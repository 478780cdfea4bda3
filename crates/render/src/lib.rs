//! progress-bar-render: Cairo rendering for the progress bar widget.
//!
//! Geometry, the four-mode bar renderer, the Pango center label and the
//! off-screen compositor that ties them into one flicker-free blit.

pub mod compositor;
pub mod geometry;
pub mod label;
pub mod progress;

pub use compositor::{Compositor, Frame, ParentSurface, SolidParent};
pub use geometry::{build_rounded_path, Outline, PathSegment, Rect};
pub use label::{format_percentage, render_center_label, CenterLabel};
pub use progress::{render_progress, DrawMode, RenderSpec};
