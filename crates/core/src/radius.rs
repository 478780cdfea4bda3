//! Corner radius state.
//!
//! The effective radius never exceeds half of the governing dimension: the
//! width for vertical or narrower-than-tall bars, the height otherwise. The
//! last explicitly set radius is remembered so switching rounded-corner mode
//! off brings it back.

use progress_bar_types::Orientation;

/// Half of the dimension that limits the corner radius
pub fn governing_half(width: i32, height: i32, orientation: Orientation) -> i32 {
    let dimension = if orientation.is_vertical() || width < height {
        width
    } else {
        height
    };
    (dimension / 2).max(0)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CornerRadius {
    radius: i32,
    last_explicit: i32,
    rounded_corners: bool,
}

impl CornerRadius {
    /// Effective radius used for drawing
    pub fn radius(&self) -> i32 {
        self.radius
    }

    pub fn last_explicit(&self) -> i32 {
        self.last_explicit
    }

    pub fn rounded_corners(&self) -> bool {
        self.rounded_corners
    }

    /// Set an explicit radius. Leaves rounded-corner mode.
    pub fn set_explicit(&mut self, radius: i32, width: i32, height: i32, orientation: Orientation) {
        let half = governing_half(width, height, orientation);
        self.rounded_corners = false;
        self.radius = radius.clamp(0, half);
        self.last_explicit = self.radius;
    }

    /// Enter or leave rounded-corner mode
    pub fn set_rounded_corners(
        &mut self,
        enabled: bool,
        width: i32,
        height: i32,
        orientation: Orientation,
    ) {
        let half = governing_half(width, height, orientation);
        self.rounded_corners = enabled;
        self.radius = if enabled {
            half
        } else {
            self.last_explicit.min(half)
        };
    }

    /// Re-fit the radius to new bounds. Returns true if the radius changed.
    pub fn fit(&mut self, width: i32, height: i32, orientation: Orientation) -> bool {
        if !self.rounded_corners && self.radius == 0 {
            return false;
        }

        let half = governing_half(width, height, orientation);
        let previous = self.radius;
        if self.rounded_corners {
            self.radius = half;
        }
        self.radius = self.radius.min(half);

        if self.radius != previous {
            log::debug!("Corner radius refit from {} to {}", previous, self.radius);
        }
        self.radius != previous
    }
}
