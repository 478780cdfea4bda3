//! Progress bar rendering.
//!
//! One of four drawing modes is picked per paint from the orientation and
//! whether a corner radius is set. The fill axis formulas mirror each other:
//! horizontal bars grow left to right, vertical bars grow up from the bottom.

use cairo::{Antialias, Context, LinearGradient};

use crate::geometry::{build_rounded_path, Outline, Rect};
use progress_bar_core::{BORDER_INSET, BORDER_WIDTH};
use progress_bar_types::{Color, Orientation};

/// Everything needed to draw one frame of the bar
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderSpec {
    pub width: f64,
    pub height: f64,
    pub orientation: Orientation,
    pub corner_radius: f64,
    pub show_border: bool,
    pub border_color: Color,
    /// Unfilled part of the bar
    pub background_color: Color,
    pub gradient_start: Color,
    pub gradient_end: Color,
    /// Progress normalized to `0.0..=1.0`
    pub fraction: f64,
    /// Parent background, stroked around rounded edges to antialias them
    pub surface_color: Option<Color>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawMode {
    HorizontalSquare,
    HorizontalRounded,
    VerticalSquare,
    VerticalRounded,
}

impl DrawMode {
    pub fn is_vertical(self) -> bool {
        matches!(self, DrawMode::VerticalSquare | DrawMode::VerticalRounded)
    }

    pub fn is_rounded(self) -> bool {
        matches!(self, DrawMode::HorizontalRounded | DrawMode::VerticalRounded)
    }
}

impl RenderSpec {
    pub fn draw_mode(&self) -> DrawMode {
        match (self.orientation, self.corner_radius > 0.0) {
            (Orientation::Horizontal, false) => DrawMode::HorizontalSquare,
            (Orientation::Horizontal, true) => DrawMode::HorizontalRounded,
            (Orientation::Vertical, false) => DrawMode::VerticalSquare,
            (Orientation::Vertical, true) => DrawMode::VerticalRounded,
        }
    }

    fn bounds(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }

    /// Whole pixels filled along the fill axis
    pub fn pixel_extent(&self) -> i32 {
        let axis = if self.orientation.is_vertical() {
            self.height
        } else {
            self.width
        };
        (axis * self.fraction.clamp(0.0, 1.0)).round() as i32
    }

    /// Shape the widget is visible through
    pub fn silhouette(&self) -> Outline {
        build_rounded_path(self.bounds(), self.corner_radius)
    }

    /// Filled region for the given mode, `None` when nothing is filled
    pub fn fill_rect(&self, mode: DrawMode) -> Option<Rect> {
        let extent = self.pixel_extent() as f64;
        let (w, h) = (self.width, self.height);

        match mode {
            DrawMode::HorizontalSquare if extent > 0.0 => Some(Rect::new(0.0, 0.0, extent, h)),
            DrawMode::VerticalSquare if extent > 0.0 => Some(Rect::new(0.0, h - extent, w, extent)),
            // Half-pixel offsets keep the antialiased edge inside the surface stroke
            DrawMode::HorizontalRounded if extent >= 1.0 => {
                Some(Rect::new(0.5, 0.5, extent - 1.0, h - 1.0))
            }
            DrawMode::VerticalRounded if extent >= 1.0 => {
                Some(Rect::new(0.5, h - extent, w - 1.0, extent - 0.5))
            }
            _ => None,
        }
    }

    /// Two-stop gradient with the start color where the fill begins
    fn fill_gradient(&self, mode: DrawMode) -> LinearGradient {
        let gradient = if mode.is_vertical() {
            LinearGradient::new(0.0, self.height, 0.0, 0.0)
        } else {
            LinearGradient::new(0.0, 0.0, self.width, 0.0)
        };
        let (start, end) = (self.gradient_start, self.gradient_end);
        gradient.add_color_stop_rgba(0.0, start.r, start.g, start.b, start.a);
        gradient.add_color_stop_rgba(1.0, end.r, end.g, end.b, end.a);
        gradient
    }
}

/// Render the bar and return the silhouette the result should be clipped to
pub fn render_progress(cr: &Context, spec: &RenderSpec) -> Result<Outline, cairo::Error> {
    let mode = spec.draw_mode();
    log::trace!(
        "Rendering {:?} bar {}x{} at {:.3}",
        mode,
        spec.width,
        spec.height,
        spec.fraction
    );

    match mode {
        DrawMode::HorizontalSquare | DrawMode::VerticalSquare => render_square(cr, spec, mode)?,
        DrawMode::HorizontalRounded | DrawMode::VerticalRounded => {
            render_rounded(cr, spec, mode)?
        }
    }

    Ok(spec.silhouette())
}

fn render_square(cr: &Context, spec: &RenderSpec, mode: DrawMode) -> Result<(), cairo::Error> {
    cr.save()?;
    cr.set_antialias(Antialias::None);

    spec.background_color.apply_to_cairo(cr);
    cr.rectangle(0.0, 0.0, spec.width, spec.height);
    cr.fill()?;

    if let Some(fill) = spec.fill_rect(mode) {
        cr.set_source(&spec.fill_gradient(mode))?;
        cr.rectangle(fill.x, fill.y, fill.width, fill.height);
        cr.fill()?;
    }

    if spec.show_border {
        // Stroke centered half a pixel in so the line lands inside the bounds
        let half = BORDER_WIDTH / 2.0;
        spec.border_color.apply_to_cairo(cr);
        cr.set_line_width(BORDER_WIDTH);
        cr.rectangle(half, half, spec.width - BORDER_WIDTH, spec.height - BORDER_WIDTH);
        cr.stroke()?;
    }

    cr.restore()?;
    Ok(())
}

fn render_rounded(cr: &Context, spec: &RenderSpec, mode: DrawMode) -> Result<(), cairo::Error> {
    cr.save()?;
    cr.set_antialias(Antialias::Default);
    cr.set_line_width(BORDER_WIDTH);

    let surface = spec.silhouette();
    surface.trace(cr);
    spec.background_color.apply_to_cairo(cr);
    match spec.surface_color {
        Some(color) => {
            cr.fill_preserve()?;
            color.apply_to_cairo(cr);
            cr.stroke()?;
        }
        None => cr.fill()?,
    }

    if let Some(fill) = spec.fill_rect(mode) {
        build_rounded_path(fill, spec.corner_radius).trace(cr);
        cr.set_source(&spec.fill_gradient(mode))?;
        cr.fill()?;
    }

    if spec.show_border {
        build_rounded_path(
            spec.bounds().inset(BORDER_INSET),
            spec.corner_radius - BORDER_INSET,
        )
        .trace(cr);
        spec.border_color.apply_to_cairo(cr);
        cr.stroke()?;
    }

    cr.restore()?;
    Ok(())
}
