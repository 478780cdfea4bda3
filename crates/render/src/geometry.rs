//! Rounded-rectangle outlines.
//!
//! An [`Outline`] is a plain list of path segments so it can be inspected
//! without a drawing context, then traced onto Cairo when painting.

use cairo::Context;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle anchored at the origin
    pub fn from_size(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Shrink by `amount` on every side
    pub fn inset(&self, amount: f64) -> Self {
        Self::new(
            self.x + amount,
            self.y + amount,
            self.width - 2.0 * amount,
            self.height - 2.0 * amount,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathSegment {
    MoveTo {
        x: f64,
        y: f64,
    },
    LineTo {
        x: f64,
        y: f64,
    },
    /// Clockwise arc, angles in degrees (0 = +x, 90 = +y)
    Arc {
        cx: f64,
        cy: f64,
        radius: f64,
        start: f64,
        sweep: f64,
    },
    Close,
}

/// Closed outline of a (possibly rounded) rectangle
#[derive(Debug, Clone, PartialEq)]
pub struct Outline {
    bounds: Rect,
    radius: f64,
    segments: Vec<PathSegment>,
}

impl Outline {
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Radius actually used, after capping to the rectangle
    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    pub fn is_rectangle(&self) -> bool {
        self.radius <= 0.0
    }

    /// Replace the context's current path with this outline
    pub fn trace(&self, cr: &Context) {
        cr.new_path();
        for segment in &self.segments {
            match *segment {
                PathSegment::MoveTo { x, y } => cr.move_to(x, y),
                PathSegment::LineTo { x, y } => cr.line_to(x, y),
                PathSegment::Arc {
                    cx,
                    cy,
                    radius,
                    start,
                    sweep,
                } => cr.arc(
                    cx,
                    cy,
                    radius,
                    start.to_radians(),
                    (start + sweep).to_radians(),
                ),
                PathSegment::Close => cr.close_path(),
            }
        }
    }
}

/// Build the outline of `rect` with corners of `radius`.
///
/// A radius of zero or less gives the plain rectangle. The radius is capped
/// at half of the shorter side so the corner arcs never overlap.
pub fn build_rounded_path(rect: Rect, radius: f64) -> Outline {
    let radius = radius.min(rect.width / 2.0).min(rect.height / 2.0);

    if radius <= 0.0 {
        return Outline {
            bounds: rect,
            radius: 0.0,
            segments: vec![
                PathSegment::MoveTo {
                    x: rect.x,
                    y: rect.y,
                },
                PathSegment::LineTo {
                    x: rect.right(),
                    y: rect.y,
                },
                PathSegment::LineTo {
                    x: rect.right(),
                    y: rect.bottom(),
                },
                PathSegment::LineTo {
                    x: rect.x,
                    y: rect.bottom(),
                },
                PathSegment::Close,
            ],
        };
    }

    let corner = |cx: f64, cy: f64, start: f64| PathSegment::Arc {
        cx,
        cy,
        radius,
        start,
        sweep: 90.0,
    };

    let segments = vec![
        corner(rect.x + radius, rect.y + radius, 180.0),
        PathSegment::LineTo {
            x: rect.right() - radius,
            y: rect.y,
        },
        corner(rect.right() - radius, rect.y + radius, 270.0),
        PathSegment::LineTo {
            x: rect.right(),
            y: rect.bottom() - radius,
        },
        corner(rect.right() - radius, rect.bottom() - radius, 0.0),
        PathSegment::LineTo {
            x: rect.x + radius,
            y: rect.bottom(),
        },
        corner(rect.x + radius, rect.bottom() - radius, 90.0),
        PathSegment::Close,
    ];

    Outline {
        bounds: rect,
        radius,
        segments,
    }
}
