//! Off-screen composition.
//!
//! Each paint renders background, bar and label into one owned surface and
//! copies it to the visible output in a single blit, so the host never sees
//! a half-drawn frame.

use cairo::{Context, Format, ImageSurface, Operator};

use crate::geometry::Rect;
use crate::label::{render_center_label, CenterLabel};
use crate::progress::{render_progress, RenderSpec};
use progress_bar_core::SURFACE_PADDING;
use progress_bar_types::Color;

/// The widget's parent, as seen by a transparent child
pub trait ParentSurface {
    /// Position of the widget inside the parent
    fn child_offset(&self) -> (f64, f64);

    /// Solid background color of the parent
    fn background_color(&self) -> Color;

    /// Paint the parent's background and siblings covering `region`, given in
    /// parent coordinates
    fn paint_region(&self, cr: &Context, region: Rect) -> Result<(), cairo::Error>;
}

/// Parent that is a flat color
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolidParent {
    pub offset: (f64, f64),
    pub color: Color,
}

impl ParentSurface for SolidParent {
    fn child_offset(&self) -> (f64, f64) {
        self.offset
    }

    fn background_color(&self) -> Color {
        self.color
    }

    fn paint_region(&self, cr: &Context, region: Rect) -> Result<(), cairo::Error> {
        self.color.apply_to_cairo(cr);
        cr.rectangle(region.x, region.y, region.width, region.height);
        cr.fill()
    }
}

/// One frame's worth of drawing input
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    /// Widget background behind the bar, transparent to show the parent
    pub background: Color,
    pub progress: RenderSpec,
    pub label: CenterLabel<'a>,
}

/// Owner of the off-screen surface
#[derive(Debug, Default)]
pub struct Compositor {
    surface: Option<ImageSurface>,
    width: i32,
    height: i32,
}

impl Compositor {
    /// Compositor with a surface allocated for `width` x `height`
    pub fn new(width: i32, height: i32) -> Result<Self, cairo::Error> {
        let mut compositor = Self::default();
        compositor.resize(width, height)?;
        Ok(compositor)
    }

    /// Release the current surface and allocate one for the new bounds.
    /// A zero-area bounds leaves no surface, and painting is skipped.
    pub fn resize(&mut self, width: i32, height: i32) -> Result<(), cairo::Error> {
        self.surface = None;
        self.width = width;
        self.height = height;

        if width <= 0 || height <= 0 {
            log::debug!("Skipping surface allocation for {}x{}", width, height);
            return Ok(());
        }

        let surface = ImageSurface::create(
            Format::ARgb32,
            width + SURFACE_PADDING,
            height + SURFACE_PADDING,
        )?;
        log::debug!(
            "Allocated {}x{} off-screen surface",
            surface.width(),
            surface.height()
        );
        self.surface = Some(surface);
        Ok(())
    }

    pub fn is_allocated(&self) -> bool {
        self.surface.is_some()
    }

    /// Size of the off-screen surface, if one is allocated
    pub fn surface_size(&self) -> Option<(i32, i32)> {
        self.surface.as_ref().map(|s| (s.width(), s.height()))
    }

    /// Render `frame` off-screen and blit it to `output`.
    /// Returns false when there is no surface to render into.
    pub fn compose(
        &self,
        output: &Context,
        frame: &Frame<'_>,
        parent: Option<&dyn ParentSurface>,
    ) -> Result<bool, cairo::Error> {
        let Some(surface) = &self.surface else {
            log::trace!("No off-screen surface, skipping paint");
            return Ok(false);
        };
        let (width, height) = (self.width as f64, self.height as f64);

        let silhouette = {
            let cr = Context::new(surface)?;
            self.paint_background(&cr, frame.background, parent)?;
            let silhouette = render_progress(&cr, &frame.progress)?;
            render_center_label(&cr, &frame.label, width, height)?;
            silhouette
        };
        surface.flush();

        output.save()?;
        silhouette.trace(output);
        output.clip();
        output.set_source_surface(surface, 0.0, 0.0)?;
        output.paint()?;
        output.restore()?;

        Ok(true)
    }

    fn paint_background(
        &self,
        cr: &Context,
        background: Color,
        parent: Option<&dyn ParentSurface>,
    ) -> Result<(), cairo::Error> {
        cr.save()?;
        cr.set_operator(Operator::Source);
        background.apply_to_cairo(cr);
        cr.paint()?;
        cr.restore()?;

        match parent {
            Some(parent) if background.is_transparent() => {
                let (x, y) = parent.child_offset();
                let region = Rect::new(x, y, self.width as f64, self.height as f64);

                cr.save()?;
                cr.translate(-x, -y);
                cr.rectangle(region.x, region.y, region.width, region.height);
                cr.clip();
                let painted = parent.paint_region(cr, region);
                // Restore the origin even if the parent failed
                cr.restore()?;
                painted
            }
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use progress_bar_types::{CenterElement, Orientation};
    use std::cell::Cell;

    const GREEN: Color = Color::new(0.0, 1.0, 0.0, 1.0);

    fn frame(background: Color, corner_radius: f64) -> Frame<'static> {
        Frame {
            background,
            progress: RenderSpec {
                width: 100.0,
                height: 20.0,
                orientation: Orientation::Horizontal,
                corner_radius,
                show_border: false,
                border_color: Color::BLACK,
                background_color: Color::WHITE,
                gradient_start: Color::STEEL_BLUE,
                gradient_end: Color::STEEL_BLUE,
                fraction: 0.5,
                surface_color: None,
            },
            label: CenterLabel {
                element: CenterElement::None,
                text: "",
                value: 50.0,
                foreground: Color::BLACK,
                font: "Sans 9",
            },
        }
    }

    fn alpha_at(surface: &mut ImageSurface, x: usize, y: usize) -> u8 {
        let stride = surface.stride() as usize;
        let data = surface.data().unwrap();
        let offset = y * stride + x * 4;
        let argb = u32::from_ne_bytes([
            data[offset],
            data[offset + 1],
            data[offset + 2],
            data[offset + 3],
        ]);
        (argb >> 24) as u8
    }

    /// Parent recording where it was asked to paint
    struct RecordingParent {
        offset: (f64, f64),
        region: Cell<Option<Rect>>,
        origin: Cell<Option<(f64, f64)>>,
    }

    impl ParentSurface for RecordingParent {
        fn child_offset(&self) -> (f64, f64) {
            self.offset
        }

        fn background_color(&self) -> Color {
            GREEN
        }

        fn paint_region(&self, cr: &Context, region: Rect) -> Result<(), cairo::Error> {
            self.region.set(Some(region));
            self.origin.set(Some(cr.user_to_device(region.x, region.y)));
            GREEN.apply_to_cairo(cr);
            cr.paint()
        }
    }

    #[test]
    fn test_surface_is_padded() {
        let compositor = Compositor::new(300, 30).unwrap();
        assert_eq!(compositor.surface_size(), Some((301, 31)));
    }

    #[test]
    fn test_resize_reallocates() {
        let mut compositor = Compositor::new(300, 30).unwrap();
        compositor.resize(120, 40).unwrap();
        assert_eq!(compositor.surface_size(), Some((121, 41)));
    }

    #[test]
    fn test_zero_area_skips_allocation_and_paint() {
        let compositor = Compositor::new(0, 30).unwrap();
        assert!(!compositor.is_allocated());

        let output = ImageSurface::create(Format::ARgb32, 10, 10).unwrap();
        let cr = Context::new(&output).unwrap();
        assert!(!compositor.compose(&cr, &frame(Color::WHITE, 0.0), None).unwrap());
    }

    #[test]
    fn test_parent_paints_through_transparent_background() {
        let compositor = Compositor::new(100, 20).unwrap();
        let parent = RecordingParent {
            offset: (40.0, 12.0),
            region: Cell::new(None),
            origin: Cell::new(None),
        };

        let output = ImageSurface::create(Format::ARgb32, 100, 20).unwrap();
        let cr = Context::new(&output).unwrap();
        compositor
            .compose(&cr, &frame(Color::TRANSPARENT, 0.0), Some(&parent))
            .unwrap();

        assert_eq!(parent.region.get(), Some(Rect::new(40.0, 12.0, 100.0, 20.0)));
        // The parent's view of the widget origin lands on the surface origin
        assert_eq!(parent.origin.get(), Some((0.0, 0.0)));
    }

    #[test]
    fn test_opaque_background_ignores_parent() {
        let compositor = Compositor::new(100, 20).unwrap();
        let parent = RecordingParent {
            offset: (0.0, 0.0),
            region: Cell::new(None),
            origin: Cell::new(None),
        };

        let output = ImageSurface::create(Format::ARgb32, 100, 20).unwrap();
        let cr = Context::new(&output).unwrap();
        compositor
            .compose(&cr, &frame(Color::WHITE, 0.0), Some(&parent))
            .unwrap();

        assert_eq!(parent.region.get(), None);
    }

    #[test]
    fn test_blit_is_clipped_to_silhouette() {
        let compositor = Compositor::new(100, 20).unwrap();
        let output = ImageSurface::create(Format::ARgb32, 100, 20).unwrap();
        {
            let cr = Context::new(&output).unwrap();
            compositor
                .compose(&cr, &frame(Color::WHITE, 10.0), None)
                .unwrap();
        }

        let mut output = output;
        assert_eq!(alpha_at(&mut output, 0, 0), 0);
        assert_eq!(alpha_at(&mut output, 99, 0), 0);
        assert_eq!(alpha_at(&mut output, 50, 10), 255);
    }

    #[test]
    fn test_square_blit_covers_bounds() {
        let compositor = Compositor::new(100, 20).unwrap();
        let output = ImageSurface::create(Format::ARgb32, 100, 20).unwrap();
        {
            let cr = Context::new(&output).unwrap();
            compositor.compose(&cr, &frame(Color::WHITE, 0.0), None).unwrap();
        }

        let mut output = output;
        assert_eq!(alpha_at(&mut output, 0, 0), 255);
        assert_eq!(alpha_at(&mut output, 99, 19), 255);
    }
}
