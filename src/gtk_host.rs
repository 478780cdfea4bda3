//! GTK4 host for the progress bar
//!
//! Wraps a [`ProgressBar`] in a `DrawingArea`: GTK's resize and draw
//! callbacks drive `on_resize` / `on_paint`, and property updates queue a
//! redraw when the widget asks for one.

use gtk4::prelude::*;
use gtk4::DrawingArea;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::widget::ProgressBar;
use progress_bar_render::SolidParent;
use progress_bar_types::Color;

#[derive(Clone)]
pub struct GtkProgressBar {
    area: DrawingArea,
    bar: Rc<RefCell<ProgressBar>>,
    parent_color: Rc<Cell<Option<Color>>>,
}

impl GtkProgressBar {
    pub fn new(bar: ProgressBar) -> Self {
        let area = DrawingArea::new();
        area.set_content_width(bar.width());
        area.set_content_height(bar.height());

        let bar = Rc::new(RefCell::new(bar));
        let parent_color: Rc<Cell<Option<Color>>> = Rc::new(Cell::new(None));

        let bar_clone = bar.clone();
        area.connect_resize(move |_, width, height| {
            if let Err(e) = bar_clone.borrow_mut().on_resize(width, height) {
                log::warn!("Progress bar resize to {}x{} failed: {}", width, height, e);
            }
        });

        let bar_clone = bar.clone();
        let parent_clone = parent_color.clone();
        area.set_draw_func(move |_, cr, width, height| {
            let mut bar = bar_clone.borrow_mut();
            // The first draw can arrive before any resize signal
            if (bar.width(), bar.height()) != (width, height) {
                if let Err(e) = bar.on_resize(width, height) {
                    log::warn!("Progress bar resize to {}x{} failed: {}", width, height, e);
                    return;
                }
            }

            let parent = parent_clone.get().map(|color| SolidParent {
                offset: (0.0, 0.0),
                color,
            });
            let parent = parent.as_ref().map(|p| p as &dyn progress_bar_render::ParentSurface);
            if let Err(e) = bar.on_paint(cr, parent) {
                log::debug!("Progress bar render error: {}", e);
            }
        });

        Self {
            area,
            bar,
            parent_color,
        }
    }

    pub fn widget(&self) -> &DrawingArea {
        &self.area
    }

    /// Mutate the bar and queue a redraw if anything changed.
    ///
    /// Progress listeners run inside `f` and must not call `update` again.
    pub fn update<R>(&self, f: impl FnOnce(&mut ProgressBar) -> R) -> R {
        let (result, dirty) = {
            let mut bar = self.bar.borrow_mut();
            let result = f(&mut bar);
            (result, bar.needs_redraw())
        };
        if dirty {
            self.area.queue_draw();
        }
        result
    }

    /// Background of the container the bar sits on. Used to antialias
    /// rounded corners and as the backdrop of a transparent bar.
    pub fn set_parent_color(&self, color: Option<Color>) {
        self.parent_color.set(color);
        self.area.queue_draw();
    }

    /// Parent color taken from a GTK RGBA, e.g. a style lookup
    pub fn set_parent_rgba(&self, rgba: &gtk4::gdk::RGBA) {
        self.set_parent_color(Some(Color::from_gdk_rgba(rgba)));
    }
}
