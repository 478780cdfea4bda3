//! ProgressBar - the widget the host embeds
//!
//! The host owns the lifecycle: it calls [`ProgressBar::on_resize`] when the
//! bounds change and [`ProgressBar::on_paint`] when it wants pixels. Setters
//! only mark the widget dirty; [`ProgressBar::needs_redraw`] tells the host
//! a paint is wanted.

use cairo::Context;

use progress_bar_core::{CornerRadius, ProgressListeners, ProgressRange, RangeError, ValueChange};
use progress_bar_render::{CenterLabel, Compositor, Frame, ParentSurface, RenderSpec};
use progress_bar_types::{
    BorderConfig, CenterElement, Color, Orientation, ProgressBarConfig, DEFAULT_FONT,
    DEFAULT_HEIGHT, DEFAULT_WIDTH,
};

#[derive(Debug)]
pub struct ProgressBar {
    width: i32,
    height: i32,
    range: ProgressRange,
    corners: CornerRadius,
    orientation: Orientation,
    border: BorderConfig,
    progress_background: Color,
    gradient_start: Color,
    gradient_end: Color,
    foreground: Color,
    background: Color,
    center_element: CenterElement,
    text: String,
    font: String,
    listeners: ProgressListeners,
    compositor: Compositor,
    dirty: bool,
}

impl ProgressBar {
    /// Widget with default properties and a surface for the default size
    pub fn new() -> Result<Self, cairo::Error> {
        Ok(Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            range: ProgressRange::default(),
            corners: CornerRadius::default(),
            orientation: Orientation::Horizontal,
            border: BorderConfig::default(),
            progress_background: Color::WHITE,
            gradient_start: Color::LIGHT_SKY_BLUE,
            gradient_end: Color::STEEL_BLUE,
            foreground: Color::BLACK,
            background: Color::TRANSPARENT,
            center_element: CenterElement::None,
            text: String::new(),
            font: DEFAULT_FONT.to_string(),
            listeners: ProgressListeners::default(),
            compositor: Compositor::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)?,
            dirty: true,
        })
    }

    /// Build a widget from a config, validating the range through the
    /// regular setters
    pub fn from_config(config: &ProgressBarConfig) -> anyhow::Result<Self> {
        let mut bar = Self::new()?;
        bar.on_resize(config.width, config.height)?;

        // Order the bound updates so the intermediate range stays valid
        if config.minimum >= bar.maximum() {
            bar.set_maximum(config.maximum)?;
            bar.set_minimum(config.minimum)?;
        } else {
            bar.set_minimum(config.minimum)?;
            bar.set_maximum(config.maximum)?;
        }
        bar.set_value(config.value)?;

        bar.set_orientation(config.orientation);
        // Explicit radius first so leaving rounded mode can restore it
        bar.set_border_radius(config.border_radius);
        bar.set_rounded_corners(config.rounded_corners);
        bar.set_show_border(config.border.enabled);
        bar.set_border_color(config.border.color);
        bar.set_progress_background(config.progress_background);
        bar.set_gradient_start(config.gradient_start);
        bar.set_gradient_end(config.gradient_end);
        bar.set_foreground(config.foreground);
        bar.set_background(config.background);
        bar.set_center_element(config.center_element);
        bar.set_text(&config.text);
        bar.set_font(&config.font);

        Ok(bar)
    }

    /// Snapshot of the current properties
    pub fn to_config(&self) -> ProgressBarConfig {
        ProgressBarConfig {
            width: self.width,
            height: self.height,
            minimum: self.minimum(),
            maximum: self.maximum(),
            value: self.value(),
            orientation: self.orientation,
            border_radius: self.corners.last_explicit(),
            rounded_corners: self.corners.rounded_corners(),
            border: self.border,
            progress_background: self.progress_background,
            gradient_start: self.gradient_start,
            gradient_end: self.gradient_end,
            foreground: self.foreground,
            background: self.background,
            center_element: self.center_element,
            text: self.text.clone(),
            font: self.font.clone(),
        }
    }

    // --- Host lifecycle ---

    /// Bounds changed: refit the corner radius and reallocate the surface
    pub fn on_resize(&mut self, width: i32, height: i32) -> Result<(), cairo::Error> {
        self.width = width;
        self.height = height;
        self.corners.fit(width, height, self.orientation);
        self.compositor.resize(width, height)?;
        self.dirty = true;
        Ok(())
    }

    /// Paint the widget onto `output`, whose origin is the widget's top-left
    /// corner. `parent` supplies the backdrop when the background is
    /// transparent.
    pub fn on_paint(
        &mut self,
        output: &Context,
        parent: Option<&dyn ParentSurface>,
    ) -> Result<(), cairo::Error> {
        let frame = Frame {
            background: self.background,
            progress: self.render_spec(parent.map(|p| p.background_color())),
            label: self.center_label(),
        };

        if self.compositor.compose(output, &frame, parent)? {
            self.dirty = false;
        }
        Ok(())
    }

    /// A property changed since the last successful paint
    pub fn needs_redraw(&self) -> bool {
        self.dirty
    }

    /// Per-frame drawing input derived from the current properties
    pub fn render_spec(&self, surface_color: Option<Color>) -> RenderSpec {
        RenderSpec {
            width: self.width as f64,
            height: self.height as f64,
            orientation: self.orientation,
            corner_radius: self.corners.radius() as f64,
            show_border: self.border.enabled,
            border_color: self.border.color,
            background_color: self.progress_background,
            gradient_start: self.gradient_start,
            gradient_end: self.gradient_end,
            fraction: self.range.fraction(),
            surface_color,
        }
    }

    fn center_label(&self) -> CenterLabel<'_> {
        CenterLabel {
            element: self.center_element,
            text: &self.text,
            value: self.range.value(),
            foreground: self.foreground,
            font: &self.font,
        }
    }

    // --- Notifications ---

    pub fn connect_progress_changed<F>(&mut self, callback: F)
    where
        F: FnMut(&ValueChange) + 'static,
    {
        self.listeners.connect_changed(callback);
    }

    pub fn connect_progress_completed<F>(&mut self, callback: F)
    where
        F: FnMut(&ValueChange) + 'static,
    {
        self.listeners.connect_completed(callback);
    }

    // --- Value model ---

    pub fn minimum(&self) -> f64 {
        self.range.minimum()
    }

    pub fn maximum(&self) -> f64 {
        self.range.maximum()
    }

    pub fn value(&self) -> f64 {
        self.range.value()
    }

    pub fn set_minimum(&mut self, minimum: f64) -> Result<(), RangeError> {
        let change = self.range.set_minimum(minimum).inspect_err(log_rejected)?;
        self.apply_change(&change);
        Ok(())
    }

    pub fn set_maximum(&mut self, maximum: f64) -> Result<(), RangeError> {
        let change = self.range.set_maximum(maximum).inspect_err(log_rejected)?;
        self.apply_change(&change);
        Ok(())
    }

    pub fn set_value(&mut self, value: f64) -> Result<(), RangeError> {
        let change = self.range.set_value(value).inspect_err(log_rejected)?;
        self.apply_change(&change);
        Ok(())
    }

    fn apply_change(&mut self, change: &ValueChange) {
        self.listeners.dispatch(change);
        self.dirty = true;
    }

    // --- Geometry ---

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Switch the fill axis. The radius is refit since the governing
    /// dimension may change with it.
    pub fn set_orientation(&mut self, orientation: Orientation) {
        if self.orientation != orientation {
            self.orientation = orientation;
            self.corners.fit(self.width, self.height, orientation);
            self.dirty = true;
        }
    }

    pub fn border_radius(&self) -> i32 {
        self.corners.radius()
    }

    pub fn set_border_radius(&mut self, radius: i32) {
        self.corners
            .set_explicit(radius, self.width, self.height, self.orientation);
        self.dirty = true;
    }

    pub fn rounded_corners(&self) -> bool {
        self.corners.rounded_corners()
    }

    pub fn set_rounded_corners(&mut self, enabled: bool) {
        self.corners
            .set_rounded_corners(enabled, self.width, self.height, self.orientation);
        self.dirty = true;
    }

    // --- Appearance ---

    pub fn show_border(&self) -> bool {
        self.border.enabled
    }

    pub fn set_show_border(&mut self, show: bool) {
        self.border.enabled = show;
        self.dirty = true;
    }

    pub fn border_color(&self) -> Color {
        self.border.color
    }

    pub fn set_border_color(&mut self, color: Color) {
        self.border.color = color;
        self.dirty = true;
    }

    pub fn progress_background(&self) -> Color {
        self.progress_background
    }

    pub fn set_progress_background(&mut self, color: Color) {
        self.progress_background = color;
        self.dirty = true;
    }

    pub fn gradient_start(&self) -> Color {
        self.gradient_start
    }

    pub fn set_gradient_start(&mut self, color: Color) {
        self.gradient_start = color;
        self.dirty = true;
    }

    pub fn gradient_end(&self) -> Color {
        self.gradient_end
    }

    pub fn set_gradient_end(&mut self, color: Color) {
        self.gradient_end = color;
        self.dirty = true;
    }

    pub fn foreground(&self) -> Color {
        self.foreground
    }

    pub fn set_foreground(&mut self, color: Color) {
        self.foreground = color;
        self.dirty = true;
    }

    pub fn background(&self) -> Color {
        self.background
    }

    pub fn set_background(&mut self, color: Color) {
        self.background = color;
        self.dirty = true;
    }

    pub fn center_element(&self) -> CenterElement {
        self.center_element
    }

    pub fn set_center_element(&mut self, element: CenterElement) {
        self.center_element = element;
        self.dirty = true;
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
        self.dirty = true;
    }

    pub fn font(&self) -> &str {
        &self.font
    }

    pub fn set_font(&mut self, font: &str) {
        self.font = font.to_string();
        self.dirty = true;
    }
}

fn log_rejected(err: &RangeError) {
    log::debug!("Rejected progress update: {}", err);
}
