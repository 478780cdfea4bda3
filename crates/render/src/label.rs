//! Center label rendering.
//!
//! Text goes through Pango rather than Cairo's toy font API: Pango handles
//! ellipsizing and alignment, and its font descriptions can be cached.

use cairo::Context;
use pango::{Alignment, EllipsizeMode, FontDescription};
use pangocairo::functions::{create_layout, show_layout};
use std::cell::RefCell;
use std::collections::HashMap;

use progress_bar_types::{CenterElement, Color};

/// Label drawn on top of the bar
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CenterLabel<'a> {
    pub element: CenterElement,
    /// Shown verbatim for [`CenterElement::Text`]
    pub text: &'a str,
    /// Shown rounded for [`CenterElement::Percentage`]
    pub value: f64,
    pub foreground: Color,
    /// Pango font description string, e.g. "Segoe UI 9"
    pub font: &'a str,
}

impl CenterLabel<'_> {
    /// String to display, `None` when nothing is drawn
    pub fn display_text(&self) -> Option<String> {
        match self.element {
            CenterElement::None => None,
            CenterElement::Text => Some(self.text.to_string()),
            CenterElement::Percentage => Some(format_percentage(self.value)),
        }
    }
}

/// Value rounded half-up to an integer. No `%` sign, no locale grouping.
pub fn format_percentage(value: f64) -> String {
    let rounded = (value + 0.5).floor() as i64;
    rounded.to_string()
}

/// Cache for FontDescription objects to avoid reparsing every frame
struct FontDescriptionCache {
    cache: HashMap<String, FontDescription>,
    max_entries: usize,
}

impl FontDescriptionCache {
    fn new() -> Self {
        Self {
            cache: HashMap::new(),
            max_entries: 16,
        }
    }

    fn get_or_create(&mut self, font: &str) -> FontDescription {
        if let Some(desc) = self.cache.get(font) {
            return desc.clone();
        }

        if self.cache.len() >= self.max_entries {
            self.cache.clear();
        }

        let desc = FontDescription::from_string(font);
        self.cache.insert(font.to_string(), desc.clone());
        desc
    }
}

thread_local! {
    static FONT_DESC_CACHE: RefCell<FontDescriptionCache> = RefCell::new(FontDescriptionCache::new());
}

/// Get a cached FontDescription for a font string
pub fn font_description(font: &str) -> FontDescription {
    FONT_DESC_CACHE.with(|cache| cache.borrow_mut().get_or_create(font))
}

/// Draw the label centered in a `width` x `height` client area, ellipsized
/// at the end when it does not fit
pub fn render_center_label(
    cr: &Context,
    label: &CenterLabel<'_>,
    width: f64,
    height: f64,
) -> Result<(), cairo::Error> {
    let Some(text) = label.display_text() else {
        return Ok(());
    };
    if text.is_empty() || width <= 0.0 || height <= 0.0 {
        return Ok(());
    }

    let layout = create_layout(cr);
    layout.set_font_description(Some(&font_description(label.font)));
    layout.set_single_paragraph_mode(true);
    layout.set_width((width * pango::SCALE as f64) as i32);
    layout.set_ellipsize(EllipsizeMode::End);
    layout.set_alignment(Alignment::Center);
    layout.set_text(&text);

    let (_ink, logical) = layout.pixel_extents();
    let y = (height - logical.height() as f64) / 2.0;

    cr.save()?;
    cr.rectangle(0.0, 0.0, width, height);
    cr.clip();
    label.foreground.apply_to_cairo(cr);
    cr.move_to(0.0, y);
    show_layout(cr, &layout);
    cr.restore()?;

    Ok(())
}
