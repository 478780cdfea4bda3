//! Host-facing behavior of the progress bar widget

use cairo::{Context, Format, ImageSurface};
use std::cell::RefCell;
use std::rc::Rc;

use progress_bar::{
    CenterElement, Color, Orientation, ProgressBar, RangeError, SolidParent, ValueChange,
};

const BLUE: Color = Color::new(0.0, 0.0, 1.0, 1.0);

/// Records every notification the bar fires, in order
#[derive(Default)]
struct Recorder {
    events: Rc<RefCell<Vec<(&'static str, f64)>>>,
}

impl Recorder {
    fn attach(bar: &mut ProgressBar) -> Self {
        let recorder = Recorder::default();

        let events = recorder.events.clone();
        bar.connect_progress_changed(move |change: &ValueChange| {
            events.borrow_mut().push(("changed", change.current));
        });
        let events = recorder.events.clone();
        bar.connect_progress_completed(move |change: &ValueChange| {
            events.borrow_mut().push(("completed", change.current));
        });

        recorder
    }

    fn take(&self) -> Vec<(&'static str, f64)> {
        std::mem::take(&mut *self.events.borrow_mut())
    }
}

fn paint(bar: &mut ProgressBar) -> ImageSurface {
    let surface = ImageSurface::create(Format::ARgb32, bar.width(), bar.height()).unwrap();
    {
        let cr = Context::new(&surface).unwrap();
        bar.on_paint(&cr, None).unwrap();
    }
    surface
}

fn rgba_at(surface: &mut ImageSurface, x: usize, y: usize) -> (u8, u8, u8, u8) {
    let stride = surface.stride() as usize;
    let data = surface.data().unwrap();
    let offset = y * stride + x * 4;
    let argb = u32::from_ne_bytes([
        data[offset],
        data[offset + 1],
        data[offset + 2],
        data[offset + 3],
    ]);
    (
        (argb >> 16) as u8,
        (argb >> 8) as u8,
        argb as u8,
        (argb >> 24) as u8,
    )
}

#[test]
fn test_value_change_fires_changed_only() {
    let mut bar = ProgressBar::new().unwrap();
    let recorder = Recorder::attach(&mut bar);

    bar.set_value(40.0).unwrap();
    assert_eq!(recorder.take(), vec![("changed", 40.0)]);
}

#[test]
fn test_reaching_maximum_fires_changed_then_completed() {
    let mut bar = ProgressBar::new().unwrap();
    let recorder = Recorder::attach(&mut bar);

    bar.set_value(100.0).unwrap();
    assert_eq!(
        recorder.take(),
        vec![("changed", 100.0), ("completed", 100.0)]
    );
}

#[test]
fn test_completion_fires_every_time() {
    let mut bar = ProgressBar::new().unwrap();
    let recorder = Recorder::attach(&mut bar);

    bar.set_value(100.0).unwrap();
    recorder.take();

    bar.set_value(100.0).unwrap();
    assert_eq!(recorder.take(), vec![("completed", 100.0)]);
}

#[test]
fn test_same_value_still_schedules_redraw() {
    let mut bar = ProgressBar::new().unwrap();
    let recorder = Recorder::attach(&mut bar);
    bar.set_value(30.0).unwrap();
    recorder.take();

    paint(&mut bar);
    assert!(!bar.needs_redraw());

    bar.set_value(30.0).unwrap();
    assert!(recorder.take().is_empty());
    assert!(bar.needs_redraw());
}

#[test]
fn test_rejected_value_changes_nothing() {
    let mut bar = ProgressBar::new().unwrap();
    bar.set_value(25.0).unwrap();
    paint(&mut bar);
    let recorder = Recorder::attach(&mut bar);

    assert!(matches!(
        bar.set_value(101.0),
        Err(RangeError::ValueOutOfRange { .. })
    ));
    assert!(bar.set_value(-1.0).is_err());

    assert_eq!(bar.value(), 25.0);
    assert!(recorder.take().is_empty());
    assert!(!bar.needs_redraw());
}

#[test]
fn test_lowering_maximum_pulls_value_down() {
    let mut bar = ProgressBar::new().unwrap();
    bar.set_value(80.0).unwrap();
    let recorder = Recorder::attach(&mut bar);

    assert!(matches!(
        bar.set_maximum(0.0),
        Err(RangeError::MaximumNotAboveMinimum { .. })
    ));

    bar.set_maximum(60.0).unwrap();
    assert_eq!(bar.value(), 60.0);
    assert_eq!(recorder.take(), vec![("changed", 60.0), ("completed", 60.0)]);
}

#[test]
fn test_raising_minimum_pulls_value_up() {
    let mut bar = ProgressBar::new().unwrap();
    let recorder = Recorder::attach(&mut bar);

    bar.set_minimum(10.0).unwrap();
    assert_eq!(bar.value(), 10.0);
    assert_eq!(recorder.take(), vec![("changed", 10.0)]);
}

#[test]
fn test_paint_horizontal_fill() {
    let mut bar = ProgressBar::new().unwrap();
    bar.on_resize(200, 30).unwrap();
    bar.set_gradient_start(BLUE);
    bar.set_gradient_end(BLUE);
    bar.set_value(50.0).unwrap();

    let mut surface = paint(&mut bar);
    assert_eq!(rgba_at(&mut surface, 99, 15), (0, 0, 255, 255));
    assert_eq!(rgba_at(&mut surface, 100, 15), (255, 255, 255, 255));
}

#[test]
fn test_paint_vertical_fill_from_bottom() {
    let mut bar = ProgressBar::new().unwrap();
    bar.on_resize(30, 200).unwrap();
    bar.set_orientation(Orientation::Vertical);
    bar.set_gradient_start(BLUE);
    bar.set_gradient_end(BLUE);
    bar.set_value(25.0).unwrap();

    let mut surface = paint(&mut bar);
    assert_eq!(rgba_at(&mut surface, 15, 150), (0, 0, 255, 255));
    assert_eq!(rgba_at(&mut surface, 15, 149), (255, 255, 255, 255));
}

#[test]
fn test_rounded_corners_show_parent() {
    let mut bar = ProgressBar::new().unwrap();
    bar.set_rounded_corners(true);

    let surface = ImageSurface::create(Format::ARgb32, 300, 30).unwrap();
    {
        let cr = Context::new(&surface).unwrap();
        Color::BLACK.apply_to_cairo(&cr);
        cr.paint().unwrap();
        let parent = SolidParent {
            offset: (10.0, 10.0),
            color: Color::BLACK,
        };
        bar.on_paint(&cr, Some(&parent)).unwrap();
    }

    let mut surface = surface;
    // Outside the pill the host's own pixels are untouched
    assert_eq!(rgba_at(&mut surface, 0, 0), (0, 0, 0, 255));
    // Empty part of the bar shows the progress background
    assert_eq!(rgba_at(&mut surface, 150, 15), (255, 255, 255, 255));
}

#[test]
fn test_zero_size_skips_paint() {
    let mut bar = ProgressBar::new().unwrap();
    bar.on_resize(0, 0).unwrap();

    let surface = ImageSurface::create(Format::ARgb32, 1, 1).unwrap();
    let cr = Context::new(&surface).unwrap();
    bar.on_paint(&cr, None).unwrap();
    assert!(bar.needs_redraw());
}

fn pixels(mut surface: ImageSurface) -> Vec<u8> {
    surface.data().unwrap().to_vec()
}

#[test]
fn test_hidden_label_leaves_pixels_unchanged() {
    let mut plain = ProgressBar::new().unwrap();
    plain.set_value(40.0).unwrap();

    let mut hidden = ProgressBar::new().unwrap();
    hidden.set_value(40.0).unwrap();
    hidden.set_text("Copying files");
    hidden.set_center_element(CenterElement::None);

    assert_eq!(pixels(paint(&mut plain)), pixels(paint(&mut hidden)));
}

#[test]
fn test_percentage_label_paints() {
    let mut bare = ProgressBar::new().unwrap();
    bare.set_gradient_start(BLUE);
    bare.set_gradient_end(BLUE);
    bare.set_value(50.0).unwrap();

    let mut labelled = ProgressBar::new().unwrap();
    labelled.set_gradient_start(BLUE);
    labelled.set_gradient_end(BLUE);
    labelled.set_value(50.0).unwrap();
    labelled.set_center_element(CenterElement::Percentage);

    let before = paint(&mut bare);
    let stride = before.stride() as usize;
    let before = pixels(before);
    let after = pixels(paint(&mut labelled));
    assert!(!labelled.needs_redraw());

    let mut changed = 0;
    for (i, (a, b)) in before.chunks(4).zip(after.chunks(4)).enumerate() {
        if a == b {
            continue;
        }
        changed += 1;
        let x = (i * 4 % stride) / 4;
        // "50" sits in the middle of a 300 wide bar
        assert!((100..200).contains(&x), "label ink at x = {}", x);
    }
    assert!(changed > 0);
}
