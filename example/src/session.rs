//! A fixed sequence of clicks and drags, placed from the slider's current
//! layout so it works at any size and orientation.

use range_slider::{
    CursorEvent, HANDLE_SIDE_LENGTH, PointerButtons, PressKeyEventType, Px, PxPosition,
    RangeSlider, SliderLayout, Widget,
};
use tracing::info;

const DRAG_STEPS: i32 = 4;

pub fn run(slider: &mut RangeSlider) {
    let layout = slider.layout();
    let gap_start = layout
        .lower_handle_rect(slider.lower_value())
        .main_end(layout.orientation());
    let gap_end = layout
        .upper_handle_rect(slider.upper_value())
        .main_start(layout.orientation());
    click(slider, on_axis(&layout, (gap_start + gap_end) / 2.0));
    report(slider, "clicked the middle of the gap");

    click(slider, on_axis(&layout, 0.0));
    report(slider, "clicked before the lower handle");

    let layout = slider.layout();
    drag(
        slider,
        upper_center(&layout, slider.upper_value()),
        along_track(&layout, 0.75),
    );
    report(slider, "dragged the upper handle to three quarters");

    let layout = slider.layout();
    let after_upper = layout
        .upper_handle_rect(slider.upper_value())
        .main_end(layout.orientation())
        + 2.0;
    click(slider, on_axis(&layout, after_upper));
    report(slider, "clicked after the upper handle");

    let layout = slider.layout();
    drag(
        slider,
        lower_center(&layout, slider.lower_value()),
        along_track(&layout, 1.0),
    );
    report(slider, "dragged the lower handle onto the upper one");

    let layout = slider.layout();
    drag(
        slider,
        lower_center(&layout, slider.lower_value()),
        along_track(&layout, 0.25),
    );
    report(slider, "dragged the lower handle back to a quarter");

    slider.set_enabled(false);
    let layout = slider.layout();
    click(slider, on_axis(&layout, 0.0));
    report(slider, "clicked while disabled");
}

fn report(slider: &RangeSlider, step: &str) {
    info!(
        lower = slider.lower_value(),
        upper = slider.upper_value(),
        enabled = slider.is_enabled(),
        "{step}"
    );
}

/// Pointer position `main` pixels along the travel axis, centered across it.
fn on_axis(layout: &SliderLayout, main: f32) -> PxPosition {
    let orientation = layout.orientation();
    let cross = layout.size().cross_axis(orientation) / 2;
    PxPosition::oriented(Px::saturating_from_f32(main), cross, orientation)
}

fn along_track(layout: &SliderLayout, fraction: f32) -> PxPosition {
    let orientation = layout.orientation();
    let track = layout.track_rect();
    let start = track.main_start(orientation);
    let end = track.main_end(orientation);
    on_axis(layout, start + (end - start) * fraction)
}

fn lower_center(layout: &SliderLayout, value: i32) -> PxPosition {
    on_axis(layout, layout.lower_handle_offset(value) + HANDLE_SIDE_LENGTH / 2.0)
}

fn upper_center(layout: &SliderLayout, value: i32) -> PxPosition {
    on_axis(layout, layout.upper_handle_offset(value) + HANDLE_SIDE_LENGTH / 2.0)
}

fn click(slider: &mut RangeSlider, position: PxPosition) {
    slider.dispatch(&CursorEvent::pressed(position, PressKeyEventType::Left));
    slider.dispatch(&CursorEvent::released(position, PressKeyEventType::Left));
}

fn drag(slider: &mut RangeSlider, from: PxPosition, to: PxPosition) {
    slider.dispatch(&CursorEvent::pressed(from, PressKeyEventType::Left));
    for step in 1..=DRAG_STEPS {
        let position = PxPosition::new(
            from.x + (to.x - from.x) * step / DRAG_STEPS,
            from.y + (to.y - from.y) * step / DRAG_STEPS,
        );
        slider.dispatch(&CursorEvent::moved(position, PointerButtons::PRIMARY));
    }
    slider.dispatch(&CursorEvent::released(to, PressKeyEventType::Left));
}
