use crate::{PxPosition, PxRect};

use super::layout::{HANDLE_SIDE_LENGTH, SliderLayout};

/// Width of the strip along each long edge of the widget where track
/// clicks are ignored, so a press that barely grazes the widget does not
/// step a value.
pub const CROSS_AXIS_EDGE_EXCLUSION: f32 = 2.0;

/// One of the two handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SliderHandle {
    /// The handle bounding the selection from below.
    Lower,
    /// The handle bounding the selection from above.
    Upper,
}

/// What a primary-button press landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum PressTarget {
    Handle(SliderHandle),
    BeforeLower,
    BetweenCloserToLower,
    BetweenCloserToUpper,
    AfterUpper,
    Ignored,
}

/// Where a dragged handle ends up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) enum DragOutcome {
    /// Move to this (unclamped) value.
    Value(f64),
    /// The handle would overlap the other one; coincide with it instead.
    SnapToOther,
}

pub(super) fn classify_press(
    layout: &SliderLayout,
    lower_rect: PxRect,
    upper_rect: PxRect,
    position: PxPosition,
) -> PressTarget {
    // Coincident handles overlap only in degenerate layouts; the upper one wins.
    if upper_rect.contains(position) {
        return PressTarget::Handle(SliderHandle::Upper);
    }
    if lower_rect.contains(position) {
        return PressTarget::Handle(SliderHandle::Lower);
    }

    let orientation = layout.orientation();
    let cross = position.cross_axis(orientation).to_f32();
    let cross_extent = layout.size().cross_axis(orientation).to_f32();
    if cross < CROSS_AXIS_EDGE_EXCLUSION || cross > cross_extent - CROSS_AXIS_EDGE_EXCLUSION {
        return PressTarget::Ignored;
    }

    let main = position.main_axis(orientation).to_f32();
    let lower_start = lower_rect.main_start(orientation);
    let lower_end = lower_start + HANDLE_SIDE_LENGTH;
    let upper_start = upper_rect.main_start(orientation);
    let upper_end = upper_start + HANDLE_SIDE_LENGTH;

    if main < lower_start {
        PressTarget::BeforeLower
    } else if main > lower_end && main < upper_start - HANDLE_SIDE_LENGTH {
        // The last handle width before the upper handle is a dead zone.
        // Nearness is measured from the lower handle's trailing edge against
        // half the span between the leading edges plus one handle; an exact
        // midpoint click goes to the lower handle.
        let from_lower = main - lower_end;
        let half_span = (upper_start - lower_start + HANDLE_SIDE_LENGTH) / 2.0;
        if from_lower < half_span {
            PressTarget::BetweenCloserToLower
        } else {
            PressTarget::BetweenCloserToUpper
        }
    } else if main > upper_end {
        PressTarget::AfterUpper
    } else {
        PressTarget::Ignored
    }
}

/// Pointer position minus the handle center along the travel axis, so the
/// grabbed point stays under the pointer while dragging.
pub(super) fn drag_offset(layout: &SliderLayout, handle_rect: PxRect, position: PxPosition) -> f32 {
    let orientation = layout.orientation();
    let center = handle_rect.main_start(orientation) + HANDLE_SIDE_LENGTH / 2.0;
    position.main_axis(orientation).to_f32() - center
}

pub(super) fn drag_lower(
    layout: &SliderLayout,
    upper_rect: PxRect,
    position: PxPosition,
    offset: f32,
) -> DragOutcome {
    let center = position.main_axis(layout.orientation()).to_f32() - offset;
    if center + HANDLE_SIDE_LENGTH / 2.0 <= upper_rect.main_start(layout.orientation()) {
        DragOutcome::Value(layout.lower_value_at(center))
    } else {
        DragOutcome::SnapToOther
    }
}

pub(super) fn drag_upper(
    layout: &SliderLayout,
    lower_rect: PxRect,
    position: PxPosition,
    offset: f32,
) -> DragOutcome {
    let center = position.main_axis(layout.orientation()).to_f32() - offset;
    let lower_start = lower_rect.main_start(layout.orientation());
    if lower_start + HANDLE_SIDE_LENGTH * 1.5 <= center {
        DragOutcome::Value(layout.upper_value_at(center))
    } else {
        DragOutcome::SnapToOther
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Orientation, Px, PxSize};

    fn layout() -> SliderLayout {
        SliderLayout::new(
            PxSize::new(Px(124), Px(21)),
            Orientation::Horizontal,
            0,
            100,
        )
    }

    fn classify(layout: &SliderLayout, lower: i32, upper: i32, x: i32, y: i32) -> PressTarget {
        classify_press(
            layout,
            layout.lower_handle_rect(lower),
            layout.upper_handle_rect(upper),
            PxPosition::new(Px(x), Px(y)),
        )
    }

    #[test]
    fn handles_are_hit_inside_their_squares() {
        let layout = layout();
        assert_eq!(
            classify(&layout, 0, 100, 6, 10),
            PressTarget::Handle(SliderHandle::Lower)
        );
        assert_eq!(
            classify(&layout, 0, 100, 117, 10),
            PressTarget::Handle(SliderHandle::Upper)
        );
    }

    #[test]
    fn upper_handle_wins_when_both_contain_the_point() {
        let layout = layout();
        // Shared edge at x = 52 when both handles show 40.
        assert_eq!(
            classify(&layout, 40, 40, 52, 10),
            PressTarget::Handle(SliderHandle::Upper)
        );
    }

    #[test]
    fn track_regions_are_classified() {
        let layout = layout();
        // Lower at 20 -> [21, 32]; upper at 80 -> [92, 103].
        assert_eq!(classify(&layout, 20, 80, 10, 10), PressTarget::BeforeLower);
        assert_eq!(classify(&layout, 20, 80, 40, 10), PressTarget::BetweenCloserToLower);
        assert_eq!(classify(&layout, 20, 80, 75, 10), PressTarget::BetweenCloserToUpper);
        assert_eq!(classify(&layout, 20, 80, 110, 10), PressTarget::AfterUpper);
    }

    #[test]
    fn last_handle_width_before_upper_is_dead() {
        let layout = layout();
        // Upper handle at 80 starts at 92; the strip (81, 92) is ignored.
        assert_eq!(classify(&layout, 20, 80, 80, 10), PressTarget::BetweenCloserToUpper);
        assert_eq!(classify(&layout, 20, 80, 81, 10), PressTarget::Ignored);
        assert_eq!(classify(&layout, 20, 80, 86, 10), PressTarget::Ignored);
        assert_eq!(classify(&layout, 20, 80, 91, 10), PressTarget::Ignored);
        // Full range: upper handle starts at 112.
        assert_eq!(classify(&layout, 0, 100, 105, 10), PressTarget::Ignored);
    }

    #[test]
    fn gap_midpoint_goes_to_lower() {
        let layout = layout();
        // Gap between 12 and 112; its midpoint is 62.
        assert_eq!(classify(&layout, 0, 100, 62, 10), PressTarget::BetweenCloserToLower);
    }

    #[test]
    fn cross_axis_edges_are_ignored() {
        let layout = layout();
        assert_eq!(classify(&layout, 20, 80, 10, 1), PressTarget::Ignored);
        assert_eq!(classify(&layout, 20, 80, 10, 2), PressTarget::BeforeLower);
        assert_eq!(classify(&layout, 20, 80, 10, 19), PressTarget::BeforeLower);
        assert_eq!(classify(&layout, 20, 80, 10, 20), PressTarget::Ignored);
    }

    #[test]
    fn press_beside_a_handle_outside_its_square_is_ignored() {
        let layout = layout();
        // x inside the lower handle's span, y above the square but inside the band.
        assert_eq!(classify(&layout, 20, 80, 25, 3), PressTarget::Ignored);
    }

    #[test]
    fn drag_offset_is_relative_to_handle_center() {
        let layout = layout();
        let rect = layout.lower_handle_rect(0);
        assert_eq!(drag_offset(&layout, rect, PxPosition::new(Px(8), Px(10))), 1.5);
    }

    #[test]
    fn lower_drag_snaps_instead_of_crossing() {
        let layout = layout();
        let upper = layout.upper_handle_rect(50);
        // Upper handle starts at 62; a lower center of 56.5 just touches it.
        assert!(matches!(
            drag_lower(&layout, upper, PxPosition::new(Px(56), Px(10)), -0.5),
            DragOutcome::Value(value) if (value - 50.0).abs() < 1e-6
        ));
        assert_eq!(
            drag_lower(&layout, upper, PxPosition::new(Px(57), Px(10)), -0.5),
            DragOutcome::SnapToOther
        );
    }

    #[test]
    fn upper_drag_snaps_instead_of_crossing() {
        let layout = layout();
        let lower = layout.lower_handle_rect(50);
        // Lower handle starts at 51; an upper center of 67.5 just clears it.
        assert!(matches!(
            drag_upper(&layout, lower, PxPosition::new(Px(68), Px(10)), 0.5),
            DragOutcome::Value(value) if (value - 50.0).abs() < 1e-6
        ));
        assert_eq!(
            drag_upper(&layout, lower, PxPosition::new(Px(67), Px(10)), 0.5),
            DragOutcome::SnapToOther
        );
    }
}
