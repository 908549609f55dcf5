//! Property tests for range slider invariants.
//!
//! Uses proptest to verify:
//! 1. Ordering: pointer input never leaves `minimum <= lower <= upper <= maximum`
//! 2. Strict setters keep the same ordering under arbitrary writes
//! 3. Range resets select the whole range and notify once per bound
//! 4. Geometry round trip: a handle center maps back to its value within a pixel

use std::sync::Arc;

use parking_lot::Mutex;
use proptest::prelude::*;
use range_slider::{
    CursorEvent, Orientation, PointerButtons, PressKeyEventType, Px, PxPosition, PxSize,
    RangeSlider, RangeSliderArgs, SliderLayout, ValueOrdering, Widget, step_for_interval,
};

// ── Strategies ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy)]
enum PointerOp {
    Press(i32, i32),
    Move(i32, i32),
    Release(i32, i32),
}

fn arb_orientation() -> impl Strategy<Value = Orientation> {
    prop_oneof![Just(Orientation::Horizontal), Just(Orientation::Vertical)]
}

fn arb_bounds() -> impl Strategy<Value = (i32, i32)> {
    (-10_000..10_000_i32, 0..20_000_i32).prop_map(|(minimum, span)| (minimum, minimum + span))
}

fn arb_size(orientation: Orientation) -> impl Strategy<Value = PxSize> {
    (0..400_i32, 0..40_i32)
        .prop_map(move |(main, cross)| PxSize::oriented(Px(main), Px(cross), orientation))
}

fn arb_pointer_op() -> impl Strategy<Value = PointerOp> {
    let coordinate = -20..420_i32;
    prop_oneof![
        (coordinate.clone(), coordinate.clone()).prop_map(|(x, y)| PointerOp::Press(x, y)),
        (coordinate.clone(), coordinate.clone()).prop_map(|(x, y)| PointerOp::Move(x, y)),
        (coordinate.clone(), coordinate).prop_map(|(x, y)| PointerOp::Release(x, y)),
    ]
}

#[derive(Debug, Clone, Copy)]
enum SetterCall {
    Lower(i32),
    Upper(i32),
}

fn arb_write() -> impl Strategy<Value = SetterCall> {
    prop_oneof![
        any::<i32>().prop_map(SetterCall::Lower),
        any::<i32>().prop_map(SetterCall::Upper),
    ]
}

fn apply(slider: &mut RangeSlider, op: PointerOp) {
    let event = match op {
        PointerOp::Press(x, y) => {
            CursorEvent::pressed(PxPosition::new(Px(x), Px(y)), PressKeyEventType::Left)
        }
        PointerOp::Move(x, y) => {
            CursorEvent::moved(PxPosition::new(Px(x), Px(y)), PointerButtons::PRIMARY)
        }
        PointerOp::Release(x, y) => {
            CursorEvent::released(PxPosition::new(Px(x), Px(y)), PressKeyEventType::Left)
        }
    };
    slider.dispatch(&event);
}

fn assert_ordered(slider: &RangeSlider) -> Result<(), TestCaseError> {
    prop_assert!(slider.minimum() <= slider.lower_value());
    prop_assert!(slider.lower_value() <= slider.upper_value());
    prop_assert!(slider.upper_value() <= slider.maximum());
    Ok(())
}

// ── 1. Pointer input preserves ordering ──────────────────────────────

proptest! {
    #[test]
    fn pointer_input_preserves_ordering(
        (orientation, size) in arb_orientation()
            .prop_flat_map(|orientation| (Just(orientation), arb_size(orientation))),
        (minimum, maximum) in arb_bounds(),
        ops in prop::collection::vec(arb_pointer_op(), 1..40),
    ) {
        let mut slider = RangeSlider::with_args(
            RangeSliderArgs::default().orientation(orientation),
        );
        slider.resize(size);
        slider.set_range(minimum, maximum);

        for op in ops {
            apply(&mut slider, op);
            assert_ordered(&slider)?;
        }
    }
}

// ── 2. Strict setters preserve ordering ──────────────────────────────

proptest! {
    #[test]
    fn strict_setters_preserve_ordering(
        (minimum, maximum) in arb_bounds(),
        writes in prop::collection::vec(arb_write(), 1..30),
    ) {
        let mut slider = RangeSlider::with_args(
            RangeSliderArgs::default().value_ordering(ValueOrdering::Strict),
        );
        slider.set_range(minimum, maximum);

        for write in writes {
            match write {
                SetterCall::Lower(value) => slider.set_lower_value(value),
                SetterCall::Upper(value) => slider.set_upper_value(value),
            }
            assert_ordered(&slider)?;
        }
    }

    #[test]
    fn unchecked_setters_stay_within_bounds(
        (minimum, maximum) in arb_bounds(),
        writes in prop::collection::vec(arb_write(), 1..30),
    ) {
        let mut slider = RangeSlider::new();
        slider.set_range(minimum, maximum);

        for write in writes {
            match write {
                SetterCall::Lower(value) => slider.set_lower_value(value),
                SetterCall::Upper(value) => slider.set_upper_value(value),
            }
            prop_assert!((minimum..=maximum).contains(&slider.lower_value()));
            prop_assert!((minimum..=maximum).contains(&slider.upper_value()));
        }
    }
}

// ── 3. Range resets ──────────────────────────────────────────────────

proptest! {
    #[test]
    fn set_range_selects_whole_range(minimum in any::<i32>(), maximum in any::<i32>()) {
        let mut slider = RangeSlider::new();
        let ranges = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&ranges);
        slider.range_changed().connect(move |range| sink.lock().push(range));

        slider.set_range(minimum, maximum);

        prop_assert!(slider.minimum() <= slider.maximum());
        prop_assert_eq!(slider.maximum(), maximum);
        prop_assert_eq!(slider.lower_value(), slider.minimum());
        prop_assert_eq!(slider.upper_value(), slider.maximum());
        prop_assert_eq!(
            slider.interval(),
            i64::from(slider.maximum()) - i64::from(slider.minimum())
        );
        let ranges = ranges.lock().clone();
        prop_assert_eq!(ranges.len(), 2);
        prop_assert_eq!(ranges[0], (minimum, minimum.max(100)));
        prop_assert_eq!(ranges.last().copied(), Some((slider.minimum(), slider.maximum())));
    }

    #[test]
    fn step_is_a_tenth_of_interval_and_positive(interval in 0..=i64::from(u32::MAX)) {
        let step = step_for_interval(interval);
        prop_assert!(step >= 1);
        prop_assert_eq!(step, (interval / 10).max(1));
    }
}

// ── 4. Geometry round trip ───────────────────────────────────────────

proptest! {
    #[test]
    fn handle_centers_map_back_to_their_values(
        orientation in arb_orientation(),
        main in 30..600_i32,
        (minimum, maximum) in arb_bounds(),
        fraction in 0.0..=1.0_f64,
    ) {
        let size = PxSize::oriented(Px(main), Px(21), orientation);
        let layout = SliderLayout::new(size, orientation, minimum, maximum);
        let interval = i64::from(maximum) - i64::from(minimum);
        let value = minimum + (fraction * interval as f64) as i32;

        let one_pixel = if layout.valid_length() > 0.0 {
            interval as f64 / f64::from(layout.valid_length())
        } else {
            0.0
        };
        let tolerance = one_pixel + 1e-6;

        let lower = layout.lower_handle_rect(value);
        let lower_center = lower.main_start(orientation) + lower.main_end(orientation);
        let recovered = layout.lower_value_at(lower_center / 2.0);
        prop_assert!((recovered - f64::from(value)).abs() <= tolerance);

        let upper = layout.upper_handle_rect(value);
        let upper_center = upper.main_start(orientation) + upper.main_end(orientation);
        let recovered = layout.upper_value_at(upper_center / 2.0);
        prop_assert!((recovered - f64::from(value)).abs() <= tolerance);
    }
}
