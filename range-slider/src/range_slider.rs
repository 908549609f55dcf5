//! A dual-handle slider for selecting a sub-range of an integer range.
//!
//! ## Usage
//!
//! Create a [`RangeSlider`], subscribe to its notifications, and let a host
//! drive it through the [`Widget`] trait.
//!
//! ```
//! use std::sync::{Arc, Mutex};
//! use range_slider::{RangeSlider, Widget, Px, PxSize};
//!
//! let mut slider = RangeSlider::new();
//! let ranges = Arc::new(Mutex::new(Vec::new()));
//! let sink = Arc::clone(&ranges);
//! slider.range_changed().connect(move |range| {
//!     if let Ok(mut ranges) = sink.lock() {
//!         ranges.push(range);
//!     }
//! });
//!
//! slider.resize(PxSize::new(Px(200), Px(20)));
//! slider.set_range(-500, 31);
//! assert_eq!((slider.lower_value(), slider.upper_value()), (-500, 31));
//! assert_eq!(*ranges.lock().unwrap(), vec![(-500, 100), (-500, 31)]);
//! ```
//!
//! A press on the track outside the handles steps the nearest bound by
//! [`RangeSlider::step`]; a press on a handle starts a drag that moves that
//! handle until release. Handles never cross: dragging one onto the other
//! makes the two values equal.
use std::{fmt, str::FromStr};

use derive_setters::Setters;
use tracing::{debug, trace, warn};

use crate::{
    Canvas, Color, PointerEvent, PxSize, Signal, Widget,
    range_slider::{
        interaction::{DragOutcome, PressTarget, classify_press, drag_lower, drag_offset, drag_upper},
        render::render_range_slider,
    },
};

pub use interaction::{CROSS_AXIS_EDGE_EXCLUSION, SliderHandle};
pub use layout::{
    ACTIVE_BAR_SEAM, HANDLE_CORNER_RADIUS, HANDLE_SIDE_LENGTH, SliderLayout, TRACK_CORNER_RADIUS,
    TRACK_MARGIN, TRACK_THICKNESS, minimum_size, step_for_interval,
};

mod interaction;
mod layout;
mod render;

/// The axis the handles travel along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    /// Left to right.
    #[default]
    Horizontal,
    /// Top to bottom.
    Vertical,
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Horizontal => f.write_str("horizontal"),
            Orientation::Vertical => f.write_str("vertical"),
        }
    }
}

/// Error returned when parsing an [`Orientation`] fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown orientation `{input}`, expected `horizontal` or `vertical`")]
pub struct ParseOrientationError {
    input: String,
}

impl FromStr for Orientation {
    type Err = ParseOrientationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "horizontal" | "h" => Ok(Orientation::Horizontal),
            "vertical" | "v" => Ok(Orientation::Vertical),
            _ => Err(ParseOrientationError {
                input: s.to_string(),
            }),
        }
    }
}

/// How the direct value setters treat `lower_value > upper_value`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ValueOrdering {
    /// Clamp only against `[minimum, maximum]`. A write that leaves the
    /// lower value above the upper one is kept and logged as a warning.
    #[default]
    Unchecked,
    /// Additionally clamp the lower value to at most the upper value, and
    /// the upper value to at least the lower value.
    Strict,
}

/// Initial configuration of a [`RangeSlider`].
#[derive(Debug, Clone, PartialEq, Setters)]
pub struct RangeSliderArgs {
    /// Lower bound of the range.
    pub minimum: i32,
    /// Upper bound of the range. When below `minimum`, `minimum` is lowered
    /// to match.
    pub maximum: i32,
    /// Initial lower value, clamped into the range.
    pub lower_value: i32,
    /// Initial upper value, clamped into the range.
    pub upper_value: i32,
    /// Travel axis.
    pub orientation: Orientation,
    /// Whether the slider starts enabled.
    pub enabled: bool,
    /// Active bar color while enabled.
    pub enabled_color: Color,
    /// Active bar color while disabled.
    pub disabled_color: Color,
    /// Ordering policy of the value setters.
    pub value_ordering: ValueOrdering,
}

impl Default for RangeSliderArgs {
    fn default() -> Self {
        Self {
            minimum: 0,
            maximum: 100,
            lower_value: 0,
            upper_value: 100,
            orientation: Orientation::Horizontal,
            enabled: true,
            enabled_color: Color::DODGER_BLUE,
            disabled_color: Color::DARK_GRAY,
            value_ordering: ValueOrdering::Unchecked,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct DragState {
    handle: SliderHandle,
    offset: f32,
}

/// A horizontal or vertical bar with two handles delimiting a lower and an
/// upper value inside `[minimum, maximum]`.
///
/// Notifications fire synchronously from inside the mutating call, in the
/// order subscribers were connected. A value notification fires on every
/// write, even when clamping leaves the value unchanged.
pub struct RangeSlider {
    minimum: i32,
    maximum: i32,
    lower_value: i32,
    upper_value: i32,
    interval: i64,
    orientation: Orientation,
    size: PxSize,
    enabled: bool,
    enabled_color: Color,
    disabled_color: Color,
    background_color: Color,
    value_ordering: ValueOrdering,
    drag: Option<DragState>,
    redraw_requested: bool,
    lower_value_changed: Signal<i32>,
    upper_value_changed: Signal<i32>,
    range_changed: Signal<(i32, i32)>,
}

impl RangeSlider {
    /// Creates a horizontal, enabled slider over `[0, 100]` with the whole
    /// range selected.
    pub fn new() -> Self {
        Self::with_args(RangeSliderArgs::default())
    }

    /// Creates a slider from `args`, clamping the same way the setters do.
    /// Nothing is emitted, since nobody can have subscribed yet.
    pub fn with_args(args: RangeSliderArgs) -> Self {
        let (minimum, maximum) = normalized_bounds(args.minimum, args.maximum);
        let lower_value = args.lower_value.clamp(minimum, maximum);
        let mut upper_value = args.upper_value.clamp(minimum, maximum);
        match args.value_ordering {
            ValueOrdering::Strict => upper_value = upper_value.max(lower_value),
            ValueOrdering::Unchecked if lower_value > upper_value => {
                warn!(lower_value, upper_value, "range slider created with crossed values");
            }
            ValueOrdering::Unchecked => {}
        }
        let background_color = if args.enabled {
            args.enabled_color
        } else {
            args.disabled_color
        };

        Self {
            minimum,
            maximum,
            lower_value,
            upper_value,
            interval: interval_of(minimum, maximum),
            orientation: args.orientation,
            size: PxSize::ZERO,
            enabled: args.enabled,
            enabled_color: args.enabled_color,
            disabled_color: args.disabled_color,
            background_color,
            value_ordering: args.value_ordering,
            drag: None,
            redraw_requested: true,
            lower_value_changed: Signal::new(),
            upper_value_changed: Signal::new(),
            range_changed: Signal::new(),
        }
    }

    /// Fired with the new lower value on every lower value write.
    pub fn lower_value_changed(&self) -> &Signal<i32> {
        &self.lower_value_changed
    }

    /// Fired with the new upper value on every upper value write.
    pub fn upper_value_changed(&self) -> &Signal<i32> {
        &self.upper_value_changed
    }

    /// Fired with `(minimum, maximum)` whenever a bound is written.
    pub fn range_changed(&self) -> &Signal<(i32, i32)> {
        &self.range_changed
    }

    /// Lower bound of the range.
    pub fn minimum(&self) -> i32 {
        self.minimum
    }

    /// Upper bound of the range.
    pub fn maximum(&self) -> i32 {
        self.maximum
    }

    /// The selected lower value.
    pub fn lower_value(&self) -> i32 {
        self.lower_value
    }

    /// The selected upper value.
    pub fn upper_value(&self) -> i32 {
        self.upper_value
    }

    /// `maximum - minimum`, widened so extreme ranges do not overflow.
    pub fn interval(&self) -> i64 {
        self.interval
    }

    /// Change applied by a click on the track beside the handles: a tenth of
    /// the interval, at least 1.
    pub fn step(&self) -> i64 {
        step_for_interval(self.interval)
    }

    /// The travel axis.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// The ordering policy of the value setters.
    pub fn value_ordering(&self) -> ValueOrdering {
        self.value_ordering
    }

    /// Whether the widget accepts pointer input.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// The color the active bar is painted with.
    pub fn background_color(&self) -> Color {
        self.background_color
    }

    /// The size last reported through [`Widget::resize`].
    pub fn size(&self) -> PxSize {
        self.size
    }

    /// The handle being dragged, if any.
    pub fn pressed_handle(&self) -> Option<SliderHandle> {
        self.drag.map(|drag| drag.handle)
    }

    /// Whether the lower handle is being dragged.
    pub fn is_lower_handle_pressed(&self) -> bool {
        self.pressed_handle() == Some(SliderHandle::Lower)
    }

    /// Whether the upper handle is being dragged.
    pub fn is_upper_handle_pressed(&self) -> bool {
        self.pressed_handle() == Some(SliderHandle::Upper)
    }

    /// Geometry at the current size, orientation and range.
    pub fn layout(&self) -> SliderLayout {
        self.layout_for(self.size)
    }

    fn layout_for(&self, size: PxSize) -> SliderLayout {
        SliderLayout::new(size, self.orientation, self.minimum, self.maximum)
    }

    /// Sets the lower bound.
    ///
    /// If `minimum` exceeds the current maximum, the maximum is raised to
    /// match. The selection is then reset to the whole range: the lower
    /// value becomes the minimum and the upper value the maximum. Emits
    /// `lower_value_changed`, `upper_value_changed`, then `range_changed`.
    pub fn set_minimum(&mut self, minimum: i32) {
        self.minimum = minimum;
        if minimum > self.maximum {
            self.maximum = minimum;
        }
        self.reset_selection();
    }

    /// Sets the upper bound.
    ///
    /// If `maximum` is below the current minimum, the minimum is lowered to
    /// match. The selection is reset as in [`set_minimum`](Self::set_minimum).
    pub fn set_maximum(&mut self, maximum: i32) {
        self.maximum = maximum;
        if maximum < self.minimum {
            self.minimum = maximum;
        }
        self.reset_selection();
    }

    /// Sets both bounds: [`set_minimum`](Self::set_minimum) followed by
    /// [`set_maximum`](Self::set_maximum). Each step emits its own lower,
    /// upper and range notifications, so `range_changed` fires twice.
    pub fn set_range(&mut self, minimum: i32, maximum: i32) {
        self.set_minimum(minimum);
        self.set_maximum(maximum);
    }

    fn reset_selection(&mut self) {
        self.interval = interval_of(self.minimum, self.maximum);
        self.lower_value = self.minimum;
        self.upper_value = self.maximum;
        debug!(
            minimum = self.minimum,
            maximum = self.maximum,
            "range slider range changed"
        );
        self.request_redraw();
        self.lower_value_changed.emit(self.lower_value);
        self.upper_value_changed.emit(self.upper_value);
        self.range_changed.emit((self.minimum, self.maximum));
    }

    /// Writes the lower value, clamped to `[minimum, maximum]` (and to at
    /// most the upper value under [`ValueOrdering::Strict`]), then emits
    /// `lower_value_changed` and requests a redraw.
    pub fn set_lower_value(&mut self, value: i32) {
        self.write_lower_value(i64::from(value));
    }

    /// Writes the upper value, clamped to `[minimum, maximum]` (and to at
    /// least the lower value under [`ValueOrdering::Strict`]), then emits
    /// `upper_value_changed` and requests a redraw.
    pub fn set_upper_value(&mut self, value: i32) {
        self.write_upper_value(i64::from(value));
    }

    fn write_lower_value(&mut self, value: i64) {
        let mut clamped = self.clamp_to_range(value);
        if self.value_ordering == ValueOrdering::Strict {
            clamped = clamped.min(self.upper_value);
        }
        self.lower_value = clamped;
        trace!(requested = value, lower_value = clamped, "lower value written");
        self.check_ordering();
        self.lower_value_changed.emit(clamped);
        self.request_redraw();
    }

    fn write_upper_value(&mut self, value: i64) {
        let mut clamped = self.clamp_to_range(value);
        if self.value_ordering == ValueOrdering::Strict {
            clamped = clamped.max(self.lower_value);
        }
        self.upper_value = clamped;
        trace!(requested = value, upper_value = clamped, "upper value written");
        self.check_ordering();
        self.upper_value_changed.emit(clamped);
        self.request_redraw();
    }

    fn clamp_to_range(&self, value: i64) -> i32 {
        let clamped = value.clamp(i64::from(self.minimum), i64::from(self.maximum));
        // In range of i32 because both bounds are.
        clamped as i32
    }

    fn check_ordering(&self) {
        if self.lower_value > self.upper_value {
            warn!(
                lower_value = self.lower_value,
                upper_value = self.upper_value,
                "range slider lower value exceeds upper value"
            );
        }
    }

    /// Changes the travel axis and requests a redraw.
    pub fn set_orientation(&mut self, orientation: Orientation) {
        if self.orientation != orientation {
            debug!(%orientation, "range slider orientation changed");
        }
        self.orientation = orientation;
        self.request_redraw();
    }

    /// Enables or disables the widget. Same as [`Widget::on_enabled_changed`].
    pub fn set_enabled(&mut self, enabled: bool) {
        self.on_enabled_changed(enabled);
    }

    fn request_redraw(&mut self) {
        self.redraw_requested = true;
    }

    fn apply_drag_outcome(&mut self, handle: SliderHandle, outcome: DragOutcome) {
        // Pixel rounding on wide ranges can land a few units past the other
        // handle, so drag results are also bounded by the other value.
        match (handle, outcome) {
            (SliderHandle::Lower, DragOutcome::Value(value)) => {
                self.write_lower_value(round_value(value).min(i64::from(self.upper_value)));
            }
            (SliderHandle::Lower, DragOutcome::SnapToOther) => {
                self.write_lower_value(i64::from(self.upper_value));
            }
            (SliderHandle::Upper, DragOutcome::Value(value)) => {
                self.write_upper_value(round_value(value).max(i64::from(self.lower_value)));
            }
            (SliderHandle::Upper, DragOutcome::SnapToOther) => {
                self.write_upper_value(i64::from(self.lower_value));
            }
        }
    }
}

impl Default for RangeSlider {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for RangeSlider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RangeSlider")
            .field("minimum", &self.minimum)
            .field("maximum", &self.maximum)
            .field("lower_value", &self.lower_value)
            .field("upper_value", &self.upper_value)
            .field("orientation", &self.orientation)
            .field("size", &self.size)
            .field("enabled", &self.enabled)
            .field("pressed_handle", &self.pressed_handle())
            .finish_non_exhaustive()
    }
}

impl Widget for RangeSlider {
    fn on_press(&mut self, event: &PointerEvent) {
        if !self.enabled || !event.buttons.primary() {
            return;
        }

        let layout = self.layout();
        let lower_rect = layout.lower_handle_rect(self.lower_value);
        let upper_rect = layout.upper_handle_rect(self.upper_value);
        let target = classify_press(&layout, lower_rect, upper_rect, event.position);
        trace!(?target, position = ?event.position, "range slider pressed");

        self.drag = None;
        let step = self.step();
        let lower = i64::from(self.lower_value);
        let upper = i64::from(self.upper_value);
        match target {
            PressTarget::Handle(handle) => {
                let rect = match handle {
                    SliderHandle::Lower => lower_rect,
                    SliderHandle::Upper => upper_rect,
                };
                self.drag = Some(DragState {
                    handle,
                    offset: drag_offset(&layout, rect, event.position),
                });
            }
            PressTarget::BeforeLower => self.write_lower_value(lower - step),
            PressTarget::BetweenCloserToLower => self.write_lower_value((lower + step).min(upper)),
            PressTarget::BetweenCloserToUpper => self.write_upper_value((upper - step).max(lower)),
            PressTarget::AfterUpper => self.write_upper_value(upper + step),
            PressTarget::Ignored => {}
        }
    }

    fn on_move(&mut self, event: &PointerEvent) {
        if !self.enabled || !event.buttons.primary() {
            return;
        }
        let Some(drag) = self.drag else {
            return;
        };

        let layout = self.layout();
        let outcome = match drag.handle {
            SliderHandle::Lower => drag_lower(
                &layout,
                layout.upper_handle_rect(self.upper_value),
                event.position,
                drag.offset,
            ),
            SliderHandle::Upper => drag_upper(
                &layout,
                layout.lower_handle_rect(self.lower_value),
                event.position,
                drag.offset,
            ),
        };
        trace!(handle = ?drag.handle, ?outcome, "range slider dragged");
        self.apply_drag_outcome(drag.handle, outcome);
    }

    fn on_release(&mut self, _event: &PointerEvent) {
        self.drag = None;
    }

    fn on_paint(&self, canvas: &mut dyn Canvas, size: PxSize) {
        render_range_slider(
            canvas,
            &self.layout_for(size),
            self.lower_value,
            self.upper_value,
            self.background_color,
        );
    }

    fn on_enabled_changed(&mut self, enabled: bool) {
        self.enabled = enabled;
        self.background_color = if enabled {
            self.enabled_color
        } else {
            self.disabled_color
        };
        debug!(enabled, "range slider enabled state changed");
        self.request_redraw();
    }

    fn resize(&mut self, size: PxSize) {
        if self.size != size {
            self.size = size;
            self.request_redraw();
        }
    }

    fn minimum_size_hint(&self) -> PxSize {
        minimum_size(self.orientation)
    }

    fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }
}

fn interval_of(minimum: i32, maximum: i32) -> i64 {
    i64::from(maximum) - i64::from(minimum)
}

// Same result as `set_minimum(minimum)` followed by `set_maximum(maximum)`,
// whatever the previous bounds were.
fn normalized_bounds(minimum: i32, maximum: i32) -> (i32, i32) {
    if maximum < minimum {
        (maximum, maximum)
    } else {
        (minimum, maximum)
    }
}

fn round_value(value: f64) -> i64 {
    // Saturating float to int conversion; NaN maps to 0 and is clamped later.
    value.round() as i64
}
