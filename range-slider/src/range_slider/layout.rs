use crate::{Orientation, Px, PxRect, PxSize};

/// Side length of the square handles.
pub const HANDLE_SIDE_LENGTH: f32 = 11.0;
/// Thickness of the background track across the travel axis.
pub const TRACK_THICKNESS: f32 = 5.0;
/// Gap between the widget edge and the track ends.
pub const TRACK_MARGIN: f32 = 1.0;
/// Distance between the active bar and each handle edge. Keeps the
/// non-antialiased bar edges from bleeding into the handle outlines.
pub const ACTIVE_BAR_SEAM: f32 = 0.5;
/// Corner radius of the track.
pub const TRACK_CORNER_RADIUS: f32 = 1.0;
/// Corner radius of the handles.
pub const HANDLE_CORNER_RADIUS: f32 = 2.0;

/// Value change applied by a click on the track outside the handles:
/// a tenth of the interval, and never less than 1.
///
/// ```
/// use range_slider::step_for_interval;
///
/// assert_eq!(step_for_interval(100), 10);
/// assert_eq!(step_for_interval(5), 1);
/// assert_eq!(step_for_interval(0), 1);
/// ```
pub fn step_for_interval(interval: i64) -> i64 {
    (interval / 10).max(1)
}

/// The smallest size at which both handles and the track margins fit.
pub fn minimum_size(orientation: Orientation) -> PxSize {
    let main = HANDLE_SIDE_LENGTH * 2.0 + TRACK_MARGIN * 2.0;
    PxSize::oriented(
        Px::saturating_from_f32(main),
        Px::saturating_from_f32(HANDLE_SIDE_LENGTH),
        orientation,
    )
}

/// Geometry of a range slider at one size, orientation and range.
///
/// All positions are in widget-local pixels. Handle offsets are measured
/// along the travel axis from the widget origin to the handle's leading
/// edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderLayout {
    orientation: Orientation,
    size: PxSize,
    minimum: i32,
    interval: i64,
    track_rect: PxRect,
    valid_length: f32,
}

impl SliderLayout {
    /// Computes the layout for a widget of `size` showing `[minimum, maximum]`.
    ///
    /// An empty size yields empty rectangles everywhere.
    pub fn new(size: PxSize, orientation: Orientation, minimum: i32, maximum: i32) -> Self {
        let interval = (i64::from(maximum) - i64::from(minimum)).max(0);
        if size.is_empty() {
            return Self {
                orientation,
                size,
                minimum,
                interval,
                track_rect: PxRect::ZERO,
                valid_length: 0.0,
            };
        }

        let main = size.main_axis(orientation).to_f32();
        let cross = size.cross_axis(orientation).to_f32();
        let track_rect = PxRect::oriented(
            (TRACK_MARGIN, (main - TRACK_MARGIN * 2.0).max(0.0)),
            ((cross - TRACK_THICKNESS) / 2.0, TRACK_THICKNESS),
            orientation,
        );
        let valid_length = (main - TRACK_MARGIN * 2.0 - HANDLE_SIDE_LENGTH * 2.0).max(0.0);

        Self {
            orientation,
            size,
            minimum,
            interval,
            track_rect,
            valid_length,
        }
    }

    /// The orientation this layout was computed for.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// The widget size this layout was computed for.
    pub fn size(&self) -> PxSize {
        self.size
    }

    /// The background track.
    pub fn track_rect(&self) -> PxRect {
        self.track_rect
    }

    /// Travel-axis length available to the handles once the margins and
    /// both handles are reserved. Never negative.
    pub fn valid_length(&self) -> f32 {
        self.valid_length
    }

    /// Position of `value` within the range, in `[0, 1]` for in-range
    /// values. A zero interval maps everything to 0.
    pub fn fraction(&self, value: i32) -> f64 {
        if self.interval == 0 {
            return 0.0;
        }
        (i64::from(value) - i64::from(self.minimum)) as f64 / self.interval as f64
    }

    /// Leading-edge offset of the lower handle showing `value`.
    pub fn lower_handle_offset(&self, value: i32) -> f32 {
        (self.fraction(value) * f64::from(self.valid_length)) as f32 + TRACK_MARGIN
    }

    /// Leading-edge offset of the upper handle showing `value`. Shifted by one
    /// handle so the two handles never overlap, even at equal values.
    pub fn upper_handle_offset(&self, value: i32) -> f32 {
        self.lower_handle_offset(value) + HANDLE_SIDE_LENGTH
    }

    /// A handle square whose leading edge sits at `offset`, centered across
    /// the travel axis.
    pub fn handle_rect(&self, offset: f32) -> PxRect {
        if self.size.is_empty() {
            return PxRect::ZERO;
        }
        let cross = self.size.cross_axis(self.orientation).to_f32();
        PxRect::oriented(
            (offset, HANDLE_SIDE_LENGTH),
            ((cross - HANDLE_SIDE_LENGTH) / 2.0, HANDLE_SIDE_LENGTH),
            self.orientation,
        )
    }

    /// The lower handle showing `value`.
    pub fn lower_handle_rect(&self, value: i32) -> PxRect {
        self.handle_rect(self.lower_handle_offset(value))
    }

    /// The upper handle showing `value`.
    pub fn upper_handle_rect(&self, value: i32) -> PxRect {
        self.handle_rect(self.upper_handle_offset(value))
    }

    /// The part of the track strictly between the two handles, inset by
    /// [`ACTIVE_BAR_SEAM`] on both ends. Empty when the handles touch.
    pub fn active_rect(&self, lower_value: i32, upper_value: i32) -> PxRect {
        if self.track_rect.is_empty() {
            return PxRect::ZERO;
        }
        let start = self
            .lower_handle_rect(lower_value)
            .main_end(self.orientation)
            + ACTIVE_BAR_SEAM;
        let end = self
            .upper_handle_rect(upper_value)
            .main_start(self.orientation)
            - ACTIVE_BAR_SEAM;
        let track = self.track_rect;
        let cross = match self.orientation {
            Orientation::Horizontal => (track.y, track.height),
            Orientation::Vertical => (track.x, track.width),
        };
        PxRect::oriented((start, (end - start).max(0.0)), cross, self.orientation)
    }

    /// The value whose lower handle is centered at `center` on the travel
    /// axis. Not clamped to the range.
    pub fn lower_value_at(&self, center: f32) -> f64 {
        self.value_at_offset(center - HANDLE_SIDE_LENGTH / 2.0)
    }

    /// The value whose upper handle is centered at `center` on the travel
    /// axis. Not clamped to the range.
    pub fn upper_value_at(&self, center: f32) -> f64 {
        self.value_at_offset(center - HANDLE_SIDE_LENGTH / 2.0 - HANDLE_SIDE_LENGTH)
    }

    fn value_at_offset(&self, offset: f32) -> f64 {
        if self.interval == 0 || self.valid_length <= 0.0 {
            return f64::from(self.minimum);
        }
        let fraction = f64::from(offset - TRACK_MARGIN) / f64::from(self.valid_length);
        fraction * self.interval as f64 + f64::from(self.minimum)
    }
}
