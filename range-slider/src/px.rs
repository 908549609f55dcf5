//! Physical pixel primitives shared between the host and the widget.
//!
//! The host reports widget sizes and pointer positions in whole physical
//! pixels, so [`Px`], [`PxPosition`] and [`PxSize`] are integer based. The
//! widget's own geometry needs sub-pixel edges (the active bar sits half a
//! pixel away from each handle), so [`PxRect`] stores `f32` edges.
//!
//! # Coordinate System
//!
//! - Origin (0, 0) at the widget's top-left corner
//! - X-axis increases to the right
//! - Y-axis increases downward
//!
//! Most slider math happens along one axis. [`PxPosition::main_axis`] and
//! [`PxPosition::cross_axis`] project a position onto the axis the slider
//! travels along and the axis perpendicular to it.
//!
//! # Example
//!
//! ```
//! use range_slider::{Orientation, Px, PxPosition, PxSize};
//!
//! let size = PxSize::new(Px::new(200), Px::new(20));
//! assert_eq!(size.main_axis(Orientation::Horizontal), Px::new(200));
//! assert_eq!(size.main_axis(Orientation::Vertical), Px::new(20));
//!
//! let position = PxPosition::new(Px::new(40), Px::new(10));
//! assert_eq!(position.cross_axis(Orientation::Horizontal), Px::new(10));
//! ```

use crate::Orientation;

/// A physical pixel coordinate or length.
///
/// Negative values are allowed: a drag may carry the pointer outside the
/// widget, and the widget must still map those positions (they clamp to the
/// range bounds).
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub struct Px(pub i32);

impl Px {
    /// Zero pixels.
    pub const ZERO: Self = Self(0);

    /// Creates a new `Px` from an i32 value.
    pub const fn new(value: i32) -> Self {
        Px(value)
    }

    /// Returns the raw i32 value.
    pub fn raw(self) -> i32 {
        self.0
    }

    /// Converts the pixel value to f32.
    ///
    /// ```
    /// use range_slider::Px;
    ///
    /// assert_eq!(Px::new(42).to_f32(), 42.0);
    /// ```
    pub fn to_f32(self) -> f32 {
        self.0 as f32
    }

    /// Creates a `Px` from an f32 value, saturating at the numeric bounds
    /// instead of overflowing. The fractional part is truncated.
    ///
    /// ```
    /// use range_slider::Px;
    ///
    /// assert_eq!(Px::saturating_from_f32(42.7).raw(), 42);
    /// assert_eq!(Px::saturating_from_f32(f32::MAX).raw(), i32::MAX);
    /// ```
    pub fn saturating_from_f32(value: f32) -> Self {
        let clamped_value = value.clamp(i32::MIN as f32, i32::MAX as f32);
        Px(clamped_value as i32)
    }
}

/// A pointer position in physical pixels, relative to the widget origin.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PxPosition {
    /// The x-coordinate in physical pixels
    pub x: Px,
    /// The y-coordinate in physical pixels
    pub y: Px,
}

impl PxPosition {
    /// The origin (0, 0).
    pub const ZERO: Self = Self { x: Px(0), y: Px(0) };

    /// Creates a new position from x and y coordinates.
    pub const fn new(x: Px, y: Px) -> Self {
        Self { x, y }
    }

    /// Builds a position from a main-axis and a cross-axis coordinate.
    pub fn oriented(main: Px, cross: Px, orientation: Orientation) -> Self {
        match orientation {
            Orientation::Horizontal => Self::new(main, cross),
            Orientation::Vertical => Self::new(cross, main),
        }
    }

    /// The coordinate along the slider's travel axis.
    pub fn main_axis(self, orientation: Orientation) -> Px {
        match orientation {
            Orientation::Horizontal => self.x,
            Orientation::Vertical => self.y,
        }
    }

    /// The coordinate perpendicular to the slider's travel axis.
    pub fn cross_axis(self, orientation: Orientation) -> Px {
        match orientation {
            Orientation::Horizontal => self.y,
            Orientation::Vertical => self.x,
        }
    }
}

/// A widget size in physical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PxSize {
    /// The width in physical pixels
    pub width: Px,
    /// The height in physical pixels
    pub height: Px,
}

impl PxSize {
    /// Zero size (0×0).
    pub const ZERO: Self = Self {
        width: Px(0),
        height: Px(0),
    };

    /// Creates a new size from width and height.
    pub const fn new(width: Px, height: Px) -> Self {
        Self { width, height }
    }

    /// Builds a size from its main-axis and cross-axis extents.
    ///
    /// ```
    /// use range_slider::{Orientation, Px, PxSize};
    ///
    /// let size = PxSize::oriented(Px::new(24), Px::new(11), Orientation::Vertical);
    /// assert_eq!(size, PxSize::new(Px::new(11), Px::new(24)));
    /// ```
    pub fn oriented(main: Px, cross: Px, orientation: Orientation) -> Self {
        match orientation {
            Orientation::Horizontal => Self::new(main, cross),
            Orientation::Vertical => Self::new(cross, main),
        }
    }

    /// Returns `true` if either dimension is zero or negative.
    pub fn is_empty(self) -> bool {
        self.width.0 <= 0 || self.height.0 <= 0
    }

    /// The extent along the slider's travel axis.
    pub fn main_axis(self, orientation: Orientation) -> Px {
        match orientation {
            Orientation::Horizontal => self.width,
            Orientation::Vertical => self.height,
        }
    }

    /// The extent perpendicular to the slider's travel axis.
    pub fn cross_axis(self, orientation: Orientation) -> Px {
        match orientation {
            Orientation::Horizontal => self.height,
            Orientation::Vertical => self.width,
        }
    }
}

/// An axis-aligned rectangle with sub-pixel edges.
///
/// Edges are inclusive for hit-testing: a pointer exactly on the right or
/// bottom edge is inside.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PxRect {
    /// The x-coordinate of the top-left corner
    pub x: f32,
    /// The y-coordinate of the top-left corner
    pub y: f32,
    /// The width of the rectangle
    pub width: f32,
    /// The height of the rectangle
    pub height: f32,
}

impl PxRect {
    /// An empty rectangle at the origin.
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        width: 0.0,
        height: 0.0,
    };

    /// Creates a new rectangle from its top-left corner and dimensions.
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Builds a rectangle from main-axis and cross-axis spans.
    ///
    /// `main` and `cross` are `(start, length)` pairs.
    pub fn oriented(main: (f32, f32), cross: (f32, f32), orientation: Orientation) -> Self {
        match orientation {
            Orientation::Horizontal => Self::new(main.0, cross.0, main.1, cross.1),
            Orientation::Vertical => Self::new(cross.0, main.0, cross.1, main.1),
        }
    }

    /// The left edge.
    pub fn left(&self) -> f32 {
        self.x
    }

    /// The right edge.
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// The top edge.
    pub fn top(&self) -> f32 {
        self.y
    }

    /// The bottom edge.
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// The center point as `(x, y)`.
    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Where the rectangle starts along the slider's travel axis.
    pub fn main_start(&self, orientation: Orientation) -> f32 {
        match orientation {
            Orientation::Horizontal => self.x,
            Orientation::Vertical => self.y,
        }
    }

    /// Where the rectangle ends along the slider's travel axis.
    pub fn main_end(&self, orientation: Orientation) -> f32 {
        match orientation {
            Orientation::Horizontal => self.right(),
            Orientation::Vertical => self.bottom(),
        }
    }

    /// Returns `true` if the rectangle has no positive area.
    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    /// Checks whether a pointer position lies inside the rectangle.
    ///
    /// ```
    /// use range_slider::{Px, PxPosition, PxRect};
    ///
    /// let rect = PxRect::new(1.0, 4.0, 11.0, 11.0);
    /// assert!(rect.contains(PxPosition::new(Px::new(12), Px::new(15))));
    /// assert!(!rect.contains(PxPosition::new(Px::new(13), Px::new(15))));
    /// ```
    pub fn contains(&self, position: PxPosition) -> bool {
        if self.is_empty() {
            return false;
        }
        let x = position.x.to_f32();
        let y = position.y.to_f32();
        x >= self.left() && x <= self.right() && y >= self.top() && y <= self.bottom()
    }
}

impl std::ops::Add for Px {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Px(self.0 + rhs.0)
    }
}

impl std::ops::Sub for Px {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Px(self.0 - rhs.0)
    }
}

impl std::ops::Mul<i32> for Px {
    type Output = Self;

    fn mul(self, rhs: i32) -> Self::Output {
        Px(self.0 * rhs)
    }
}

impl std::ops::Div<i32> for Px {
    type Output = Self;

    fn div(self, rhs: i32) -> Self::Output {
        Px(self.0 / rhs)
    }
}

impl From<i32> for Px {
    fn from(value: i32) -> Self {
        Px(value)
    }
}

#[cfg(feature = "winit")]
impl From<winit::dpi::PhysicalSize<u32>> for PxSize {
    fn from(size: winit::dpi::PhysicalSize<u32>) -> Self {
        Self {
            width: Px(i32::try_from(size.width).unwrap_or(i32::MAX)),
            height: Px(i32::try_from(size.height).unwrap_or(i32::MAX)),
        }
    }
}

#[cfg(feature = "winit")]
impl From<winit::dpi::PhysicalPosition<f64>> for PxPosition {
    fn from(position: winit::dpi::PhysicalPosition<f64>) -> Self {
        Self {
            x: Px::saturating_from_f32(position.x as f32),
            y: Px::saturating_from_f32(position.y as f32),
        }
    }
}
