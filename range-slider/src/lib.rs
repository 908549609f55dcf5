//! range-slider is a dual-handle slider widget for picking a sub-range of an
//! integer range, independent of any particular UI toolkit.
//!
//! # Overview
//!
//! A [`RangeSlider`] holds a range `[minimum, maximum]` and two values inside
//! it. The user changes the values by dragging either handle or by clicking
//! the track beside them. Every change is announced through a [`Signal`].
//!
//! ```
//! use range_slider::{Orientation, RangeSlider, RangeSliderArgs};
//!
//! let slider = RangeSlider::with_args(
//!     RangeSliderArgs::default()
//!         .minimum(-50)
//!         .maximum(50)
//!         .orientation(Orientation::Vertical),
//! );
//! assert_eq!(slider.step(), 10);
//! assert_eq!((slider.lower_value(), slider.upper_value()), (-50, 50));
//! ```
//!
//! # Hosting
//!
//! The widget never talks to a window directly. A host forwards pointer
//! input through the [`Widget`] trait and paints into anything implementing
//! [`Canvas`]. [`RecordingCanvas`] keeps the issued [`DrawCommand`]s, which
//! is how the tests and the demo inspect rendering.
//!
//! ```
//! use range_slider::{
//!     CursorEvent, PressKeyEventType, Px, PxPosition, PxSize, RangeSlider, RecordingCanvas,
//!     Widget,
//! };
//!
//! let mut slider = RangeSlider::new();
//! let size = PxSize::new(Px(124), Px(21));
//! slider.resize(size);
//!
//! // A click left of the lower handle steps the lower value down.
//! slider.set_lower_value(50);
//! let position = PxPosition::new(Px(10), Px(10));
//! slider.dispatch(&CursorEvent::pressed(position, PressKeyEventType::Left));
//! slider.dispatch(&CursorEvent::released(position, PressKeyEventType::Left));
//! assert_eq!(slider.lower_value(), 40);
//!
//! let mut canvas = RecordingCanvas::new();
//! slider.on_paint(&mut canvas, size);
//! assert_eq!(canvas.len(), 4);
//! ```
//!
//! # Features
//!
//! - `winit`: conversions from winit mouse buttons and physical coordinates.
#![deny(missing_docs, clippy::unwrap_used)]

pub mod canvas;
pub mod color;
pub mod cursor;
pub mod prop;
pub mod px;
pub mod range_slider;
pub mod widget;

pub use crate::{
    canvas::{Canvas, DrawCommand, RecordingCanvas, Stroke},
    color::Color,
    cursor::{
        CursorEvent, CursorEventContent, PointerButtons, PointerEvent, PressKeyEventType,
    },
    prop::{CallbackWith, Signal, SubscriptionId},
    px::{Px, PxPosition, PxRect, PxSize},
    range_slider::{
        ACTIVE_BAR_SEAM, CROSS_AXIS_EDGE_EXCLUSION, HANDLE_CORNER_RADIUS, HANDLE_SIDE_LENGTH,
        Orientation, ParseOrientationError, RangeSlider, RangeSliderArgs, SliderHandle,
        SliderLayout, TRACK_CORNER_RADIUS, TRACK_MARGIN, TRACK_THICKNESS, ValueOrdering,
        minimum_size, step_for_interval,
    },
    widget::Widget,
};

#[cfg(feature = "winit")]
pub use winit;
