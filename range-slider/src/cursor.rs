//! Pointer input delivered by the host.
//!
//! Hosts either call the [`Widget`](crate::Widget) handlers directly with a
//! [`PointerEvent`], or feed a stream of [`CursorEvent`]s through
//! [`Widget::dispatch`](crate::Widget::dispatch).
//!
//! Every event carries the set of buttons held at the time it was delivered,
//! so a move event knows whether it is part of a drag.
//!
//! ```
//! use range_slider::{CursorEvent, CursorEventContent, PointerButtons, PressKeyEventType, Px, PxPosition};
//!
//! let press = CursorEvent::pressed(PxPosition::new(Px(5), Px(10)), PressKeyEventType::Left);
//! assert!(press.buttons.contains(PressKeyEventType::Left));
//! assert_eq!(press.content, CursorEventContent::Pressed(PressKeyEventType::Left));
//!
//! let hover = CursorEvent::moved(PxPosition::new(Px(6), Px(10)), PointerButtons::NONE);
//! assert!(hover.buttons.is_empty());
//! ```

use crate::PxPosition;

/// The pointer buttons the widget distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PressKeyEventType {
    /// The primary mouse button (typically left button) or primary touch.
    Left,
    /// The secondary mouse button (typically right button).
    Right,
    /// The middle mouse button (typically scroll wheel click).
    Middle,
}

impl PressKeyEventType {
    const fn bit(self) -> u8 {
        match self {
            PressKeyEventType::Left => 0b001,
            PressKeyEventType::Right => 0b010,
            PressKeyEventType::Middle => 0b100,
        }
    }

    /// Converts a winit mouse button. Buttons beyond the standard three map
    /// to `None`.
    #[cfg(feature = "winit")]
    pub fn from_winit(button: winit::event::MouseButton) -> Option<Self> {
        match button {
            winit::event::MouseButton::Left => Some(PressKeyEventType::Left),
            winit::event::MouseButton::Right => Some(PressKeyEventType::Right),
            winit::event::MouseButton::Middle => Some(PressKeyEventType::Middle),
            _ => None,
        }
    }
}

/// The set of buttons held down while an event was delivered.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PointerButtons(u8);

impl PointerButtons {
    /// No buttons held.
    pub const NONE: Self = Self(0);
    /// Only the primary button held.
    pub const PRIMARY: Self = Self(0b001);

    /// Returns a copy of this set with `button` added.
    pub const fn with(self, button: PressKeyEventType) -> Self {
        Self(self.0 | button.bit())
    }

    /// Returns a copy of this set with `button` removed.
    pub const fn without(self, button: PressKeyEventType) -> Self {
        Self(self.0 & !button.bit())
    }

    /// Whether `button` is held.
    pub const fn contains(self, button: PressKeyEventType) -> bool {
        self.0 & button.bit() != 0
    }

    /// Whether the primary button is held.
    pub const fn primary(self) -> bool {
        self.contains(PressKeyEventType::Left)
    }

    /// Whether no button is held.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl From<PressKeyEventType> for PointerButtons {
    fn from(button: PressKeyEventType) -> Self {
        Self::NONE.with(button)
    }
}

/// A pointer event as seen by a widget handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent {
    /// Pointer position relative to the widget origin.
    pub position: PxPosition,
    /// Buttons held when the event was delivered.
    pub buttons: PointerButtons,
}

impl PointerEvent {
    /// Creates a new pointer event.
    pub const fn new(position: PxPosition, buttons: PointerButtons) -> Self {
        Self { position, buttons }
    }
}

/// What happened to the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorEventContent {
    /// A button was pressed.
    Pressed(PressKeyEventType),
    /// The pointer moved.
    Moved,
    /// A button was released.
    Released(PressKeyEventType),
}

impl CursorEventContent {
    /// Creates a press/release event from winit mouse button events.
    ///
    /// Returns `None` for buttons other than left, right and middle.
    #[cfg(feature = "winit")]
    pub fn from_press_event(
        state: winit::event::ElementState,
        button: winit::event::MouseButton,
    ) -> Option<Self> {
        let event_type = PressKeyEventType::from_winit(button)?;
        let content = match state {
            winit::event::ElementState::Pressed => Self::Pressed(event_type),
            winit::event::ElementState::Released => Self::Released(event_type),
        };
        Some(content)
    }
}

/// A single entry of a host's pointer event stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorEvent {
    /// Pointer position relative to the widget origin.
    pub position: PxPosition,
    /// Buttons held after this event took effect.
    pub buttons: PointerButtons,
    /// The kind of event.
    pub content: CursorEventContent,
}

impl CursorEvent {
    /// A press of `button` with no other button held.
    pub fn pressed(position: PxPosition, button: PressKeyEventType) -> Self {
        Self {
            position,
            buttons: button.into(),
            content: CursorEventContent::Pressed(button),
        }
    }

    /// A pointer move with the given buttons held.
    pub fn moved(position: PxPosition, buttons: PointerButtons) -> Self {
        Self {
            position,
            buttons,
            content: CursorEventContent::Moved,
        }
    }

    /// A release of `button` leaving no button held.
    pub fn released(position: PxPosition, button: PressKeyEventType) -> Self {
        Self {
            position,
            buttons: PointerButtons::NONE,
            content: CursorEventContent::Released(button),
        }
    }

    /// The position and button state as handed to a widget handler.
    pub fn pointer(&self) -> PointerEvent {
        PointerEvent::new(self.position, self.buttons)
    }
}
