//! The interface a host UI layer drives.
//!
//! A host owns the event loop. It reports the widget's size with
//! [`Widget::resize`], forwards pointer input to the `on_*` handlers, and
//! repaints when [`Widget::take_redraw_request`] says so. Everything the
//! widget computes is independent of any windowing system, so the same
//! calls work from a real window, a test, or a headless replay.

use crate::{Canvas, CursorEvent, CursorEventContent, PointerEvent, PxSize};

/// An interactive, self-painting control.
pub trait Widget {
    /// A pointer button went down over the widget.
    fn on_press(&mut self, event: &PointerEvent);

    /// The pointer moved. `event.buttons` tells whether this is a drag.
    fn on_move(&mut self, event: &PointerEvent);

    /// A pointer button was released.
    fn on_release(&mut self, event: &PointerEvent);

    /// Paints the widget at `size`. Must not change widget state.
    fn on_paint(&self, canvas: &mut dyn Canvas, size: PxSize);

    /// The host enabled or disabled the widget.
    fn on_enabled_changed(&mut self, enabled: bool);

    /// The host assigned a new size.
    fn resize(&mut self, size: PxSize);

    /// The smallest size the widget remains usable at.
    fn minimum_size_hint(&self) -> PxSize;

    /// Returns whether a repaint was requested since the last call, and
    /// clears the request. Hosts coalesce requests by polling this once per
    /// frame.
    fn take_redraw_request(&mut self) -> bool;

    /// Routes one entry of a pointer event stream to the matching handler.
    fn dispatch(&mut self, event: &CursorEvent) {
        let pointer = event.pointer();
        match event.content {
            CursorEventContent::Pressed(_) => self.on_press(&pointer),
            CursorEventContent::Moved => self.on_move(&pointer),
            CursorEventContent::Released(_) => self.on_release(&pointer),
        }
    }
}
