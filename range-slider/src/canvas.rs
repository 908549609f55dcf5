//! The drawing surface a host hands to [`Widget::on_paint`](crate::Widget::on_paint).
//!
//! The widget only needs filled and stroked rectangles, with or without
//! rounded corners, and control over anti-aliasing. Hosts implement
//! [`Canvas`] on top of whatever painter they have. [`RecordingCanvas`]
//! captures the calls as [`DrawCommand`]s instead of rasterizing them, which
//! is what tests and headless hosts use.

use crate::{Color, PxRect};

/// An outline drawn around a shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    /// Outline color.
    pub color: Color,
    /// Outline width in physical pixels.
    pub width: f32,
}

impl Stroke {
    /// Creates a stroke.
    pub const fn new(color: Color, width: f32) -> Self {
        Self { color, width }
    }
}

/// A host drawing context.
pub trait Canvas {
    /// Turns anti-aliasing on or off for the shapes drawn after this call.
    fn set_antialiasing(&mut self, enabled: bool);

    /// Draws a rectangle with rounded corners.
    fn draw_rounded_rect(&mut self, rect: PxRect, radius: f32, fill: Color, stroke: Option<Stroke>);

    /// Draws a rectangle with square corners.
    fn draw_rect(&mut self, rect: PxRect, fill: Color, stroke: Option<Stroke>);
}

/// A recorded [`Canvas`] call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    /// A [`Canvas::draw_rounded_rect`] call.
    RoundedRect {
        /// Shape bounds.
        rect: PxRect,
        /// Corner radius.
        radius: f32,
        /// Fill color.
        fill: Color,
        /// Optional outline.
        stroke: Option<Stroke>,
        /// Anti-aliasing state in force when the call was made.
        antialiased: bool,
    },
    /// A [`Canvas::draw_rect`] call.
    Rect {
        /// Shape bounds.
        rect: PxRect,
        /// Fill color.
        fill: Color,
        /// Optional outline.
        stroke: Option<Stroke>,
        /// Anti-aliasing state in force when the call was made.
        antialiased: bool,
    },
}

impl DrawCommand {
    /// The bounds of the drawn shape.
    pub fn rect(&self) -> PxRect {
        match self {
            DrawCommand::RoundedRect { rect, .. } | DrawCommand::Rect { rect, .. } => *rect,
        }
    }

    /// The fill color of the drawn shape.
    pub fn fill(&self) -> Color {
        match self {
            DrawCommand::RoundedRect { fill, .. } | DrawCommand::Rect { fill, .. } => *fill,
        }
    }

    /// Whether the shape was drawn anti-aliased.
    pub fn antialiased(&self) -> bool {
        match self {
            DrawCommand::RoundedRect { antialiased, .. } | DrawCommand::Rect { antialiased, .. } => {
                *antialiased
            }
        }
    }
}

/// A [`Canvas`] that records every call.
#[derive(Debug, Default, Clone)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
    antialiasing: bool,
}

impl RecordingCanvas {
    /// Creates an empty recorder with anti-aliasing off.
    pub fn new() -> Self {
        Self::default()
    }

    /// The commands recorded so far, in call order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of recorded commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Drops the recorded commands. The anti-aliasing state is kept.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Takes the recorded commands, leaving the recorder empty.
    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }
}

impl Canvas for RecordingCanvas {
    fn set_antialiasing(&mut self, enabled: bool) {
        self.antialiasing = enabled;
    }

    fn draw_rounded_rect(&mut self, rect: PxRect, radius: f32, fill: Color, stroke: Option<Stroke>) {
        self.commands.push(DrawCommand::RoundedRect {
            rect,
            radius,
            fill,
            stroke,
            antialiased: self.antialiasing,
        });
    }

    fn draw_rect(&mut self, rect: PxRect, fill: Color, stroke: Option<Stroke>) {
        self.commands.push(DrawCommand::Rect {
            rect,
            fill,
            stroke,
            antialiased: self.antialiasing,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_antialiasing_state_per_call() {
        let mut canvas = RecordingCanvas::new();
        canvas.draw_rect(PxRect::new(0.0, 0.0, 1.0, 1.0), Color::BLACK, None);
        canvas.set_antialiasing(true);
        canvas.draw_rounded_rect(
            PxRect::new(0.0, 0.0, 2.0, 2.0),
            1.0,
            Color::WHITE,
            Some(Stroke::new(Color::BLACK, 0.5)),
        );

        assert_eq!(canvas.len(), 2);
        assert!(!canvas.commands()[0].antialiased());
        assert!(canvas.commands()[1].antialiased());
        assert_eq!(canvas.commands()[1].fill(), Color::WHITE);
    }

    #[test]
    fn take_empties_the_recorder() {
        let mut canvas = RecordingCanvas::new();
        canvas.draw_rect(PxRect::ZERO, Color::BLACK, None);
        let commands = canvas.take();
        assert_eq!(commands.len(), 1);
        assert!(canvas.is_empty());
    }
}
