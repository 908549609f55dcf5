use crate::{Canvas, Color, PxRect, Stroke};

use super::layout::{HANDLE_CORNER_RADIUS, SliderLayout, TRACK_CORNER_RADIUS};

const TRACK_STROKE: Stroke = Stroke::new(Color::GRAY, 0.8);
const HANDLE_STROKE: Stroke = Stroke::new(Color::DARK_GRAY, 0.5);

pub(super) fn render_range_slider(
    canvas: &mut dyn Canvas,
    layout: &SliderLayout,
    lower_value: i32,
    upper_value: i32,
    background_color: Color,
) {
    render_track(canvas, layout.track_rect());
    render_active_segment(
        canvas,
        layout.active_rect(lower_value, upper_value),
        background_color,
    );
    render_handle(canvas, layout.lower_handle_rect(lower_value));
    render_handle(canvas, layout.upper_handle_rect(upper_value));
}

fn render_track(canvas: &mut dyn Canvas, rect: PxRect) {
    if rect.is_empty() {
        return;
    }
    canvas.set_antialiasing(false);
    canvas.draw_rounded_rect(rect, TRACK_CORNER_RADIUS, Color::TRACK_FILL, Some(TRACK_STROKE));
}

fn render_active_segment(canvas: &mut dyn Canvas, rect: PxRect, color: Color) {
    if rect.is_empty() {
        return;
    }
    // Crisp edges: the seams next to the handles are only half a pixel wide.
    canvas.set_antialiasing(false);
    canvas.draw_rect(rect, color, Some(HANDLE_STROKE));
}

fn render_handle(canvas: &mut dyn Canvas, rect: PxRect) {
    if rect.is_empty() {
        return;
    }
    canvas.set_antialiasing(true);
    canvas.draw_rounded_rect(
        rect,
        HANDLE_CORNER_RADIUS,
        Color::HANDLE_FILL,
        Some(HANDLE_STROKE),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DrawCommand, Orientation, Px, PxSize, RecordingCanvas};

    fn paint(size: PxSize, lower: i32, upper: i32) -> RecordingCanvas {
        let layout = SliderLayout::new(size, Orientation::Horizontal, 0, 100);
        let mut canvas = RecordingCanvas::new();
        render_range_slider(&mut canvas, &layout, lower, upper, Color::DODGER_BLUE);
        canvas
    }

    #[test]
    fn draws_track_active_bar_then_handles() {
        let canvas = paint(PxSize::new(Px(124), Px(21)), 0, 100);
        let commands = canvas.commands();
        assert_eq!(commands.len(), 4);

        assert!(matches!(
            commands[0],
            DrawCommand::RoundedRect { radius, fill, antialiased: false, .. }
                if radius == TRACK_CORNER_RADIUS && fill == Color::TRACK_FILL
        ));
        assert!(matches!(
            commands[1],
            DrawCommand::Rect { fill, antialiased: false, .. } if fill == Color::DODGER_BLUE
        ));
        for handle in &commands[2..] {
            assert!(matches!(
                handle,
                DrawCommand::RoundedRect { radius, fill, antialiased: true, stroke: Some(stroke), .. }
                    if *radius == HANDLE_CORNER_RADIUS
                        && *fill == Color::HANDLE_FILL
                        && stroke.color == Color::DARK_GRAY
            ));
        }
    }

    #[test]
    fn collapsed_active_bar_is_skipped() {
        let canvas = paint(PxSize::new(Px(124), Px(21)), 30, 30);
        assert_eq!(canvas.len(), 3);
        assert!(
            canvas
                .commands()
                .iter()
                .all(|command| matches!(command, DrawCommand::RoundedRect { .. }))
        );
    }

    #[test]
    fn zero_size_paints_nothing() {
        let canvas = paint(PxSize::ZERO, 0, 100);
        assert!(canvas.is_empty());
    }
}
