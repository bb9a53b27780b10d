use iced::widget::{Space, container, mouse_area};
use iced::{Element, Length, mouse};

use crate::shared::ui::style::with_alpha;
use crate::shared::ui::theme::ThemeProps;

const HANDLE_WIDTH: f32 = 4.0;
const HANDLE_ACTIVE_ALPHA: f32 = 0.6;

/// Panel edge the handle is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ResizeEdge {
    /// Handle on the right edge: moving right widens the panel.
    Right,
    /// Handle on the left edge: moving left widens the panel.
    Left,
}

/// Snapshot taken when a resize drag starts.
///
/// The pointer anchor is unknown at press time and is taken from the first
/// tracked pointer position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct DragGesture {
    edge: ResizeEdge,
    start_x: Option<f32>,
    start_width: f32,
}

impl DragGesture {
    pub(crate) fn new(edge: ResizeEdge, start_width: f32) -> Self {
        Self {
            edge,
            start_x: None,
            start_width,
        }
    }

    /// Unclamped panel width for the pointer at `x`.
    pub(crate) fn width_at(&self, x: f32) -> f32 {
        let Some(start_x) = self.start_x else {
            return self.start_width;
        };
        match self.edge {
            ResizeEdge::Right => self.start_width + (x - start_x),
            ResizeEdge::Left => self.start_width + (start_x - x),
        }
    }

    /// Anchor on the first call, then return the width for `x`.
    pub(crate) fn track(&mut self, x: f32) -> f32 {
        self.start_x.get_or_insert(x);
        self.width_at(x)
    }
}

/// Events emitted by a resize handle.
#[derive(Debug, Clone)]
pub(crate) enum ResizeHandleEvent {
    Pressed,
}

/// Props for rendering a resize handle.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ResizeHandleProps<'a> {
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) is_dragging: bool,
}

/// Render a thin vertical strip that starts a horizontal resize drag.
pub(crate) fn view<'a>(
    props: ResizeHandleProps<'a>,
) -> Element<'a, ResizeHandleEvent> {
    let palette = props.theme.theme.iced_palette();
    let background = if props.is_dragging {
        with_alpha(palette.primary, HANDLE_ACTIVE_ALPHA)
    } else {
        iced::Color::TRANSPARENT
    };

    let strip = container(Space::new())
        .width(Length::Fixed(HANDLE_WIDTH))
        .height(Length::Fill)
        .style(move |_| container::Style {
            background: Some(background.into()),
            ..Default::default()
        });

    mouse_area(strip)
        .on_press(ResizeHandleEvent::Pressed)
        .interaction(mouse::Interaction::ResizingHorizontally)
        .into()
}

#[cfg(test)]
mod tests {
    use super::{DragGesture, ResizeEdge};

    #[test]
    fn given_right_edge_drag_when_pointer_moves_right_then_width_grows() {
        let mut gesture = DragGesture::new(ResizeEdge::Right, 240.0);
        assert_eq!(gesture.track(240.0), 240.0);
        assert_eq!(gesture.track(300.0), 300.0);
        assert_eq!(gesture.track(200.0), 200.0);
    }

    #[test]
    fn given_left_edge_drag_when_pointer_moves_left_then_width_grows() {
        let mut gesture = DragGesture::new(ResizeEdge::Left, 320.0);
        assert_eq!(gesture.track(900.0), 320.0);
        assert_eq!(gesture.track(850.0), 370.0);
        assert_eq!(gesture.track(1000.0), 220.0);
    }

    #[test]
    fn given_unanchored_gesture_when_measured_then_start_width_is_kept() {
        let gesture = DragGesture::new(ResizeEdge::Right, 260.0);
        assert_eq!(gesture.width_at(500.0), 260.0);
    }
}
