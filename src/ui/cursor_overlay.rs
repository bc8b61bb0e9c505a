// SPDX-License-Identifier: MPL-2.0
//! Canvas overlay drawing the marker cursor on top of the image.

use crate::marker_navigation::DisplayPoint;
use crate::ui::design_tokens::sizing;
use iced::widget::canvas::{self, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Element, Length, Point, Rectangle, Renderer, Theme};

/// Circle centered on the mapped marker position.
#[derive(Debug, Clone, Copy)]
pub struct CursorOverlay {
    position: Option<DisplayPoint>,
    radius: f32,
    color: Color,
}

impl CursorOverlay {
    /// Overlay for `position`; `None` draws nothing.
    #[must_use]
    pub fn new(position: Option<DisplayPoint>, radius: f32, rgb: [u8; 3]) -> Self {
        Self {
            position,
            radius,
            color: Color::from_rgb8(rgb[0], rgb[1], rgb[2]),
        }
    }

    /// Center of the circle in canvas coordinates.
    pub fn center(&self) -> Option<Point> {
        self.position.map(|p| Point::new(p.x as f32, p.y as f32))
    }

    pub fn into_element<'a, Message: 'a>(self) -> Element<'a, Message> {
        Canvas::new(self)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

impl<Message> canvas::Program<Message> for CursorOverlay {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let Some(center) = self.center() else {
            return Vec::new();
        };

        let mut frame = Frame::new(renderer, bounds.size());
        let circle = Path::circle(center, self.radius);
        frame.stroke(
            &circle,
            Stroke::default()
                .with_width(sizing::CURSOR_STROKE)
                .with_color(self.color),
        );
        vec![frame.into_geometry()]
    }
}
