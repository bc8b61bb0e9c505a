// SPDX-License-Identifier: MPL-2.0
//! Empty state shown in the image area when no image is displayed.

use crate::ui::design_tokens::{palette, spacing, typography};
use iced::widget::{Column, Container, Text};
use iced::{alignment, Color, Element, Length};

/// Renders `title` with a hint about the ways to load images.
pub fn view<'a, Message: 'a>(title: &str) -> Element<'a, Message> {
    let title = Text::new(title.to_string())
        .size(typography::TITLE_LG)
        .color(palette::GRAY_400);

    let hint = Text::new("Open a folder or drop an image onto the window")
        .size(typography::CAPTION)
        .color(Color {
            a: 0.5,
            ..palette::GRAY_400
        });

    let content = Column::new()
        .spacing(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .push(title)
        .push(hint);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}
