// SPDX-License-Identifier: MPL-2.0
//! Toolbar above the image area.

use crate::ui::design_tokens::{sizing, spacing};
use iced::widget::{button, Container, Row, Text};
use iced::{alignment, Element, Length};

/// Contextual data needed to render the toolbar.
#[derive(Debug, Clone, Copy, Default)]
pub struct ViewContext {
    /// Whether there is more than one image to step through.
    pub can_navigate: bool,
    /// A folder dialog is already open.
    pub picking_folder: bool,
}

/// Messages emitted by the toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    OpenFolder,
    Previous,
    Next,
    Rebind,
}

pub fn view<'a>(ctx: ViewContext) -> Element<'a, Message> {
    let open = button(Text::new("Open folder…"))
        .on_press_maybe((!ctx.picking_folder).then_some(Message::OpenFolder));
    let previous =
        button(Text::new("Previous")).on_press_maybe(ctx.can_navigate.then_some(Message::Previous));
    let next = button(Text::new("Next")).on_press_maybe(ctx.can_navigate.then_some(Message::Next));
    let rebind = button(Text::new("Rebind tracking")).on_press(Message::Rebind);

    let row = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(open)
        .push(previous)
        .push(next)
        .push(rebind);

    Container::new(row)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::TOOLBAR_HEIGHT))
        .padding([0.0, spacing::SM])
        .align_y(alignment::Vertical::Center)
        .into()
}
