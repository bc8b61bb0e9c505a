// SPDX-License-Identifier: MPL-2.0
//! View composition for the viewer window.

use super::{App, Message};
use crate::ui::cursor_overlay::CursorOverlay;
use crate::ui::design_tokens::palette;
use crate::ui::{empty_state, status_bar, toolbar};
use iced::widget::image::Image;
use iced::widget::{container, Column, Container, Stack};
use iced::{Background, ContentFit, Element, Length};

pub(super) fn view(app: &App) -> Element<'_, Message> {
    let toolbar = toolbar::view(toolbar::ViewContext {
        can_navigate: app.rotator.len() > 1,
        picking_folder: app.picking_folder,
    })
    .map(Message::Toolbar);

    let picture: Element<'_, Message> = match app.rotator.surface().image() {
        Some(image) => Container::new(
            Image::new(image.handle.clone())
                .content_fit(ContentFit::ScaleDown)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .into(),
        None => empty_state::view(super::NO_IMAGES_LOADED),
    };

    let cursor = if app.controller.is_attached() {
        app.controller.readout().map(|readout| readout.point)
    } else {
        None
    };
    let overlay = CursorOverlay::new(cursor, app.overlay_radius, app.overlay_rgb);

    let image_area = Container::new(Stack::new().push(picture).push(overlay.into_element()))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(|_theme| container::Style {
            background: Some(Background::Color(palette::GRAY_900)),
            ..container::Style::default()
        });

    let session = app.tracker.session();
    let camera = session.camera();
    let status = status_bar::view(status_bar::StatusContext {
        camera: camera.as_ref().map(|c| c.name.as_str()),
        marker_ready: app.controller.is_attached(),
        readout: app.controller.readout(),
        fps: session.capture_state().fps(),
        message: app.status.as_deref().or(app.tracking_status.as_deref()),
    });

    Column::new()
        .push(toolbar)
        .push(image_area)
        .push(status)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
