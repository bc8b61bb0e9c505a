// SPDX-License-Identifier: MPL-2.0
//! Status bar summarizing tracking state below the image area.

use crate::marker_navigation::CursorReadout;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use iced::widget::{Container, Row, Space, Text};
use iced::{alignment, Element, Length};

/// Data rendered by the status bar.
#[derive(Debug, Clone, Copy, Default)]
pub struct StatusContext<'a> {
    /// Name of the camera in use.
    pub camera: Option<&'a str>,
    /// Whether marker navigation is attached.
    pub marker_ready: bool,
    pub readout: Option<CursorReadout>,
    pub fps: Option<f64>,
    /// Latest user-facing warning, if any.
    pub message: Option<&'a str>,
}

pub fn camera_text(camera: Option<&str>) -> String {
    match camera {
        Some(name) => format!("Camera: {name}."),
        None => "No Camera loaded.".to_string(),
    }
}

pub fn marker_text(marker_ready: bool) -> &'static str {
    if marker_ready {
        "Marker ready."
    } else {
        "No Markers set."
    }
}

pub fn cursor_text(readout: Option<CursorReadout>) -> String {
    match readout {
        Some(r) => format!("Cursor X: {} Y: {}", r.point.x, r.point.y),
        None => "Cursor X: - Y: -".to_string(),
    }
}

pub fn zone_text(readout: Option<CursorReadout>) -> String {
    match readout {
        Some(r) => format!("Zone: {}", r.zone),
        None => "Zone: -".to_string(),
    }
}

pub fn marker_position_text(readout: Option<CursorReadout>) -> String {
    match readout {
        Some(r) => format!("Marker X: {:.0} Y: {:.0}", r.marker_x, r.marker_y),
        None => "Marker X: - Y: -".to_string(),
    }
}

pub fn fps_text(fps: Option<f64>) -> String {
    match fps {
        Some(fps) => format!("FPS: {fps:.1}"),
        None => "FPS: -".to_string(),
    }
}

fn item<'a>(content: String) -> Text<'a> {
    Text::new(content).size(typography::CAPTION)
}

pub fn view<'a, Message: 'a>(ctx: StatusContext<'_>) -> Element<'a, Message> {
    let marker_color = if ctx.marker_ready {
        palette::SUCCESS_500
    } else {
        palette::GRAY_400
    };

    let mut row = Row::new()
        .spacing(spacing::MD)
        .align_y(alignment::Vertical::Center)
        .push(item(camera_text(ctx.camera)))
        .push(item(marker_text(ctx.marker_ready).to_string()).color(marker_color))
        .push(item(cursor_text(ctx.readout)))
        .push(item(zone_text(ctx.readout)))
        .push(item(marker_position_text(ctx.readout)))
        .push(item(fps_text(ctx.fps)))
        .push(Space::new().width(Length::Fill));

    if let Some(message) = ctx.message {
        row = row.push(item(message.to_string()).color(palette::WARNING_500));
    }

    Container::new(row)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::STATUS_BAR_HEIGHT))
        .padding([0.0, spacing::SM])
        .align_y(alignment::Vertical::Center)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::marker_navigation::{DisplayPoint, Zone};

    fn readout() -> CursorReadout {
        CursorReadout {
            point: DisplayPoint { x: 400, y: 300 },
            zone: Zone::Right,
            marker_x: 320.4,
            marker_y: 239.6,
        }
    }

    #[test]
    fn camera_and_marker_texts() {
        assert_eq!(camera_text(Some("USB Camera")), "Camera: USB Camera.");
        assert_eq!(camera_text(None), "No Camera loaded.");
        assert_eq!(marker_text(true), "Marker ready.");
        assert_eq!(marker_text(false), "No Markers set.");
    }

    #[test]
    fn readout_texts() {
        assert_eq!(cursor_text(Some(readout())), "Cursor X: 400 Y: 300");
        assert_eq!(zone_text(Some(readout())), "Zone: Right");
        assert_eq!(marker_position_text(Some(readout())), "Marker X: 320 Y: 240");
    }

    #[test]
    fn hidden_cursor_texts() {
        assert_eq!(cursor_text(None), "Cursor X: - Y: -");
        assert_eq!(zone_text(None), "Zone: -");
        assert_eq!(fps_text(None), "FPS: -");
        assert_eq!(fps_text(Some(29.97)), "FPS: 30.0");
    }
}
