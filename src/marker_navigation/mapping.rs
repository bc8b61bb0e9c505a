// SPDX-License-Identifier: MPL-2.0
//! Capture-space to display-space coordinate mapping.

use crate::image_rotator::SurfaceSize;
use crate::tracking::MarkerSample;

/// Cursor position in display pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DisplayPoint {
    pub x: i32,
    pub y: i32,
}

/// Scales the marker position from capture resolution to the display surface.
///
/// Coordinates are truncated toward zero. Returns `None` when the capture
/// resolution has a zero side.
pub fn map_to_display(sample: &MarkerSample, surface: SurfaceSize) -> Option<DisplayPoint> {
    if !sample.capture.is_known() {
        return None;
    }
    let x = sample.x / sample.capture.width as f32 * surface.width;
    let y = sample.y / sample.capture.height as f32 * surface.height;
    Some(DisplayPoint {
        x: x as i32,
        y: y as i32,
    })
}
