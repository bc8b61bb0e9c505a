// SPDX-License-Identifier: MPL-2.0
//! Display surface backing the image area of the viewer window.

use crate::error::Result;
use crate::image_rotator::{DisplaySurface, SurfaceSize};
use crate::media::{load_image, ImageData};
use crate::ui::design_tokens::sizing;
use iced::Size;
use std::path::Path;

/// Holds the decoded image currently on screen.
#[derive(Debug, Default)]
pub struct ViewerSurface {
    image: Option<ImageData>,
    size: SurfaceSize,
    redraw_requests: u64,
}

impl ViewerSurface {
    pub fn new(size: SurfaceSize) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    /// Sets the surface size from the window's inner size.
    pub fn resize_to_window(&mut self, window: Size) {
        self.size = surface_size_for_window(window);
    }

    pub fn image(&self) -> Option<&ImageData> {
        self.image.as_ref()
    }

    pub fn redraw_requests(&self) -> u64 {
        self.redraw_requests
    }
}

impl DisplaySurface for ViewerSurface {
    fn set_image(&mut self, path: &Path) -> Result<()> {
        let data = load_image(path)?;
        log::debug!(
            "Displaying {} ({}x{})",
            path.display(),
            data.width,
            data.height
        );
        self.image = Some(data);
        Ok(())
    }

    fn clear_image(&mut self) {
        self.image = None;
    }

    fn invalidate(&mut self) {
        self.redraw_requests += 1;
    }

    fn size(&self) -> SurfaceSize {
        self.size
    }
}

/// Image area left once the toolbar and status bar are laid out.
pub fn surface_size_for_window(window: Size) -> SurfaceSize {
    let chrome = sizing::TOOLBAR_HEIGHT + sizing::STATUS_BAR_HEIGHT;
    SurfaceSize::new(window.width.max(0.0), (window.height - chrome).max(0.0))
}
