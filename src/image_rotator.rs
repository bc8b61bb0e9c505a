// SPDX-License-Identifier: MPL-2.0
//! Image rotator: the single source of truth for which image is displayed.
//!
//! The rotator owns the [`ImageList`] of the current directory and a
//! [`DisplaySurface`] it refreshes whenever the selection changes. Keyboard
//! handlers and the marker navigation controller both drive it through
//! [`ImageRotator::show_next`] and [`ImageRotator::show_previous`].

use crate::directory_scanner::ImageList;
use crate::error::Result;
use std::path::Path;

/// Size of the drawable area in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SurfaceSize {
    pub width: f32,
    pub height: f32,
}

impl SurfaceSize {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// A surface with no visible area, e.g. a minimized window.
    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}

/// Render target the rotator presents images on.
pub trait DisplaySurface {
    /// Decodes and presents the image at `path`.
    fn set_image(&mut self, path: &Path) -> Result<()>;

    /// Switches to the "no images loaded" state.
    fn clear_image(&mut self);

    /// Requests a redraw.
    fn invalidate(&mut self);

    /// Current size of the drawable area.
    fn size(&self) -> SurfaceSize;
}

/// Owns the image set of one directory and the surface showing it.
#[derive(Debug)]
pub struct ImageRotator<S> {
    images: ImageList,
    surface: S,
}

impl<S: DisplaySurface> ImageRotator<S> {
    pub fn new(surface: S) -> Self {
        Self {
            images: ImageList::new(),
            surface,
        }
    }

    /// Rebuilds the image set from `directory` and shows the first image.
    ///
    /// Returns the number of images found. On [`Error::InvalidPath`] the
    /// rotator is left empty and the surface shows the "no images" state.
    ///
    /// [`Error::InvalidPath`]: crate::error::Error::InvalidPath
    pub fn load(&mut self, directory: &Path) -> Result<usize> {
        self.rescan(directory)?;
        self.show();
        Ok(self.images.len())
    }

    /// Loads `directory`, then selects `file` within it before refreshing.
    pub fn load_and_select(&mut self, directory: &Path, file: &Path) -> Result<usize> {
        self.rescan(directory)?;
        if let Some(index) = self.images.position_of_file_name(file) {
            self.images.set_current_index(index);
        }
        self.show();
        Ok(self.images.len())
    }

    fn rescan(&mut self, directory: &Path) -> Result<()> {
        match ImageList::scan_directory(directory) {
            Ok(images) => {
                log::info!(
                    "Loaded {} image(s) from {}",
                    images.len(),
                    directory.display()
                );
                self.images = images;
                Ok(())
            }
            Err(err) => {
                log::warn!("Cannot load {}: {}", directory.display(), err);
                self.images = ImageList::new();
                self.surface.clear_image();
                self.surface.invalidate();
                Err(err)
            }
        }
    }

    /// Selects the image whose file name matches `path`.
    ///
    /// A file name not present in the current set leaves everything unchanged.
    pub fn find_by_filename(&mut self, path: &Path) {
        match self.images.position_of_file_name(path) {
            Some(index) => {
                self.images.set_current_index(index);
                self.show();
            }
            None => log::debug!("{} is not in the current image set", path.display()),
        }
    }

    /// Advances to the next image, wrapping around after the last one.
    pub fn show_next(&mut self) {
        if self.images.len() < 2 {
            return;
        }
        if let Some(index) = self.images.next_index() {
            self.images.set_current_index(index);
            self.show();
        }
    }

    /// Goes back to the previous image, wrapping around before the first one.
    pub fn show_previous(&mut self) {
        if self.images.len() < 2 {
            return;
        }
        if let Some(index) = self.images.previous_index() {
            self.images.set_current_index(index);
            self.show();
        }
    }

    /// Presents the current image again, or the empty state if there is none.
    pub fn show(&mut self) {
        match self.images.current() {
            Some(path) => {
                if let Err(err) = self.surface.set_image(path) {
                    log::warn!("Cannot display {}: {}", path.display(), err);
                    self.surface.clear_image();
                }
            }
            None => self.surface.clear_image(),
        }
        self.surface.invalidate();
    }

    pub fn current_index(&self) -> Option<usize> {
        self.images.current_index()
    }

    pub fn current_path(&self) -> Option<&Path> {
        self.images.current()
    }

    pub fn directory(&self) -> Option<&Path> {
        self.images.directory()
    }

    pub fn images(&self) -> &ImageList {
        &self.images
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}
