// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application update loop.

use super::{App, Message};
use crate::directory_scanner::is_allowed_extension;
use crate::error::{Error, Result};
use crate::image_rotator::DisplaySurface;
use crate::ui::design_tokens::sizing;
use crate::ui::toolbar;
use iced::{Point, Size, Task};
use std::path::{Path, PathBuf};

pub(super) fn handle_toolbar(app: &mut App, message: toolbar::Message) -> Task<Message> {
    match message {
        toolbar::Message::OpenFolder => open_folder_dialog(app),
        toolbar::Message::Previous => {
            app.rotator.show_previous();
            Task::none()
        }
        toolbar::Message::Next => {
            app.rotator.show_next();
            Task::none()
        }
        toolbar::Message::Rebind => {
            rebind(app);
            Task::none()
        }
    }
}

fn open_folder_dialog(app: &mut App) -> Task<Message> {
    if app.picking_folder {
        return Task::none();
    }
    app.picking_folder = true;

    let start_dir = app
        .rotator
        .directory()
        .map(Path::to_path_buf)
        .or_else(|| std::env::current_dir().ok());

    Task::perform(
        async move {
            let mut dialog = rfd::AsyncFileDialog::new().set_title("Open image folder");
            if let Some(dir) = start_dir {
                if dir.exists() {
                    dialog = dialog.set_directory(&dir);
                }
            }
            dialog.pick_folder().await.map(|h| h.path().to_path_buf())
        },
        Message::FolderPicked,
    )
}

/// Handles the result of the folder dialog.
pub(super) fn handle_folder_picked(app: &mut App, directory: Option<PathBuf>) -> Task<Message> {
    app.picking_folder = false;
    let Some(directory) = directory else {
        return Task::none();
    };
    let result = app.rotator.load(&directory);
    report_load(app, &directory, result);
    Task::none()
}

/// Buffers a dropped path until the whole drop has been received.
pub(super) fn handle_file_dropped(app: &mut App, path: PathBuf) -> Task<Message> {
    let first = app.pending_drops.is_empty();
    app.pending_drops.push(path);
    if first {
        Task::done(Message::DropsSettled)
    } else {
        Task::none()
    }
}

pub(super) fn handle_drops_settled(app: &mut App) -> Task<Message> {
    let paths = std::mem::take(&mut app.pending_drops);
    match accept_drop(&paths) {
        Ok((directory, file)) => {
            log::info!("Dropped {}", file.display());
            let result = app.rotator.load_and_select(&directory, &file);
            report_load(app, &directory, result);
        }
        Err(err) => {
            log::warn!("{err}");
            app.status = Some(err.status_text());
        }
    }
    Task::none()
}

/// Validates a drop and returns the directory to load and the file to select.
///
/// Exactly one existing file with an allowed extension is accepted.
pub fn accept_drop(paths: &[PathBuf]) -> Result<(PathBuf, PathBuf)> {
    let [path] = paths else {
        return Err(Error::DropRejected(format!(
            "Drop a single image file ({} items dropped)",
            paths.len()
        )));
    };
    if path.is_dir() {
        return Err(Error::DropRejected(
            "Folders cannot be dropped, use Open folder… instead".to_string(),
        ));
    }
    if !is_allowed_extension(path) {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        return Err(Error::DropRejected(format!("Unsupported file type: {name}")));
    }
    if !path.is_file() {
        return Err(Error::InvalidPath(path.clone()));
    }
    let directory = path
        .parent()
        .ok_or_else(|| Error::InvalidPath(path.clone()))?;
    Ok((directory.to_path_buf(), path.clone()))
}

/// Turns the outcome of a directory load into status text.
pub(super) fn report_load(app: &mut App, directory: &Path, result: Result<usize>) {
    app.status = match result {
        Ok(0) => Some(Error::NoMatchingImages(directory.to_path_buf()).status_text()),
        Ok(_) => None,
        Err(err) => Some(err.status_text()),
    };
}

/// Re-evaluates whether marker navigation should be attached.
///
/// A failure reported by the tracker takes precedence over the binding
/// outcome.
pub(super) fn sync_binding(app: &mut App) {
    let result = app.controller.sync_binding(app.tracker.session_mut());
    let tracker_error = app
        .tracker
        .session()
        .last_error()
        .map(|message| Error::Tracker(message).status_text());
    let message = match result {
        Ok(_) => tracker_error,
        Err(err) => tracker_error.or_else(|| Some(err.status_text())),
    };
    if message != app.tracking_status {
        if let Some(text) = &message {
            log::warn!("{text}");
        }
        app.tracking_status = message;
    }
}

/// Drops the current binding and binds again from scratch.
pub(super) fn rebind(app: &mut App) {
    log::info!("Rebinding tracking");
    app.controller.detach(app.tracker.session_mut());
    sync_binding(app);
}

pub(super) fn handle_tick(app: &mut App) -> Task<Message> {
    sync_binding(app);
    app.controller.pump(&mut app.rotator);
    Task::none()
}

pub(super) fn handle_window_resized(app: &mut App, size: Size) -> Task<Message> {
    app.rotator.surface_mut().resize_to_window(size);
    let surface = app.rotator.surface().size();
    if let Some(pointer) = app.tracker.pointer_mut() {
        pointer.set_capture(super::tracker::capture_for_surface(surface));
    }
    app.rotator.surface_mut().invalidate();
    Task::none()
}

/// Feeds the pointer position to pointer emulation, in image-area coordinates.
pub(super) fn handle_pointer_moved(app: &mut App, position: Point) -> Task<Message> {
    let surface = app.rotator.surface().size();
    let Some(pointer) = app.tracker.pointer_mut() else {
        return Task::none();
    };
    let x = position.x;
    let y = position.y - sizing::TOOLBAR_HEIGHT;
    if (0.0..=surface.width).contains(&x) && (0.0..=surface.height).contains(&y) {
        pointer.feed(x, y);
    } else {
        pointer.feed_absent();
    }
    Task::none()
}

pub(super) fn handle_pointer_left(app: &mut App) -> Task<Message> {
    if let Some(pointer) = app.tracker.pointer_mut() {
        pointer.feed_absent();
    }
    Task::none()
}
