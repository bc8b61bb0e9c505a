// SPDX-License-Identifier: MPL-2.0
//! Error taxonomy shared by the rotator, the tracking layer and the UI.
//!
//! Every variant degrades to a visible status message; see
//! [`Error::status_text`].

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Directory or file does not exist.
    #[error("Invalid path: {}", .0.display())]
    InvalidPath(PathBuf),

    /// Directory holds no file with an allowed extension.
    #[error("No matching images in {}", .0.display())]
    NoMatchingImages(PathBuf),

    /// No camera is available from the tracking session.
    #[error("Tracking unavailable: no camera detected")]
    TrackingUnavailable,

    /// More than one marker is active, so the position is ambiguous.
    #[error("Ambiguous marker: {0} markers active")]
    AmbiguousMarker(usize),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Image data could not be decoded.
    #[error("Image error: {0}")]
    Image(String),

    #[error("Config error: {0}")]
    Config(String),

    /// External tracker could not be started or spoke an unknown protocol.
    #[error("Tracker error: {0}")]
    Tracker(String),

    /// Drag-and-drop payload was refused.
    #[error("Drop rejected: {0}")]
    DropRejected(String),
}

impl Error {
    /// Short sentence shown in the status bar.
    pub fn status_text(&self) -> String {
        match self {
            Error::InvalidPath(path) => format!("Path not found: {}", path.display()),
            Error::NoMatchingImages(_) => "No images loaded".to_string(),
            Error::TrackingUnavailable => {
                "No cameras found. Touchless functionality is disabled.".to_string()
            }
            Error::AmbiguousMarker(count) => {
                format!("{count} markers set. Remove all but one to enable the cursor.")
            }
            Error::Io(err) => format!("I/O error: {err}"),
            Error::Image(msg) => format!("Cannot display image: {msg}"),
            Error::Config(msg) => format!("Settings ignored: {msg}"),
            Error::Tracker(msg) => format!("Tracker failed: {msg}"),
            Error::DropRejected(msg) => msg.clone(),
        }
    }

    /// Whether this error leaves the viewer without any displayable image.
    pub fn is_no_images(&self) -> bool {
        matches!(
            self,
            Error::InvalidPath(_) | Error::NoMatchingImages(_) | Error::Image(_)
        )
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Image(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Tracker(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
