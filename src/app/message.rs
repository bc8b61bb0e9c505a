// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::marker_navigation::NavigationCommand;
use crate::ui::toolbar;
use iced::{Point, Size};
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Toolbar(toolbar::Message),
    /// Keyboard navigation.
    Navigate(NavigationCommand),
    /// A file was dropped on the window.
    FileDropped(PathBuf),
    /// All files of the current drop have been received.
    DropsSettled,
    /// Result from the folder dialog.
    FolderPicked(Option<PathBuf>),
    /// Periodic tick draining marker samples and re-evaluating binding.
    Tick(Instant),
    WindowResized(Size),
    PointerMoved(Point),
    PointerLeft,
}

/// Runtime flags passed in from the command line.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional image path to preload on startup.
    pub file_path: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `TOUCHLESS_VIEWER_CONFIG_DIR`.
    pub config_dir: Option<String>,
    /// Tracker command line, overriding `[tracking] command`.
    pub tracker_command: Option<Vec<String>>,
    /// Emulate the marker with the mouse pointer.
    pub pointer_marker: bool,
    /// Activation band override.
    pub activation_band: Option<f32>,
}
