// SPDX-License-Identifier: MPL-2.0
//! `touchless_viewer` is an image viewer navigated by a tracked marker.
//!
//! Moving the marker into the left or right band of the image area steps to
//! the previous or next image of the current folder. The keyboard, the
//! toolbar and drag-and-drop keep working whatever the tracking state.
//!
//! - [`image_rotator`] owns the image set and the display surface
//! - [`marker_navigation`] turns marker samples into navigation commands
//! - [`tracking`] is the contract with the camera-tracking collaborator
//! - [`app`] is the iced application wiring them together

pub mod app;
pub mod config;
pub mod directory_scanner;
pub mod error;
pub mod image_rotator;
pub mod marker_navigation;
pub mod media;
pub mod tracking;
pub mod ui;

#[cfg(test)]
mod test_utils;
