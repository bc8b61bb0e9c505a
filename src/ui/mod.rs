// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! - [`surface`] - Display surface the image rotator draws on
//! - [`cursor_overlay`] - Marker cursor drawn over the image
//! - [`toolbar`] - Folder, navigation and rebind buttons
//! - [`status_bar`] - Camera, marker and cursor readouts
//! - [`empty_state`] - Placeholder when no image is displayed
//! - [`design_tokens`] - Colors, spacing and sizes

pub mod cursor_overlay;
pub mod design_tokens;
pub mod empty_state;
pub mod status_bar;
pub mod surface;
pub mod toolbar;
