// SPDX-License-Identifier: MPL-2.0
//! Loading media for display.

pub mod image;

pub use image::{load_image, ImageData};
