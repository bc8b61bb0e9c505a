// SPDX-License-Identifier: MPL-2.0
//! Shared test helpers: float assertions and image fixtures.

pub use approx::{assert_abs_diff_eq, assert_relative_eq};

use image_rs::{Rgba, RgbaImage};
use std::fs;
use std::path::{Path, PathBuf};

/// Epsilon for f32 values that should be equal up to rounding.
pub const F32_EPSILON: f32 = 1e-6;

/// Writes a file with an image extension but undecodable content.
pub fn write_fake_image(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, b"fake image data").expect("failed to write test file");
    path
}

/// Writes a small solid red PNG.
pub fn write_png(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    RgbaImage::from_pixel(4, 4, Rgba([255, 0, 0, 255]))
        .save(&path)
        .expect("failed to write temporary png");
    path
}
