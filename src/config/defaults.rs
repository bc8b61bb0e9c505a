// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Navigation**: Activation band width for marker-driven paging
//! - **Overlay**: Cursor circle drawn at the mapped marker position
//! - **Tracking**: Sample queue sizing and UI polling cadence

// ==========================================================================
// Navigation Defaults
// ==========================================================================

/// Fraction of the display width, measured from each edge, that forms the
/// Left and Right zones.
pub const DEFAULT_ACTIVATION_BAND: f32 = 0.2;

/// Smallest accepted activation band.
pub const MIN_ACTIVATION_BAND: f32 = 0.01;

/// Largest accepted activation band. Anything wider makes the bands overlap.
pub const MAX_ACTIVATION_BAND: f32 = 0.5;

// ==========================================================================
// Overlay Defaults
// ==========================================================================

/// Radius of the cursor circle in logical pixels.
pub const DEFAULT_CURSOR_RADIUS: f32 = 7.5;

pub const MIN_CURSOR_RADIUS: f32 = 1.0;

pub const MAX_CURSOR_RADIUS: f32 = 64.0;

/// Cursor accent color as `#RRGGBB`.
pub const DEFAULT_CURSOR_COLOR: &str = "#FF0000";

// ==========================================================================
// Tracking Defaults
// ==========================================================================

/// Pending marker samples buffered between the capture thread and the UI.
pub const DEFAULT_QUEUE_CAPACITY: usize = 64;

pub const MIN_QUEUE_CAPACITY: usize = 1;

pub const MAX_QUEUE_CAPACITY: usize = 4096;

/// Interval at which the UI drains the sample queue.
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 16;

pub const MIN_POLL_INTERVAL_MS: u64 = 1;

pub const MAX_POLL_INTERVAL_MS: u64 = 1000;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_ACTIVATION_BAND > 0.0);
    assert!(MAX_ACTIVATION_BAND <= 0.5);
    assert!(DEFAULT_ACTIVATION_BAND >= MIN_ACTIVATION_BAND);
    assert!(DEFAULT_ACTIVATION_BAND <= MAX_ACTIVATION_BAND);

    assert!(MIN_CURSOR_RADIUS > 0.0);
    assert!(DEFAULT_CURSOR_RADIUS >= MIN_CURSOR_RADIUS);
    assert!(DEFAULT_CURSOR_RADIUS <= MAX_CURSOR_RADIUS);

    assert!(MIN_QUEUE_CAPACITY > 0);
    assert!(DEFAULT_QUEUE_CAPACITY >= MIN_QUEUE_CAPACITY);
    assert!(DEFAULT_QUEUE_CAPACITY <= MAX_QUEUE_CAPACITY);

    assert!(MIN_POLL_INTERVAL_MS > 0);
    assert!(DEFAULT_POLL_INTERVAL_MS >= MIN_POLL_INTERVAL_MS);
    assert!(DEFAULT_POLL_INTERVAL_MS <= MAX_POLL_INTERVAL_MS);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn activation_band_defaults_are_valid() {
        assert_eq!(DEFAULT_ACTIVATION_BAND, 0.2);
        assert!(DEFAULT_ACTIVATION_BAND >= MIN_ACTIVATION_BAND);
        assert!(DEFAULT_ACTIVATION_BAND <= MAX_ACTIVATION_BAND);
    }

    #[test]
    fn cursor_color_default_is_hex() {
        assert!(DEFAULT_CURSOR_COLOR.starts_with('#'));
        assert_eq!(DEFAULT_CURSOR_COLOR.len(), 7);
    }

    #[test]
    fn tracking_defaults_are_valid() {
        assert_eq!(DEFAULT_QUEUE_CAPACITY, 64);
        assert_eq!(DEFAULT_POLL_INTERVAL_MS, 16);
    }
}
