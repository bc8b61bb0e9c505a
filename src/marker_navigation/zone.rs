// SPDX-License-Identifier: MPL-2.0
//! Horizontal activation zones and their edge-triggered latches.

use crate::config::{DEFAULT_ACTIVATION_BAND, MAX_ACTIVATION_BAND, MIN_ACTIVATION_BAND};
use std::fmt;

/// Horizontal third of the display the cursor is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Zone {
    Left,
    #[default]
    Center,
    Right,
}

impl Zone {
    pub fn label(self) -> &'static str {
        match self {
            Zone::Left => "Left",
            Zone::Center => "Center",
            Zone::Right => "Right",
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Fraction of the display width that forms the Left and Right zones.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActivationBand(f32);

impl ActivationBand {
    /// Creates a band, clamping `fraction` to the supported range.
    ///
    /// Non-finite values fall back to the default band.
    pub fn new(fraction: f32) -> Self {
        if fraction.is_finite() {
            Self(fraction.clamp(MIN_ACTIVATION_BAND, MAX_ACTIVATION_BAND))
        } else {
            Self::default()
        }
    }

    pub fn fraction(self) -> f32 {
        self.0
    }
}

impl Default for ActivationBand {
    fn default() -> Self {
        Self(DEFAULT_ACTIVATION_BAND)
    }
}

/// Classifies a display x coordinate for a surface `width` pixels wide.
///
/// Left is `[0, f·w)`, Right is `[w·(1−f), w]`, everything else is Center.
/// Coordinates outside the surface fall into Center.
pub fn classify(display_x: i32, width: f32, band: ActivationBand) -> Zone {
    let x = display_x as f32;
    let f = band.fraction();
    if x >= 0.0 && x < f * width {
        Zone::Left
    } else if x >= width * (1.0 - f) && x <= width {
        Zone::Right
    } else {
        Zone::Center
    }
}

/// Navigation step emitted on entering a side zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationCommand {
    /// Show the next image.
    Advance,
    /// Show the previous image.
    Retreat,
}

/// Last zone and the latches that fire each side zone once per entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ZoneState {
    zone: Zone,
    left_active: bool,
    right_active: bool,
}

impl ZoneState {
    /// Records the cursor in `zone` and returns the command to run, if any.
    pub fn apply(&mut self, zone: Zone) -> Option<NavigationCommand> {
        self.zone = zone;
        match zone {
            Zone::Left => {
                self.right_active = false;
                if self.left_active {
                    None
                } else {
                    self.left_active = true;
                    Some(NavigationCommand::Retreat)
                }
            }
            Zone::Right => {
                self.left_active = false;
                if self.right_active {
                    None
                } else {
                    self.right_active = true;
                    Some(NavigationCommand::Advance)
                }
            }
            Zone::Center => {
                self.left_active = false;
                self.right_active = false;
                None
            }
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn zone(&self) -> Zone {
        self.zone
    }

    pub fn left_active(&self) -> bool {
        self.left_active
    }

    pub fn right_active(&self) -> bool {
        self.right_active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIDTH: f32 = 800.0;

    #[test]
    fn classify_default_band() {
        let band = ActivationBand::default();
        assert_eq!(classify(100, WIDTH, band), Zone::Left);
        assert_eq!(classify(400, WIDTH, band), Zone::Center);
        assert_eq!(classify(750, WIDTH, band), Zone::Right);
    }

    #[test]
    fn classify_band_boundaries() {
        let band = ActivationBand::default();
        assert_eq!(classify(0, WIDTH, band), Zone::Left);
        assert_eq!(classify(159, WIDTH, band), Zone::Left);
        assert_eq!(classify(160, WIDTH, band), Zone::Center);
        assert_eq!(classify(639, WIDTH, band), Zone::Center);
        assert_eq!(classify(640, WIDTH, band), Zone::Right);
        assert_eq!(classify(800, WIDTH, band), Zone::Right);
    }

    #[test]
    fn classify_outside_surface_is_center() {
        let band = ActivationBand::default();
        assert_eq!(classify(-1, WIDTH, band), Zone::Center);
        assert_eq!(classify(801, WIDTH, band), Zone::Center);
    }

    #[test]
    fn band_is_clamped() {
        assert_eq!(ActivationBand::new(0.9).fraction(), MAX_ACTIVATION_BAND);
        assert_eq!(ActivationBand::new(0.0).fraction(), MIN_ACTIVATION_BAND);
        assert_eq!(ActivationBand::new(f32::NAN), ActivationBand::default());
    }

    #[test]
    fn staying_in_right_zone_advances_once() {
        let mut state = ZoneState::default();
        let commands: Vec<_> = (0..5).filter_map(|_| state.apply(Zone::Right)).collect();

        assert_eq!(commands, vec![NavigationCommand::Advance]);
        assert!(state.right_active());
    }

    #[test]
    fn dip_through_center_rearms_latch() {
        let mut state = ZoneState::default();
        let commands: Vec<_> = [Zone::Right, Zone::Right, Zone::Center, Zone::Right]
            .into_iter()
            .filter_map(|zone| state.apply(zone))
            .collect();

        assert_eq!(
            commands,
            vec![NavigationCommand::Advance, NavigationCommand::Advance]
        );
    }

    #[test]
    fn jumping_across_sides_fires_both() {
        let mut state = ZoneState::default();
        assert_eq!(state.apply(Zone::Left), Some(NavigationCommand::Retreat));
        assert_eq!(state.apply(Zone::Right), Some(NavigationCommand::Advance));
        assert_eq!(state.apply(Zone::Left), Some(NavigationCommand::Retreat));
        assert!(!state.right_active());
    }

    #[test]
    fn reset_restores_initial_state() {
        let mut state = ZoneState::default();
        state.apply(Zone::Left);
        state.reset();

        assert_eq!(state, ZoneState::default());
        assert_eq!(state.zone(), Zone::Center);
        assert_eq!(state.apply(Zone::Left), Some(NavigationCommand::Retreat));
    }
}
