// SPDX-License-Identifier: MPL-2.0
//! Touchless navigation driven by a tracked marker.
//!
//! Marker samples are mapped from capture pixels to display pixels, classified
//! into a Left, Center or Right zone, and run through an edge detector that
//! emits one navigation command per entry into a side zone.

mod controller;
mod mapping;
mod zone;

pub use controller::{CursorReadout, NavigationController};
pub use mapping::{map_to_display, DisplayPoint};
pub use zone::{classify, ActivationBand, NavigationCommand, Zone, ZoneState};
