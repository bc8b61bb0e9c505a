// SPDX-License-Identifier: MPL-2.0
//! Contract with the camera-tracking collaborator.
//!
//! Marker detection lives outside this crate. A [`TrackingSession`] exposes
//! the current camera, the number of active markers, and lets exactly one
//! [`MarkerObserver`] subscribe to marker samples. Sessions may deliver
//! samples from a capture thread, so observers are `Send`; the UI hands a
//! [`SampleSender`] to the session and drains the matching
//! [`SampleReceiver`] on its own thread.

mod capture_state;
pub mod pointer;
pub mod process;
mod queue;

pub use capture_state::CaptureSessionState;
pub use pointer::PointerSession;
pub use process::ProcessSession;
pub use queue::{sample_queue, SampleReceiver, SampleSender};

use serde::Deserialize;

/// Resolution frames are captured at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub struct CaptureResolution {
    pub width: u32,
    pub height: u32,
}

impl CaptureResolution {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// A resolution with a zero side cannot be used to map coordinates.
    pub fn is_known(&self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Camera currently used by the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CameraInfo {
    pub name: String,
    pub capture: CaptureResolution,
}

/// Marker bounding box in capture pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub struct MarkerBounds {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

/// One marker observation. Produced by the session, read-only to the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MarkerSample {
    pub present: bool,
    /// Marker center in capture pixels.
    pub x: f32,
    pub y: f32,
    /// Capture resolution at the time of the sample.
    pub capture: CaptureResolution,
    pub bounds: Option<MarkerBounds>,
    /// Smoothed movement since the previous sample.
    pub dx: f32,
    pub dy: f32,
    pub area: Option<f32>,
}

impl MarkerSample {
    /// A present marker at `(x, y)` without bounds or deltas.
    pub fn at(x: f32, y: f32, capture: CaptureResolution) -> Self {
        Self {
            present: true,
            x,
            y,
            capture,
            ..Self::default()
        }
    }

    /// A sample reporting that the marker left the camera view.
    pub fn absent(capture: CaptureResolution) -> Self {
        Self {
            present: false,
            capture,
            ..Self::default()
        }
    }
}

/// Receives marker samples from a tracking session.
pub trait MarkerObserver: Send {
    fn on_marker_sample(&self, sample: MarkerSample);
}

/// A live tracking session.
pub trait TrackingSession {
    /// Camera currently capturing, if any.
    fn camera(&self) -> Option<CameraInfo>;

    /// Number of markers the session is tracking.
    fn marker_count(&self) -> usize;

    /// Installs `observer` as the receiver of marker samples, replacing any
    /// previous one.
    fn subscribe(&mut self, observer: Box<dyn MarkerObserver>);

    /// Stops delivering marker samples.
    fn unsubscribe(&mut self);

    fn is_subscribed(&self) -> bool;

    /// Snapshot of frame statistics.
    fn capture_state(&self) -> CaptureSessionState;

    /// Most recent failure reported by the tracker, until a camera is
    /// reported again.
    fn last_error(&self) -> Option<String> {
        None
    }
}
