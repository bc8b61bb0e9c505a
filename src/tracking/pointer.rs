// SPDX-License-Identifier: MPL-2.0
//! In-process tracking session fed by the host application.
//!
//! The viewer uses it to emulate the marker with the mouse pointer, where the
//! "camera" resolution is the size of the image area. Tests use it as a
//! stand-in for a real camera.

use super::{
    CameraInfo, CaptureResolution, CaptureSessionState, MarkerObserver, MarkerSample,
    TrackingSession,
};
use std::time::Instant;

/// Camera name reported while emulating the marker with the mouse.
pub const POINTER_CAMERA_NAME: &str = "Pointer emulation";

pub struct PointerSession {
    camera: Option<CameraInfo>,
    marker_count: usize,
    observer: Option<Box<dyn MarkerObserver>>,
    state: CaptureSessionState,
}

impl PointerSession {
    /// Session with one marker and a camera of the given resolution.
    pub fn new(name: impl Into<String>, capture: CaptureResolution) -> Self {
        Self {
            camera: Some(CameraInfo {
                name: name.into(),
                capture,
            }),
            marker_count: 1,
            observer: None,
            state: CaptureSessionState::default(),
        }
    }

    /// Session that reports no camera at all.
    pub fn without_camera() -> Self {
        Self {
            camera: None,
            marker_count: 0,
            observer: None,
            state: CaptureSessionState::default(),
        }
    }

    pub fn set_marker_count(&mut self, count: usize) {
        self.marker_count = count;
    }

    /// Changes the capture resolution stamped on subsequent samples.
    pub fn set_capture(&mut self, capture: CaptureResolution) {
        if let Some(camera) = self.camera.as_mut() {
            camera.capture = capture;
        }
    }

    fn capture(&self) -> CaptureResolution {
        self.camera
            .as_ref()
            .map(|camera| camera.capture)
            .unwrap_or_default()
    }

    /// Publishes a present marker at `(x, y)` in capture pixels.
    pub fn feed(&mut self, x: f32, y: f32) {
        let sample = MarkerSample::at(x, y, self.capture());
        self.publish(sample);
    }

    /// Publishes a sample reporting the marker is gone.
    pub fn feed_absent(&mut self) {
        let sample = MarkerSample::absent(self.capture());
        self.publish(sample);
    }

    /// Delivers `sample` to the subscriber, if any, and counts the frame.
    pub fn publish(&mut self, sample: MarkerSample) {
        if self.camera.is_none() {
            return;
        }
        self.state.record_frame(Instant::now());
        if let Some(observer) = &self.observer {
            observer.on_marker_sample(sample);
        }
    }
}

impl TrackingSession for PointerSession {
    fn camera(&self) -> Option<CameraInfo> {
        self.camera.clone()
    }

    fn marker_count(&self) -> usize {
        self.marker_count
    }

    fn subscribe(&mut self, observer: Box<dyn MarkerObserver>) {
        self.observer = Some(observer);
    }

    fn unsubscribe(&mut self) {
        self.observer = None;
    }

    fn is_subscribed(&self) -> bool {
        self.observer.is_some()
    }

    fn capture_state(&self) -> CaptureSessionState {
        self.state
    }
}
