// SPDX-License-Identifier: MPL-2.0
//! Selection of the tracking session the viewer binds to.

use crate::error::Result;
use crate::image_rotator::SurfaceSize;
use crate::tracking::pointer::POINTER_CAMERA_NAME;
use crate::tracking::{CaptureResolution, PointerSession, ProcessSession, TrackingSession};

/// The tracking session owned by the application.
pub enum TrackerSource {
    /// Mouse pointer stands in for the marker.
    Pointer(PointerSession),
    /// External tracker process.
    Process(ProcessSession),
    /// Nothing to track; binding reports no camera.
    Disabled(PointerSession),
}

impl TrackerSource {
    /// Pointer emulation whose capture resolution matches `surface`.
    pub fn pointer(surface: SurfaceSize) -> Self {
        TrackerSource::Pointer(PointerSession::new(
            POINTER_CAMERA_NAME,
            capture_for_surface(surface),
        ))
    }

    pub fn spawn(command: &[String]) -> Result<Self> {
        ProcessSession::spawn(command).map(TrackerSource::Process)
    }

    pub fn disabled() -> Self {
        TrackerSource::Disabled(PointerSession::without_camera())
    }

    pub fn session(&self) -> &dyn TrackingSession {
        match self {
            TrackerSource::Pointer(session) | TrackerSource::Disabled(session) => session,
            TrackerSource::Process(session) => session,
        }
    }

    pub fn session_mut(&mut self) -> &mut dyn TrackingSession {
        match self {
            TrackerSource::Pointer(session) | TrackerSource::Disabled(session) => session,
            TrackerSource::Process(session) => session,
        }
    }

    /// The pointer session, when the mouse drives the marker.
    pub fn pointer_mut(&mut self) -> Option<&mut PointerSession> {
        match self {
            TrackerSource::Pointer(session) => Some(session),
            _ => None,
        }
    }
}

/// Capture resolution used by pointer emulation for a given image area.
pub fn capture_for_surface(surface: SurfaceSize) -> CaptureResolution {
    CaptureResolution::new(surface.width.max(0.0) as u32, surface.height.max(0.0) as u32)
}
