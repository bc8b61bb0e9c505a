// SPDX-License-Identifier: MPL-2.0
//! Frame statistics owned by a tracking session.

use std::time::{Duration, Instant};

/// How often the frames-per-second estimate is refreshed.
const FPS_WINDOW: Duration = Duration::from_secs(1);

/// Frame counters of one capture session.
///
/// The owning session records every frame; everyone else reads a copy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CaptureSessionState {
    total_frames: u64,
    window_frames: u32,
    window_started: Instant,
    last_frame: Option<Instant>,
    fps: Option<f64>,
}

impl CaptureSessionState {
    pub fn new(now: Instant) -> Self {
        Self {
            total_frames: 0,
            window_frames: 0,
            window_started: now,
            last_frame: None,
            fps: None,
        }
    }

    /// Counts one frame captured at `now`.
    pub fn record_frame(&mut self, now: Instant) {
        self.total_frames += 1;
        self.window_frames += 1;
        self.last_frame = Some(now);

        let elapsed = now.saturating_duration_since(self.window_started);
        if elapsed >= FPS_WINDOW {
            self.fps = Some(f64::from(self.window_frames) / elapsed.as_secs_f64());
            self.window_frames = 0;
            self.window_started = now;
        }
    }

    pub fn total_frames(&self) -> u64 {
        self.total_frames
    }

    pub fn last_frame(&self) -> Option<Instant> {
        self.last_frame
    }

    /// Frames per second over the last completed one-second window.
    pub fn fps(&self) -> Option<f64> {
        self.fps
    }
}

impl Default for CaptureSessionState {
    fn default() -> Self {
        Self::new(Instant::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn fps_is_unknown_before_first_window_completes() {
        let start = Instant::now();
        let mut state = CaptureSessionState::new(start);
        state.record_frame(start + Duration::from_millis(100));

        assert_eq!(state.total_frames(), 1);
        assert!(state.fps().is_none());
    }

    #[test]
    fn fps_is_computed_per_window() {
        let start = Instant::now();
        let mut state = CaptureSessionState::new(start);
        for i in 1..=30 {
            state.record_frame(start + Duration::from_millis(i * 1000 / 30));
        }

        let fps = state.fps().expect("window should be complete");
        assert_abs_diff_eq!(fps, 30.0, epsilon = 1e-9);
        assert_eq!(state.total_frames(), 30);
        assert_eq!(state.last_frame(), Some(start + Duration::from_millis(1000)));
    }
}
