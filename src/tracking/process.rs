// SPDX-License-Identifier: MPL-2.0
//! Tracking session backed by an external tracker process.
//!
//! The tracker writes one JSON object per line on its stdout:
//!
//! ```text
//! {"type":"camera","name":"USB Camera","width":640,"height":480}
//! {"type":"markers","count":1}
//! {"type":"sample","present":true,"x":320.0,"y":240.0,"dx":0.0,"dy":0.0}
//! {"type":"error","message":"camera disconnected"}
//! ```
//!
//! A camera message with a `null` name reports that no camera is available.
//! When the tracker exits the session reports no camera and no markers.

use super::{
    CameraInfo, CaptureResolution, CaptureSessionState, MarkerBounds, MarkerObserver,
    MarkerSample, TrackingSession,
};
use crate::error::{Error, Result};
use serde::Deserialize;
use std::io::{BufRead, BufReader};
use std::process::{Child, Command, Stdio};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread;
use std::time::Instant;

#[derive(Debug, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
enum TrackerMessage {
    Camera {
        name: Option<String>,
        #[serde(default)]
        width: u32,
        #[serde(default)]
        height: u32,
    },
    Markers {
        count: usize,
    },
    Sample {
        present: bool,
        #[serde(default)]
        x: f32,
        #[serde(default)]
        y: f32,
        #[serde(default)]
        dx: f32,
        #[serde(default)]
        dy: f32,
        #[serde(default)]
        area: Option<f32>,
        #[serde(default)]
        bounds: Option<MarkerBounds>,
    },
    Error {
        message: String,
    },
}

fn parse_line(line: &str) -> Result<TrackerMessage> {
    Ok(serde_json::from_str(line)?)
}

/// State shared between the session handle and its reader thread.
#[derive(Default)]
struct Shared {
    camera: Option<CameraInfo>,
    marker_count: usize,
    state: CaptureSessionState,
    observer: Option<Box<dyn MarkerObserver>>,
    last_error: Option<String>,
}

impl Shared {
    fn apply(&mut self, message: TrackerMessage, now: Instant) {
        match message {
            TrackerMessage::Camera {
                name: Some(name),
                width,
                height,
            } => {
                log::info!("Tracker camera: {name} ({width}x{height})");
                self.last_error = None;
                self.camera = Some(CameraInfo {
                    name,
                    capture: CaptureResolution::new(width, height),
                });
            }
            TrackerMessage::Camera { name: None, .. } => {
                log::info!("Tracker reports no camera");
                self.camera = None;
            }
            TrackerMessage::Markers { count } => {
                log::debug!("Tracker reports {count} marker(s)");
                self.marker_count = count;
            }
            TrackerMessage::Sample {
                present,
                x,
                y,
                dx,
                dy,
                area,
                bounds,
            } => {
                let Some(camera) = &self.camera else {
                    log::trace!("Ignoring marker sample without a camera");
                    return;
                };
                let sample = MarkerSample {
                    present,
                    x,
                    y,
                    capture: camera.capture,
                    bounds,
                    dx,
                    dy,
                    area,
                };
                self.state.record_frame(now);
                if let Some(observer) = &self.observer {
                    observer.on_marker_sample(sample);
                }
            }
            TrackerMessage::Error { message } => {
                log::warn!("Tracker error: {message}");
                self.last_error = Some(message);
            }
        }
    }

    fn disconnect(&mut self) {
        self.camera = None;
        self.marker_count = 0;
    }
}

fn lock(shared: &Mutex<Shared>) -> MutexGuard<'_, Shared> {
    shared.lock().unwrap_or_else(PoisonError::into_inner)
}

/// A tracker subprocess and the thread reading its output.
pub struct ProcessSession {
    child: Child,
    shared: Arc<Mutex<Shared>>,
}

impl ProcessSession {
    /// Starts `command` (program followed by its arguments).
    pub fn spawn(command: &[String]) -> Result<Self> {
        let (program, args) = command
            .split_first()
            .ok_or_else(|| Error::Tracker("empty tracker command".into()))?;

        log::info!("Starting tracker: {}", command.join(" "));
        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|err| Error::Tracker(format!("cannot start {program}: {err}")))?;

        let Some(stdout) = child.stdout.take() else {
            stop(&mut child);
            return Err(Error::Tracker("tracker stdout unavailable".into()));
        };

        let shared = Arc::new(Mutex::new(Shared::default()));
        let thread_shared = Arc::clone(&shared);
        let reader = thread::Builder::new()
            .name("tracker-reader".into())
            .spawn(move || read_messages(BufReader::new(stdout), &thread_shared));
        if let Err(err) = reader {
            stop(&mut child);
            return Err(Error::Tracker(format!("cannot start tracker reader: {err}")));
        }

        Ok(Self { child, shared })
    }
}

fn read_messages(mut reader: impl BufRead, shared: &Mutex<Shared>) {
    let mut line = String::new();
    loop {
        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                match parse_line(trimmed) {
                    Ok(message) => lock(shared).apply(message, Instant::now()),
                    Err(err) => log::warn!("Skipping tracker line {trimmed:?}: {err}"),
                }
            }
            Err(err) => {
                log::warn!("Reading tracker output failed: {err}");
                break;
            }
        }
    }
    log::info!("Tracker output closed");
    lock(shared).disconnect();
}

impl TrackingSession for ProcessSession {
    fn camera(&self) -> Option<CameraInfo> {
        lock(&self.shared).camera.clone()
    }

    fn marker_count(&self) -> usize {
        lock(&self.shared).marker_count
    }

    fn subscribe(&mut self, observer: Box<dyn MarkerObserver>) {
        lock(&self.shared).observer = Some(observer);
    }

    fn unsubscribe(&mut self) {
        lock(&self.shared).observer = None;
    }

    fn is_subscribed(&self) -> bool {
        lock(&self.shared).observer.is_some()
    }

    fn capture_state(&self) -> CaptureSessionState {
        lock(&self.shared).state
    }

    fn last_error(&self) -> Option<String> {
        lock(&self.shared).last_error.clone()
    }
}

/// Kills the tracker and reaps it.
fn stop(child: &mut Child) {
    if let Err(err) = child.kill() {
        log::debug!("Tracker already stopped: {err}");
    }
    let _ = child.wait();
}

impl Drop for ProcessSession {
    fn drop(&mut self) {
        stop(&mut self.child);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracking::sample_queue;
    use std::io::Cursor;

    #[test]
    fn parses_every_message_kind() {
        assert_eq!(
            parse_line(r#"{"type":"camera","name":"Cam","width":640,"height":480}"#).unwrap(),
            TrackerMessage::Camera {
                name: Some("Cam".into()),
                width: 640,
                height: 480
            }
        );
        assert_eq!(
            parse_line(r#"{"type":"markers","count":2}"#).unwrap(),
            TrackerMessage::Markers { count: 2 }
        );
        assert!(matches!(
            parse_line(r#"{"type":"sample","present":true,"x":1.5,"y":2.5}"#).unwrap(),
            TrackerMessage::Sample { present: true, x, y, bounds: None, .. } if x == 1.5 && y == 2.5
        ));
        assert_eq!(
            parse_line(r#"{"type":"error","message":"boom"}"#).unwrap(),
            TrackerMessage::Error {
                message: "boom".into()
            }
        );
    }

    #[test]
    fn unknown_message_is_an_error() {
        assert!(matches!(
            parse_line(r#"{"type":"gesture"}"#),
            Err(Error::Tracker(_))
        ));
        assert!(parse_line("not json").is_err());
    }

    #[test]
    fn samples_are_stamped_with_camera_resolution() {
        let (tx, mut rx) = sample_queue(8);
        let mut shared = Shared {
            observer: Some(Box::new(tx)),
            ..Shared::default()
        };
        let now = Instant::now();

        shared.apply(
            TrackerMessage::Camera {
                name: Some("Cam".into()),
                width: 640,
                height: 480,
            },
            now,
        );
        shared.apply(
            parse_line(r#"{"type":"sample","present":true,"x":10,"y":20,"bounds":{"left":1,"top":2,"right":3,"bottom":4}}"#)
                .unwrap(),
            now,
        );

        let samples = rx.drain();
        assert_eq!(samples.len(), 1);
        assert_eq!(samples[0].capture, CaptureResolution::new(640, 480));
        assert_eq!(
            samples[0].bounds,
            Some(MarkerBounds {
                left: 1,
                top: 2,
                right: 3,
                bottom: 4
            })
        );
        assert_eq!(shared.state.total_frames(), 1);
    }

    #[test]
    fn samples_without_camera_are_ignored() {
        let (tx, mut rx) = sample_queue(8);
        let mut shared = Shared {
            observer: Some(Box::new(tx)),
            ..Shared::default()
        };
        shared.apply(
            parse_line(r#"{"type":"sample","present":true,"x":1,"y":1}"#).unwrap(),
            Instant::now(),
        );
        assert!(rx.drain().is_empty());
    }

    #[test]
    fn reader_skips_garbage_and_disconnects_at_eof() {
        let shared = Mutex::new(Shared::default());
        let input = concat!(
            "{\"type\":\"camera\",\"name\":\"Cam\",\"width\":320,\"height\":240}\n",
            "garbage\n",
            "\n",
            "{\"type\":\"markers\",\"count\":1}\n",
            "{\"type\":\"error\",\"message\":\"lost focus\"}\n",
        );

        read_messages(Cursor::new(input), &shared);

        let shared = lock(&shared);
        assert!(shared.camera.is_none());
        assert_eq!(shared.marker_count, 0);
        assert_eq!(shared.last_error.as_deref(), Some("lost focus"));
    }

    #[test]
    fn camera_message_clears_previous_error() {
        let mut shared = Shared::default();
        let now = Instant::now();
        shared.apply(parse_line(r#"{"type":"error","message":"no frames"}"#).unwrap(), now);
        assert_eq!(shared.last_error.as_deref(), Some("no frames"));

        shared.apply(
            parse_line(r#"{"type":"camera","name":"Cam","width":640,"height":480}"#).unwrap(),
            now,
        );
        assert_eq!(shared.last_error, None);
    }

    #[test]
    fn null_camera_name_clears_camera() {
        let mut shared = Shared::default();
        let now = Instant::now();
        shared.apply(
            parse_line(r#"{"type":"camera","name":"Cam","width":640,"height":480}"#).unwrap(),
            now,
        );
        shared.apply(parse_line(r#"{"type":"camera","name":null}"#).unwrap(), now);
        assert!(shared.camera.is_none());
    }

    #[test]
    fn spawn_rejects_empty_command() {
        assert!(matches!(
            ProcessSession::spawn(&[]),
            Err(Error::Tracker(_))
        ));
    }

    #[test]
    fn spawn_rejects_missing_program() {
        let command = vec!["/nonexistent/tracker-binary".to_string()];
        assert!(matches!(
            ProcessSession::spawn(&command),
            Err(Error::Tracker(_))
        ));
    }

    #[cfg(unix)]
    #[test]
    fn stop_reaps_running_child() {
        let mut child = Command::new("sleep")
            .arg("5")
            .spawn()
            .expect("failed to spawn sleep");

        stop(&mut child);

        let status = child.try_wait().expect("failed to query child");
        assert!(status.is_some());
    }

    #[cfg(unix)]
    #[test]
    fn spawned_tracker_reports_camera_and_markers() {
        use std::time::Duration;

        let command = vec![
            "sh".to_string(),
            "-c".to_string(),
            concat!(
                "printf '%s\\n' ",
                "'{\"type\":\"camera\",\"name\":\"Cam\",\"width\":640,\"height\":480}' ",
                "'{\"type\":\"markers\",\"count\":1}'; ",
                "exec sleep 5"
            )
            .to_string(),
        ];
        let session = ProcessSession::spawn(&command).expect("failed to spawn tracker");

        let deadline = Instant::now() + Duration::from_secs(5);
        while session.marker_count() != 1 && Instant::now() < deadline {
            thread::sleep(Duration::from_millis(10));
        }

        assert_eq!(session.marker_count(), 1);
        assert_eq!(
            session.camera().map(|camera| camera.capture),
            Some(CaptureResolution::new(640, 480))
        );
    }
}
