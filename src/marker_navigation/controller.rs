// SPDX-License-Identifier: MPL-2.0
//! Binds a tracking session to the image rotator.

use super::mapping::{map_to_display, DisplayPoint};
use super::zone::{classify, ActivationBand, NavigationCommand, Zone, ZoneState};
use crate::error::{Error, Result};
use crate::image_rotator::{DisplaySurface, ImageRotator, SurfaceSize};
use crate::tracking::{sample_queue, MarkerSample, SampleReceiver, SampleSender, TrackingSession};

/// What the status bar and overlay show for the latest marker sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorReadout {
    pub point: DisplayPoint,
    pub zone: Zone,
    /// Raw marker position in capture pixels.
    pub marker_x: f32,
    pub marker_y: f32,
}

impl NavigationCommand {
    pub fn apply<S: DisplaySurface>(self, rotator: &mut ImageRotator<S>) {
        match self {
            NavigationCommand::Advance => rotator.show_next(),
            NavigationCommand::Retreat => rotator.show_previous(),
        }
    }
}

/// Turns marker samples into navigation commands.
///
/// The controller owns the receiving end of the sample queue. While attached,
/// its sender is subscribed to the session and every drained sample runs
/// through [`NavigationController::process`].
#[derive(Debug)]
pub struct NavigationController {
    band: ActivationBand,
    zone_state: ZoneState,
    readout: Option<CursorReadout>,
    attached: bool,
    sender: SampleSender,
    receiver: SampleReceiver,
}

impl NavigationController {
    pub fn new(band: ActivationBand, queue_capacity: usize) -> Self {
        let (sender, receiver) = sample_queue(queue_capacity.max(1));
        Self {
            band,
            zone_state: ZoneState::default(),
            readout: None,
            attached: false,
            sender,
            receiver,
        }
    }

    /// Runs one sample through mapping, classification and edge detection.
    pub fn process(
        &mut self,
        sample: &MarkerSample,
        surface: SurfaceSize,
    ) -> Option<NavigationCommand> {
        if !sample.present {
            self.reset();
            return None;
        }

        if surface.is_empty() {
            log::trace!("Skipping marker sample on an empty surface");
            return None;
        }
        let Some(point) = map_to_display(sample, surface) else {
            log::trace!("Skipping marker sample with unknown capture size");
            return None;
        };
        let zone = classify(point.x, surface.width, self.band);
        let command = self.zone_state.apply(zone);

        self.readout = Some(CursorReadout {
            point,
            zone,
            marker_x: sample.x,
            marker_y: sample.y,
        });
        command
    }

    /// Attaches to or detaches from `session` according to its camera and
    /// marker count.
    ///
    /// Returns whether the controller is attached afterwards.
    pub fn sync_binding(&mut self, session: &mut dyn TrackingSession) -> Result<bool> {
        if session.camera().is_none() {
            self.detach(session);
            return Err(Error::TrackingUnavailable);
        }
        match session.marker_count() {
            0 => {
                self.detach(session);
                Ok(false)
            }
            1 => {
                if !self.attached || !session.is_subscribed() {
                    self.attach(session);
                }
                Ok(true)
            }
            count => {
                self.detach(session);
                Err(Error::AmbiguousMarker(count))
            }
        }
    }

    pub fn attach(&mut self, session: &mut dyn TrackingSession) {
        session.subscribe(Box::new(self.sender.clone()));
        self.attached = true;
        self.reset();
        log::info!("Marker navigation attached");
    }

    pub fn detach(&mut self, session: &mut dyn TrackingSession) {
        if !self.attached {
            return;
        }
        session.unsubscribe();
        self.attached = false;
        self.reset();
        self.receiver.drain();
        log::info!("Marker navigation detached");
    }

    /// Clears the zone latches and hides the cursor.
    pub fn reset(&mut self) {
        self.zone_state.reset();
        self.readout = None;
    }

    /// Applies every queued sample in arrival order to `rotator`.
    ///
    /// Returns the number of navigation commands executed.
    pub fn pump<S: DisplaySurface>(&mut self, rotator: &mut ImageRotator<S>) -> usize {
        let samples = self.receiver.drain();
        if !self.attached {
            return 0;
        }
        let mut executed = 0;
        for sample in &samples {
            let size = rotator.surface().size();
            if let Some(command) = self.process(sample, size) {
                log::debug!("Marker navigation: {command:?}");
                command.apply(rotator);
                executed += 1;
            }
        }
        executed
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn readout(&self) -> Option<CursorReadout> {
        self.readout
    }

    pub fn zone_state(&self) -> ZoneState {
        self.zone_state
    }

    pub fn band(&self) -> ActivationBand {
        self.band
    }

    /// Samples dropped because the queue was full.
    pub fn dropped_samples(&self) -> u64 {
        self.receiver.dropped()
    }
}
