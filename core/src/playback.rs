//! Playback control over the host media surface.

use crate::host::{MediaEvent, MediaSurface};

/// Thin wrapper issuing play/pause/stop/init against the host surface.
///
/// Host failures never leave this layer as errors; they degrade to logged
/// warnings and the operation becomes a no-op, matching the host media
/// element's own tolerance for commands without a loaded source.
pub struct Playback {
    media: Box<dyn MediaSurface>,
}

impl Playback {
    pub fn new(media: Box<dyn MediaSurface>) -> Self {
        Self { media }
    }

    /// Resume playback.
    pub fn play(&mut self) {
        if let Err(e) = self.media.play() {
            log::warn!("play failed: {e}");
        }
    }

    /// Suspend playback, keeping the current position.
    pub fn pause(&mut self) {
        if let Err(e) = self.media.pause() {
            log::warn!("pause failed: {e}");
        }
    }

    /// Stop playback: pause, reset the position to zero, then reload the
    /// source so a subsequent play starts clean. The reload is part of the
    /// contract, not an optimization.
    pub fn stop(&mut self) {
        self.pause();
        if let Err(e) = self.media.set_position(0.0) {
            log::warn!("position reset failed: {e}");
        }
        self.init();
    }

    /// Reload the media source without starting playback.
    pub fn init(&mut self) {
        if let Err(e) = self.media.load() {
            log::warn!("media load failed: {e}");
        }
    }

    /// Advance the host pipeline and drain its lifecycle events.
    pub fn pump(&mut self) -> Vec<MediaEvent> {
        if let Err(e) = self.media.update() {
            log::warn!("media update failed: {e}");
        }
        self.media.take_events()
    }

    pub fn position(&self) -> f64 {
        self.media.position()
    }

    pub fn is_paused(&self) -> bool {
        self.media.is_paused()
    }

    pub fn duration(&self) -> Option<f64> {
        self.media.duration()
    }

    pub fn media(&self) -> &dyn MediaSurface {
        self.media.as_ref()
    }

    pub fn media_mut(&mut self) -> &mut dyn MediaSurface {
        self.media.as_mut()
    }
}
