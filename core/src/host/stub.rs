//! In-memory host implementations.
//!
//! The shell uses these to simulate a TV pipeline and the tests use them to
//! drive the controller without any real platform bindings.

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::Result;

use super::{HostError, MediaEvent, MediaSurface, Platform, TrackMode, TrackInfo};

struct StubTrack {
    info: TrackInfo,
    mode: TrackMode,
}

/// Media surface that keeps playback state in memory.
///
/// `update` advances a simulated clock while playing and queues the same
/// lifecycle events a real media element would fire.
pub struct StubMedia {
    position: f64,
    duration: f64,
    paused: bool,
    tracks: Vec<StubTrack>,
    pending: Vec<MediaEvent>,
    /// Seconds advanced per `update` call while playing
    tick_secs: f64,
}

impl StubMedia {
    pub fn new(duration: f64, tracks: Vec<TrackInfo>) -> Self {
        Self {
            position: 0.0,
            duration,
            paused: true,
            tracks: tracks
                .into_iter()
                .map(|info| StubTrack {
                    info,
                    mode: TrackMode::Disabled,
                })
                .collect(),
            pending: Vec::new(),
            tick_secs: 0.25,
        }
    }

    /// Set how far the clock moves per `update` while playing
    pub fn with_tick(mut self, secs: f64) -> Self {
        self.tick_secs = secs;
        self
    }
}

impl MediaSurface for StubMedia {
    fn play(&mut self) -> Result<()> {
        if self.paused {
            self.paused = false;
            self.pending.push(MediaEvent::Play);
        }
        Ok(())
    }

    fn pause(&mut self) -> Result<()> {
        if !self.paused {
            self.paused = true;
            self.pending.push(MediaEvent::Pause);
        }
        Ok(())
    }

    fn load(&mut self) -> Result<()> {
        self.position = 0.0;
        self.paused = true;
        self.pending.push(MediaEvent::MetadataLoaded);
        Ok(())
    }

    fn position(&self) -> f64 {
        self.position
    }

    fn set_position(&mut self, secs: f64) -> Result<()> {
        self.position = secs.clamp(0.0, self.duration);
        Ok(())
    }

    fn is_paused(&self) -> bool {
        self.paused
    }

    fn duration(&self) -> Option<f64> {
        Some(self.duration)
    }

    fn tracks(&self) -> Vec<TrackInfo> {
        self.tracks.iter().map(|t| t.info.clone()).collect()
    }

    fn track_mode(&self, index: usize) -> Option<TrackMode> {
        self.tracks.get(index).map(|t| t.mode)
    }

    fn set_track_mode(&mut self, index: usize, mode: TrackMode) {
        if let Some(track) = self.tracks.get_mut(index) {
            track.mode = mode;
        }
    }

    fn update(&mut self) -> Result<()> {
        if self.paused {
            return Ok(());
        }

        self.position += self.tick_secs;
        if self.position >= self.duration {
            // Clamp and fire the end-of-media sequence
            self.position = self.duration;
            self.paused = true;
            self.pending.push(MediaEvent::TimeUpdate(self.position));
            self.pending.push(MediaEvent::Ended);
        } else {
            self.pending.push(MediaEvent::TimeUpdate(self.position));
        }

        Ok(())
    }

    fn take_events(&mut self) -> Vec<MediaEvent> {
        std::mem::take(&mut self.pending)
    }
}

/// Platform stub that records what the application asked of it.
pub struct StubPlatform {
    available: bool,
    version: Option<String>,
    pub registered_keys: Vec<String>,
    pub hide_calls: usize,
}

impl StubPlatform {
    pub fn new() -> Self {
        Self {
            available: true,
            version: Some("0.1.0".to_string()),
            registered_keys: Vec::new(),
            hide_calls: 0,
        }
    }

    /// Simulate a non-TV environment where the bindings are missing
    pub fn unavailable() -> Self {
        Self {
            available: false,
            version: None,
            registered_keys: Vec::new(),
            hide_calls: 0,
        }
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }
}

impl Default for StubPlatform {
    fn default() -> Self {
        Self::new()
    }
}

impl Platform for StubPlatform {
    fn is_available(&self) -> bool {
        self.available
    }

    fn register_key(&mut self, name: &str) -> Result<(), HostError> {
        if !self.available {
            return Err(HostError::Unavailable);
        }
        self.registered_keys.push(name.to_string());
        Ok(())
    }

    fn app_version(&self) -> Option<String> {
        self.version.clone()
    }

    fn hide(&mut self) {
        self.hide_calls += 1;
    }
}

/// Shared handle so a test (or shell) can keep inspecting the platform
/// after handing it to the controller.
impl Platform for Rc<RefCell<StubPlatform>> {
    fn is_available(&self) -> bool {
        self.borrow().is_available()
    }

    fn register_key(&mut self, name: &str) -> Result<(), HostError> {
        self.borrow_mut().register_key(name)
    }

    fn app_version(&self) -> Option<String> {
        self.borrow().app_version()
    }

    fn hide(&mut self) {
        self.borrow_mut().hide()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stub_media_transitions_state() {
        let mut media = StubMedia::new(10.0, Vec::new());
        assert!(media.is_paused());
        media.play().unwrap();
        assert!(!media.is_paused());
        media.pause().unwrap();
        assert!(media.is_paused());
        assert_eq!(
            media.take_events(),
            vec![MediaEvent::Play, MediaEvent::Pause]
        );
    }

    #[test]
    fn stub_media_ends_at_duration() {
        let mut media = StubMedia::new(1.0, Vec::new()).with_tick(0.6);
        media.play().unwrap();
        media.take_events();

        media.update().unwrap();
        media.update().unwrap();

        assert!(media.is_paused());
        assert_eq!(media.position(), 1.0);
        let events = media.take_events();
        assert!(events.contains(&MediaEvent::Ended));
    }

    #[test]
    fn stub_media_ignores_out_of_range_track() {
        let mut media = StubMedia::new(10.0, vec![TrackInfo::new("en", "English")]);
        media.set_track_mode(5, TrackMode::Showing);
        assert_eq!(media.track_mode(0), Some(TrackMode::Disabled));
        assert_eq!(media.track_mode(5), None);
    }

    #[test]
    fn unavailable_platform_rejects_registration() {
        let mut platform = StubPlatform::unavailable();
        assert!(!platform.is_available());
        assert!(platform.register_key("MediaPlay").is_err());
    }
}
