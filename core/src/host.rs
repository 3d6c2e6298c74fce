pub mod stub;

use anyhow::Result;
use thiserror::Error;

/// Errors raised by the host platform bindings.
///
/// These never travel far: the controller downgrades every one of them to a
/// logged warning, so a missing platform leaves an inert UI rather than a
/// crashed one.
#[derive(Debug, Error)]
pub enum HostError {
    /// The platform bindings are not present in this environment
    #[error("host platform bindings unavailable")]
    Unavailable,

    /// The input subsystem refused to register a key
    #[error("input subsystem rejected key registration: {0}")]
    KeyRegistration(String),
}

/// Visibility mode of a host text track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackMode {
    Showing,
    Hidden,
    Disabled,
}

/// A subtitle/caption track as reported by the host media element.
///
/// Tracks are owned by the host; the application only reads these fields and
/// flips modes through [`MediaSurface::set_track_mode`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackInfo {
    /// Language code, may be empty
    pub language: String,
    /// Human-readable label
    pub label: String,
}

impl TrackInfo {
    pub fn new(language: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            label: label.into(),
        }
    }
}

/// Lifecycle events delivered by the host media surface.
#[derive(Debug, Clone, PartialEq)]
pub enum MediaEvent {
    MetadataLoaded,
    /// Current playback position in seconds
    TimeUpdate(f64),
    Play,
    Pause,
    Ended,
}

/// The host media element behind the player.
///
/// Every operation on a surface with no media source loaded is a safe no-op
/// per the host's own semantics; errors only surface for genuine binding
/// failures and are logged, not escalated.
pub trait MediaSurface {
    /// Resume playback
    fn play(&mut self) -> Result<()>;

    /// Suspend playback, retaining the current position
    fn pause(&mut self) -> Result<()>;

    /// Reload the media source without starting playback
    fn load(&mut self) -> Result<()>;

    /// Get current playback position in seconds
    fn position(&self) -> f64;

    /// Seek to an absolute position in seconds
    fn set_position(&mut self, secs: f64) -> Result<()>;

    /// Check if playback is paused
    fn is_paused(&self) -> bool;

    /// Total media duration in seconds, if known
    fn duration(&self) -> Option<f64>;

    /// Text tracks attached to the current source, in host order
    fn tracks(&self) -> Vec<TrackInfo>;

    /// Visibility mode of the track at `index`, if it exists
    fn track_mode(&self, index: usize) -> Option<TrackMode>;

    /// Set the visibility mode of the track at `index`; out-of-range is a no-op
    fn set_track_mode(&mut self, index: usize, mode: TrackMode);

    /// Advance the host pipeline one tick
    fn update(&mut self) -> Result<()>;

    /// Drain lifecycle events accumulated since the last call
    fn take_events(&mut self) -> Vec<MediaEvent>;
}

/// Host application and input bindings.
pub trait Platform {
    /// Whether the expected host platform is present. Absence logs a startup
    /// warning and nothing else; the application keeps running.
    fn is_available(&self) -> bool;

    /// Register a remote key so the input subsystem starts delivering it
    fn register_key(&mut self, name: &str) -> Result<(), HostError>;

    /// Application version string for the on-screen label
    fn app_version(&self) -> Option<String>;

    /// Hide/minimize the application (RETURN key)
    fn hide(&mut self);
}
