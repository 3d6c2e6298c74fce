pub mod config;
pub mod controller;
pub mod host;
pub mod input;
pub mod logger;
pub mod playback;
pub mod screen;
pub mod subtitle;

// Re-exports
pub use config::PlayerConfig;
pub use controller::Player;
pub use host::{
    HostError, MediaEvent, MediaSurface, Platform, TrackInfo, TrackMode,
    stub::{StubMedia, StubPlatform},
};
pub use input::{Action, REGISTERED_KEYS, key_code};
pub use logger::LogPanel;
pub use playback::Playback;
pub use screen::ScreenState;
pub use subtitle::{MenuItem, SubtitleMenu};
