use serde::Deserialize;

/// Player behavior knobs, loadable from a config file by the shell.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Start playback immediately after the initial media load
    pub autoplay: bool,
    /// Log every time-update event to the on-screen panel. Matches the
    /// original device behavior when on; shells may mute the flood.
    pub log_time_updates: bool,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            autoplay: false,
            log_time_updates: true,
        }
    }
}
