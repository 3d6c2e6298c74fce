//! Remote-control key routing.
//!
//! The host delivers key presses as raw numeric codes; this module maps each
//! code to exactly one player action via a fixed table. Unmapped codes map to
//! nothing and the controller logs them, matching the host's "register first,
//! deliver later" input model.

/// Raw key codes delivered by the host input subsystem.
pub mod key_code {
    pub const RETURN: u16 = 10009;
    pub const PLAY: u16 = 415;
    pub const STOP: u16 = 413;
    pub const PAUSE: u16 = 19;
    pub const COLOR_RED: u16 = 403;
    pub const ENTER: u16 = 13;
}

/// Key names that must be registered with the input subsystem before they
/// are delivered. RETURN and Enter arrive without registration.
pub const REGISTERED_KEYS: [&str; 4] = ["MediaPause", "MediaPlay", "MediaStop", "ColorF0Red"];

/// Player action resolved from a remote key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Hide/exit the application
    HideApp,
    /// Resume playback
    Play,
    /// Stop and reset to start
    Stop,
    /// Pause playback
    Pause,
    /// Flip the currently selected subtitle track between showing and hidden
    ToggleSelectedSubtitle,
    /// Toggle fullscreen presentation
    ToggleFullscreen,
}

impl Action {
    /// Resolve a raw key code against the fixed table. Returns `None` for
    /// unmapped codes; the caller logs those and does nothing else.
    pub fn from_key_code(code: u16) -> Option<Self> {
        match code {
            key_code::RETURN => Some(Action::HideApp),
            key_code::PLAY => Some(Action::Play),
            key_code::STOP => Some(Action::Stop),
            key_code::PAUSE => Some(Action::Pause),
            key_code::COLOR_RED => Some(Action::ToggleSelectedSubtitle),
            key_code::ENTER => Some(Action::ToggleFullscreen),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_every_known_code() {
        assert_eq!(Action::from_key_code(10009), Some(Action::HideApp));
        assert_eq!(Action::from_key_code(415), Some(Action::Play));
        assert_eq!(Action::from_key_code(413), Some(Action::Stop));
        assert_eq!(Action::from_key_code(19), Some(Action::Pause));
        assert_eq!(
            Action::from_key_code(403),
            Some(Action::ToggleSelectedSubtitle)
        );
        assert_eq!(Action::from_key_code(13), Some(Action::ToggleFullscreen));
    }

    #[test]
    fn unmapped_code_resolves_to_nothing() {
        assert_eq!(Action::from_key_code(999), None);
        assert_eq!(Action::from_key_code(0), None);
    }
}
