//! Fullscreen/windowed presentation state.
//!
//! The host styles three surfaces with one presentation class: the media
//! surface, the controls bar, and the subtitle menu. The menu only picks the
//! class up while it is visible; it is re-synced every time it is shown.

/// Labels shown on the fullscreen toggle button.
const LABEL_ENTER: &str = "FullScreen";
const LABEL_RETURN: &str = "ReturnScreen";

/// Fullscreen flag plus the per-surface presentation-class state it drives.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScreenState {
    fullscreen: bool,
    video_class: bool,
    controls_class: bool,
    menu_class: bool,
}

impl ScreenState {
    /// Windowed, no classes applied.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    /// Toggle between windowed and fullscreen.
    ///
    /// Video and controls always follow the flag. The menu's class is only
    /// touched when the menu is currently shown; a hidden menu is re-synced
    /// at show-time via [`ScreenState::sync_menu_class`].
    pub fn toggle(&mut self, menu_shown: bool) {
        self.fullscreen = !self.fullscreen;
        self.video_class = self.fullscreen;
        self.controls_class = self.fullscreen;
        if menu_shown {
            self.menu_class = self.fullscreen;
        }
    }

    /// Re-evaluate the menu's class against the current flag. Called on
    /// every menu visibility toggle so a menu shown mid-fullscreen matches
    /// the rest of the surface.
    pub fn sync_menu_class(&mut self) {
        self.menu_class = self.fullscreen;
    }

    pub fn video_class(&self) -> bool {
        self.video_class
    }

    pub fn controls_class(&self) -> bool {
        self.controls_class
    }

    pub fn menu_class(&self) -> bool {
        self.menu_class
    }

    /// Current label of the fullscreen toggle button.
    pub fn button_label(&self) -> &'static str {
        if self.fullscreen {
            LABEL_RETURN
        } else {
            LABEL_ENTER
        }
    }
}
