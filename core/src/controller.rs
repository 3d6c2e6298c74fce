//! The owning player controller.
//!
//! One struct holds everything the event handlers touch: the playback
//! wrapper, the platform bindings, the subtitle menu, the screen-mode state,
//! and the on-screen log panel. Every external event funnels into one
//! dispatch method, so the whole player is unit-testable against the stub
//! host without any UI in the loop.

use crate::config::PlayerConfig;
use crate::host::{MediaEvent, MediaSurface, Platform, TrackMode};
use crate::input::{Action, REGISTERED_KEYS};
use crate::logger::LogPanel;
use crate::playback::Playback;
use crate::screen::ScreenState;
use crate::subtitle::SubtitleMenu;

pub struct Player {
    playback: Playback,
    platform: Box<dyn Platform>,
    menu: SubtitleMenu,
    screen: ScreenState,
    log: LogPanel,
    version: Option<String>,
    config: PlayerConfig,
}

impl Player {
    /// Build the player once at startup: platform presence check, version
    /// label, remote key registration, subtitle menu construction, initial
    /// media load. None of these halt startup on failure; the worst case is
    /// an inert UI with warnings in the panel.
    pub fn new(
        media: Box<dyn MediaSurface>,
        mut platform: Box<dyn Platform>,
        config: PlayerConfig,
    ) -> Self {
        let mut log = LogPanel::new();

        if !platform.is_available() {
            log.append("This application needs to be run on a TV device");
        }

        let version = platform.app_version();
        match &version {
            Some(version) => log.append(format!("ver: {version}")),
            None => log.append("application version unavailable"),
        }

        for key in REGISTERED_KEYS {
            if let Err(e) = platform.register_key(key) {
                log.append(format!("could not register key {key}: {e}"));
            }
        }

        let menu = SubtitleMenu::build(media.as_ref());
        let mut playback = Playback::new(media);
        playback.init();
        if config.autoplay {
            playback.play();
        }

        Self {
            playback,
            platform,
            menu,
            screen: ScreenState::new(),
            log,
            version,
            config,
        }
    }

    /// Route a raw remote key code to its action. Unmapped codes are logged
    /// and otherwise ignored.
    pub fn handle_key(&mut self, code: u16) -> Option<Action> {
        let Some(action) = Action::from_key_code(code) else {
            self.log.append(format!("Unhandled key: {code}"));
            return None;
        };

        match action {
            Action::HideApp => {
                self.log.append("RETURN");
                self.platform.hide();
            }
            Action::Play => self.playback.play(),
            Action::Stop => self.playback.stop(),
            Action::Pause => self.playback.pause(),
            Action::ToggleSelectedSubtitle => self.toggle_selected_track(),
            Action::ToggleFullscreen => self.toggle_fullscreen(),
        }

        Some(action)
    }

    /// Red-key quick toggle: flip the currently selected track between
    /// showing and hidden and mirror that one item's active flag. Other
    /// items are left alone; only menu selection clears them. With no
    /// tracks this is a silent no-op.
    fn toggle_selected_track(&mut self) {
        let index = self.menu.selected_index();
        let Some(mode) = self.playback.media().track_mode(index) else {
            return;
        };
        let language = self.playback.media().tracks()[index].language.clone();

        if mode == TrackMode::Showing {
            self.playback
                .media_mut()
                .set_track_mode(index, TrackMode::Hidden);
            self.menu.set_item_active(&language, false);
        } else {
            self.playback
                .media_mut()
                .set_track_mode(index, TrackMode::Showing);
            self.menu.set_item_active(&language, true);
        }
    }

    /// Menu selection path (click/press on a menu item).
    pub fn select_subtitle(&mut self, language: &str) {
        self.menu.select(self.playback.media_mut(), language);
    }

    /// CC button: flip menu visibility and re-sync its fullscreen class.
    pub fn toggle_menu(&mut self) {
        self.menu.toggle_shown();
        self.screen.sync_menu_class();
    }

    /// Fullscreen toggle (Enter key or button).
    pub fn toggle_fullscreen(&mut self) {
        self.screen.toggle(self.menu.is_shown());
    }

    pub fn click_play(&mut self) {
        self.log.append("play Button is clicked.");
        self.playback.play();
    }

    pub fn click_stop(&mut self) {
        self.log.append("stop Button is clicked.");
        self.playback.stop();
    }

    pub fn click_pause(&mut self) {
        self.log.append("pause Button is clicked.");
        self.playback.pause();
    }

    pub fn click_fullscreen(&mut self) {
        self.log.append("fullscreen Button is clicked.");
        self.toggle_fullscreen();
    }

    /// Run one host tick and handle whatever lifecycle events it produced,
    /// in arrival order.
    pub fn pump(&mut self) {
        for event in self.playback.pump() {
            self.on_media_event(event);
        }
    }

    fn on_media_event(&mut self, event: MediaEvent) {
        match event {
            MediaEvent::MetadataLoaded => self.log.append("Meta data loaded."),
            MediaEvent::TimeUpdate(secs) => {
                if self.config.log_time_updates {
                    self.log.append(format!("Current time: {secs}"));
                }
            }
            MediaEvent::Play => self.log.append("Playback started."),
            MediaEvent::Pause => self.log.append("Playback paused."),
            MediaEvent::Ended => {
                self.log.append("Playback finished.");
                // Finished playback returns to the initial loaded state
                self.playback.init();
            }
        }
    }

    /// Application teardown: stop playback before the host hides us.
    pub fn shutdown(&mut self) {
        self.log.append("onUnload");
        self.playback.stop();
    }

    pub fn menu(&self) -> &SubtitleMenu {
        &self.menu
    }

    pub fn screen(&self) -> &ScreenState {
        &self.screen
    }

    pub fn log(&self) -> &LogPanel {
        &self.log
    }

    pub fn clear_log(&mut self) {
        self.log.clear();
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn position(&self) -> f64 {
        self.playback.position()
    }

    pub fn is_paused(&self) -> bool {
        self.playback.is_paused()
    }

    pub fn duration(&self) -> Option<f64> {
        self.playback.duration()
    }

    pub fn media(&self) -> &dyn MediaSurface {
        self.playback.media()
    }
}

#[cfg(test)]
mod tests;
