use std::cell::RefCell;
use std::rc::Rc;

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use tvplayer_core::Player;

use crate::events;
use crate::host::TerminalPlatform;

/// The on-screen control buttons, in bar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Play,
    Stop,
    Pause,
    Subtitles,
    Fullscreen,
}

// App state
pub struct App {
    /// The core player controller
    pub player: Player,
    /// Shared handle to the simulated platform, polled for hide requests
    pub platform: Rc<RefCell<TerminalPlatform>>,
    /// Whether the app should exit
    pub should_quit: bool,
    /// Hit areas of the control buttons, refreshed every draw
    pub button_rects: Vec<(Rect, Button)>,
    /// Hit areas of the visible subtitle menu items (rect, language)
    pub menu_rects: Vec<(Rect, String)>,
}

impl App {
    pub fn new(player: Player, platform: Rc<RefCell<TerminalPlatform>>) -> Self {
        Self {
            player,
            platform,
            should_quit: false,
            button_rects: Vec::new(),
            menu_rects: Vec::new(),
        }
    }

    /// Handle key event
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        log::debug!("Key press detected: {:?}", key.code);

        // Shell-local bindings first; everything else goes through the
        // remote key table.
        match key.code {
            KeyCode::Char('c') => {
                self.player.toggle_menu();
                return;
            }
            KeyCode::Char('x') => {
                self.player.clear_log();
                return;
            }
            _ => {}
        }

        if let Some(code) = events::remote_key_code(&key) {
            self.player.handle_key(code);
        }
    }

    /// Handle mouse event: left clicks hit-test the menu first, then the
    /// control buttons, the way the original wired per-element listeners.
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }

        let column = mouse.column;
        let row = mouse.row;

        if self.player.menu().is_shown() {
            let hit = self
                .menu_rects
                .iter()
                .find(|(rect, _)| hit_test(rect, column, row))
                .map(|(_, language)| language.clone());
            if let Some(language) = hit {
                self.player.select_subtitle(&language);
                return;
            }
        }

        let hit = self
            .button_rects
            .iter()
            .find(|(rect, _)| hit_test(rect, column, row))
            .map(|(_, button)| *button);
        match hit {
            Some(Button::Play) => self.player.click_play(),
            Some(Button::Stop) => self.player.click_stop(),
            Some(Button::Pause) => self.player.click_pause(),
            Some(Button::Subtitles) => self.player.toggle_menu(),
            Some(Button::Fullscreen) => self.player.click_fullscreen(),
            None => {}
        }
    }

    /// Advance the simulated host one tick and react to hide requests.
    pub fn tick(&mut self) {
        self.player.pump();

        if self.platform.borrow().hide_requested {
            self.should_quit = true;
        }
    }
}

fn hit_test(rect: &Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x + rect.width
        && row >= rect.y
        && row < rect.y + rect.height
}
