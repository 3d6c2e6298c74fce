//! Subtitle track menu.
//!
//! Built once at player init from the host's track list: a synthetic "Off"
//! entry first, then one item per track in host order. Selection drives the
//! host track modes and keeps at most one item active.

use crate::host::{MediaSurface, TrackMode};

/// One selectable entry in the subtitle menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub id: String,
    /// Empty string for the synthetic "Off" entry
    pub language: String,
    pub label: String,
    pub active: bool,
}

impl MenuItem {
    fn new(id: impl Into<String>, language: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            language: language.into(),
            label: label.into(),
            active: false,
        }
    }
}

/// The subtitle menu panel and its selection state.
#[derive(Debug, Default)]
pub struct SubtitleMenu {
    items: Vec<MenuItem>,
    shown: bool,
    /// Index into the host track list of the last concretely selected track.
    /// Stays at its previous value when "Off" is chosen, so the quick-toggle
    /// key keeps acting on the last real selection.
    selected: usize,
}

impl SubtitleMenu {
    /// Build the menu from the host's track list. "Off" always occupies
    /// position zero; with zero host tracks it is the only entry.
    pub fn build(media: &dyn MediaSurface) -> Self {
        let mut items = vec![MenuItem::new("subtitles-off", "", "Off")];
        for track in media.tracks() {
            items.push(MenuItem::new(
                format!("subtitles-{}", track.language),
                track.language.clone(),
                track.label.clone(),
            ));
        }

        Self {
            items,
            shown: false,
            selected: 0,
        }
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn is_shown(&self) -> bool {
        self.shown
    }

    /// Flip panel visibility; returns the new state so the caller can
    /// re-sync the fullscreen class.
    pub fn toggle_shown(&mut self) -> bool {
        self.shown = !self.shown;
        self.shown
    }

    /// Host track index of the current selection.
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// Select the item with language `language`.
    ///
    /// Deactivates every item, then for each host track sets Showing when
    /// the language matches and Hidden otherwise, activates the matching
    /// item, updates the selected index, and closes the menu. Selecting
    /// "Off" (empty language) hides every track and leaves the index alone.
    pub fn select(&mut self, media: &mut dyn MediaSurface, language: &str) {
        for item in &mut self.items {
            item.active = false;
        }

        let tracks = media.tracks();
        for (i, track) in tracks.iter().enumerate() {
            if !language.is_empty() && track.language == language {
                media.set_track_mode(i, TrackMode::Showing);
                self.selected = i;
            } else {
                media.set_track_mode(i, TrackMode::Hidden);
            }
        }

        if let Some(item) = self.items.iter_mut().find(|item| item.language == language) {
            item.active = true;
        }

        self.shown = false;
    }

    /// Mirror a mode flip done by the quick-toggle key onto the one item
    /// matching `language`. Other items are deliberately left alone; only
    /// menu selection clears them.
    pub fn set_item_active(&mut self, language: &str, active: bool) {
        if let Some(item) = self.items.iter_mut().find(|item| item.language == language) {
            item.active = active;
        }
    }

    /// Number of items with the active flag set.
    pub fn active_count(&self) -> usize {
        self.items.iter().filter(|item| item.active).count()
    }
}
