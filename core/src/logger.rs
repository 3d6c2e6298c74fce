//! On-screen log panel.
//!
//! A line buffer for the visible diagnostics panel. Every appended line is
//! mirrored to the `log` facade, the way the original player mirrored its
//! panel to the console. The scroll offset stays pinned to the newest line.

/// Model of the visible log panel.
#[derive(Debug, Default)]
pub struct LogPanel {
    lines: Vec<String>,
    scroll: usize,
}

impl LogPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line and auto-scroll to it.
    pub fn append(&mut self, msg: impl Into<String>) {
        let msg = msg.into();
        log::info!(target: "tvplayer", "{msg}");
        self.lines.push(msg);
        self.scroll = self.lines.len();
    }

    /// Clear the panel.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.scroll = 0;
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Scroll offset, always pointing just past the newest line.
    pub fn scroll(&self) -> usize {
        self.scroll
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
