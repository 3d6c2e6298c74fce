use ratatui::{
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Gauge},
};

/// Format duration as HH:MM:SS
pub fn format_duration(duration: f64) -> String {
    let total_seconds = duration.round() as u64;
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    if hours > 0 {
        format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{:02}:{:02}", minutes, seconds)
    }
}

/// Progress gauge for the media surface.
pub fn progress_gauge(position: f64, duration: f64, is_paused: bool) -> Gauge<'static> {
    let percent = if duration > 0.0 {
        (position / duration).clamp(0.0, 1.0)
    } else {
        0.0
    };

    let label = format!(
        "{} / {}",
        format_duration(position),
        format_duration(duration)
    );
    let title = if is_paused { "⏸  Paused " } else { "▶  Playing " };

    Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(title))
        .gauge_style(
            Style::default()
                .fg(Color::Blue)
                .bg(Color::Black)
                .add_modifier(Modifier::BOLD),
        )
        .percent((percent * 100.0) as u16)
        .label(label)
}

/// Style for a control button; highlighted when its surface carries the
/// fullscreen presentation class.
pub fn button_style(fullscreen_class: bool) -> Style {
    if fullscreen_class {
        Style::default()
            .fg(Color::Black)
            .bg(Color::White)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn durations_format_with_and_without_hours() {
        assert_eq!(format_duration(0.0), "00:00");
        assert_eq!(format_duration(75.0), "01:15");
        assert_eq!(format_duration(3671.0), "01:01:11");
    }
}
