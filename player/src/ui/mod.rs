pub mod components;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::app::{App, Button};
use components::{button_style, format_duration, progress_gauge};

/// Draw the main UI
pub fn draw(f: &mut Frame, app: &mut App) {
    let size = f.area();
    app.button_rects.clear();
    app.menu_rects.clear();

    // The fullscreen presentation class on the video surface claims the
    // whole frame; the log panel and version label are windowed-only chrome.
    if app.player.screen().video_class() {
        let chunks =
            Layout::vertical([Constraint::Min(3), Constraint::Length(3)]).split(size);
        draw_video(f, app, chunks[0]);
        draw_controls(f, app, chunks[1]);
    } else {
        let chunks = Layout::vertical([
            Constraint::Min(6),
            Constraint::Length(3),
            Constraint::Length(9),
            Constraint::Length(1),
        ])
        .split(size);
        draw_video(f, app, chunks[0]);
        draw_controls(f, app, chunks[1]);
        draw_logs(f, app, chunks[2]);
        draw_version(f, app, chunks[3]);
    }

    if app.player.menu().is_shown() {
        draw_subtitle_menu(f, app, size);
    }
}

fn draw_video(f: &mut Frame, app: &App, area: Rect) {
    let fullscreen = app.player.screen().video_class();
    let block = if fullscreen {
        Block::default().style(Style::default().bg(Color::Black))
    } else {
        Block::default().borders(Borders::ALL).title(" Video ")
    };
    let inner = block.inner(area);
    f.render_widget(block, area);

    if inner.height == 0 {
        return;
    }

    // Showing track summary above the progress gauge
    let showing = app
        .player
        .menu()
        .items()
        .iter()
        .find(|item| item.active && !item.language.is_empty())
        .map(|item| format!("Subtitles: {}", item.label))
        .unwrap_or_else(|| "Subtitles: Off".to_string());

    let rows =
        Layout::vertical([Constraint::Min(1), Constraint::Length(3)]).split(inner);
    let summary = Paragraph::new(Line::from(showing))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(summary, rows[0]);

    let duration = app.player.duration().unwrap_or(0.0);
    f.render_widget(
        progress_gauge(app.player.position(), duration, app.player.is_paused()),
        rows[1],
    );
}

fn draw_controls(f: &mut Frame, app: &mut App, area: Rect) {
    let class = app.player.screen().controls_class();
    let labels: [(&str, Button); 5] = [
        ("Play", Button::Play),
        ("Stop", Button::Stop),
        ("Pause", Button::Pause),
        ("CC", Button::Subtitles),
        (app.player.screen().button_label(), Button::Fullscreen),
    ];

    let constraints = vec![Constraint::Percentage(20); labels.len()];
    let cells = Layout::horizontal(constraints).split(area);

    for (i, (label, button)) in labels.iter().enumerate() {
        let cell = cells[i];
        let widget = Paragraph::new(Line::from(*label))
            .alignment(Alignment::Center)
            .style(button_style(class))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(widget, cell);
        app.button_rects.push((cell, *button));
    }
}

fn draw_subtitle_menu(f: &mut Frame, app: &mut App, size: Rect) {
    let items = app.player.menu().items().to_vec();
    let height = items.len() as u16 + 2;
    let width = 24u16.min(size.width);
    let area = Rect {
        x: size.width.saturating_sub(width + 1),
        y: 1,
        width,
        height: height.min(size.height),
    };

    let class = app.player.screen().menu_class();
    let style = if class {
        Style::default().fg(Color::Black).bg(Color::White)
    } else {
        Style::default()
    };

    f.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Subtitles ")
        .style(style);
    let inner = block.inner(area);
    f.render_widget(block, area);

    for (i, item) in items.iter().enumerate() {
        let y = inner.y + i as u16;
        if y >= inner.y + inner.height {
            break;
        }
        let row = Rect {
            x: inner.x,
            y,
            width: inner.width,
            height: 1,
        };
        let marker = if item.active { "●" } else { " " };
        let line = Paragraph::new(Line::from(format!(" {marker} {}", item.label))).style(
            if item.active {
                style.add_modifier(Modifier::BOLD)
            } else {
                style
            },
        );
        f.render_widget(line, row);
        app.menu_rects.push((row, item.language.clone()));
    }
}

fn draw_logs(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" Logs ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    // Keep the newest line visible, per the panel's pinned scroll
    let lines = app.player.log().lines();
    let visible = inner.height as usize;
    let skip = lines.len().saturating_sub(visible);
    let text: Vec<Line> = lines[skip..].iter().map(|l| Line::from(l.as_str())).collect();
    f.render_widget(Paragraph::new(text), inner);
}

fn draw_version(f: &mut Frame, app: &App, area: Rect) {
    let version = app.player.version().unwrap_or("unknown");
    let position = format_duration(app.player.position());
    let line = Paragraph::new(Line::from(format!("{position}  ver: {version} ")))
        .alignment(Alignment::Right)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(line, area);
}
