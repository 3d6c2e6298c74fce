use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::PathBuf;
use std::rc::Rc;
use std::time::{Duration, Instant};

use anyhow::{Result, anyhow};
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tvplayer_core::{Player, PlayerConfig, StubMedia, TrackInfo};

mod app;
mod config;
mod events;
mod host;
mod ui;

use app::App;
use host::{PlatformHandle, TerminalPlatform};

// Debug logger to file for development
fn debug_log(message: &str) {
    if let Ok(mut file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open("tvplayer_debug.log")
    {
        let datetime = chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
        let _ = writeln!(file, "[{}] {}", datetime, message);
    }
}

#[derive(Parser, Debug)]
#[command(name = "tvplayer", about = "TV remote-driven video player shell")]
struct Args {
    /// Simulated media duration in seconds
    #[arg(long, default_value_t = 60.0)]
    duration: f64,

    /// Subtitle track as LANG=LABEL; repeat for multiple tracks
    #[arg(long = "track", value_name = "LANG=LABEL")]
    tracks: Vec<String>,

    /// Start playback immediately after the initial load
    #[arg(long)]
    autoplay: bool,

    /// Mute per-tick time-update lines in the log panel
    #[arg(long)]
    quiet_time_updates: bool,

    /// Path to a JSON config file
    #[arg(long)]
    config: Option<PathBuf>,
}

fn parse_track(spec: &str) -> Result<TrackInfo> {
    let (language, label) = spec
        .split_once('=')
        .ok_or_else(|| anyhow!("Invalid track spec (expected LANG=LABEL): {spec}"))?;
    if language.is_empty() {
        return Err(anyhow!("Track language must not be empty: {spec}"));
    }
    Ok(TrackInfo::new(language, label))
}

fn main() -> Result<()> {
    // Setup logger
    env_logger::init();

    let args = Args::parse();
    debug_log("Application starting");

    // Config file first, CLI flags on top
    let file_config = config::load(args.config.as_deref())?;
    let mut player_config = file_config.apply(PlayerConfig::default());
    if args.autoplay {
        player_config.autoplay = true;
    }
    if args.quiet_time_updates {
        player_config.log_time_updates = false;
    }

    let tracks = if args.tracks.is_empty() {
        vec![
            TrackInfo::new("en", "English"),
            TrackInfo::new("fr", "French"),
        ]
    } else {
        args.tracks
            .iter()
            .map(|spec| parse_track(spec))
            .collect::<Result<Vec<_>>>()?
    };

    let media = StubMedia::new(args.duration, tracks);
    let platform = TerminalPlatform::new();
    let player = Player::new(
        Box::new(media),
        Box::new(PlatformHandle(Rc::clone(&platform))),
        player_config,
    );
    let mut app = App::new(player, platform);
    debug_log(&format!(
        "App initialized, registered keys: {:?}",
        app.platform.borrow().registered()
    ));

    // Set up clean terminal restoration on panic
    let orig_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        let _ = execute!(stdout, LeaveAlternateScreen, DisableMouseCapture);
        debug_log(&format!("PANIC: {}", panic_info));
        orig_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    debug_log("Terminal setup complete");

    let result = run(&mut terminal, &mut app);

    // Unload path: stop playback before leaving, like the device would on hide
    app.player.shutdown();

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    debug_log("Application exiting");

    result
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    let tick_rate = Duration::from_millis(250);
    let mut last_tick = Instant::now();

    while !app.should_quit {
        terminal.draw(|f| ui::draw(f, app))?;

        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            let ev = event::read()?;
            if events::event_utils::is_terminate_event(&ev) {
                debug_log("Quit key pressed, exiting application");
                app.should_quit = true;
                break;
            }
            match ev {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    app.handle_key_event(key);
                }
                Event::Mouse(mouse) => {
                    app.handle_mouse_event(mouse);
                }
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.tick();
            last_tick = Instant::now();
        }
    }

    Ok(())
}
