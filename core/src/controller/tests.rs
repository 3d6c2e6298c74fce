use std::cell::RefCell;
use std::rc::Rc;

use super::*;
use crate::host::stub::{StubMedia, StubPlatform};
use crate::host::TrackInfo;
use crate::input::key_code;

fn two_track_player(config: PlayerConfig) -> Player {
    let media = StubMedia::new(
        60.0,
        vec![
            TrackInfo::new("en", "English"),
            TrackInfo::new("fr", "French"),
        ],
    );
    Player::new(
        Box::new(media),
        Box::new(StubPlatform::new()),
        config,
    )
}

#[test]
fn startup_registers_remote_keys_and_displays_version() {
    let platform = Rc::new(RefCell::new(StubPlatform::new().with_version("9.9.9")));
    let player = Player::new(
        Box::new(StubMedia::new(60.0, Vec::new())),
        Box::new(Rc::clone(&platform)),
        PlayerConfig::default(),
    );

    assert_eq!(
        platform.borrow().registered_keys,
        ["MediaPause", "MediaPlay", "MediaStop", "ColorF0Red"]
    );
    assert_eq!(player.version(), Some("9.9.9"));
    assert!(player.log().lines().iter().any(|l| l == "ver: 9.9.9"));
}

#[test]
fn missing_platform_warns_but_startup_continues() {
    let mut player = Player::new(
        Box::new(StubMedia::new(60.0, Vec::new())),
        Box::new(StubPlatform::unavailable()),
        PlayerConfig::default(),
    );

    assert!(
        player
            .log()
            .lines()
            .iter()
            .any(|l| l.contains("needs to be run on a TV device"))
    );

    // The player still dispatches events normally
    player.handle_key(key_code::PLAY);
    assert!(!player.is_paused());
}

#[test]
fn return_key_logs_and_hides_the_application() {
    let platform = Rc::new(RefCell::new(StubPlatform::new()));
    let mut player = Player::new(
        Box::new(StubMedia::new(60.0, Vec::new())),
        Box::new(Rc::clone(&platform)),
        PlayerConfig::default(),
    );

    player.handle_key(key_code::RETURN);

    assert_eq!(platform.borrow().hide_calls, 1);
    assert!(player.log().lines().iter().any(|l| l == "RETURN"));
}

#[test]
fn unmapped_key_logs_once_and_changes_nothing() {
    let mut player = two_track_player(PlayerConfig::default());
    player.select_subtitle("en");

    let lines_before = player.log().lines().len();
    let paused_before = player.is_paused();
    let position_before = player.position();
    let screen_before = player.screen().clone();

    let action = player.handle_key(999);

    assert_eq!(action, None);
    assert_eq!(player.log().lines().len(), lines_before + 1);
    assert!(player.log().lines().last().unwrap().contains("999"));
    assert_eq!(player.is_paused(), paused_before);
    assert_eq!(player.position(), position_before);
    assert_eq!(player.screen(), &screen_before);
    assert_eq!(player.menu().active_count(), 1);
}

#[test]
fn stop_key_leaves_position_zero_and_not_playing() {
    let mut player = two_track_player(PlayerConfig::default());

    player.handle_key(key_code::PLAY);
    for _ in 0..8 {
        player.pump();
    }
    assert!(player.position() > 0.0);

    player.handle_key(key_code::STOP);

    assert_eq!(player.position(), 0.0);
    assert!(player.is_paused());
}

#[test]
fn selecting_french_matches_the_observable_scenario() {
    let mut player = two_track_player(PlayerConfig::default());
    player.toggle_menu();
    assert!(player.menu().is_shown());

    player.select_subtitle("fr");

    assert_eq!(player.media().track_mode(0), Some(TrackMode::Hidden));
    assert_eq!(player.media().track_mode(1), Some(TrackMode::Showing));
    assert_eq!(player.menu().selected_index(), 1);
    let items = player.menu().items();
    assert!(!items[0].active, "Off item");
    assert!(!items[1].active, "English item");
    assert!(items[2].active, "French item");
    assert!(!player.menu().is_shown());
}

#[test]
fn red_key_double_toggle_restores_mode_and_flag() {
    let mut player = two_track_player(PlayerConfig::default());
    player.select_subtitle("fr");

    player.handle_key(key_code::COLOR_RED);
    assert_eq!(player.media().track_mode(1), Some(TrackMode::Hidden));
    assert!(!player.menu().items()[2].active);

    player.handle_key(key_code::COLOR_RED);
    assert_eq!(player.media().track_mode(1), Some(TrackMode::Showing));
    assert!(player.menu().items()[2].active);
}

// Kept behavior choice: the red-key path mirrors only the selected track's
// item and never deactivates the others, unlike menu selection. Toggling
// after an "Off" selection therefore leaves two active items.
#[test]
fn red_key_leaves_other_item_flags_alone() {
    let mut player = two_track_player(PlayerConfig::default());
    player.select_subtitle("fr");
    player.select_subtitle("");
    assert!(player.menu().items()[0].active);
    assert_eq!(player.menu().selected_index(), 1);

    player.handle_key(key_code::COLOR_RED);

    assert_eq!(player.media().track_mode(1), Some(TrackMode::Showing));
    assert!(player.menu().items()[2].active);
    assert!(player.menu().items()[0].active, "Off flag is not cleared");
    assert_eq!(player.menu().active_count(), 2);
}

#[test]
fn red_key_with_zero_tracks_is_a_silent_no_op() {
    let mut player = Player::new(
        Box::new(StubMedia::new(60.0, Vec::new())),
        Box::new(StubPlatform::new()),
        PlayerConfig::default(),
    );
    let lines_before = player.log().lines().len();

    player.handle_key(key_code::COLOR_RED);

    assert_eq!(player.menu().items().len(), 1);
    assert_eq!(player.log().lines().len(), lines_before);
}

#[test]
fn fullscreen_double_toggle_restores_classes_and_label() {
    let mut player = two_track_player(PlayerConfig::default());
    player.toggle_menu();
    let before = player.screen().clone();
    assert_eq!(player.screen().button_label(), "FullScreen");

    player.handle_key(key_code::ENTER);
    assert!(player.screen().is_fullscreen());
    assert!(player.screen().video_class());
    assert!(player.screen().controls_class());
    assert!(player.screen().menu_class());
    assert_eq!(player.screen().button_label(), "ReturnScreen");

    player.handle_key(key_code::ENTER);
    assert_eq!(player.screen(), &before);
    assert_eq!(player.screen().button_label(), "FullScreen");
}

#[test]
fn menu_shown_mid_fullscreen_picks_up_the_class() {
    let mut player = two_track_player(PlayerConfig::default());

    // Fullscreen with the menu hidden leaves the menu class alone
    player.toggle_fullscreen();
    assert!(!player.screen().menu_class());

    // Showing the menu re-syncs it to the flag
    player.toggle_menu();
    assert!(player.screen().menu_class());

    // Hiding re-syncs too; the class simply tracks the flag on CC clicks
    player.toggle_fullscreen();
    player.toggle_menu();
    assert!(!player.screen().menu_class());
}

#[test]
fn ended_media_reloads_to_initial_state() {
    let media = StubMedia::new(1.0, Vec::new()).with_tick(0.6);
    let mut player = Player::new(
        Box::new(media),
        Box::new(StubPlatform::new()),
        PlayerConfig {
            log_time_updates: false,
            ..Default::default()
        },
    );

    player.handle_key(key_code::PLAY);
    for _ in 0..4 {
        player.pump();
    }

    assert!(
        player
            .log()
            .lines()
            .iter()
            .any(|l| l == "Playback finished.")
    );
    assert_eq!(player.position(), 0.0);
    assert!(player.is_paused());
}

#[test]
fn pump_logs_lifecycle_events_in_arrival_order() {
    let mut player = two_track_player(PlayerConfig::default());
    player.clear_log();

    player.handle_key(key_code::PLAY);
    player.pump();
    player.handle_key(key_code::PAUSE);
    player.pump();

    let lines = player.log().lines();
    let started = lines.iter().position(|l| l == "Playback started.");
    let paused = lines.iter().position(|l| l == "Playback paused.");
    assert!(started.is_some());
    assert!(paused.is_some());
    assert!(started < paused);
}

#[test]
fn autoplay_config_starts_playback_after_init() {
    let player = two_track_player(PlayerConfig {
        autoplay: true,
        ..Default::default()
    });
    assert!(!player.is_paused());
}

#[test]
fn shutdown_stops_playback() {
    let mut player = two_track_player(PlayerConfig::default());
    player.handle_key(key_code::PLAY);
    for _ in 0..4 {
        player.pump();
    }

    player.shutdown();

    assert_eq!(player.position(), 0.0);
    assert!(player.is_paused());
    assert!(player.log().lines().iter().any(|l| l == "onUnload"));
}

#[test]
fn button_clicks_log_and_act() {
    let mut player = two_track_player(PlayerConfig::default());
    player.clear_log();

    player.click_play();
    assert!(!player.is_paused());
    player.click_pause();
    assert!(player.is_paused());
    player.click_fullscreen();
    assert!(player.screen().is_fullscreen());
    player.click_stop();
    assert_eq!(player.position(), 0.0);

    let lines = player.log().lines();
    for expected in [
        "play Button is clicked.",
        "pause Button is clicked.",
        "fullscreen Button is clicked.",
        "stop Button is clicked.",
    ] {
        assert!(lines.iter().any(|l| l == expected), "missing {expected:?}");
    }
}
