use std::fs;
use std::path::Path;

use tv_remote_tool::config::{ChannelNames, ConfigData};
use tv_remote_tool::screen::ChannelAssets;
use tv_remote_tool::state::State;
use tv_remote_tool::tv::{
    Television, CHANNEL_COUNT, MAX_CHANNEL, MAX_VOLUME, MIN_CHANNEL, MIN_VOLUME,
};
use tv_remote_tool::util::{channel_asset_name, on_off, status_line};

#[test]
fn test_television_initial_state() {
    // A new television is off, unmuted, at minimum volume and first channel
    let tv = Television::new();

    assert!(!tv.is_powered());
    assert!(!tv.is_muted());
    assert_eq!(tv.volume(), MIN_VOLUME);
    assert_eq!(tv.channel(), MIN_CHANNEL);
}

#[test]
fn test_power_toggle() {
    let mut tv = Television::new();

    tv.toggle_power();
    assert!(tv.is_powered());

    tv.toggle_power();
    assert!(!tv.is_powered());
}

#[test]
fn test_operations_ignored_while_off() {
    // Every operation except power is a no-op while the set is off
    let mut tv = Television::new();

    tv.toggle_mute();
    tv.channel_up();
    tv.channel_down();
    tv.volume_up();
    tv.volume_down();

    assert_eq!(tv, Television::new());
}

#[test]
fn test_mute_toggle_while_on() {
    let mut tv = Television::new();
    tv.toggle_power();

    tv.toggle_mute();
    assert!(tv.is_muted());

    tv.toggle_mute();
    assert!(!tv.is_muted());
}

#[test]
fn test_channel_wraps_up_at_max() {
    let mut tv = Television::new();
    tv.toggle_power();

    for _ in 0..MAX_CHANNEL {
        tv.channel_up();
    }
    assert_eq!(tv.channel(), MAX_CHANNEL);

    tv.channel_up();
    assert_eq!(tv.channel(), MIN_CHANNEL);
}

#[test]
fn test_channel_wraps_down_at_min() {
    let mut tv = Television::new();
    tv.toggle_power();

    assert_eq!(tv.channel(), MIN_CHANNEL);
    tv.channel_down();
    assert_eq!(tv.channel(), MAX_CHANNEL);
}

#[test]
fn test_volume_saturates_at_max() {
    // Six presses from zero stop at five, not six
    let mut tv = Television::new();
    tv.toggle_power();

    for _ in 0..6 {
        tv.volume_up();
    }
    assert_eq!(tv.volume(), MAX_VOLUME);

    tv.volume_up();
    assert_eq!(tv.volume(), MAX_VOLUME);
}

#[test]
fn test_volume_saturates_at_min() {
    let mut tv = Television::new();
    tv.toggle_power();

    assert_eq!(tv.volume(), MIN_VOLUME);
    tv.volume_down();
    assert_eq!(tv.volume(), MIN_VOLUME);
}

#[test]
fn test_volume_adjustment_clears_mute() {
    let mut tv = Television::new();
    tv.toggle_power();

    tv.toggle_mute();
    assert!(tv.is_muted());
    tv.volume_up();
    assert!(!tv.is_muted());
    assert_eq!(tv.volume(), 1);

    tv.toggle_mute();
    assert!(tv.is_muted());
    tv.volume_down();
    assert!(!tv.is_muted());
    assert_eq!(tv.volume(), 0);

    // Clearing happens even when the volume itself is already at a bound
    tv.toggle_mute();
    tv.volume_down();
    assert!(!tv.is_muted());
    assert_eq!(tv.volume(), MIN_VOLUME);
}

#[test]
fn test_bounds_hold_after_every_step() {
    // Exercise a long mixed sequence and check the ranges after each press
    let mut tv = Television::new();

    let ops: [fn(&mut Television); 6] = [
        Television::toggle_power,
        Television::toggle_mute,
        Television::channel_up,
        Television::channel_down,
        Television::volume_up,
        Television::volume_down,
    ];

    for step in 0..500 {
        ops[step % ops.len()](&mut tv);
        // The counters are unsigned, so only the upper bounds can be violated
        assert!(tv.volume() <= MAX_VOLUME);
        assert!(tv.channel() <= MAX_CHANNEL);
    }
}

#[test]
fn test_state_survives_power_cycle() {
    // Power off does not reset volume or channel; it only gates commands
    let mut tv = Television::new();
    tv.toggle_power();
    tv.volume_up();
    tv.volume_up();
    tv.channel_up();

    tv.toggle_power();
    tv.toggle_power();

    assert_eq!(tv.volume(), 2);
    assert_eq!(tv.channel(), 1);
}

#[test]
fn test_config_data_default() {
    // Test that the default ConfigData is created correctly
    let config = ConfigData::default();

    assert_eq!(config.assets_dir, "assets");
    for i in 0..CHANNEL_COUNT {
        assert_eq!(config.channel_names[i], format!("Channel {}", i));
    }
}

#[test]
fn test_channel_names_indexing() {
    let mut names = ChannelNames::default();

    names[0] = "News".to_string();
    names[4] = "Movies".to_string();

    assert_eq!(names[0], "News");
    assert_eq!(names[4], "Movies");

    // Check that other values remain unchanged
    for i in 1..4 {
        assert_eq!(names[i], format!("Channel {}", i));
    }
}

#[test]
fn test_state_enum() {
    // Test that the State enum has the expected variants
    let initialising = State::Initialising;
    let about = State::About;
    let running = State::Running;

    assert_ne!(initialising, about);
    assert_ne!(initialising, running);
    assert_ne!(about, running);

    assert_eq!(initialising, State::Initialising);
    assert_eq!(about, State::About);
    assert_eq!(running, State::Running);
}

#[test]
fn test_on_off_labels() {
    assert_eq!(on_off(true), "On");
    assert_eq!(on_off(false), "Off");
}

#[test]
fn test_status_line_format() {
    let mut tv = Television::new();
    assert_eq!(status_line(&tv), "Power: Off | Volume: 0 | Mute: Off");

    tv.toggle_power();
    tv.volume_up();
    tv.volume_up();
    tv.volume_up();
    tv.toggle_mute();
    assert_eq!(status_line(&tv), "Power: On | Volume: 3 | Mute: On");
}

#[test]
fn test_channel_asset_names() {
    assert_eq!(channel_asset_name(0), "channel0.png");
    assert_eq!(channel_asset_name(4), "channel4.png");
}

#[test]
fn test_assets_missing_directory() {
    // Loading from a directory that does not exist must not fail; every
    // channel is simply left without a visual
    let assets = ChannelAssets::load(Path::new("definitely/not/a/real/dir"));

    assert_eq!(assets.available_count(), 0);
    for channel in 0..CHANNEL_COUNT {
        assert!(!assets.available(channel));
    }
    // Out-of-range lookups report unavailable rather than panicking
    assert!(!assets.available(CHANNEL_COUNT));
}

#[test]
fn test_assets_unloaded() {
    let assets = ChannelAssets::unloaded();
    assert_eq!(assets.available_count(), 0);
}

#[test]
fn test_assets_load_valid_image() {
    // Write one real PNG and check that exactly that slot becomes available
    let dir = std::env::temp_dir().join("remote_tool_valid_image_test");
    fs::create_dir_all(&dir).unwrap();
    let img = image::RgbaImage::from_pixel(8, 8, image::Rgba([10, 20, 30, 255]));
    img.save(dir.join(channel_asset_name(2))).unwrap();

    let assets = ChannelAssets::load(&dir);

    assert_eq!(assets.dir(), dir.as_path());
    assert!(assets.available(2));
    assert_eq!(assets.available_count(), 1);
    assert!(!assets.available(0));

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_assets_invalid_image() {
    // A file that is not a PNG is treated the same as a missing one
    let dir = std::env::temp_dir().join("remote_tool_invalid_image_test");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(channel_asset_name(1)), b"not an image").unwrap();

    let assets = ChannelAssets::load(&dir);

    assert!(!assets.available(1));
    assert_eq!(assets.available_count(), 0);

    fs::remove_dir_all(&dir).ok();
}
