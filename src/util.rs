use crate::tv::Television;

/// Maps a toggle state to the label the remote displays for it.
pub fn on_off(flag: bool) -> &'static str {
    if flag {
        "On"
    } else {
        "Off"
    }
}

/// Builds the status line shown under the screen.
///
/// Format: `Power: <On|Off> | Volume: <n> | Mute: <On|Off>`.
pub fn status_line(tv: &Television) -> String {
    format!(
        "Power: {} | Volume: {} | Mute: {}",
        on_off(tv.is_powered()),
        tv.volume(),
        on_off(tv.is_muted())
    )
}

/// File name of the image asset for a channel index.
pub fn channel_asset_name(channel: usize) -> String {
    format!("channel{}.png", channel)
}
