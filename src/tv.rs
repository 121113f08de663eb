// The simulated television: power, mute, and two bounded counters.

pub const MIN_VOLUME: u8 = 0;
pub const MAX_VOLUME: u8 = 5;
pub const MIN_CHANNEL: u8 = 0;
pub const MAX_CHANNEL: u8 = 4;

/// Number of selectable channels (and channel image slots).
pub const CHANNEL_COUNT: usize = MAX_CHANNEL as usize + 1;

/// Television state. Fields are private; the UI reads them through the
/// accessors below and mutates them only through the operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Television {
    powered: bool,
    muted: bool,
    volume: u8,
    channel: u8,
}

impl Default for Television {
    fn default() -> Self {
        Self {
            powered: false,
            muted: false,
            volume: MIN_VOLUME,
            channel: MIN_CHANNEL,
        }
    }
}

impl Television {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggles the power. The only operation that works while the set is off.
    pub fn toggle_power(&mut self) {
        self.powered = !self.powered;
    }

    /// Toggles mute. Ignored while the set is off.
    pub fn toggle_mute(&mut self) {
        if self.powered {
            self.muted = !self.muted;
        }
    }

    /// Steps the channel up, wrapping from the last channel to the first.
    pub fn channel_up(&mut self) {
        if self.powered {
            self.channel = if self.channel == MAX_CHANNEL {
                MIN_CHANNEL
            } else {
                self.channel + 1
            };
        }
    }

    /// Steps the channel down, wrapping from the first channel to the last.
    pub fn channel_down(&mut self) {
        if self.powered {
            self.channel = if self.channel == MIN_CHANNEL {
                MAX_CHANNEL
            } else {
                self.channel - 1
            };
        }
    }

    /// Raises the volume by one, holding at the maximum. Clears mute first.
    pub fn volume_up(&mut self) {
        if self.powered {
            self.muted = false;
            if self.volume < MAX_VOLUME {
                self.volume += 1;
            }
        }
    }

    /// Lowers the volume by one, holding at the minimum. Clears mute first.
    pub fn volume_down(&mut self) {
        if self.powered {
            self.muted = false;
            if self.volume > MIN_VOLUME {
                self.volume -= 1;
            }
        }
    }

    // --- Accessors ---

    pub fn is_powered(&self) -> bool {
        self.powered
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn volume(&self) -> u8 {
        self.volume
    }

    pub fn channel(&self) -> u8 {
        self.channel
    }
}
