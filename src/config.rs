use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use crate::tv::CHANNEL_COUNT;

// Configuration data saved to JSON. Presentation preferences only; the
// television state itself is never written to disk.
#[derive(Debug, Serialize, Deserialize)]
pub struct ConfigData {
    #[serde(default = "default_assets_dir")] // Ensure field exists even if missing in JSON
    pub assets_dir: String,
    #[serde(default)] // Use default if missing
    pub channel_names: ChannelNames,
}

// Default values for a new configuration
impl Default for ConfigData {
    fn default() -> Self {
        Self {
            assets_dir: default_assets_dir(),
            channel_names: ChannelNames::default(),
        }
    }
}

fn default_assets_dir() -> String {
    String::from("assets")
}

// Wrapper for the per-channel display names to implement Default and Indexing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelNames {
    data: [String; CHANNEL_COUNT],
}

impl Default for ChannelNames {
    fn default() -> Self {
        Self {
            data: std::array::from_fn(|i| format!("Channel {}", i)),
        }
    }
}

// Allow indexing like `channel_names[i]`
impl Index<usize> for ChannelNames {
    type Output = String;

    fn index(&self, index: usize) -> &String {
        &self.data[index]
    }
}

// Allow mutable indexing like `channel_names[i] = ...`
impl IndexMut<usize> for ChannelNames {
    fn index_mut(&mut self, index: usize) -> &mut String {
        &mut self.data[index]
    }
}
