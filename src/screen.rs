use eframe::egui;
use log::{info, warn};
use std::path::{Path, PathBuf};

use crate::tv::CHANNEL_COUNT;
use crate::util::channel_asset_name;

// One image slot per channel. `pixels` holds the decoded RGBA data until it
// is uploaded to the GPU; after that only `texture` is kept.
#[derive(Default)]
struct ChannelSlot {
    pixels: Option<egui::ColorImage>,
    texture: Option<egui::TextureHandle>,
}

impl ChannelSlot {
    fn available(&self) -> bool {
        self.pixels.is_some() || self.texture.is_some()
    }
}

/// The set of channel images shown on the simulated screen.
///
/// Loaded once at startup from the assets directory. A missing or unreadable
/// file logs a warning and leaves that channel without a visual; selecting it
/// later shows placeholder text instead.
pub struct ChannelAssets {
    dir: PathBuf,
    slots: Vec<ChannelSlot>,
}

impl ChannelAssets {
    /// Loads `channel0.png` .. `channel4.png` from `dir`.
    pub fn load(dir: &Path) -> Self {
        info!("Loading channel images from {}...", dir.display());

        let mut slots = Vec::with_capacity(CHANNEL_COUNT);
        for channel in 0..CHANNEL_COUNT {
            let path = dir.join(channel_asset_name(channel));
            slots.push(ChannelSlot {
                pixels: load_channel_image(&path),
                texture: None,
            });
        }

        let assets = Self {
            dir: dir.to_path_buf(),
            slots,
        };
        info!(
            "Channel image load complete. {}/{} available.",
            assets.available_count(),
            CHANNEL_COUNT
        );
        assets
    }

    /// An empty set with every slot unavailable. Used before `init` has run.
    pub fn unloaded() -> Self {
        Self {
            dir: PathBuf::new(),
            slots: (0..CHANNEL_COUNT).map(|_| ChannelSlot::default()).collect(),
        }
    }

    /// Whether a visual exists for `channel`.
    pub fn available(&self, channel: usize) -> bool {
        self.slots.get(channel).is_some_and(ChannelSlot::available)
    }

    pub fn available_count(&self) -> usize {
        self.slots.iter().filter(|s| s.available()).count()
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Returns the texture for `channel`, uploading the decoded pixels on
    /// first use. `None` if the image was missing or unreadable.
    pub fn texture(
        &mut self,
        channel: usize,
        ctx: &egui::Context,
    ) -> Option<&egui::TextureHandle> {
        let slot = self.slots.get_mut(channel)?;
        if slot.texture.is_none() {
            let pixels = slot.pixels.take()?;
            slot.texture = Some(ctx.load_texture(
                channel_asset_name(channel),
                pixels,
                egui::TextureOptions::LINEAR,
            ));
        }
        slot.texture.as_ref()
    }
}

// Asset refresh, triggered from the UI's "Reload Images" button.
impl crate::RemoteTool {
    pub(crate) fn reload_assets(&mut self) {
        let dir = self.assets_dir();
        self.assets = ChannelAssets::load(&dir);
    }
}

/// Decodes a single channel image, logging a warning if it cannot be used.
fn load_channel_image(path: &Path) -> Option<egui::ColorImage> {
    match image::open(path) {
        Ok(decoded) => {
            let rgba = decoded.to_rgba8();
            let (width, height) = rgba.dimensions();
            info!(
                "Loaded channel image {} ({}x{})",
                path.display(),
                width,
                height
            );
            Some(egui::ColorImage::from_rgba_unmultiplied(
                [width as usize, height as usize],
                rgba.as_raw(),
            ))
        }
        Err(e) => {
            warn!(
                "Warning: {} not found or invalid: {}",
                path.display(),
                e
            );
            None
        }
    }
}
