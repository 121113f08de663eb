// Export modules for testing
pub mod about;
pub mod config;
pub mod screen;
pub mod state;
pub mod tv;
pub mod ui;
pub mod util;

// Re-export main types for testing
pub use crate::config::ConfigData;
pub use crate::screen::ChannelAssets;
pub use crate::state::State;
pub use crate::tv::Television;

use std::path::PathBuf;
use std::process::exit;

use eframe::{egui, glow};
use fast_config::Config;

// Constants
pub const PROGRAM_TITLE: &str = "TV Remote";
pub const INITIAL_WIDTH: f32 = 340.0;
pub const INITIAL_HEIGHT: f32 = 600.0;

// Args struct for command line parsing
use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Directory to load channel images from, overriding the configured one
    #[arg(short, long)]
    pub assets_dir: Option<PathBuf>,
}

// The main application struct
pub struct RemoteTool {
    // State
    pub state: State,
    pub tv: Television,

    // Channel visuals shown on the simulated screen
    pub assets: ChannelAssets,

    // Configuration
    pub config: Config<ConfigData>,
    pub assets_dir_override: Option<PathBuf>,
}

impl Default for RemoteTool {
    fn default() -> Self {
        Self::new(None)
    }
}

// Implementations specific to app lifecycle and top-level control
impl RemoteTool {
    pub fn new(assets_dir_override: Option<PathBuf>) -> Self {
        // Determine config path safely
        let config_dir = dirs::config_dir()
            .map(|p| p.to_string_lossy().into_owned())
            .unwrap_or_else(|| ".".to_string()); // Fallback to current dir
        let config_path = format!("{}/remote_tool.json", config_dir);

        // Handle potential config creation error
        let config = match Config::new(&config_path, ConfigData::default()) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("Error creating config file at {}: {}", config_path, e);
                exit(1)
            }
        };

        Self {
            state: State::Initialising,
            tv: Television::new(),
            assets: ChannelAssets::unloaded(),
            config,
            assets_dir_override,
        }
    }

    // Initialization logic called once at the start
    fn init(&mut self) {
        self.reload_assets();
        self.state = State::Running;
        log::info!("Initialization complete. State set to Running.");
    }

    /// Effective assets directory: the CLI override wins over the config file.
    pub fn assets_dir(&self) -> PathBuf {
        self.assets_dir_override
            .clone()
            .unwrap_or_else(|| PathBuf::from(&self.config.data.assets_dir))
    }

    // Graceful shutdown logic
    fn shutdown_app(&mut self) {
        log::info!("Shutdown requested.");

        // Save configuration
        if let Err(e) = self.config.save() {
            log::error!("Failed to save configuration on exit: {}", e);
        } else {
            log::info!("Configuration saved.");
        }

        log::info!("Shutdown complete.");
    }
}

// Main eframe application loop
impl eframe::App for RemoteTool {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| match self.state {
            State::Initialising => {
                // Show a simple "Loading..." message while init runs
                ui.centered_and_justified(|ui| {
                    ui.label("Initialising...");
                });
                // Actual init logic runs once after this frame
                self.init();
            }
            State::About => {
                // Call the UI drawing function from the ui module
                ui::draw_about_screen(self, ui);
            }
            State::Running => {
                // Call the UI drawing function from the ui module
                ui::draw_running_state(self, ui, ctx);
            }
        });
    }

    // Called when the application is about to close
    fn on_exit(&mut self, _gl: Option<&glow::Context>) {
        self.shutdown_app();
    }
}
