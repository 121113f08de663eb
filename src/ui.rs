use crate::about;
use crate::state::State;
use crate::util::{on_off, status_line};
use crate::{RemoteTool, INITIAL_WIDTH, PROGRAM_TITLE}; // Import main struct
use eframe::egui::{self, Context, RichText, Ui};

const SCREEN_WIDTH: f32 = 300.0;
const SCREEN_HEIGHT: f32 = 200.0;

// Keep UI button handlers associated with RemoteTool
impl RemoteTool {
    // --- Button/Action Handlers (called from draw_running_state) ---

    fn handle_power(&mut self) {
        self.tv.toggle_power();
        log::info!("Power toggled to: {}", on_off(self.tv.is_powered()));
    }

    fn handle_mute(&mut self) {
        self.tv.toggle_mute();
        if self.tv.is_powered() {
            log::debug!("Mute is now: {}", on_off(self.tv.is_muted()));
        } else {
            log::debug!("Mute ignored: power is off.");
        }
    }

    fn handle_volume_up(&mut self) {
        self.tv.volume_up();
        if self.tv.is_powered() {
            log::debug!("Volume is now: {}", self.tv.volume());
        } else {
            log::debug!("Volume up ignored: power is off.");
        }
    }

    fn handle_volume_down(&mut self) {
        self.tv.volume_down();
        if self.tv.is_powered() {
            log::debug!("Volume is now: {}", self.tv.volume());
        } else {
            log::debug!("Volume down ignored: power is off.");
        }
    }

    fn handle_channel_up(&mut self) {
        self.tv.channel_up();
        if self.tv.is_powered() {
            log::debug!("Channel is now: {}", self.tv.channel());
        } else {
            log::debug!("Channel up ignored: power is off.");
        }
    }

    fn handle_channel_down(&mut self) {
        self.tv.channel_down();
        if self.tv.is_powered() {
            log::debug!("Channel is now: {}", self.tv.channel());
        } else {
            log::debug!("Channel down ignored: power is off.");
        }
    }

    // The directional pad is deliberately inert: presses are logged and
    // never reach the television.

    fn handle_up(&self) {
        log::info!("Up button pressed");
    }

    fn handle_down(&self) {
        log::info!("Down button pressed");
    }

    fn handle_left(&self) {
        log::info!("Left button pressed");
    }

    fn handle_right(&self) {
        log::info!("Right button pressed");
    }

    fn handle_ok(&self) {
        log::info!("OK button pressed");
    }
}

// --- UI Drawing Functions ---

pub(crate) fn draw_about_screen(app: &mut RemoteTool, ui: &mut Ui) {
    ui.set_width(INITIAL_WIDTH);
    ui.vertical_centered(|ui| {
        ui.heading(format!("About {}", PROGRAM_TITLE));
        ui.separator();
        for line in about::about() {
            ui.label(line);
        }
        ui.separator();
        if ui.button("OK").clicked() {
            app.state = State::Running;
        }
    });
}

pub(crate) fn draw_running_state(app: &mut RemoteTool, ui: &mut Ui, ctx: &Context) {
    ui.vertical_centered(|ui| {
        draw_screen_section(app, ui, ctx);
        ui.separator();
        draw_command_buttons(app, ui);
        ui.separator();
        draw_dpad_section(app, ui);
        ui.add_space(10.0);
        draw_footer_buttons(app, ui, ctx);
    });
}

/// The simulated screen plus the status line under it.
fn draw_screen_section(app: &mut RemoteTool, ui: &mut Ui, ctx: &Context) {
    let powered = app.tv.is_powered();
    let channel = app.tv.channel() as usize;
    let channel_name = app.config.data.channel_names[channel].clone();

    ui.group(|ui| {
        ui.set_min_size(egui::vec2(SCREEN_WIDTH, SCREEN_HEIGHT));
        ui.set_max_size(egui::vec2(SCREEN_WIDTH, SCREEN_HEIGHT));

        if !powered {
            return; // screen stays blank while the set is off
        }

        match app.assets.texture(channel, ctx) {
            Some(texture) => {
                ui.centered_and_justified(|ui| {
                    ui.add(
                        egui::Image::new(texture)
                            .max_size(egui::vec2(SCREEN_WIDTH, SCREEN_HEIGHT)),
                    );
                });
            }
            None => {
                ui.centered_and_justified(|ui| {
                    ui.label("Channel image not available");
                });
            }
        }
    });

    if powered {
        ui.label(RichText::new(channel_name).strong());
    }
    ui.label(status_line(&app.tv));
    ui.add_space(5.0);
}

/// Power/mute, volume, and channel button rows.
fn draw_command_buttons(app: &mut RemoteTool, ui: &mut Ui) {
    ui.horizontal(|ui| {
        if ui.button(RichText::new("⏻").size(20.0)).clicked() {
            app.handle_power();
        }
        if ui.button(RichText::new("🔇").size(20.0)).clicked() {
            app.handle_mute();
        }
    });

    ui.horizontal(|ui| {
        if ui.button("Volume +").clicked() {
            app.handle_volume_up();
        }
        if ui.button("Volume -").clicked() {
            app.handle_volume_down();
        }
    });

    ui.horizontal(|ui| {
        if ui.button("Channel +").clicked() {
            app.handle_channel_up();
        }
        if ui.button("Channel -").clicked() {
            app.handle_channel_down();
        }
    });
}

/// The inert directional pad.
fn draw_dpad_section(app: &mut RemoteTool, ui: &mut Ui) {
    ui.vertical_centered(|ui| {
        if ui.button("↑").clicked() {
            app.handle_up();
        }
        ui.horizontal(|ui| {
            if ui.button("←").clicked() {
                app.handle_left();
            }
            if ui.button("OK").clicked() {
                app.handle_ok();
            }
            if ui.button("→").clicked() {
                app.handle_right();
            }
        });
        if ui.button("↓").clicked() {
            app.handle_down();
        }
    });
}

fn draw_footer_buttons(app: &mut RemoteTool, ui: &mut Ui, ctx: &Context) {
    ui.horizontal(|ui| {
        if ui.button("Reload Images").clicked() {
            log::info!("Reloading channel images manually.");
            app.reload_assets();
        }

        if ui.button("About").clicked() {
            app.state = State::About;
        }

        if ui.button("Exit").clicked() {
            // Ask eframe to close the window. `on_exit` will be called.
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    });
}
