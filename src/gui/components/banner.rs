// src/gui/components/banner.rs
//
// Persistent notice when the states/LGAs dataset could not be loaded.
// There is no retry; the user restarts the app.

use eframe::egui::{self, RichText};
use crate::{directory::MSG_LOAD_FAILED, gui::app::App};

use super::pickers::ERROR_RED;

pub fn draw(ui: &mut egui::Ui, app: &App) {
    let Some(detail) = app.load_error.as_deref() else { return };

    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(RichText::new(MSG_LOAD_FAILED).color(ERROR_RED).strong());
        ui.small(detail);
    });
    ui.add_space(6.0);
}
