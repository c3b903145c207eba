// src/gui/pages/provide.rs
use eframe::egui::{self, RichText};

use crate::{
    config::state::{Notice, PageKind::{self, *}},
    gui::{app::App, components::pickers::{self, ERROR_RED, SUCCESS_GREEN}},
};

use super::Page;

pub struct ProvidePage;
pub static PAGE: ProvidePage = ProvidePage;

impl Page for ProvidePage {
    fn kind(&self) -> PageKind { Provide }
    fn title(&self) -> &'static str { "Become a Provider" }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        let Some(dir) = app.directory.as_ref() else {
            ui.label("Registration is unavailable until location data loads.");
            return;
        };
        let catalog = dir.catalog();
        let form = &mut app.state.gui.provider;
        let mut submit_clicked = false;

        egui::Grid::new("provider_form")
            .num_columns(2)
            .spacing([12.0, 6.0])
            .show(ui, |ui| {
                ui.label("Full name *");
                ui.text_edit_singleline(&mut form.name);
                ui.end_row();

                ui.label("Phone *");
                ui.add(egui::TextEdit::singleline(&mut form.phone).hint_text("e.g. 0801 234 5678"));
                ui.end_row();

                ui.label("Email");
                ui.text_edit_singleline(&mut form.email);
                ui.end_row();

                ui.label("Service *");
                pickers::labour(ui, "prov_labour", &mut form.labour, "Select labour");
                ui.end_row();

                ui.label("State *");
                if pickers::state(ui, "prov_state", &mut form.state, catalog, "Select state") {
                    // no "all" option here: the first LGA becomes the selection
                    form.lga = catalog
                        .lgas(&form.state)
                        .and_then(|l| l.first())
                        .cloned()
                        .unwrap_or_default();
                }
                ui.end_row();

                ui.label("LGA *");
                let lgas = catalog.lgas(&form.state).unwrap_or(&[]);
                pickers::lga(ui, "prov_lga", &mut form.lga, lgas, None);
                ui.end_row();

                ui.label("About your service");
                ui.text_edit_multiline(&mut form.desc);
                ui.end_row();
            });

        ui.add_space(6.0);
        ui.horizontal(|ui| {
            submit_clicked = ui.button("Create account").clicked();

            match &app.state.gui.provider_notice {
                Some(Notice::Error(msg)) => { ui.label(RichText::new(msg).color(ERROR_RED)); }
                Some(Notice::Success(msg)) => { ui.label(RichText::new(msg).color(SUCCESS_GREEN)); }
                None => {}
            }
        });

        if submit_clicked {
            app.register();
        }
    }
}
