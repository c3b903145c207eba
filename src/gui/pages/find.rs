// src/gui/pages/find.rs
use eframe::egui;

use crate::{
    config::state::PageKind::{self, *},
    gui::{app::App, components::{pickers, results}},
};

use super::Page;

pub struct FindPage;
pub static PAGE: FindPage = FindPage;

impl Page for FindPage {
    fn kind(&self) -> PageKind { Find }
    fn title(&self) -> &'static str { "Find a Provider" }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        let Some(dir) = app.directory.as_ref() else {
            ui.label("Search is unavailable until location data loads.");
            return;
        };
        let catalog = dir.catalog();
        let form = &mut app.state.gui.search;
        let mut search_clicked = false;

        ui.horizontal_wrapped(|ui| {
            ui.label("Service:");
            pickers::labour(ui, "search_labour", &mut form.labour, "Any service");

            ui.label("State:");
            if pickers::state(ui, "search_state", &mut form.state, catalog, "Any state") {
                // new state → LGA list repopulates with "All LGAs" selected
                form.lga.clear();
            }

            ui.label("LGA:");
            let lgas = catalog.lgas(&form.state).unwrap_or(&[]);
            pickers::lga(ui, "search_lga", &mut form.lga, lgas, Some("All LGAs"));

            search_clicked = ui.button("Search").clicked();
        });

        if search_clicked {
            app.search();
        }

        ui.add_space(8.0);
        results::draw(ui, app);
    }

    fn on_enter(&self, app: &mut App) {
        // Refresh a previous search so new registrations show up.
        if app.results.is_some() {
            app.search();
        }
    }
}
