// src/gui/components/results.rs
//
// Search results table. Purely a view over app.results.

use eframe::egui::{self, RichText};
use egui_extras::{Column, TableBuilder};

use crate::{directory::MSG_NO_RESULTS, gui::app::App};

const HEADERS: [&str; 6] = ["Name", "Service", "Location", "Phone", "About", ""];

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let Some(results) = app.results.as_ref() else { return };

    if results.is_empty() {
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(MSG_NO_RESULTS);
        });
        return;
    }

    let mut copied: Option<String> = None;

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .column(Column::initial(160.0).at_least(80.0))
        .column(Column::initial(120.0))
        .column(Column::initial(160.0))
        .column(Column::initial(120.0))
        .column(Column::remainder().at_least(120.0))
        .column(Column::auto())
        .header(22.0, |mut header| {
            for h in HEADERS {
                header.col(|ui| { ui.strong(h); });
            }
        })
        .body(|mut body| {
            for p in results {
                body.row(24.0, |mut row| {
                    row.col(|ui| { ui.label(RichText::new(&p.name).strong()); });
                    row.col(|ui| { ui.label(p.labour.label()); });
                    row.col(|ui| { ui.label(p.location()); });
                    row.col(|ui| { ui.label(&p.phone); });
                    row.col(|ui| {
                        ui.add(egui::Label::new(&p.desc).truncate());
                    });
                    row.col(|ui| {
                        ui.horizontal(|ui| {
                            ui.hyperlink_to("Call", p.tel_uri());
                            if let Some(mailto) = p.mailto_uri() {
                                ui.hyperlink_to("Email", mailto);
                            }
                            if ui.small_button("Copy").on_hover_text("Copy phone number").clicked() {
                                ui.ctx().copy_text(p.phone.clone());
                                copied = Some(p.name.clone());
                            }
                        });
                    });
                });
            }
        });

    if let Some(name) = copied {
        logd!("UI: Copied phone for {name}");
        app.status(format!("Copied {name}'s phone number"));
    }
}
