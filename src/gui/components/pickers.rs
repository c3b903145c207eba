// src/gui/components/pickers.rs
//
// Dropdowns shared by the Find and Provide tabs. Each returns true when the
// selection changed this frame.

use eframe::egui::{self, Color32};
use crate::{labour::Labour, locations::LocationCatalog};

pub const ERROR_RED: Color32 = Color32::from_rgb(0xb9, 0x1c, 0x1c);
pub const SUCCESS_GREEN: Color32 = Color32::from_rgb(0x06, 0x5f, 0x46);

pub fn labour(ui: &mut egui::Ui, id: &str, value: &mut Option<Labour>, none_label: &str) -> bool {
    let before = *value;
    let shown = value.map(Labour::label).unwrap_or(none_label);

    egui::ComboBox::from_id_salt(id)
        .selected_text(shown)
        .width(200.0)
        .show_ui(ui, |ui| {
            ui.selectable_value(value, None, none_label);
            for l in Labour::ALL {
                ui.selectable_value(value, Some(*l), l.label());
            }
        });

    *value != before
}

pub fn state(
    ui: &mut egui::Ui,
    id: &str,
    value: &mut String,
    catalog: &LocationCatalog,
    none_label: &str,
) -> bool {
    let before = value.clone();
    let shown = if value.is_empty() { s!(none_label) } else { value.clone() };

    egui::ComboBox::from_id_salt(id)
        .selected_text(shown)
        .width(200.0)
        .show_ui(ui, |ui| {
            ui.selectable_value(value, s!(), none_label);
            for st in catalog.states() {
                ui.selectable_value(value, s!(st), st);
            }
        });

    *value != before
}

/// `none_label` = Some("All LGAs") on the Find tab; the Provide tab has no
/// empty choice once a state is picked.
pub fn lga(
    ui: &mut egui::Ui,
    id: &str,
    value: &mut String,
    lgas: &[String],
    none_label: Option<&str>,
) -> bool {
    let before = value.clone();
    let shown = match (value.is_empty(), none_label) {
        (false, _) => value.clone(),
        (true, Some(label)) => s!(label),
        (true, None) => s!(),
    };

    ui.add_enabled_ui(!lgas.is_empty(), |ui| {
        egui::ComboBox::from_id_salt(id)
            .selected_text(shown)
            .width(200.0)
            .show_ui(ui, |ui| {
                if let Some(label) = none_label {
                    ui.selectable_value(value, s!(), label);
                }
                for l in lgas {
                    ui.selectable_value(value, l.clone(), l.as_str());
                }
            });
    });

    *value != before
}
