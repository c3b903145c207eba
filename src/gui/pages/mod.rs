// src/gui/pages/mod.rs
use eframe::egui;

use crate::config::state::PageKind;
use super::app::App;

pub mod find;
pub mod provide;

pub trait Page: Send + Sync + 'static {
    fn title(&self) -> &'static str;
    fn kind(&self) -> PageKind;

    /// Draw the page body under the tab strip. Actions run synchronously
    /// from here (search / register).
    fn draw(&self, ui: &mut egui::Ui, app: &mut App);

    /// Called when the tab becomes active.
    fn on_enter(&self, _app: &mut App) {}
}
