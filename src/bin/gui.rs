// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use labour_finder::{
    config::{consts::APP_TITLE, options::AppOptions, state::AppState},
    gui, log,
};
use eframe::egui::ViewportBuilder;

fn main() {
    let state = AppState { options: AppOptions::from_env(), ..AppState::default() };
    log::init(state.options.store.dir());

    let size = [state.gui.window_w as f32, state.gui.window_h as f32];
    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_title(APP_TITLE)
            .with_inner_size(size),
        ..Default::default()
    };

    if let Err(e) = gui::run(options, state) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
