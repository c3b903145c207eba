// src/gui/app.rs
use std::error::Error;

use eframe::egui;

use crate::{
    config::{
        consts::APP_TITLE,
        state::{AppState, Notice, PageKind, ProviderForm},
    },
    directory::{Directory, MSG_REGISTERED},
    locations,
    provider::Provider,
    store::JsonFileStore,
};

use super::{components, pages::Page, router};

pub fn run(options: eframe::NativeOptions, state: AppState) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(|_cc| Ok(Box::new(App::new(state)))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // None when location data failed to load; both tabs go inert
    pub directory: Option<Directory<JsonFileStore>>,
    pub load_error: Option<String>,

    // last search; None until the first search
    pub results: Option<Vec<Provider>>,

    pub status: String,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let store = JsonFileStore::from_options(&state.options.store);

        let (directory, load_error, status) = match locations::load(&state.options.locations) {
            Ok(catalog) => {
                let dir = Directory::new(store, catalog);
                let n = dir.read_all().len();
                logf!(
                    "Init: states={}, providers={}, store={}",
                    dir.catalog().len(),
                    n,
                    dir.store().path().display()
                );
                (Some(dir), None, format!("{n} provider(s) registered"))
            }
            Err(e) => {
                loge!("Init: location data unavailable: {e}");
                (None, Some(e.to_string()), s!("Location data unavailable"))
            }
        };

        Self {
            state,
            directory,
            load_error,
            results: None,
            status,
        }
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn current_index(&self) -> usize { self.state.gui.current_page_index }

    #[inline]
    pub fn set_current_index(&mut self, idx: usize) { self.state.gui.current_page_index = idx; }

    #[inline]
    pub fn current_page_kind(&self) -> PageKind { self.current_page().kind() }

    #[inline]
    pub fn current_page(&self) -> &'static dyn Page {
        router::all_pages()
            .get(self.current_index())
            .copied()
            .unwrap_or_else(|| router::page_for(PageKind::Find))
    }

    #[inline]
    pub fn status<T: Into<String>>(&mut self, msg: T) {
        self.status = msg.into();
    }

    /* ---------- actions ---------- */

    pub fn search(&mut self) {
        let Some(dir) = self.directory.as_ref() else { return };
        let criteria = self.state.gui.search.criteria();
        let hits = dir.submit_search(&criteria);
        let n = hits.len();
        self.results = Some(hits);
        self.status(format!("{n} result(s)"));
    }

    pub fn register(&mut self) {
        let Some(dir) = self.directory.as_mut() else { return };
        let draft = self.state.gui.provider.draft();

        match dir.submit_registration(&draft) {
            Ok(p) => {
                self.state.gui.provider = ProviderForm::default();
                self.state.gui.provider_notice = Some(Notice::Success(s!(MSG_REGISTERED)));
                self.status(format!("Registered {}", p.name));
            }
            Err(e) => {
                self.state.gui.provider_notice = Some(Notice::Error(s!(e.user_message())));
                self.status(format!("Not registered: {e}"));
            }
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.label(&self.status);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(APP_TITLE);

            components::banner::draw(ui, self);

            components::tabs::draw(ui, self);

            ui.separator();

            let page = self.current_page();
            page.draw(ui, self);
        });
    }
}
