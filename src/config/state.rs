// src/config/state.rs
use super::consts::{WINDOW_H, WINDOW_W};
use super::options::AppOptions;
use crate::labour::Labour;
use crate::query::Criteria;
use crate::validate::RegistrationDraft;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PageKind {
    Find,
    Provide,
}

/// Find tab selections. Empty strings mean "any".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchForm {
    pub labour: Option<Labour>,
    pub state: String,
    pub lga: String,
}

impl SearchForm {
    pub fn criteria(&self) -> Criteria {
        let mut c = Criteria::any();
        c.labour = self.labour;
        c.state = Some(self.state.clone()).filter(|s| !s.is_empty());
        c.lga = Some(self.lga.clone()).filter(|s| !s.is_empty());
        c
    }
}

/// Become-a-provider form fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProviderForm {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub labour: Option<Labour>,
    pub state: String,
    pub lga: String,
    pub desc: String,
}

impl ProviderForm {
    pub fn draft(&self) -> RegistrationDraft {
        RegistrationDraft {
            name: self.name.clone(),
            phone: self.phone.clone(),
            email: self.email.clone(),
            labour: self.labour.map(|l| s!(l.label())).unwrap_or_default(),
            state: self.state.clone(),
            lga: self.lga.clone(),
            desc: self.desc.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    Error(String),
    Success(String),
}

#[derive(Clone, Debug)]
pub struct GuiState {
    pub window_w: u32,
    pub window_h: u32,

    /// Active tab index into router::PAGES
    pub current_page_index: usize,

    pub search: SearchForm,
    pub provider: ProviderForm,
    pub provider_notice: Option<Notice>,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            window_w: WINDOW_W,
            window_h: WINDOW_H,
            current_page_index: 0,
            search: SearchForm::default(),
            provider: ProviderForm::default(),
            provider_notice: None,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}
