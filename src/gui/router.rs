// src/gui/router.rs
use crate::config::state::PageKind::{self, *};
use super::pages::{self, Page};

pub static PAGES: &[&'static dyn Page] = &[
    &pages::find::PAGE,
    &pages::provide::PAGE,
];

pub fn all_pages() -> &'static [&'static dyn Page] {
    PAGES
}

pub fn page_for(kind: PageKind) -> &'static dyn Page {
    match kind {
        Find    => &pages::find::PAGE,
        Provide => &pages::provide::PAGE,
    }
}
