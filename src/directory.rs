// src/directory.rs
//
// Request/response boundary used by both frontends:
// submit_search(criteria) and submit_registration(draft).

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::{
    locations::LocationCatalog,
    provider::{Provider, ProviderId},
    query::{self, Criteria},
    store::{ProviderStore, StoreError},
    validate::{self, RegistrationDraft, Rejection},
};

pub const MSG_REGISTERED: &str = "Account created. You are now discoverable.";
pub const MSG_NO_RESULTS: &str = "No providers found for your selection.";
pub const MSG_SAVE_FAILED: &str = "Could not save your details. Please try again.";
pub const MSG_LOAD_FAILED: &str = "Failed to load location data. Check your internet connection and reload.";

#[derive(Debug, Error)]
pub enum RegistrationError {
    #[error("registration rejected: {0}")]
    Rejected(#[from] Rejection),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl RegistrationError {
    pub fn user_message(&self) -> &'static str {
        match self {
            RegistrationError::Rejected(r) => r.user_message(),
            RegistrationError::Store(_) => MSG_SAVE_FAILED,
        }
    }
}

/// The directory core: a store plus the loaded location catalog.
pub struct Directory<S: ProviderStore> {
    store: S,
    catalog: LocationCatalog,
}

impl<S: ProviderStore> Directory<S> {
    pub fn new(store: S, catalog: LocationCatalog) -> Self {
        Self { store, catalog }
    }

    pub fn catalog(&self) -> &LocationCatalog {
        &self.catalog
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn read_all(&self) -> Vec<Provider> {
        self.store.read_all()
    }

    pub fn submit_search(&self, criteria: &Criteria) -> Vec<Provider> {
        let hits = query::filter(&self.store.read_all(), criteria);
        logf!("Search: {:?} → {} result(s)", criteria, hits.len());
        hits
    }

    pub fn submit_registration(&mut self, draft: &RegistrationDraft) -> Result<Provider, RegistrationError> {
        self.submit_registration_at(draft, Utc::now())
    }

    /// As `submit_registration`, with the creation time supplied.
    pub fn submit_registration_at(
        &mut self,
        draft: &RegistrationDraft,
        created_at: DateTime<Utc>,
    ) -> Result<Provider, RegistrationError> {
        let valid = validate::validate(draft)
            .and_then(|v| validate::check_location(&v, &self.catalog).map(|_| v))
            .inspect_err(|r| logd!("Register: rejected ({r}, field={})", r.field()))?;

        let provider = valid.into_provider(ProviderId::generate(), created_at);
        self.store.append(provider.clone()).inspect_err(|e| loge!("Register: {e}"))?;

        logf!("Register: {} as {} in {}", provider.id, provider.labour, provider.location());
        Ok(provider)
    }
}
