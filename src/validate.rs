// src/validate.rs
//
// Registration gate. Pure checks, first failure wins, nothing is written here.

use std::fmt;

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::config::consts::{PHONE_MAX_DIGITS, PHONE_MIN_DIGITS};
use crate::core::sanitize::digits_only;
use crate::labour::Labour;
use crate::locations::LocationCatalog;
use crate::provider::{Provider, ProviderId};

/// Raw form input, exactly as typed/selected.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistrationDraft {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub labour: String,
    pub state: String,
    pub lga: String,
    pub desc: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Phone,
    Labour,
    State,
    Lga,
}

impl Field {
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Phone => "phone",
            Field::Labour => "labour",
            Field::State => "state",
            Field::Lga => "lga",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("missing required field")]
    MissingRequiredField(Field),

    #[error("invalid phone number")]
    InvalidPhone,

    #[error("unknown service type")]
    UnknownLabour,

    #[error("unknown state")]
    UnknownState,

    #[error("unknown local government area")]
    UnknownLga,
}

impl Rejection {
    /// Text shown next to the registration form.
    pub fn user_message(&self) -> &'static str {
        match self {
            Rejection::MissingRequiredField(_) => "Please fill all required fields.",
            Rejection::InvalidPhone => "Enter a valid phone number.",
            Rejection::UnknownLabour => "Select a service type from the list.",
            Rejection::UnknownState => "Select a state from the list.",
            Rejection::UnknownLga => "Select an LGA from the chosen state.",
        }
    }

    /// The offending field, for highlighting.
    pub fn field(&self) -> Field {
        match self {
            Rejection::MissingRequiredField(f) => *f,
            Rejection::InvalidPhone => Field::Phone,
            Rejection::UnknownLabour => Field::Labour,
            Rejection::UnknownState => Field::State,
            Rejection::UnknownLga => Field::Lga,
        }
    }
}

/// A draft that passed `validate`: trimmed, with a typed service label.
/// Only `validate` can build one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidDraft {
    name: String,
    phone: String,
    email: String,
    labour: Labour,
    state: String,
    lga: String,
    desc: String,
}

impl ValidDraft {
    pub fn phone(&self) -> &str { &self.phone }
    pub fn labour(&self) -> Labour { self.labour }
    pub fn state(&self) -> &str { &self.state }
    pub fn lga(&self) -> &str { &self.lga }

    /// Stamp id and creation time; the result is the immutable record.
    pub fn into_provider(self, id: ProviderId, created_at: DateTime<Utc>) -> Provider {
        Provider {
            id,
            name: self.name,
            phone: self.phone,
            email: self.email,
            labour: self.labour,
            state: self.state,
            lga: self.lga,
            desc: self.desc,
            created_at,
        }
    }
}

pub fn phone_is_valid(phone: &str) -> bool {
    let n = digits_only(phone).len();
    (PHONE_MIN_DIGITS..=PHONE_MAX_DIGITS).contains(&n)
}

/// Required fields, then phone shape, then service label.
pub fn validate(draft: &RegistrationDraft) -> Result<ValidDraft, Rejection> {
    let required = [
        (Field::Name, draft.name.trim()),
        (Field::Phone, draft.phone.trim()),
        (Field::Labour, draft.labour.trim()),
        (Field::State, draft.state.trim()),
        (Field::Lga, draft.lga.trim()),
    ];
    if let Some((field, _)) = required.iter().find(|(_, v)| v.is_empty()) {
        return Err(Rejection::MissingRequiredField(*field));
    }

    let phone = draft.phone.trim();
    if !phone_is_valid(phone) {
        return Err(Rejection::InvalidPhone);
    }

    let labour: Labour = draft.labour.trim().parse().map_err(|_| Rejection::UnknownLabour)?;

    Ok(ValidDraft {
        name: s!(draft.name.trim()),
        phone: s!(phone),
        email: s!(draft.email.trim()),
        labour,
        state: s!(draft.state.trim()),
        lga: s!(draft.lga.trim()),
        desc: s!(draft.desc.trim()),
    })
}

/// State must be in the catalog and the LGA listed under it.
pub fn check_location(draft: &ValidDraft, catalog: &LocationCatalog) -> Result<(), Rejection> {
    if !catalog.contains_state(draft.state()) {
        return Err(Rejection::UnknownState);
    }
    if !catalog.contains_lga(draft.state(), draft.lga()) {
        return Err(Rejection::UnknownLga);
    }
    Ok(())
}
