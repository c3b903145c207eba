// src/query.rs
//
// Search filter. Exact, case-sensitive equality on each specified field;
// unspecified fields match anything. Output keeps store order.

use crate::core::sanitize::non_blank;
use crate::labour::{Labour, UnknownLabour};
use crate::provider::Provider;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Criteria {
    pub labour: Option<Labour>,
    pub state: Option<String>,
    pub lga: Option<String>,
}

impl Criteria {
    /// Matches every provider.
    pub fn any() -> Self {
        Self::default()
    }

    pub fn with_labour(mut self, labour: Labour) -> Self {
        self.labour = Some(labour);
        self
    }

    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    pub fn with_lga(mut self, lga: impl Into<String>) -> Self {
        self.lga = Some(lga.into());
        self
    }

    /// Build from raw form/CLI values; blank means "any".
    pub fn from_raw(labour: &str, state: &str, lga: &str) -> Result<Self, UnknownLabour> {
        Ok(Self {
            labour: non_blank(labour).map(str::parse::<Labour>).transpose()?,
            state: non_blank(state).map(String::from),
            lga: non_blank(lga).map(String::from),
        })
    }

    /// `Some("")` counts as unspecified, same as `None`.
    pub fn is_unconstrained(&self) -> bool {
        self.labour.is_none() && specified(&self.state).is_none() && specified(&self.lga).is_none()
    }

    pub fn matches(&self, p: &Provider) -> bool {
        if self.labour.is_some_and(|l| l != p.labour) { return false; }
        if specified(&self.state).is_some_and(|s| s != p.state) { return false; }
        if specified(&self.lga).is_some_and(|l| l != p.lga) { return false; }
        true
    }
}

fn specified(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|v| !v.is_empty())
}

/// Matching subset of `providers`, original order.
pub fn filter(providers: &[Provider], criteria: &Criteria) -> Vec<Provider> {
    providers
        .iter()
        .filter(|p| criteria.matches(p))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_raw_values_are_unspecified() {
        let c = Criteria::from_raw("", "  ", "").unwrap();
        assert!(c.is_unconstrained());
        assert_eq!(c, Criteria::any());
    }

    #[test]
    fn raw_values_are_trimmed_and_parsed() {
        let c = Criteria::from_raw("Plumber", " Lagos ", "Ikeja").unwrap();
        assert_eq!(c, Criteria::any().with_labour(Labour::Plumber).with_state("Lagos").with_lga("Ikeja"));
    }

    #[test]
    fn empty_strings_do_not_constrain() {
        let c = Criteria::any().with_state("").with_lga("");
        assert!(c.is_unconstrained());

        let hand_built = Criteria { lga: Some(s!()), ..Criteria::any() };
        assert!(hand_built.is_unconstrained());
    }

    #[test]
    fn unknown_labour_is_rejected_at_the_boundary() {
        let err = Criteria::from_raw("Astronaut", "", "").unwrap_err();
        assert_eq!(err, UnknownLabour(s!("Astronaut")));
    }
}
