// tests/validation_rules.rs
use labour_finder::labour::Labour;
use labour_finder::validate::{validate, Field, RegistrationDraft, Rejection};

fn good() -> RegistrationDraft {
    RegistrationDraft {
        name: "Ade".into(),
        phone: "08012345678".into(),
        email: String::new(),
        labour: "Plumber".into(),
        state: "Lagos".into(),
        lga: "Ikeja".into(),
        desc: String::new(),
    }
}

fn with_phone(phone: &str) -> RegistrationDraft {
    RegistrationDraft { phone: phone.into(), ..good() }
}

#[test]
fn phone_digit_count_boundaries() {
    assert_eq!(validate(&with_phone("123456789")).unwrap_err(), Rejection::InvalidPhone);
    assert!(validate(&with_phone("1234567890")).is_ok());
    assert!(validate(&with_phone("123456789012345")).is_ok());
    assert_eq!(validate(&with_phone("1234567890123456")).unwrap_err(), Rejection::InvalidPhone);
}

#[test]
fn phone_formatting_characters_are_ignored() {
    assert!(validate(&with_phone("+234 (801) 234-5678")).is_ok());
    assert_eq!(validate(&with_phone("call me maybe")).unwrap_err(), Rejection::InvalidPhone);
}

#[test]
fn missing_state_wins_over_valid_other_fields() {
    let d = RegistrationDraft { state: String::new(), ..good() };
    let err = validate(&d).unwrap_err();
    assert_eq!(err, Rejection::MissingRequiredField(Field::State));
    assert_eq!(err.to_string(), "missing required field");
}

#[test]
fn whitespace_only_counts_as_missing() {
    let d = RegistrationDraft { name: "   ".into(), ..good() };
    assert_eq!(validate(&d).unwrap_err(), Rejection::MissingRequiredField(Field::Name));
}

#[test]
fn required_check_runs_before_phone_check() {
    let d = RegistrationDraft { phone: "12".into(), lga: String::new(), ..good() };
    assert_eq!(validate(&d).unwrap_err(), Rejection::MissingRequiredField(Field::Lga));
}

#[test]
fn first_missing_field_is_reported() {
    let d = RegistrationDraft { phone: String::new(), labour: String::new(), ..good() };
    assert_eq!(validate(&d).unwrap_err().field(), Field::Phone);
}

#[test]
fn optional_fields_may_be_empty() {
    let v = validate(&good()).unwrap();
    assert_eq!(v.labour(), Labour::Plumber);
    assert_eq!(v.phone(), "08012345678");
}

#[test]
fn unknown_service_type_is_rejected_after_phone() {
    let d = RegistrationDraft { labour: "Astronaut".into(), ..good() };
    assert_eq!(validate(&d).unwrap_err(), Rejection::UnknownLabour);

    let d = RegistrationDraft { labour: "Astronaut".into(), phone: "1".into(), ..good() };
    assert_eq!(validate(&d).unwrap_err(), Rejection::InvalidPhone);
}

#[test]
fn user_messages_match_the_form_copy() {
    assert_eq!(
        Rejection::MissingRequiredField(Field::Name).user_message(),
        "Please fill all required fields."
    );
    assert_eq!(Rejection::InvalidPhone.user_message(), "Enter a valid phone number.");
}
