use crate::api::auth::change_password_request::ChangePasswordRequest;
use crate::api::auth::register_request::RegisterRequest;
use crate::api::guests::update_guest_request::UpdateGuestRequest;
use crate::api::validation::{validate_change_password, validate_registration, validate_update};

use hm_config::ValidationConfig;

fn valid_register() -> RegisterRequest {
    RegisterRequest {
        name: "Ana Souza".to_string(),
        pronoun: Some("she/her".to_string()),
        email: "ana@example.com".to_string(),
        password: "Abc123".to_string(),
        phone: Some("+55 (11) 91234-5678".to_string()),
        birth_date: Some("1990-04-12".to_string()),
        cpf: Some("529.982.247-25".to_string()),
    }
}

fn fields(errors: &[crate::api::response::FieldError]) -> Vec<&str> {
    errors.iter().map(|e| e.field.as_str()).collect()
}

#[test]
fn test_valid_registration_passes() {
    let errors = validate_registration(&valid_register(), &ValidationConfig::default());

    assert!(errors.is_empty(), "unexpected errors: {:?}", errors);
}

#[test]
fn test_registration_rejects_bad_email_and_weak_password() {
    let mut req = valid_register();
    req.email = "not-an-email".to_string();
    req.password = "abc".to_string();

    let errors = validate_registration(&req, &ValidationConfig::default());

    let fields = fields(&errors);
    assert!(fields.contains(&"email"));
    assert!(fields.contains(&"password"));
}

#[test]
fn test_registration_rejects_short_name() {
    let mut req = valid_register();
    req.name = "A".to_string();

    let errors = validate_registration(&req, &ValidationConfig::default());

    assert_eq!(fields(&errors), vec!["name"]);
}

#[test]
fn test_registration_rejects_underage_guest() {
    let mut req = valid_register();
    req.birth_date = Some("2020-01-01".to_string());

    let errors = validate_registration(&req, &ValidationConfig::default());

    assert_eq!(fields(&errors), vec!["birth_date"]);
}

#[test]
fn test_registration_rejects_invalid_cpf() {
    let mut req = valid_register();
    req.cpf = Some("529.982.247-26".to_string());

    let errors = validate_registration(&req, &ValidationConfig::default());

    assert_eq!(fields(&errors), vec!["cpf"]);
}

#[test]
fn test_registration_rejects_phone_with_letters() {
    let mut req = valid_register();
    req.phone = Some("call-me-maybe".to_string());

    let errors = validate_registration(&req, &ValidationConfig::default());

    assert_eq!(fields(&errors), vec!["phone"]);
}

#[test]
fn test_update_with_no_fields_is_fine_at_field_level() {
    // Emptiness is rejected separately; field validation sees nothing wrong
    let req = UpdateGuestRequest {
        name: None,
        pronoun: None,
        email: None,
        phone: None,
        birth_date: None,
        cpf: None,
    };

    let errors = validate_update(&req, &ValidationConfig::default());

    assert!(errors.is_empty());
}

#[test]
fn test_update_rejects_malformed_birth_date() {
    let req = UpdateGuestRequest {
        name: None,
        pronoun: None,
        email: None,
        phone: None,
        birth_date: Some("12/04/1990".to_string()),
        cpf: None,
    };

    let errors = validate_update(&req, &ValidationConfig::default());

    assert_eq!(fields(&errors), vec!["birth_date"]);
}

#[test]
fn test_change_password_requires_matching_confirmation() {
    let req = ChangePasswordRequest {
        current_password: "Abc123".to_string(),
        new_password: "Xyz789".to_string(),
        confirm_password: "Xyz780".to_string(),
    };

    let errors = validate_change_password(&req);

    assert_eq!(fields(&errors), vec!["confirm_password"]);
}

#[test]
fn test_change_password_checks_new_password_strength() {
    let req = ChangePasswordRequest {
        current_password: "Abc123".to_string(),
        new_password: "weak".to_string(),
        confirm_password: "weak".to_string(),
    };

    let errors = validate_change_password(&req);

    assert!(errors.iter().all(|e| e.field == "new_password"));
    assert!(!errors.is_empty());
}
