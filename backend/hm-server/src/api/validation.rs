//! Field-level validation for registration, profile update and password
//! change requests. Violations come back as `{field, message}` pairs and
//! the transport layer wraps them in a 400 envelope.

use crate::api::auth::change_password_request::ChangePasswordRequest;
use crate::api::auth::register_request::RegisterRequest;
use crate::api::guests::update_guest_request::UpdateGuestRequest;
use crate::api::response::FieldError;

use hm_auth::{cpf, password};
use hm_config::ValidationConfig;

use chrono::{NaiveDate, Utc};

pub fn validate_registration(req: &RegisterRequest, config: &ValidationConfig) -> Vec<FieldError> {
    let mut errors = Vec::new();

    check_name(&req.name, config, &mut errors);
    check_email(&req.email, config, &mut errors);
    check_password(&req.password, "password", &mut errors);

    if let Some(ref pronoun) = req.pronoun {
        check_pronoun(pronoun, config, &mut errors);
    }
    if let Some(ref phone) = req.phone {
        check_phone(phone, config, &mut errors);
    }
    if let Some(ref birth_date) = req.birth_date {
        check_birth_date(birth_date, config, &mut errors);
    }
    if let Some(ref cpf_input) = req.cpf {
        check_cpf(cpf_input, &mut errors);
    }

    errors
}

pub fn validate_update(req: &UpdateGuestRequest, config: &ValidationConfig) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if let Some(ref name) = req.name {
        check_name(name, config, &mut errors);
    }
    if let Some(ref email) = req.email {
        check_email(email, config, &mut errors);
    }
    if let Some(ref pronoun) = req.pronoun {
        check_pronoun(pronoun, config, &mut errors);
    }
    if let Some(ref phone) = req.phone {
        check_phone(phone, config, &mut errors);
    }
    if let Some(ref birth_date) = req.birth_date {
        check_birth_date(birth_date, config, &mut errors);
    }
    if let Some(ref cpf_input) = req.cpf {
        check_cpf(cpf_input, &mut errors);
    }

    errors
}

pub fn validate_change_password(req: &ChangePasswordRequest) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if req.current_password.is_empty() {
        errors.push(FieldError::new(
            "current_password",
            "Current password is required",
        ));
    }

    check_password(&req.new_password, "new_password", &mut errors);

    if req.confirm_password != req.new_password {
        errors.push(FieldError::new(
            "confirm_password",
            "Password confirmation does not match",
        ));
    }

    errors
}

fn check_name(name: &str, config: &ValidationConfig, errors: &mut Vec<FieldError>) {
    let trimmed = name.trim();
    if trimmed.chars().count() < config.name_min || trimmed.chars().count() > config.name_max {
        errors.push(FieldError::new(
            "name",
            format!(
                "Name must be between {} and {} characters",
                config.name_min, config.name_max
            ),
        ));
    }
}

fn check_pronoun(pronoun: &str, config: &ValidationConfig, errors: &mut Vec<FieldError>) {
    if pronoun.chars().count() > config.pronoun_max {
        errors.push(FieldError::new(
            "pronoun",
            format!("Pronoun must be at most {} characters", config.pronoun_max),
        ));
    }
}

fn check_email(email: &str, config: &ValidationConfig, errors: &mut Vec<FieldError>) {
    if email.chars().count() > config.email_max {
        errors.push(FieldError::new(
            "email",
            format!("Email must be at most {} characters", config.email_max),
        ));
        return;
    }

    if !is_plausible_email(email) {
        errors.push(FieldError::new("email", "Email must be a valid address"));
    }
}

/// Minimal syntactic check: one '@', non-empty local part, domain with a
/// dot and no whitespace
fn is_plausible_email(email: &str) -> bool {
    let email = email.trim();
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && !domain.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

fn check_phone(phone: &str, config: &ValidationConfig, errors: &mut Vec<FieldError>) {
    if phone.chars().count() > config.phone_max {
        errors.push(FieldError::new(
            "phone",
            format!("Phone must be at most {} characters", config.phone_max),
        ));
    }

    let allowed = |c: char| c.is_ascii_digit() || matches!(c, ' ' | '(' | ')' | '-' | '+');
    if phone.is_empty() || !phone.chars().all(allowed) {
        errors.push(FieldError::new(
            "phone",
            "Phone may only contain digits, spaces, parentheses, hyphens and +",
        ));
    }
}

fn check_birth_date(birth_date: &str, config: &ValidationConfig, errors: &mut Vec<FieldError>) {
    let Ok(date) = NaiveDate::parse_from_str(birth_date, "%Y-%m-%d") else {
        errors.push(FieldError::new(
            "birth_date",
            "Birth date must be in YYYY-MM-DD format",
        ));
        return;
    };

    let today = Utc::now().date_naive();
    let age = today.years_since(date).map(|y| y as i32).unwrap_or(-1);

    if age < config.min_age {
        errors.push(FieldError::new(
            "birth_date",
            format!("Guest must be at least {} years old", config.min_age),
        ));
    } else if age > config.max_age {
        errors.push(FieldError::new("birth_date", "Birth date is not valid"));
    }
}

fn check_cpf(cpf_input: &str, errors: &mut Vec<FieldError>) {
    if let Err(e) = cpf::validate(cpf_input) {
        errors.push(FieldError::new("cpf", e.to_string()));
    }
}

fn check_password(pass: &str, field: &str, errors: &mut Vec<FieldError>) {
    if let Err(violations) = password::check_strength(pass) {
        for violation in violations {
            errors.push(FieldError::new(field, violation.message()));
        }
    }
}
