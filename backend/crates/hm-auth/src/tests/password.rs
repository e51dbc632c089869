use crate::password::{self, PasswordViolation};

#[test]
fn given_compliant_password_when_checked_then_passes() {
    assert_eq!(password::check_strength("Abc123"), Ok(()));
    assert_eq!(password::check_strength("sTr0ng-passphrase!"), Ok(()));
}

#[test]
fn given_missing_character_classes_when_checked_then_reports_each() {
    assert_eq!(
        password::check_strength("abc123"),
        Err(vec![PasswordViolation::MissingUppercase])
    );
    assert_eq!(
        password::check_strength("ABC123"),
        Err(vec![PasswordViolation::MissingLowercase])
    );
    assert_eq!(
        password::check_strength("Abcdef"),
        Err(vec![PasswordViolation::MissingDigit])
    );
}

#[test]
fn given_short_password_when_checked_then_all_violations_reported() {
    let violations = password::check_strength("ab1").unwrap_err();

    assert!(violations.contains(&PasswordViolation::TooShort));
    assert!(violations.contains(&PasswordViolation::MissingUppercase));
    assert_eq!(violations.len(), 2);
}

#[test]
fn given_same_password_when_hashed_twice_then_digests_differ() {
    let first = password::hash("Abc123").unwrap();
    let second = password::hash("Abc123").unwrap();

    // Fresh salt per call
    assert_ne!(first, second);
}

#[test]
fn given_correct_password_when_verified_then_true() {
    let digest = password::hash("Abc123").unwrap();

    assert!(password::verify("Abc123", &digest));
}

#[test]
fn given_wrong_password_when_verified_then_false() {
    let digest = password::hash("Abc123").unwrap();

    assert!(!password::verify("Abc124", &digest));
    assert!(!password::verify("", &digest));
}

#[test]
fn given_malformed_digest_when_verified_then_false() {
    assert!(!password::verify("Abc123", "not-a-phc-string"));
    assert!(!password::verify("Abc123", ""));
}
