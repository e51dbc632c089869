use crate::ValidationConfig;

#[test]
fn test_default_validation_config_is_valid() {
    assert!(ValidationConfig::default().validate().is_ok());
}

#[test]
fn test_name_min_above_max_rejected() {
    let config = ValidationConfig {
        name_min: 200,
        name_max: 100,
        ..Default::default()
    };

    assert!(config.validate().is_err());
}

#[test]
fn test_min_age_above_max_rejected() {
    let config = ValidationConfig {
        min_age: 200,
        max_age: 120,
        ..Default::default()
    };

    assert!(config.validate().is_err());
}
