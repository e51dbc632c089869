use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

/// Field bounds applied to registration and profile updates
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    pub name_min: usize,
    pub name_max: usize,
    pub pronoun_max: usize,
    pub email_max: usize,
    pub phone_max: usize,
    /// Minimum age in years at registration
    pub min_age: i32,
    /// Ages above this are treated as an invalid birth date
    pub max_age: i32,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            name_min: 2,
            name_max: 100,
            pronoun_max: 20,
            email_max: 255,
            phone_max: 20,
            min_age: 13,
            max_age: 120,
        }
    }
}

impl ValidationConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.name_min == 0 || self.name_min > self.name_max {
            return Err(ConfigError::validation(format!(
                "validation.name_min must be 1-{}, got {}",
                self.name_max, self.name_min
            )));
        }

        if self.min_age < 0 || self.min_age > self.max_age {
            return Err(ConfigError::validation(format!(
                "validation.min_age must be 0-{}, got {}",
                self.max_age, self.min_age
            )));
        }

        Ok(())
    }
}
