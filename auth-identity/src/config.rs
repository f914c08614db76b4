use config_engine::PasswordSettings;
use serde::{Deserialize, Serialize};

pub const MAX_USERNAME_LENGTH: usize = 15;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentityConfig {
    pub username_max_length: usize,
    pub password_min_length: usize,
    pub password_require_special_chars: bool,
    pub password_require_numbers: bool,
    pub password_require_uppercase: bool,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self::from(&PasswordSettings::default())
    }
}

impl From<&PasswordSettings> for IdentityConfig {
    fn from(settings: &PasswordSettings) -> Self {
        Self {
            username_max_length: MAX_USERNAME_LENGTH,
            password_min_length: settings.min_length,
            password_require_special_chars: settings.require_special_char,
            password_require_numbers: settings.require_digit,
            password_require_uppercase: settings.require_uppercase,
        }
    }
}
