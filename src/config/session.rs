use secrecy::SecretString;
use serde::Deserialize;

/// Signing material and lifetime for the session cookie.
#[derive(Debug, Deserialize, Clone)]
pub struct SessionSettings {
    pub secret: SecretString,
    pub expiration_hours: i64,
}

impl SessionSettings {
    pub fn new(secret: String, expiration_hours: i64) -> Self {
        Self {
            secret: SecretString::new(secret.into_boxed_str()),
            expiration_hours,
        }
    }
}
