use std::fmt;
use serde::{Deserialize, Serialize};
use secrecy::SecretString;

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct User {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub number: i32,
    #[serde(skip_serializing)]
    pub password: String,
}

/// Row shape returned by `/getUsers`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct UserSummary {
    pub id: i32,
    pub last_name: String,
}

/// Signup form as posted by the browser. `number` stays textual until validated.
#[derive(Deserialize)]
pub struct SignupForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub number: String,
    #[serde(deserialize_with = "deserialize_secret_string")]
    pub password: SecretString,
    #[serde(deserialize_with = "deserialize_secret_string")]
    pub confirm_password: SecretString,
}

impl fmt::Display for SignupForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} <{}> #{}", self.first_name, self.last_name, self.email, self.number)
    }
}

/// A signup that passed every rule, ready to persist.
#[derive(Debug)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub number: i32,
    pub password_hash: String,
}

pub fn serialize_secret_string<S>(_: &SecretString, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str("[REDACTED]")
}

pub fn deserialize_secret_string<'de, D>(deserializer: D) -> Result<SecretString, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    Ok(SecretString::new(s.into_boxed_str()))
}
