use serde::{Deserialize, Serialize};
use secrecy::SecretString;

#[derive(Serialize, Deserialize)]
pub struct LoginForm {
    pub email: String,
    #[serde(serialize_with = "crate::models::user::serialize_secret_string",
            deserialize_with = "crate::models::user::deserialize_secret_string")]
    pub password: SecretString,
}

/// Claims carried by the session cookie.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SessionClaims {
    pub sub: String,  // user id
    pub exp: usize,
    pub iat: usize,
}
