use bcrypt::{hash, verify, BcryptError, DEFAULT_COST};

pub fn hash_password(password: &str) -> Result<String, BcryptError> {
    hash(password, DEFAULT_COST)
}

/// A malformed stored hash counts as a mismatch.
pub fn verify_password(password: &str, hash: &str) -> bool {
    verify(password, hash).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hashed_password_verifies_and_rejects_others() {
        let hashed = hash_password("secret").expect("hashing should succeed");
        assert_ne!(hashed, "secret");
        assert!(verify_password("secret", &hashed));
        assert!(!verify_password("Secret", &hashed));
        assert!(!verify_password("secret", "not-a-bcrypt-hash"));
    }
}
