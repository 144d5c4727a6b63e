//! Password hashing.
//!
//! Argon2id with a per-account salt. The legacy system hashed with
//! unsalted SHA-256; those digests are not portable here, so accounts
//! get fresh hashes on creation or password change.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

/// Error hashing a password.
///
/// Only occurs on malformed parameters, which never happens with the
/// defaults used here; callers still propagate it rather than panic.
#[derive(Debug, thiserror::Error)]
#[error("password hashing error")]
pub struct HashError;

/// Hash a plaintext password using Argon2id.
///
/// # Errors
///
/// Returns [`HashError`] if the hasher rejects its input.
pub fn hash(plaintext: &str) -> Result<String, HashError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(plaintext.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| HashError)
}

/// Verify a plaintext password against a stored PHC-format hash.
///
/// An unparseable hash verifies as `false` rather than erroring, so a
/// corrupted digest behaves like a wrong password.
#[must_use]
pub fn verify(plaintext: &str, digest: &str) -> bool {
    let Ok(parsed_hash) = PasswordHash::new(digest) else {
        return false;
    };

    Argon2::default()
        .verify_password(plaintext.as_bytes(), &parsed_hash)
        .is_ok()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let digest = hash("secret1").unwrap();
        assert!(verify("secret1", &digest));
        assert!(!verify("wrong", &digest));
    }

    #[test]
    fn test_hashes_are_salted() {
        let a = hash("secret1").unwrap();
        let b = hash("secret1").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_verify_rejects_garbage_digest() {
        assert!(!verify("secret1", "not-a-phc-string"));
    }

}
