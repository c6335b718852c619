use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;
use uuid::Uuid;

/// Salted SHA-256 digest stored as `<salt>$<hex digest>`
pub fn hash_password(password: &str) -> String {
    let salt = Uuid::new_v4().simple().to_string();
    format!("{}${}", salt, digest(&salt, password))
}

pub fn verify_password(password: &str, stored: &str) -> bool {
    match stored.split_once('$') {
        Some((salt, expected)) => digest(salt, password).as_bytes().ct_eq(expected.as_bytes()).into(),
        None => false,
    }
}

fn digest(salt: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verifies_matching_password() {
        let stored = hash_password("secret");
        assert!(verify_password("secret", &stored));
        assert!(!verify_password("Secret", &stored));
    }

    #[test]
    fn salts_differ_per_hash() {
        assert_ne!(hash_password("secret"), hash_password("secret"));
    }

    #[test]
    fn malformed_hashes_never_verify() {
        assert!(!verify_password("secret", "no-separator"));
    }

    #[test]
    fn truncated_digests_never_verify() {
        let stored = hash_password("secret");
        let truncated = &stored[..stored.len() - 1];
        assert!(!verify_password("secret", truncated));
        assert!(!verify_password("secret", &format!("{}0", stored)));
    }
}
