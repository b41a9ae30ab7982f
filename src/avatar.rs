//! Deterministic avatar resolution
//! Derives a gravatar-style URL from the registration email. Pure
//! computation, resolved once at registration and stored with the account.

use sha2::{Digest, Sha256};

const AVATAR_SIZE: u32 = 100;
const AVATAR_RATING: &str = "x";
const AVATAR_DEFAULT: &str = "retro";

/// Resolve the avatar URL for an email address.
/// Gravatar addresses hash the trimmed, lowercased email.
pub fn resolve(email: &str) -> String {
    let digest = Sha256::digest(email.trim().to_lowercase().as_bytes());

    format!(
        "https://www.gravatar.com/avatar/{}?s={}&r={}&d={}",
        hex::encode(digest),
        AVATAR_SIZE,
        AVATAR_RATING,
        AVATAR_DEFAULT
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_is_deterministic() {
        assert_eq!(resolve("ada@example.com"), resolve("ada@example.com"));
    }

    #[test]
    fn test_resolve_normalizes_case_and_whitespace() {
        assert_eq!(resolve("Ada@Example.com "), resolve("ada@example.com"));
    }

    #[test]
    fn test_resolve_carries_render_parameters() {
        let url = resolve("ada@example.com");
        assert!(url.starts_with("https://www.gravatar.com/avatar/"));
        assert!(url.ends_with("?s=100&r=x&d=retro"));
    }

    #[test]
    fn test_different_emails_get_different_avatars() {
        assert_ne!(resolve("ada@example.com"), resolve("grace@example.com"));
    }
}
