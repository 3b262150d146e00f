use sha2::{Digest, Sha256};

/// SHA-256 of `token`, lowercase hex. This is the form `API_TOKEN` is stored in.
pub fn hash_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    hex::encode(hasher.finalize())
}

/// True iff both values are present and the digest of `presented` equals `stored_hash`.
pub fn verify(presented: Option<&str>, stored_hash: Option<&str>) -> bool {
    match (presented, stored_hash) {
        (Some(token), Some(hash)) => hash_token(token) == hash,
        _ => false,
    }
}

/// Holds the pre-shared hash the process was configured with.
#[derive(Debug, Clone)]
pub struct TokenVerifier {
    stored_hash: Option<String>,
}

impl TokenVerifier {
    pub fn new(stored_hash: Option<String>) -> Self {
        Self { stored_hash }
    }

    pub fn is_configured(&self) -> bool {
        self.stored_hash.is_some()
    }

    pub fn verify(&self, presented: Option<&str>) -> bool {
        verify(presented, self.stored_hash.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // echo -n goodtoken | sha256sum
    const GOODTOKEN_HASH: &str = "31fb6cd495750daf24cdfa934a1dc9a6f8c910e9d1a573dbd8df535eb1e94395";

    #[test]
    fn hash_is_lowercase_hex_sha256() {
        assert_eq!(
            hash_token("abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
        assert_eq!(
            hash_token(""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn accepts_known_digest() {
        assert!(verify(Some("goodtoken"), Some(GOODTOKEN_HASH)));
    }

    #[test]
    fn accepts_token_matching_its_hash() {
        for token in ["goodtoken", "", "with spaces and ünïcode"] {
            let hash = hash_token(token);
            assert!(verify(Some(token), Some(&hash)), "{token:?}");
        }
    }

    #[test]
    fn rejects_other_pairings() {
        let hash = hash_token("goodtoken");
        assert!(!verify(Some("wrongtoken"), Some(&hash)));
        assert!(!verify(Some("goodtoken "), Some(&hash)));
        assert!(!verify(Some("goodtoken"), Some("goodtoken")));
        assert!(!verify(Some("wrongtoken"), Some(GOODTOKEN_HASH)));
    }

    #[test]
    fn comparison_is_case_sensitive() {
        let upper = hash_token("goodtoken").to_uppercase();
        assert!(!verify(Some("goodtoken"), Some(&upper)));
    }

    #[test]
    fn absent_inputs_never_verify() {
        let hash = hash_token("goodtoken");
        assert!(!verify(None, Some(&hash)));
        assert!(!verify(Some("goodtoken"), None));
        assert!(!verify(None, None));
    }

    #[test]
    fn verifier_uses_injected_hash() {
        let verifier = TokenVerifier::new(Some(hash_token("goodtoken")));
        assert!(verifier.is_configured());
        assert!(verifier.verify(Some("goodtoken")));
        assert!(!verifier.verify(Some("wrongtoken")));
        assert!(!verifier.verify(None));

        let unconfigured = TokenVerifier::new(None);
        assert!(!unconfigured.is_configured());
        assert!(!unconfigured.verify(Some("goodtoken")));
    }
}
