//! Identity resolution for checkout and order reads.
//!
//! Token verification is deliberately explicit about its three outcomes: a
//! token may be absent (anonymous guest), valid (authenticated account), or
//! present but unverifiable. Only order placement treats `Invalid` as a guest;
//! every other operation rejects it. Real token issuance (JWT et al.) is out
//! of scope; [`SessionTokens`] is the in-process seam standing in for it.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

/// The result of resolving a bearer token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    /// A verified account identity.
    Authenticated(String),
    /// No token was presented.
    Anonymous,
    /// A token was presented but did not verify.
    Invalid,
}

impl AuthOutcome {
    pub fn user_id(&self) -> Option<&str> {
        match self {
            AuthOutcome::Authenticated(id) => Some(id),
            _ => None,
        }
    }

    /// Degrades `Invalid` to `Anonymous`. Used by order placement only, where
    /// a broken token still allows guest checkout.
    pub fn lenient(self) -> Self {
        match self {
            AuthOutcome::Invalid => AuthOutcome::Anonymous,
            other => other,
        }
    }
}

/// In-memory session token issuer and verifier.
///
/// Tokens carry a keyed tag derived from the configured secret so that tokens
/// minted under a different configuration never resolve, but verification
/// itself is a lookup against the issued set. Clones share state.
#[derive(Clone)]
pub struct SessionTokens {
    secret: String,
    counter: Arc<AtomicU64>,
    issued: Arc<Mutex<HashMap<String, String>>>,
}

impl SessionTokens {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            counter: Arc::new(AtomicU64::new(1)),
            issued: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    fn tag(&self, seq: u64) -> u64 {
        // FNV-1a over secret bytes and the sequence; a stand-in for a real MAC.
        let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
        for b in self.secret.bytes().chain(seq.to_le_bytes()) {
            hash ^= u64::from(b);
            hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
        }
        hash
    }

    /// Mints a bearer token for an account.
    pub fn issue(&self, user_id: impl Into<String>) -> String {
        let seq = self.counter.fetch_add(1, Ordering::SeqCst);
        let token = format!("sess-{seq}-{:016x}", self.tag(seq));
        self.issued
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(token.clone(), user_id.into());
        token
    }

    /// Resolves an optional `Authorization` header value into an identity.
    /// Accepts the raw token with or without the `Bearer ` prefix.
    pub fn resolve(&self, bearer: Option<&str>) -> AuthOutcome {
        let Some(raw) = bearer else {
            return AuthOutcome::Anonymous;
        };
        let token = raw.strip_prefix("Bearer ").unwrap_or(raw);
        let issued = self.issued.lock().unwrap_or_else(PoisonError::into_inner);
        match issued.get(token) {
            Some(user_id) => AuthOutcome::Authenticated(user_id.clone()),
            None => AuthOutcome::Invalid,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_token_is_anonymous() {
        let tokens = SessionTokens::new("secret");
        assert_eq!(tokens.resolve(None), AuthOutcome::Anonymous);
    }

    #[test]
    fn issued_token_resolves_to_its_account() {
        let tokens = SessionTokens::new("secret");
        let token = tokens.issue("user_1");
        assert_eq!(
            tokens.resolve(Some(&token)),
            AuthOutcome::Authenticated("user_1".into())
        );
        assert_eq!(
            tokens.resolve(Some(&format!("Bearer {token}"))),
            AuthOutcome::Authenticated("user_1".into())
        );
    }

    #[test]
    fn unknown_token_is_invalid_not_anonymous() {
        let tokens = SessionTokens::new("secret");
        assert_eq!(tokens.resolve(Some("sess-99-deadbeef")), AuthOutcome::Invalid);
    }

    #[test]
    fn lenient_downgrades_only_invalid() {
        assert_eq!(AuthOutcome::Invalid.lenient(), AuthOutcome::Anonymous);
        assert_eq!(
            AuthOutcome::Authenticated("u".into()).lenient(),
            AuthOutcome::Authenticated("u".into())
        );
        assert_eq!(AuthOutcome::Anonymous.lenient(), AuthOutcome::Anonymous);
    }

    #[test]
    fn tokens_from_another_instance_do_not_verify() {
        let a = SessionTokens::new("secret-a");
        let b = SessionTokens::new("secret-b");
        let token = a.issue("user_1");
        assert_eq!(b.resolve(Some(&token)), AuthOutcome::Invalid);
    }
}
