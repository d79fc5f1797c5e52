//! Email sign-in code issuance for the test period
//!
//! Codes are held in memory and "delivered" by logging them; real delivery
//! and expiry are out of scope while the service runs in test mode.

use std::sync::Arc;

use rand::Rng;

const CODE_DIGITS: usize = 6;

/// In-memory store of issued email sign-in codes
///
/// Cheap to clone; clones share the same underlying map. Injected into the
/// auth router through state so tests can observe issued codes on an
/// isolated instance instead of reaching into a process-wide singleton.
#[derive(Debug, Default, Clone)]
pub struct CodeStore {
    codes: Arc<dashmap::DashMap<String, String>>,
}

impl CodeStore {
    /// Issue a fresh code for `email`, replacing any previous one
    pub fn issue(&self, email: &str) -> String {
        let code = gen_code();
        self.codes.insert(email.to_owned(), code.clone());
        code
    }

    /// Look up the currently issued code for `email`
    #[must_use]
    pub fn peek(&self, email: &str) -> Option<String> {
        self.codes.get(email).map(|entry| entry.value().clone())
    }

    /// Check a submitted code against the issued one
    ///
    /// Codes are not consumed on a successful match.
    #[must_use]
    pub fn verify(&self, email: &str, code: &str) -> bool {
        self.codes.get(email).is_some_and(|saved| *saved == code)
    }
}

/// Random 6-digit code; not cryptographic, mirroring the test-period stub
fn gen_code() -> String {
    let mut rng = rand::rng();
    (0..CODE_DIGITS).map(|_| char::from(b'0' + rng.random_range(0..10u8))).collect()
}
