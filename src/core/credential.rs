use sha2::{Digest, Sha256};

use crate::core::error::CredentialError;

/// PIN every fresh install starts with.
pub const DEFAULT_PIN: &str = "1234";

/// Required PIN length, in characters.
pub const PIN_LENGTH: usize = 4;

pub type CredentialResult<T> = Result<T, CredentialError>;

/// Hashes a PIN the way it is stored: SHA-256, lowercase hex.
pub fn hash_pin(pin: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(pin.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// The stored credential. Holds only the digest of the current PIN;
/// the plaintext never lives in memory or on disk beyond the moment
/// of hashing.
///
/// Verification is plain string equality on digests, with no timing
/// mitigation and no salt. Fine for a simulator, not for anything
/// guarding real money.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Credential {
    digest: String
}

impl Credential {
    pub fn from_digest(digest: String) -> Credential {
        Credential { digest }
    }

    pub fn from_pin(pin: &str) -> Credential {
        Credential { digest: hash_pin(pin) }
    }

    pub fn digest(&self) -> &str {
        &self.digest
    }

    pub fn verify(&self, candidate: &str) -> bool {
        hash_pin(candidate) == self.digest
    }

    /// Replaces the digest, requiring proof of the old PIN and a
    /// four-character replacement. Persisting the new digest is the
    /// caller's job.
    pub fn change_pin(&mut self, old_pin: &str, new_pin: &str) -> CredentialResult<()> {
        if !self.verify(old_pin) {
            return Err(CredentialError::AuthenticationFailed);
        }
        let len = new_pin.chars().count();
        if len != PIN_LENGTH {
            return Err(CredentialError::InvalidPinFormat { len });
        }
        self.digest = hash_pin(new_pin);
        return Ok(());
    }
}

impl Default for Credential {
    fn default() -> Self {
        Credential::from_pin(DEFAULT_PIN)
    }
}
