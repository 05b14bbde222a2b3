use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use log::{debug, warn};

use crate::core::Credential;

/// Default name of the secret file.
pub const DEFAULT_SECRET_FILE: &str = "pin.txt";

/// File-backed half of the credential store: a single line holding the
/// lowercase-hex SHA-256 digest of the current PIN, nothing else.
pub struct PinStore {
    path: PathBuf
}

impl PinStore {
    pub fn new(path: impl AsRef<Path>) -> PinStore {
        PinStore { path: path.as_ref().to_owned() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the stored credential. A missing file is a first run: the
    /// default credential is written out and returned. A file whose
    /// content is not a digest also yields the default, and gets
    /// replaced on the next save.
    pub fn load_or_init(&self) -> anyhow::Result<Credential> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(_) => {
                debug!("no secret file at {}, creating one with the default PIN",
                    self.path.display());
                let credential = Credential::default();
                self.save(&credential)?;
                return Ok(credential);
            }
        };

        let digest = content.trim();
        if !is_digest(digest) {
            warn!("secret file {} does not hold a digest, falling back to the default PIN",
                self.path.display());
            return Ok(Credential::default());
        }
        return Ok(Credential::from_digest(digest.to_owned()));
    }

    pub fn save(&self, credential: &Credential) -> anyhow::Result<()> {
        fs::write(&self.path, credential.digest())
            .with_context(|| format!("failed to write secret file {}", self.path.display()))?;
        debug!("saved credential digest to {}", self.path.display());
        return Ok(());
    }
}

fn is_digest(line: &str) -> bool {
    line.len() == 64 && line.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}


#[cfg(test)]
mod tests {
    use super::PinStore;
    use crate::core::credential::{hash_pin, Credential};

    use tempfile::TempDir;

    #[test]
    fn first_run_creates_default_credential() {
        let dir = TempDir::new().unwrap();
        let store = PinStore::new(dir.path().join("pin.txt"));

        let credential = store.load_or_init().unwrap();

        assert!(credential.verify("1234"));
        let on_disk = std::fs::read_to_string(store.path()).unwrap();
        assert_eq!(on_disk, hash_pin("1234"));
    }

    #[test]
    fn loads_existing_digest() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("pin.txt");
        std::fs::write(&path, format!("{}\n", hash_pin("9876"))).unwrap();

        let credential = PinStore::new(&path).load_or_init().unwrap();

        assert!(credential.verify("9876"));
        assert!(!credential.verify("1234"));
    }

    #[test]
    fn garbage_content_falls_back_to_default() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("pin.txt");
        std::fs::write(&path, "definitely not a digest").unwrap();

        let credential = PinStore::new(&path).load_or_init().unwrap();

        assert!(credential.verify("1234"));
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let store = PinStore::new(dir.path().join("pin.txt"));

        let mut credential = Credential::default();
        credential.change_pin("1234", "5678").unwrap();
        store.save(&credential).unwrap();

        let loaded = store.load_or_init().unwrap();
        assert!(loaded.verify("5678"));
        assert!(!loaded.verify("1234"));
    }
}
