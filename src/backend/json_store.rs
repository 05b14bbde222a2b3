use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use log::{debug, warn};

use crate::backend::interface::StateStore;
use crate::core::AccountState;

/// Default name of the state file, unchanged across versions so old
/// installations keep their history.
pub const DEFAULT_STATE_FILE: &str = "cash_machine_state.json";

/// JSON-file store for the account state. The wire format is a flat
/// object with `balance` and `transaction_history`.
pub struct JsonStore {
    path: PathBuf
}

impl JsonStore {
    pub fn new(path: impl AsRef<Path>) -> JsonStore {
        JsonStore { path: path.as_ref().to_owned() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StateStore for JsonStore {
    /// Reads the state file. An absent file is a first run; a file
    /// that does not parse loads as the default state with a warning,
    /// and is only replaced on the next save.
    fn load(&self) -> AccountState {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) => {
                debug!("no state file at {}: {}", self.path.display(), err);
                return AccountState::default();
            }
        };

        match serde_json::from_str(&content) {
            Ok(state) => state,
            Err(err) => {
                warn!("malformed state file {}, starting from defaults: {}",
                    self.path.display(), err);
                AccountState::default()
            }
        }
    }

    fn save(&self, state: &AccountState) -> anyhow::Result<()> {
        let content = serde_json::to_string(state)
            .with_context(|| "failed to serialise account state")?;
        fs::write(&self.path, content)
            .with_context(|| format!("failed to write state file {}", self.path.display()))?;
        debug!("saved account state to {}", self.path.display());
        return Ok(());
    }
}
