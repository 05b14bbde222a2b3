mod core;
mod backend;
mod config;

pub use crate::core::{Account, AccountState, AuthGate, AuthState, Credential, CurrencyFormat, PinOutcome};
pub use crate::core::{account, credential, currency, error, session, transaction};
pub use crate::backend::{JsonStore, PinStore, StateStore, DEFAULT_SECRET_FILE, DEFAULT_STATE_FILE};
pub use crate::config::AppConfig;
