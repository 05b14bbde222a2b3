pub mod account;
pub mod credential;
pub mod currency;
pub mod error;
pub mod session;
pub mod transaction;

pub use account::{Account, AccountState};
pub use credential::Credential;
pub use currency::CurrencyFormat;
pub use error::{CredentialError, LedgerError};
pub use session::{AuthGate, AuthState, PinOutcome};
