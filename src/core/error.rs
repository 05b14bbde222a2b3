use thiserror::Error;

use crate::core::transaction::Amount;

/// Failures of the account ledger. Every variant is recoverable: the
/// rejected operation is a no-op and the message is shown to the user
/// as-is.
#[derive(Debug, PartialEq, Error)]
pub enum LedgerError {
    /// Occurs when a deposit or withdrawal is requested for a
    /// non-positive amount.
    #[error("Amount must be positive.")]
    InvalidAmount { amount: Amount },

    /// Occurs when a withdrawal exceeds the available balance. The
    /// balance stays untouched; there is no partial debit.
    #[error("Insufficient funds. Unable to withdraw.")]
    InsufficientFunds {
        requested: Amount,
        available: Amount
    }
}

/// Failures of the credential store. Neither variant mutates the
/// stored digest.
#[derive(Debug, PartialEq, Eq, Error)]
pub enum CredentialError {
    /// Occurs when the old PIN offered as proof does not match the
    /// stored digest.
    #[error("Old PIN is incorrect.")]
    AuthenticationFailed,

    /// Occurs when a replacement PIN is not exactly four characters.
    #[error("New PIN must be 4 digits.")]
    InvalidPinFormat { len: usize }
}
