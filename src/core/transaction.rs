use chrono::Local;

use crate::core::currency::CurrencyFormat;

pub type Amount = f64;

/// Timestamp format used on receipts: local time, second precision.
pub const RECEIPT_TIME_FORMAT: &str = "%d-%m-%Y %H:%M:%S";

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TxKind {
    Deposit,
    Withdrawal
}

impl TxKind {
    fn sign(&self) -> char {
        match self {
            Self::Deposit => '+',
            Self::Withdrawal => '-'
        }
    }
}

impl std::fmt::Display for TxKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Deposit => "Deposit",
            Self::Withdrawal => "Withdrawal"
        };
        write!(f, "{}", name)
    }
}

/// One completed movement of money. The ledger keeps only the rendered
/// receipt line, so a record never changes once it is written out.
pub struct Record {
    kind: TxKind,
    amount: Amount,
    balance_after: Amount,
    timestamp: String
}

impl Record {
    pub fn new(kind: TxKind, amount: Amount, balance_after: Amount) -> Record {
        let timestamp = Local::now().format(RECEIPT_TIME_FORMAT).to_string();
        Record { kind, amount, balance_after, timestamp }
    }

    /// Renders the single line stored in the history and handed back
    /// to the caller, e.g.
    /// `Deposit: +$100.00. New balance: $100.00. Date: 05-08-2026 14:03:21`
    pub fn receipt(&self, currency: &CurrencyFormat) -> String {
        return format!("{}: {}{}. New balance: {}. Date: {}",
            self.kind,
            self.kind.sign(),
            currency.format(self.amount),
            currency.format(self.balance_after),
            self.timestamp);
    }
}
