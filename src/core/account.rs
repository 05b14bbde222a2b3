use serde::{Serialize, Deserialize};

use crate::core::currency::CurrencyFormat;
use crate::core::error::LedgerError;
use crate::core::transaction::{Amount, Record, TxKind};

pub type LedgerResult<T> = Result<T, LedgerError>;

/// Snapshot of the persistent part of an account, matching the state
/// file on disk. Both fields default so partial or older files still
/// load.
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct AccountState {
    #[serde(default)]
    pub balance: Amount,
    #[serde(default)]
    pub transaction_history: Vec<String>
}

/// The account ledger: a balance plus the append-only list of rendered
/// receipt lines, oldest first. The balance never goes negative
/// through `deposit`/`withdraw`, and the history only ever grows.
pub struct Account {
    balance: Amount,
    transaction_history: Vec<String>,
    currency: CurrencyFormat
}

impl Account {
    pub fn new(currency: CurrencyFormat) -> Account {
        Account { balance: 0.0, transaction_history: Vec::new(), currency }
    }

    pub fn balance(&self) -> Amount {
        self.balance
    }

    pub fn history(&self) -> &[String] {
        &self.transaction_history
    }

    /// Adds to the balance and appends a receipt line. A non-positive
    /// amount is rejected without touching any state.
    pub fn deposit(&mut self, amount: Amount) -> LedgerResult<String> {
        if amount <= 0.0 {
            return Err(LedgerError::InvalidAmount { amount });
        }
        self.balance += amount;
        return Ok(self.record(TxKind::Deposit, amount));
    }

    /// Takes from the balance and appends a receipt line. Rejects
    /// non-positive amounts, and rejects whole any withdrawal that
    /// exceeds the balance.
    pub fn withdraw(&mut self, amount: Amount) -> LedgerResult<String> {
        if amount <= 0.0 {
            return Err(LedgerError::InvalidAmount { amount });
        }
        if amount > self.balance {
            return Err(LedgerError::InsufficientFunds {
                requested: amount,
                available: self.balance
            });
        }
        self.balance -= amount;
        return Ok(self.record(TxKind::Withdrawal, amount));
    }

    fn record(&mut self, kind: TxKind, amount: Amount) -> String {
        let receipt = Record::new(kind, amount, self.balance).receipt(&self.currency);
        self.transaction_history.push(receipt.clone());
        return receipt;
    }

    pub fn balance_summary(&self) -> String {
        format!("Your current balance: {}", self.currency.format(self.balance))
    }

    pub fn export_state(&self) -> AccountState {
        AccountState {
            balance: self.balance,
            transaction_history: self.transaction_history.clone()
        }
    }

    /// Replaces balance and history with a previously exported
    /// snapshot. History strings are taken verbatim, never
    /// reinterpreted.
    pub fn import_state(&mut self, state: AccountState) {
        self.balance = state.balance;
        self.transaction_history = state.transaction_history;
    }
}


#[cfg(test)]
mod tests {
    use super::{Account, AccountState};
    use crate::core::currency::CurrencyFormat;
    use crate::core::error::LedgerError;

    use rstest::{fixture, rstest};

    #[fixture]
    fn account() -> Account {
        Account::new(CurrencyFormat::default())
    }

    #[rstest]
    #[case(0.0)]
    #[case(-5.0)]
    fn deposit_rejects_non_positive(mut account: Account, #[case] amount: f64) {
        let res = account.deposit(amount);

        assert!(matches!(res, Err(LedgerError::InvalidAmount { .. })));
        assert_eq!(account.balance(), 0.0);
        assert!(account.history().is_empty());
    }

    #[rstest]
    #[case(0.0)]
    #[case(-17.5)]
    fn withdraw_rejects_non_positive(mut account: Account, #[case] amount: f64) {
        account.deposit(100.0).unwrap();
        let res = account.withdraw(amount);

        assert!(matches!(res, Err(LedgerError::InvalidAmount { .. })));
        assert_eq!(account.balance(), 100.0);
        assert_eq!(account.history().len(), 1);
    }

    #[rstest]
    fn withdraw_rejects_overdraw(mut account: Account) {
        account.deposit(100.0).unwrap();
        let res = account.withdraw(150.0);

        assert_eq!(res, Err(LedgerError::InsufficientFunds {
            requested: 150.0,
            available: 100.0
        }));
        assert_eq!(account.balance(), 100.0);
        assert_eq!(account.history().len(), 1);
    }

    #[rstest]
    fn deposit_withdraw_scenario(mut account: Account) {
        account.deposit(100.0).unwrap();
        assert_eq!(account.balance(), 100.0);
        assert_eq!(account.history().len(), 1);

        assert!(account.withdraw(150.0).is_err());
        assert_eq!(account.balance(), 100.0);
        assert_eq!(account.history().len(), 1);

        account.withdraw(40.0).unwrap();
        assert_eq!(account.balance(), 60.0);
        assert_eq!(account.history().len(), 2);
    }

    #[rstest]
    fn mixed_sequence_accumulates(mut account: Account) {
        account.deposit(200.0).unwrap();
        account.deposit(50.0).unwrap();
        assert!(account.withdraw(1000.0).is_err());
        account.withdraw(30.0).unwrap();
        assert!(account.deposit(-1.0).is_err());
        account.withdraw(20.0).unwrap();

        // deposits minus accepted withdrawals; one entry per accepted op
        assert_eq!(account.balance(), 200.0);
        assert_eq!(account.history().len(), 4);
    }

    #[rstest]
    fn receipts_are_appended_in_order(mut account: Account) {
        let first = account.deposit(100.0).unwrap();
        let second = account.withdraw(40.0).unwrap();

        assert_eq!(account.history(), [first.clone(), second.clone()]);
        assert!(first.starts_with("Deposit: +$100.00. New balance: $100.00."));
        assert!(second.starts_with("Withdrawal: -$40.00. New balance: $60.00."));
    }

    #[rstest]
    fn balance_summary_formats_currency(mut account: Account) {
        assert_eq!(account.balance_summary(), "Your current balance: $0.00");

        account.deposit(1234.5).unwrap();
        assert_eq!(account.balance_summary(), "Your current balance: $1,234.50");
    }

    #[rstest]
    fn state_round_trip(mut account: Account) {
        account.deposit(100.0).unwrap();
        account.withdraw(25.0).unwrap();
        let state = account.export_state();

        let mut restored = Account::new(CurrencyFormat::default());
        restored.import_state(state.clone());

        assert_eq!(restored.balance(), account.balance());
        assert_eq!(restored.history(), account.history());
        assert_eq!(restored.export_state(), state);
    }

    #[rstest]
    fn import_replaces_previous_state(mut account: Account) {
        account.deposit(500.0).unwrap();

        account.import_state(AccountState::default());

        assert_eq!(account.balance(), 0.0);
        assert!(account.history().is_empty());
    }
}
