use crate::core::AccountState;

/// Persistence seam for account state. Loading never fails: a missing
/// file is a normal first run and an unreadable one falls back to the
/// default state, so callers always get something to work with.
pub trait StateStore {
    fn load(&self) -> AccountState;
    fn save(&self, state: &AccountState) -> anyhow::Result<()>;
}
