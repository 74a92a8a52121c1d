use crate::account::Account;

pub mod in_memory_store;

/// Passive holder of account records.
///
/// `create` and `update` both overwrite the record stored under `account.id`.
/// They are kept apart so callers state their intent, the store does not
/// enforce it.
pub trait AccountStore {
    fn get(&self, id: &str) -> Option<Account>;

    fn create(&mut self, account: Account);

    fn update(&mut self, account: Account);

    fn exists(&self, id: &str) -> bool;

    /// Drops every record.
    fn reset(&mut self);

    fn accounts(&self) -> impl Iterator<Item = Account> + '_;
}
