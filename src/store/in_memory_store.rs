use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::account::{Account, AccountId};

use super::AccountStore;

#[derive(Debug, Default)]
pub struct InMemoryAccountStore {
    balances: HashMap<AccountId, Decimal>,
}

impl InMemoryAccountStore {
    pub fn len(&self) -> usize {
        self.balances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.balances.is_empty()
    }

    fn upsert(&mut self, account: Account) {
        self.balances.insert(account.id, account.balance);
    }
}

impl AccountStore for InMemoryAccountStore {
    fn get(&self, id: &str) -> Option<Account> {
        self.balances
            .get_key_value(id)
            .map(|(id, balance)| Account::new(id.clone(), *balance))
    }

    fn create(&mut self, account: Account) {
        self.upsert(account);
    }

    fn update(&mut self, account: Account) {
        self.upsert(account);
    }

    fn exists(&self, id: &str) -> bool {
        self.balances.contains_key(id)
    }

    fn reset(&mut self) {
        self.balances.clear();
    }

    fn accounts(&self) -> impl Iterator<Item = Account> + '_ {
        self.balances
            .iter()
            .map(|(id, balance)| Account::new(id.clone(), *balance))
    }
}
