use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;

pub type AccountId = String;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountEventKind {
    /// First write for an account, balance starts at the event amount.
    Opened,
    Credited,
    Debited,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountEvent {
    pub account_id: AccountId,
    pub amount: Decimal,
    pub kind: AccountEventKind,
}

impl AccountEvent {
    pub fn opened(account_id: &str, amount: Decimal) -> Self {
        Self::new(account_id, amount, AccountEventKind::Opened)
    }

    pub fn credited(account_id: &str, amount: Decimal) -> Self {
        Self::new(account_id, amount, AccountEventKind::Credited)
    }

    pub fn debited(account_id: &str, amount: Decimal) -> Self {
        Self::new(account_id, amount, AccountEventKind::Debited)
    }

    fn new(account_id: &str, amount: Decimal, kind: AccountEventKind) -> Self {
        Self {
            account_id: account_id.to_owned(),
            amount,
            kind,
        }
    }
}

#[derive(Debug, Error)]
pub enum AccountError {
    #[error("Balance of account `{id}` is out of the representable range")]
    Overflow { id: AccountId },
}

/// Balance holder, also used as the `(id, balance)` snapshot returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Account {
    pub id: AccountId,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub balance: Decimal,
}

impl Account {
    pub fn new(id: impl Into<AccountId>, balance: Decimal) -> Self {
        Self {
            id: id.into(),
            balance,
        }
    }

    /// Balances are allowed to go negative, events are applied as is.
    /// On overflow the balance is left unchanged.
    pub fn apply(&mut self, event: &AccountEvent) -> Result<(), AccountError> {
        let balance = match event.kind {
            AccountEventKind::Opened => Some(event.amount),
            AccountEventKind::Credited => self.balance.checked_add(event.amount),
            AccountEventKind::Debited => self.balance.checked_sub(event.amount),
        };
        self.balance = balance.ok_or_else(|| AccountError::Overflow {
            id: self.id.clone(),
        })?;
        Ok(())
    }
}
