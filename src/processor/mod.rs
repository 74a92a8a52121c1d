use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;

use crate::{
    account::{Account, AccountError, AccountId},
    command::{LedgerCommand, LedgerCommandError, RawEvent},
};

pub mod in_memory_processor;
pub mod shared;

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error(transparent)]
    Command(#[from] LedgerCommandError),
    #[error("Account `{id}` not found")]
    AccountNotFound { id: AccountId },
    #[error(transparent)]
    Account(#[from] AccountError),
}

/// Post-mutation snapshots of the accounts touched by one event.
///
/// `origin` is set for withdraw and transfer, `destination` for deposit and transfer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EventResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<Account>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<Account>,
}

pub trait LedgerProcessor {
    /// Parses a raw event and applies it. On error nothing is written.
    fn process(&mut self, event: RawEvent) -> Result<EventResult, LedgerError> {
        let command = LedgerCommand::parse_command(event)?;
        self.execute(command)
    }

    fn execute(&mut self, command: LedgerCommand) -> Result<EventResult, LedgerError>;

    fn balance(&self, id: &str) -> Option<Decimal>;

    fn reset(&mut self);
}
