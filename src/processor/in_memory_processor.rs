use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::{
    account::{Account, AccountEvent},
    command::LedgerCommand,
    store::{AccountStore, in_memory_store::InMemoryAccountStore},
};

use super::{EventResult, LedgerError, LedgerProcessor};

/// Account touched by a command, with its balance after the command's events.
#[derive(Debug)]
struct StagedAccount {
    account: Account,
    existed: bool,
}

#[derive(Debug, Default)]
pub struct InMemoryLedgerProcessor<S = InMemoryAccountStore> {
    store: S,
}

impl InMemoryLedgerProcessor {
    pub fn new() -> Self {
        Self::with_store(InMemoryAccountStore::default())
    }
}

impl<S> InMemoryLedgerProcessor<S>
where
    S: AccountStore,
{
    pub fn with_store(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Validates the command against current state and turns it into account events.
    /// Events for the destination come before the origin's debit.
    fn handle_command(&self, command: &LedgerCommand) -> Result<Vec<AccountEvent>, LedgerError> {
        match command {
            LedgerCommand::Deposit {
                destination,
                amount,
            } => Ok(vec![self.credit_event(destination, *amount)]),
            LedgerCommand::Withdraw { origin, amount } => {
                self.require_account(origin)?;
                Ok(vec![AccountEvent::debited(origin, *amount)])
            }
            LedgerCommand::Transfer {
                origin,
                destination,
                amount,
            } => {
                self.require_account(origin)?;
                Ok(vec![
                    self.credit_event(destination, *amount),
                    AccountEvent::debited(origin, *amount),
                ])
            }
        }
    }

    fn require_account(&self, id: &str) -> Result<(), LedgerError> {
        if self.store.exists(id) {
            Ok(())
        } else {
            Err(LedgerError::AccountNotFound { id: id.to_owned() })
        }
    }

    fn credit_event(&self, id: &str, amount: Decimal) -> AccountEvent {
        if self.store.exists(id) {
            AccountEvent::credited(id, amount)
        } else {
            AccountEvent::opened(id, amount)
        }
    }

    /// Applies events to copies of the affected accounts, the store is not touched.
    fn stage(&self, events: &[AccountEvent]) -> Result<Vec<StagedAccount>, LedgerError> {
        let mut staged: Vec<StagedAccount> = Vec::with_capacity(events.len());
        for event in events {
            let idx = match staged
                .iter()
                .position(|s| s.account.id == event.account_id)
            {
                Some(idx) => idx,
                None => {
                    let current = self.store.get(&event.account_id);
                    let existed = current.is_some();
                    let account = current
                        .unwrap_or_else(|| Account::new(event.account_id.clone(), Decimal::ZERO));
                    staged.push(StagedAccount { account, existed });
                    staged.len() - 1
                }
            };
            staged[idx].account.apply(event)?;
        }
        Ok(staged)
    }

    fn commit(&mut self, staged: &[StagedAccount]) {
        for entry in staged {
            if entry.existed {
                self.store.update(entry.account.clone());
            } else {
                self.store.create(entry.account.clone());
            }
        }
    }
}

fn snapshot(staged: &[StagedAccount], id: Option<&str>) -> Option<Account> {
    let id = id?;
    staged
        .iter()
        .find(|s| s.account.id == id)
        .map(|s| s.account.clone())
}

impl<S> LedgerProcessor for InMemoryLedgerProcessor<S>
where
    S: AccountStore,
{
    fn execute(&mut self, command: LedgerCommand) -> Result<EventResult, LedgerError> {
        let events = self.handle_command(&command)?;
        let staged = self.stage(&events)?;
        // every balance is computed before the first write
        self.commit(&staged);

        let result = EventResult {
            origin: snapshot(&staged, command.origin()),
            destination: snapshot(&staged, command.destination()),
        };
        debug!(
            kind = %command.kind(),
            amount = %command.amount(),
            origin = ?result.origin,
            destination = ?result.destination,
            "event applied"
        );
        Ok(result)
    }

    fn balance(&self, id: &str) -> Option<Decimal> {
        self.store.get(id).map(|acc| acc.balance)
    }

    fn reset(&mut self) {
        self.store.reset();
        info!("ledger reset");
    }
}
