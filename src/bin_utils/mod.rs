//! Bootstraps [`crate::processor`] for the replay binary: reads events from CSV,
//! applies them in order and prints the final balances.

use std::io::{Read, Write};

use crate::{
    processor::{LedgerError, LedgerProcessor, in_memory_processor::InMemoryLedgerProcessor},
    store::AccountStore,
};
use anyhow::Result;
use csv_parser::CsvEventParser;
use csv_printer::{BalanceRow, print_balances};
use thiserror::Error;
pub mod csv_parser;
pub mod csv_printer;

/// Why a single CSV row was skipped. None of these stop the replay.
#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("Malformed row: {0}")]
    Malformed(#[from] csv::Error),
    #[error("Invalid amount `{amount}`")]
    InvalidAmount { amount: String },
    #[error(transparent)]
    Rejected(#[from] LedgerError),
}

pub struct Service<'w, R, W: 'w> {
    pub input: R,
    pub output: &'w mut W,
    pub error_printer: Box<dyn FnMut(u64, ReplayError)>,
}

impl<'w, R, W> Service<'w, R, W>
where
    R: Read,
    W: Write + 'w,
{
    pub fn run(mut self) -> Result<()> {
        let parser = CsvEventParser::new(self.input);

        let mut processor = InMemoryLedgerProcessor::new();

        for (line, row) in parser {
            let outcome = row
                .and_then(|event| processor.process(event).map_err(ReplayError::from));
            if let Err(err) = outcome {
                (self.error_printer)(line, err);
            }
        }

        let mut balances: Vec<_> = processor
            .store()
            .accounts()
            .map(|acc| BalanceRow {
                account: acc.id,
                balance: acc.balance,
            })
            .collect();
        balances.sort_by(|a, b| a.account.cmp(&b.account));
        print_balances(self.output, balances.into_iter())
    }
}
