use std::{io::Read, str::FromStr};

use crate::command::RawEvent;
use csv::{DeserializeRecordsIntoIter, Trim};
use rust_decimal::Decimal;
use serde::Deserialize;

use super::ReplayError;

/// CSV row as written in the file. The amount stays text so it is parsed as a
/// decimal directly instead of going through a float.
#[derive(Debug, Deserialize)]
struct EventRow {
    #[serde(rename = "type")]
    kind: String,
    origin: Option<String>,
    destination: Option<String>,
    amount: Option<String>,
}

impl EventRow {
    fn into_event(self) -> Result<RawEvent, ReplayError> {
        let amount = match self.amount {
            Some(amount) => Decimal::from_str(&amount)
                .or_else(|_| Decimal::from_scientific(&amount))
                .map_err(|_| ReplayError::InvalidAmount { amount })?,
            None => Decimal::ZERO,
        };
        Ok(RawEvent {
            kind: self.kind,
            origin: self.origin,
            destination: self.destination,
            amount,
        })
    }
}

/// Parses an event list in CSV format, `type,origin,destination,amount`.
///
/// Empty `origin`/`destination`/`amount` cells are read as absent.
pub struct CsvEventParser<R> {
    iter: DeserializeRecordsIntoIter<R, EventRow>,
}

impl<R> CsvEventParser<R>
where
    R: Read,
{
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(source);

        Self {
            iter: reader.into_deserialize(),
        }
    }
}

impl<R> Iterator for CsvEventParser<R>
where
    R: Read,
{
    type Item = (u64, Result<RawEvent, ReplayError>);

    fn next(&mut self) -> Option<Self::Item> {
        let curr_line = self.iter.reader().position().line();
        self.iter.next().map(|row| {
            let event = row
                .map_err(ReplayError::from)
                .and_then(EventRow::into_event);
            (curr_line, event)
        })
    }
}
