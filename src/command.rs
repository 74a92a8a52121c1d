use std::{fmt, str::FromStr};

use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

use crate::account::AccountId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Deposit,
    Withdraw,
    Transfer,
}

impl FromStr for EventKind {
    type Err = LedgerCommandError;

    fn from_str(kind: &str) -> Result<Self, Self::Err> {
        match kind.to_ascii_lowercase().as_str() {
            "deposit" => Ok(Self::Deposit),
            "withdraw" => Ok(Self::Withdraw),
            "transfer" => Ok(Self::Transfer),
            _ => Err(LedgerCommandError::InvalidEventType {
                kind: kind.to_owned(),
            }),
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Deposit => "deposit",
            Self::Withdraw => "withdraw",
            Self::Transfer => "transfer",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventField {
    Origin,
    Destination,
}

impl fmt::Display for EventField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Origin => "origin",
            Self::Destination => "destination",
        })
    }
}

/// Event as it arrives from the outside, before the kind is known to be valid.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawEvent {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub origin: Option<AccountId>,
    #[serde(default)]
    pub destination: Option<AccountId>,
    #[serde(
        default,
        deserialize_with = "rust_decimal::serde::arbitrary_precision::deserialize"
    )]
    pub amount: Decimal,
}

#[derive(Debug, Error)]
pub enum LedgerCommandError {
    #[error("Invalid event type `{kind}`")]
    InvalidEventType { kind: String },
    #[error("Field `{field}` is required for {kind}")]
    MissingField { kind: EventKind, field: EventField },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerCommand {
    Deposit {
        destination: AccountId,
        amount: Decimal,
    },
    Withdraw {
        origin: AccountId,
        amount: Decimal,
    },
    Transfer {
        origin: AccountId,
        destination: AccountId,
        amount: Decimal,
    },
}

impl LedgerCommand {
    pub fn parse_command(event: RawEvent) -> Result<Self, LedgerCommandError> {
        let kind: EventKind = event.kind.parse()?;
        let amount = event.amount;
        match kind {
            EventKind::Deposit => Ok(Self::Deposit {
                destination: Self::required(kind, EventField::Destination, event.destination)?,
                amount,
            }),
            EventKind::Withdraw => Ok(Self::Withdraw {
                origin: Self::required(kind, EventField::Origin, event.origin)?,
                amount,
            }),
            EventKind::Transfer => Ok(Self::Transfer {
                origin: Self::required(kind, EventField::Origin, event.origin)?,
                destination: Self::required(kind, EventField::Destination, event.destination)?,
                amount,
            }),
        }
    }

    fn required(
        kind: EventKind,
        field: EventField,
        value: Option<AccountId>,
    ) -> Result<AccountId, LedgerCommandError> {
        value.ok_or(LedgerCommandError::MissingField { kind, field })
    }

    pub fn kind(&self) -> EventKind {
        match self {
            Self::Deposit { .. } => EventKind::Deposit,
            Self::Withdraw { .. } => EventKind::Withdraw,
            Self::Transfer { .. } => EventKind::Transfer,
        }
    }

    pub fn origin(&self) -> Option<&str> {
        match self {
            Self::Deposit { .. } => None,
            Self::Withdraw { origin, .. } | Self::Transfer { origin, .. } => Some(origin.as_str()),
        }
    }

    pub fn destination(&self) -> Option<&str> {
        match self {
            Self::Withdraw { .. } => None,
            Self::Deposit { destination, .. } | Self::Transfer { destination, .. } => {
                Some(destination.as_str())
            }
        }
    }

    pub fn amount(&self) -> Decimal {
        match self {
            Self::Deposit { amount, .. }
            | Self::Withdraw { amount, .. }
            | Self::Transfer { amount, .. } => *amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    fn raw(kind: &str, origin: Option<&str>, destination: Option<&str>) -> RawEvent {
        RawEvent {
            kind: kind.to_owned(),
            origin: origin.map(ToOwned::to_owned),
            destination: destination.map(ToOwned::to_owned),
            amount: dec!(10),
        }
    }

    #[test]
    fn kind_is_case_insensitive() {
        assert_eq!("Deposit".parse::<EventKind>().unwrap(), EventKind::Deposit);
        assert_eq!("WITHDRAW".parse::<EventKind>().unwrap(), EventKind::Withdraw);
        assert_eq!("transfer".parse::<EventKind>().unwrap(), EventKind::Transfer);
    }

    #[test]
    fn parse_commands() {
        let cmd = LedgerCommand::parse_command(raw("deposit", None, Some("100"))).unwrap();
        assert_eq!(
            cmd,
            LedgerCommand::Deposit {
                destination: "100".to_owned(),
                amount: dec!(10)
            }
        );
        assert_eq!(cmd.origin(), None);
        assert_eq!(cmd.destination(), Some("100"));

        let cmd = LedgerCommand::parse_command(raw("Withdraw", Some("100"), None)).unwrap();
        assert_eq!(cmd.kind(), EventKind::Withdraw);
        assert_eq!(cmd.origin(), Some("100"));
        assert_eq!(cmd.destination(), None);

        let cmd = LedgerCommand::parse_command(raw("transfer", Some("100"), Some("300"))).unwrap();
        assert_eq!(cmd.kind(), EventKind::Transfer);
        assert_eq!(cmd.origin(), Some("100"));
        assert_eq!(cmd.destination(), Some("300"));
        assert_eq!(cmd.amount(), dec!(10));
    }

    #[test]
    fn ids_not_used_by_the_kind_are_ignored() {
        let cmd = LedgerCommand::parse_command(raw("deposit", Some("1"), Some("2"))).unwrap();
        assert_eq!(cmd.origin(), None);
    }

    #[test]
    fn invalid_event_type() {
        let err = LedgerCommand::parse_command(raw("refund", Some("1"), None)).unwrap_err();
        assert!(matches!(
            &err,
            LedgerCommandError::InvalidEventType { kind } if kind == "refund"
        ));
        assert_eq!(err.to_string(), "Invalid event type `refund`");
    }

    #[test]
    fn missing_fields() {
        let err = LedgerCommand::parse_command(raw("deposit", Some("1"), None)).unwrap_err();
        assert!(matches!(
            err,
            LedgerCommandError::MissingField {
                kind: EventKind::Deposit,
                field: EventField::Destination
            }
        ));

        let err = LedgerCommand::parse_command(raw("transfer", None, Some("2"))).unwrap_err();
        assert_eq!(err.to_string(), "Field `origin` is required for transfer");
    }

    #[test]
    fn json_amount_is_read_exactly() {
        let event: RawEvent = serde_json::from_str(
            r#"{"type":"deposit","destination":"A","amount":12345678901234567.89}"#,
        )
        .unwrap();
        assert_eq!(event.amount, dec!(12345678901234567.89));

        let event: RawEvent =
            serde_json::from_str(r#"{"type":"deposit","destination":"A","amount":0.1}"#).unwrap();
        assert_eq!(event.amount, dec!(0.1));
    }

    #[test]
    fn json_amount_defaults_to_zero() {
        let event: RawEvent =
            serde_json::from_str(r#"{"type":"withdraw","origin":"A"}"#).unwrap();
        assert_eq!(event.amount, Decimal::ZERO);
        assert_eq!(event.destination, None);
    }
}
