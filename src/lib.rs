/// Account record and the balance events applied to it.
pub mod account;

/// Raw events from the outside world, parsed into typed ledger commands.
pub mod command;

/// Account storage interface, plus "in memory" implementation.
pub mod store;

/// Ledger processor interface, its in memory implementation and a
/// lock-guarded handle for sharing it between threads.
/// Owns every business rule: how an event mutates one or two accounts.
pub mod processor;

/// CSV replay of an event file, used by the `balance-ledger` binary and
/// the integration tests.
pub mod bin_utils;

/// HTTP API served by the `balance-ledger-api` binary.
pub mod http;

/// Server settings read from the environment.
pub mod config;

/// Process-wide `tracing` subscriber setup shared by both binaries.
pub mod telemetry;
