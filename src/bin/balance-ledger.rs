use std::fs::File;

use anyhow::{Context, Result};
use balance_ledger::{bin_utils::Service, telemetry};

fn main() -> Result<()> {
    telemetry::init();

    let filename = std::env::args()
        .nth(1)
        .context("Expected a file name as the first argument")?;
    let file = File::open(&filename).with_context(|| format!("Failed to open `{filename}`"))?;

    let service = Service {
        input: file,
        output: &mut std::io::stdout(),
        error_printer: Box::new(|line, err| {
            tracing::warn!(line, %err, "event rejected");
        }),
    };
    service.run()
}
