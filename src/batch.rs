use std::io::{self, Write};
use std::time::Duration;

use tokio::time::sleep;

use crate::{AddressClient, AddressRecord, Country};

/// Outcome of one batch run.
#[derive(Debug, Default)]
pub struct BatchSummary {
    /// Successful records in arrival order.
    pub records: Vec<AddressRecord>,
    /// Number of items that failed after exhausting their attempts.
    pub failed: usize,
}

impl BatchSummary {
    /// Total items attempted: successes plus failures.
    pub fn attempted(&self) -> usize {
        self.records.len() + self.failed
    }
}

/// Fetches `count` records for one country, sequentially.
///
/// Every item gets exactly one [`AddressClient::fetch`] call; a failed item
/// never aborts the batch. The inter-request `delay` is applied after every
/// item except the last, whether or not that item succeeded. Progress and a
/// final summary are printed to stdout.
pub async fn run_batch(
    client: &AddressClient,
    country: &Country,
    count: u32,
    delay: Duration,
) -> BatchSummary {
    let mut summary = BatchSummary::default();

    println!();
    println!("{}", "=".repeat(60));
    println!("  Generating {count} {} identities", country.name);
    println!("{}", "=".repeat(60));
    println!();

    for i in 1..=count {
        print!("[{i}/{count}] Fetching address... ");
        io::stdout().flush().ok();

        match client.fetch(country.code).await {
            Ok(record) => {
                let name = record.full_name().unwrap_or("N/A").to_owned();
                println!("ok ({name})");
                summary.records.push(record);
            }
            Err(err) => {
                println!("failed");
                tracing::warn!(item = i, error = %err, "address fetch failed");
                summary.failed += 1;
            }
        }

        // Self-imposed rate limit toward the remote service.
        if i < count {
            sleep(delay).await;
        }
    }

    println!();
    println!("{}", "=".repeat(60));
    println!(
        "  Summary: {} succeeded, {} failed",
        summary.records.len(),
        summary.failed
    );
    println!("{}", "=".repeat(60));
    println!();

    summary
}
