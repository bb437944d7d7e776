use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{Duration, Instant};

use addrgen::{run_batch, save_records, AddressClient, Country, COUNTRIES, DEFAULT_COUNTRY};
use anyhow::Context;
use clap::Parser;

/// Generate random identity/address records for 22+ countries.
#[derive(Parser, Debug)]
#[command(name = "addrgen", version)]
struct Cli {
    /// Country code (use --list to see all options)
    #[arg(short, long, default_value = DEFAULT_COUNTRY)]
    country: String,

    /// Number of addresses to generate
    #[arg(short = 'n', long, default_value_t = 10)]
    count: i64,

    /// Output JSON filename (default: addresses_COUNTRY_TIMESTAMP.json)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Delay between requests in seconds
    #[arg(short, long, default_value_t = 0.5)]
    delay: f64,

    /// List all supported countries and exit
    #[arg(long)]
    list: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .with_target(false)
        .init();

    println!("Multi-Country Address Generator");
    println!(
        "Educational use only - {} countries supported",
        COUNTRIES.len()
    );
    println!();

    if cli.list {
        list_countries();
        return Ok(ExitCode::SUCCESS);
    }

    let code = cli.country.to_lowercase();
    let Some(country) = addrgen::lookup(&code) else {
        eprintln!("Error: invalid country code '{}'", cli.country);
        eprintln!("Use --list to see all supported countries");
        return Ok(ExitCode::FAILURE);
    };

    if cli.count < 1 {
        eprintln!("Error: count must be at least 1");
        return Ok(ExitCode::FAILURE);
    }
    let count = cli.count as u32;

    if !cli.delay.is_finite() || cli.delay < 0.0 {
        eprintln!("Error: delay must be a non-negative number of seconds");
        return Ok(ExitCode::FAILURE);
    }
    let delay = Duration::from_secs_f64(cli.delay);

    if count > 1000 {
        println!("Warning: generating more than 1000 addresses may take a long time");
        println!("         and could trigger API rate limiting.");
        if !confirm("Continue? (y/n): ")? {
            println!("Aborted.");
            return Ok(ExitCode::SUCCESS);
        }
    }

    let output = cli
        .output
        .unwrap_or_else(|| default_output_path(country.code));

    println!(
        "Selected country: {} ({})",
        country.name,
        country.code.to_uppercase()
    );

    let client = AddressClient::new();
    let started = Instant::now();

    let summary = tokio::select! {
        summary = run_batch(&client, country, count, delay) => summary,
        _ = tokio::signal::ctrl_c() => {
            println!();
            println!("Interrupted by user. Exiting...");
            return Ok(ExitCode::SUCCESS);
        }
    };
    let elapsed = started.elapsed();

    if summary.records.is_empty() {
        eprintln!("No addresses were generated. Exiting.");
        return Ok(ExitCode::FAILURE);
    }

    print!("Saving to '{}'... ", output.display());
    io::stdout().flush().ok();
    if let Err(err) = save_records(&summary.records, &output) {
        println!("failed");
        eprintln!("Error: could not write output file: {err}");
        return Ok(ExitCode::FAILURE);
    }

    let size_kb = std::fs::metadata(&output)
        .map(|meta| meta.len() as f64 / 1024.0)
        .unwrap_or(0.0);
    println!("done ({size_kb:.1} KB)");
    println!();
    println!("  Country: {}", country.name);
    println!("  File: {}", output.display());
    println!("  Records: {}", summary.records.len());
    println!("  Time: {:.1}s", elapsed.as_secs_f64());

    Ok(ExitCode::SUCCESS)
}

fn list_countries() {
    let mut countries: Vec<&Country> = COUNTRIES.iter().collect();
    countries.sort_by_key(|country| country.code);

    println!("Supported countries:");
    for country in &countries {
        println!("  {:4} - {}", country.code.to_uppercase(), country.name);
    }
    println!();
    println!("Total: {} countries", countries.len());
}

fn confirm(prompt: &str) -> anyhow::Result<bool> {
    print!("{prompt}");
    io::stdout().flush().context("failed to flush stdout")?;

    let mut answer = String::new();
    io::stdin()
        .lock()
        .read_line(&mut answer)
        .context("failed to read confirmation")?;
    Ok(answer.trim().eq_ignore_ascii_case("y"))
}

fn default_output_path(code: &str) -> PathBuf {
    let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    PathBuf::from(format!("addresses_{code}_{timestamp}.json"))
}
