use anyhow::{Context, Result};
use clap::Parser;

#[derive(Parser)]
#[command(name = "cashaddr")]
#[command(about = "Bitcoin Cash address decoding and encoding tool", long_about = None)]
#[command(version)]
struct Cli {
    /// Bitcoin Cash address, with or without the prefix
    address: String,
}

fn run(address: &str) -> Result<()> {
    let decoded = cashaddr::decode(address)?;
    println!("\nDecoding Result:");
    println!("{decoded}");
    println!("\nDebug Information:");
    println!("{}", decoded.diagnostics);

    let encoded = decoded
        .encode()
        .context("Failed to re-encode the decoded address")?;
    println!("\nRe-encoded Address:");
    println!("{encoded}");
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(&cli.address) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
