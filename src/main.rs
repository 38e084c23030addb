use anyhow::Result;
use clap::Parser;
use store_report_rs::{Config, run, setup_logging};

fn main() -> Result<()> {
    setup_logging()?;

    let config = Config::parse();
    run(&config)?;

    Ok(())
}
