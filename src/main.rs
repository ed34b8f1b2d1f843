//! Interactive VAT and business register checker.

use std::io;

use anyhow::Context;
use nordcheck::{Config, Menu, Verifier};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let verifier = Verifier::new(Config::default()).context("failed to set up HTTP client")?;
    log::info!("logging checks to {}", verifier.store().path().display());

    let mut menu = Menu::new(io::stdin().lock(), io::stdout().lock());
    menu.run(&verifier).context("console I/O failed")?;
    Ok(())
}
