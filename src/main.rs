use anyhow::Result;
use std::io::{self, Write};
use tracing::Level;

fn main() -> Result<()> {
    // Logs go to stderr so stdout carries only the transcript
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(Level::WARN)
        .init();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    bank_accounts::script::run(&mut out)?;
    out.flush()?;

    Ok(())
}
