use anyhow::Result;
use std::io;

mod args;
mod logging;

fn main() -> Result<()> {
    logging::setup_logging()?;

    let args = args::Args::from_env();
    if !args.operands.is_empty() {
        tracing::warn!(operands = ?args.operands, "ignoring trailing operands");
    }

    common::write_address(&mut io::stdout().lock(), &args.ip)?;
    Ok(())
}
