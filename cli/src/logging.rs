use anyhow::Result;
use tracing_subscriber::FmtSubscriber;

/// Install a stderr subscriber. Stdout is reserved for the address line.
pub fn setup_logging() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(tracing::Level::WARN)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
