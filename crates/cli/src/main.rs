use std::io;

use stockroom_cli::{CliConfig, Session};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::from_env();
    stockroom_observability::init(config.log_format);
    for warning in &config.warnings {
        tracing::warn!("{warning}");
    }
    tracing::info!(
        currency_symbol = %config.currency_symbol,
        log_format = ?config.log_format,
        "starting inventory session"
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(config, stdin.lock(), stdout.lock());
    session.run()?;

    tracing::info!(products = session.store().len(), "session ended");
    Ok(())
}
