use anyhow::{Context, Result};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use toy_rsa::RsaService;

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let service = RsaService::from_env().context("invalid key generation config")?;

    toy_rsa::ui::create_app(service).context("error running application")?;
    Ok(())
}
