use anyhow::Context;
use pankh_gatekeeper::app::App;
use pankh_gatekeeper::config::Config;
use pankh_gatekeeper::telemetry::init_tracing;
use pankh_gatekeeper::{Gatekeeper, error, server};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = Config::from_env().context("loading configuration")?;
    init_tracing(config.log_format);
    error::install_panic_hook();

    let gatekeeper =
        Gatekeeper::new(config.gatekeeper_options()).context("building origin gatekeeper")?;
    info!(
        version = env!("CARGO_PKG_VERSION"),
        allowed_origins = config.allowed_origins.len(),
        fallback = ?gatekeeper.options().fallback,
        "starting server"
    );

    let app = App::new(gatekeeper);
    server::serve(config.socket_addr(), app.into_router())
        .await
        .with_context(|| format!("serving on {}", config.socket_addr()))?;

    Ok(())
}
