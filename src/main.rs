use anyhow::Result;
use shortlink::config::{self, Config};
use shortlink::server;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = config::load_from_env()?;

    init_tracing(&config);

    tracing::info!(env = %config.env, "starting shortlink");
    tracing::debug!("debug messages enabled");
    config.print_summary();

    server::run(config).await
}

/// Installs the global subscriber for the configured profile.
///
/// `RUST_LOG`, when set, takes precedence over the profile's level.
fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.env.default_log_level()));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if config.env.json_logs() {
        builder.json().init();
    } else {
        builder.init();
    }
}
