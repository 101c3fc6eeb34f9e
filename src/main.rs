use anyhow::Context;
use clap::Parser;
use product_page::config::Config;
use product_page::logging::init_tracing;
use product_page::shutdown::ShutdownCoordinator;
use product_page::ui::runtime;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "product-page", version, about = "Terminal product page with cart and reviews")]
struct Cli {
    /// Path to the config file (default: <config dir>/product-page/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Treat the shopper as a premium member (free shipping)
    #[arg(long)]
    premium: bool,

    /// Log filter, e.g. "debug" or "product_page=trace" (RUST_LOG wins)
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let mut config = Config::load_from(&config_path)
        .with_context(|| format!("loading config from {}", config_path.display()))?;
    if cli.premium {
        config.store.premium_member = true;
    }

    let log_path = init_tracing(&config.logging, cli.log_level.as_deref())?;
    tracing::info!(
        config = %config_path.display(),
        log = %log_path.display(),
        "configuration loaded"
    );

    let shutdown = ShutdownCoordinator::new();
    shutdown
        .install_signal_handlers()
        .context("installing signal handlers")?;

    runtime::run(&config, shutdown.handle()).context("running terminal UI")?;
    Ok(())
}
