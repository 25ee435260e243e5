// src/main.rs

use scd_notify::{cli, config, logging, run};
use tracing::{error, info};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let code = match run_main().await {
        Ok(()) => 0,
        Err(err) => {
            error!(error = %err, "scd-notify failed");
            eprintln!("scd-notify error: {err}");
            1
        }
    };

    // Exit explicitly: the stdin forwarder may still be parked in a blocking
    // read, which would otherwise keep the runtime from shutting down.
    std::process::exit(code);
}

async fn run_main() -> scd_notify::errors::Result<()> {
    let args = cli::parse();

    let config_path = config::default_config_path();
    let loaded = config::load_and_validate(&config_path);

    logging::init_logging(loaded.as_ref().ok().map(|cfg| cfg.log_level()))?;
    info!(version = env!("CARGO_PKG_VERSION"), "---------- session start ----------");
    info!(path = %config_path.display(), "loading config");

    let cfg = loaded?;
    info!("config loaded successfully");

    run(cfg, args.passthrough).await
}
