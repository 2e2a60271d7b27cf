//! `intervu-daemon` - runs the InterVu HTTP backend.

mod config;
mod logging;

use clap::Parser;
use intervu_core::SessionStore;
use std::sync::Arc;

use config::Args;

#[tokio::main]
async fn main() {
    // A missing .env file is fine; real env vars and flags still apply.
    dotenv::dotenv().ok();
    let args = Args::parse();

    if let Err(e) = logging::init(args.log_dir.as_deref()) {
        eprintln!("{}", e);
        std::process::exit(1);
    }

    if let Err(e) = run(args).await {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<(), String> {
    let config = args.server_config()?;
    log::info!(
        "Starting InterVu backend ({} environment, CORS origins: {:?}, origin regex: {:?})",
        config.environment,
        config.cors.allowed_origins,
        config.cors.origin_regex
    );

    // Sessions live in this process only; they are lost on restart.
    let store = Arc::new(SessionStore::new());
    let app = intervu_http::app(&config, store)?;
    let listener = intervu_http::bind(config.addr).await?;

    intervu_http::serve(listener, app, shutdown_signal()).await
}

/// Resolve on Ctrl-C, or SIGTERM on unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            log::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                log::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
