//! Payroll HTTP server.
//!
//! Usage: `payroll-server [config.yaml]` (defaults to `./payroll.yaml`; a
//! missing file means default settings). Employee data is written back to
//! the configured file on Ctrl-C.

use std::process::ExitCode;

use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use hr_payroll::api::{AppState, create_router};
use hr_payroll::config::ConfigLoader;
use hr_payroll::registry::Registry;
use hr_payroll::store::JsonFileStore;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "Payroll server stopped");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "payroll.yaml".to_string());
    let config = ConfigLoader::load_or_default(&config_path)?.into_config();

    let store = JsonFileStore::new(&config.data_file);
    let registry = Registry::initialize_with_policy(store, config.unknown_department_policy)?;
    let state = AppState::new(registry);

    let listener = TcpListener::bind(config.bind_address.as_str()).await?;
    info!(address = %config.bind_address, "Payroll server listening");

    axum::serve(listener, create_router(state.clone()))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    state.registry().persist()?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!(error = %err, "Failed to listen for shutdown signal, serving until killed");
        std::future::pending::<()>().await;
    }
    info!("Shutting down, saving employee data");
}
