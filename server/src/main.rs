//! HTTP server for the bookshelf GraphQL API.
//!
//! Books are kept in memory and never change, so every start serves the same three records.

pub mod app;
pub mod config;
pub mod errors;

#[cfg(test)]
mod api_testing;

use crate::{
    app::{ENDPOINT, build_app},
    config::Config,
    errors::ServerError,
};
use axum::{Router, serve};
use bookshelf::{RecordStore, build_schema};
use clap::Parser as _;
use std::{future::pending, io::stderr, process::ExitCode, sync::Arc};
use tokio::{net::TcpListener, signal::ctrl_c};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. `RUST_LOG` takes precedence over `default_filter`.
fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    // Logs go to stderr so that `--print-schema` output stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(stderr)
        .init();
}

/// Parses the configuration, then either prints the schema or serves it until shutdown.
#[tokio::main]
async fn main() -> ExitCode {
    let config = Config::parse();
    init_tracing(&config.log);

    let schema = build_schema(Arc::new(RecordStore::initialize()));
    if config.print_schema {
        let sdl = schema.sdl();
        println!("{sdl}");
        return ExitCode::SUCCESS;
    }

    let app = build_app(schema, !config.no_graphiql);
    match run(&config, app).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "server stopped");
            ExitCode::FAILURE
        },
    }
}

/// Binds the configured address and serves `app` until shutdown.
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server loop fails.
async fn run(config: &Config, app: Router) -> Result<(), ServerError> {
    let addr = config.addr();
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;
    info!(%addr, endpoint = ENDPOINT, "server listening");

    serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|source| ServerError::Serve { addr, source })
}

/// Resolves once Ctrl-C is received.
async fn shutdown_signal() {
    if let Err(err) = ctrl_c().await {
        error!(%err, "unable to listen for shutdown signal");
        pending::<()>().await;
    }
    info!("shutting down");
}
