//! Libam Shipping JSON API Server

use std::process;

use salvo::{conn::Listener as _, prelude::*};
use tracing::{error, info};

use libam_app::context::AppContext;

use crate::{config::ServerConfig, observability::Observability, state::State};

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod config;
mod errors;
mod extensions;
mod healthcheck;
mod home;
mod observability;
mod router;
mod shipments;
mod shutdown;
mod state;
#[cfg(test)]
mod test_helpers;

/// Libam Shipping JSON API Server entry point
///
/// Exits with status 1 when configuration, storage or the listener cannot be
/// set up.
#[tokio::main]
pub async fn main() {
    // Load configuration from .env and CLI arguments
    let config = ServerConfig::load().unwrap_or_else(|e| {
        #[expect(
            clippy::print_stderr,
            reason = "logging not initialized yet, must use eprintln for config errors"
        )]
        {
            eprintln!("Configuration error: {e}");
        }

        process::exit(1);
    });

    let observability = Observability::init(&config).unwrap_or_else(|e| {
        #[expect(
            clippy::print_stderr,
            reason = "logging failed to initialize, must use eprintln"
        )]
        {
            eprintln!("Observability error: {e}");
        }

        process::exit(1);
    });

    let app = match AppContext::from_database_url(&config.database.database_url).await {
        Ok(app) => app,
        Err(init_error) => {
            error!("failed to initialize app context: {init_error}");

            process::exit(1);
        }
    };

    let addr = config.socket_addr();

    let acceptor = match TcpListener::new(addr.clone()).try_bind().await {
        Ok(acceptor) => acceptor,
        Err(bind_error) => {
            error!("failed to bind {addr}: {bind_error}");

            process::exit(1);
        }
    };

    info!("server running at http://{addr}");

    let server = Server::new(acceptor);

    let handle = server.handle();

    // Listen for shutdown signal
    tokio::spawn(async move {
        if let Err(error) = shutdown::listen(handle).await {
            error!("failed to listen for shutdown signal: {error}");
        }
    });

    server
        .serve(router::app_service(State::from_app_context(app)))
        .await;

    info!("server stopped");

    observability.shutdown();
}
