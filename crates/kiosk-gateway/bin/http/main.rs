use anyhow::Context;
use clap::Parser;
use kiosk_gateway::bootstrap::build_shortener;
use kiosk_gateway::cli::{Cli, StorageBackend};
use kiosk_gateway::{telemetry, App, AppState};
use kiosk_storage::{InMemoryRepository, MySqlRepository};
use kiosk_tracker::TrackerStore;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _telemetry = telemetry::init(cli.log_format, cli.otlp_endpoint.as_deref())?;

    let validation = cli.url_validation.into();
    let shortener = match cli.storage {
        StorageBackend::InMemory => {
            info!("storing short links in memory");
            build_shortener(Arc::new(InMemoryRepository::new()), cli.id_policy, validation).await?
        }
        StorageBackend::Mysql => {
            let dsn = cli
                .mysql_dsn
                .as_deref()
                .context("--mysql-dsn is required with --storage mysql")?;
            let repository = MySqlRepository::connect(dsn)
                .await
                .context("failed to connect to MySQL")?;
            repository
                .ensure_schema()
                .await
                .context("failed to create the short_urls table")?;
            info!("storing short links in MySQL");
            build_shortener(Arc::new(repository), cli.id_policy, validation).await?
        }
    };

    let state = AppState::new(shortener, Arc::new(TrackerStore::new()), cli.public_base_url);
    let app = App::router(state);

    let listener = TcpListener::bind(cli.listen_addr).await?;
    info!(listen_addr = %listener.local_addr()?, "starting gateway server");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    info!("gateway server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => info!("received Ctrl+C, shutting down"),
            Err(e) => {
                error!(error = %e, "failed to listen for Ctrl+C");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("received terminate signal, shutting down");
            }
            Err(e) => {
                error!(error = %e, "failed to install terminate handler");
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
