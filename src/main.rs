use car_shop::core::logging;
use car_shop::{AppState, Config, StorageBackend, create_router};
use sqlx::mysql::MySqlPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Inizializza la configurazione
    let config = Config::from_env()?;
    logging::init(&config)?;
    config.print_info();

    // Crea lo stato con il backend scelto
    let state = match config.storage_backend {
        StorageBackend::MySql => {
            let database_url = config
                .database_url
                .as_deref()
                .ok_or("DATABASE_URL must be set when STORAGE_BACKEND is mysql")?;

            let pool = MySqlPoolOptions::new()
                .max_connections(config.max_connections)
                .max_lifetime(Duration::from_secs(config.connection_lifetime_secs))
                .connect(database_url)
                .await
                .map_err(|e| {
                    error!("Failed to connect to the database: {}", e);
                    e
                })?;
            info!("Connected to MySQL");

            if config.run_migrations {
                sqlx::migrate!("./migrations").run(&pool).await?;
                info!("Migrations applied");
            }

            AppState::new(pool)
        }
        StorageBackend::Memory => AppState::in_memory(),
    };

    // Crea il router
    let app = create_router(Arc::new(state));

    // Definisci l'indirizzo
    let addr: SocketAddr = format!("{}:{}", config.server_host, config.server_port).parse()?;
    let listener = TcpListener::bind(addr).await?;
    info!("Server listening on http://{}", addr);

    // Avvia il server
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
