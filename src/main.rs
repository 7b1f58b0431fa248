use std::net::SocketAddr;

use retroboard::config::database::establish_connection;
use retroboard::config::AppConfig;
use retroboard::state::AppState;
use retroboard::utils::logging::init_logging;
use retroboard::app;

#[tokio::main]
async fn main() {
    // 1. Load environment
    dotenvy::dotenv().ok();

    // 2. Initialize logging (guard must live for the whole process)
    let _guard = init_logging();

    // 3. Load configuration
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // 4. Connect to the database
    let db = match establish_connection(&config.database_url).await {
        Ok(db) => db,
        Err(e) => {
            tracing::error!("Failed to connect to the database: {}", e);
            std::process::exit(1);
        }
    };

    // 5. Assemble and run the server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let state = AppState { db, config };
    let app = app(state);

    tracing::info!("Server listening on {}", addr);

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("Failed to bind {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
