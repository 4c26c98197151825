use dotenvy::dotenv;

mod api {
    pub mod error;
    pub mod tags;
    pub mod health {
        pub mod routes;
    }
    pub mod group {
        pub mod dto;
        pub mod error_mapper;
        pub mod routes;
    }
    pub mod message {
        pub mod dto;
        pub mod error_mapper;
        pub mod routes;
    }
    pub mod user {
        pub mod dto;
        pub mod error_mapper;
        pub mod routes;
    }
}
mod config {
    pub mod app_config;
    pub mod cors_config;
    pub mod firebase_config;
    pub mod server_config;
}
mod setup {
    pub mod dependency_injection;
    pub mod server;
}

use config::{app_config::AppConfig, firebase_config};
use setup::{dependency_injection::DependencyContainer, server::Server};

/// REST API Entry Point
///
/// Initializes the application, registers the Firebase app, wires
/// dependencies, and starts the HTTP server.
///
/// - config/: Application configuration (server, CORS, Firebase)
/// - setup/: Dependency injection and server setup
/// - api/: Route handlers and DTOs
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 2. Load environment variables
    dotenv().ok();

    // 3. Load configuration
    let config = AppConfig::from_env();

    // 4. Register the Firebase app; without a database there is nothing to serve
    let database = firebase_config::init_database(&config.firebase)
        .inspect_err(|e| tracing::error!(error = %e, "Firebase initialization failed"))?;

    // 5. Wire dependencies
    let container = DependencyContainer::new(database);

    // 6. Run server
    Server::run(config, container).await?;

    Ok(())
}
