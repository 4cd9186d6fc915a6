use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use trivia_api::config::{ApiConfig, LoggingConfig};
use trivia_api::handlers::AppState;
use trivia_api::helpers::database::{open_database, open_in_memory_database};
use trivia_api::routes::{configure_routes, cors};
use trivia_api::storage::{SqliteTriviaStore, TriviaStore};

#[derive(Debug, Parser)]
#[command(name = "trivia-api", version, about = "Trivia game HTTP backend")]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Override the configured listen host
    #[arg(long)]
    host: Option<String>,

    /// Override the configured listen port
    #[arg(short, long)]
    port: Option<u16>,

    /// Keep everything in an in-memory SQLite database
    #[arg(long)]
    in_memory: bool,
}

fn init_tracing(logging: &LoggingConfig) -> Option<WorkerGuard> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let (file_layer, guard) = match &logging.directory {
        Some(directory) => {
            let appender = tracing_appender::rolling::daily(directory, "trivia-api.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (
                Some(fmt::layer().with_writer(writer).with_ansi(false)),
                Some(guard),
            )
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .with(file_layer)
        .init();

    guard
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (mut config, config_path) =
        ApiConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    let _log_guard = init_tracing(&config.logging);
    info!(path = %config_path.display(), "Loaded configuration");

    let connection = if cli.in_memory {
        info!("Using in-memory database");
        open_in_memory_database()?
    } else {
        info!(path = %config.database.path.display(), "Opening database");
        open_database(&config.database.path).with_context(|| {
            format!(
                "Failed to open database at {}",
                config.database.path.display()
            )
        })?
    };

    let store: Arc<dyn TriviaStore> = Arc::new(SqliteTriviaStore::new(connection));
    let state = web::Data::new(AppState::new(store).with_page_size(config.pagination.page_size));

    let bind_addr = config.bind_address();
    info!("Starting trivia-api server at http://{}", bind_addr);

    let cors_config = config.cors.clone();
    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(cors(&cors_config))
            .wrap(Logger::default())
            .configure(configure_routes)
    })
    .bind(&bind_addr)?
    .run()
    .await?;

    Ok(())
}
