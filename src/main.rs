// Main entry point - Dependency injection and server setup
use std::sync::Arc;

use artist_dashboard::application::artist_repository::ArtistRepository;
use artist_dashboard::application::artist_service::ArtistService;
use artist_dashboard::application::chat_service::ChatService;
use artist_dashboard::application::dashboard_service::DashboardService;
use artist_dashboard::application::layout_repository::LayoutRepository;
use artist_dashboard::application::layout_store::WidgetLayoutStore;
use artist_dashboard::application::mode_controller::ModeController;
use artist_dashboard::infrastructure::config::{
    load_dashboard_config, load_default_layouts, DashboardConfig,
};
use artist_dashboard::infrastructure::file_layout_repository::FileLayoutRepository;
use artist_dashboard::infrastructure::http_artist_repository::HttpArtistRepository;
use artist_dashboard::infrastructure::persistence_worker::spawn_persistence_worker;
use artist_dashboard::infrastructure::sample_artist_repository::SampleArtistRepository;
use artist_dashboard::presentation::app_state::AppState;
use artist_dashboard::presentation::router::build_router;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Artist dashboard state service
#[derive(Parser, Debug)]
#[command(name = "artist-dashboard")]
#[command(about = "Serves dashboard modes, widget layouts, chat and artist stats", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP service (default)
    Serve,
    /// Delete saved layouts so every mode falls back to its default
    ClearLayouts {
        /// Only clear this mode's saved layout
        #[arg(long)]
        mode: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Load configuration
    let config = load_dashboard_config()?;

    // Initialize tracing; RUST_LOG wins over the configured level
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log.level)),
        )
        .init();

    let repository = Arc::new(FileLayoutRepository::new(&config.storage.layouts_path));

    match args.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(config, repository).await,
        Command::ClearLayouts { mode } => {
            match mode {
                Some(mode) => {
                    repository.clear_mode(&mode).await?;
                    tracing::info!("Cleared saved '{}' layout", mode);
                }
                None => {
                    repository.clear_all().await?;
                    tracing::info!("Cleared all saved layouts");
                }
            }
            Ok(())
        }
    }
}

async fn serve(config: DashboardConfig, repository: Arc<FileLayoutRepository>) -> anyhow::Result<()> {
    // Restore saved layouts and start the background writer
    let defaults = load_default_layouts(&config.storage.default_layouts_path)?;
    let saved = repository.load().await;
    tracing::info!(
        "Restored {} saved layouts from {}",
        saved.len(),
        repository.path().display()
    );
    let worker = spawn_persistence_worker(repository.clone());

    // Create services (application layer)
    let layouts = WidgetLayoutStore::with_layouts(saved, defaults, worker.handle);
    let dashboard_service = DashboardService::new(ModeController::new(), layouts);

    let artist_repository: Arc<dyn ArtistRepository> = match config.artists.base_url.clone() {
        Some(base_url) => Arc::new(HttpArtistRepository::new(base_url)),
        None => {
            tracing::info!("No artist API configured, serving sample artist data");
            Arc::new(SampleArtistRepository::new())
        }
    };

    // Create application state
    let state = Arc::new(AppState {
        dashboard_service,
        chat_service: ChatService::new(),
        artist_service: ArtistService::new(artist_repository),
        persistence_status: worker.status,
    });

    // Build router (presentation layer)
    let router = build_router(state);

    // Start server
    let addr = config.server.address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Starting artist-dashboard service on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // The router owned the last persistence handle; wait for pending saves
    if let Err(e) = worker.task.await {
        tracing::error!("Layout persistence worker failed: {}", e);
    }

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    tracing::info!("Shutting down");
}
