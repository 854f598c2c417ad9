use std::net::SocketAddr;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::{info, warn};

use jobboard_api::{create_router, AppState};
use jobboard_infrastructure::Store;
use jobboard_shared::config::AppConfig;

mod seed;

#[derive(Parser, Debug)]
#[command(name = "jobboard-server", version, about = "Job Board API server")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP server (default)
    Serve,
    /// Apply database migrations and exit
    Migrate,
    /// Create an admin account, or reset the password of an existing one
    CreateAdmin {
        #[arg(long, env = "ADMIN_EMAIL")]
        email: String,
        #[arg(long, env = "ADMIN_PASSWORD")]
        password: String,
        #[arg(long, default_value = "System Administrator")]
        name: String,
    },
    /// Insert demo accounts, a company and jobs
    Seed,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load().context("Failed to load configuration")?;
    let _log_guard = jobboard_shared::telemetry::init_telemetry(&config.log)?;

    info!("Job Board server starting ({})", config.app.env);

    let store = Store::connect(&config.database)
        .await
        .context("Failed to connect to database")?;
    store.migrate().await.context("Failed to run migrations")?;
    info!("Database ready");

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(config, store).await,
        Command::Migrate => {
            info!("Migrations applied");
            Ok(())
        }
        Command::CreateAdmin {
            email,
            password,
            name,
        } => {
            let state = AppState::new(config, store.repositories());
            let provision = state
                .services
                .auth
                .ensure_admin(&email, &password, &name)
                .await?;
            if provision.created {
                info!(user_id = provision.user.id, "Admin user created");
            } else {
                info!(user_id = provision.user.id, "Admin user updated");
            }
            Ok(())
        }
        Command::Seed => {
            let state = AppState::new(config, store.repositories());
            seed::seed_demo_data(&state.services, &state.repos).await
        }
    }
}

async fn serve(config: AppConfig, store: Store) -> anyhow::Result<()> {
    if matches!(store, Store::Memory(_)) && config.is_production() {
        warn!("In-memory store in production; all data is lost on restart");
    }

    let host: std::net::IpAddr = config.app.host.parse()?;
    let addr = SocketAddr::from((host, config.app.port));

    let app = create_router(AppState::new(config, store.repositories()));

    info!("Listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
