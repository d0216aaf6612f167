/// Lumina Server - authentication backend
use clap::{Parser, Subcommand};
use lumina_server::{
    api,
    config::ServerConfig,
    services::{CredentialService, PasswordHasher, Registration},
    state::AppState,
};
use lumina_storage::JsonFileStore;
use std::{path::PathBuf, sync::Arc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "lumina-server")]
#[command(about = "Lumina authentication backend", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Register a new user
    AddUser {
        /// Login email
        #[arg(short, long)]
        email: String,
        /// Password
        #[arg(short, long)]
        password: String,
        /// Display name
        #[arg(short, long)]
        name: Option<String>,
        /// student or instructor
        #[arg(short, long)]
        role: Option<String>,
        /// Study branch
        #[arg(short, long)]
        branch: Option<String>,
        /// Class or year group
        #[arg(long)]
        class_name: Option<String>,
    },
    /// List all users
    ListUsers,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lumina_server=info,lumina_storage=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { config } => {
            serve(config).await?;
        }
        Commands::AddUser {
            email,
            password,
            name,
            role,
            branch,
            class_name,
        } => {
            let registration = Registration {
                name,
                email: Some(email),
                password: Some(password),
                role,
                branch,
                class_name,
            };
            add_user(registration).await?;
        }
        Commands::ListUsers => {
            list_users().await?;
        }
    }

    Ok(())
}

/// Build the credential service from configuration
fn credential_service(config: &ServerConfig) -> anyhow::Result<Arc<CredentialService>> {
    let store = Arc::new(JsonFileStore::new(config.storage.users_file.clone()));
    let hasher = PasswordHasher::new(config.auth.bcrypt_cost);
    Ok(Arc::new(CredentialService::new(store, hasher)?))
}

async fn serve(config_path: Option<PathBuf>) -> anyhow::Result<()> {
    // Load configuration
    let config = ServerConfig::load(config_path.as_deref())?;
    config.validate()?;

    tracing::info!("Starting Lumina Server");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);
    tracing::info!("User store: {:?}", config.storage.users_file);

    let credentials = credential_service(&config)?;

    // Create the store up front so a bad path fails at startup
    let existing = credentials.list().await?;
    tracing::info!("Loaded {} users", existing.len());

    let app = api::create_router(AppState::new(credentials));

    let addr = config.socket_addr()?;
    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn add_user(registration: Registration) -> anyhow::Result<()> {
    let config = ServerConfig::load(None)?;
    config.validate()?;

    let credentials = credential_service(&config)?;
    let user = credentials.register(registration).await?;

    println!("Created {} <{}> as {}", user.id, user.email, user.role);
    Ok(())
}

async fn list_users() -> anyhow::Result<()> {
    let config = ServerConfig::load(None)?;
    let credentials = credential_service(&config)?;

    let users = credentials.list().await?;

    println!("Users:");
    for user in users {
        println!("  {}  {}  {}", user.id, user.email, user.role);
    }

    Ok(())
}
