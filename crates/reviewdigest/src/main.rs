use anyhow::Result;
use clap::{Parser, Subcommand};
use reviewdigest_common::{logger, AppConfig};
use std::path::PathBuf;

/// Find project root by looking for .git directory
fn find_project_root() -> Option<PathBuf> {
    let mut current_dir = std::env::current_dir().ok()?;

    loop {
        if current_dir.join(".git").exists() {
            return Some(current_dir);
        }

        if !current_dir.pop() {
            break;
        }
    }

    None
}

/// Load .env file from project root
fn load_dotenv_from_project_root() {
    if let Some(root) = find_project_root() {
        let env_path = root.join(".env");
        if env_path.exists() {
            dotenv::from_path(&env_path).ok();
        }
    } else {
        // Fallback to default dotenv behavior
        dotenv::dotenv().ok();
    }
}

#[derive(Parser)]
#[command(name = "reviewdigest")]
#[command(about = "ReviewDigest - LLM-powered review summarization service", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port to bind to
        #[arg(long, default_value = "8000")]
        port: u16,

        /// Path to the prompt artifact
        #[arg(long)]
        prompt_artifact: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load environment variables from .env at project root early, so CLI
    // argument overrides below win over file contents
    load_dotenv_from_project_root();

    match cli.command {
        Some(Commands::Serve {
            host,
            port,
            prompt_artifact,
        }) => {
            // Override with CLI arguments
            std::env::set_var("SERVER_HOST", &host);
            std::env::set_var("SERVER_PORT", port.to_string());
            if let Some(path) = &prompt_artifact {
                std::env::set_var("PROMPT_ARTIFACT_PATH", path);
            }

            let config = AppConfig::from_env()?;
            logger::setup_logging(&config.log_dir, &config.log_level)?;

            tracing::info!("ReviewDigest starting...");
            tracing::info!("Configuration loaded:");
            tracing::info!("  Host: {}", host);
            tracing::info!("  Port: {}", port);
            tracing::info!("  Model: {}", config.llm_model);
            tracing::info!("  Artifact: {}", config.prompt_artifact_path.display());

            println!("Server listening on http://{}:{}", host, port);

            reviewdigest_server::start_server(config).await?;
        }
        None => {
            let config = AppConfig::from_env()?;
            logger::setup_logging(&config.log_dir, &config.log_level)?;

            tracing::info!("ReviewDigest starting with default configuration...");

            let bind_addr = config.server_bind_address();
            println!("Server listening on http://{}", bind_addr);

            reviewdigest_server::start_server(config).await?;
        }
    }

    Ok(())
}
