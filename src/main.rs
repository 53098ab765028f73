use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use plagcheck::config::Config;
use plagcheck::extract::DocumentExtractor;
use plagcheck::storage::DocumentStore;

/// plagcheck: compare two documents for plagiarism.
///
/// Scores word-frequency cosine similarity between a test document and a
/// reference document and reports a plagiarism severity band.
#[derive(Parser)]
#[command(name = "plagcheck", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare a test document against a reference document (.pdf, .txt, .md)
    Check {
        /// The document being checked
        test: PathBuf,

        /// The document to check against
        reference: PathBuf,

        /// Print normalized text, vocabulary, vectors and the frequency table
        #[arg(long)]
        details: bool,

        /// With --details, print the whole normalized text instead of a preview
        #[arg(long, requires = "details")]
        full: bool,
    },

    /// Run the upload/check HTTP API
    #[cfg(feature = "web")]
    Serve {
        /// Port to listen on (default: PLAGCHECK_PORT or 5000)
        #[arg(long)]
        port: Option<u16>,

        /// Address to bind (default: PLAGCHECK_BIND or 127.0.0.1)
        #[arg(long)]
        bind: Option<String>,
    },

    /// Show the configured upload directories and stored documents
    Status,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("plagcheck=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Check {
            test,
            reference,
            details,
            full,
        } => {
            ensure_exists(&test)?;
            ensure_exists(&reference)?;

            info!(test = %test.display(), reference = %reference.display(), "Checking documents");

            let extractor = DocumentExtractor::default();
            let analysis = plagcheck::compare::check_documents(&extractor, &test, &reference)?;

            if details {
                plagcheck::output::terminal::display_details(&analysis, full);
            }
            plagcheck::output::terminal::display_result(
                &analysis.comparison,
                &display_name(&test),
                &display_name(&reference),
            );
        }

        #[cfg(feature = "web")]
        Commands::Serve { port, bind } => {
            let config = Config::load()?;
            let store = DocumentStore::open(config.storage())?;
            let port = port.unwrap_or(config.port);
            let bind = bind.unwrap_or_else(|| config.bind.clone());
            plagcheck::web::run_server(store, port, &bind).await?;
        }

        Commands::Status => {
            let config = Config::load()?;
            println!("Reference directory: {}", config.reference_dir.display());
            println!("Test directory:      {}", config.test_dir.display());
            println!(
                "Allowed extensions:  {}",
                config.allowed_extensions.join(", ")
            );

            let store = DocumentStore::open(config.storage())?;
            let snapshot = store.snapshot().await;
            plagcheck::output::terminal::display_slots(&snapshot);

            if snapshot.test.is_none() || snapshot.reference.is_none() {
                println!(
                    "\n{}",
                    "Upload both a test and a reference document before running a check.".dimmed()
                );
            }
        }
    }

    Ok(())
}

fn ensure_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        anyhow::bail!("File {} not found", path.display());
    }
    Ok(())
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
