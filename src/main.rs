//! CLI entry point for minipress

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "minipress")]
#[command(version)]
#[command(about = "A minimal static blog generator", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new blog site
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        folder: PathBuf,
    },

    /// Create a new post
    New {
        /// Title of the new post
        title: String,
    },

    /// Generate static files
    #[command(alias = "g")]
    Generate,

    /// Start a local server
    #[command(alias = "s")]
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "4000")]
        port: u16,

        /// IP address to bind to
        #[arg(short, long, default_value = "localhost")]
        ip: String,

        /// Open browser automatically
        #[arg(short, long)]
        open: bool,

        /// Disable file watching
        #[arg(long)]
        r#static: bool,
    },

    /// Clean the output directory
    Clean,

    /// List posts
    List,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "minipress=debug,info"
    } else {
        "minipress=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let base_dir = cli.cwd.map(Ok).unwrap_or_else(std::env::current_dir)?;

    match cli.command {
        Commands::Init { folder } => {
            let target_dir = if folder.is_absolute() {
                folder
            } else {
                base_dir.join(folder)
            };
            tracing::info!("Initializing blog site in {:?}", target_dir);
            minipress::commands::init::init_site(&target_dir)?;
            println!("Initialized empty blog site in {:?}", target_dir);
        }

        Commands::New { title } => {
            let site = minipress::Site::new(&base_dir)?;
            tracing::info!("Creating new post with title: {}", title);
            site.new_post(&title)?;
        }

        Commands::Generate => {
            let site = minipress::Site::new(&base_dir)?;
            tracing::info!("Generating static files...");
            site.generate()?;
            println!("Generated successfully!");
        }

        Commands::Serve {
            port,
            ip,
            open,
            r#static,
        } => {
            let site = minipress::Site::new(&base_dir)?;

            // Generate first
            tracing::info!("Generating static files...");
            site.generate()?;

            tracing::info!("Starting server at http://{}:{}", ip, port);
            minipress::server::start(&site, &ip, port, !r#static, open).await?;
        }

        Commands::Clean => {
            let site = minipress::Site::new(&base_dir)?;
            tracing::info!("Cleaning output directory...");
            site.clean()?;
            println!("Cleaned successfully!");
        }

        Commands::List => {
            let site = minipress::Site::new(&base_dir)?;
            minipress::commands::list::run(&site)?;
        }
    }

    Ok(())
}
