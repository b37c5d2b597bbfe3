//! CLI entry point for forest4life

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use forest4life::commands;

#[derive(Parser)]
#[command(name = "forest4life")]
#[command(author = "Forest4Life Web Team")]
#[command(version = "0.1.0")]
#[command(about = "Content layer of the Forest4Life website", long_about = None)]
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
    /// List the entries of a content kind
    #[command(alias = "ls")]
    List {
        /// Kind to list (partners, blogs, authors, services, projects)
        kind: String,
    },

    /// Print the data of one page as JSON
    Page {
        /// Page name (home, about, contact, chrome, blog, project, service)
        name: String,

        /// Entry slug, for detail pages
        slug: Option<String>,
    },

    /// Search, filter and sort a listing
    #[command(alias = "q")]
    Query {
        /// Listing to query (blogs, projects, services)
        target: String,

        /// Case-insensitive search text
        #[arg(short, long)]
        search: Option<String>,

        /// Filter as field=value, repeatable
        #[arg(short, long, value_parser = commands::query::parse_filter)]
        filter: Vec<(String, String)>,

        /// Sort order (newest, oldest, reading-time)
        #[arg(long)]
        sort: Option<String>,
    },

    /// Validate all content against the schema
    Check,

    /// Print every detail page path
    Paths,

    /// Serve page data as a JSON API
    #[command(alias = "s")]
    Serve {
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,

        /// IP address to bind to
        #[arg(short, long)]
        ip: Option<String>,
    },

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "forest4life=debug,info"
    } else {
        "forest4life=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::List { kind } => {
            let site = forest4life::Site::new(&base_dir)?;
            commands::list::run(&site, &kind).await?;
        }

        Commands::Page { name, slug } => {
            let site = forest4life::Site::new(&base_dir)?;
            commands::page::run(&site, &name, slug.as_deref()).await?;
        }

        Commands::Query {
            target,
            search,
            filter,
            sort,
        } => {
            let site = forest4life::Site::new(&base_dir)?;
            let args = commands::query::QueryArgs {
                search,
                filters: filter,
                sort,
            };
            commands::query::run(&site, &target, &args).await?;
        }

        Commands::Check => {
            let site = forest4life::Site::new(&base_dir)?;
            tracing::info!("Checking content in {:?}", site.content_dir);
            commands::check::run(&site).await?;
        }

        Commands::Paths => {
            let site = forest4life::Site::new(&base_dir)?;
            commands::paths::run(&site).await?;
        }

        Commands::Serve { port, ip } => {
            let site = forest4life::Site::new(&base_dir)?;
            let ip = ip.unwrap_or_else(|| site.config.server.ip.clone());
            let port = port.unwrap_or(site.config.server.port);

            tracing::info!("Starting API server at http://{}:{}", ip, port);
            forest4life::server::start(site, &ip, port).await?;
        }

        Commands::Version => {
            println!("forest4life version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
