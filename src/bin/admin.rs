//! CLI administration tool for rescue-dog-seo.
//!
//! Generates SEO artifacts straight from the database without going through
//! the HTTP server. Useful for publishing a static sitemap or checking how a
//! page will look when shared.
//!
//! # Usage
//!
//! ```bash
//! # Print the sitemap, or write it to a file
//! cargo run --bin seo-admin -- sitemap
//! cargo run --bin seo-admin -- sitemap --output public/sitemap.xml
//!
//! # Show resolved metadata for a page
//! cargo run --bin seo-admin -- meta dog bella-42
//! cargo run --bin seo-admin -- meta org happy-paws-rescue
//!
//! # Check database connection
//! cargo run --bin seo-admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Same as the server; see [`rescue_dog_seo::config`].

use rescue_dog_seo::application::services::{PageMetadata, PageService, SitemapService};
use rescue_dog_seo::application::sitemap_xml::render_sitemap;
use rescue_dog_seo::config::{self, Config};
use rescue_dog_seo::infrastructure::persistence::PgEntityRepository;
use rescue_dog_seo::server::connect_database;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::PgPool;
use std::path::PathBuf;
use std::sync::Arc;

/// CLI tool for rescue-dog-seo.
#[derive(Parser)]
#[command(name = "seo-admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Generate the sitemap
    Sitemap {
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show resolved page metadata
    Meta {
        #[command(subcommand)]
        page: MetaPage,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Page kinds for `meta`.
#[derive(Subcommand)]
enum MetaPage {
    /// A dog listing page
    Dog { slug: String },

    /// An organization page
    Org { slug: String },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env().context("Invalid configuration")?;
    let pool = connect_database(&config).await?;

    match cli.command {
        Commands::Sitemap { output } => handle_sitemap(&config, pool, output).await?,
        Commands::Meta { page } => handle_meta(&config, pool, page).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Generates the sitemap and prints or writes it.
async fn handle_sitemap(config: &Config, pool: PgPool, output: Option<PathBuf>) -> Result<()> {
    let repository = Arc::new(PgEntityRepository::new(Arc::new(pool)));
    let service = SitemapService::new(repository, Arc::new(config.site_config()));

    let document = service.build_document().await;
    let xml = render_sitemap(&document);

    match output {
        Some(path) => {
            tokio::fs::write(&path, &xml)
                .await
                .with_context(|| format!("Failed to write {}", path.display()))?;

            eprintln!("{}", "✅ Sitemap written".green().bold());
            eprintln!("  File:    {}", path.display().to_string().cyan());
            eprintln!(
                "  Entries: {} ({} static)",
                document.len().to_string().bright_white().bold(),
                document.static_count.to_string().bright_black()
            );
        }
        None => println!("{}", xml),
    }

    Ok(())
}

/// Resolves and prints page metadata as JSON.
async fn handle_meta(config: &Config, pool: PgPool, page: MetaPage) -> Result<()> {
    let repository = Arc::new(PgEntityRepository::new(Arc::new(pool)));
    let service = PageService::new(repository, Arc::new(config.site_config()));

    let (kind, slug, resolved) = match page {
        MetaPage::Dog { slug } => {
            let resolved = service.listing_page(&slug).await;
            ("Dog", slug, resolved)
        }
        MetaPage::Org { slug } => {
            let resolved = service.organization_page(&slug).await;
            ("Organization", slug, resolved)
        }
    };

    print_page_summary(kind, &slug, &resolved);
    println!("{}", serde_json::to_string_pretty(&resolved)?);

    Ok(())
}

fn print_page_summary(kind: &str, slug: &str, page: &PageMetadata) {
    let status = if page.found {
        "FOUND".green()
    } else {
        "NOT FOUND".red()
    };

    eprintln!("{} {} {}", "🔎".bright_blue(), kind.bright_blue().bold(), slug.cyan());
    eprintln!("  Status:      {}", status);
    eprintln!("  Title:       {}", page.metadata.title.bright_white());
    eprintln!(
        "  Description: {} chars",
        page.metadata.description.chars().count().to_string().bright_black()
    );
    eprintln!(
        "  JSON-LD:     {}",
        page.structured_data
            .iter()
            .map(|doc| doc.type_name())
            .collect::<Vec<_>>()
            .join(", ")
            .bright_black()
    );
    eprintln!();
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            let listings: i64 =
                sqlx::query_scalar("SELECT COUNT(*) FROM animals WHERE status = 'available'")
                    .fetch_one(pool)
                    .await?;
            let organizations: i64 =
                sqlx::query_scalar("SELECT COUNT(*) FROM organizations WHERE active = TRUE")
                    .fetch_one(pool)
                    .await?;

            println!("{}", "✅ Database connection OK".green().bold());
            println!(
                "  Available dogs:       {}",
                listings.to_string().bright_green().bold()
            );
            println!(
                "  Active organizations: {}",
                organizations.to_string().bright_green().bold()
            );
        }
    }

    Ok(())
}
