//! CLI administration tool for shortlink.
//!
//! Manages aliases directly in the SQLite store, without going through the
//! HTTP API or its basic auth.
//!
//! # Usage
//!
//! ```bash
//! # Save a URL under a generated alias
//! cargo run --bin admin -- save https://api.kanye.rest
//!
//! # Save under a chosen alias
//! cargo run --bin admin -- save https://api.kanye.rest --alias kanye
//!
//! # Resolve an alias
//! cargo run --bin admin -- get kanye
//!
//! # Rename an alias and replace its URL
//! cargo run --bin admin -- update kanye ye https://api.kanye.rest/quotes
//!
//! # Delete an alias
//! cargo run --bin admin -- delete ye
//! ```
//!
//! # Environment Variables
//!
//! - `STORAGE_PATH` (required): SQLite database file

use shortlink::api::dto::validation::validate_absolute_url;
use shortlink::domain::repositories::{UrlDeleter, UrlGetter, UrlSaver, UrlUpdater};
use shortlink::error::StorageError;
use shortlink::infrastructure::persistence::SqliteUrlRepository;
use shortlink::utils::alias_generator::{ALIAS_LENGTH, generate_alias};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;

/// CLI tool for managing shortlink aliases.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Alias management commands.
#[derive(Subcommand)]
enum Commands {
    /// Save a URL under an alias
    Save {
        /// Absolute URL to shorten
        url: String,

        /// Alias to use (generated if omitted)
        #[arg(short, long)]
        alias: Option<String>,
    },

    /// Print the URL stored under an alias
    Get {
        alias: String,
    },

    /// Rename an alias and replace its URL
    Update {
        old_alias: String,
        new_alias: String,
        url: String,
    },

    /// Delete an alias
    Delete {
        alias: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let storage_path = std::env::var("STORAGE_PATH").context("STORAGE_PATH must be set")?;

    let repo = SqliteUrlRepository::connect(&storage_path, 1)
        .await
        .context("Failed to open storage")?;

    match cli.command {
        Commands::Save { url, alias } => save(&repo, url, alias).await,
        Commands::Get { alias } => get(&repo, alias).await,
        Commands::Update {
            old_alias,
            new_alias,
            url,
        } => update(&repo, old_alias, new_alias, url).await,
        Commands::Delete { alias, yes } => delete(&repo, alias, yes).await,
    }
}

async fn save(repo: &SqliteUrlRepository, url: String, alias: Option<String>) -> Result<()> {
    ensure_absolute_url(&url)?;

    let alias = alias
        .filter(|a| !a.is_empty())
        .unwrap_or_else(|| generate_alias(ALIAS_LENGTH));

    match repo.save_url(&url, &alias).await {
        Ok(id) => {
            println!("{}", "✅ URL saved".green().bold());
            println!("  {} {}", "ID:".bright_black(), id);
            println!("  {} {}", "Alias:".bright_black(), alias.bright_cyan());
            println!("  {} {}", "URL:".bright_black(), url);
            Ok(())
        }
        Err(e) => report(e),
    }
}

async fn get(repo: &SqliteUrlRepository, alias: String) -> Result<()> {
    match repo.get_url(&alias).await {
        Ok(url) => {
            println!("{} → {}", alias.bright_cyan(), url);
            Ok(())
        }
        Err(e) => report(e),
    }
}

async fn update(
    repo: &SqliteUrlRepository,
    old_alias: String,
    new_alias: String,
    url: String,
) -> Result<()> {
    ensure_absolute_url(&url)?;

    match repo.update_url(&url, &old_alias, &new_alias).await {
        Ok(()) => {
            println!("{}", "✅ URL updated".green().bold());
            println!(
                "  {} {} → {}",
                "Alias:".bright_black(),
                old_alias,
                new_alias.bright_cyan()
            );
            println!("  {} {}", "URL:".bright_black(), url);
            Ok(())
        }
        Err(e) => report(e),
    }
}

async fn delete(repo: &SqliteUrlRepository, alias: String, skip_confirm: bool) -> Result<()> {
    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete alias '{alias}'?"))
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".yellow());
            return Ok(());
        }
    }

    match repo.delete_url(&alias).await {
        Ok(()) => {
            println!("{} {}", "🗑  Deleted".green().bold(), alias);
            Ok(())
        }
        Err(e) => report(e),
    }
}

fn ensure_absolute_url(url: &str) -> Result<()> {
    validate_absolute_url(url).map_err(|_| anyhow::anyhow!("{url:?} is not a valid URL"))
}

/// Prints a domain error and turns it into a non-zero exit.
fn report(err: StorageError) -> Result<()> {
    let message = match &err {
        StorageError::NotFound => "url not found".to_string(),
        StorageError::AlreadyExists => "url already exists".to_string(),
        StorageError::Internal { .. } => format!("storage failure: {err}"),
    };

    println!("{} {}", "❌".red(), message.red());
    Err(err.into())
}
