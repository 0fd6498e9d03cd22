//! CLI administration tool for darkshort.
//!
//! Works directly on the configured storage backend, so links can be created,
//! inspected and resolved without the HTTP server running.
//!
//! # Usage
//!
//! ```bash
//! # Create a link
//! cargo run --bin darkshort-admin -- shorten https://example.com --minutes 60 --code promo
//!
//! # List all links with click counts
//! cargo run --bin darkshort-admin -- list
//!
//! # Resolve a code (counts a click)
//! cargo run --bin darkshort-admin -- resolve promo
//!
//! # Wipe the registry
//! cargo run --bin darkshort-admin -- reset
//!
//! # Check the storage backend and the stored blob
//! cargo run --bin darkshort-admin -- storage check
//! ```
//!
//! # Environment Variables
//!
//! Same as the server: `STORAGE_BACKEND`, `STORAGE_DIR`, `STORAGE_KEY`,
//! `REDIS_URL`, `PUBLIC_ORIGIN`, `DEFAULT_EXPIRY_MINUTES`.
//!
//! The server keeps the registry in memory between requests. Running
//! `shorten` or `reset` against a live server's store can be overwritten by
//! the server's next write.

use darkshort::application::services::{Registry, RegistryError};
use darkshort::config::{self, Config, mask_connection_string};
use darkshort::server::{build_registry, connect_storage};
use darkshort::utils::code_generator::{non_empty_code, validate_custom_code};
use darkshort::utils::url_validator::validate_url;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;

/// A running server keeps its own copy of the registry and writes it back on
/// the next create.
const LIVE_SERVER_WARNING: &str = "⚠️  Stop the server first: a running server restores its \
in-memory links on its next create.";

/// CLI tool for managing darkshort.
#[derive(Parser)]
#[command(name = "darkshort-admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Create a short link
    Shorten {
        /// URL to shorten (absolute http/https)
        url: String,

        /// Lifetime in minutes (defaults to DEFAULT_EXPIRY_MINUTES)
        #[arg(short, long)]
        minutes: Option<i64>,

        /// Custom short code (generated if omitted)
        #[arg(short, long)]
        code: Option<String>,
    },

    /// Resolve a code to its URL, counting a click
    Resolve {
        /// Short code
        code: String,
    },

    /// List every link
    List,

    /// Delete the whole registry
    Reset {
        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Storage operations
    Storage {
        #[command(subcommand)]
        action: StorageAction,
    },
}

/// Storage subcommands.
#[derive(Subcommand)]
enum StorageAction {
    /// Check backend reachability and that the stored blob decodes
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env().context("Invalid configuration")?;

    let store = connect_storage(&config).await?;
    let registry = build_registry(&config, store);

    match cli.command {
        Commands::Shorten { url, minutes, code } => {
            let minutes = minutes.unwrap_or(config.default_expiry_minutes);
            shorten(&registry, url, minutes, code).await?
        }
        Commands::Resolve { code } => resolve(&registry, &code).await?,
        Commands::List => list(&registry).await?,
        Commands::Reset { yes } => reset(&registry, yes).await?,
        Commands::Storage { action } => match action {
            StorageAction::Check => storage_check(&config, &registry).await?,
        },
    }

    Ok(())
}

/// Creates a link after applying the same checks as the web form.
async fn shorten(
    registry: &Registry,
    url: String,
    minutes: i64,
    code: Option<String>,
) -> Result<()> {
    println!("{}", "🔗 Create Short Link".bright_blue().bold());
    println!();

    let url = validate_url(&url).map_err(|e| anyhow::anyhow!("Invalid URL: {}", e))?;

    if minutes < 1 {
        anyhow::bail!("Minutes must be at least 1, got {}", minutes);
    }

    let code = non_empty_code(code);
    if let Some(code) = &code {
        validate_custom_code(code).map_err(|e| anyhow::anyhow!("{}", e))?;
    }

    let record = match registry.create(url, minutes, code).await {
        Ok(record) => record,
        Err(RegistryError::CodeTaken(code)) => {
            println!("{} {}", "❌ Code already taken:".red(), code.yellow());
            anyhow::bail!("Short code '{}' is already taken", code);
        }
        Err(e) => return Err(e).context("Failed to create link"),
    };

    println!("{}", "✅ Link created".green().bold());
    println!("  Code:        {}", record.code.bright_yellow().bold());
    println!("  Short URL:   {}", record.short.cyan());
    println!("  Original:    {}", record.original);
    println!("  Valid until: {}", record.expiry_label().bright_black());
    println!();

    Ok(())
}

/// Resolves a code and prints its target.
async fn resolve(registry: &Registry, code: &str) -> Result<()> {
    match registry
        .resolve(code)
        .await
        .context("Failed to resolve code")?
    {
        Some(original) => println!("{} → {}", code.cyan(), original),
        None => println!("{} {}", "⚠️  No link with code".yellow(), code.yellow().bold()),
    }

    Ok(())
}

/// Lists all links with status indicators.
///
/// # Output Format
///
/// ```text
/// 📋 Links
///
///   Code       Clicks  Valid until              Original
///   ───────────────────────────────────────────────────────────────────────
///   k3x9qa     2       2026-10-17 12:30:00 UTC  https://example.com
/// ```
async fn list(registry: &Registry) -> Result<()> {
    println!("{}", "📋 Links".bright_blue().bold());
    println!();

    let records = registry.list().await.context("Failed to list links")?;

    if records.is_empty() {
        println!("{}", "  No links yet".yellow());
        println!();
        println!(
            "  Create one with: {} darkshort-admin -- shorten <url>",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<10} {:<7} {:<24} {}",
        "Code".bright_white().bold(),
        "Clicks".bright_white().bold(),
        "Valid until".bright_white().bold(),
        "Original".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for record in &records {
        let expiry = if record.is_expired() {
            record.expiry_label().red()
        } else {
            record.expiry_label().bright_black()
        };

        println!(
            "  {:<10} {:<7} {:<24} {}",
            record.code.cyan(),
            record.clicks,
            expiry,
            record.original
        );
    }

    let clicks: u64 = records.iter().map(|r| r.clicks).sum();

    println!();
    println!(
        "  Total: {} links, {} clicks",
        records.len().to_string().bright_white().bold(),
        clicks.to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Deletes the registry blob with confirmation prompt.
async fn reset(registry: &Registry, skip_confirm: bool) -> Result<()> {
    println!("{}", "🗑️  Reset Registry".bright_blue().bold());
    println!();
    println!("  Key: {}", registry.storage_key().cyan());
    println!();
    println!("{}", LIVE_SERVER_WARNING.yellow());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete every short link?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let removed = registry
        .store()
        .remove(registry.storage_key())
        .await
        .context("Failed to remove registry")?;

    if removed {
        println!("{}", "✅ Registry deleted".green().bold());
    } else {
        println!("{}", "ℹ️  Registry was already empty".yellow());
    }
    println!();

    Ok(())
}

/// Reports backend health and whether the stored blob decodes.
async fn storage_check(config: &Config, registry: &Registry) -> Result<()> {
    println!("{}", "🔍 Storage Check".bright_blue().bold());
    println!();

    let store = registry.store();
    println!("  Backend: {}", store.backend_name().cyan());
    match config.storage_backend {
        config::StorageBackend::File => {
            println!("  Dir:     {}", config.storage_dir.display())
        }
        config::StorageBackend::Redis => println!(
            "  Redis:   {}",
            config
                .redis_url
                .as_deref()
                .map(mask_connection_string)
                .unwrap_or_default()
        ),
        config::StorageBackend::Memory => {}
    }
    println!("  Key:     {}", registry.storage_key().cyan());
    println!();

    if store.health_check().await {
        println!("{}", "✅ Backend reachable".green());
    } else {
        println!("{}", "❌ Backend unreachable".red());
        anyhow::bail!("Storage backend is unreachable");
    }

    match registry.check().await {
        Ok(count) => println!("{} ({} links)", "✅ Registry decodes".green(), count),
        Err(RegistryError::CorruptState(e)) => {
            println!("{} {}", "❌ Registry is corrupt:".red(), e);
            println!(
                "  The next write replaces it with an empty registry, or run {}",
                "reset".bright_cyan()
            );
        }
        Err(e) => return Err(e).context("Failed to read registry"),
    }
    println!();

    Ok(())
}
