//! CLI administration tool for jet-fuel.
//!
//! Provides commands for loading demo data, viewing statistics and checking
//! the database without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Apply pending migrations
//! cargo run --bin admin -- db migrate
//!
//! # Replace all topics and links with the demo data
//! cargo run --bin admin -- seed
//!
//! # View statistics
//! cargo run --bin admin -- stats --top 5
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string

use jet_fuel::domain::entities::Link;
use jet_fuel::infrastructure::persistence::reseed;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;

/// CLI tool for managing jet-fuel.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Replace all topics and links with the demo data
    Seed {
        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Show statistics
    Stats {
        /// Number of most-clicked links to show
        #[arg(short, long, default_value_t = 5)]
        top: i64,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,

    /// Apply pending migrations
    Migrate,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::Seed { yes } => handle_seed(&pool, yes).await?,
        Commands::Stats { top } => handle_stats(&pool, top).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    pool.close().await;

    Ok(())
}

/// Truncates both tables and loads the demo data.
///
/// Migrations are applied first so a fresh database can be seeded directly.
async fn handle_seed(pool: &PgPool, skip_confirm: bool) -> Result<()> {
    println!("{}", "🌱 Seed demo data".bright_blue().bold());
    println!();
    println!(
        "{}",
        "This deletes every topic and link and resets their ids.".yellow()
    );
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Continue?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .context("Failed to run migrations")?;

    reseed(pool).await.context("Failed to load demo data")?;

    println!("{}", "✅ Demo data loaded".green().bold());
    println!();

    Ok(())
}

/// Shows statistics.
///
/// Shows:
/// - Number of topics and links
/// - Total clicks across all links
/// - The most-clicked links
async fn handle_stats(pool: &PgPool, top: i64) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let topics_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM topics")
        .fetch_one(pool)
        .await?;

    let links_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM links")
        .fetch_one(pool)
        .await?;

    let clicks_total: i64 =
        sqlx::query_scalar("SELECT COALESCE(SUM(click_count), 0)::BIGINT FROM links")
            .fetch_one(pool)
            .await?;

    println!(
        "  Topics: {}",
        topics_count.to_string().bright_green().bold()
    );
    println!(
        "  Links:  {}",
        links_count.to_string().bright_green().bold()
    );
    println!(
        "  Clicks: {}",
        clicks_total.to_string().bright_green().bold()
    );
    println!();

    let top_links = sqlx::query_as::<_, Link>(
        r#"
        SELECT id, link_title, long_link, short_link, click_count, topic_id
        FROM links
        ORDER BY click_count DESC, id
        LIMIT $1
        "#,
    )
    .bind(top.max(0))
    .fetch_all(pool)
    .await?;

    if top_links.is_empty() {
        return Ok(());
    }

    println!("{}", "Most clicked:".bright_white().bold());
    for link in top_links {
        println!(
            "  {:>6}  {}  {} {}",
            link.click_count.to_string().bright_green(),
            link.short_link.cyan(),
            "→".dimmed(),
            link.long_link
        );
    }
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!();
        }
        DbAction::Migrate => {
            println!("{}", "🛠  Applying migrations...".bright_blue());

            sqlx::migrate!("./migrations").run(pool).await?;

            println!("{}", "✅ Migrations up to date".green().bold());
        }
    }

    Ok(())
}
