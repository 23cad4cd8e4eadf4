//! CLI administration tool for blog-api.
//!
//! Issues and inspects session tokens and checks the document store without
//! going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Issue a session token for a user
//! cargo run --bin admin -- token issue --email alice@example.com
//!
//! # Decode and verify a token
//! cargo run --bin admin -- token inspect eyJhbGciOi...
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # Show document counts per collection
//! cargo run --bin admin -- db info
//! ```
//!
//! # Environment Variables
//!
//! - `ACCESS_TOKEN_SECRET` (token commands): HMAC key shared with the server
//! - `TOKEN_TTL_DAYS` (optional): validity of issued tokens, default 365
//! - `MONGODB_URI` or `DB_*` components (db commands)
//! - `DB_NAME` (optional): database name, default `newstally`

use blog_api::application::services::{AuthService, CookiePolicy, TOKEN_COOKIE};
use blog_api::config::{Config, load_token_settings, mask_connection_string};
use blog_api::domain::entities::ExtraFields;
use blog_api::infrastructure::persistence::MongoStore;

use anyhow::{Context, Result};
use chrono::DateTime;
use clap::{Parser, Subcommand};
use colored::*;
use serde_json::Value;

/// CLI tool for managing blog-api.
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
    /// Issue and inspect session tokens
    Token {
        #[command(subcommand)]
        action: TokenAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Token subcommands.
#[derive(Subcommand)]
enum TokenAction {
    /// Issue a session token
    Issue {
        /// Identity the token is issued for
        #[arg(short, long)]
        email: String,

        /// Extra claim as KEY=VALUE (repeatable)
        #[arg(short, long = "claim", value_name = "KEY=VALUE")]
        claims: Vec<String>,
    },

    /// Verify a token and print its claims
    Inspect {
        /// Token value (the `token` cookie)
        token: String,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Token { action } => handle_token_action(action)?,
        Commands::Db { action } => handle_db_action(action).await?,
    }

    Ok(())
}

/// Builds the token service from the same validated settings the server uses.
fn auth_service_from_env() -> Result<AuthService> {
    let settings = load_token_settings()?;

    Ok(AuthService::new(
        &settings.secret,
        settings.ttl(),
        CookiePolicy::new(false),
    ))
}

/// Dispatches token commands.
fn handle_token_action(action: TokenAction) -> Result<()> {
    let service = auth_service_from_env()?;

    match action {
        TokenAction::Issue { email, claims } => issue_token(&service, email, claims),
        TokenAction::Inspect { token } => inspect_token(&service, &token),
    }
}

/// Signs a token for `email` and prints it with a usage example.
fn issue_token(service: &AuthService, email: String, claims: Vec<String>) -> Result<()> {
    println!("{}", "🔑 Issue Session Token".bright_blue().bold());
    println!();

    let mut payload = ExtraFields::new();
    for claim in claims {
        let (key, value) = claim
            .split_once('=')
            .with_context(|| format!("Claim '{}' must be KEY=VALUE", claim))?;
        payload.insert(key.to_string(), Value::String(value.to_string()));
    }
    payload.insert("email".to_string(), Value::String(email.clone()));

    let token = service
        .issue(payload)
        .map_err(|e| anyhow::anyhow!("Failed to sign token: {}", e))?;

    println!("{}", "Token details:".bright_white().bold());
    println!("  Email: {}", email.cyan());
    println!("  Token: {}", token.bright_yellow().bold());
    println!();
    println!("{}", "Example:".bright_white());
    println!(
        "  curl --cookie \"{}={}\" http://localhost:5000/blog/{}",
        TOKEN_COOKIE,
        token.bright_yellow(),
        email
    );
    println!();

    Ok(())
}

/// Verifies `token` and prints its claims.
fn inspect_token(service: &AuthService, token: &str) -> Result<()> {
    println!("{}", "🔍 Inspect Session Token".bright_blue().bold());
    println!();

    let claims = match service.verify(token) {
        Ok(claims) => claims,
        Err(e) => {
            println!("{} {}", "❌ Token rejected:".red().bold(), e);
            return Ok(());
        }
    };

    let format_ts = |ts: i64| {
        DateTime::from_timestamp(ts, 0)
            .map(|t| t.format("%Y-%m-%d %H:%M:%S UTC").to_string())
            .unwrap_or_else(|| ts.to_string())
    };

    println!("{}", "✅ Signature and expiry OK".green().bold());
    println!();
    println!(
        "  Email:   {}",
        claims.email().unwrap_or("<none>").cyan()
    );
    println!("  Issued:  {}", format_ts(claims.iat).bright_black());
    println!("  Expires: {}", format_ts(claims.exp).bright_black());

    if !claims.fields.is_empty() {
        println!();
        println!("{}", "  Claims:".bright_white());
        for (key, value) in &claims.fields {
            println!("    {:<16} {}", key.cyan(), value);
        }
    }
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction) -> Result<()> {
    let uri = Config::load_mongodb_uri()?;
    let database = std::env::var("DB_NAME").unwrap_or_else(|_| "newstally".to_string());

    let store = MongoStore::connect(&uri, &database)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to configure MongoDB client: {}", e))?;

    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());
            println!("  {}", mask_connection_string(&uri).bright_black());

            store
                .ping()
                .await
                .map_err(|e| anyhow::anyhow!("Ping failed: {}", e))?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();
            println!("  Database: {}", store.database_name().bright_white());
            println!();

            let counts = store
                .collection_counts()
                .await
                .map_err(|e| anyhow::anyhow!("Failed to count documents: {}", e))?;

            for (collection, count) in counts {
                println!(
                    "  {:<10} {}",
                    collection,
                    count.to_string().bright_green().bold()
                );
            }
            println!();
        }
    }

    store.shutdown().await;
    Ok(())
}
