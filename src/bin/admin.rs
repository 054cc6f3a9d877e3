//! CLI administration tool for recipegram.
//!
//! Provisions users and API tokens and performs database checks without
//! going through the HTTP API. Token issuance deliberately lives here:
//! the service itself exposes no token endpoints.
//!
//! # Usage
//!
//! ```bash
//! # Create a user
//! cargo run --bin admin -- user create --email chef@example.com
//!
//! # Create an API token for a user
//! cargo run --bin admin -- token create --email chef@example.com
//!
//! # Revoke a token by name
//! cargo run --bin admin -- token revoke "Mobile App"
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string
//! - `TOKEN_SIGNING_SECRET` (required for token commands): HMAC key,
//!   must match the running service

use recipegram::application::services::AuthService;
use recipegram::domain::repositories::{TokenRepository, UserRepository};
use recipegram::infrastructure::persistence::{PgTokenRepository, PgUserRepository};
use recipegram::utils::token_generator::generate_token;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use colored::Colorize;
use dialoguer::{Confirm, Input};
use sqlx::PgPool;
use std::sync::Arc;

/// Length of auto-generated raw API tokens.
const RAW_TOKEN_LENGTH: usize = 40;

/// CLI tool for managing recipegram.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage users
    User {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Manage API tokens
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

#[derive(Subcommand)]
enum UserAction {
    /// Create a new user
    Create {
        #[arg(short, long)]
        email: Option<String>,

        #[arg(short, long)]
        username: Option<String>,

        #[arg(long, default_value = "")]
        first_name: String,

        #[arg(long, default_value = "")]
        last_name: String,
    },
}

#[derive(Subcommand)]
enum TokenAction {
    /// Create a new API token for a user
    Create {
        /// Email of the owning user
        #[arg(short, long)]
        email: Option<String>,

        /// Token name (e.g., "Mobile App")
        #[arg(short, long)]
        name: Option<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Revoke every token with the given name
    Revoke { name: String },
}

#[derive(Subcommand)]
enum DbAction {
    /// Verify connectivity and show row counts
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let pool = Arc::new(PgPool::connect(&database_url).await?);

    match cli.command {
        Commands::User { action } => match action {
            UserAction::Create {
                email,
                username,
                first_name,
                last_name,
            } => create_user(&pool, email, username, first_name, last_name).await,
        },
        Commands::Token { action } => match action {
            TokenAction::Create { email, name, yes } => {
                create_token(&pool, email, name, yes).await
            }
            TokenAction::Revoke { name } => revoke_token(&pool, &name).await,
        },
        Commands::Db { action } => match action {
            DbAction::Check => db_check(&pool).await,
        },
    }
}

async fn create_user(
    pool: &Arc<PgPool>,
    email: Option<String>,
    username: Option<String>,
    first_name: String,
    last_name: String,
) -> Result<()> {
    let email = match email {
        Some(e) => e,
        None => Input::new().with_prompt("Email").interact_text()?,
    };
    let username = match username {
        Some(u) => u,
        None => Input::new().with_prompt("Username").interact_text()?,
    };

    let users = PgUserRepository::new(pool.clone());
    let user = users
        .create(&email, &username, &first_name, &last_name)
        .await?;

    println!(
        "{} user {} (id {})",
        "Created".green().bold(),
        user.email.cyan(),
        user.id
    );
    Ok(())
}

async fn create_token(
    pool: &Arc<PgPool>,
    email: Option<String>,
    name: Option<String>,
    yes: bool,
) -> Result<()> {
    let signing_secret =
        std::env::var("TOKEN_SIGNING_SECRET").context("TOKEN_SIGNING_SECRET must be set")?;

    let email = match email {
        Some(e) => e,
        None => Input::new().with_prompt("Owner email").interact_text()?,
    };
    let name = match name {
        Some(n) => n,
        None => Input::new()
            .with_prompt("Token name")
            .default("default".to_string())
            .interact_text()?,
    };

    let users = PgUserRepository::new(pool.clone());
    let Some(user) = users.find_by_email(&email).await? else {
        bail!("No user with email {email}");
    };

    if !yes {
        let proceed = Confirm::new()
            .with_prompt(format!("Create token '{name}' for {email}?"))
            .default(true)
            .interact()?;
        if !proceed {
            println!("{}", "Aborted".yellow());
            return Ok(());
        }
    }

    let raw_token = generate_token(&mut rand::rng(), RAW_TOKEN_LENGTH);

    let tokens = Arc::new(PgTokenRepository::new(pool.clone()));
    let auth = AuthService::new(tokens.clone(), signing_secret);
    let token_hash = auth.hash_token(&raw_token);

    tokens.create(user.id, &name, &token_hash).await?;

    println!("{} token '{}' for {}", "Created".green().bold(), name, email);
    println!();
    println!("  {}", raw_token.cyan().bold());
    println!();
    println!(
        "{}",
        "Store this token now; only its hash is kept in the database.".yellow()
    );
    Ok(())
}

async fn revoke_token(pool: &Arc<PgPool>, name: &str) -> Result<()> {
    let tokens = PgTokenRepository::new(pool.clone());
    let revoked = tokens.revoke_by_name(name).await?;

    if revoked == 0 {
        println!("{} no tokens named '{}'", "Warning:".yellow().bold(), name);
    } else {
        println!("{} {} token(s) named '{}'", "Revoked".green().bold(), revoked, name);
    }
    Ok(())
}

async fn db_check(pool: &Arc<PgPool>) -> Result<()> {
    sqlx::query_scalar::<_, i32>("SELECT 1")
        .fetch_one(pool.as_ref())
        .await
        .context("Database probe failed")?;

    println!("{}", "Database connection OK".green().bold());

    for table in ["users", "recipes", "short_links", "cart_entries"] {
        let count = sqlx::query_scalar::<_, i64>(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(pool.as_ref())
            .await?;
        println!("  {table}: {count}");
    }
    Ok(())
}
