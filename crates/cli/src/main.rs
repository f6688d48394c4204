//! Clubdesk CLI - Database migrations and account provisioning.
//!
//! # Usage
//!
//! ```bash
//! # Run database migrations
//! clubdesk-cli migrate
//!
//! # Provision an account
//! clubdesk-cli account create -u maria -e maria@example.org
//!
//! # Issue (or print the existing) API token for an account
//! clubdesk-cli account token -u maria
//! ```
//!
//! # Commands
//!
//! - `migrate` - Run database migrations
//! - `account create` - Create accounts (there is no self-registration endpoint)
//! - `account token` - Issue or print an account's API token

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "clubdesk-cli")]
#[command(author, version, about = "Clubdesk CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run database migrations
    Migrate,
    /// Manage accounts
    Account {
        #[command(subcommand)]
        action: AccountAction,
    },
}

#[derive(Subcommand)]
enum AccountAction {
    /// Create a new account
    Create {
        /// Username (unique, appears as the owner of clubs)
        #[arg(short, long)]
        username: String,

        /// Email address used by the token exchange to resolve the account
        #[arg(short, long)]
        email: Option<String>,
    },
    /// Issue (or print the existing) API token for an account
    Token {
        /// Username of the account
        #[arg(short, long)]
        username: String,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Migrate => commands::migrate::run().await?,
        Commands::Account { action } => match action {
            AccountAction::Create { username, email } => {
                commands::account::create(&username, email.as_deref()).await?;
            }
            AccountAction::Token { username } => {
                commands::account::token(&username).await?;
            }
        },
    }
    Ok(())
}
