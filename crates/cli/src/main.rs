//! Arjuna POS CLI - Terminal front-end for cashiers.
//!
//! # Usage
//!
//! ```bash
//! # Log in as a fixture account (password: 123456)
//! arjuna login -e budi@arjuna.digital -p 123456
//!
//! # Browse the catalog visible to the session
//! arjuna catalog --search flexi
//!
//! # Run the interactive sell loop (cart + checkout)
//! arjuna sell
//!
//! # Print or share the last receipt
//! arjuna invoice
//! arjuna invoice --share
//!
//! # Sales history and dashboard stats
//! arjuna reports
//! arjuna dashboard
//! ```
//!
//! # Commands
//!
//! - `login` / `logout` - Session lifecycle
//! - `catalog` - Browse items and categories
//! - `sell` - Interactive cashier loop
//! - `invoice` - Render the last receipt
//! - `reports` - Sales history, aggregates, reprint
//! - `dashboard` - Summary stats
//! - `settings` - Store, printer, notification, and staff configuration

#![cfg_attr(not(test), forbid(unsafe_code))]
#![allow(clippy::print_stdout)]

use clap::{Parser, Subcommand};

use arjuna_pos::config::PosConfig;
use arjuna_pos::state::PosState;

mod commands;

#[derive(Parser)]
#[command(name = "arjuna")]
#[command(author, version, about = "Arjuna POS terminal front-end")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in with a staff account
    Login {
        /// Staff email address
        #[arg(short, long)]
        email: String,

        /// Account password
        #[arg(short, long)]
        password: String,
    },
    /// End the session and wipe local state
    Logout,
    /// Browse the catalog visible to this session
    Catalog {
        /// Restrict to one category id
        #[arg(short, long)]
        category: Option<i64>,

        /// Case-insensitive name search
        #[arg(short, long, default_value = "")]
        search: String,
    },
    /// Interactive cashier loop: build a cart and take payment
    Sell,
    /// Render the last receipt
    Invoice {
        /// Print the shareable digest instead of the printable receipt
        #[arg(long)]
        share: bool,
    },
    /// Sales history and aggregates
    Reports {
        /// Stage a past sale for the invoice view
        #[arg(long, value_name = "INVOICE_ID")]
        reprint: Option<String>,
    },
    /// Dashboard summary stats
    Dashboard,
    /// Store, printer, notification, and staff configuration
    Settings {
        #[command(subcommand)]
        action: commands::settings::SettingsAction,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing with EnvFilter; default to engine info logs
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "arjuna_pos=info,arjuna_cli=info".into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();

    let config = match PosConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };
    let state = PosState::new(config);

    if let Err(e) = run(cli, &state).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli, state: &PosState) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Login { email, password } => {
            commands::login::login(state, &email, &password).await?;
        }
        Commands::Logout => commands::login::logout(state)?,
        Commands::Catalog { category, search } => {
            commands::catalog::run(state, category, &search).await?;
        }
        Commands::Sell => commands::sell::run(state).await?,
        Commands::Invoice { share } => commands::invoice::run(state, share)?,
        Commands::Reports { reprint } => commands::reports::run(state, reprint.as_deref())?,
        Commands::Dashboard => commands::dashboard::run(state).await?,
        Commands::Settings { action } => commands::settings::run(state, action)?,
    }
    Ok(())
}
