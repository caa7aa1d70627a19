//! Roof Top Cafe CLI - drive the storefront from a terminal.
//!
//! State lives in the same origin store the site uses (`ROOFTOP_STORAGE_DIR`),
//! so a cart built here is the cart the next page load sees.
//!
//! # Usage
//!
//! ```bash
//! # Put two bags in the cart and look at it
//! rooftop cart add "Arabika Gayo" 45000
//! rooftop cart add "Arabika Gayo" 45000
//! rooftop cart show
//!
//! # Checkout summary
//! rooftop cart checkout
//!
//! # Theme, search and forms
//! rooftop theme toggle
//! rooftop search "kopi toraja"
//! rooftop newsletter budi@example.com
//! rooftop contact --name Budi --email budi@example.com --subject Reservasi --message "Meja untuk empat orang"
//!
//! # Simulate a page load
//! rooftop visit
//! ```
//!
//! # Commands
//!
//! - `cart` - Add, remove, set and inspect cart lines, preview checkout
//! - `theme` - Show, toggle or set the saved theme
//! - `search` - Resolve a search query to its page
//! - `newsletter` - Subscribe an email address
//! - `contact` - Send the contact form
//! - `visit` - Load the page and print the startup effects

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

mod commands;

#[derive(Parser)]
#[command(name = "rooftop")]
#[command(author, version, about = "Roof Top Cafe storefront tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage the shopping cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Manage the saved theme
    Theme {
        #[command(subcommand)]
        action: ThemeAction,
    },
    /// Resolve a search query
    Search {
        /// Search box input
        query: String,
    },
    /// Subscribe to the newsletter
    Newsletter {
        /// Email address
        email: String,
    },
    /// Send the contact form
    Contact {
        #[arg(short, long, default_value = "")]
        name: String,

        #[arg(short, long, default_value = "")]
        email: String,

        #[arg(short, long, default_value = "")]
        subject: String,

        #[arg(short, long, default_value = "")]
        message: String,
    },
    /// Load the page: apply the theme, publish the badge, count the visit
    Visit,
}

#[derive(Subcommand)]
enum CartAction {
    /// Add one unit of a product
    Add {
        /// Product name
        name: String,

        /// Unit price in rupiah
        price: u64,
    },
    /// Remove a line entirely
    Remove {
        /// Product name
        name: String,
    },
    /// Take one unit off a line
    Decrement {
        /// Product name
        name: String,
    },
    /// Set the quantity of a line (0 removes it)
    Set {
        /// Product name
        name: String,

        /// New quantity
        quantity: u32,
    },
    /// Empty the cart
    Clear,
    /// List the cart
    Show,
    /// Preview the checkout confirmation
    Checkout,
}

#[derive(Subcommand)]
enum ThemeAction {
    /// Print the saved theme
    Show,
    /// Switch to the other theme
    Toggle,
    /// Set a specific theme
    Set {
        #[arg(value_enum)]
        theme: ThemeArg,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ThemeArg {
    Light,
    Dark,
}

#[tokio::main]
async fn main() {
    // Defaults to info level for our crates if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "rooftop_storefront=info,rooftop_cli=info".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let ctx = commands::Context::from_env()?;

    match cli.command {
        Commands::Cart { action } => match action {
            CartAction::Add { name, price } => commands::cart::add(&ctx, name, price),
            CartAction::Remove { name } => commands::cart::remove(&ctx, &name),
            CartAction::Decrement { name } => commands::cart::decrement(&ctx, &name),
            CartAction::Set { name, quantity } => commands::cart::set(&ctx, &name, quantity),
            CartAction::Clear => commands::cart::clear(&ctx),
            CartAction::Show => commands::cart::show(&ctx),
            CartAction::Checkout => commands::cart::checkout(&ctx),
        },
        Commands::Theme { action } => match action {
            ThemeAction::Show => commands::theme::show(&ctx),
            ThemeAction::Toggle => commands::theme::toggle(&ctx),
            ThemeAction::Set { theme } => commands::theme::set(
                &ctx,
                match theme {
                    ThemeArg::Light => rooftop_core::Theme::Light,
                    ThemeArg::Dark => rooftop_core::Theme::Dark,
                },
            ),
        },
        Commands::Search { query } => commands::search::run(&query)?,
        Commands::Newsletter { email } => commands::forms::newsletter(&ctx, &email).await?,
        Commands::Contact {
            name,
            email,
            subject,
            message,
        } => {
            let submission = rooftop_storefront::controllers::ContactSubmission {
                name,
                email,
                subject,
                message,
            };
            commands::forms::contact(&ctx, &submission).await?;
        }
        Commands::Visit => commands::visit::run(&ctx),
    }
    Ok(())
}
