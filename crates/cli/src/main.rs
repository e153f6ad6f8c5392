//! Fairstore CLI - command-line storefront against the remote store API.
//!
//! # Usage
//!
//! ```bash
//! # Log in (persists the session) or browse as a one-off guest
//! fairstore login mor_2314 --password '83r5^_'
//! fairstore --guest products
//!
//! # Browse the catalog
//! fairstore products --category electronics --search drive --sort asc
//! fairstore product 3
//!
//! # Cart operations (whole-cart replacement upstream)
//! fairstore cart show
//! fairstore cart add 3 --quantity 2
//! fairstore cart set-quantity 3 1
//! fairstore cart remove 3
//! fairstore cart checkout
//!
//! # Session
//! fairstore status
//! fairstore logout
//! ```
//!
//! Catalog and cart commands sit behind the auth gate, exactly like the
//! authenticated tab group: they need either a persisted login or `--guest`.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

use fairstore_client::api::AuthClient;
use fairstore_client::{FairstoreConfig, SessionController, SessionStore};
use fairstore_core::{CategoryFilter, NavState, ProductId, SortMode};

mod commands;

#[derive(Parser)]
#[command(name = "fairstore")]
#[command(author, version, about = "Command-line storefront for the fairstore API")]
struct Cli {
    /// Act as a guest session for this invocation (never persisted)
    #[arg(long, global = true)]
    guest: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List catalog products, with optional filtering and sorting
    Products {
        /// Category to keep ("all" for no restriction)
        #[arg(long, default_value = "all")]
        category: CategoryFilter,

        /// Case-insensitive title substring to match
        #[arg(long, default_value = "")]
        search: String,

        /// Price sort: none, asc, or desc
        #[arg(long, default_value = "none")]
        sort: SortMode,
    },
    /// Show one product in detail
    Product {
        /// Catalog product ID
        id: ProductId,
    },
    /// Log in with store credentials (persists token and login flag)
    Login {
        /// Account username
        username: String,

        /// Account password
        #[arg(long)]
        password: String,
    },
    /// Log out and clear the persisted session
    Logout,
    /// Show the current session and navigation state
    Status,
    /// Cart operations
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Show the cart with product details and totals
    Show,
    /// Add a product by creating a new cart record upstream
    Add {
        /// Catalog product ID
        product_id: ProductId,

        /// Units to add (at least 1)
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        quantity: u32,
    },
    /// Remove every line for a product
    Remove {
        /// Catalog product ID
        product_id: ProductId,
    },
    /// Set the quantity on every line for a product (floored at 1)
    SetQuantity {
        /// Catalog product ID
        product_id: ProductId,

        /// New quantity
        quantity: u32,
    },
    /// Check out (the upstream API has no checkout; this is a local stub)
    Checkout,
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
    let config = FairstoreConfig::from_env()?;
    let store = SessionStore::new(&config.state_dir);
    let auth = AuthClient::new(&config);

    let mut controller = SessionController::new(auth, store);
    controller.load().await?;
    if cli.guest {
        controller.login_as_guest();
    }

    match cli.command {
        Commands::Login { username, password } => {
            commands::session::login(&mut controller, &username, &password).await?;
        }
        Commands::Logout => commands::session::logout(&mut controller).await?,
        Commands::Status => commands::session::status(&controller),
        Commands::Products {
            category,
            search,
            sort,
        } => {
            ensure_authenticated(&controller)?;
            commands::catalog::list(&config, &category, &search, sort).await?;
        }
        Commands::Product { id } => {
            ensure_authenticated(&controller)?;
            commands::catalog::show(&config, id).await?;
        }
        Commands::Cart { action } => {
            ensure_authenticated(&controller)?;
            match action {
                CartAction::Show => commands::cart::show(&config).await?,
                CartAction::Add {
                    product_id,
                    quantity,
                } => commands::cart::add(&config, product_id, quantity).await?,
                CartAction::Remove { product_id } => {
                    commands::cart::remove(&config, product_id).await?;
                }
                CartAction::SetQuantity {
                    product_id,
                    quantity,
                } => commands::cart::set_quantity(&config, product_id, quantity).await?,
                CartAction::Checkout => commands::cart::checkout(&config).await?,
            }
        }
    }
    Ok(())
}

/// Gate for the authenticated screen group.
fn ensure_authenticated(controller: &SessionController) -> Result<(), Box<dyn std::error::Error>> {
    if controller.nav_state() == NavState::Authenticated {
        Ok(())
    } else {
        Err("not logged in - run `fairstore login <username> --password <password>` \
             or pass --guest"
            .into())
    }
}
