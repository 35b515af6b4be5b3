//! Pizza admin console
//!
//! Drives the admin dashboard from a terminal against a running pizza
//! service: sign in, page and filter the franchise and user lists, delete
//! users.

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use pizza_admin::{AdminListController, AuthService};
use pizza_client::{
    HttpPizzaService,
    console::{LoggingOverlay, PrintingNavigator, render_franchises, render_users},
};
use pizza_core::{Config, LogFormat};
use pizza_types::{LoginRequest, User, UserId};
use std::{path::PathBuf, sync::Arc};
use tracing::info;

type Controller = AdminListController<HttpPizzaService, LoggingOverlay, PrintingNavigator>;

/// Command line interface for the pizza admin console
#[derive(Parser)]
#[command(
    name = "pizza-admin",
    version = env!("CARGO_PKG_VERSION"),
    about = "Admin console for the pizza platform"
)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Service base URL (overrides config)
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Bearer token from an earlier `login`
    #[arg(long, env = "PIZZA_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Admin email, used when no token is given
    #[arg(long, env = "PIZZA_ADMIN_EMAIL")]
    email: Option<String>,

    /// Admin password, used when no token is given
    #[arg(long, env = "PIZZA_ADMIN_PASSWORD", hide_env_values = true)]
    password: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long)]
    log_level: Option<String>,

    /// Emit human-readable logs instead of JSON
    #[arg(long)]
    text_logs: bool,

    /// Subcommand
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands
#[derive(Subcommand)]
enum Commands {
    /// Sign in and print the bearer token
    Login,

    /// Show the franchise table
    Franchises {
        /// Page to show, starting at 0
        #[arg(short, long, default_value_t = 0)]
        page: u32,

        /// Only franchises whose name contains this text
        #[arg(short, long)]
        filter: Option<String>,
    },

    /// Show the user table
    Users {
        /// Page to show, starting at 0
        #[arg(short, long, default_value_t = 0)]
        page: u32,

        /// Only users whose name contains this text
        #[arg(short, long)]
        filter: Option<String>,
    },

    /// Delete a user
    DeleteUser {
        /// Id of the user to delete
        #[arg(value_name = "ID")]
        id: UserId,

        /// Confirm the deletion; without it nothing is deleted
        #[arg(long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config =
        Config::load_from(cli.config.as_deref()).context("Failed to load configuration")?;
    if let Some(level) = &cli.log_level {
        config.logging.level.clone_from(level);
    }
    if cli.text_logs {
        config.logging.format = LogFormat::Text;
    }
    if let Some(base_url) = &cli.base_url {
        config.service.base_url.clone_from(base_url);
        config.validate()?;
    }
    pizza_core::init_logging(&config.logging)?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        base_url = %config.service.base_url,
        "pizza admin console starting"
    );

    let mut service = HttpPizzaService::from_config(&config.service)?;
    if let Some(token) = &cli.token {
        service = service.with_token(token.as_str());
    }
    let service = Arc::new(service);

    if matches!(cli.command, Commands::Login) {
        let user = sign_in(&service, &cli).await?;
        println!("Signed in as {} <{}>", user.name, user.email);
        if let Some(token) = service.token() {
            println!("export PIZZA_TOKEN={token}");
        }
        return Ok(());
    }

    let viewer = match service.current_user().await? {
        Some(user) => user,
        None => sign_in(&service, &cli).await?,
    };

    let controller: Controller = AdminListController::new(
        Arc::clone(&service),
        Arc::new(LoggingOverlay),
        Arc::new(PrintingNavigator),
    )
    .with_settings(config.dashboard);

    controller.mount(Some(viewer)).await?;
    if !controller.is_authorized() {
        bail!("the signed-in user is not an admin");
    }

    match cli.command {
        Commands::Login => {}
        Commands::Franchises { page, filter } => {
            for _ in 0..page {
                if !controller.next_franchise_page().await? {
                    break;
                }
            }
            if let Some(text) = filter {
                controller.filter_franchises(&text).await?;
            }
            print!("{}", render_franchises(&controller.snapshot()));
        }
        Commands::Users { page, filter } => {
            for _ in 0..page {
                if !controller.next_user_page().await? {
                    break;
                }
            }
            if let Some(text) = filter {
                controller.filter_users(&text).await?;
            }
            print!("{}", render_users(&controller.snapshot()));
        }
        Commands::DeleteUser { id, yes } => delete_user(&controller, id, yes).await?,
    }

    Ok(())
}

/// Sign in with the email and password from the command line
async fn sign_in(service: &HttpPizzaService, cli: &Cli) -> Result<User> {
    let (Some(email), Some(password)) = (&cli.email, &cli.password) else {
        bail!("not signed in: pass --token, or --email and --password");
    };
    let auth = service
        .login(&LoginRequest::new(email.as_str(), password.as_str()))
        .await
        .context("Sign in failed")?;
    Ok(auth.user)
}

/// Stage user `id`, then confirm or cancel
async fn delete_user(controller: &Controller, id: UserId, confirmed: bool) -> Result<()> {
    let listed = controller
        .snapshot()
        .users
        .items
        .into_iter()
        .find(|user| user.id == Some(id));
    let user = listed.unwrap_or_else(|| User {
        id: Some(id),
        name: String::new(),
        email: String::new(),
        roles: Vec::new(),
    });

    controller.open_delete_user_dialog(user);
    if !confirmed {
        controller.cancel_delete_user();
        println!("Not deleted; pass --yes to confirm");
        return Ok(());
    }

    match controller.confirm_delete_user().await? {
        Some(user) => {
            println!("Deleted user {id} {}", user.email);
            print!("{}", render_users(&controller.snapshot()));
        }
        None => println!("Nothing deleted"),
    }
    Ok(())
}
