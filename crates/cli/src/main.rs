//! SebastianClothes CLI - terminal storefront for the dress shop.
//!
//! # Usage
//!
//! ```bash
//! # List dresses, optionally filtered and sorted
//! sc-cli products --search midi --size M --sort price-asc
//!
//! # Quick view of one dress
//! sc-cli show d3
//!
//! # Read or change the stored theme
//! sc-cli theme toggle
//!
//! # Interactive shopping session
//! sc-cli shop
//! ```
//!
//! # Commands
//!
//! - `products` - List the catalog
//! - `show` - Product details
//! - `sizes` - Sizes offered across the catalog
//! - `theme` - Stored light/dark preference
//! - `shop` - Interactive session with cart, favorites and checkout

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;
use std::process::ExitCode;

use chrono::Utc;
use clap::{Parser, Subcommand};
use sebastian_clothes_core::{
    CatalogQuery, ImageResolver, ProductId, RemoteImageProvider, Size, SortMode, Theme,
};
use sentry::integrations::tracing as sentry_tracing;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod catalog_file;
mod commands;
mod config;
mod error;
mod preferences;
mod render;
mod state;

use commands::OutputFormat;
use commands::theme::ThemeAction;
use config::{LogFormat, ShopConfig};
use preferences::PreferenceStore;
use state::ShopState;

#[derive(Parser)]
#[command(name = "sc-cli")]
#[command(author, version, about = "SebastianClothes terminal storefront")]
struct Cli {
    /// YAML catalog to use instead of the built-in one
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List products
    Products {
        /// Case-insensitive name search
        #[arg(short, long, default_value = "")]
        search: String,

        /// Only products offered in this size
        #[arg(long)]
        size: Option<Size>,

        /// `popular`, `price-asc` or `price-desc`
        #[arg(long, default_value = "popular")]
        sort: SortMode,
    },
    /// Show one product
    Show {
        /// Product id, e.g. d1
        id: String,
    },
    /// List the sizes offered across the catalog
    Sizes,
    /// Read or change the stored theme
    Theme {
        #[command(subcommand)]
        action: Option<ThemeCommand>,
    },
    /// Start an interactive shopping session
    Shop,
}

#[derive(Subcommand)]
enum ThemeCommand {
    /// Print the stored theme
    Get,
    /// Store a theme (`light` or `dark`)
    Set { theme: Theme },
    /// Flip between light and dark
    Toggle,
}

impl From<ThemeCommand> for ThemeAction {
    fn from(command: ThemeCommand) -> Self {
        match command {
            ThemeCommand::Get => Self::Get,
            ThemeCommand::Set { theme } => Self::Set(theme),
            ThemeCommand::Toggle => Self::Toggle,
        }
    }
}

/// Initialize Sentry error tracking and return guard that must be kept alive.
fn init_sentry(config: &ShopConfig) -> Option<sentry::ClientInitGuard> {
    let dsn = config.sentry_dsn.as_ref()?;

    let guard = sentry::init((
        dsn.as_str(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            attach_stacktrace: true,
            ..Default::default()
        },
    ));

    tracing::info!("Sentry initialized");
    Some(guard)
}

/// Filter tracing events to Sentry event types.
fn sentry_event_filter(metadata: &tracing::Metadata<'_>) -> sentry_tracing::EventFilter {
    match *metadata.level() {
        tracing::Level::ERROR | tracing::Level::WARN => sentry_tracing::EventFilter::Event,
        tracing::Level::INFO | tracing::Level::DEBUG => sentry_tracing::EventFilter::Breadcrumb,
        _ => sentry_tracing::EventFilter::Ignore,
    }
}

/// Logs go to stderr; stdout carries rendered output only.
fn init_tracing(format: LogFormat) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "sebastian_clothes_cli=info,sebastian_clothes_core=info".into());

    let (text, json) = match format {
        LogFormat::Text => (
            Some(tracing_subscriber::fmt::layer().with_writer(std::io::stderr)),
            None,
        ),
        LogFormat::Json => (
            None,
            Some(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            ),
        ),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(text)
        .with(json)
        .with(sentry_tracing::layer().event_filter(sentry_event_filter))
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match ShopConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            init_tracing(LogFormat::Text);
            tracing::error!("Command failed: {e}");
            return ExitCode::FAILURE;
        }
    };

    // Sentry must be initialized before the tracing subscriber
    let _sentry_guard = init_sentry(&config);
    init_tracing(config.log_format);

    if let Err(e) = run(cli, &config) {
        tracing::error!("Command failed: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn run(cli: Cli, config: &ShopConfig) -> error::Result<()> {
    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };
    let catalog_path = cli.catalog.as_deref().or(config.catalog_path.as_deref());
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Products { search, size, sort } => {
            let catalog = catalog_file::load(catalog_path)?;
            let query = CatalogQuery::new(search, size, sort);
            commands::products::list(&catalog, &query, format, &mut out)?;
        }
        Commands::Show { id } => {
            let catalog = catalog_file::load(catalog_path)?;
            let images = ImageResolver::new(RemoteImageProvider::default(), &config.image_fallback);
            commands::products::show(&catalog, &images, &ProductId::new(id), format, &mut out)?;
        }
        Commands::Sizes => {
            let catalog = catalog_file::load(catalog_path)?;
            commands::products::sizes(&catalog, format, &mut out)?;
        }
        Commands::Theme { action } => {
            let store = PreferenceStore::new(&config.preferences_path);
            let action = action.map_or(ThemeAction::Get, ThemeAction::from);
            commands::theme::run(&store, action, format, &mut out)?;
        }
        Commands::Shop => {
            let catalog = catalog_file::load(catalog_path)?;
            let mut state = ShopState::new(catalog, config, Utc::now());
            tracing::info!(products = state.catalog().len(), "shop session started");
            commands::shop::run(&mut state, std::io::stdin().lock(), &mut out)?;
        }
    }
    Ok(())
}
