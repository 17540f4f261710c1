//! Unified error handling for the CLI.

use std::path::PathBuf;

use sebastian_clothes_core::{CatalogError, CheckoutError, ProductId, Size, SizeError};
use thiserror::Error;

use crate::config::ConfigError;
use crate::preferences::PreferenceError;

/// Errors in a single interactive command.
///
/// These are reported to the user and the session carries on.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    /// The input is not a known command.
    #[error("unknown command: {0} (type `help`)")]
    Unknown(String),

    /// A command is missing an argument.
    #[error("usage: {0}")]
    Usage(&'static str),

    /// A size label did not parse.
    #[error(transparent)]
    Size(#[from] SizeError),

    /// A number did not parse.
    #[error("not a number: {0}")]
    InvalidNumber(String),

    /// Generic invalid argument.
    #[error("{0}")]
    InvalidArgument(String),

    /// No product with this id.
    #[error("no product with id {0}")]
    UnknownProduct(ProductId),

    /// The product is not made in this size.
    #[error("{product} is not available in size {size}")]
    SizeNotOffered {
        /// Product asked for.
        product: ProductId,
        /// Size asked for.
        size: Size,
    },

    /// Checkout refused.
    #[error(transparent)]
    Checkout(#[from] CheckoutError),
}

/// Application-level error type for the CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The catalog file could not be read.
    #[error("Cannot read catalog {path}: {source}")]
    CatalogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The catalog file is not valid YAML for a product list.
    #[error("Cannot parse catalog {path}: {source}")]
    CatalogYaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// The catalog violates an invariant.
    #[error("Invalid catalog: {0}")]
    Catalog(#[from] CatalogError),

    /// Preference file failure.
    #[error("Preferences error: {0}")]
    Preferences(#[from] PreferenceError),

    /// A one-shot command failed.
    #[error("{0}")]
    Command(#[from] CommandError),

    /// Writing output or reading input failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON output failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for `CliError`.
pub type Result<T> = std::result::Result<T, CliError>;
