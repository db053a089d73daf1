pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::{OutputFormat, SiteConfig};

pub use crate::adapters::storage::LocalStorage;
pub use crate::core::{
    engine::PortfolioEngine,
    runtime::ViewRuntime,
    view::{Cmd, Msg, PortfolioView, ViewState},
};
pub use crate::domain::content::ContentTables;
pub use crate::utils::error::{PortfolioError, Result};
