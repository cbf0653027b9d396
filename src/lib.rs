pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::process::SystemCommandRunner;
pub use config::{toml_config::TomlConfig, Settings};
pub use core::fetcher::Fetcher;
pub use domain::model::{FetchOptions, FetchSummary, HostSet, Invocation, RetrievalSpec, RunStatus};
pub use domain::ports::{CommandRunner, ConfigProvider};
pub use utils::error::{FetchError, Result};
