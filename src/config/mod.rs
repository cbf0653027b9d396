#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::domain::model::{
    FetchOptions, HostSet, RetrievalSpec, DEFAULT_EXTENSION, DEFAULT_LOCAL_DEST, DEFAULT_PATTERN,
    DEFAULT_PROGRAM,
};
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use toml_config::TomlConfig;

/// 設定檔未指定程式時，可用此環境變數取代預設的 `scp`
pub const PROGRAM_ENV: &str = "LOG_FETCH_SCP";

/// 預設程式：環境變數有值時優先，否則為 `scp`；明確設定的程式不受影響
pub fn default_program(env_value: Option<String>) -> String {
    env_value
        .map(|p| p.trim().to_string())
        .filter(|p| !p.is_empty())
        .unwrap_or_else(|| DEFAULT_PROGRAM.to_string())
}

/// 一次執行所需的完整設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub hosts: HostSet,
    pub retrieval: RetrievalSpec,
    pub options: FetchOptions,
}

impl Settings {
    /// 套用預設值；user 與 remote_dir 沒有預設值
    pub fn from_toml(config: TomlConfig) -> Result<Self> {
        let retrieval = config.retrieval;
        let user = validation::validate_required_field("retrieval.user", &retrieval.user)?;
        let remote_dir =
            validation::validate_required_field("retrieval.remote_dir", &retrieval.remote_dir)?;

        Ok(Self {
            hosts: HostSet::new(config.hosts),
            retrieval: RetrievalSpec {
                user: user.clone(),
                remote_dir: remote_dir.clone(),
                pattern: retrieval
                    .pattern
                    .unwrap_or_else(|| DEFAULT_PATTERN.to_string()),
                extension: retrieval
                    .extension
                    .unwrap_or_else(|| DEFAULT_EXTENSION.to_string()),
                local_dest: retrieval
                    .local_dest
                    .unwrap_or_else(|| DEFAULT_LOCAL_DEST.to_string()),
            },
            options: FetchOptions {
                program: config
                    .options
                    .program
                    .unwrap_or_else(|| default_program(std::env::var(PROGRAM_ENV).ok())),
                clean_before_fetch: config.options.clean_before_fetch.unwrap_or(false),
                rounds: config.rounds,
            },
        })
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        for host in self.hosts.iter() {
            validation::validate_host("hosts", host)?;
        }

        validation::validate_user("retrieval.user", &self.retrieval.user)?;
        validation::validate_non_empty_string("retrieval.remote_dir", &self.retrieval.remote_dir)?;
        validation::validate_path("retrieval.remote_dir", &self.retrieval.remote_dir)?;
        validation::validate_non_empty_string("retrieval.pattern", &self.retrieval.pattern)?;
        validation::validate_non_empty_string("retrieval.extension", &self.retrieval.extension)?;
        validation::validate_path("retrieval.local_dest", &self.retrieval.local_dest)?;
        validation::validate_not_option("retrieval.local_dest", &self.retrieval.local_dest)?;
        validation::validate_non_empty_string("options.program", &self.options.program)?;

        if self.hosts.is_empty() {
            tracing::warn!("Host list is empty, nothing will be fetched");
        }

        Ok(())
    }
}

impl ConfigProvider for Settings {
    fn hosts(&self) -> HostSet {
        self.hosts.clone()
    }

    fn retrieval(&self) -> RetrievalSpec {
        self.retrieval.clone()
    }

    fn options(&self) -> FetchOptions {
        self.options.clone()
    }
}
