use crate::config::toml_config::TomlConfig;
use crate::config::Settings;
use crate::utils::error::Result;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "log-fetch")]
#[command(about = "Copy log files from a set of remote hosts into a local directory")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Remote host (repeatable or comma separated); replaces the hosts from the config file
    #[arg(long = "host", value_delimiter = ',')]
    pub hosts: Vec<String>,

    #[arg(short, long)]
    pub user: Option<String>,

    #[arg(long)]
    pub remote_dir: Option<String>,

    /// Filename wildcard, e.g. "*"
    #[arg(long)]
    pub pattern: Option<String>,

    /// File extension appended to the pattern, e.g. ".log"
    #[arg(long)]
    pub extension: Option<String>,

    /// Local destination directory
    #[arg(long)]
    pub dest: Option<String>,

    /// Remote-copy program
    #[arg(long)]
    pub program: Option<String>,

    /// Remove matching files from the destination before fetching
    #[arg(long)]
    pub clean: bool,

    /// Accepted for compatibility; has no effect
    #[arg(long, hide = true)]
    pub rounds: Option<u32>,

    /// Print the commands without running them
    #[arg(long)]
    pub dry_run: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long)]
    pub json_logs: bool,
}

impl CliConfig {
    /// 命令列參數覆蓋設定檔的值
    pub fn apply_overrides(&self, config: &mut TomlConfig) {
        if !self.hosts.is_empty() {
            config.hosts = self.hosts.clone();
        }
        if let Some(user) = &self.user {
            config.retrieval.user = Some(user.clone());
        }
        if let Some(remote_dir) = &self.remote_dir {
            config.retrieval.remote_dir = Some(remote_dir.clone());
        }
        if let Some(pattern) = &self.pattern {
            config.retrieval.pattern = Some(pattern.clone());
        }
        if let Some(extension) = &self.extension {
            config.retrieval.extension = Some(extension.clone());
        }
        if let Some(dest) = &self.dest {
            config.retrieval.local_dest = Some(dest.clone());
        }
        if let Some(program) = &self.program {
            config.options.program = Some(program.clone());
        }
        if self.clean {
            config.options.clean_before_fetch = Some(true);
        }
        if self.rounds.is_some() {
            config.rounds = self.rounds;
        }
    }

    /// 載入設定檔（若有），套用命令列參數後補上預設值
    pub fn resolve(&self) -> Result<Settings> {
        let mut config = match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path);
                TomlConfig::from_file(path)?
            }
            None => TomlConfig::default(),
        };

        self.apply_overrides(&mut config);
        Settings::from_toml(config)
    }
}
