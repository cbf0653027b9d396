use crate::utils::error::{FetchError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub hosts: Vec<String>,
    /// 舊設定檔留下的欄位，不影響行為
    pub rounds: Option<u32>,
    #[serde(default)]
    pub retrieval: RetrievalSection,
    #[serde(default)]
    pub options: OptionsSection,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RetrievalSection {
    pub user: Option<String>,
    pub remote_dir: Option<String>,
    pub pattern: Option<String>,
    pub extension: Option<String>,
    pub local_dest: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OptionsSection {
    pub program: Option<String>,
    pub clean_before_fetch: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(FetchError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${LOG_USER})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| FetchError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
hosts = ["node1", "node2"]
rounds = 3

[retrieval]
user = "ops"
remote_dir = "/var/log/app/"
pattern = "server-*"
extension = ".log"
local_dest = "./logs"

[options]
program = "scp"
clean_before_fetch = true
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.hosts, vec!["node1", "node2"]);
        assert_eq!(config.rounds, Some(3));
        assert_eq!(config.retrieval.user.as_deref(), Some("ops"));
        assert_eq!(config.retrieval.pattern.as_deref(), Some("server-*"));
        assert_eq!(config.options.clean_before_fetch, Some(true));
    }

    #[test]
    fn test_parse_minimal_config() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert!(config.hosts.is_empty());
        assert!(config.retrieval.user.is_none());
        assert!(config.options.program.is_none());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("LOG_FETCH_TEST_USER", "deploy");

        let toml_content = r#"
hosts = ["a"]

[retrieval]
user = "${LOG_FETCH_TEST_USER}"
remote_dir = "${LOG_FETCH_TEST_UNSET_DIR}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.retrieval.user.as_deref(), Some("deploy"));
        assert_eq!(
            config.retrieval.remote_dir.as_deref(),
            Some("${LOG_FETCH_TEST_UNSET_DIR}")
        );

        std::env::remove_var("LOG_FETCH_TEST_USER");
    }

    #[test]
    fn test_invalid_toml() {
        let err = TomlConfig::from_toml_str("hosts = [").unwrap_err();
        assert!(matches!(err, FetchError::TomlParseError(_)));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"hosts = [\"file-host\"]\n[retrieval]\nuser = \"ops\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.hosts, vec!["file-host"]);
    }
}
