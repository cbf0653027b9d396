use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

pub const DEFAULT_PROGRAM: &str = "scp";
pub const DEFAULT_PATTERN: &str = "*";
pub const DEFAULT_EXTENSION: &str = ".log";
pub const DEFAULT_LOCAL_DEST: &str = ".";

/// 遠端主機集合。重複的主機只會出現一次；迭代順序不屬於契約的一部分。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HostSet(BTreeSet<String>);

impl HostSet {
    pub fn new<I, S>(hosts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(hosts.into_iter().map(Into::into).collect())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, host: &str) -> bool {
        self.0.contains(host)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for HostSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// 每台主機共用的抓取參數
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetrievalSpec {
    pub user: String,
    pub remote_dir: String,
    pub pattern: String,
    pub extension: String,
    pub local_dest: String,
}

impl RetrievalSpec {
    /// `<user>@<host>:<remote_dir><pattern><extension>`
    pub fn remote_endpoint(&self, host: &str) -> String {
        format!(
            "{}@{}:{}{}",
            self.user,
            host,
            self.remote_dir,
            self.file_glob()
        )
    }

    pub fn file_glob(&self) -> String {
        format!("{}{}", self.pattern, self.extension)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchOptions {
    pub program: String,
    pub clean_before_fetch: bool,
    /// 為相容舊設定檔而保留，不影響任何行為
    pub rounds: Option<u32>,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            program: DEFAULT_PROGRAM.to_string(),
            clean_before_fetch: false,
            rounds: None,
        }
    }
}

/// 一次遠端複製呼叫；`args` 原樣交給程式，不經過 shell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub host: String,
    pub program: String,
    pub args: Vec<String>,
}

impl Invocation {
    pub fn new(program: &str, host: &str, spec: &RetrievalSpec) -> Self {
        Self {
            host: host.to_string(),
            program: program.to_string(),
            args: vec![spec.remote_endpoint(host), spec.local_dest.clone()],
        }
    }

    /// 參數部分，例如 `u@a:/data/*.log .`
    pub fn args_line(&self) -> String {
        self.args.join(" ")
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.program, self.args_line())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunStatus {
    pub success: bool,
    pub code: Option<i32>,
}

impl RunStatus {
    pub fn success() -> Self {
        Self {
            success: true,
            code: Some(0),
        }
    }

    pub fn failed(code: Option<i32>) -> Self {
        Self {
            success: false,
            code,
        }
    }
}

impl From<std::process::ExitStatus> for RunStatus {
    fn from(status: std::process::ExitStatus) -> Self {
        Self {
            success: status.success(),
            code: status.code(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FetchSummary {
    pub issued: usize,
    pub cleaned: usize,
}
