use crate::core::{CommandRunner, Invocation, RunStatus};
use crate::utils::error::{FetchError, Result};
use async_trait::async_trait;
use tokio::process::Command;

/// 以 PATH 查找遠端複製程式；找不到時保留原名，讓每台主機各自回報啟動錯誤
pub fn resolve_program(program: &str) -> String {
    if let Ok(p) = which::which(program) {
        return p.to_string_lossy().to_string();
    }

    program.to_string()
}

/// 以明確的參數列表啟動子行程，不經過 shell，並沿用目前的 stdio
#[derive(Debug, Clone, Default)]
pub struct SystemCommandRunner {
    program_override: Option<String>,
}

impl SystemCommandRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// 所有呼叫都改用 `program`，忽略計畫中的程式（測試用）
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program_override: Some(program.into()),
        }
    }
}

#[async_trait]
impl CommandRunner for SystemCommandRunner {
    async fn run(&self, invocation: &Invocation) -> Result<RunStatus> {
        let program = self
            .program_override
            .clone()
            .unwrap_or_else(|| resolve_program(&invocation.program));

        tracing::debug!("Spawning {} {:?}", program, invocation.args);

        // 沒有逾時：遠端主機卡住時整個流程就停在這裡
        let status = Command::new(&program)
            .args(&invocation.args)
            .status()
            .await
            .map_err(|source| FetchError::SpawnError {
                program: program.clone(),
                source,
            })?;

        Ok(status.into())
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::core::RetrievalSpec;

    fn invocation(program: &str) -> Invocation {
        let spec = RetrievalSpec {
            user: "u".to_string(),
            remote_dir: "/data/".to_string(),
            pattern: "*".to_string(),
            extension: ".log".to_string(),
            local_dest: ".".to_string(),
        };
        Invocation::new(program, "a", &spec)
    }

    #[tokio::test]
    async fn test_runner_reports_exit_status() {
        let ok = SystemCommandRunner::new().run(&invocation("true")).await.unwrap();
        assert!(ok.success);

        let failed = SystemCommandRunner::new().run(&invocation("false")).await.unwrap();
        assert!(!failed.success);
        assert_eq!(failed.code, Some(1));
    }

    #[test]
    fn test_resolve_program() {
        let sh = resolve_program("sh");
        assert!(sh.ends_with("sh"));
        assert!(std::path::Path::new(&sh).is_absolute());

        assert_eq!(
            resolve_program("log-fetch-no-such-tool"),
            "log-fetch-no-such-tool"
        );
    }

    #[tokio::test]
    async fn test_runner_spawn_error() {
        let runner = SystemCommandRunner::with_program("/nonexistent/log-fetch-scp");
        let err = runner.run(&invocation("scp")).await.unwrap_err();
        assert!(matches!(err, FetchError::SpawnError { .. }));
    }
}
