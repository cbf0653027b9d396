use crate::core::cleanup::clean_local_matches;
use crate::core::{
    CommandRunner, ConfigProvider, FetchOptions, FetchSummary, HostSet, Invocation, RetrievalSpec,
};
use std::path::Path;

/// 從每台主機抓取 `pattern + extension` 到本地目錄，一次一台
pub struct Fetcher<R: CommandRunner> {
    runner: R,
    hosts: HostSet,
    spec: RetrievalSpec,
    options: FetchOptions,
}

impl<R: CommandRunner> Fetcher<R> {
    pub fn new(runner: R, hosts: HostSet, spec: RetrievalSpec, options: FetchOptions) -> Self {
        Self {
            runner,
            hosts,
            spec,
            options,
        }
    }

    pub fn from_config<C: ConfigProvider>(runner: R, config: &C) -> Self {
        Self::new(runner, config.hosts(), config.retrieval(), config.options())
    }

    pub fn hosts(&self) -> &HostSet {
        &self.hosts
    }

    pub fn spec(&self) -> &RetrievalSpec {
        &self.spec
    }

    /// 每台主機恰好一個呼叫，除了主機名稱外參數完全相同
    pub fn plan(&self) -> Vec<Invocation> {
        self.hosts
            .iter()
            .map(|host| Invocation::new(&self.options.program, host, &self.spec))
            .collect()
    }

    /// 只印出計畫中的指令，不呼叫 runner，也不執行清除步驟
    pub fn dry_run(&self) -> Vec<Invocation> {
        let plan = self.plan();
        for invocation in &plan {
            println!("{}", invocation);
        }
        plan
    }

    /// 依序執行每個呼叫；結果只記錄在日誌中，某台主機失敗不會中斷迴圈
    pub async fn run(&self) -> FetchSummary {
        if let Some(rounds) = self.options.rounds {
            tracing::debug!("rounds = {} is configured but has no effect", rounds);
        }

        let cleaned = if self.options.clean_before_fetch {
            self.clean()
        } else {
            0
        };

        let plan = self.plan();
        if plan.is_empty() {
            tracing::info!("No hosts configured, nothing to fetch");
        }

        for invocation in &plan {
            println!("{}", invocation);
            tracing::debug!("Fetching {} from {}", self.spec.file_glob(), invocation.host);

            match self.runner.run(invocation).await {
                Ok(status) if status.success => {
                    tracing::debug!("✅ {} finished", invocation.host);
                }
                Ok(status) => {
                    tracing::warn!(
                        "⚠️ {} exited with status {:?}, continuing",
                        invocation.host,
                        status.code
                    );
                }
                Err(e) => {
                    tracing::warn!("⚠️ {}: {}, continuing", invocation.host, e);
                }
            }
        }

        FetchSummary {
            issued: plan.len(),
            cleaned,
        }
    }

    fn clean(&self) -> usize {
        let dest = Path::new(&self.spec.local_dest);
        match clean_local_matches(dest, &self.spec.file_glob()) {
            Ok(removed) => {
                tracing::info!(
                    "🧹 Removed {} existing {} file(s) from {}",
                    removed,
                    self.spec.file_glob(),
                    dest.display()
                );
                removed
            }
            Err(e) => {
                tracing::warn!("Clean step failed: {}", e);
                0
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RunStatus;
    use crate::utils::error::Result;
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingRunner {
        calls: Mutex<Vec<Invocation>>,
    }

    #[async_trait]
    impl CommandRunner for RecordingRunner {
        async fn run(&self, invocation: &Invocation) -> Result<RunStatus> {
            self.calls.lock().unwrap().push(invocation.clone());
            Ok(RunStatus::success())
        }
    }

    fn spec() -> RetrievalSpec {
        RetrievalSpec {
            user: "u".to_string(),
            remote_dir: "/data/".to_string(),
            pattern: "*".to_string(),
            extension: ".log".to_string(),
            local_dest: ".".to_string(),
        }
    }

    #[test]
    fn test_plan_one_invocation_per_host() {
        let fetcher = Fetcher::new(
            RecordingRunner::default(),
            HostSet::new(["x", "y", "z"]),
            spec(),
            FetchOptions::default(),
        );

        let plan = fetcher.plan();
        assert_eq!(plan.len(), 3);
        for invocation in &plan {
            assert_eq!(invocation.program, "scp");
            assert_eq!(invocation.args[0], format!("u@{}:/data/*.log", invocation.host));
            assert_eq!(invocation.args[1], ".");
        }
    }

    #[test]
    fn test_run_issues_planned_invocations() {
        let fetcher = Fetcher::new(
            RecordingRunner::default(),
            HostSet::new(["a", "b"]),
            spec(),
            FetchOptions::default(),
        );

        let summary = tokio_test::block_on(fetcher.run());

        assert_eq!(summary.issued, 2);
        assert_eq!(summary.cleaned, 0);
        let calls = fetcher.runner.calls.lock().unwrap();
        assert_eq!(calls.len(), 2);
    }

    #[test]
    fn test_dry_run_returns_plan_without_running() {
        let fetcher = Fetcher::new(
            RecordingRunner::default(),
            HostSet::new(["a", "b"]),
            spec(),
            FetchOptions::default(),
        );

        let planned = fetcher.dry_run();

        assert_eq!(planned, fetcher.plan());
        assert!(fetcher.runner.calls.lock().unwrap().is_empty());
    }
}
