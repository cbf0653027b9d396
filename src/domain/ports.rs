use crate::domain::model::{FetchOptions, HostSet, Invocation, RetrievalSpec, RunStatus};
use crate::utils::error::Result;
use async_trait::async_trait;

/// 執行一次遠端複製呼叫並等待結束
#[async_trait]
pub trait CommandRunner: Send + Sync {
    async fn run(&self, invocation: &Invocation) -> Result<RunStatus>;
}

pub trait ConfigProvider: Send + Sync {
    fn hosts(&self) -> HostSet;
    fn retrieval(&self) -> RetrievalSpec;
    fn options(&self) -> FetchOptions;
}
