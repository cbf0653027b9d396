pub mod cleanup;
pub mod fetcher;

pub use crate::domain::model::{
    FetchOptions, FetchSummary, HostSet, Invocation, RetrievalSpec, RunStatus,
};
pub use crate::domain::ports::{CommandRunner, ConfigProvider};
pub use crate::utils::error::Result;
