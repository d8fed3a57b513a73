use async_trait::async_trait;

use crate::error::AppResult;

#[async_trait]
pub trait VersionControlService: Send + Sync {
    /// Refreshes local knowledge of the remote's state.
    async fn synchronize(&self) -> AppResult<()>;

    /// Returns the commits reachable from `head` but not from `base`, newest
    /// first, one line per commit including the subject.
    async fn log_range(&self, base: &str, head: &str) -> AppResult<String>;

    async fn remote_url(&self) -> AppResult<String>;

    /// Most recent tag, or `None` when the repository has no tags.
    async fn latest_tag(&self) -> AppResult<Option<String>>;
}
