use async_trait::async_trait;

use crate::domain::ticket::TicketId;
use crate::error::AppResult;

#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub secret: String,
}

/// Outcome of a single ticket lookup. A missing ticket is the one recovered
/// condition; every other failure surfaces as an error and aborts the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TicketLookup {
    Found(String),
    NotFound,
}

#[async_trait]
pub trait IssueTrackerService: Send + Sync {
    /// Verifies the credentials against the tracker and keeps them for the
    /// lookups that follow. Called exactly once, before the first lookup.
    async fn authenticate(&self, credentials: Credentials) -> AppResult<()>;

    async fn fetch_summary(&self, ticket: &TicketId) -> AppResult<TicketLookup>;
}
