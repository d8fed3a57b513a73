use crate::error::AppResult;

/// Terminal input capability. Kept synchronous; every prompt blocks the
/// pipeline until answered.
pub trait PromptService: Send + Sync {
    fn confirm(&self, question: &str, default_yes: bool) -> AppResult<bool>;

    fn solicit(&self, label: &str) -> AppResult<String>;

    /// Like `solicit`, but the typed value is never echoed.
    fn solicit_secret(&self, label: &str) -> AppResult<String>;
}
