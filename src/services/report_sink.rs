use async_trait::async_trait;

use crate::domain::report::Report;
use crate::error::AppResult;

/// An output channel consuming the assembled report.
#[async_trait]
pub trait ReportSink: Send + Sync {
    fn name(&self) -> &'static str;

    async fn emit(&self, report: &Report) -> AppResult<()>;
}
