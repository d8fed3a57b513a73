use async_trait::async_trait;

use crate::domain::report::Report;
use crate::error::AppResult;
use crate::services::ReportSink;

const SEPARATOR: &str =
    "----------------------------------------------------------------------------";

/// Dumps the markdown body to stdout between two separator lines.
pub struct ConsoleSink;

impl ConsoleSink {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ReportSink for ConsoleSink {
    fn name(&self) -> &'static str {
        "console"
    }

    async fn emit(&self, report: &Report) -> AppResult<()> {
        println!("{SEPARATOR}");
        println!("{}", report.markdown());
        println!("{SEPARATOR}");
        Ok(())
    }
}
