use async_trait::async_trait;
use tracing::{info, warn};

use crate::domain::report::Report;
use crate::error::AppResult;
use crate::services::ReportSink;

/// Copies the markdown body verbatim to the system clipboard. Best-effort;
/// a clipboard failure is logged but never aborts the run.
pub struct ClipboardSink;

impl ClipboardSink {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ReportSink for ClipboardSink {
    fn name(&self) -> &'static str {
        "clipboard"
    }

    async fn emit(&self, report: &Report) -> AppResult<()> {
        let markdown = report.markdown().to_string();
        let result = arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(markdown));
        match result {
            Ok(()) => info!("markdown copied to clipboard"),
            Err(err) => warn!(err = %err, "clipboard unavailable, skipping copy"),
        }
        Ok(())
    }
}
