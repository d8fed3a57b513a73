use std::path::PathBuf;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::info;

use crate::domain::report::Report;
use crate::error::{AppError, AppResult};
use crate::services::ReportSink;

/// Renders the markdown body to a PDF file by piping it through `pandoc`.
pub struct PdfSink {
    output_path: PathBuf,
}

impl PdfSink {
    pub fn for_repo(repo_name: &str) -> Self {
        Self {
            output_path: PathBuf::from(output_file_name(repo_name)),
        }
    }
}

fn output_file_name(repo_name: &str) -> String {
    format!("release-{}.pdf", repo_name.replace(' ', "-"))
}

#[async_trait]
impl ReportSink for PdfSink {
    fn name(&self) -> &'static str {
        "pdf"
    }

    async fn emit(&self, report: &Report) -> AppResult<()> {
        let output_path = self.output_path.to_string_lossy().to_string();
        let mut child = Command::new("pandoc")
            .args(["--from", "markdown", "--output", &output_path])
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|err| AppError::Render(format!("failed to launch pandoc: {err}")))?;

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| AppError::Render("pandoc stdin unavailable".to_string()))?;
        stdin
            .write_all(report.markdown().as_bytes())
            .await
            .map_err(|err| AppError::Render(format!("failed to feed pandoc: {err}")))?;
        drop(stdin);

        let output = child
            .wait_with_output()
            .await
            .map_err(|err| AppError::Render(format!("failed to wait for pandoc: {err}")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(AppError::Render(format!(
                "pandoc exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        info!(path = %self.output_path.display(), "PDF written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_the_output_path_from_the_repo_name() {
        assert_eq!(output_file_name("goodcity"), "release-goodcity.pdf");
    }

    #[test]
    fn replaces_spaces_with_hyphens() {
        assert_eq!(
            output_file_name("Good City Admin"),
            "release-Good-City-Admin.pdf"
        );
    }
}
