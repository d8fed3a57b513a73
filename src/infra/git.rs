use std::path::PathBuf;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use crate::error::{AppError, AppResult};
use crate::services::VersionControlService;

const LOG_FORMAT: &str = "--pretty=format:%h %s";

pub struct GitCli {
    workspace_root: PathBuf,
}

impl GitCli {
    pub fn new(workspace_root: PathBuf) -> Self {
        Self { workspace_root }
    }

    async fn run(&self, args: &[&str]) -> AppResult<String> {
        debug!(?args, "running git");
        let output = Command::new("git")
            .args(args)
            .current_dir(&self.workspace_root)
            .output()
            .await
            .map_err(|err| AppError::SourceControl(format!("failed to run git: {err}")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(AppError::SourceControl(format!(
                "git {} exited with {}: {}",
                args.first().copied().unwrap_or_default(),
                output.status,
                stderr.trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

#[async_trait]
impl VersionControlService for GitCli {
    async fn synchronize(&self) -> AppResult<()> {
        self.run(&["fetch", "--quiet"]).await?;
        Ok(())
    }

    async fn log_range(&self, base: &str, head: &str) -> AppResult<String> {
        let range = format!("{base}..{head}");
        self.run(&["--no-pager", "log", LOG_FORMAT, "--abbrev-commit", &range])
            .await
    }

    async fn remote_url(&self) -> AppResult<String> {
        let url = self.run(&["remote", "get-url", "origin"]).await?;
        Ok(url.trim().to_string())
    }

    async fn latest_tag(&self) -> AppResult<Option<String>> {
        // `git describe` exits non-zero when the repository has no tags;
        // that is an expected state, not a failure.
        let output = Command::new("git")
            .args(["describe", "--tags", "--abbrev=0"])
            .current_dir(&self.workspace_root)
            .output()
            .await
            .map_err(|err| AppError::SourceControl(format!("failed to run git: {err}")))?;

        if !output.status.success() {
            return Ok(None);
        }

        let tag = String::from_utf8_lossy(&output.stdout).trim().to_string();
        Ok((!tag.is_empty()).then_some(tag))
    }
}
