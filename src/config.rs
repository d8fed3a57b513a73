use std::env;
use std::path::{Path, PathBuf};

use crate::error::AppResult;
use crate::services::PromptService;

pub const DEFAULT_JIRA_HOST: &str = "jira.crossroads.org.hk";

/// Snapshot of the environment taken once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub jira_host: String,
    pub jira_username: Option<String>,
    pub jira_password: Option<String>,
    pub sendgrid_api_key: Option<String>,
    pub workspace_root: PathBuf,
}

impl AppConfig {
    pub fn load(workspace_hint: &Path) -> Self {
        Self {
            jira_host: non_empty_var("JIRA_HOST").unwrap_or_else(|| DEFAULT_JIRA_HOST.to_string()),
            jira_username: non_empty_var("JIRA_USERNAME"),
            jira_password: non_empty_var("JIRA_PASSWORD"),
            sendgrid_api_key: non_empty_var("SENDGRID_API_KEY"),
            workspace_root: workspace_hint.to_path_buf(),
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}

/// Precedence rule for tracker credentials: the environment value wins when
/// present and non-empty, otherwise the user is asked.
pub fn resolve_credential(
    env_value: Option<&str>,
    label: &str,
    secret: bool,
    prompt: &dyn PromptService,
) -> AppResult<String> {
    if let Some(value) = env_value.map(str::trim).filter(|value| !value.is_empty()) {
        return Ok(value.to_string());
    }
    if secret {
        prompt.solicit_secret(label)
    } else {
        prompt.solicit(label)
    }
}
