use std::sync::Arc;

use crate::config::AppConfig;
use crate::services::{IssueTrackerService, PromptService, VersionControlService};

#[derive(Clone)]
pub struct AppContext {
    pub config: AppConfig,
    pub version_control: Arc<dyn VersionControlService>,
    pub issue_tracker: Arc<dyn IssueTrackerService>,
    pub prompt: Arc<dyn PromptService>,
}

impl AppContext {
    pub fn new(
        config: AppConfig,
        version_control: Arc<dyn VersionControlService>,
        issue_tracker: Arc<dyn IssueTrackerService>,
        prompt: Arc<dyn PromptService>,
    ) -> Self {
        Self {
            config,
            version_control,
            issue_tracker,
            prompt,
        }
    }
}
