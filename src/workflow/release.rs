use chrono::Local;
use tracing::{info, warn};

use crate::config::resolve_credential;
use crate::context::AppContext;
use crate::domain::report::Report;
use crate::domain::ticket::{ResolvedTicket, TicketId, TicketPattern, UNAVAILABLE_SUMMARY};
use crate::error::AppResult;
use crate::services::{Credentials, IssueTrackerService, TicketLookup};

#[derive(Debug, Clone)]
pub struct ReleaseRequest {
    pub base: String,
    pub head: String,
    pub tracker_code: String,
    pub app_name: Option<String>,
}

/// Runs the linear pipeline: confirm, fetch, log, extract, resolve, assemble.
/// Returns `None` when the user declines the up-to-date confirmation.
pub async fn generate_report(
    ctx: &AppContext,
    request: &ReleaseRequest,
) -> AppResult<Option<Report>> {
    let question = format!(
        "Are the local {} and {} refs up to date?",
        request.base, request.head
    );
    if !ctx.prompt.confirm(&question, true)? {
        info!("user declined, nothing generated");
        return Ok(None);
    }

    let pattern = TicketPattern::new(&request.tracker_code)?;

    ctx.version_control.synchronize().await?;
    let log = ctx
        .version_control
        .log_range(&request.base, &request.head)
        .await?;

    let tickets = pattern.extract(&log);
    info!(count = tickets.len(), "ticket references extracted");

    let resolved = if tickets.is_empty() {
        Vec::new()
    } else {
        let credentials = Credentials {
            username: resolve_credential(
                ctx.config.jira_username.as_deref(),
                "JIRA Username",
                false,
                ctx.prompt.as_ref(),
            )?,
            secret: resolve_credential(
                ctx.config.jira_password.as_deref(),
                "JIRA Password",
                true,
                ctx.prompt.as_ref(),
            )?,
        };
        ctx.issue_tracker.authenticate(credentials).await?;
        resolve_tickets(ctx.issue_tracker.as_ref(), &tickets).await?
    };

    let remote_url = ctx.version_control.remote_url().await?;
    let repo_name = request
        .app_name
        .clone()
        .or_else(|| display_name_from_remote(&remote_url))
        .or_else(|| {
            ctx.config
                .workspace_root
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
        })
        .unwrap_or_else(|| "repository".to_string());

    let version = ctx
        .version_control
        .latest_tag()
        .await?
        .map(|tag| tag.trim_start_matches('v').to_string())
        .unwrap_or_else(|| "0.0.0".to_string());

    let generated_at = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();

    Ok(Some(Report::assemble(
        &repo_name,
        &version,
        &remote_url,
        &ctx.config.jira_host,
        &generated_at,
        resolved,
    )))
}

/// Looks tickets up one at a time, in list order. A missing ticket gets the
/// sentinel summary; any other lookup failure propagates and ends the run.
async fn resolve_tickets(
    tracker: &dyn IssueTrackerService,
    tickets: &[TicketId],
) -> AppResult<Vec<ResolvedTicket>> {
    let mut resolved = Vec::with_capacity(tickets.len());
    for id in tickets {
        info!(ticket = %id, "fetching ticket");
        let summary = match tracker.fetch_summary(id).await? {
            TicketLookup::Found(summary) => summary,
            TicketLookup::NotFound => {
                warn!(ticket = %id, "ticket not found in tracker");
                UNAVAILABLE_SUMMARY.to_string()
            }
        };
        resolved.push(ResolvedTicket {
            id: id.clone(),
            summary,
        });
    }
    Ok(resolved)
}

/// Last path segment of the remote URL with any `.git` suffix stripped.
/// Handles both `https://host/org/repo.git` and `git@host:org/repo.git`.
fn display_name_from_remote(url: &str) -> Option<String> {
    let trimmed = url.trim().trim_end_matches('/');
    let stripped = trimmed.strip_suffix(".git").unwrap_or(trimmed);
    let segment = stripped
        .rsplit('/')
        .next()
        .map(|last| last.rsplit(':').next().unwrap_or(last))?;
    (!segment.is_empty()).then(|| segment.to_string())
}
