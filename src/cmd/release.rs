use tracing::info;

use crate::context::AppContext;
use crate::error::{AppError, AppResult};
use crate::infra::clipboard::ClipboardSink;
use crate::infra::console::ConsoleSink;
use crate::infra::pdf::PdfSink;
use crate::infra::sendgrid::{SendGridMailer, parse_recipients};
use crate::services::ReportSink;
use crate::workflow::release::{ReleaseRequest, generate_report};

#[derive(Debug, Clone)]
pub struct ReleaseCommandArgs {
    pub base: String,
    pub head: String,
    pub tracker_code: String,
    pub app_name: Option<String>,
    pub pdf: bool,
    pub clipboard: bool,
    pub email_to: Option<String>,
    pub email_subject: Option<String>,
}

pub async fn run(ctx: &AppContext, args: ReleaseCommandArgs) -> AppResult<()> {
    let request = ReleaseRequest {
        base: args.base,
        head: args.head,
        tracker_code: args.tracker_code,
        app_name: args.app_name,
    };

    let Some(report) = generate_report(ctx, &request).await? else {
        return Ok(());
    };

    let mut sinks: Vec<Box<dyn ReportSink>> = vec![Box::new(ConsoleSink::new())];
    if report.tickets.is_empty() {
        info!("no tickets in the release range, skipping optional sinks");
    } else {
        if args.pdf {
            sinks.push(Box::new(PdfSink::for_repo(&report.repo_name)));
        }
        if args.clipboard {
            sinks.push(Box::new(ClipboardSink::new()));
        }
        if let Some(addresses) = &args.email_to {
            let api_key = ctx.config.sendgrid_api_key.clone().ok_or_else(|| {
                AppError::MailConfig("environment variable SENDGRID_API_KEY is missing".to_string())
            })?;
            let recipients = parse_recipients(addresses)?;
            sinks.push(Box::new(SendGridMailer::new(
                api_key,
                recipients,
                args.email_subject.clone(),
            )));
        }
    }

    for sink in &sinks {
        info!(sink = sink.name(), "emitting report");
        sink.emit(&report).await?;
    }

    Ok(())
}
