use async_trait::async_trait;
use pulldown_cmark::{Parser, html};
use reqwest::Client;
use serde::Serialize;
use tracing::info;

use crate::domain::report::Report;
use crate::error::{AppError, AppResult};
use crate::services::ReportSink;

const MAIL_SEND_URL: &str = "https://api.sendgrid.com/v3/mail/send";
const DEFAULT_FROM: &str = "deployer@goodcity.hk";
const DEFAULT_SUBJECT: &str = "Release Notes";

/// Emails the report as HTML through the SendGrid v3 mail API.
pub struct SendGridMailer {
    http: Client,
    api_url: String,
    api_key: String,
    recipients: Vec<String>,
    subject: String,
}

impl SendGridMailer {
    pub fn new(api_key: String, recipients: Vec<String>, subject: Option<String>) -> Self {
        Self::with_api_url(MAIL_SEND_URL.to_string(), api_key, recipients, subject)
    }

    pub fn with_api_url(
        api_url: String,
        api_key: String,
        recipients: Vec<String>,
        subject: Option<String>,
    ) -> Self {
        Self {
            http: Client::new(),
            api_url,
            api_key,
            recipients,
            subject: subject.unwrap_or_else(|| DEFAULT_SUBJECT.to_string()),
        }
    }
}

/// Splits a comma-separated recipient list, dropping blank entries.
pub fn parse_recipients(addresses: &str) -> AppResult<Vec<String>> {
    let recipients = addresses
        .split(',')
        .map(str::trim)
        .filter(|address| !address.is_empty())
        .map(str::to_string)
        .collect::<Vec<_>>();

    if recipients.is_empty() {
        return Err(AppError::MailConfig(
            "no email recipients provided".to_string(),
        ));
    }
    Ok(recipients)
}

fn markdown_to_html(markdown: &str) -> String {
    let mut out = String::new();
    html::push_html(&mut out, Parser::new(markdown));
    out
}

#[async_trait]
impl ReportSink for SendGridMailer {
    fn name(&self) -> &'static str {
        "email"
    }

    async fn emit(&self, report: &Report) -> AppResult<()> {
        let message = MailSendRequest {
            personalizations: vec![Personalization {
                to: self
                    .recipients
                    .iter()
                    .map(|email| Address { email: email.clone() })
                    .collect(),
            }],
            from: Address {
                email: DEFAULT_FROM.to_string(),
            },
            subject: self.subject.clone(),
            content: vec![Content {
                content_type: "text/html".to_string(),
                value: markdown_to_html(report.markdown()),
            }],
        };

        let response = self
            .http
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&message)
            .send()
            .await
            .map_err(|err| AppError::MailSend(format!("failed to reach SendGrid: {err}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::MailSend(format!(
                "SendGrid responded with {status}: {}",
                body.trim()
            )));
        }

        info!(recipients = self.recipients.len(), "release notes emailed");
        Ok(())
    }
}

#[derive(Serialize)]
struct MailSendRequest {
    personalizations: Vec<Personalization>,
    from: Address,
    subject: String,
    content: Vec<Content>,
}

#[derive(Serialize)]
struct Personalization {
    to: Vec<Address>,
}

#[derive(Serialize)]
struct Address {
    email: String,
}

#[derive(Serialize)]
struct Content {
    #[serde(rename = "type")]
    content_type: String,
    value: String,
}
