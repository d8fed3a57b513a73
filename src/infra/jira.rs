use async_trait::async_trait;
use base64::prelude::{BASE64_STANDARD, Engine as _};
use reqwest::{
    Client, StatusCode,
    header::{ACCEPT, AUTHORIZATION},
};
use serde::Deserialize;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::domain::ticket::TicketId;
use crate::error::{AppError, AppResult};
use crate::services::{Credentials, IssueTrackerService, TicketLookup};

pub struct JiraClient {
    http: Client,
    base_url: String,
    credentials: RwLock<Option<Credentials>>,
}

impl JiraClient {
    pub fn new(base_url: String) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            credentials: RwLock::new(None),
        }
    }

    pub fn for_host(host: &str) -> Self {
        Self::new(format!("https://{host}"))
    }

    fn auth_header(credentials: &Credentials) -> String {
        let pair = format!("{}:{}", credentials.username, credentials.secret);
        format!("Basic {}", BASE64_STANDARD.encode(pair))
    }

    fn myself_endpoint(&self) -> String {
        format!("{}/rest/api/2/myself", self.base_url)
    }

    fn issue_endpoint(&self, ticket: &TicketId) -> String {
        format!(
            "{}/rest/api/2/issue/{}?fields=summary",
            self.base_url, ticket
        )
    }
}

#[async_trait]
impl IssueTrackerService for JiraClient {
    async fn authenticate(&self, credentials: Credentials) -> AppResult<()> {
        let response = self
            .http
            .get(self.myself_endpoint())
            .header(AUTHORIZATION, Self::auth_header(&credentials))
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|err| AppError::TrackerAuth(format!("failed to reach tracker: {err}")))?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(AppError::TrackerAuth(
                "tracker rejected the credentials".to_string(),
            ));
        }
        if !status.is_success() {
            return Err(AppError::TrackerAuth(format!(
                "tracker responded with {status} during sign-in"
            )));
        }

        info!("authenticated against the tracker");
        *self.credentials.write().await = Some(credentials);
        Ok(())
    }

    async fn fetch_summary(&self, ticket: &TicketId) -> AppResult<TicketLookup> {
        let auth_header = {
            let guard = self.credentials.read().await;
            let credentials = guard.as_ref().ok_or_else(|| {
                AppError::Configuration("tracker lookup attempted before sign-in".to_string())
            })?;
            Self::auth_header(credentials)
        };

        debug!(ticket = %ticket, "fetching ticket summary");
        let response = self
            .http
            .get(self.issue_endpoint(ticket))
            .header(AUTHORIZATION, auth_header)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|err| {
                AppError::TrackerLookup(format!("failed to fetch {ticket}: {err}"))
            })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(TicketLookup::NotFound);
        }
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(AppError::TrackerAuth(format!(
                "tracker rejected the credentials while fetching {ticket}"
            )));
        }
        if !status.is_success() {
            return Err(AppError::TrackerLookup(format!(
                "tracker responded with {status} for {ticket}"
            )));
        }

        let payload: JiraIssueResponse = response.json().await.map_err(|err| {
            AppError::TrackerLookup(format!("failed to parse tracker response: {err}"))
        })?;

        let summary = payload
            .fields
            .and_then(|fields| fields.summary)
            .map(|summary| summary.trim().to_string())
            .unwrap_or_default();

        Ok(TicketLookup::Found(summary))
    }
}

#[derive(Deserialize)]
struct JiraIssueResponse {
    fields: Option<JiraIssueFields>,
}

#[derive(Deserialize)]
struct JiraIssueFields {
    summary: Option<String>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{header_exists, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::domain::ticket::TicketPattern;

    fn ticket(id: &str) -> TicketId {
        TicketPattern::new("GCW")
            .unwrap()
            .extract(id)
            .into_iter()
            .next()
            .unwrap()
    }

    fn credentials() -> Credentials {
        Credentials {
            username: "alice".to_string(),
            secret: "hunter2".to_string(),
        }
    }

    async fn authenticated_client(server: &MockServer) -> JiraClient {
        Mock::given(method("GET"))
            .and(path("/rest/api/2/myself"))
            .and(header_exists("authorization"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"name": "alice"})))
            .mount(server)
            .await;

        let client = JiraClient::new(server.uri());
        client.authenticate(credentials()).await.unwrap();
        client
    }

    #[tokio::test]
    async fn fetches_and_trims_the_summary() {
        let server = MockServer::start().await;
        let client = authenticated_client(&server).await;

        Mock::given(method("GET"))
            .and(path("/rest/api/2/issue/GCW-10"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "fields": { "summary": "  Fix login bug  " }
            })))
            .mount(&server)
            .await;

        let lookup = client.fetch_summary(&ticket("GCW-10")).await.unwrap();
        assert_eq!(lookup, TicketLookup::Found("Fix login bug".to_string()));
    }

    #[tokio::test]
    async fn missing_summary_field_becomes_empty() {
        let server = MockServer::start().await;
        let client = authenticated_client(&server).await;

        Mock::given(method("GET"))
            .and(path("/rest/api/2/issue/GCW-10"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"fields": {}})))
            .mount(&server)
            .await;

        let lookup = client.fetch_summary(&ticket("GCW-10")).await.unwrap();
        assert_eq!(lookup, TicketLookup::Found(String::new()));
    }

    #[tokio::test]
    async fn not_found_is_recovered_as_a_lookup_result() {
        let server = MockServer::start().await;
        let client = authenticated_client(&server).await;

        Mock::given(method("GET"))
            .and(path("/rest/api/2/issue/GCW-99"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let lookup = client.fetch_summary(&ticket("GCW-99")).await.unwrap();
        assert_eq!(lookup, TicketLookup::NotFound);
    }

    #[tokio::test]
    async fn server_error_is_fatal() {
        let server = MockServer::start().await;
        let client = authenticated_client(&server).await;

        Mock::given(method("GET"))
            .and(path("/rest/api/2/issue/GCW-10"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let error = client.fetch_summary(&ticket("GCW-10")).await.unwrap_err();
        assert!(matches!(error, AppError::TrackerLookup(_)));
    }

    #[tokio::test]
    async fn rejected_credentials_fail_authentication() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/rest/api/2/myself"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let client = JiraClient::new(server.uri());
        let error = client.authenticate(credentials()).await.unwrap_err();
        assert!(matches!(error, AppError::TrackerAuth(_)));
    }

    #[tokio::test]
    async fn lookup_before_sign_in_is_a_configuration_error() {
        let server = MockServer::start().await;
        let client = JiraClient::new(server.uri());
        let error = client.fetch_summary(&ticket("GCW-10")).await.unwrap_err();
        assert!(matches!(error, AppError::Configuration(_)));
    }
}
