use crate::domain::ticket::ResolvedTicket;

/// The assembled release notes. Built once per run, immutable afterwards;
/// every sink reads the same rendered body.
#[derive(Debug, Clone)]
pub struct Report {
    pub repo_name: String,
    pub version: String,
    pub remote_url: String,
    pub generated_at: String,
    pub tickets: Vec<ResolvedTicket>,
    markdown: String,
}

impl Report {
    pub fn assemble(
        repo_name: &str,
        version: &str,
        remote_url: &str,
        tracker_host: &str,
        generated_at: &str,
        tickets: Vec<ResolvedTicket>,
    ) -> Self {
        let mut body = format!(
            "# Release notes {repo_name} v{version}\n\
             \n\
             **Generated on:** {generated_at}\n\
             \n\
             **Repository:** `{remote_url}`\n\
             \n\
             ## Tickets affected by this release\n"
        );
        if !tickets.is_empty() {
            body.push('\n');
            for ticket in &tickets {
                body.push_str(&format!(
                    "- [{id}](https://{tracker_host}/browse/{id}) {summary}\n",
                    id = ticket.id,
                    summary = ticket.summary,
                ));
            }
        }

        Self {
            repo_name: repo_name.to_string(),
            version: version.to_string(),
            remote_url: remote_url.to_string(),
            generated_at: generated_at.to_string(),
            tickets,
            markdown: body,
        }
    }

    pub fn markdown(&self) -> &str {
        &self.markdown
    }
}
