pub mod issue_tracker;
pub mod prompt;
pub mod report_sink;
pub mod version_control;

pub use issue_tracker::{Credentials, IssueTrackerService, TicketLookup};
pub use prompt::PromptService;
pub use report_sink::ReportSink;
pub use version_control::VersionControlService;
