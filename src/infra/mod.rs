pub mod clipboard;
pub mod console;
pub mod git;
pub mod jira;
pub mod pdf;
pub mod sendgrid;
pub mod terminal;
