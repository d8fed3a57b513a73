use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("source control error: {0}")]
    SourceControl(String),
    #[error("tracker authentication error: {0}")]
    TrackerAuth(String),
    #[error("tracker lookup error: {0}")]
    TrackerLookup(String),
    #[error("render error: {0}")]
    Render(String),
    #[error("mail configuration error: {0}")]
    MailConfig(String),
    #[error("mail send error: {0}")]
    MailSend(String),
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type AppResult<T> = Result<T, AppError>;
