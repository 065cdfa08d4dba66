use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    /// Error during file or directory operations
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    /// Error when reading user input fails
    #[error("inquire error: {0}")]
    Inquire(#[from] inquire::InquireError),
    /// Error when the OS does not report a home directory
    #[error("failed to find the home directory")]
    HomeDirNotFound,
    /// Error when the current user name cannot be determined
    #[error("failed to determine the current user")]
    UserNotFound,
    /// Error during input validation
    #[error("validation error: {0}")]
    Validation(String),
}
