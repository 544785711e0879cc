use thiserror::Error;

/// Failures that end the run.
#[derive(Error, Debug)]
pub enum CitadelError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("standard input closed before all answers were given")]
    InputClosed,
}

/// Rejected answers. The messages are shown to the user before re-prompting.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Please enter a valid number.")]
    NotANumber(String),
    #[error("Please enter a valid number (1, 2, or 3).")]
    StyleNotANumber(String),
    #[error("Invalid option. Please choose 1, 2, or 3.")]
    UnknownStyle(i64),
    #[error("Password must be at least {min} characters long.")]
    TooShort { min: i64, got: i64 },
}
