use std::fmt;

/// Errors returned by CLI commands. Details are reported to the user through
/// `ui` before the error is returned.
#[derive(Debug, Clone, PartialEq)]
pub enum CliError {
    FileError,
    ParseError,
    InputError,
    PromptError,
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileError => write!(f, "Could not read the events file"),
            CliError::ParseError => write!(f, "Could not parse the events file"),
            CliError::InputError => write!(f, "Invalid input"),
            CliError::PromptError => write!(f, "Interactive prompt failed"),
        }
    }
}

impl std::error::Error for CliError {}
