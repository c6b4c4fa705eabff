//! Application error type.
//!
//! Every fallible operation returns `AppError`. The `ErrorKind` decides the
//! process exit code and whether `main` reports on stdout or stderr.

/// Broad failure category of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Wrong command-line arguments.
    Usage,
    /// No `domestic-*` folder matches the requested location.
    LocationNotFound,
    /// Source data missing, unreadable or malformed.
    Read,
    /// The data holds nothing to summarise.
    EmptyData,
    /// Chart rasterisation failed.
    Render,
    /// An output artifact could not be written.
    Write,
}

impl ErrorKind {
    pub fn exit_code(self) -> u8 {
        match self {
            ErrorKind::Usage | ErrorKind::LocationNotFound => 1,
            ErrorKind::Read => 2,
            ErrorKind::EmptyData | ErrorKind::Render => 3,
            ErrorKind::Write => 4,
        }
    }

    /// Usage and lookup failures are plain user feedback rather than faults.
    pub fn reports_to_stdout(self) -> bool {
        matches!(self, ErrorKind::Usage | ErrorKind::LocationNotFound)
    }
}

#[derive(Clone)]
pub struct AppError {
    kind: ErrorKind,
    message: String,
}

impl AppError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn usage(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Usage, message)
    }

    pub fn read(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Read, message)
    }

    pub fn render(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Render, message)
    }

    pub fn write(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Write, message)
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn exit_code(&self) -> u8 {
        self.kind.exit_code()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("kind", &self.kind)
            .field("exit_code", &self.exit_code())
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_follow_kind() {
        assert_eq!(AppError::usage("x").exit_code(), 1);
        assert_eq!(AppError::new(ErrorKind::LocationNotFound, "x").exit_code(), 1);
        assert_eq!(AppError::read("x").exit_code(), 2);
        assert_eq!(AppError::render("x").exit_code(), 3);
        assert_eq!(AppError::write("x").exit_code(), 4);
    }

    #[test]
    fn only_user_feedback_goes_to_stdout() {
        assert!(ErrorKind::Usage.reports_to_stdout());
        assert!(ErrorKind::LocationNotFound.reports_to_stdout());
        assert!(!ErrorKind::Read.reports_to_stdout());
        assert!(!ErrorKind::Write.reports_to_stdout());
    }
}
