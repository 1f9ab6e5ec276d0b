use thiserror::Error;

/// Result type alias using DispatchError
pub type Result<T> = std::result::Result<T, DispatchError>;

/// Stable classification of dispatch errors
///
/// Every `DispatchError` variant maps to exactly one kind. Callers that do
/// not care about the precise argument defect can branch on the kind (or its
/// stable code string) instead of matching every variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The command name has no registered handler
    NotFound,
    /// A handler rejected its arguments (missing, non-numeric, negative)
    InvalidArgument,
}

impl ErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::NotFound => "ERR_NOT_FOUND",
            ErrorKind::InvalidArgument => "ERR_INVALID_ARGUMENT",
        }
    }
}

/// Errors surfaced by `CommandCenter::execute`
///
/// `CommandNotFound` is raised by the dispatcher itself on a registry lookup
/// miss. The remaining variants are handler-level rejections: argument
/// parsing and validation are the handler's responsibility, and a handler
/// failure is always recorded in history before it propagates.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    /// Command name is not bound in the registry
    #[error("Command not found: {name}")]
    CommandNotFound { name: String },

    /// Handler required an argument that was not supplied
    #[error("Command {command} is missing a required amount argument")]
    MissingArgument { command: String },

    /// Argument could not be parsed as a number in the accepted range
    #[error("Command {command} got a non-numeric argument: {value:?}")]
    NonNumericArgument { command: String, value: String },

    /// Amount arguments must be non-negative
    #[error("Command {command} got a negative amount: {value}")]
    NegativeAmount { command: String, value: i64 },
}

impl DispatchError {
    /// Classify this error into the stable kind taxonomy
    pub fn kind(&self) -> ErrorKind {
        match self {
            DispatchError::CommandNotFound { .. } => ErrorKind::NotFound,
            DispatchError::MissingArgument { .. }
            | DispatchError::NonNumericArgument { .. }
            | DispatchError::NegativeAmount { .. } => ErrorKind::InvalidArgument,
        }
    }

    /// True if this error came out of a handler rather than the lookup
    pub fn is_handler_failure(&self) -> bool {
        self.kind() == ErrorKind::InvalidArgument
    }
}
