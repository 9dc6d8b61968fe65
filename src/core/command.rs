use async_trait::async_trait;
use crate::catalog::state::CatalogState;
use crate::catalog::validation::ValidationErrors;
use crate::core::library::LibraryError;

#[derive(Debug)]
pub enum CommandError {
    // Field-level failures; the request never reached the remote store.
    Validation {
        errors: ValidationErrors,
    },
    // A destructive command ran without the user's confirmation.
    NotConfirmed {
        message: String,
    },
    NotFound {
        message: String,
    },
    Remote {
        message: String,
        status: Option<u16>,
        retryable: bool,
    },
    Serialization {
        message: String,
    },
    Other {
        message: String,
        reason_code: Option<String>,
    },
}

// Commands run against a caller-owned catalog state.
#[async_trait]
pub trait Command<Request, Response> {
    async fn execute(&self, state: &mut CatalogState, req: Request) -> Result<Response, CommandError>;
}

impl From<LibraryError> for CommandError {
    fn from(other: LibraryError) -> Self {
        let status = other.status();
        let retryable = other.retryable();
        match other {
            LibraryError::Remote { message, .. } => {
                CommandError::Remote { message, status, retryable }
            }
            LibraryError::Network { message, .. } => {
                CommandError::Remote { message, status, retryable }
            }
            LibraryError::NotFound { message } => {
                CommandError::NotFound { message }
            }
            LibraryError::Serialization { message } => {
                CommandError::Serialization { message }
            }
            LibraryError::Configuration { message } => {
                CommandError::Other { message, reason_code: None }
            }
            LibraryError::Runtime { message, reason_code } => {
                CommandError::Other { message, reason_code }
            }
        }
    }
}

impl From<ValidationErrors> for CommandError {
    fn from(errors: ValidationErrors) -> Self {
        CommandError::Validation { errors }
    }
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandError::Validation { errors } => write!(f, "{}", errors),
            CommandError::NotConfirmed { message } => write!(f, "{}", message),
            CommandError::NotFound { message } => write!(f, "{}", message),
            CommandError::Remote { message, status, .. } => write!(f, "{} {:?}", message, status),
            CommandError::Serialization { message } => write!(f, "{}", message),
            CommandError::Other { message, reason_code } => write!(f, "{} {:?}", message, reason_code),
        }
    }
}

impl std::error::Error for CommandError {}
