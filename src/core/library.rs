use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

#[derive(Debug)]
pub enum LibraryError {
    // The remote store answered with a non-success status.
    Remote {
        message: String,
        status: u16,
        retryable: bool,
    },
    // The round trip itself failed (connect, timeout, broken body).
    Network {
        message: String,
        retryable: bool,
    },
    NotFound {
        message: String,
    },
    Serialization {
        message: String,
    },
    Configuration {
        message: String,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
}

impl LibraryError {
    pub fn remote(message: &str, status: u16) -> LibraryError {
        LibraryError::Remote { message: message.to_string(), status, retryable: status >= 500 || status == 429 }
    }

    pub fn network(message: &str, retryable: bool) -> LibraryError {
        LibraryError::Network { message: message.to_string(), retryable }
    }

    pub fn not_found(message: &str) -> LibraryError {
        LibraryError::NotFound { message: message.to_string() }
    }

    // Maps an http status into the closest error kind.
    pub fn from_status(message: &str, status: u16) -> LibraryError {
        if status == 404 {
            LibraryError::not_found(
                format!("not found error {:?} {}", message, status).as_str())
        } else {
            LibraryError::remote(
                format!("remote store error {:?} {}", message, status).as_str(), status)
        }
    }

    pub fn serialization(message: &str) -> LibraryError {
        LibraryError::Serialization { message: message.to_string() }
    }

    pub fn configuration(message: &str) -> LibraryError {
        LibraryError::Configuration { message: message.to_string() }
    }

    pub fn runtime(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Runtime { message: message.to_string(), reason_code }
    }

    // Status code of the failed round trip, if the server produced one.
    pub fn status(&self) -> Option<u16> {
        match self {
            LibraryError::Remote { status, .. } => Some(*status),
            LibraryError::NotFound { .. } => Some(404),
            _ => None,
        }
    }

    pub fn retryable(&self) -> bool {
        match self {
            LibraryError::Remote { retryable, .. } => { *retryable }
            LibraryError::Network { retryable, .. } => { *retryable }
            LibraryError::NotFound { .. } => { false }
            LibraryError::Serialization { .. } => { false }
            LibraryError::Configuration { .. } => { false }
            LibraryError::Runtime { .. } => { false }
        }
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        LibraryError::serialization(
            format!("serde json parsing {:?}", err).as_str())
    }
}

impl From<reqwest::Error> for LibraryError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            LibraryError::from_status(format!("{}", err).as_str(), status.as_u16())
        } else if err.is_decode() {
            LibraryError::serialization(
                format!("response decoding {}", err).as_str())
        } else {
            LibraryError::network(
                format!("request failed {}", err).as_str(), err.is_timeout() || err.is_connect())
        }
    }
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::Remote { message, status, retryable } => {
                write!(f, "{} {} {}", message, status, retryable)
            }
            LibraryError::Network { message, retryable } => {
                write!(f, "{} {}", message, retryable)
            }
            LibraryError::NotFound { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Serialization { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Configuration { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Runtime { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
        }
    }
}

impl std::error::Error for LibraryError {}

/// A specialized Result type for the remote store and catalog services.
pub type LibraryResult<T> = Result<T, LibraryError>;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Default, Serialize, Deserialize)]
pub enum BookStatus {
    #[default]
    Available,
    Borrowed,
}

impl BookStatus {
    // Borrow flips to Borrowed, return flips back.
    pub fn toggled(&self) -> BookStatus {
        match self {
            BookStatus::Available => BookStatus::Borrowed,
            BookStatus::Borrowed => BookStatus::Available,
        }
    }
}

impl From<String> for BookStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Borrowed" => BookStatus::Borrowed,
            _ => BookStatus::Available,
        }
    }
}

impl Display for BookStatus {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            BookStatus::Available => write!(f, "Available"),
            BookStatus::Borrowed => write!(f, "Borrowed"),
        }
    }
}

// Genre filter value that disables genre filtering.
pub const ALL_GENRES: &str = "All";

// Genres offered by the catalog. Records may still carry any other genre.
pub const GENRES: [&str; 5] = ["Fiction", "Tech", "History", "Science", "Other"];

pub fn is_known_genre(genre: &str) -> bool {
    GENRES.contains(&genre)
}

#[cfg(test)]
mod tests {
    use crate::core::library::{is_known_genre, BookStatus, LibraryError};

    #[tokio::test]
    async fn test_should_create_remote_error() {
        assert!(matches!(LibraryError::remote("test", 500), LibraryError::Remote{ message: _, status: 500, retryable: true }));
        assert!(matches!(LibraryError::remote("test", 400), LibraryError::Remote{ message: _, status: 400, retryable: false }));
    }

    #[tokio::test]
    async fn test_should_create_network_error() {
        assert!(matches!(LibraryError::network("test", true), LibraryError::Network{ message: _, retryable: true }));
    }

    #[tokio::test]
    async fn test_should_create_not_found_error() {
        assert!(matches!(LibraryError::not_found("test"), LibraryError::NotFound{ message: _ }));
    }

    #[tokio::test]
    async fn test_should_create_serialization_error() {
        assert!(matches!(LibraryError::serialization("test"), LibraryError::Serialization{ message: _ }));
    }

    #[tokio::test]
    async fn test_should_create_configuration_error() {
        assert!(matches!(LibraryError::configuration("test"), LibraryError::Configuration{ message: _ }));
    }

    #[tokio::test]
    async fn test_should_create_runtime_error() {
        assert!(matches!(LibraryError::runtime("test", None), LibraryError::Runtime{ message: _, reason_code: _ }));
    }

    #[tokio::test]
    async fn test_should_map_status_error() {
        assert!(matches!(LibraryError::from_status("test", 404), LibraryError::NotFound{ message: _ }));
        assert!(matches!(LibraryError::from_status("test", 503), LibraryError::Remote{ message: _, status: 503, retryable: true }));
        assert_eq!(Some(404), LibraryError::from_status("test", 404).status());
        assert_eq!(Some(422), LibraryError::from_status("test", 422).status());
        assert_eq!(None, LibraryError::network("test", false).status());
    }

    #[tokio::test]
    async fn test_should_create_retryable_error() {
        assert_eq!(false, LibraryError::remote("test", 400).retryable());
        assert_eq!(true, LibraryError::remote("test", 429).retryable());
        assert_eq!(true, LibraryError::network("test", true).retryable());
        assert_eq!(false, LibraryError::not_found("test").retryable());
        assert_eq!(false, LibraryError::serialization("test").retryable());
        assert_eq!(false, LibraryError::configuration("test").retryable());
        assert_eq!(false, LibraryError::runtime("test", None).retryable());
    }

    #[tokio::test]
    async fn test_should_format_book_status() {
        let statuses = vec![
            BookStatus::Available,
            BookStatus::Borrowed,
        ];
        for status in statuses {
            let str = status.to_string();
            let str_status = BookStatus::from(str);
            assert_eq!(status, str_status);
        }
    }

    #[tokio::test]
    async fn test_should_read_unknown_status_as_available() {
        assert_eq!(BookStatus::Available, BookStatus::from("Lost".to_string()));
        assert_eq!(BookStatus::Available, BookStatus::from("".to_string()));
    }

    #[tokio::test]
    async fn test_should_know_offered_genres() {
        assert!(is_known_genre("Tech"));
        assert!(is_known_genre("Other"));
        assert!(!is_known_genre("tech"));
        assert!(!is_known_genre("Poetry"));
    }

    #[tokio::test]
    async fn test_should_toggle_book_status() {
        assert_eq!(BookStatus::Borrowed, BookStatus::Available.toggled());
        assert_eq!(BookStatus::Available, BookStatus::Borrowed.toggled());
        assert_eq!(BookStatus::Available, BookStatus::default());
    }
}
