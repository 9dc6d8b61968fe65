use std::env;
use serde::{Deserialize, Serialize};
use crate::core::library::{LibraryError, LibraryResult};

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000/booksdata";
pub const DEFAULT_BOOKS_PER_PAGE: usize = 5;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_LOG_LEVEL: &str = "warn";

pub const ENV_API_URL: &str = "INVENTORY_API_URL";
pub const ENV_PAGE_SIZE: &str = "INVENTORY_PAGE_SIZE";
pub const ENV_TIMEOUT_SECS: &str = "INVENTORY_TIMEOUT_SECS";
pub const ENV_LOG: &str = "INVENTORY_LOG";

// Configuration abstracts config options for the inventory client
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub base_url: String,
    pub books_per_page: usize,
    pub request_timeout_secs: u64,
    pub log_level: String,
}

impl Configuration {
    pub fn new(base_url: &str) -> Self {
        Configuration {
            base_url: base_url.trim_end_matches('/').to_string(),
            books_per_page: DEFAULT_BOOKS_PER_PAGE,
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }

    // Builds configuration from INVENTORY_* environment variables on top of the defaults.
    pub fn from_env() -> LibraryResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> LibraryResult<Self>
        where F: Fn(&str) -> Option<String> {
        let mut config = Configuration::new(
            lookup(ENV_API_URL).as_deref().unwrap_or(DEFAULT_BASE_URL));
        if let Some(size) = lookup(ENV_PAGE_SIZE) {
            config = config.with_books_per_page(parse_positive(ENV_PAGE_SIZE, &size)?);
        }
        if let Some(secs) = lookup(ENV_TIMEOUT_SECS) {
            config.request_timeout_secs = parse_positive(ENV_TIMEOUT_SECS, &secs)? as u64;
        }
        if let Some(level) = lookup(ENV_LOG) {
            config.log_level = level;
        }
        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_books_per_page(mut self, books_per_page: usize) -> Self {
        self.books_per_page = books_per_page.max(1);
        self
    }
}

fn parse_positive(key: &str, value: &str) -> LibraryResult<usize> {
    match value.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(LibraryError::configuration(
            format!("{} must be a positive integer, got {:?}", key, value).as_str())),
    }
}
