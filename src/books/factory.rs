use std::time::Duration;
use crate::books::repository::BookRepository;
use crate::books::repository::http_book_repository::HttpBookRepository;
use crate::books::repository::memory_book_repository::MemoryBookRepository;
use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;
use crate::core::repository::RepositoryStore;

pub fn create_book_repository(config: &Configuration, store: RepositoryStore) -> LibraryResult<Box<dyn BookRepository>> {
    match store {
        RepositoryStore::Remote => {
            let timeout = Duration::from_secs(config.request_timeout_secs);
            Ok(Box::new(HttpBookRepository::new(config.base_url.as_str(), timeout)?))
        }
        RepositoryStore::InMemory => {
            Ok(Box::new(MemoryBookRepository::new()))
        }
    }
}
