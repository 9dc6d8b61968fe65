use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use uuid::Uuid;

use crate::books::domain::model::BookRecord;
use crate::books::dto::BookDraft;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;

// MemoryBookRepository keeps the collection in process and assigns ids the way a
// remote store would. It can be switched offline to simulate an unreachable store.
#[derive(Debug, Default)]
pub struct MemoryBookRepository {
    books: Mutex<Vec<BookRecord>>,
    offline: AtomicBool,
}

impl MemoryBookRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_books(books: Vec<BookRecord>) -> Self {
        Self {
            books: Mutex::new(books),
            offline: AtomicBool::new(false),
        }
    }

    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    fn guard(&self) -> LibraryResult<MutexGuard<'_, Vec<BookRecord>>> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(LibraryError::network("memory store is offline", true));
        }
        self.books.lock().map_err(|err| LibraryError::runtime(
            format!("memory store lock poisoned {}", err).as_str(), None))
    }
}

#[async_trait]
impl Repository<BookRecord, BookDraft> for MemoryBookRepository {
    async fn list(&self) -> LibraryResult<Vec<BookRecord>> {
        Ok(self.guard()?.clone())
    }

    async fn create(&self, draft: &BookDraft) -> LibraryResult<BookRecord> {
        let book = draft.clone().into_record(Uuid::new_v4().to_string().as_str());
        self.guard()?.push(book.clone());
        Ok(book)
    }

    async fn update(&self, id: &str, draft: &BookDraft) -> LibraryResult<BookRecord> {
        let mut books = self.guard()?;
        let existing = books.iter_mut().find(|b| b.id == id)
            .ok_or_else(|| LibraryError::not_found(format!("book {} not found", id).as_str()))?;
        *existing = draft.clone().into_record(id);
        Ok(existing.clone())
    }

    async fn delete(&self, id: &str) -> LibraryResult<()> {
        let mut books = self.guard()?;
        let before = books.len();
        books.retain(|b| b.id != id);
        if books.len() == before {
            return Err(LibraryError::not_found(format!("book {} not found", id).as_str()));
        }
        Ok(())
    }
}
