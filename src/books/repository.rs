pub mod http_book_repository;
pub mod memory_book_repository;

use crate::books::domain::model::BookRecord;
use crate::books::dto::BookDraft;
use crate::core::repository::Repository;

// BookRepository is the remote store client for the book collection
pub trait BookRepository: Repository<BookRecord, BookDraft> {}

impl<T: Repository<BookRecord, BookDraft>> BookRepository for T {}
