pub mod service;

use async_trait::async_trait;
use crate::books::domain::model::BookRecord;
use crate::books::dto::BookDraft;
use crate::catalog::state::CatalogState;
use crate::core::library::LibraryResult;

pub const LOAD_FAILED: &str = "Failed to load books. Please try again.";
pub const ADD_FAILED: &str = "Failed to add book. Please try again.";
pub const UPDATE_FAILED: &str = "Failed to update book. Please try again.";
pub const DELETE_FAILED: &str = "Failed to delete book. Please try again.";
pub const TOGGLE_FAILED: &str = "Failed to change status. Please try again.";

// CatalogService sequences remote store calls with state transitions. Every
// call sets loading and clears the error first, applies the matching
// transition only after the store confirms, records a banner message on
// failure, and always clears loading.
#[async_trait]
pub trait CatalogService: Sync + Send {
    async fn load_books(&self, state: &mut CatalogState) -> LibraryResult<usize>;
    async fn add_book(&self, state: &mut CatalogState, draft: &BookDraft) -> LibraryResult<BookRecord>;
    async fn update_book(&self, state: &mut CatalogState, id: &str, draft: &BookDraft) -> LibraryResult<BookRecord>;
    async fn toggle_status(&self, state: &mut CatalogState, book: &BookRecord) -> LibraryResult<BookRecord>;
    async fn remove_book(&self, state: &mut CatalogState, id: &str) -> LibraryResult<()>;
}
