use async_trait::async_trait;
use tracing::{info, warn};
use crate::books::domain::model::BookRecord;
use crate::books::dto::BookDraft;
use crate::books::repository::BookRepository;
use crate::catalog::domain::{CatalogService, ADD_FAILED, DELETE_FAILED, LOAD_FAILED, TOGGLE_FAILED, UPDATE_FAILED};
use crate::catalog::state::{CatalogAction, CatalogState};
use crate::catalog::view::clamp_page;
use crate::core::library::LibraryResult;

pub struct CatalogServiceImpl {
    book_repository: Box<dyn BookRepository>,
}

impl CatalogServiceImpl {
    pub fn new(book_repository: Box<dyn BookRepository>) -> Self {
        Self {
            book_repository,
        }
    }
}

fn begin(state: &mut CatalogState) {
    state.apply(CatalogAction::SetLoading(true));
    state.apply(CatalogAction::SetError(None));
}

// Settles a remote outcome: success transitions run only on Ok, the banner
// only on Err, and loading is cleared either way.
fn settle<T, F>(state: &mut CatalogState, res: LibraryResult<T>, failure: &str, on_success: F) -> LibraryResult<T>
    where F: FnOnce(&mut CatalogState, &T) {
    match &res {
        Ok(value) => on_success(state, value),
        Err(err) => {
            warn!("{} {}", failure, err);
            state.apply(CatalogAction::SetError(Some(failure.to_string())));
        }
    }
    state.apply(CatalogAction::SetLoading(false));
    res
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn load_books(&self, state: &mut CatalogState) -> LibraryResult<usize> {
        begin(state);
        let res = self.book_repository.list().await;
        settle(state, res, LOAD_FAILED, |state, books| {
            info!("loaded {} books", books.len());
            state.apply(CatalogAction::SetBooks(books.clone()));
        }).map(|books| books.len())
    }

    async fn add_book(&self, state: &mut CatalogState, draft: &BookDraft) -> LibraryResult<BookRecord> {
        begin(state);
        let res = self.book_repository.create(draft).await;
        settle(state, res, ADD_FAILED, |state, book| {
            info!("added book {}", book.id);
            state.apply(CatalogAction::AddBookSuccess(book.clone()));
        })
    }

    async fn update_book(&self, state: &mut CatalogState, id: &str, draft: &BookDraft) -> LibraryResult<BookRecord> {
        begin(state);
        let res = self.book_repository.update(id, draft).await;
        settle(state, res, UPDATE_FAILED, |state, book| {
            info!("updated book {}", book.id);
            state.apply(CatalogAction::UpdateBookSuccess(book.clone()));
            state.apply(CatalogAction::CancelEditing);
        })
    }

    async fn toggle_status(&self, state: &mut CatalogState, book: &BookRecord) -> LibraryResult<BookRecord> {
        let mut draft = BookDraft::from(book);
        draft.status = book.status.toggled();
        begin(state);
        let res = self.book_repository.update(book.id.as_str(), &draft).await;
        settle(state, res, TOGGLE_FAILED, |state, updated| {
            info!("book {} is now {}", updated.id, updated.status);
            state.apply(CatalogAction::UpdateBookSuccess(updated.clone()));
        })
    }

    async fn remove_book(&self, state: &mut CatalogState, id: &str) -> LibraryResult<()> {
        begin(state);
        let res = self.book_repository.delete(id).await;
        settle(state, res, DELETE_FAILED, |state, _| {
            info!("removed book {}", id);
            state.apply(CatalogAction::DeleteBookSuccess(id.to_string()));
            if state.editing.as_ref().is_some_and(|b| b.id == id) {
                state.apply(CatalogAction::CancelEditing);
            }
            // a shrinking result set must not leave the page past the end
            let page = clamp_page(state);
            state.apply(CatalogAction::SetCurrentPage(page));
        })
    }
}
