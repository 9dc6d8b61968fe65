use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::domain::model::BookRecord;
use crate::catalog::domain::CatalogService;
use crate::catalog::state::CatalogState;
use crate::core::command::{Command, CommandError};

// ToggleStatusCommand borrows an available book or returns a borrowed one.
pub struct ToggleStatusCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl ToggleStatusCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ToggleStatusCommandRequest {
    pub book_id: String,
}

impl ToggleStatusCommandRequest {
    pub fn new(book_id: &str) -> Self {
        Self {
            book_id: book_id.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ToggleStatusCommandResponse {
    pub book: BookRecord,
}

#[async_trait]
impl Command<ToggleStatusCommandRequest, ToggleStatusCommandResponse> for ToggleStatusCommand {
    async fn execute(&self, state: &mut CatalogState, req: ToggleStatusCommandRequest) -> Result<ToggleStatusCommandResponse, CommandError> {
        let book = state.find_book(req.book_id.as_str()).cloned()
            .ok_or_else(|| CommandError::NotFound { message: format!("book {} not found", req.book_id) })?;
        self.catalog_service.toggle_status(state, &book).await
            .map_err(CommandError::from).map(|book| ToggleStatusCommandResponse { book })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use crate::books::domain::model::BookRecord;
    use crate::books::repository::memory_book_repository::MemoryBookRepository;
    use crate::catalog::command::toggle_status_cmd::{ToggleStatusCommand, ToggleStatusCommandRequest};
    use crate::catalog::domain::service::CatalogServiceImpl;
    use crate::catalog::state::{CatalogAction, CatalogState};
    use crate::core::command::{Command, CommandError};
    use crate::core::library::BookStatus;

    #[tokio::test]
    async fn test_should_run_toggle_status() {
        let book = BookRecord::new("1", "Dune", "Herbert", "9780441013593", "Fiction", BookStatus::Borrowed);
        let repo = MemoryBookRepository::with_books(vec![book.clone()]);
        let cmd = ToggleStatusCommand::new(Arc::new(CatalogServiceImpl::new(Box::new(repo))));
        let mut state = CatalogState::default().reduce(CatalogAction::SetBooks(vec![book]));

        let res = cmd.execute(&mut state, ToggleStatusCommandRequest::new("1")).await.expect("should return book");
        assert_eq!(BookStatus::Available, res.book.status);
        assert_eq!(BookStatus::Available, state.books[0].status);
    }

    #[tokio::test]
    async fn test_should_reject_unknown_book() {
        let cmd = ToggleStatusCommand::new(Arc::new(CatalogServiceImpl::new(Box::new(MemoryBookRepository::new()))));
        let mut state = CatalogState::default();
        let err = cmd.execute(&mut state, ToggleStatusCommandRequest::new("9")).await.expect_err("should fail");
        assert!(matches!(err, CommandError::NotFound { .. }));
    }
}
