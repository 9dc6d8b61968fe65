use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::domain::model::BookRecord;
use crate::catalog::domain::CatalogService;
use crate::catalog::state::CatalogState;
use crate::catalog::validation::{validate_draft, BookForm};
use crate::core::command::{Command, CommandError};

// UpdateBookCommand submits the edit form for the record currently selected for editing.
pub struct UpdateBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl UpdateBookCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateBookCommandRequest {
    pub form: BookForm,
}

impl UpdateBookCommandRequest {
    pub fn new(form: BookForm) -> Self {
        Self {
            form,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UpdateBookCommandResponse {
    pub book: BookRecord,
}

#[async_trait]
impl Command<UpdateBookCommandRequest, UpdateBookCommandResponse> for UpdateBookCommand {
    async fn execute(&self, state: &mut CatalogState, req: UpdateBookCommandRequest) -> Result<UpdateBookCommandResponse, CommandError> {
        let book_id = match state.editing.as_ref() {
            Some(book) => book.id.to_string(),
            None => return Err(CommandError::NotFound { message: "no book selected for editing".to_string() }),
        };
        let draft = validate_draft(&req.form)?;
        self.catalog_service.update_book(state, book_id.as_str(), &draft).await
            .map_err(CommandError::from).map(|book| UpdateBookCommandResponse { book })
    }
}
