use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::domain::model::BookRecord;
use crate::catalog::domain::CatalogService;
use crate::catalog::state::CatalogState;
use crate::catalog::validation::{validate_draft, BookForm};
use crate::core::command::{Command, CommandError};

pub struct AddBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl AddBookCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AddBookCommandRequest {
    pub form: BookForm,
}

impl AddBookCommandRequest {
    pub fn new(form: BookForm) -> Self {
        Self {
            form,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AddBookCommandResponse {
    pub book: BookRecord,
}

#[async_trait]
impl Command<AddBookCommandRequest, AddBookCommandResponse> for AddBookCommand {
    async fn execute(&self, state: &mut CatalogState, req: AddBookCommandRequest) -> Result<AddBookCommandResponse, CommandError> {
        let draft = validate_draft(&req.form)?;
        self.catalog_service.add_book(state, &draft).await
            .map_err(CommandError::from).map(|book| AddBookCommandResponse { book })
    }
}
