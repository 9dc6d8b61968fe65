use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::catalog::state::CatalogState;
use crate::core::command::{Command, CommandError};

pub const DELETE_PROMPT: &str = "Are you sure you want to delete this book?";

pub struct RemoveBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl RemoveBookCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

// Deletion only reaches the store once the user has confirmed it.
#[derive(Debug, Deserialize)]
pub struct RemoveBookCommandRequest {
    pub book_id: String,
    pub confirmed: bool,
}

impl RemoveBookCommandRequest {
    pub fn new(book_id: &str, confirmed: bool) -> Self {
        Self {
            book_id: book_id.to_string(),
            confirmed,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RemoveBookCommandResponse {
    pub book_id: String,
}

#[async_trait]
impl Command<RemoveBookCommandRequest, RemoveBookCommandResponse> for RemoveBookCommand {
    async fn execute(&self, state: &mut CatalogState, req: RemoveBookCommandRequest) -> Result<RemoveBookCommandResponse, CommandError> {
        if !req.confirmed {
            return Err(CommandError::NotConfirmed { message: format!("deletion of book {} was not confirmed", req.book_id) });
        }
        self.catalog_service.remove_book(state, req.book_id.as_str()).await
            .map_err(CommandError::from).map(|_| RemoveBookCommandResponse { book_id: req.book_id })
    }
}
