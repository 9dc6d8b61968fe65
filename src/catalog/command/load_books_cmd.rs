use std::sync::Arc;
use async_trait::async_trait;
use serde::Serialize;
use crate::catalog::domain::CatalogService;
use crate::catalog::state::CatalogState;
use crate::core::command::{Command, CommandError};

// LoadBooksCommand performs the startup fetch that populates the catalog.
pub struct LoadBooksCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl LoadBooksCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Default)]
pub struct LoadBooksCommandRequest {}

#[derive(Debug, Serialize)]
pub struct LoadBooksCommandResponse {
    pub count: usize,
}

#[async_trait]
impl Command<LoadBooksCommandRequest, LoadBooksCommandResponse> for LoadBooksCommand {
    async fn execute(&self, state: &mut CatalogState, _req: LoadBooksCommandRequest) -> Result<LoadBooksCommandResponse, CommandError> {
        self.catalog_service.load_books(state).await
            .map_err(CommandError::from).map(|count| LoadBooksCommandResponse { count })
    }
}
