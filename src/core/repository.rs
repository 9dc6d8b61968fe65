use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::library::LibraryResult;

#[async_trait]
pub trait Repository<Entity, Draft>: Sync + Send {
    // list every entity in arrival order
    async fn list(&self) -> LibraryResult<Vec<Entity>>;

    // create an entity, the store assigns its id
    async fn create(&self, draft: &Draft) -> LibraryResult<Entity>;

    // updates an entity and returns the stored version
    async fn update(&self, id: &str, draft: &Draft) -> LibraryResult<Entity>;

    // delete an entity
    async fn delete(&self, id: &str) -> LibraryResult<()>;
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub enum RepositoryStore {
    Remote,
    InMemory,
}

// Store names accepted on the command line.
pub const STORE_NAMES: [&str; 2] = ["remote", "memory"];

impl From<String> for RepositoryStore {
    fn from(s: String) -> Self {
        match s.as_str() {
            "memory" | "InMemory" => RepositoryStore::InMemory,
            _ => RepositoryStore::Remote,
        }
    }
}
