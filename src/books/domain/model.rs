use serde::{Deserialize, Serialize};
use serde_json::Value;
use crate::books::domain::Book;
use crate::core::library::BookStatus;
use crate::utils::id::canonical_id;

// BookRecord is one catalog item as confirmed by the remote store. The id is
// always assigned by the store, never by this client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BookWire")]
pub struct BookRecord {
    pub id: String,
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub genre: String,
    pub status: BookStatus,
}

// Shape of a record as the store sends it. Any field may be missing or null,
// the id may come as "id", "_id" or both, and status may be any string.
#[derive(Debug, Deserialize)]
struct BookWire {
    id: Option<Value>,
    #[serde(rename = "_id")]
    alt_id: Option<Value>,
    title: Option<String>,
    author: Option<String>,
    isbn: Option<String>,
    genre: Option<String>,
    status: Option<String>,
}

impl TryFrom<BookWire> for BookRecord {
    type Error = String;

    fn try_from(wire: BookWire) -> Result<Self, Self::Error> {
        let id = canonical_id(wire.id.as_ref(), wire.alt_id.as_ref())
            .ok_or_else(|| format!("unsupported id {:?} / {:?}", wire.id, wire.alt_id))?;
        Ok(Self {
            id,
            title: wire.title.unwrap_or_default(),
            author: wire.author.unwrap_or_default(),
            isbn: wire.isbn.unwrap_or_default(),
            genre: wire.genre.unwrap_or_default(),
            status: wire.status.map(BookStatus::from).unwrap_or_default(),
        })
    }
}

impl BookRecord {
    pub fn new(id: &str, title: &str, author: &str, isbn: &str, genre: &str, status: BookStatus) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            author: author.to_string(),
            isbn: isbn.to_string(),
            genre: genre.to_string(),
            status,
        }
    }

    // Case-insensitive match of an already lowercased term against title or author.
    pub(crate) fn matches_term(&self, lower_term: &str) -> bool {
        self.title.to_lowercase().contains(lower_term) || self.author.to_lowercase().contains(lower_term)
    }
}

impl Book for BookRecord {
    fn status(&self) -> BookStatus {
        self.status
    }
}
