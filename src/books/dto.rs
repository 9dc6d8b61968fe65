use serde::{Deserialize, Serialize};
use crate::books::domain::model::BookRecord;
use crate::core::library::BookStatus;

// BookDraft is the validated payload sent to the remote store on create and update
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookDraft {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub genre: String,
    pub status: BookStatus,
}

impl BookDraft {
    pub fn new(title: &str, author: &str, isbn: &str, genre: &str, status: BookStatus) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            isbn: isbn.to_string(),
            genre: genre.to_string(),
            status,
        }
    }

    // Stamps a store-assigned id onto the draft.
    pub fn into_record(self, id: &str) -> BookRecord {
        BookRecord {
            id: id.to_string(),
            title: self.title,
            author: self.author,
            isbn: self.isbn,
            genre: self.genre,
            status: self.status,
        }
    }
}

impl From<&BookRecord> for BookDraft {
    fn from(other: &BookRecord) -> Self {
        Self {
            title: other.title.to_string(),
            author: other.author.to_string(),
            isbn: other.isbn.to_string(),
            genre: other.genre.to_string(),
            status: other.status,
        }
    }
}
