use std::collections::BTreeMap;
use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};
use crate::books::domain::model::BookRecord;
use crate::books::dto::BookDraft;
use crate::core::library::BookStatus;

pub const TITLE_MIN_LEN: usize = 3;
pub const ISBN_DIGITS: usize = 13;

pub const TITLE_ERROR: &str = "Title should be at least 3 characters.";
pub const AUTHOR_ERROR: &str = "Author is required.";
pub const ISBN_ERROR: &str = "ISBN must be exactly 13 digits.";
pub const GENRE_ERROR: &str = "Genre is required.";

// BookForm is raw user input for the add/edit form, before any normalization
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookForm {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub genre: String,
    pub status: Option<BookStatus>,
}

impl BookForm {
    pub fn new(title: &str, author: &str, isbn: &str, genre: &str) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            isbn: isbn.to_string(),
            genre: genre.to_string(),
            status: None,
        }
    }

    pub fn with_status(mut self, status: BookStatus) -> Self {
        self.status = Some(status);
        self
    }
}

// Editing pre-fills the form from the selected record.
impl From<&BookRecord> for BookForm {
    fn from(other: &BookRecord) -> Self {
        Self {
            title: other.title.to_string(),
            author: other.author.to_string(),
            isbn: other.isbn.to_string(),
            genre: other.genre.to_string(),
            status: Some(other.status),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DraftField {
    Title,
    Author,
    Isbn,
    Genre,
}

impl Display for DraftField {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            DraftField::Title => write!(f, "title"),
            DraftField::Author => write!(f, "author"),
            DraftField::Isbn => write!(f, "isbn"),
            DraftField::Genre => write!(f, "genre"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    fields: BTreeMap<DraftField, String>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn get(&self, field: DraftField) -> Option<&str> {
        self.fields.get(&field).map(String::as_str)
    }

    pub fn fields(&self) -> &BTreeMap<DraftField, String> {
        &self.fields
    }

    fn add(&mut self, field: DraftField, message: &str) {
        self.fields.insert(field, message.to_string());
    }
}

impl Display for ValidationErrors {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let lines: Vec<String> = self.fields.iter()
            .map(|(field, message)| format!("{}: {}", field, message))
            .collect();
        write!(f, "{}", lines.join("; "))
    }
}

pub fn digits_only(isbn: &str) -> String {
    isbn.chars().filter(|c| c.is_ascii_digit()).collect()
}

// Every rule runs; all failures are reported together.
pub fn validate_draft(form: &BookForm) -> Result<BookDraft, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    // measured in UTF-16 code units, so one emoji counts as two
    let title = form.title.trim();
    if title.encode_utf16().count() < TITLE_MIN_LEN {
        errors.add(DraftField::Title, TITLE_ERROR);
    }

    let author = form.author.trim();
    if author.is_empty() {
        errors.add(DraftField::Author, AUTHOR_ERROR);
    }

    let isbn = digits_only(form.isbn.as_str());
    if isbn.len() != ISBN_DIGITS {
        errors.add(DraftField::Isbn, ISBN_ERROR);
    }

    let genre = form.genre.trim();
    if genre.is_empty() {
        errors.add(DraftField::Genre, GENRE_ERROR);
    }

    if !errors.is_empty() {
        return Err(errors);
    }
    Ok(BookDraft::new(title, author, isbn.as_str(), genre, form.status.unwrap_or_default()))
}
