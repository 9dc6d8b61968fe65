use crate::books::domain::model::BookRecord;
use crate::core::domain::{Configuration, DEFAULT_BOOKS_PER_PAGE};
use crate::core::library::ALL_GENRES;

// CatalogState is the single owned state of a catalog session. It is only
// changed through CatalogAction so that every mutation mirrors a confirmed
// remote outcome or an explicit user choice.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogState {
    pub books: Vec<BookRecord>,
    pub loading: bool,
    pub error: Option<String>,
    pub search_term: String,
    pub selected_genre: String,
    pub current_page: usize,
    pub books_per_page: usize,
    pub editing: Option<BookRecord>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CatalogAction {
    SetBooks(Vec<BookRecord>),
    AddBookSuccess(BookRecord),
    UpdateBookSuccess(BookRecord),
    DeleteBookSuccess(String),
    SetLoading(bool),
    SetError(Option<String>),
    SetSearchTerm(String),
    SetSelectedGenre(String),
    SetCurrentPage(usize),
    StartEditing(BookRecord),
    CancelEditing,
}

impl Default for CatalogState {
    fn default() -> Self {
        CatalogState::new(DEFAULT_BOOKS_PER_PAGE)
    }
}

impl CatalogState {
    pub fn new(books_per_page: usize) -> Self {
        Self {
            books: vec![],
            loading: false,
            error: None,
            search_term: String::new(),
            selected_genre: ALL_GENRES.to_string(),
            current_page: 1,
            books_per_page,
            editing: None,
        }
    }

    pub fn from_config(config: &Configuration) -> Self {
        CatalogState::new(config.books_per_page)
    }

    // Pure transition: consumes the state and returns the next one.
    pub fn reduce(mut self, action: CatalogAction) -> Self {
        self.apply(action);
        self
    }

    pub fn apply(&mut self, action: CatalogAction) {
        match action {
            CatalogAction::SetBooks(books) => {
                self.books = books;
            }
            CatalogAction::AddBookSuccess(book) => {
                // ids are unique; a repeated add replaces and moves to the front
                self.books.retain(|b| b.id != book.id);
                self.books.insert(0, book);
            }
            CatalogAction::UpdateBookSuccess(book) => {
                if let Some(existing) = self.books.iter_mut().find(|b| b.id == book.id) {
                    *existing = book;
                }
            }
            CatalogAction::DeleteBookSuccess(id) => {
                self.books.retain(|b| b.id != id);
            }
            CatalogAction::SetLoading(loading) => {
                self.loading = loading;
            }
            CatalogAction::SetError(error) => {
                self.error = error;
            }
            CatalogAction::SetSearchTerm(term) => {
                self.search_term = term;
                self.current_page = 1;
            }
            CatalogAction::SetSelectedGenre(genre) => {
                self.selected_genre = genre;
                self.current_page = 1;
            }
            CatalogAction::SetCurrentPage(page) => {
                self.current_page = page.max(1);
            }
            CatalogAction::StartEditing(book) => {
                self.editing = Some(book);
            }
            CatalogAction::CancelEditing => {
                self.editing = None;
            }
        }
    }

    pub fn find_book(&self, id: &str) -> Option<&BookRecord> {
        self.books.iter().find(|b| b.id == id)
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }
}
