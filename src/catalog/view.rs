use crate::books::domain::Book;
use crate::books::domain::model::BookRecord;
use crate::catalog::state::CatalogState;
use crate::core::library::ALL_GENRES;

pub const NO_BOOKS_MESSAGE: &str = "No books found. Try adding some!";
pub const NO_MATCHES_MESSAGE: &str = "No books match your filters.";

// CatalogView is everything the table and the pagination footer read.
#[derive(Debug, PartialEq)]
pub struct CatalogView<'a> {
    pub filtered: Vec<&'a BookRecord>,
    pub page: Vec<&'a BookRecord>,
    pub total_pages: usize,
}

// Counts over the whole catalog, ignoring filters.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct InventorySummary {
    pub total: usize,
    pub available: usize,
    pub borrowed: usize,
}

pub fn derive_view(state: &CatalogState) -> CatalogView<'_> {
    let lower_term = state.search_term.to_lowercase();
    let filtered: Vec<&BookRecord> = state.books.iter()
        .filter(|b| state.selected_genre == ALL_GENRES || b.genre == state.selected_genre)
        .filter(|b| lower_term.is_empty() || b.matches_term(lower_term.as_str()))
        .collect();

    let per_page = page_size(state);
    let total_pages = total_pages(filtered.len(), per_page);

    // pages past the end produce an empty slice, they are not clamped here
    let start = state.current_page.saturating_sub(1).saturating_mul(per_page);
    let page = filtered.iter().skip(start).take(per_page).copied().collect();

    CatalogView {
        filtered,
        page,
        total_pages,
    }
}

// A zero page size is treated as one book per page.
fn page_size(state: &CatalogState) -> usize {
    state.books_per_page.max(1)
}

fn total_pages(matches: usize, per_page: usize) -> usize {
    matches.div_ceil(per_page).max(1)
}

// Current page bounded into 1..=total_pages for the current filters.
pub fn clamp_page(state: &CatalogState) -> usize {
    let view = derive_view(state);
    state.current_page.clamp(1, view.total_pages)
}

pub fn next_page(state: &CatalogState) -> usize {
    let view = derive_view(state);
    if state.current_page < view.total_pages {
        state.current_page + 1
    } else {
        state.current_page
    }
}

pub fn prev_page(state: &CatalogState) -> usize {
    if state.current_page > 1 {
        state.current_page - 1
    } else {
        state.current_page
    }
}

// The pagination footer is hidden when nothing matches.
pub fn show_pagination(view: &CatalogView<'_>) -> bool {
    !view.filtered.is_empty()
}

pub fn empty_message(state: &CatalogState, view: &CatalogView<'_>) -> Option<&'static str> {
    if state.books.is_empty() {
        Some(NO_BOOKS_MESSAGE)
    } else if view.page.is_empty() {
        Some(NO_MATCHES_MESSAGE)
    } else {
        None
    }
}

pub fn summarize(state: &CatalogState) -> InventorySummary {
    let borrowed = state.books.iter().filter(|b| b.is_borrowed()).count();
    InventorySummary {
        total: state.books.len(),
        available: state.books.len() - borrowed,
        borrowed,
    }
}
