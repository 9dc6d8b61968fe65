use std::fmt::Write;
use crate::books::domain::model::BookRecord;
use crate::books::domain::Book;
use crate::catalog::state::CatalogState;
use crate::catalog::validation::ValidationErrors;
use crate::catalog::view::{derive_view, empty_message, show_pagination, summarize};

const TITLE_WIDTH: usize = 32;
const AUTHOR_WIDTH: usize = 20;
const GENRE_WIDTH: usize = 10;

pub fn render_summary(state: &CatalogState) -> String {
    let summary = summarize(state);
    format!("Inventory Summary\n  Total Books: {}\n  Available:   {}\n  Borrowed:    {}\n",
            summary.total, summary.available, summary.borrowed)
}

// Loading and error banners shown above the table.
pub fn render_banner(state: &CatalogState) -> Option<String> {
    if let Some(error) = state.error.as_ref() {
        Some(error.to_string())
    } else if state.loading {
        Some("Loading...".to_string())
    } else {
        None
    }
}

pub fn render_catalog(state: &CatalogState) -> String {
    let view = derive_view(state);
    let mut out = String::new();
    if let Some(banner) = render_banner(state) {
        let _ = writeln!(out, "{}", banner);
    }
    if state.books.is_empty() {
        let _ = writeln!(out, "{}", empty_message(state, &view).unwrap_or_default());
        return out;
    }

    let _ = writeln!(out, "{:<10} {:<tw$} {:<aw$} {:<gw$} {:<13} {}",
                     "ID", "Title", "Author", "Genre", "ISBN", "Status",
                     tw = TITLE_WIDTH, aw = AUTHOR_WIDTH, gw = GENRE_WIDTH);
    for book in view.page.iter() {
        let _ = writeln!(out, "{}", render_row(book));
    }
    if let Some(message) = empty_message(state, &view) {
        let _ = writeln!(out, "{}", message);
    }
    if show_pagination(&view) {
        let _ = writeln!(out, "Page {} of {}", state.current_page, view.total_pages);
    }
    out
}

pub fn render_row(book: &BookRecord) -> String {
    let action = if book.is_borrowed() { "Return" } else { "Borrow" };
    format!("{:<10} {:<tw$} {:<aw$} {:<gw$} {:<13} {:<9} [{}]",
            truncate(book.id.as_str(), 10),
            truncate(book.title.as_str(), TITLE_WIDTH),
            truncate(book.author.as_str(), AUTHOR_WIDTH),
            truncate(book.genre.as_str(), GENRE_WIDTH),
            book.isbn, book.status.to_string(), action,
            tw = TITLE_WIDTH, aw = AUTHOR_WIDTH, gw = GENRE_WIDTH)
}

pub fn render_validation_errors(errors: &ValidationErrors) -> String {
    errors.fields().iter()
        .map(|(field, message)| format!("  {}: {}\n", field, message))
        .collect()
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(width.saturating_sub(1)).collect();
    cut.push('~');
    cut
}
