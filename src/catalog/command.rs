pub mod add_book_cmd;
pub mod load_books_cmd;
pub mod remove_book_cmd;
pub mod toggle_status_cmd;
pub mod update_book_cmd;
