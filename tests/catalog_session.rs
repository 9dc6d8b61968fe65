mod common;

use std::sync::Arc;

use inventory::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
use inventory::catalog::command::load_books_cmd::{LoadBooksCommand, LoadBooksCommandRequest};
use inventory::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest};
use inventory::catalog::command::toggle_status_cmd::{ToggleStatusCommand, ToggleStatusCommandRequest};
use inventory::catalog::command::update_book_cmd::{UpdateBookCommand, UpdateBookCommandRequest};
use inventory::catalog::domain::{CatalogService, ADD_FAILED, LOAD_FAILED};
use inventory::catalog::factory::create_catalog_service;
use inventory::catalog::state::{CatalogAction, CatalogState};
use inventory::catalog::validation::BookForm;
use inventory::catalog::view::{derive_view, summarize};
use inventory::core::command::{Command, CommandError};
use inventory::core::domain::Configuration;
use inventory::core::library::BookStatus;
use inventory::core::repository::RepositoryStore;

use common::{book_json, spawn_fake_store};

fn remote_service(base_url: &str) -> Arc<dyn CatalogService> {
    let config = Configuration::new(base_url);
    Arc::from(create_catalog_service(&config, RepositoryStore::Remote).expect("should build catalog service"))
}

#[tokio::test]
async fn test_should_manage_catalog_against_remote_store() {
    let (base, store) = spawn_fake_store(vec![
        book_json("1", "Dune", "Frank Herbert", "Fiction", "Available"),
        book_json("2", "Cosmos", "Carl Sagan", "Science", "Borrowed"),
    ]).await;
    let svc = remote_service(format!("{}/booksdata", base).as_str());
    let mut state = CatalogState::default();

    let loaded = LoadBooksCommand::new(svc.clone())
        .execute(&mut state, LoadBooksCommandRequest::default()).await.expect("should load books");
    assert_eq!(2, loaded.count);

    let added = AddBookCommand::new(svc.clone())
        .execute(&mut state, AddBookCommandRequest::new(
            BookForm::new("Programming Rust", "Jim Blandy", "978-1-4920-5259-3", "Tech"))).await
        .expect("should add book");
    assert_eq!(added.book, state.books[0]);
    assert_eq!("9781492052593", added.book.isbn);

    let toggled = ToggleStatusCommand::new(svc.clone())
        .execute(&mut state, ToggleStatusCommandRequest::new(added.book.id.as_str())).await
        .expect("should borrow book");
    assert_eq!(BookStatus::Borrowed, toggled.book.status);
    assert_eq!(2, summarize(&state).borrowed);

    let dune = state.find_book("1").cloned().expect("should find book");
    state.apply(CatalogAction::StartEditing(dune.clone()));
    let mut form = BookForm::from(&dune);
    form.title = "Dune Messiah".to_string();
    UpdateBookCommand::new(svc.clone())
        .execute(&mut state, UpdateBookCommandRequest::new(form)).await.expect("should update book");
    assert_eq!("Dune Messiah", state.find_book("1").expect("should find book").title);
    assert!(!state.is_editing());

    RemoveBookCommand::new(svc.clone())
        .execute(&mut state, RemoveBookCommandRequest::new("2", true)).await.expect("should remove book");
    assert_eq!(2, state.books.len());
    assert_eq!(2, store.snapshot().len());
    assert!(!state.loading);
    assert_eq!(None, state.error);
}

#[tokio::test]
async fn test_should_keep_state_when_store_fails() {
    let (base, _store) = spawn_fake_store(vec![]).await;
    let svc = remote_service(format!("{}/broken", base).as_str());
    let mut state = CatalogState::default();

    let err = LoadBooksCommand::new(svc.clone())
        .execute(&mut state, LoadBooksCommandRequest::default()).await.expect_err("should fail");
    assert!(matches!(err, CommandError::Remote { status: Some(500), .. }));
    assert_eq!(Some(LOAD_FAILED.to_string()), state.error);

    AddBookCommand::new(svc.clone())
        .execute(&mut state, AddBookCommandRequest::new(
            BookForm::new("Dune", "Herbert", "9780441013593", "Fiction"))).await.expect_err("should fail");
    assert_eq!(Some(ADD_FAILED.to_string()), state.error);
    assert!(state.books.is_empty());
    assert!(!state.loading);
}

#[tokio::test]
async fn test_should_filter_and_paginate_loaded_books() {
    let seed = (1..=12)
        .map(|i| book_json(&i.to_string(), &format!("Tech {}", i), "author", "Tech", "Available"))
        .chain(std::iter::once(book_json("99", "Dune", "Herbert", "Fiction", "Available")))
        .collect();
    let (base, _store) = spawn_fake_store(seed).await;
    let svc = remote_service(format!("{}/booksdata", base).as_str());
    let mut state = CatalogState::default();
    LoadBooksCommand::new(svc.clone())
        .execute(&mut state, LoadBooksCommandRequest::default()).await.expect("should load books");

    state.apply(CatalogAction::SetSelectedGenre("Tech".to_string()));
    state.apply(CatalogAction::SetCurrentPage(3));
    let view = derive_view(&state);
    assert_eq!(12, view.filtered.len());
    assert_eq!(3, view.total_pages);
    let ids: Vec<&str> = view.page.iter().map(|b| b.id.as_str()).collect();
    assert_eq!(vec!["11", "12"], ids);

    state.apply(CatalogAction::SetSearchTerm("herbert".to_string()));
    assert_eq!(1, state.current_page);
    assert!(derive_view(&state).filtered.is_empty());
}

#[tokio::test]
async fn test_should_work_with_in_memory_store() {
    let svc: Arc<dyn CatalogService> = Arc::from(
        create_catalog_service(&Configuration::new("http://unused"), RepositoryStore::InMemory)
            .expect("should build catalog service"));
    let mut state = CatalogState::default();
    LoadBooksCommand::new(svc.clone())
        .execute(&mut state, LoadBooksCommandRequest::default()).await.expect("should load books");
    assert!(state.books.is_empty());

    AddBookCommand::new(svc.clone())
        .execute(&mut state, AddBookCommandRequest::new(
            BookForm::new("Dune", "Herbert", "9780441013593", "Fiction"))).await.expect("should add book");

    let mut fresh = CatalogState::default();
    LoadBooksCommand::new(svc)
        .execute(&mut fresh, LoadBooksCommandRequest::default()).await.expect("should reload books");
    assert_eq!(state.books, fresh.books);
}

#[tokio::test]
async fn test_should_load_catalog_with_partial_records() {
    let (base, _store) = spawn_fake_store(vec![
        book_json("1", "Dune", "Frank Herbert", "Fiction", "Available"),
        serde_json::json!({"id": "2", "_id": "2", "title": null, "author": "Carl Sagan", "isbn": null, "genre": "Science", "status": null}),
    ]).await;
    let svc = remote_service(format!("{}/booksdata", base).as_str());
    let mut state = CatalogState::default();

    let loaded = LoadBooksCommand::new(svc.clone())
        .execute(&mut state, LoadBooksCommandRequest::default()).await.expect("should load partial records");
    assert_eq!(2, loaded.count);
    assert_eq!(None, state.error);
    assert_eq!("", state.find_book("2").expect("should find book").title);
    assert_eq!(2, summarize(&state).available);
}
