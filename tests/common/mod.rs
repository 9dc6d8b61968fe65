use std::net::TcpListener;
use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, put};
use axum::{Json, Router};
use serde_json::{json, Value};

// FakeStore mimics a mock REST backend serving `/booksdata`. `/broken` answers
// every request with a server error.
#[derive(Clone, Default)]
pub struct FakeStore {
    pub books: Arc<Mutex<Vec<Value>>>,
    next_id: Arc<Mutex<u64>>,
}

impl FakeStore {
    pub fn snapshot(&self) -> Vec<Value> {
        self.books.lock().unwrap().clone()
    }
}

pub async fn spawn_fake_store(seed: Vec<Value>) -> (String, FakeStore) {
    let store = FakeStore {
        books: Arc::new(Mutex::new(seed)),
        next_id: Arc::new(Mutex::new(100)),
    };
    let app = Router::new()
        .route("/booksdata", get(list_books).post(create_book))
        .route("/booksdata/:id", put(update_book).delete(delete_book))
        .route("/broken", get(broken).post(broken))
        .route("/broken/:id", put(broken).delete(broken))
        .with_state(store.clone());

    let listener = TcpListener::bind("127.0.0.1:0").expect("should bind loopback");
    listener.set_nonblocking(true).expect("should set nonblocking");
    let addr = listener.local_addr().expect("should have local addr");
    let server = axum::Server::from_tcp(listener).expect("should build server")
        .serve(app.into_make_service());
    tokio::spawn(server);
    (format!("http://{}", addr), store)
}

pub fn book_json(id: &str, title: &str, author: &str, genre: &str, status: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "author": author,
        "isbn": "9781234567890",
        "genre": genre,
        "status": status,
    })
}

fn value_id(book: &Value) -> Option<String> {
    let raw = book.get("id").or_else(|| book.get("_id"))?;
    match raw {
        Value::String(s) => Some(s.to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

async fn list_books(State(store): State<FakeStore>) -> Json<Value> {
    Json(Value::Array(store.snapshot()))
}

async fn create_book(State(store): State<FakeStore>, Json(mut body): Json<Value>) -> (StatusCode, Json<Value>) {
    let id = {
        let mut next = store.next_id.lock().unwrap();
        *next += 1;
        *next
    };
    body["id"] = json!(id.to_string());
    store.books.lock().unwrap().push(body.clone());
    (StatusCode::CREATED, Json(body))
}

async fn update_book(State(store): State<FakeStore>, Path(id): Path<String>,
                     Json(body): Json<Value>) -> Result<Json<Value>, StatusCode> {
    let mut books = store.books.lock().unwrap();
    let existing = books.iter_mut()
        .find(|b| value_id(b).as_deref() == Some(id.as_str()))
        .ok_or(StatusCode::NOT_FOUND)?;
    if let (Some(target), Some(fields)) = (existing.as_object_mut(), body.as_object()) {
        for (key, value) in fields {
            target.insert(key.to_string(), value.clone());
        }
    }
    Ok(Json(existing.clone()))
}

async fn delete_book(State(store): State<FakeStore>, Path(id): Path<String>) -> StatusCode {
    let mut books = store.books.lock().unwrap();
    let before = books.len();
    books.retain(|b| value_id(b).as_deref() != Some(id.as_str()));
    if books.len() == before {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::NO_CONTENT
    }
}

async fn broken() -> (StatusCode, &'static str) {
    (StatusCode::INTERNAL_SERVER_ERROR, "store unavailable")
}
