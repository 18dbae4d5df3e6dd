use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::info;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: u64,
    pub title: String,
    pub completed: bool,
}

#[derive(Deserialize)]
pub struct CreateTodo {
    pub title: String,
}

/// Items keyed by id so listing comes out in insertion order.
#[derive(Debug, Default)]
pub struct Store {
    todos: BTreeMap<u64, Todo>,
    last_id: u64,
}

pub type Db = Arc<RwLock<Store>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::default()));
    Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route("/todos/{id}", delete(delete_todo))
        .route("/todos/{id}/complete", post(complete_todo))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_todos(State(db): State<Db>) -> Json<Vec<Todo>> {
    let store = db.read().await;
    Json(store.todos.values().cloned().collect())
}

async fn create_todo(
    State(db): State<Db>,
    Json(input): Json<CreateTodo>,
) -> (StatusCode, Json<Todo>) {
    let mut store = db.write().await;
    store.last_id += 1;
    let todo = Todo {
        id: store.last_id,
        title: input.title,
        completed: false,
    };
    store.todos.insert(todo.id, todo.clone());
    info!(id = todo.id, "created todo");
    (StatusCode::CREATED, Json(todo))
}

async fn complete_todo(
    State(db): State<Db>,
    Path(id): Path<u64>,
) -> Result<Json<Todo>, StatusCode> {
    let mut store = db.write().await;
    let todo = store.todos.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    todo.completed = true;
    info!(id, "completed todo");
    Ok(Json(todo.clone()))
}

async fn delete_todo(
    State(db): State<Db>,
    Path(id): Path<u64>,
) -> Result<StatusCode, StatusCode> {
    let mut store = db.write().await;
    store.todos.remove(&id).ok_or(StatusCode::NOT_FOUND)?;
    info!(id, "deleted todo");
    Ok(StatusCode::NO_CONTENT)
}
