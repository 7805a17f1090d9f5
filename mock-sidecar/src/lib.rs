use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::{net::TcpListener, sync::RwLock};
use tracing::debug;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StateItem {
    pub key: String,
    pub value: Value,
}

/// Values keyed by `(store, key)`.
pub type Db = Arc<RwLock<HashMap<(String, String), Value>>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(HashMap::new()));
    Router::new()
        .route("/v1.0/state/{store}", post(save_state))
        .route("/v1.0/state/{store}/{key}", get(get_state))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn save_state(
    State(db): State<Db>,
    Path(store): Path<String>,
    Json(items): Json<Vec<StateItem>>,
) -> StatusCode {
    let mut entries = db.write().await;
    for item in items {
        debug!(store = %store, key = %item.key, "saving state");
        entries.insert((store.clone(), item.key), item.value);
    }
    StatusCode::NO_CONTENT
}

async fn get_state(
    State(db): State<Db>,
    Path((store, key)): Path<(String, String)>,
) -> Response {
    let entries = db.read().await;
    match entries.get(&(store, key)) {
        Some(value) => Json(value.clone()).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    }
}
