use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use nucard_search::{SearchClient, SearchError};
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};

type Seen = Arc<Mutex<Vec<(String, Value)>>>;

async fn fake_index(
    State(seen): State<Seen>,
    Path(index): Path<String>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Result<Json<Value>, StatusCode> {
    if headers.get("X-Algolia-API-Key").and_then(|v| v.to_str().ok()) != Some("secret") {
        return Err(StatusCode::FORBIDDEN);
    }
    seen.lock().unwrap().push((index, body));

    Ok(Json(json!({
        "hits": [
            { "objectID": "fel-reaver", "name": "Fel Reaver" },
            { "objectID": "felguard", "name": "Felguard" },
            { "objectID": "fel-orc-soulfiend", "name": "Fel Orc Soulfiend" }
        ],
        "nbHits": 3
    })))
}

async fn spawn_index() -> (String, Seen) {
    let seen = Seen::default();
    let app = Router::new()
        .route("/1/indexes/{index}/query", post(fake_index))
        .with_state(seen.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}"), seen)
}

fn client(host: &str, key: &str) -> SearchClient {
    SearchClient::builder().app_id("APP").api_key(key).index("cards").host(host).build().unwrap()
}

#[tokio::test]
async fn returns_object_ids_in_rank_order() {
    let (host, seen) = spawn_index().await;

    let ids = client(&host, "secret").query("fel", 10).await.unwrap();

    assert_eq!(ids, vec!["fel-reaver", "felguard", "fel-orc-soulfiend"]);
    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].0, "cards");
    assert_eq!(seen[0].1, json!({ "query": "fel", "hitsPerPage": 10 }));
}

#[tokio::test]
async fn truncates_to_requested_hits() {
    let (host, _) = spawn_index().await;

    let ids = client(&host, "secret").query("fel", 2).await.unwrap();

    assert_eq!(ids, vec!["fel-reaver", "felguard"]);
}

#[tokio::test]
async fn rejected_request_surfaces_status() {
    let (host, _) = spawn_index().await;

    let err = client(&host, "wrong").query("fel", 10).await.unwrap_err();

    assert!(matches!(err, SearchError::Status { status: 403, .. }));
}

#[tokio::test]
async fn unreachable_index_is_an_http_error() {
    let err = client("http://127.0.0.1:1", "secret").query("fel", 10).await.unwrap_err();

    assert!(matches!(err, SearchError::Http { .. }));
}
