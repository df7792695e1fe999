use std::sync::Arc;

use catalog_api::app::services::AppServices;
use catalog_infra::SqliteCatalogStore;
use reqwest::StatusCode;
use serde_json::json;

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        Self::spawn_with(AppServices::in_memory()).await
    }

    async fn spawn_with(services: AppServices) -> Self {
        // Same router as prod, bound to an ephemeral port.
        let app = catalog_api::app::build_app(Arc::new(services));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn list_all(client: &reqwest::Client, srv: &TestServer) -> Vec<serde_json::Value> {
    let res = client.get(srv.url("/all")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    res.json().await.unwrap()
}

#[tokio::test]
async fn health_is_ok() {
    let srv = TestServer::spawn().await;

    let res = reqwest::get(srv.url("/health")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn showcase_lists_three_fixed_products() {
    let srv = TestServer::spawn().await;

    let res = reqwest::get(srv.url("/products")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body: Vec<serde_json::Value> = res.json().await.unwrap();
    let ids: Vec<&str> = body.iter().map(|p| p["id"].as_str().unwrap()).collect();
    assert_eq!(ids, vec!["1", "2", "3"]);
    assert!(body.iter().all(|p| p["thumbnailUrl"].is_string()));

    // Showcase entries are not catalog records.
    assert!(list_all(&reqwest::Client::new(), &srv).await.is_empty());
}

#[tokio::test]
async fn widget_lifecycle_add_list_delete() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    // Add
    let res = client
        .post(srv.url("/add"))
        .json(&json!({
            "title": "Widget",
            "description": "",
            "thumbnailUrl": "",
            "quantity": 10,
            "price": 9.99
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let created: serde_json::Value = res.json().await.unwrap();
    let id = created["id"].as_str().unwrap().to_string();
    assert_eq!(created["title"], "Widget");
    assert_eq!(created["quantity"], 10);
    assert_eq!(created["price"], 9.99);

    // List
    let all = list_all(&client, &srv).await;
    assert_eq!(all, vec![created]);

    // Delete
    let res = client
        .delete(srv.url(&format!("/delete/{id}")))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NO_CONTENT);
    assert!(list_all(&client, &srv).await.is_empty());

    // Deleting again is a miss.
    let res = client
        .delete(srv.url(&format!("/delete/{id}")))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn invalid_products_are_rejected_and_not_stored() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let invalid = [
        json!({ "title": "", "quantity": 10, "price": 9.99 }),
        json!({ "title": "Widget", "quantity": -1, "price": 9.99 }),
        json!({ "title": "Widget", "quantity": 1, "price": -0.5 }),
    ];

    for body in invalid {
        let res = client.post(srv.url("/add")).json(&body).send().await.unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST, "body: {body}");
        let err: serde_json::Value = res.json().await.unwrap();
        assert_eq!(err["error"], "validation_error");
        assert!(err["message"].is_string());
    }

    assert!(list_all(&client, &srv).await.is_empty());
}

#[tokio::test]
async fn malformed_body_is_a_bad_request() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .post(srv.url("/add"))
        .json(&json!({ "title": "Widget" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let err: serde_json::Value = res.json().await.unwrap();
    assert_eq!(err["error"], "invalid_body");
}

#[tokio::test]
async fn deleting_unknown_id_is_not_found() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .delete(srv.url("/delete/nonexistent-id"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let err: serde_json::Value = res.json().await.unwrap();
    assert_eq!(err["error"], "not_found");
}

#[tokio::test]
async fn cors_allows_any_origin() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .get(srv.url("/products"))
        .header("Origin", "http://localhost:4200")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        res.headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
}

#[tokio::test]
async fn sqlite_backed_server_round_trips() {
    let store = SqliteCatalogStore::in_memory().await.unwrap();
    let srv = TestServer::spawn_with(AppServices::new(Arc::new(store))).await;
    let client = reqwest::Client::new();

    let res = client
        .post(srv.url("/add"))
        .json(&json!({
            "title": "Gadget",
            "description": "spare part",
            "thumbnailUrl": "https://example.com/g.png",
            "quantity": 0,
            "price": 0.0
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let created: serde_json::Value = res.json().await.unwrap();

    let all = list_all(&client, &srv).await;
    assert_eq!(all.len(), 1);
    assert_eq!(all[0]["id"], created["id"]);
    assert_eq!(all[0]["thumbnailUrl"], "https://example.com/g.png");
}
