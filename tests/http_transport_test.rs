//! Exercises `HttpTransport` against an in-process stub of the store API.

use axum::extract::Path;
use axum::http::StatusCode;
use axum::routing::{delete, get, put};
use axum::{Json, Router};
use serde_json::{json, Value};
use shop_client::clients::ApiClient;
use shop_client::config::ShopConfig;
use shop_client::framework::{ClientError, HttpTransport, ResourceClient};
use shop_client::lifecycle::{Console, MenuLayout, ShopSystem};
use shop_client::model::Product;
use std::sync::Arc;

fn backpack() -> Value {
    json!({
        "id": 1,
        "title": "Backpack",
        "price": 12.5,
        "description": "Fits a laptop",
        "category": "bags",
        "image": "https://store.test/img/1.jpg"
    })
}

async fn list_products() -> Json<Value> {
    Json(json!([backpack()]))
}

async fn create_product(Json(mut body): Json<Value>) -> (StatusCode, Json<Value>) {
    body["id"] = json!(21);
    (StatusCode::CREATED, Json(body))
}

async fn update_product(
    Path(id): Path<u64>,
    Json(mut body): Json<Value>,
) -> Result<Json<Value>, StatusCode> {
    if id != 1 {
        return Err(StatusCode::NOT_FOUND);
    }
    body["id"] = json!(id);
    Ok(Json(body))
}

async fn delete_product(Path(id): Path<u64>) -> Result<Json<Value>, StatusCode> {
    match id {
        1 => Ok(Json(backpack())),
        _ => Err(StatusCode::NOT_FOUND),
    }
}

async fn list_users() -> StatusCode {
    StatusCode::SERVICE_UNAVAILABLE
}

/// Starts the stub store and returns its root URL.
async fn spawn_store() -> String {
    let app = Router::new()
        .route("/products", get(list_products).post(create_product))
        .route("/products/{id}", put(update_product).delete(delete_product))
        .route("/users", get(list_users))
        .route("/plain/{id}", delete(|| async { "OK" }));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn products_client(root: &str) -> ResourceClient<Product> {
    ResourceClient::new(format!("{root}/products"), Arc::new(HttpTransport::new()))
}

#[tokio::test]
async fn test_crud_over_http() {
    let root = spawn_store().await;
    let client = products_client(&root);

    let all = client.fetch_all().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].title, "Backpack");

    let created = client.create(&Product::demo_new()).await.unwrap();
    assert_eq!(created.id, 21);
    assert_eq!(created.title, "New Product");

    let updated = client.update(1, &Product::demo_update()).await.unwrap();
    assert_eq!(updated.id, 1);
    assert_eq!(updated.price, 39.99);

    assert!(client.delete(1).await);
}

#[tokio::test]
async fn test_error_statuses() {
    let root = spawn_store().await;
    let client = products_client(&root);

    assert_eq!(client.update(7, &Product::demo_update()).await, None);
    assert!(!client.delete(7).await);

    let config = ShopConfig::new(&root, MenuLayout::UsersFirst).unwrap();
    let system = ShopSystem::connect(&config);
    let users = system.user_client.fetch_all().await;
    assert!(matches!(
        users,
        Err(shop_client::user_resource::UserError::Api(ClientError::Status { status: 503, .. }))
    ));
}

#[tokio::test]
async fn test_unreachable_host_is_transport_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = products_client(&format!("http://{addr}"));
    assert!(matches!(client.fetch_all().await, Err(ClientError::Transport(_))));
    assert!(!client.delete(1).await);
}

#[tokio::test]
async fn test_full_session_over_http() {
    let root = spawn_store().await;
    let config = ShopConfig::new(&root, MenuLayout::UsersFirst).unwrap();
    let system = ShopSystem::connect(&config);

    let console = Console::new("5\n1\n4\nyes\n".as_bytes(), Vec::new());
    let report = system.dispatcher(console).run().await.unwrap();

    let order = report.order.expect("order expected");
    assert_eq!(order.total(), 50.0);
    let output = String::from_utf8(report.output).unwrap();
    assert!(output.contains("4 of Backpack added to cart."));
}

#[tokio::test]
async fn test_delete_with_plain_text_body_succeeds() {
    let root = spawn_store().await;
    let client: ResourceClient<Product> =
        ResourceClient::new(format!("{root}/plain"), Arc::new(HttpTransport::new()));

    assert!(client.delete(1).await);
}
