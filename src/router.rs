use crate::handlers::{admin, client, health, pages};
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

pub fn build(state: AppState) -> Router {
    Router::new()
        .route("/", get(pages::client))
        .route("/admin", get(pages::admin))
        .route("/health", get(health::health))
        .route("/api/submit", post(client::submit))
        .route("/api/check", post(client::check))
        .route("/api/update_client", post(client::update_client))
        .route("/api/login", post(admin::login))
        .route("/api/admin/data", get(admin::data))
        .route("/api/admin/manage_label", post(admin::manage_label))
        .route("/api/admin/update_ticket", post(admin::update_ticket))
        .route("/api/admin/delete_ticket", post(admin::delete_ticket))
        .route("/api/admin/update_config", post(admin::update_config))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support;
    use serde_json::{json, Value};

    async fn spawn_server() -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let app = build(test_support::state());
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}")
    }

    #[tokio::test]
    async fn ticket_lifecycle_over_http() {
        let base = spawn_server().await;
        let client = reqwest::Client::new();

        let resp = client
            .post(format!("{base}/api/submit"))
            .json(&json!({
                "customer_name": "Anna",
                "shoot_date": "2024-01-01",
                "image_link": "http://x/1.jpg",
            }))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 200);

        let resp = client
            .post(format!("{base}/api/submit"))
            .json(&json!({
                "customer_name": "Anna",
                "shoot_date": "2024-01-01",
                "image_link": "http://x/1.jpg",
            }))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 400);

        let resp = client
            .post(format!("{base}/api/admin/update_ticket"))
            .json(&json!({"image_link": "http://x/1.jpg", "label": "Hoàn thành"}))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 200);

        let body: Value = client
            .post(format!("{base}/api/check"))
            .json(&json!({"image_link": "http://x/1.jpg"}))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(body["data"]["label"], "Hoàn thành");

        let body: Value = client
            .get(format!("{base}/api/admin/data"))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(body["messages"].as_array().unwrap().len(), 1);
        assert_eq!(body["labels"].as_array().unwrap().len(), 4);

        let resp = client
            .post(format!("{base}/api/admin/delete_ticket"))
            .json(&json!({"image_link": "http://x/1.jpg"}))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 200);

        let resp = client
            .post(format!("{base}/api/check"))
            .json(&json!({"image_link": "http://x/1.jpg"}))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 404);
    }

    #[tokio::test]
    async fn login_and_pages_over_http() {
        let base = spawn_server().await;
        let client = reqwest::Client::new();

        let resp = client
            .post(format!("{base}/api/login"))
            .json(&json!({"username": "admin", "password": "nope"}))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 401);

        let resp = client.get(format!("{base}/")).send().await.unwrap();
        assert_eq!(resp.status(), 200);
        assert!(resp.text().await.unwrap().contains("/api/check"));

        let resp = client.get(format!("{base}/health")).send().await.unwrap();
        assert_eq!(resp.status(), 200);
    }
}
