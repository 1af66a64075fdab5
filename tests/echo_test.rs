mod common;

use common::TestApp;
use mongodb::bson::doc;
use reqwest::Client;

#[tokio::test]
async fn echo_returns_fixed_message_without_id() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .get(&format!("{}/data", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());

    let content_type = response
        .headers()
        .get("content-type")
        .expect("Missing content-type header")
        .to_str()
        .expect("Invalid content-type");
    assert!(content_type.starts_with("application/json"));

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["message"], "Hello, Yat!");
    assert!(body.get("_id").is_none());
    assert_eq!(body.as_object().unwrap().len(), 1);

    app.cleanup().await;
}

#[tokio::test]
async fn each_echo_inserts_exactly_one_record() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    for expected in 1..=3_u64 {
        client
            .get(&format!("{}/data", app.address))
            .send()
            .await
            .expect("Failed to execute request")
            .error_for_status()
            .expect("Echo request failed");

        let count = app
            .db
            .messages()
            .count_documents(doc! {}, None)
            .await
            .expect("Failed to count message records");
        assert_eq!(count, expected);
    }

    app.cleanup().await;
}

#[tokio::test]
async fn stored_records_carry_the_message_and_an_id() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    client
        .get(&format!("{}/data", app.address))
        .send()
        .await
        .expect("Failed to execute request")
        .error_for_status()
        .expect("Echo request failed");

    let record = app
        .db
        .messages()
        .find_one(doc! {}, None)
        .await
        .expect("Failed to query message records")
        .expect("No message record stored");

    assert!(record.id.is_some());
    assert_eq!(record.message, "Hello, Yat!");

    app.cleanup().await;
}
