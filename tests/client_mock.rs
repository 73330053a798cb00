//! End-to-end tests for StructuredQueryClient against a mockito server.

use mockito::Server;
use structured_query::transport::TransportError;
use structured_query::{Error, ProductQuery, StructuredQueryClient};

fn completion_envelope(content: &str) -> String {
    serde_json::json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "choices": [
            {
                "index": 0,
                "message": {"role": "assistant", "content": content},
                "finish_reason": "stop"
            }
        ],
        "usage": {"prompt_tokens": 42, "completion_tokens": 18, "total_tokens": 60}
    })
    .to_string()
}

fn client_for(server: &Server) -> StructuredQueryClient {
    StructuredQueryClient::builder()
        .api_key("sk-test")
        .base_url(server.url())
        .build()
        .expect("failed to build client")
}

#[tokio::test]
async fn test_fetch_product_info_success() {
    let mut server = Server::new_async().await;
    let body = completion_envelope(
        r#"{"product_name":"Widget X","product_details":"A small widget","tentative_price_inr":499}"#,
    );
    let mock = server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(&body)
        .create_async()
        .await;

    let client = client_for(&server);
    let query = ProductQuery::new("Tell me about Widget X").unwrap();
    let info = client.fetch_product_info(&query).await.unwrap();

    assert_eq!(info.product_name, "Widget X");
    assert_eq!(info.product_details, "A small widget");
    assert_eq!(info.tentative_price_inr, 499);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_fetch_product_info_non_json_reply_is_parse_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(completion_envelope("not json"))
        .create_async()
        .await;

    let client = client_for(&server);
    let query = ProductQuery::new("Tell me about Widget X").unwrap();
    let err = client.fetch_product_info(&query).await.unwrap_err();

    assert!(err.is_structured_parse());
}

#[tokio::test]
async fn test_fetch_product_info_missing_field_is_parse_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(completion_envelope(
            r#"{"product_name":"Widget X","product_details":"A small widget"}"#,
        ))
        .create_async()
        .await;

    let client = client_for(&server);
    let query = ProductQuery::new("Tell me about Widget X").unwrap();
    let err = client.fetch_product_info(&query).await.unwrap_err();

    assert!(err.is_structured_parse());
    let details = err.context().unwrap().details.clone().unwrap();
    assert!(details.contains("tentative_price_inr"));
}

#[tokio::test]
async fn test_auth_rejection_propagates_as_transport_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/chat/completions")
        .with_status(401)
        .with_header("content-type", "application/json")
        .with_body(r#"{"error": {"message": "Incorrect API key provided", "type": "invalid_request_error"}}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let query = ProductQuery::new("Tell me about Widget X").unwrap();
    let err = client.fetch_product_info(&query).await.unwrap_err();

    match err {
        Error::Transport(TransportError::Api { status, message }) => {
            assert_eq!(status, 401);
            assert!(message.contains("Incorrect API key"));
        }
        other => panic!("expected transport API error, got: {other}"),
    }
}

#[tokio::test]
async fn test_empty_choices_is_reported() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"choices": []}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client.request_completion("any prompt").await.unwrap_err();

    assert!(err.is_structured_parse());
    assert!(err.to_string().contains("no generated content"));
}

#[tokio::test]
async fn test_reply_content_is_trimmed() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(completion_envelope("\n  {\"ok\": true}  \n"))
        .create_async()
        .await;

    let client = client_for(&server);
    let raw = client.request_completion("any prompt").await.unwrap();

    assert_eq!(raw, r#"{"ok": true}"#);
}

#[tokio::test]
async fn test_request_carries_model_and_token_cap() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/chat/completions")
        .match_header("authorization", "Bearer sk-test")
        .match_body(mockito::Matcher::PartialJson(serde_json::json!({
            "model": "gpt-3.5-turbo",
            "max_tokens": 200
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(completion_envelope("{}"))
        .create_async()
        .await;

    let client = client_for(&server);
    client.request_completion("any prompt").await.unwrap();

    mock.assert_async().await;
}
