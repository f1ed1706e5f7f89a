//! Integration tests for the backend HTTP client against a mock server.

use pdf_qa::{BackendClient, ClientError, PdfFile};
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client() -> BackendClient {
    BackendClient::new(Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn test_upload_sends_one_files_part_per_pdf() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/documents"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"status": "ok", "files": []})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let files = vec![
        PdfFile::new("a.pdf", b"%PDF-1.4 first".to_vec()),
        PdfFile::new("b.pdf", b"%PDF-1.4 second".to_vec()),
    ];

    let base_url = format!("{}/", mock_server.uri());
    let response = client().upload_documents(&base_url, &files).await.unwrap();
    assert_eq!(response["status"], "ok");

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);

    let content_type = requests[0]
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("multipart/form-data"));

    let body = String::from_utf8_lossy(&requests[0].body).to_lowercase();
    assert_eq!(body.matches("name=\"files\"").count(), 2);
    assert!(body.contains("filename=\"a.pdf\""));
    assert!(body.contains("filename=\"b.pdf\""));
    assert_eq!(body.matches("content-type: application/pdf").count(), 2);
    assert!(body.contains("%pdf-1.4 first"));
}

#[tokio::test]
async fn test_question_without_doc_id_omits_key() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/question"))
        .and(body_json(json!({"question": "What is X?"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"answer": "X is Y", "sources": []})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let response = client()
        .ask_question(&mock_server.uri(), "What is X?", None)
        .await
        .unwrap();
    assert_eq!(response["answer"], "X is Y");

    let requests = mock_server.received_requests().await.unwrap();
    let sent: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert!(sent.get("docId").is_none());
}

#[tokio::test]
async fn test_question_with_empty_doc_id_omits_key() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/question"))
        .and(body_json(json!({"question": "Q"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"answer": "A"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    client()
        .ask_question(&mock_server.uri(), "Q", Some(""))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_question_with_doc_id() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/question"))
        .and(body_json(json!({"question": "Q", "docId": "d1"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"answer": "A"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    client()
        .ask_question(&mock_server.uri(), "Q", Some("d1"))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_error_status_carries_raw_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/question"))
        .respond_with(ResponseTemplate::new(400).set_body_string(r#"{"error":"Missing question"}"#))
        .mount(&mock_server)
        .await;

    let err = client()
        .ask_question(&mock_server.uri(), "Q", None)
        .await
        .unwrap_err();

    match err {
        ClientError::RequestFailed { status, body } => {
            assert_eq!(status, 400);
            assert_eq!(body, r#"{"error":"Missing question"}"#);
        }
        other => panic!("expected RequestFailed, got {other:?}"),
    }
}

#[tokio::test]
async fn test_undecodable_body_is_transport_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/documents"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>proxy page</html>"))
        .mount(&mock_server)
        .await;

    let files = vec![PdfFile::new("a.pdf", b"%PDF".to_vec())];
    let err = client()
        .upload_documents(&mock_server.uri(), &files)
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::TransportFailed(_)));
}

#[tokio::test]
async fn test_connection_refused_is_transport_failure() {
    let err = client()
        .ask_question("http://127.0.0.1:1", "Q", None)
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::TransportFailed(_)));
    assert_eq!(err.body(), None);
}

#[tokio::test]
async fn test_timeout_is_transport_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/question"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"answer": "late"}))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&mock_server)
        .await;

    let client = BackendClient::new(Duration::from_millis(200)).unwrap();
    let err = client
        .ask_question(&mock_server.uri(), "Q", None)
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::TransportFailed(_)));
}
