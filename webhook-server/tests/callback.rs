//! Integration test: bind the router on a loopback port and drive the
//! callback endpoint over real HTTP. The reply sender is a recording double,
//! so no outbound network access is needed.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use url::Url;

use echobot::reply::ReplyError;
use echobot::web::{router, SIGNATURE_HEADER};
use echobot::{AppState, Config, OutboundMessage, ReplySender, ReplyStatus};

const SECRET: &str = "integration-test-secret";

struct RecordingSender {
    calls: Mutex<Vec<(String, Vec<OutboundMessage>)>>,
}

#[async_trait]
impl ReplySender for RecordingSender {
    async fn send_reply(
        &self,
        reply_token: &str,
        messages: &[OutboundMessage],
    ) -> Result<ReplyStatus, ReplyError> {
        self.calls
            .lock()
            .unwrap()
            .push((reply_token.to_string(), messages.to_vec()));
        Ok(ReplyStatus {
            status: 200,
            body: "{}".to_string(),
        })
    }
}

fn sign(body: &str) -> String {
    let mut mac = Hmac::<Sha256>::new_from_slice(SECRET.as_bytes()).unwrap();
    mac.update(body.as_bytes());
    BASE64.encode(mac.finalize().into_bytes())
}

async fn spawn_server() -> (String, Arc<RecordingSender>) {
    let config = Config {
        channel_secret: SECRET.to_string(),
        channel_access_token: "token".to_string(),
        port: 0,
        api_base: Url::parse("https://api.line.me").unwrap(),
        request_timeout_ms: 1000,
    };

    let sender = Arc::new(RecordingSender {
        calls: Mutex::new(Vec::new()),
    });

    let app = router(AppState::new(config, sender.clone()));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind loopback port");
    let addr = listener.local_addr().expect("local_addr");

    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    (format!("http://{}", addr), sender)
}

#[tokio::test]
async fn health_responds_ok() {
    let (base, _sender) = spawn_server().await;

    let resp = reqwest::get(format!("{}/health", base)).await.expect("GET /health");

    assert!(resp.status().is_success());
    let json: serde_json::Value = resp.json().await.expect("parse JSON");
    assert_eq!(json.get("status").and_then(|v| v.as_str()), Some("ok"));
}

#[tokio::test]
async fn callback_round_trip_echoes_text() {
    let (base, sender) = spawn_server().await;

    let body = r#"{"events": [{"type": "message", "replyToken": "rt-1", "source": {"type": "user", "userId": "U1"}, "message": {"type": "text", "id": "m-1", "text": "ping"}}]}"#;

    let client = reqwest::Client::new();
    let resp = client
        .post(format!("{}/callback", base))
        .header(SIGNATURE_HEADER, sign(body))
        .body(body)
        .send()
        .await
        .expect("POST /callback");

    assert_eq!(resp.status().as_u16(), 200);
    assert_eq!(resp.text().await.expect("body"), "OK");

    let calls = sender.calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, "rt-1");
    match &calls[0].1[0] {
        OutboundMessage::Text { text } => assert_eq!(text, "ping"),
    }
}

#[tokio::test]
async fn callback_without_signature_is_rejected() {
    let (base, sender) = spawn_server().await;

    let client = reqwest::Client::new();
    let resp = client
        .post(format!("{}/callback", base))
        .body(r#"{"events": []}"#)
        .send()
        .await
        .expect("POST /callback");

    assert_eq!(resp.status().as_u16(), 400);
    assert_eq!(resp.text().await.expect("body"), "Bad Request");
    assert!(sender.calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn callback_with_invalid_signature_is_rejected() {
    let (base, sender) = spawn_server().await;

    let client = reqwest::Client::new();
    let resp = client
        .post(format!("{}/callback", base))
        .header(SIGNATURE_HEADER, "bogus")
        .body(r#"{"events": []}"#)
        .send()
        .await
        .expect("POST /callback");

    assert_eq!(resp.status().as_u16(), 400);
    assert_eq!(resp.text().await.expect("body"), "Invalid signature");
    assert!(sender.calls.lock().unwrap().is_empty());
}
