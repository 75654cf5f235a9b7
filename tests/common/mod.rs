// tests/common/mod.rs
//! Test doubles for the Twilio REST API
//!
//! Provides a call JSON builder and a local HTTP responder that serves
//! canned pages, so the client and reporter run without the real API.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serde_json::{json, Value};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

pub const ACCOUNT_SID: &str = "AC00000000000000000000000000000000";
pub const AUTH_TOKEN: &str = "test-auth-token";

/// Builder for one call resource in the API's JSON shape
pub struct CallJsonBuilder {
    fields: serde_json::Map<String, Value>,
}

impl CallJsonBuilder {
    pub fn new(sid: &str) -> Self {
        let mut fields = serde_json::Map::new();
        fields.insert("sid".into(), json!(sid));
        fields.insert("account_sid".into(), json!(ACCOUNT_SID));
        fields.insert("date_created".into(), json!("Tue, 31 Aug 2010 20:36:28 +0000"));
        fields.insert("to".into(), json!("+14155551212"));
        fields.insert("from".into(), json!("+15017122661"));
        fields.insert("status".into(), json!("completed"));
        fields.insert("start_time".into(), json!("Tue, 31 Aug 2010 20:36:29 +0000"));
        fields.insert("end_time".into(), json!("Tue, 31 Aug 2010 20:36:44 +0000"));
        fields.insert("price".into(), json!("-0.03000"));
        fields.insert("price_unit".into(), json!("USD"));
        fields.insert("direction".into(), json!("outbound-api"));
        Self { fields }
    }

    pub fn field(mut self, key: &str, value: Value) -> Self {
        self.fields.insert(key.to_string(), value);
        self
    }

    pub fn status(self, status: &str) -> Self {
        self.field("status", json!(status))
    }

    pub fn price(self, price: Option<&str>) -> Self {
        self.field("price", json!(price))
    }

    pub fn price_unit(self, unit: &str) -> Self {
        self.field("price_unit", json!(unit))
    }

    pub fn not_started(self) -> Self {
        self.field("start_time", Value::Null)
            .field("end_time", Value::Null)
    }

    pub fn build(self) -> Value {
        Value::Object(self.fields)
    }
}

/// Wraps calls into a page body.
pub fn calls_page(calls: Vec<Value>, page: u32, next_page_uri: Option<&str>) -> String {
    json!({
        "calls": calls,
        "page": page,
        "page_size": 50,
        "next_page_uri": next_page_uri,
        "uri": format!("/2010-04-01/Accounts/{}/Calls.json", ACCOUNT_SID),
    })
    .to_string()
}

pub fn calls_path(query: &str) -> String {
    format!("/2010-04-01/Accounts/{}/Calls.json?{}", ACCOUNT_SID, query)
}

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub headers: HashMap<String, String>,
}

/// Local HTTP responder: path -> (status, body). Unknown paths get 404.
pub struct FakeTwilioServer {
    pub base_url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl FakeTwilioServer {
    pub async fn start(routes: Vec<(String, u16, String)>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        let requests = Arc::new(Mutex::new(Vec::new()));
        let routes: HashMap<String, (u16, String)> = routes
            .into_iter()
            .map(|(path, status, body)| (path, (status, body)))
            .collect();

        let recorded = requests.clone();
        tokio::spawn(async move {
            loop {
                let Ok((mut socket, _)) = listener.accept().await else {
                    break;
                };

                let mut buf = Vec::new();
                let mut chunk = [0u8; 1024];
                while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
                    match socket.read(&mut chunk).await {
                        Ok(0) | Err(_) => break,
                        Ok(n) => buf.extend_from_slice(&chunk[..n]),
                    }
                }

                let request = parse_request(&String::from_utf8_lossy(&buf));
                let (status, body) = routes
                    .get(&request.path)
                    .cloned()
                    .unwrap_or((404, r#"{"code": 20404, "message": "Not found"}"#.to_string()));
                recorded.lock().unwrap().push(request);

                let response = format!(
                    "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    reason(status),
                    body.len(),
                    body
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            }
        });

        Self { base_url, requests }
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

fn parse_request(raw: &str) -> RecordedRequest {
    let mut lines = raw.lines();
    let mut request_line = lines.next().unwrap_or_default().split_whitespace();
    let method = request_line.next().unwrap_or_default().to_string();
    let path = request_line.next().unwrap_or_default().to_string();

    let headers = lines
        .take_while(|line| !line.is_empty())
        .filter_map(|line| line.split_once(':'))
        .map(|(k, v)| (k.trim().to_ascii_lowercase(), v.trim().to_string()))
        .collect();

    RecordedRequest {
        method,
        path,
        headers,
    }
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        401 => "Unauthorized",
        403 => "Forbidden",
        404 => "Not Found",
        500 => "Internal Server Error",
        503 => "Service Unavailable",
        _ => "Unknown",
    }
}
