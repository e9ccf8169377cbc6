//! Shared helpers for router-level tests.

#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use axum::body::{Body, Bytes};
use axum::http::{Method, Request, StatusCode};
use http_body_util::BodyExt;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use tokio::sync::mpsc;
use tower::ServiceExt;

use mowa::error::MessageError;
use mowa::http::{AppContext, create_router};
use mowa::messages::{MessageSender, Messenger};
use mowa::storage::StorageRoot;

/// Records every delivery attempt; optionally reports failure afterwards.
pub struct RecordingSender {
    tx: mpsc::UnboundedSender<(String, String)>,
    fail: bool,
}

#[async_trait]
impl MessageSender for RecordingSender {
    async fn send(&self, recipient: &str, message: &str) -> Result<(), MessageError> {
        let _ = self.tx.send((recipient.to_string(), message.to_string()));
        if self.fail {
            return Err(MessageError::AppleScript("Messages is not running".into()));
        }
        Ok(())
    }
}

pub struct TestApp {
    pub dir: TempDir,
    pub router: Router,
    pub sent: mpsc::UnboundedReceiver<(String, String)>,
}

impl TestApp {
    pub fn new() -> Self {
        Self::build(HashMap::new(), false)
    }

    pub fn with_groups(groups: HashMap<String, Vec<String>>) -> Self {
        Self::build(groups, false)
    }

    pub fn with_failing_sender() -> Self {
        Self::build(HashMap::new(), true)
    }

    fn build(groups: HashMap<String, Vec<String>>, fail: bool) -> Self {
        let dir = tempfile::tempdir().expect("create temp storage");
        let storage_root = StorageRoot::open(dir.path()).expect("open storage root");
        let (tx, sent) = mpsc::unbounded_channel();
        let messenger = Messenger::new(Arc::new(RecordingSender { tx, fail }), groups);
        let router = create_router(Arc::new(AppContext::new(storage_root, messenger)));

        Self { dir, router, sent }
    }

    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Bytes) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, body)
    }

    pub async fn send_json(
        &self,
        method: Method,
        uri: &str,
        body: serde_json::Value,
    ) -> (StatusCode, serde_json::Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        let (status, bytes) = self.send(request).await;
        let json = serde_json::from_slice(&bytes)
            .unwrap_or_else(|e| panic!("response is not JSON ({e}): {bytes:?}"));
        (status, json)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Bytes) {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        self.send(request).await
    }

    /// Wait for the next delivery attempt made by a background task.
    pub async fn next_sent(&mut self) -> (String, String) {
        tokio::time::timeout(Duration::from_secs(5), self.sent.recv())
            .await
            .expect("timed out waiting for a message")
            .expect("sender dropped")
    }
}
