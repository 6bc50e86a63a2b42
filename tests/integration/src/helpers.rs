//! Test helpers for integration tests
//!
//! Provides utilities for spawning test servers and making HTTP requests.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Result;
use reqwest::{multipart, Client, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use shelvia_api::{create_app, create_app_state};
use shelvia_common::AppConfig;
use tempfile::TempDir;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// API key configured on every test server unless overridden
pub const TEST_API_KEY: &str = "supersecretkey";

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    upload_dir: TempDir,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a server with the test API key configured
    pub async fn start() -> Result<Self> {
        Self::start_with_env(&[("SHELVIA_API_KEY", TEST_API_KEY)]).await
    }

    /// Start a server with extra environment values
    ///
    /// The database is always in-memory and uploads go to a fresh temp dir.
    pub async fn start_with_env(vars: &[(&str, &str)]) -> Result<Self> {
        let upload_dir = tempfile::tempdir()?;

        let mut env: HashMap<String, String> = HashMap::from([
            ("SHELVIA_DATABASE_URL".to_string(), "sqlite::memory:".to_string()),
            (
                "UPLOAD_DIR".to_string(),
                upload_dir.path().to_string_lossy().to_string(),
            ),
            ("RATE_LIMIT_REQUESTS_PER_SECOND".to_string(), "1000".to_string()),
            ("RATE_LIMIT_BURST".to_string(), "1000".to_string()),
        ]);
        for (name, value) in vars {
            env.insert((*name).to_string(), (*value).to_string());
        }

        let config = AppConfig::from_lookup(|name| env.get(name).cloned())
            .map_err(|e| anyhow::anyhow!("Config error: {e}"))?;

        let state = create_app_state(config).await?;
        let app = create_app(state)?;

        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        let client = Client::builder().timeout(Duration::from_secs(10)).build()?;

        Ok(Self {
            addr,
            client,
            upload_dir,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url(), path)
    }

    /// Directory the server writes attachments to
    pub fn upload_dir(&self) -> &std::path::Path {
        self.upload_dir.path()
    }

    /// Make a GET request without a key
    pub async fn get(&self, path: &str) -> Result<Response> {
        Ok(self.client.get(self.url(path)).send().await?)
    }

    /// Make a GET request with an API key
    pub async fn get_with_key(&self, path: &str, key: &str) -> Result<Response> {
        Ok(self
            .client
            .get(self.url(path))
            .header("x-api-key", key)
            .send()
            .await?)
    }

    /// Make a POST request with JSON body and an API key
    pub async fn post_with_key<T: Serialize>(&self, path: &str, key: &str, body: &T) -> Result<Response> {
        Ok(self
            .client
            .post(self.url(path))
            .header("x-api-key", key)
            .json(body)
            .send()
            .await?)
    }

    /// Make a POST request with JSON body and no key
    pub async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        Ok(self.client.post(self.url(path)).json(body).send().await?)
    }

    /// POST a raw body labelled as JSON
    pub async fn post_raw(&self, path: &str, key: &str, body: &'static str) -> Result<Response> {
        Ok(self
            .client
            .post(self.url(path))
            .header("x-api-key", key)
            .header("content-type", "application/json")
            .body(body)
            .send()
            .await?)
    }

    /// Make a PATCH request with JSON body and an API key
    pub async fn patch_with_key<T: Serialize>(&self, path: &str, key: &str, body: &T) -> Result<Response> {
        Ok(self
            .client
            .patch(self.url(path))
            .header("x-api-key", key)
            .json(body)
            .send()
            .await?)
    }

    /// Upload bytes as the multipart field `file`
    pub async fn upload(&self, defect_id: i64, key: &str, filename: &str, bytes: Vec<u8>) -> Result<Response> {
        let part = multipart::Part::bytes(bytes).file_name(filename.to_string());
        let form = multipart::Form::new().part("file", part);

        Ok(self
            .client
            .post(self.url(&format!("/defect/{defect_id}/upload")))
            .header("x-api-key", key)
            .multipart(form)
            .send()
            .await?)
    }
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(response: Response, expected_status: StatusCode) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!("Expected status {expected_status}, got {status}. Body: {body}");
    }
    Ok(response.json().await?)
}

/// Assert an error response and return its `error.code`
pub async fn assert_error(response: Response, expected_status: StatusCode) -> Result<String> {
    let body: serde_json::Value = assert_json(response, expected_status).await?;
    body["error"]["code"]
        .as_str()
        .map(ToString::to_string)
        .ok_or_else(|| anyhow::anyhow!("Missing error code in {body}"))
}

/// Assert response status without parsing body
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!("Expected status {expected_status}, got {status}. Body: {body}");
    }
    Ok(())
}
