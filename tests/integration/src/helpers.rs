//! Test helpers for integration tests
//!
//! Provides a disposable server per test and thin request wrappers that can
//! replay a session cookie.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::time::Duration;

use anyhow::{Context, Result};
use nest_api::{create_app, create_app_state, server::run_server};
use nest_common::AppConfig;
use reqwest::{header, Client, RequestBuilder, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Secret shared by every test server
pub const TEST_JWT_SECRET: &str = "integration-test-secret";

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start an in-memory server with no route group guarded
    pub async fn start() -> Result<Self> {
        Self::start_with_config(test_config(&[])?).await
    }

    /// Start an in-memory server guarding the given route groups
    pub async fn start_guarded(groups: &str) -> Result<Self> {
        Self::start_with_config(test_config(&[("AUTH_GUARDED_ROUTES", groups)])?).await
    }

    /// Start a test server with custom config
    pub async fn start_with_config(config: AppConfig) -> Result<Self> {
        let state = create_app_state(config).await?;
        let app = create_app(state);

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            run_server(app, listener).await.ok();
        });

        // Redirects are off so 3xx responses would surface in assertions
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .redirect(reqwest::redirect::Policy::none())
            .build()?;

        Ok(Self {
            addr,
            client,
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

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        Ok(self.client.get(self.url(path)).send().await?)
    }

    /// Make a GET request replaying a session cookie
    pub async fn get_with_session(&self, path: &str, session: &Session) -> Result<Response> {
        Ok(session.attach(self.client.get(self.url(path))).send().await?)
    }

    /// Make a POST request with JSON body
    pub async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        Ok(self.client.post(self.url(path)).json(body).send().await?)
    }

    /// Make a POST request with a raw body and JSON content type
    pub async fn post_raw(&self, path: &str, body: &'static str) -> Result<Response> {
        Ok(self
            .client
            .post(self.url(path))
            .header(header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?)
    }

    /// Make a POST request with JSON body, replaying a session cookie
    pub async fn post_with_session<T: Serialize>(
        &self,
        path: &str,
        session: &Session,
        body: &T,
    ) -> Result<Response> {
        Ok(session
            .attach(self.client.post(self.url(path)))
            .json(body)
            .send()
            .await?)
    }

    /// Make a PUT request with JSON body
    pub async fn put<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        Ok(self.client.put(self.url(path)).json(body).send().await?)
    }

    /// Make a PATCH request without a body
    pub async fn patch(&self, path: &str) -> Result<Response> {
        Ok(self.client.patch(self.url(path)).send().await?)
    }

    /// Make a DELETE request
    pub async fn delete(&self, path: &str) -> Result<Response> {
        Ok(self.client.delete(self.url(path)).send().await?)
    }

    /// Issue a session for `identity` and capture the cookie the server set
    pub async fn login(&self, identity: &Value) -> Result<Session> {
        let response = self.post("/query/jwt", identity).await?;
        let set_cookie = set_cookie_header(&response)?;
        assert_status(response, StatusCode::OK).await?;

        Session::from_set_cookie(&set_cookie)
    }
}

/// Session cookie captured from a `Set-Cookie` header
#[derive(Debug, Clone)]
pub struct Session {
    /// `token=<jwt>` pair ready for a `Cookie` header
    pub pair: String,
}

impl Session {
    /// Take the `name=value` pair from a `Set-Cookie` header value
    pub fn from_set_cookie(set_cookie: &str) -> Result<Self> {
        let pair = set_cookie
            .split(';')
            .next()
            .map(str::trim)
            .filter(|p| p.starts_with("token="))
            .context("Set-Cookie does not carry the session token")?;

        Ok(Self {
            pair: pair.to_string(),
        })
    }

    fn attach(&self, request: RequestBuilder) -> RequestBuilder {
        request.header(header::COOKIE, &self.pair)
    }
}

/// Raw `Set-Cookie` header of a response
pub fn set_cookie_header(response: &Response) -> Result<String> {
    let value = response
        .headers()
        .get(header::SET_COOKIE)
        .context("response has no Set-Cookie header")?;

    Ok(value.to_str()?.to_string())
}

/// In-memory configuration, plus `overrides`
pub fn test_config(overrides: &[(&str, &str)]) -> Result<AppConfig> {
    let mut vars: HashMap<&str, String> = HashMap::from([
        ("STORE_BACKEND", "memory".to_string()),
        ("JWT_SECRET", TEST_JWT_SECRET.to_string()),
    ]);
    for (key, value) in overrides {
        vars.insert(*key, (*value).to_string());
    }

    AppConfig::from_lookup(|key| vars.get(key).cloned())
        .map_err(|e| anyhow::anyhow!("Config error: {}", e))
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(response: Response, expected_status: StatusCode) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(response.json().await?)
}

/// Assert response status without parsing body
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(())
}

/// Assert an error response and return its `error.code`
pub async fn assert_error(response: Response, expected_status: StatusCode) -> Result<String> {
    let body: Value = assert_json(response, expected_status).await?;
    body["error"]["code"]
        .as_str()
        .map(String::from)
        .context("error body has no code")
}
