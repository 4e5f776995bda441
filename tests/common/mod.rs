#![allow(dead_code)]

use anyhow::{Context, Result};
use reqwest::{Client, Method, RequestBuilder, Response};
use serde_json::Value;

use content_api::auth::Role;
use content_api::config::AppConfig;
use content_api::{app, AppState};

pub const ADMIN: &str = "admin-1";
pub const USER_X: &str = "user-x";
pub const USER_Y: &str = "user-y";

/// In-process server bound to a free local port; dropped with the test runtime
pub struct TestServer {
    pub base_url: String,
    pub state: AppState,
    client: Client,
}

impl TestServer {
    pub async fn spawn() -> Result<Self> {
        Self::spawn_with(AppConfig::development()).await
    }

    pub async fn spawn_with_limit(limit: u64) -> Result<Self> {
        let mut config = AppConfig::development();
        config.play.sessions_limit = limit;
        Self::spawn_with(config).await
    }

    pub async fn spawn_with(mut config: AppConfig) -> Result<Self> {
        let port = portpicker::pick_unused_port().context("failed to pick free port")?;
        config.server.host = "127.0.0.1".to_string();
        config.server.port = port;

        let bind_addr = config.bind_addr();
        let state = AppState::new(config)?;
        let listener = tokio::net::TcpListener::bind(&bind_addr)
            .await
            .with_context(|| format!("failed to bind {}", bind_addr))?;

        let router = app(state.clone());
        tokio::spawn(async move {
            let _ = axum::serve(listener, router).await;
        });

        Ok(Self {
            base_url: format!("http://{}", bind_addr),
            state,
            client: Client::new(),
        })
    }

    pub fn token(&self, user: &str, role: Role) -> String {
        self.state.tokens.issue(user, role).expect("token issue")
    }

    pub fn admin_token(&self) -> String {
        self.token(ADMIN, Role::Admin)
    }

    pub fn user_token(&self, user: &str) -> String {
        self.token(user, Role::User)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Bare request without any token attached
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.client.request(method, self.url(path))
    }

    pub async fn get(&self, path: &str, token: Option<&str>) -> Result<Response> {
        let mut req = self.client.get(self.url(path));
        if let Some(token) = token {
            req = req.bearer_auth(token);
        }
        Ok(req.send().await?)
    }

    pub async fn post(&self, path: &str, token: Option<&str>, body: &Value) -> Result<Response> {
        let mut req = self.client.post(self.url(path)).json(body);
        if let Some(token) = token {
            req = req.bearer_auth(token);
        }
        Ok(req.send().await?)
    }

    pub async fn put(&self, path: &str, token: Option<&str>, body: &Value) -> Result<Response> {
        let mut req = self.client.put(self.url(path)).json(body);
        if let Some(token) = token {
            req = req.bearer_auth(token);
        }
        Ok(req.send().await?)
    }

    pub async fn delete(&self, path: &str, token: Option<&str>) -> Result<Response> {
        let mut req = self.client.delete(self.url(path));
        if let Some(token) = token {
            req = req.bearer_auth(token);
        }
        Ok(req.send().await?)
    }

    /// Create content as admin and return its id
    pub async fn create_content(&self, name: &str, kind: &str) -> Result<String> {
        let body = serde_json::json!({ "name": name, "type": kind });
        let res = self.post("/content", Some(&self.admin_token()), &body).await?;
        anyhow::ensure!(res.status().as_u16() == 201, "create failed: {}", res.status());

        let body = res.json::<Value>().await?;
        body["data"]["id"]
            .as_str()
            .map(str::to_string)
            .context("created content has no id")
    }
}
