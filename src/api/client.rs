use super::model::{
    CreateRatingRequest, CreateServiceRequest, CreateServiceResponse, LoginRequest, LoginResponse,
    ServicesResponse, SignupRequest, UserDetail, UserResponse, UsersResponse,
};
use crate::backlog::BacklogSource;
use crate::errors::{AppError, AppResult};
use crate::models::{Ticket, User};
use reqwest::{Client, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

/// Thin wrapper around `reqwest::Client` bound to one backend base URL.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: &str, timeout: Duration) -> AppResult<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
        })
    }

    /// Send `Authorization: Bearer <token>` on every request.
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|t| !t.trim().is_empty());
        self
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, req: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    async fn send(&self, path: &str, req: RequestBuilder) -> AppResult<Response> {
        let response = self.authorize(req).send().await?;
        let status = response.status();
        debug!(path, status = status.as_u16(), "backend response");

        if !status.is_success() {
            return Err(AppError::Status {
                endpoint: path.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(response)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> AppResult<T> {
        let response = self.send(path, self.http.get(self.url(path))).await?;
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> AppResult<T> {
        let response = self
            .send(path, self.http.post(self.url(path)).json(body))
            .await?;
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// POST whose response body only acknowledges success.
    async fn post_ack<B: Serialize>(&self, path: &str, body: &B) -> AppResult<()> {
        self.send(path, self.http.post(self.url(path)).json(body))
            .await?;
        Ok(())
    }

    pub async fn login(&self, req: &LoginRequest) -> AppResult<LoginResponse> {
        self.post("/login", req).await
    }

    pub async fn signup(&self, req: &SignupRequest) -> AppResult<()> {
        self.post_ack("/signup", req).await
    }

    /// Create a ticket and return its id.
    pub async fn create_service(&self, req: &CreateServiceRequest) -> AppResult<i64> {
        let created: CreateServiceResponse = self.post("/create-service", req).await?;
        Ok(created.service.id)
    }

    pub async fn create_rating(&self, req: &CreateRatingRequest) -> AppResult<()> {
        self.post_ack("/create-rating", req).await
    }

    pub async fn user(&self, id: &str) -> AppResult<UserDetail> {
        let resp: UserResponse = self.get(&format!("/user/{}", id.trim())).await?;
        Ok(resp.user)
    }

    pub async fn users(&self) -> AppResult<Vec<User>> {
        let resp: UsersResponse = self.get("/users").await?;
        Ok(resp.users)
    }

    pub async fn services(&self) -> AppResult<Vec<Ticket>> {
        let resp: ServicesResponse = self.get("/services").await?;
        Ok(resp.services)
    }
}

impl BacklogSource for ApiClient {
    async fn fetch_tickets(&self) -> AppResult<Vec<Ticket>> {
        self.services().await
    }

    async fn fetch_users(&self) -> AppResult<Vec<User>> {
        self.users().await
    }
}
