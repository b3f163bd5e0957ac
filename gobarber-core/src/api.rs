//! HTTP client for the GoBarber REST API.

use chrono::Datelike;
use reqwest::{RequestBuilder, Response};
use serde::Deserialize;
use tracing::{debug, warn};
use url::Url;

use crate::availability::MonthAvailabilityItem;
use crate::config::GoBarberConfig;
use crate::dashboard::{DayRequest, MonthRequest};
use crate::error::{GoBarberError, GoBarberResult};
use crate::schedule::Appointment;
use crate::session::AuthSession;
use crate::user::{SignInCredentials, User, UserData};

/// Error body returned by the API on failure.
#[derive(Deserialize)]
struct ErrorResponse {
    message: String,
}

#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(config: &GoBarberConfig) -> GoBarberResult<Self> {
        let http = reqwest::Client::builder().timeout(config.timeout()).build()?;
        Ok(Self::with_http(http, config.base_url()?))
    }

    pub fn with_http(http: reqwest::Client, mut base_url: Url) -> Self {
        // Url::join replaces the last path segment unless the base ends in '/'.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        ApiClient {
            http,
            base_url,
            token: None,
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Token sent as `Authorization: Bearer` on every request.
    pub fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    fn url(&self, path: &str) -> GoBarberResult<Url> {
        self.base_url
            .join(path)
            .map_err(|e| GoBarberError::Config(format!("Invalid request path '{path}': {e}")))
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn send(&self, request: RequestBuilder) -> GoBarberResult<Response> {
        let resp = self.authorize(request).send().await?;
        let status = resp.status();

        if status.is_success() {
            return Ok(resp);
        }

        let message = match resp.json::<ErrorResponse>().await {
            Ok(body) => body.message,
            Err(_) => status.canonical_reason().unwrap_or("Unknown error").to_string(),
        };
        warn!(status = status.as_u16(), %message, "API request failed");

        Err(GoBarberError::Api {
            status: status.as_u16(),
            message,
        })
    }

    /// POST /sessions
    pub async fn create_session(&self, credentials: &SignInCredentials) -> GoBarberResult<AuthSession> {
        debug!(email = %credentials.email, "POST /sessions");
        let resp = self
            .send(self.http.post(self.url("sessions")?).json(credentials))
            .await?;
        Ok(resp.json().await?)
    }

    /// POST /users
    pub async fn create_user(&self, data: &UserData) -> GoBarberResult<User> {
        debug!(email = %data.email, "POST /users");
        let resp = self.send(self.http.post(self.url("users")?).json(data)).await?;
        Ok(resp.json().await?)
    }

    /// GET /providers/:id/month-availability
    pub async fn month_availability(
        &self,
        request: &MonthRequest,
    ) -> GoBarberResult<Vec<MonthAvailabilityItem>> {
        let path = format!("providers/{}/month-availability", request.provider_id);
        debug!(%path, month = %request.month, "GET month availability");

        let resp = self
            .send(self.http.get(self.url(&path)?).query(&[
                ("year", request.month.year().to_string()),
                ("month", request.month.month().to_string()),
            ]))
            .await?;
        Ok(resp.json().await?)
    }

    /// GET /appointments/me
    pub async fn provider_appointments(&self, request: DayRequest) -> GoBarberResult<Vec<Appointment>> {
        debug!(date = %request.date, "GET /appointments/me");
        let resp = self
            .send(self.http.get(self.url("appointments/me")?).query(&[
                ("year", request.date.year().to_string()),
                ("month", request.date.month().to_string()),
                ("day", request.date.day().to_string()),
            ]))
            .await?;
        Ok(resp.json().await?)
    }
}
