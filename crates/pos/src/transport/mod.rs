//! Mock API transport.
//!
//! A test double for the backend the POS would eventually talk to. Requests
//! are matched against an ordered route table (first match wins) over the
//! in-memory fixture set; responses use the `{success, message, data, meta}`
//! envelope. The transport performs no I/O and holds no per-call state.
//!
//! [`ApiClient`] wraps the transport with the simulated round-trip delay and
//! typed decoding; front-ends talk to the client, tests may poke the
//! transport directly.

pub mod fixtures;

use arjuna_core::Rupiah;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use thiserror::Error;
use tokio::time::sleep;

use crate::catalog::{Category, Item};
use crate::models::User;
use crate::reports::DashboardSummary;

/// Errors returned by the mock API, carrying HTTP-like status codes.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// Login rejected (401). The message is user-facing text.
    #[error("{0}")]
    Unauthorized(String),

    /// No route matched (404).
    #[error("Endpoint not found in Mock: {0}")]
    RouteNotFound(String),

    /// Request body did not have the expected shape (400).
    #[error("bad request: {0}")]
    BadRequest(String),

    /// A response payload failed to decode (mock bug, 500).
    #[error("invalid mock response: {0}")]
    InvalidResponse(String),
}

impl ApiError {
    /// The HTTP-like status code of this error.
    #[must_use]
    pub const fn status(&self) -> u16 {
        match self {
            Self::Unauthorized(_) => 401,
            Self::RouteNotFound(_) => 404,
            Self::BadRequest(_) => 400,
            Self::InvalidResponse(_) => 500,
        }
    }
}

/// Request method, mirroring the subset of HTTP the mock understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Get => write!(f, "GET"),
            Self::Post => write!(f, "POST"),
        }
    }
}

/// A request into the mock transport.
#[derive(Debug, Clone)]
pub struct Request {
    pub method: Method,
    pub path: String,
    pub body: Value,
}

impl Request {
    /// Build a GET request.
    #[must_use]
    pub fn get(path: &str) -> Self {
        Self {
            method: Method::Get,
            path: path.to_owned(),
            body: Value::Null,
        }
    }

    /// Build a POST request with a JSON body.
    #[must_use]
    pub fn post(path: &str, body: Value) -> Self {
        Self {
            method: Method::Post,
            path: path.to_owned(),
            body,
        }
    }
}

/// Pagination info attached to list responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    pub current_page: u32,
    pub total_pages: u32,
    pub total_items: u32,
}

/// The response envelope used by every mock endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope {
    pub success: bool,
    pub message: String,
    pub data: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<PageMeta>,
}

impl Envelope {
    fn ok(data: Value) -> Self {
        Self {
            success: true,
            message: "Operation successful (MOCK)".to_owned(),
            data,
            meta: None,
        }
    }

    fn ok_with_meta(data: Value, meta: PageMeta) -> Self {
        Self {
            meta: Some(meta),
            ..Self::ok(data)
        }
    }
}

/// Successful login payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginData {
    pub user: User,
    pub token: String,
}

/// Echo returned by the transaction-create endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionEcho {
    pub transaction_id: String,
    pub created_at: String,
    pub grand_total: Rupiah,
    pub cashier_name: String,
}

#[derive(Deserialize)]
struct LoginRequest {
    email: String,
    password: String,
}

type Handler = fn(&MockTransport, &Request) -> Result<Envelope, ApiError>;

struct Route {
    method: Method,
    pattern: &'static str,
    handler: Handler,
}

/// The mock transport: an ordered route table over the fixture set.
pub struct MockTransport {
    routes: Vec<Route>,
    users: Vec<User>,
    categories: Vec<Category>,
    items: Vec<Item>,
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl MockTransport {
    /// Build the transport with the standard fixtures and route table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            // Ordered: first match wins.
            routes: vec![
                Route {
                    method: Method::Post,
                    pattern: "/auth/login",
                    handler: Self::handle_login,
                },
                Route {
                    method: Method::Get,
                    pattern: "/categories",
                    handler: Self::handle_categories,
                },
                Route {
                    method: Method::Get,
                    pattern: "/items",
                    handler: Self::handle_items,
                },
                Route {
                    method: Method::Get,
                    pattern: "/dashboard",
                    handler: Self::handle_dashboard,
                },
                Route {
                    method: Method::Post,
                    pattern: "/transactions",
                    handler: Self::handle_create_transaction,
                },
            ],
            users: fixtures::users(),
            categories: fixtures::categories(),
            items: fixtures::items(),
        }
    }

    /// Dispatch a request against the route table.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::RouteNotFound`] when nothing matches, or whatever
    /// the matched handler returns.
    pub fn handle(&self, request: &Request) -> Result<Envelope, ApiError> {
        // Tolerate a versioned base path, as the real client would send.
        let path = request
            .path
            .strip_prefix("/v1")
            .unwrap_or(&request.path);

        tracing::debug!(method = %request.method, path, "[MOCK API] request");

        let route = self
            .routes
            .iter()
            .find(|route| route.method == request.method && path.contains(route.pattern))
            .ok_or_else(|| ApiError::RouteNotFound(request.path.clone()))?;

        (route.handler)(self, request)
    }

    fn handle_login(&self, request: &Request) -> Result<Envelope, ApiError> {
        let body: LoginRequest = serde_json::from_value(request.body.clone())
            .map_err(|e| ApiError::BadRequest(e.to_string()))?;

        let user = self
            .users
            .iter()
            .find(|user| user.email.as_str() == body.email);

        match user {
            Some(user) if body.password == fixtures::MOCK_PASSWORD => {
                let token = format!(
                    "mock-token-{}-{}",
                    user.id,
                    Utc::now().timestamp_millis()
                );
                let data = LoginData {
                    user: user.clone(),
                    token,
                };
                Ok(Envelope {
                    message: "Login Berhasil".to_owned(),
                    ..Envelope::ok(json!(data))
                })
            }
            _ => Err(ApiError::Unauthorized(
                "Email atau Password Salah!".to_owned(),
            )),
        }
    }

    fn handle_categories(&self, _request: &Request) -> Result<Envelope, ApiError> {
        Ok(Envelope::ok(json!(self.categories)))
    }

    fn handle_items(&self, _request: &Request) -> Result<Envelope, ApiError> {
        let total = u32::try_from(self.items.len()).unwrap_or(u32::MAX);
        Ok(Envelope::ok_with_meta(
            json!(self.items),
            PageMeta {
                current_page: 1,
                total_pages: 1,
                total_items: total,
            },
        ))
    }

    fn handle_dashboard(&self, _request: &Request) -> Result<Envelope, ApiError> {
        Ok(Envelope::ok(json!(fixtures::dashboard_summary())))
    }

    fn handle_create_transaction(&self, request: &Request) -> Result<Envelope, ApiError> {
        let grand_total = request
            .body
            .get("total")
            .and_then(Value::as_i64)
            .unwrap_or(0);
        let cashier_name = request
            .body
            .get("cashier_name")
            .and_then(Value::as_str)
            .unwrap_or("Andi Kasir")
            .to_owned();

        let echo = TransactionEcho {
            transaction_id: format!("TRX-{}", Utc::now().timestamp_millis()),
            created_at: Utc::now().to_rfc3339(),
            grand_total: Rupiah::new(grand_total),
            cashier_name,
        };
        Ok(Envelope::ok(json!(echo)))
    }
}

/// Typed client over the mock transport.
///
/// Adds the simulated round-trip delay (to approximate real UX; the exact
/// value is not a contract) and decodes envelope payloads.
pub struct ApiClient {
    transport: MockTransport,
    latency: std::time::Duration,
}

impl ApiClient {
    /// Create a client with the given simulated latency.
    #[must_use]
    pub const fn new(transport: MockTransport, latency: std::time::Duration) -> Self {
        Self { transport, latency }
    }

    /// A client with no latency, for tests.
    #[must_use]
    pub fn instant() -> Self {
        Self::new(MockTransport::new(), std::time::Duration::ZERO)
    }

    async fn request(&self, request: Request) -> Result<Envelope, ApiError> {
        if !self.latency.is_zero() {
            sleep(self.latency).await;
        }
        self.transport.handle(&request)
    }

    async fn request_decoded<T: serde::de::DeserializeOwned>(
        &self,
        request: Request,
    ) -> Result<T, ApiError> {
        let envelope = self.request(request).await?;
        serde_json::from_value(envelope.data)
            .map_err(|e| ApiError::InvalidResponse(e.to_string()))
    }

    /// `POST /auth/login`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Unauthorized`] for any email/password pair that is
    /// not an exact fixture match.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginData, ApiError> {
        self.request_decoded(Request::post(
            "/auth/login",
            json!({ "email": email, "password": password }),
        ))
        .await
    }

    /// `GET /items`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidResponse`] if the payload fails to decode.
    pub async fn fetch_items(&self) -> Result<Vec<Item>, ApiError> {
        self.request_decoded(Request::get("/items")).await
    }

    /// `GET /categories`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidResponse`] if the payload fails to decode.
    pub async fn fetch_categories(&self) -> Result<Vec<Category>, ApiError> {
        self.request_decoded(Request::get("/categories")).await
    }

    /// `GET /dashboard/summary`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidResponse`] if the payload fails to decode.
    pub async fn dashboard_summary(&self) -> Result<DashboardSummary, ApiError> {
        self.request_decoded(Request::get("/dashboard/summary"))
            .await
    }

    /// `POST /transactions`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidResponse`] if the echo fails to decode.
    pub async fn create_transaction(&self, payload: Value) -> Result<TransactionEcho, ApiError> {
        self.request_decoded(Request::post("/transactions", payload))
            .await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_login_success_returns_user_and_token() {
        let transport = MockTransport::new();
        let envelope = transport
            .handle(&Request::post(
                "/auth/login",
                json!({ "email": "budi@arjuna.digital", "password": "123456" }),
            ))
            .unwrap();

        assert!(envelope.success);
        let data: LoginData = serde_json::from_value(envelope.data).unwrap();
        assert_eq!(data.user.name, "Budi Santoso");
        assert!(data.token.starts_with("mock-token-1-"));
    }

    #[test]
    fn test_login_wrong_password_is_unauthorized() {
        let transport = MockTransport::new();
        let err = transport
            .handle(&Request::post(
                "/auth/login",
                json!({ "email": "budi@arjuna.digital", "password": "654321" }),
            ))
            .unwrap_err();

        assert_eq!(err.status(), 401);
    }

    #[test]
    fn test_login_unknown_email_is_unauthorized() {
        let transport = MockTransport::new();
        let err = transport
            .handle(&Request::post(
                "/auth/login",
                json!({ "email": "tamu@example.com", "password": "123456" }),
            ))
            .unwrap_err();

        assert!(matches!(err, ApiError::Unauthorized(_)));
        assert_eq!(err.status(), 401);
    }

    #[test]
    fn test_login_requires_exact_email_match() {
        let transport = MockTransport::new();
        // A prefix of a registered address must not match.
        let err = transport
            .handle(&Request::post(
                "/auth/login",
                json!({ "email": "budi@arjuna", "password": "123456" }),
            ))
            .unwrap_err();
        assert_eq!(err.status(), 401);
    }

    #[test]
    fn test_unmatched_route_is_404() {
        let transport = MockTransport::new();
        let err = transport
            .handle(&Request::get("/warehouse/stock"))
            .unwrap_err();
        assert!(matches!(err, ApiError::RouteNotFound(_)));
        assert_eq!(err.status(), 404);
    }

    #[test]
    fn test_method_mismatch_is_404() {
        let transport = MockTransport::new();
        let err = transport.handle(&Request::get("/auth/login")).unwrap_err();
        assert_eq!(err.status(), 404);
    }

    #[test]
    fn test_items_carry_pagination_meta() {
        let transport = MockTransport::new();
        let envelope = transport.handle(&Request::get("/items")).unwrap();
        let meta = envelope.meta.unwrap();
        assert_eq!(meta.current_page, 1);
        assert_eq!(meta.total_items as usize, fixtures::items().len());
    }

    #[test]
    fn test_versioned_base_path_is_tolerated() {
        let transport = MockTransport::new();
        assert!(transport.handle(&Request::get("/v1/categories")).is_ok());
    }

    #[tokio::test]
    async fn test_client_decodes_catalog() {
        let client = ApiClient::instant();
        let items = client.fetch_items().await.unwrap();
        let categories = client.fetch_categories().await.unwrap();
        assert!(!items.is_empty());
        assert_eq!(categories.len(), 3);
    }

    #[tokio::test]
    async fn test_client_transaction_echo() {
        let client = ApiClient::instant();
        let echo = client
            .create_transaction(json!({ "total": 180_000, "cashier_name": "Andi Kasir" }))
            .await
            .unwrap();
        assert!(echo.transaction_id.starts_with("TRX-"));
        assert_eq!(echo.grand_total, Rupiah::new(180_000));
        assert_eq!(echo.cashier_name, "Andi Kasir");
    }

    #[tokio::test]
    async fn test_client_dashboard_summary() {
        let client = ApiClient::instant();
        let summary = client.dashboard_summary().await.unwrap();
        assert_eq!(summary.transaction_count, 24);
        assert_eq!(summary.top_selling_item, "Flexi China 280gsm");
    }
}
