//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs and making requests.

use contracts::shared::ValidationErrors;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use std::fmt;

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using port 3000 for the backend server.
///
/// # Returns
/// - API base URL like "http://localhost:3000" or "https://example.com:3000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/api/stores/3");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Ошибка обращения к API
#[derive(Debug, Clone, PartialEq)]
pub enum FetchError {
    /// 422 с ошибками по полям
    Validation(ValidationErrors),
    NotFound,
    Status(u16),
    Network(String),
    Parse(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Validation(e) => write!(f, "Ошибка валидации: {}", e.message),
            FetchError::NotFound => write!(f, "Запись не найдена"),
            FetchError::Status(code) => write!(f, "Ошибка сервера: {}", code),
            FetchError::Network(e) => write!(f, "Ошибка сети: {}", e),
            FetchError::Parse(e) => write!(f, "Ошибка парсинга: {}", e),
        }
    }
}

async fn check_status(response: Response) -> Result<Response, FetchError> {
    match response.status() {
        200..=299 => Ok(response),
        404 => Err(FetchError::NotFound),
        422 => match response.json::<ValidationErrors>().await {
            Ok(errors) => Err(FetchError::Validation(errors)),
            Err(e) => Err(FetchError::Parse(e.to_string())),
        },
        code => Err(FetchError::Status(code)),
    }
}

/// GET запрос с разбором JSON
pub async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T, FetchError> {
    let response = Request::get(url)
        .header("Accept", "application/json")
        .header("Cache-Control", "no-cache, no-store, must-revalidate")
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;
    let response = check_status(response).await?;
    response
        .json::<T>()
        .await
        .map_err(|e| FetchError::Parse(e.to_string()))
}

/// DELETE запрос; тело ответа не читается
pub async fn delete(url: &str) -> Result<(), FetchError> {
    let response = Request::delete(url)
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;
    check_status(response).await.map(|_| ())
}
