//! Tickr HTTP client implementation.

use reqwest::{Client, Method, StatusCode};
use serde::Serialize;
use serde_json::Value;

use crate::error::ClientError;
use crate::types::{Counter, CreateCounter, IncrementBody, UpdateCounter};

/// Production origin of the tickr service.
pub const DEFAULT_BASE_URL: &str = "https://tickr.cc";

/// Tickr API client.
///
/// Holds an immutable base URL and an optional bearer credential; each
/// operation performs exactly one HTTP request and decodes one JSON
/// response. The client keeps no per-counter state between calls, so a
/// single instance can be shared and awaited from concurrent tasks.
#[derive(Debug, Clone)]
pub struct TickrClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl TickrClient {
    /// Create a client for the production service.
    ///
    /// Pass `None` to work unauthenticated; public counters can still be
    /// read and incremented, subject to server policy.
    #[must_use]
    pub fn new(api_key: Option<String>) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Create a client against a specific service origin.
    ///
    /// A trailing slash on `base_url` is stripped.
    #[must_use]
    pub fn with_base_url(api_key: Option<String>, base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key,
        }
    }

    /// Create a new counter. The service requires a credential for this.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns a
    /// non-success status.
    pub async fn create_counter(&self, args: CreateCounter) -> Result<Counter, ClientError> {
        let value = self
            .request(Method::POST, "/api/counters", Some(&args))
            .await?;
        Ok(Counter::from_response(value))
    }

    /// Fetch a counter by slug. Works without a credential for public
    /// counters.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns a
    /// non-success status.
    pub async fn get_counter(&self, slug: &str) -> Result<Counter, ClientError> {
        let value = self
            .request::<()>(Method::GET, &format!("/api/counters/{slug}"), None)
            .await?;
        Ok(Counter::from_response(value))
    }

    /// Fetch all counters for the authenticated user.
    ///
    /// An array body yields one normalized counter per element, in server
    /// order; a single-object body yields a one-element vec.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns a
    /// non-success status.
    pub async fn list_counters(&self) -> Result<Vec<Counter>, ClientError> {
        let value = self.request::<()>(Method::GET, "/api/counters", None).await?;
        match value {
            Value::Array(items) => Ok(items.into_iter().map(Counter::from_response).collect()),
            other => Ok(vec![Counter::from_response(other)]),
        }
    }

    /// Increment a counter by one.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns a
    /// non-success status.
    pub async fn increment_counter(&self, slug: &str) -> Result<Counter, ClientError> {
        self.increment_counter_by(slug, 1).await
    }

    /// Increment a counter by a given amount.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns a
    /// non-success status.
    pub async fn increment_counter_by(
        &self,
        slug: &str,
        increment_by: i64,
    ) -> Result<Counter, ClientError> {
        let body = IncrementBody { increment_by };
        let value = self
            .request(
                Method::POST,
                &format!("/api/counters/{slug}/increment"),
                Some(&body),
            )
            .await?;
        Ok(Counter::from_response(value))
    }

    /// Update a counter's name, value, privacy, or read-only status.
    /// Owner-only on the server side.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidArgument`] without sending anything if
    /// `args` has no field set; otherwise errors if the request fails or
    /// the server returns a non-success status.
    pub async fn update_counter(
        &self,
        slug: &str,
        args: UpdateCounter,
    ) -> Result<Counter, ClientError> {
        if args.is_empty() {
            return Err(ClientError::InvalidArgument(
                "at least one field must be provided to update".to_string(),
            ));
        }
        let value = self
            .request(Method::PUT, &format!("/api/counters/{slug}"), Some(&args))
            .await?;
        Ok(Counter::from_response(value))
    }

    /// Delete a counter. Owner-only on the server side; a 204 response is
    /// success.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns a
    /// non-success status.
    pub async fn delete_counter(&self, slug: &str) -> Result<(), ClientError> {
        self.request::<()>(Method::DELETE, &format!("/api/counters/{slug}"), None)
            .await?;
        Ok(())
    }

    /// Issue one request and decode the response body.
    ///
    /// Non-success statuses become [`ClientError::Api`] carrying the raw
    /// body text. A 204 returns `Value::Null` without reading the body.
    /// A success body that is not valid JSON also decodes to `Value::Null`;
    /// the parse error is logged at debug level rather than surfaced.
    async fn request<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Value, ClientError> {
        let url = format!("{}{path}", self.base_url);

        let mut builder = self
            .client
            .request(method, &url)
            .header("Content-Type", "application/json");
        if let Some(api_key) = &self.api_key {
            builder = builder.header("Authorization", format!("Bearer {api_key}"));
        }
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await?;
            return Err(ClientError::Api {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
                body,
            });
        }

        if status == StatusCode::NO_CONTENT {
            return Ok(Value::Null);
        }

        let text = response.text().await?;
        match serde_json::from_str(&text) {
            Ok(value) => Ok(value),
            Err(err) => {
                tracing::debug!(%url, %err, "discarding success body that is not valid JSON");
                Ok(Value::Null)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_creation() {
        let client = TickrClient::with_base_url(None, "http://localhost:8080");
        assert_eq!(client.base_url, "http://localhost:8080");
        assert!(client.api_key.is_none());
    }

    #[test]
    fn client_trims_trailing_slash() {
        let client = TickrClient::with_base_url(Some("key".to_string()), "http://localhost:8080/");
        assert_eq!(client.base_url, "http://localhost:8080");
    }

    #[test]
    fn client_defaults_to_production_origin() {
        let client = TickrClient::new(None);
        assert_eq!(client.base_url, DEFAULT_BASE_URL);
    }
}
