//! Request and response types for the tickr client.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A counter record as returned by the tickr service.
///
/// The service owns this resource; the client never derives fields or caches
/// a copy between calls. Fields the service omitted are `None`, except the
/// two flags, which are always defaulted to `false` during normalization.
/// Keys this client does not model are kept verbatim in [`Counter::extra`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Counter {
    /// URL-safe unique identifier, assigned by the service on creation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Current value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_value: Option<i64>,
    /// Value the counter was created with.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_value: Option<i64>,
    /// Whether the counter is hidden from public listings.
    pub is_private: bool,
    /// Whether the counter rejects increments.
    pub is_readonly: bool,
    /// ID of the owning user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<String>,
    /// Creation timestamp, passed through as opaque text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// Last-update timestamp, passed through as opaque text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    /// Fields returned by the service that this client does not model.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Wire-side counter with the two flags still optional.
///
/// Absent and `false` must stay distinguishable until normalization runs, so
/// the flags are decoded as `Option<bool>` and only defaulted in
/// [`Counter::from_response`].
#[derive(Debug, Default, Deserialize)]
struct WireCounter {
    slug: Option<String>,
    name: Option<String>,
    current_value: Option<i64>,
    initial_value: Option<i64>,
    is_private: Option<bool>,
    is_readonly: Option<bool>,
    owner_id: Option<String>,
    created_at: Option<String>,
    updated_at: Option<String>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl Counter {
    /// Normalize a decoded response value into a `Counter`.
    ///
    /// Objects get `is_private`/`is_readonly` defaulted to `false` when the
    /// service omitted them; anything else (null, scalars) becomes the
    /// minimal counter carrying only the two defaulted flags.
    pub(crate) fn from_response(value: Value) -> Self {
        if !value.is_object() {
            return Self::default();
        }
        let wire: WireCounter = serde_json::from_value(value).unwrap_or_default();
        Self {
            slug: wire.slug,
            name: wire.name,
            current_value: wire.current_value,
            initial_value: wire.initial_value,
            is_private: wire.is_private.unwrap_or(false),
            is_readonly: wire.is_readonly.unwrap_or(false),
            owner_id: wire.owner_id,
            created_at: wire.created_at,
            updated_at: wire.updated_at,
            extra: wire.extra,
        }
    }
}

/// Arguments for creating a counter.
#[derive(Debug, Clone, Serialize)]
pub struct CreateCounter {
    /// Display name for the new counter.
    pub name: String,
    /// Starting value (also becomes `current_value` on the service side).
    pub initial_value: i64,
    /// Hide the counter from public listings; omitted from the request
    /// unless explicitly set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_private: Option<bool>,
    /// Reject increments; omitted from the request unless explicitly set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_readonly: Option<bool>,
}

impl CreateCounter {
    /// Arguments for a counter starting at zero with neither flag set.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            initial_value: 0,
            is_private: None,
            is_readonly: None,
        }
    }
}

/// Arguments for updating a counter; only set fields are sent.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateCounter {
    /// New display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New current value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_value: Option<i64>,
    /// New privacy flag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_private: Option<bool>,
    /// New read-only flag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_readonly: Option<bool>,
}

impl UpdateCounter {
    /// True when no field is set. An empty update is rejected locally
    /// before any request is sent.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.current_value.is_none()
            && self.is_private.is_none()
            && self.is_readonly.is_none()
    }
}

/// Body for the increment endpoint.
#[derive(Debug, Serialize)]
pub(crate) struct IncrementBody {
    pub(crate) increment_by: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn flags_defaulted_when_absent() {
        let counter = Counter::from_response(json!({
            "slug": "hits",
            "name": "Hits",
            "current_value": 3,
            "initial_value": 0,
            "owner_id": "user-1"
        }));
        assert!(!counter.is_private);
        assert!(!counter.is_readonly);
        assert_eq!(counter.slug.as_deref(), Some("hits"));
        assert_eq!(counter.current_value, Some(3));
    }

    #[test]
    fn flags_preserved_when_present() {
        let counter = Counter::from_response(json!({
            "slug": "hits",
            "is_private": true,
            "is_readonly": true
        }));
        assert!(counter.is_private);
        assert!(counter.is_readonly);
    }

    #[test]
    fn null_becomes_minimal_counter() {
        let counter = Counter::from_response(Value::Null);
        assert_eq!(counter, Counter::default());
        assert!(!counter.is_private);
        assert!(!counter.is_readonly);
        assert!(counter.slug.is_none());
    }

    #[test]
    fn scalar_becomes_minimal_counter() {
        assert_eq!(Counter::from_response(json!(42)), Counter::default());
        assert_eq!(Counter::from_response(json!("ok")), Counter::default());
    }

    #[test]
    fn unknown_fields_kept_in_extra() {
        let counter = Counter::from_response(json!({
            "slug": "hits",
            "id": 17,
            "team": "infra"
        }));
        assert_eq!(counter.extra.get("id"), Some(&json!(17)));
        assert_eq!(counter.extra.get("team"), Some(&json!("infra")));
    }

    #[test]
    fn create_serializes_defaults_without_flags() {
        let args = CreateCounter::new("Hits");
        let body = serde_json::to_value(&args).unwrap();
        assert_eq!(body, json!({"name": "Hits", "initial_value": 0}));
    }

    #[test]
    fn create_serializes_explicit_flags() {
        let mut args = CreateCounter::new("Hits");
        args.is_private = Some(false);
        let body = serde_json::to_value(&args).unwrap();
        assert_eq!(
            body,
            json!({"name": "Hits", "initial_value": 0, "is_private": false})
        );
    }

    #[test]
    fn update_serializes_only_set_fields() {
        let args = UpdateCounter {
            name: Some("Renamed".to_string()),
            ..UpdateCounter::default()
        };
        let body = serde_json::to_value(&args).unwrap();
        assert_eq!(body, json!({"name": "Renamed"}));
    }

    #[test]
    fn update_is_empty() {
        assert!(UpdateCounter::default().is_empty());
        let args = UpdateCounter {
            current_value: Some(0),
            ..UpdateCounter::default()
        };
        assert!(!args.is_empty());
    }
}
