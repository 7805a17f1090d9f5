//! Stateless request builder and response parser for the state API.
//!
//! # Design
//! `StateApi` holds only the endpoint and carries no mutable state between
//! calls. Each operation is split into a `build_*` method that validates the
//! key and produces an `HttpRequest`, and a `parse_*` method that consumes the
//! `HttpResponse`. Whoever sits in between executes the round-trip, which
//! keeps this layer deterministic and free of I/O.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::StateError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::key::validate_key;
use crate::types::StateItem;

#[derive(Debug, Clone)]
pub struct StateApi {
    endpoint: String,
}

impl StateApi {
    pub fn new(endpoint: &str) -> Self {
        Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// GET `<endpoint>/state/<store>/<key>`. The store name is not validated.
    pub fn build_get_state(&self, store: &str, key: &str) -> Result<HttpRequest, StateError> {
        let key = validate_key(key)?;
        Ok(HttpRequest {
            method: HttpMethod::Get,
            url: format!("{}/state/{store}/{key}", self.endpoint),
            headers: Vec::new(),
            body: None,
        })
    }

    /// POST `<endpoint>/state/<store>` with a one-element `[{key, value}]` body.
    pub fn build_set_state<V>(
        &self,
        store: &str,
        key: &str,
        value: &V,
    ) -> Result<HttpRequest, StateError>
    where
        V: Serialize + ?Sized,
    {
        let key = validate_key(key)?;
        let items = [StateItem {
            key: key.to_string(),
            value,
        }];
        let body = serde_json::to_string(&items).map_err(StateError::Serialization)?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            url: format!("{}/state/{store}", self.endpoint),
            headers: vec![("Content-Type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    /// `Ok(None)` for 204 or an empty 2xx body, the decoded value otherwise.
    pub fn parse_get_state<V>(&self, response: HttpResponse) -> Result<Option<V>, StateError>
    where
        V: DeserializeOwned,
    {
        if !response.is_success() {
            return Err(StateError::GetFailed {
                status: response.status,
                body: response.body,
            });
        }
        if response.status == 204 || response.body.is_empty() {
            return Ok(None);
        }
        serde_json::from_str(&response.body)
            .map(Some)
            .map_err(StateError::Deserialization)
    }

    pub fn parse_set_state(&self, response: HttpResponse) -> Result<(), StateError> {
        if response.is_success() {
            return Ok(());
        }
        Err(StateError::SetFailed {
            status: response.status,
            body: response.body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::{json, Value};

    fn api() -> StateApi {
        StateApi::new("http://localhost:3500/v1.0")
    }

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Order {
        id: u32,
        item: String,
    }

    #[test]
    fn build_get_state_produces_correct_request() {
        let req = api().build_get_state("statestore", "order-1").unwrap();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.url, "http://localhost:3500/v1.0/state/statestore/order-1");
        assert!(req.headers.is_empty());
        assert!(req.body.is_none());
    }

    #[test]
    fn build_get_state_passes_store_through_verbatim() {
        let req = api().build_get_state("my store", "k").unwrap();
        assert_eq!(req.url, "http://localhost:3500/v1.0/state/my store/k");
    }

    #[test]
    fn build_get_state_rejects_invalid_key() {
        let err = api().build_get_state("statestore", "../etc").unwrap_err();
        assert!(matches!(err, StateError::InvalidKey { .. }));
    }

    #[test]
    fn build_set_state_produces_exact_body() {
        let req = api()
            .build_set_state("store1", "k1", &json!({"a": 1}))
            .unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.url, "http://localhost:3500/v1.0/state/store1");
        assert_eq!(
            req.headers,
            vec![("Content-Type".to_string(), "application/json".to_string())]
        );
        assert_eq!(req.body.as_deref(), Some(r#"[{"key":"k1","value":{"a":1}}]"#));
    }

    #[test]
    fn build_set_state_serializes_typed_values() {
        let order = Order {
            id: 7,
            item: "tea".to_string(),
        };
        let req = api().build_set_state("orders", "order_7", &order).unwrap();
        let body: Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, json!([{"key": "order_7", "value": {"id": 7, "item": "tea"}}]));
    }

    #[test]
    fn build_set_state_accepts_unsized_values() {
        let req = api().build_set_state("s", "k", "plain").unwrap();
        assert_eq!(req.body.as_deref(), Some(r#"[{"key":"k","value":"plain"}]"#));
    }

    #[test]
    fn build_set_state_rejects_invalid_key() {
        let err = api().build_set_state("s", "", &1).unwrap_err();
        assert!(matches!(err, StateError::InvalidKey { .. }));
    }

    #[test]
    fn build_set_state_reports_unserializable_values() {
        use std::collections::HashMap;

        let mut value = HashMap::new();
        value.insert((1, 2), "tuple keys are not valid JSON object keys");
        let err = api().build_set_state("s", "k", &value).unwrap_err();
        assert!(matches!(err, StateError::Serialization(_)));
    }

    #[test]
    fn parse_get_state_no_content_is_absent() {
        let response = HttpResponse::new(204, r#"{"ignored":true}"#);
        let value: Option<Value> = api().parse_get_state(response).unwrap();
        assert!(value.is_none());
    }

    #[test]
    fn parse_get_state_empty_body_is_absent() {
        let value: Option<Value> = api().parse_get_state(HttpResponse::new(200, "")).unwrap();
        assert!(value.is_none());
    }

    #[test]
    fn parse_get_state_decodes_json() {
        let value: Option<Value> = api()
            .parse_get_state(HttpResponse::new(200, r#"{"a":1}"#))
            .unwrap();
        assert_eq!(value, Some(json!({"a": 1})));
    }

    #[test]
    fn parse_get_state_decodes_typed_values() {
        let order: Option<Order> = api()
            .parse_get_state(HttpResponse::new(200, r#"{"id":3,"item":"cake"}"#))
            .unwrap();
        assert_eq!(
            order,
            Some(Order {
                id: 3,
                item: "cake".to_string()
            })
        );
    }

    #[test]
    fn parse_get_state_bad_json() {
        let err = api()
            .parse_get_state::<Value>(HttpResponse::new(200, "not json"))
            .unwrap_err();
        assert!(matches!(err, StateError::Deserialization(_)));
    }

    #[test]
    fn parse_get_state_failure_statuses() {
        for status in [400, 404, 500, 503] {
            let err = api()
                .parse_get_state::<Value>(HttpResponse::new(status, "err"))
                .unwrap_err();
            assert!(
                matches!(err, StateError::GetFailed { status: s, .. } if s == status),
                "status {status}"
            );
        }
    }

    #[test]
    fn parse_set_state_success_statuses() {
        for status in [200, 201, 204] {
            assert!(api().parse_set_state(HttpResponse::new(status, "")).is_ok());
        }
    }

    #[test]
    fn parse_set_state_failure_statuses() {
        for status in [400, 500] {
            let err = api()
                .parse_set_state(HttpResponse::new(status, "bad"))
                .unwrap_err();
            assert!(matches!(err, StateError::SetFailed { status: s, .. } if s == status));
        }
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let api = StateApi::new("http://localhost:3500/v1.0/");
        let req = api.build_get_state("s", "k").unwrap();
        assert_eq!(req.url, "http://localhost:3500/v1.0/state/s/k");
    }
}
