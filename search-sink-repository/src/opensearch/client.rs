//! OpenSearch client implementation.
//!
//! This module provides the concrete implementation of `SearchSinkClient`
//! using the OpenSearch Rust client. The same wire protocol is spoken by
//! Elasticsearch nodes, so either engine works as the destination.

use async_trait::async_trait;
use opensearch::{
    auth::Credentials,
    cert::CertificateValidation,
    cluster::ClusterHealthParts,
    http::request::JsonBody,
    http::transport::{SingleNodeConnectionPool, TransportBuilder},
    BulkParts, OpenSearch,
};
use serde_json::{json, Value};
use tracing::{error, info, warn};
use url::Url;

use crate::config::ConnectionConfig;
use crate::errors::SearchError;
use crate::interfaces::{BulkReport, ItemFailure, SearchSinkClient};
use search_sink_shared::BulkUnit;

/// OpenSearch implementation of the search sink client.
///
/// Constructed once at task startup from a `ConnectionConfig` and shared for
/// the task's whole lifetime; the underlying transport is safe for concurrent
/// use.
pub struct OpenSearchSinkClient {
    client: OpenSearch,
}

impl OpenSearchSinkClient {
    /// Create a new client from the given connection settings.
    ///
    /// A failure here is a startup-time configuration problem (malformed
    /// host, unusable transport), distinct from runtime submission errors.
    pub fn new(config: &ConnectionConfig) -> Result<Self, SearchError> {
        let url = config.url();
        let parsed_url =
            Url::parse(&url).map_err(|e| SearchError::connection(e.to_string()))?;

        let conn_pool = SingleNodeConnectionPool::new(parsed_url);
        let mut builder = TransportBuilder::new(conn_pool).disable_proxy();

        if let Some(auth) = &config.auth {
            builder = builder.auth(Credentials::Basic(
                auth.username.clone(),
                auth.password.clone(),
            ));
        }

        if config.danger_accept_invalid_certs {
            warn!(
                url = %url,
                "TLS certificate validation disabled; connections are open to interception"
            );
            builder = builder.cert_validation(CertificateValidation::None);
        }

        let transport = builder
            .build()
            .map_err(|e| SearchError::connection(e.to_string()))?;

        info!(url = %url, "Created search engine client");

        Ok(Self {
            client: OpenSearch::new(transport),
        })
    }

    /// Build the NDJSON body for a bulk unit: one action line naming the
    /// destination index, followed by the document line, per operation.
    fn bulk_body(unit: &BulkUnit) -> Vec<Value> {
        let mut body = Vec::with_capacity(unit.len() * 2);
        for op in unit.operations() {
            body.push(json!({"index": {"_index": op.index}}));
            body.push(Value::Object(op.document.clone()));
        }
        body
    }

    /// Interpret a bulk response body into per-item failures.
    ///
    /// The engine sets a top-level `errors` flag when any operation was
    /// rejected and reports details under `items[*].index.error`.
    fn parse_bulk_report(body: &Value) -> BulkReport {
        let errors = body
            .get("errors")
            .and_then(|e| e.as_bool())
            .unwrap_or(false);

        if !errors {
            return BulkReport::success();
        }

        let empty = Vec::new();
        let items = body
            .get("items")
            .and_then(|i| i.as_array())
            .unwrap_or(&empty);

        let item_failures = items
            .iter()
            .enumerate()
            .filter_map(|(position, item)| {
                let error = item.get("index").and_then(|i| i.get("error"))?;
                let reason = error
                    .get("reason")
                    .and_then(|r| r.as_str())
                    .map(|r| r.to_string())
                    .unwrap_or_else(|| error.to_string());
                Some(ItemFailure { position, reason })
            })
            .collect();

        BulkReport { item_failures }
    }
}

#[async_trait]
impl SearchSinkClient for OpenSearchSinkClient {
    async fn submit_bulk(&self, unit: &BulkUnit) -> Result<BulkReport, SearchError> {
        let body: Vec<JsonBody<Value>> = Self::bulk_body(unit)
            .into_iter()
            .map(Into::into)
            .collect();

        let response = self
            .client
            .bulk(BulkParts::None)
            .body(body)
            .send()
            .await
            .map_err(|e| SearchError::transport(e.to_string()))?;

        let status = response.status_code();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %error_body, "Bulk request failed");
            return Err(SearchError::transport(format!(
                "Bulk request failed with status {}: {}",
                status, error_body
            )));
        }

        let response_body: Value = response
            .json()
            .await
            .map_err(|e| SearchError::parse(e.to_string()))?;

        Ok(Self::parse_bulk_report(&response_body))
    }

    async fn health_check(&self) -> Result<bool, SearchError> {
        let response = self
            .client
            .cluster()
            .health(ClusterHealthParts::None)
            .send()
            .await
            .map_err(|e| SearchError::transport(e.to_string()))?;

        let health: Value = response
            .json()
            .await
            .map_err(|e| SearchError::parse(e.to_string()))?;

        let status = health
            .get("status")
            .and_then(|s| s.as_str())
            .unwrap_or("unknown");

        Ok(status == "green" || status == "yellow")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use search_sink_shared::BulkOperation;
    use serde_json::Map;

    fn doc(key: &str, value: i64) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert(key.to_string(), json!(value));
        map
    }

    #[test]
    fn test_bulk_body_interleaves_action_and_document() {
        let unit = BulkUnit::new(vec![
            BulkOperation {
                index: "kafka-connector-index".to_string(),
                document: doc("a", 1),
            },
            BulkOperation {
                index: "kafka-connector-index".to_string(),
                document: doc("b", 2),
            },
        ]);

        let body = OpenSearchSinkClient::bulk_body(&unit);

        assert_eq!(body.len(), 4);
        assert_eq!(body[0]["index"]["_index"], "kafka-connector-index");
        assert_eq!(body[1]["a"], 1);
        assert_eq!(body[2]["index"]["_index"], "kafka-connector-index");
        assert_eq!(body[3]["b"], 2);
    }

    #[test]
    fn test_parse_report_without_errors() {
        let body = json!({
            "took": 3,
            "errors": false,
            "items": [{"index": {"status": 201}}]
        });

        let report = OpenSearchSinkClient::parse_bulk_report(&body);
        assert!(!report.has_failures());
    }

    #[test]
    fn test_parse_report_with_item_failures() {
        let body = json!({
            "took": 5,
            "errors": true,
            "items": [
                {"index": {"status": 201}},
                {"index": {
                    "status": 400,
                    "error": {
                        "type": "mapper_parsing_exception",
                        "reason": "failed to parse field [a]"
                    }
                }},
                {"index": {"status": 201}}
            ]
        });

        let report = OpenSearchSinkClient::parse_bulk_report(&body);
        assert!(report.has_failures());
        assert_eq!(report.item_failures.len(), 1);
        assert_eq!(report.item_failures[0].position, 1);
        assert_eq!(report.item_failures[0].reason, "failed to parse field [a]");
    }

    #[test]
    fn test_parse_report_error_without_reason_falls_back() {
        let body = json!({
            "errors": true,
            "items": [
                {"index": {"status": 400, "error": {"type": "illegal_argument_exception"}}}
            ]
        });

        let report = OpenSearchSinkClient::parse_bulk_report(&body);
        assert_eq!(report.item_failures.len(), 1);
        assert!(report.item_failures[0]
            .reason
            .contains("illegal_argument_exception"));
    }

    #[test]
    fn test_parse_report_tolerates_malformed_body() {
        let report = OpenSearchSinkClient::parse_bulk_report(&json!({"errors": true}));
        assert!(!report.has_failures());
    }
}
