use anyhow::{Context, Result};
use reqwest::Client;
use rust_decimal::Decimal;

use crate::quote::{Mode, QuoteItem, checked_subtotal};

pub struct QuoteClient {
    client: Client,
    endpoint: String,
}

impl QuoteClient {
    pub fn new(endpoint: String) -> Self {
        Self {
            client: Client::new(),
            endpoint,
        }
    }

    /// Asks the quoting service for products matching `query` in `mode`.
    ///
    /// Transport failures, non-success statuses and unparseable bodies
    /// are errors. A parseable body that merely lacks usable line items
    /// is `Ok` with an empty list, which the conversation reports as
    /// "no match" rather than a failure.
    pub async fn search(&self, query: &str, mode: Mode) -> Result<Vec<QuoteItem>> {
        let url = format!("{}/search_gpt", self.endpoint.trim_end_matches('/'));

        let response = self
            .client
            .get(&url)
            .query(&[("query", query), ("mode", mode.as_str())])
            .send()
            .await
            .with_context(|| format!("Failed to connect to quote service: {url}"))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Quote request failed with status {status}: {body}");
        }

        let payload: serde_json::Value = response
            .json()
            .await
            .context("Failed to parse quote service response")?;

        Ok(parse_items(&payload))
    }
}

/// Extracts line items from a service payload, tolerating shape drift.
/// A missing `quote` field, a non-array value, malformed entries, a
/// negative price or amounts too large to total all collapse to
/// "no items".
fn parse_items(payload: &serde_json::Value) -> Vec<QuoteItem> {
    let Some(quote) = payload.get("quote") else {
        return Vec::new();
    };

    let items: Vec<QuoteItem> = serde_json::from_value(quote.clone()).unwrap_or_default();

    if items.iter().any(|item| item.price < Decimal::ZERO) {
        return Vec::new();
    }

    if checked_subtotal(&items).is_none() {
        return Vec::new();
    }

    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn mock_search(body: serde_json::Value) -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search_gpt"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&server)
            .await;
        server
    }

    #[tokio::test]
    async fn test_search_sends_query_and_mode() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search_gpt"))
            .and(query_param("query", "ceiling speakers for 3 rooms"))
            .and(query_param("mode", "Commercial"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "quote": [] })))
            .expect(1)
            .mount(&server)
            .await;

        let client = QuoteClient::new(server.uri());
        let items = client
            .search("ceiling speakers for 3 rooms", Mode::Commercial)
            .await
            .unwrap();

        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn test_search_decodes_line_items() {
        let server = mock_search(json!({
            "quote": [
                { "name": "Speaker A", "qty": 2, "price": 450 },
                { "name": "Subwoofer", "qty": 1, "price": 1799.5 },
            ]
        }))
        .await;

        let client = QuoteClient::new(server.uri());
        let items = client.search("subwoofer", Mode::Residential).await.unwrap();

        assert_eq!(
            items,
            vec![
                QuoteItem::new("Speaker A", 2, dec!(450)),
                QuoteItem::new("Subwoofer", 1, dec!(1799.5)),
            ],
        );
    }

    #[tokio::test]
    async fn test_search_treats_missing_quote_field_as_empty() {
        let server = mock_search(json!({ "results": [] })).await;

        let client = QuoteClient::new(server.uri());
        let items = client.search("amps", Mode::Residential).await.unwrap();

        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn test_search_treats_non_array_quote_as_empty() {
        let server = mock_search(json!({ "quote": "out of stock" })).await;

        let client = QuoteClient::new(server.uri());
        let items = client.search("amps", Mode::Residential).await.unwrap();

        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn test_search_treats_malformed_entries_as_empty() {
        let server = mock_search(json!({
            "quote": [{ "name": "Speaker A", "qty": 2 }]
        }))
        .await;

        let client = QuoteClient::new(server.uri());
        let items = client.search("speakers", Mode::Residential).await.unwrap();

        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn test_search_rejects_negative_prices() {
        let server = mock_search(json!({
            "quote": [
                { "name": "Speaker A", "qty": 2, "price": 450 },
                { "name": "Refund", "qty": 1, "price": -450 },
            ]
        }))
        .await;

        let client = QuoteClient::new(server.uri());
        let items = client.search("speakers", Mode::Residential).await.unwrap();

        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn test_search_rejects_prices_too_large_to_total() {
        // Decimal::MAX as a string; qty 2 pushes the line total out of range.
        let server = mock_search(json!({
            "quote": [
                { "name": "Subwoofer", "qty": 2, "price": "79228162514264337593543950335" },
            ]
        }))
        .await;

        let client = QuoteClient::new(server.uri());
        let items = client.search("subwoofer", Mode::Residential).await.unwrap();

        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn test_search_tolerates_a_non_object_payload() {
        let server = mock_search(json!(["unexpected", "shape"])).await;

        let client = QuoteClient::new(server.uri());
        let items = client.search("amps", Mode::Residential).await.unwrap();

        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn test_search_fails_on_server_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search_gpt"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let client = QuoteClient::new(server.uri());
        let error = client
            .search("amps", Mode::Residential)
            .await
            .unwrap_err();

        assert!(error.to_string().contains("500"));
        assert!(error.to_string().contains("boom"));
    }

    #[tokio::test]
    async fn test_search_fails_on_invalid_json() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search_gpt"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let client = QuoteClient::new(server.uri());
        let result = client.search("amps", Mode::Residential).await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_search_strips_trailing_slash_from_endpoint() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search_gpt"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "quote": [] })))
            .expect(1)
            .mount(&server)
            .await;

        let client = QuoteClient::new(format!("{}/", server.uri()));
        let result = client.search("amps", Mode::Residential).await;

        assert!(result.is_ok());
    }
}
