//! Localized currency title list
//!
//! Fetches the market listing and prints one strings-file line per currency:
//!
//! ```text
//! "currency.btc.title" = "Bitcoin";
//! ```

use crate::{IconSyncError, Result};
use serde::Deserialize;

/// The listing endpoint rejects non-browser clients
pub const BROWSER_USER_AGENT: &str =
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10.15; rv:82.0) Gecko/20100101 Firefox/82.0";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ListingEntry {
    pub symbol: String,
    pub name: String,
}

#[derive(Debug, Deserialize)]
struct ListingResponse {
    data: Vec<ListingEntry>,
}

pub struct RemoteListingFetcher {
    client: reqwest::blocking::Client,
    url: String,
}

impl RemoteListingFetcher {
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let url = url.into();
        let client = reqwest::blocking::Client::builder()
            .user_agent(BROWSER_USER_AGENT)
            .build()
            .map_err(|e| IconSyncError::Network {
                url: url.clone(),
                message: format!("Failed to create HTTP client: {e}"),
            })?;

        Ok(Self { client, url })
    }

    pub fn fetch(&self) -> Result<Vec<ListingEntry>> {
        tracing::info!("Fetching currency listing from {}", self.url);

        let network_error = |message: String| IconSyncError::Network {
            url: self.url.clone(),
            message,
        };

        let response = self
            .client
            .get(&self.url)
            .send()
            .map_err(|e| network_error(e.to_string()))?;

        if !response.status().is_success() {
            return Err(network_error(format!("HTTP {}", response.status())));
        }

        let body = response
            .text()
            .map_err(|e| network_error(format!("Failed to read response body: {e}")))?;

        parse_listing(&body)
    }
}

/// Parse a `{"data": [{"symbol", "name", ...}]}` listing body
pub fn parse_listing(body: &str) -> Result<Vec<ListingEntry>> {
    let response: ListingResponse = serde_json::from_str(body)?;
    Ok(response.data)
}

/// `"currency.<symbol>.title" = "<name>";` with the symbol lower-cased
pub fn format_entry(entry: &ListingEntry) -> String {
    format!(
        "\"currency.{}.title\" = \"{}\";",
        entry.symbol.to_lowercase(),
        escape(&entry.name)
    )
}

/// Formatted lines in lexicographic order
pub fn sorted_lines(entries: &[ListingEntry]) -> Vec<String> {
    let mut lines: Vec<String> = entries.iter().map(format_entry).collect();
    lines.sort();
    lines
}

fn escape(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const LISTING: &str = r#"{
        "status": {"error_code": 0},
        "data": [
            {"id": 1027, "symbol": "ETH", "name": "Ethereum", "cmc_rank": 2},
            {"id": 1, "symbol": "BTC", "name": "Bitcoin", "cmc_rank": 1},
            {"id": 825, "symbol": "USDT", "name": "Tether"}
        ]
    }"#;

    #[test]
    fn test_sorted_output() {
        let entries = parse_listing(LISTING).unwrap();
        assert_eq!(
            sorted_lines(&entries),
            vec![
                r#""currency.btc.title" = "Bitcoin";"#,
                r#""currency.eth.title" = "Ethereum";"#,
                r#""currency.usdt.title" = "Tether";"#,
            ]
        );
    }

    #[test]
    fn test_quotes_escaped() {
        let entry = ListingEntry {
            symbol: "Q".to_string(),
            name: r#"The "Quoted" Coin"#.to_string(),
        };
        assert_eq!(
            format_entry(&entry),
            r#""currency.q.title" = "The \"Quoted\" Coin";"#
        );
    }

    #[test]
    fn test_missing_data_is_error() {
        assert!(matches!(
            parse_listing(r#"{"status": {}}"#),
            Err(IconSyncError::Json(_))
        ));
    }
}
