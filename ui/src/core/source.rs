//! One-shot loading of the raw record collection.

use rust_embed::Embed;

use super::dispatch::Memorial;
use super::error::LoadError;
use super::record::{enrich, EnrichedRecord, RawRecord};

/// File name of the bundled collection inside `assets/data/`.
pub const RECORDS_FILE: &str = "records.json";

#[derive(Embed)]
#[folder = "assets/data"]
struct BundledRecords;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RecordSource {
    /// The collection compiled into the binary.
    #[default]
    Embedded,
    /// A resource path fetched once (a URL on web, a file path on native).
    Remote(String),
}

impl RecordSource {
    pub async fn read(&self) -> Result<Vec<u8>, LoadError> {
        match self {
            Self::Embedded => BundledRecords::get(RECORDS_FILE)
                .map(|file| file.data.into_owned())
                .ok_or(LoadError::MissingEmbedded(RECORDS_FILE)),
            Self::Remote(path) => fetch(path).await,
        }
    }
}

#[cfg(target_arch = "wasm32")]
async fn fetch(path: &str) -> Result<Vec<u8>, LoadError> {
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;

    let fail = |reason: JsValue| LoadError::Fetch {
        path: path.to_string(),
        reason: format!("{reason:?}"),
    };

    let window = web_sys::window().ok_or_else(|| LoadError::Fetch {
        path: path.to_string(),
        reason: "no window available".to_string(),
    })?;
    let response: web_sys::Response = JsFuture::from(window.fetch_with_str(path))
        .await
        .map_err(fail)?
        .dyn_into()
        .map_err(fail)?;

    if !response.ok() {
        return Err(LoadError::Status {
            path: path.to_string(),
            status: response.status(),
        });
    }

    let body = JsFuture::from(response.text().map_err(fail)?)
        .await
        .map_err(fail)?;
    body.as_string()
        .map(String::into_bytes)
        .ok_or_else(|| LoadError::Fetch {
            path: path.to_string(),
            reason: "response body is not text".to_string(),
        })
}

#[cfg(not(target_arch = "wasm32"))]
async fn fetch(path: &str) -> Result<Vec<u8>, LoadError> {
    tokio::fs::read(path).await.map_err(|err| LoadError::Fetch {
        path: path.to_string(),
        reason: err.to_string(),
    })
}

/// Decode a JSON array of raw records and enrich each one. A single malformed
/// record fails the whole batch.
pub fn parse_records(payload: &[u8]) -> Result<Vec<EnrichedRecord>, LoadError> {
    let raw: Vec<RawRecord> = serde_json::from_slice(payload)?;
    let records = raw
        .into_iter()
        .map(enrich)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(records)
}

/// Read, decode and enrich the collection, then compute its one-time stats.
pub async fn load_memorial(source: &RecordSource) -> Result<Memorial, LoadError> {
    let payload = source.read().await?;
    let records = parse_records(&payload)?;
    tracing::info!(count = records.len(), ?source, "records loaded");
    Ok(Memorial::new(records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ParseError;

    #[test]
    fn parses_and_enriches_every_record() {
        let payload = br#"[
            {"name":"A","type":"model","company":"X","born":"2022-01-01","died":"2023-01-01","description":"","cause":""},
            {"name":"B","type":"product","company":"Y","born":"2024-01-01","died":"2024-06-01","description":"","cause":"","link":"https://example.com"}
        ]"#;
        let records = parse_records(payload).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].lifespan_days, 152);
        assert_eq!(records[1].link.as_deref(), Some("https://example.com"));
    }

    #[test]
    fn one_bad_record_aborts_the_load() {
        let payload = br#"[
            {"name":"A","type":"model","company":"X","born":"2022-01-01","died":"2023-01-01","description":"","cause":""},
            {"name":"B","type":"model","company":"X","born":"soon","died":"2023-01-01","description":"","cause":""}
        ]"#;
        let err = parse_records(payload).unwrap_err();
        assert!(matches!(
            err,
            LoadError::Record(ParseError::InvalidDate { field: "born", .. })
        ));
    }

    #[test]
    fn malformed_payload_is_a_decode_error() {
        assert!(matches!(
            parse_records(b"{\"not\": \"an array\"}"),
            Err(LoadError::Decode(_))
        ));
    }

    #[test]
    fn bundled_collection_is_valid() {
        let file = BundledRecords::get(RECORDS_FILE).expect("bundled records present");
        let records = parse_records(&file.data).unwrap();
        assert!(!records.is_empty());
        assert!(records.iter().all(|r| r.died_date >= r.born_date));
    }
}
