// Lyrics search collaborator
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::{debug, info};

use crate::error::LookupError;
use crate::models::lrclib::LrclibTrack;

/// Free-text lyrics search.
///
/// * `Ok(Some(text))` with plain or line-synchronized lyrics
/// * `Ok(None)` if nothing matched
/// * `Err` if the provider could not be queried
#[async_trait]
pub trait LyricsSearch: Send + Sync {
    async fn search(&self, term: &str) -> Result<Option<String>, LookupError>;
}

/// LRCLIB-backed search (`/api/search?q=`).
pub struct LrclibSearch {
    client: Client,
    base_url: String,
    synced_only: bool,
}

impl LrclibSearch {
    pub fn new(base_url: &str, timeout: Duration, synced_only: bool) -> Result<Self, reqwest::Error> {
        let user_agent = format!("lyrics-proxy/{}", env!("CARGO_PKG_VERSION"));
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            synced_only,
        })
    }
}

#[async_trait]
impl LyricsSearch for LrclibSearch {
    async fn search(&self, term: &str) -> Result<Option<String>, LookupError> {
        let url = format!("{}/api/search", self.base_url);
        debug!(term = %term, "Searching LRCLIB");

        let response = self.client.get(&url).query(&[("q", term)]).send().await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(LookupError::Status(status.as_u16()));
        }

        let results: Vec<LrclibTrack> = response.json().await?;
        let picked = pick_lyrics(&results, self.synced_only);
        info!(
            term = %term,
            candidates = results.len(),
            found = picked.is_some(),
            "LRCLIB search finished"
        );
        Ok(picked)
    }
}

/// Synced lyrics from any candidate beat plain lyrics; plain lyrics are only
/// considered when `synced_only` is off.
pub fn pick_lyrics(results: &[LrclibTrack], synced_only: bool) -> Option<String> {
    if let Some(synced) = results.iter().find_map(LrclibTrack::synced) {
        return Some(synced.to_string());
    }
    if synced_only {
        return None;
    }
    results
        .iter()
        .filter(|t| !t.instrumental)
        .find_map(LrclibTrack::plain)
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::serve;
    use axum::{Json, Router, extract::Query, http::StatusCode as HttpStatus, routing::get};
    use serde_json::json;
    use std::collections::HashMap;

    fn track(synced: Option<&str>, plain: Option<&str>) -> LrclibTrack {
        LrclibTrack {
            synced_lyrics: synced.map(str::to_string),
            plain_lyrics: plain.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn prefers_synced_lyrics_from_any_candidate() {
        let results = vec![
            track(None, Some("plain first")),
            track(Some("[00:01.00]synced second"), None),
        ];
        assert_eq!(
            pick_lyrics(&results, false).as_deref(),
            Some("[00:01.00]synced second")
        );
    }

    #[test]
    fn falls_back_to_plain_lyrics() {
        let results = vec![track(Some("   "), Some("just words"))];
        assert_eq!(pick_lyrics(&results, false).as_deref(), Some("just words"));
        assert_eq!(pick_lyrics(&results, true), None);
    }

    #[test]
    fn instrumental_or_empty_candidates_yield_nothing() {
        let mut instrumental = track(None, None);
        instrumental.instrumental = true;
        assert_eq!(pick_lyrics(&[instrumental, track(Some(""), Some(""))], false), None);
        assert_eq!(pick_lyrics(&[], false), None);
    }

    #[tokio::test]
    async fn searches_lrclib_with_free_text_query() {
        let router = Router::new().route(
            "/api/search",
            get(|Query(params): Query<HashMap<String, String>>| async move {
                assert_eq!(params.get("q").map(String::as_str), Some("Adele - Hello"));
                Json(json!([
                    { "id": 1, "trackName": "Hello", "artistName": "Adele",
                      "plainLyrics": "Hello, it's me", "syncedLyrics": "[00:01.00]Hello, it's me",
                      "instrumental": false }
                ]))
            }),
        );
        let base = serve(router).await;
        let search = LrclibSearch::new(&base, Duration::from_secs(5), false).unwrap();

        let lyrics = search.search("Adele - Hello").await.unwrap();
        assert_eq!(lyrics.as_deref(), Some("[00:01.00]Hello, it's me"));
    }

    #[tokio::test]
    async fn empty_result_list_is_not_an_error() {
        let router = Router::new().route("/api/search", get(|| async { Json(json!([])) }));
        let base = serve(router).await;
        let search = LrclibSearch::new(&base, Duration::from_secs(5), false).unwrap();

        assert_eq!(search.search("nobody - nothing").await.unwrap(), None);
    }

    #[tokio::test]
    async fn upstream_errors_are_typed() {
        let router = Router::new()
            .route("/bad/api/search", get(|| async { HttpStatus::BAD_GATEWAY }))
            .route("/junk/api/search", get(|| async { "<html>nope</html>" }));
        let base = serve(router).await;

        let search = LrclibSearch::new(&format!("{}/bad", base), Duration::from_secs(5), false).unwrap();
        assert!(matches!(
            search.search("a - b").await,
            Err(LookupError::Status(502))
        ));

        let search = LrclibSearch::new(&format!("{}/junk", base), Duration::from_secs(5), false).unwrap();
        assert!(matches!(
            search.search("a - b").await,
            Err(LookupError::Malformed(_))
        ));
    }

    #[tokio::test]
    async fn not_found_status_means_no_lyrics() {
        let router = Router::new().route("/api/search", get(|| async { HttpStatus::NOT_FOUND }));
        let base = serve(router).await;
        let search = LrclibSearch::new(&base, Duration::from_secs(5), false).unwrap();

        assert_eq!(search.search("a - b").await.unwrap(), None);
    }

    #[tokio::test]
    async fn refused_connection_is_unreachable() {
        // Grab a free port, then close it so nothing is listening there
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let search =
            LrclibSearch::new(&format!("http://{}", addr), Duration::from_secs(5), false).unwrap();
        assert!(matches!(
            search.search("a - b").await,
            Err(LookupError::Unreachable(_))
        ));
    }
}
