//! Fakes and a throwaway HTTP server shared by unit tests.

use async_trait::async_trait;
use axum::Router;
use std::sync::Mutex;

use crate::controllers::cover::CoverArtLookup;
use crate::controllers::lyrics::LyricsSearch;
use crate::error::LookupError;

/// Serve `router` on an ephemeral local port and return its base URL.
pub async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

#[derive(Clone)]
enum Outcome {
    Found(String),
    Missing,
    Failing,
}

impl Outcome {
    fn result(&self) -> Result<Option<String>, LookupError> {
        match self {
            Outcome::Found(text) => Ok(Some(text.clone())),
            Outcome::Missing => Ok(None),
            Outcome::Failing => Err(LookupError::Status(503)),
        }
    }
}

/// Lyrics collaborator with a canned outcome; remembers the terms it was asked for.
pub struct FakeLyrics {
    outcome: Outcome,
    terms: Mutex<Vec<String>>,
}

impl FakeLyrics {
    fn with(outcome: Outcome) -> Self {
        FakeLyrics {
            outcome,
            terms: Mutex::new(Vec::new()),
        }
    }

    pub fn found(text: &str) -> Self {
        Self::with(Outcome::Found(text.to_string()))
    }

    pub fn missing() -> Self {
        Self::with(Outcome::Missing)
    }

    pub fn failing() -> Self {
        Self::with(Outcome::Failing)
    }

    pub fn terms(&self) -> Vec<String> {
        self.terms.lock().unwrap().clone()
    }
}

#[async_trait]
impl LyricsSearch for FakeLyrics {
    async fn search(&self, term: &str) -> Result<Option<String>, LookupError> {
        self.terms.lock().unwrap().push(term.to_string());
        self.outcome.result()
    }
}

pub struct FakeCovers {
    outcome: Outcome,
}

impl FakeCovers {
    pub fn found(url: &str) -> Self {
        FakeCovers {
            outcome: Outcome::Found(url.to_string()),
        }
    }

    pub fn missing() -> Self {
        FakeCovers {
            outcome: Outcome::Missing,
        }
    }

    pub fn failing() -> Self {
        FakeCovers {
            outcome: Outcome::Failing,
        }
    }
}

#[async_trait]
impl CoverArtLookup for FakeCovers {
    async fn lookup(&self, _artist: &str, _track: &str) -> Result<Option<String>, LookupError> {
        self.outcome.result()
    }
}
