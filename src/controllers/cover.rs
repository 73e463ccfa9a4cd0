// Cover art collaborator (iTunes Search API, no key required)
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

use crate::error::LookupError;
use crate::models::itunes::ItunesSearchResponse;

const THUMBNAIL_SIZE: &str = "100x100bb";
const FULL_SIZE: &str = "600x600bb";

#[async_trait]
pub trait CoverArtLookup: Send + Sync {
    /// Artwork URL for the best match, `Ok(None)` when the search is empty.
    async fn lookup(&self, artist: &str, track: &str) -> Result<Option<String>, LookupError>;
}

pub struct ItunesCoverArt {
    client: Client,
    search_url: String,
}

impl ItunesCoverArt {
    pub fn new(search_url: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            search_url: search_url.to_string(),
        })
    }
}

#[async_trait]
impl CoverArtLookup for ItunesCoverArt {
    async fn lookup(&self, artist: &str, track: &str) -> Result<Option<String>, LookupError> {
        let term = format!("{} {}", artist, track);
        debug!(term = %term, "Searching iTunes for artwork");

        let response = self
            .client
            .get(&self.search_url)
            .query(&[("term", term.as_str()), ("entity", "song"), ("limit", "1")])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Status(status.as_u16()));
        }

        let data: ItunesSearchResponse = response.json().await?;
        Ok(data.first_artwork().map(upscale_artwork))
    }
}

/// Ask the artwork CDN for the 600px rendition instead of the 100px thumbnail.
pub fn upscale_artwork(url: &str) -> String {
    url.replace(THUMBNAIL_SIZE, FULL_SIZE)
}
