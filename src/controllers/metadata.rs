use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::controllers::cover::CoverArtLookup;
use crate::controllers::lyrics::LyricsSearch;
use crate::error::ApiError;
use crate::models::song::{LyricsQuery, MetadataResult};

/// Combines the lyrics and cover-art collaborators behind the two lookup routes.
pub struct MetadataController {
    lyrics: Arc<dyn LyricsSearch>,
    covers: Arc<dyn CoverArtLookup>,
}

impl MetadataController {
    pub fn new(lyrics: Arc<dyn LyricsSearch>, covers: Arc<dyn CoverArtLookup>) -> Self {
        MetadataController { lyrics, covers }
    }

    pub fn search_term(query: &LyricsQuery) -> String {
        format!("{} - {}", query.artist, query.track)
    }

    /// Lyrics for `/get-lyrics`: empty results are `NotFound`, collaborator
    /// failures are surfaced as-is.
    pub async fn get_lyrics(&self, query: &LyricsQuery) -> Result<String, ApiError> {
        let term = Self::search_term(query);
        match self.lyrics.search(&term).await? {
            Some(lyrics) if !lyrics.is_empty() => Ok(lyrics),
            _ => {
                info!(term = %term, "No lyrics found");
                Err(ApiError::NotFound)
            }
        }
    }

    /// Best-effort record for `/get-metadata`. Never fails; missing pieces stay `None`.
    pub async fn get_metadata(&self, query: &LyricsQuery) -> MetadataResult {
        let mut result = MetadataResult::empty(query);

        // Lyrics first, then cover; the two calls are not overlapped.
        let term = Self::search_term(query);
        match self.lyrics.search(&term).await {
            Ok(Some(lyrics)) if !lyrics.is_empty() => result.lyrics = Some(lyrics),
            Ok(_) => {}
            Err(e) => debug!(term = %term, error = %e, "Lyrics lookup failed"),
        }

        result.cover = self.find_cover(&query.artist, &query.track).await;
        result
    }

    pub async fn find_cover(&self, artist: &str, track: &str) -> Option<String> {
        match self.covers.lookup(artist, track).await {
            Ok(cover) => cover,
            Err(e) => {
                warn!(artist = %artist, track = %track, error = %e, "Error fetching cover");
                None
            }
        }
    }
}
