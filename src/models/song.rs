use serde::Serialize;

/// Query parameters accepted by both lookup routes. Missing values become "".
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LyricsQuery {
    pub artist: String,
    pub track: String,
}

impl LyricsQuery {
    pub fn new(artist: impl Into<String>, track: impl Into<String>) -> Self {
        LyricsQuery {
            artist: artist.into(),
            track: track.into(),
        }
    }

    /// Build from raw query pairs. The first occurrence of a repeated key wins and
    /// unknown keys are ignored.
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        let first = |key: &str| {
            pairs
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.clone())
                .unwrap_or_default()
        };
        LyricsQuery::new(first("artist"), first("track"))
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct LyricsResponse {
    pub lyrics: String,
}

/// Combined record returned by `/get-metadata`. Absent fields serialize as `null`.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct MetadataResult {
    pub lyrics: Option<String>,
    pub cover: Option<String>,
    pub artist: String,
    pub track: String,
}

impl MetadataResult {
    pub fn empty(query: &LyricsQuery) -> Self {
        MetadataResult {
            lyrics: None,
            cover: None,
            artist: query.artist.clone(),
            track: query.track.clone(),
        }
    }
}
