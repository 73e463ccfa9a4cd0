use serde::Deserialize;

/// Subset of the iTunes Search API response used for artwork.
#[derive(Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ItunesSearchResponse {
    pub result_count: u32,
    #[serde(default)]
    pub results: Vec<ItunesTrack>,
}

#[derive(Deserialize, Clone, Debug)]
pub struct ItunesTrack {
    #[serde(rename = "artworkUrl100")]
    pub artwork_url_100: Option<String>,
}

impl ItunesSearchResponse {
    pub fn first_artwork(&self) -> Option<&str> {
        if self.result_count == 0 {
            return None;
        }
        self.results.first()?.artwork_url_100.as_deref()
    }
}
