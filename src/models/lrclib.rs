use serde::Deserialize;

/// One entry of the LRCLIB `/api/search` response.
#[derive(Deserialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct LrclibTrack {
    pub plain_lyrics: Option<String>,
    pub synced_lyrics: Option<String>,
    #[serde(default)]
    pub instrumental: bool,
}

impl LrclibTrack {
    pub fn synced(&self) -> Option<&str> {
        non_empty(self.synced_lyrics.as_deref())
    }

    pub fn plain(&self) -> Option<&str> {
        non_empty(self.plain_lyrics.as_deref())
    }
}

fn non_empty(text: Option<&str>) -> Option<&str> {
    text.filter(|t| !t.trim().is_empty())
}
