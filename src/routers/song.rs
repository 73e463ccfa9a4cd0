use axum::{
    Json,
    extract::{Query, State},
    response::{IntoResponse, Response},
};

use crate::models::song::{LyricsQuery, LyricsResponse};
use crate::routers::AppState;

// Raw pairs rather than a typed struct: repeated keys must not reject the request.
type QueryPairs = Query<Vec<(String, String)>>;

pub async fn get_lyrics_route(State(state): State<AppState>, Query(pairs): QueryPairs) -> Response {
    let query = LyricsQuery::from_pairs(&pairs);
    match state.metadata.get_lyrics(&query).await {
        Ok(lyrics) => Json(LyricsResponse { lyrics }).into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn get_metadata_route(State(state): State<AppState>, Query(pairs): QueryPairs) -> Response {
    let query = LyricsQuery::from_pairs(&pairs);
    Json(state.metadata.get_metadata(&query).await).into_response()
}
