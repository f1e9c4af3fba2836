//! Quote handlers

use super::{ApiError, ApiResult};
use crate::AppState;
use axum::{
    body::Bytes,
    extract::{
        rejection::{BytesRejection, PathRejection},
        Path, RawQuery, State,
    },
    http::StatusCode,
    Json,
};
use quotes_core::{NewQuote, Quote, QuoteError};
use std::future::Future;

/// First `author` value in the query string; absent or malformed means no filter
fn author_filter(query: Option<&str>) -> String {
    query
        .and_then(|q| serde_urlencoded::from_str::<Vec<(String, String)>>(q).ok())
        .and_then(|pairs| pairs.into_iter().find(|(key, _)| key == "author"))
        .map(|(_, value)| value)
        .unwrap_or_default()
}

/// Run a service call under the request deadline. The call is dropped, and so
/// aborted, once the deadline passes.
async fn within_deadline<T>(
    state: &AppState,
    call: impl Future<Output = quotes_core::Result<T>>,
) -> ApiResult<T> {
    let result = tokio::time::timeout(state.request_timeout, call).await?;
    result.map_err(ApiError::from)
}

/// The body is decoded as JSON whatever its `Content-Type`
pub async fn create(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> ApiResult<StatusCode> {
    let new_quote: NewQuote = serde_json::from_slice(&body?)?;

    if !new_quote.is_complete() {
        return Err(QuoteError::MissingFields.into());
    }

    within_deadline(&state, state.quotes.add(new_quote)).await?;
    Ok(StatusCode::CREATED)
}

pub async fn list(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> ApiResult<Json<Vec<Quote>>> {
    let author = author_filter(query.as_deref());
    let quotes = within_deadline(&state, state.quotes.get_all(&author)).await?;
    Ok(Json(quotes))
}

pub async fn random(State(state): State<AppState>) -> ApiResult<Json<Quote>> {
    let quote = within_deadline(&state, state.quotes.get_random()).await?;
    Ok(Json(quote))
}

pub async fn delete(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> ApiResult<StatusCode> {
    let Path(id) = id.map_err(|_| QuoteError::InvalidId)?;
    let id: u32 = id.parse().map_err(|_| QuoteError::InvalidId)?;

    within_deadline(&state, state.quotes.delete_by_id(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}
