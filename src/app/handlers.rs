use axum::{
    extract::{rejection::PathRejection, Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::domain::{DeckError, DeckResult};
use crate::game::DeckHandle;
use crate::models::{CreateDeckQuery, DeckResponse, DrawQuery, DrawResponse, QueryPairs};

pub async fn create_deck(
    State(decks): State<DeckHandle>,
    Query(pairs): Query<QueryPairs>,
) -> DeckResult<(StatusCode, Json<DeckResponse>)> {
    let query = CreateDeckQuery::from_pairs(&pairs);
    let deck = decks.create(query.shuffle(), query.cards).await?;
    Ok((StatusCode::CREATED, Json(deck.into())))
}

pub async fn open_deck(
    State(decks): State<DeckHandle>,
    id: Result<Path<String>, PathRejection>,
) -> DeckResult<Json<DeckResponse>> {
    let id = deck_id(id)?;
    let deck = decks.open(id).await?;
    Ok(Json(deck.into()))
}

pub async fn open_deck_without_id() -> DeckError {
    DeckError::MissingDeckId
}

pub async fn draw_cards(
    State(decks): State<DeckHandle>,
    id: Result<Path<String>, PathRejection>,
    Query(pairs): Query<QueryPairs>,
) -> DeckResult<Json<DrawResponse>> {
    let id = deck_id(id)?;
    let query = DrawQuery::from_pairs(&pairs);
    let cards = decks.draw(id, query.count).await?;
    Ok(Json(DrawResponse { cards }))
}

/// A path segment axum cannot decode (e.g. invalid UTF-8) is a malformed id too.
fn deck_id(path: Result<Path<String>, PathRejection>) -> DeckResult<Uuid> {
    let Path(raw) = path.map_err(|_| DeckError::MalformedDeckId)?;
    parse_deck_id(&raw)
}

pub fn parse_deck_id(raw: &str) -> DeckResult<Uuid> {
    if raw.is_empty() {
        return Err(DeckError::MissingDeckId);
    }
    Uuid::parse_str(raw).map_err(|_| DeckError::MalformedDeckId)
}
