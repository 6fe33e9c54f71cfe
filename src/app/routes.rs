use axum::{Router, routing::{get, post}};

use crate::app::handlers;
use crate::game::DeckHandle;

pub fn create_routes(decks: DeckHandle) -> Router {
    Router::new()
        .route("/decks", post(handlers::create_deck))
        // an empty id never reaches `:id`
        .route("/decks/", get(handlers::open_deck_without_id))
        .route("/decks/:id", get(handlers::open_deck))
        .route("/decks/:id/draw", post(handlers::draw_cards))
        .with_state(decks)
}
