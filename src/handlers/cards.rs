use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::models::{CardResponse, CreateCard, MoveCard, UpdateCard};
use crate::state::AppState;

pub async fn create_card(
    State(state): State<AppState>,
    Path(stack_id): Path<Uuid>,
    Json(input): Json<CreateCard>,
) -> Result<Json<CardResponse>> {
    // 404s when the owning stack is missing
    state.stacks.get_by_id(stack_id).await?;

    if input.name.is_empty() {
        return Err(AppError::Validation("Card name is required".to_string()));
    }

    let card = state
        .cards
        .create(stack_id, &input.name, input.description.as_deref(), &input.cover)
        .await?;

    Ok(Json(card.into()))
}

pub async fn list_cards(State(state): State<AppState>) -> Result<Json<Vec<CardResponse>>> {
    let cards = state.cards.list_all().await?;

    Ok(Json(cards.into_iter().map(|c| c.into()).collect()))
}

pub async fn list_stack_cards(
    State(state): State<AppState>,
    Path(stack_id): Path<Uuid>,
) -> Result<Json<Vec<CardResponse>>> {
    state.stacks.get_by_id(stack_id).await?;

    let cards = state.cards.list_by_stack(stack_id).await?;

    Ok(Json(cards.into_iter().map(|c| c.into()).collect()))
}

pub async fn get_card(
    State(state): State<AppState>,
    Path(card_id): Path<Uuid>,
) -> Result<Json<CardResponse>> {
    let card = state.cards.get_by_id(card_id).await?;

    Ok(Json(card.into()))
}

pub async fn update_card(
    State(state): State<AppState>,
    Path(card_id): Path<Uuid>,
    Json(input): Json<UpdateCard>,
) -> Result<Json<CardResponse>> {
    if let Some(ref name) = input.name {
        if name.is_empty() {
            return Err(AppError::Validation("Card name is required".to_string()));
        }
    }

    // A re-parenting update must target an existing stack
    if let Some(target) = input.stack_id {
        if !state.stacks.exists(target).await? {
            return Err(AppError::NotFound);
        }
    }

    let card = state
        .cards
        .update(
            card_id,
            input.name.as_deref(),
            input.description.as_deref(),
            input.cover.as_deref(),
            input.stack_id,
        )
        .await?;

    Ok(Json(card.into()))
}

pub async fn delete_card(State(state): State<AppState>, Path(card_id): Path<Uuid>) -> Result<()> {
    state.cards.delete(card_id).await?;
    Ok(())
}

pub async fn move_card(
    State(state): State<AppState>,
    Path(card_id): Path<Uuid>,
    Json(input): Json<MoveCard>,
) -> Result<Json<CardResponse>> {
    if !state.stacks.exists(input.stack_id).await? {
        return Err(AppError::NotFound);
    }

    let card = state.cards.move_card(card_id, input.stack_id).await?;

    Ok(Json(card.into()))
}
