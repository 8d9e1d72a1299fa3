use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::models::{CreateStack, StackResponse, UpdateStack};
use crate::state::AppState;

pub async fn create_stack(
    State(state): State<AppState>,
    Json(input): Json<CreateStack>,
) -> Result<Json<StackResponse>> {
    if input.name.is_empty() {
        return Err(AppError::Validation("Stack name is required".to_string()));
    }

    let stack = state.stacks.create(&input.name, &input.cover).await?;

    Ok(Json(stack.into()))
}

pub async fn list_stacks(State(state): State<AppState>) -> Result<Json<Vec<StackResponse>>> {
    let stacks = state.stacks.list_all().await?;

    Ok(Json(stacks.into_iter().map(|s| s.into()).collect()))
}

pub async fn get_stack(
    State(state): State<AppState>,
    Path(stack_id): Path<Uuid>,
) -> Result<Json<StackResponse>> {
    let stack = state.stacks.get_by_id(stack_id).await?;

    Ok(Json(stack.into()))
}

pub async fn update_stack(
    State(state): State<AppState>,
    Path(stack_id): Path<Uuid>,
    Json(input): Json<UpdateStack>,
) -> Result<Json<StackResponse>> {
    if let Some(ref name) = input.name {
        if name.is_empty() {
            return Err(AppError::Validation("Stack name is required".to_string()));
        }
    }

    let stack = state
        .stacks
        .update(stack_id, input.name.as_deref(), input.cover.as_ref())
        .await?;

    Ok(Json(stack.into()))
}

pub async fn delete_stack(
    State(state): State<AppState>,
    Path(stack_id): Path<Uuid>,
) -> Result<()> {
    state.stacks.delete(stack_id).await?;
    Ok(())
}
