use crate::dtos::MessageResponse;
use crate::error::AppError;
use crate::startup::AppState;
use axum::{extract::State, Json};

pub const ECHO_MESSAGE: &str = "Hello, Yat!";

pub async fn echo_message(
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, AppError> {
    let message = state.db.record_message(ECHO_MESSAGE).await?;
    Ok(Json(message))
}
