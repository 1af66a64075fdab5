use crate::error::AppError;
use crate::startup::AppState;
use axum::{extract::State, response::IntoResponse};

pub const INDEX_PAGE: &str = "index";

pub async fn visit_index(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let count = state.db.record_hit(INDEX_PAGE).await?;
    Ok(format!(
        "Hello, World! This page has been visited {} times.",
        count
    ))
}
