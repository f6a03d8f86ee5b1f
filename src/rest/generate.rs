use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::commands::Command;
use crate::generators::{GenerateRequest, GeneratedValue};
use crate::rest::command::{send_command, ApiResponse, CommandError};
use crate::rest::state::AppState;

#[utoipa::path(
    post,
    path = "/api/v1/generate",
    description = "Generate one or more values from a single generator. The body names the generator in its 'type' field alongside that generator's options; omitted options take their defaults. 'count' (1-1000, default 1) sets how many values are returned.",
    request_body = GenerateRequest,
    responses(
        (status = 200, description = "Generated values", body = ApiResponse<Vec<GeneratedValue>>),
        (status = 400, description = "Invalid argument or domain constraint violation", body = ApiResponse<Vec<GeneratedValue>>),
        (status = 503, description = "Handler unavailable", body = ApiResponse<Vec<GeneratedValue>>)
    ),
    tag = "generate"
)]
pub async fn generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<impl IntoResponse, CommandError> {
    let values = send_command(&state, |tx| Command::Generate {
        request,
        response: tx,
    })
    .await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(values))))
}
