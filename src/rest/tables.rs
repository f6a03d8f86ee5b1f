use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::commands::Command;
use crate::rest::command::{send_command, ApiResponse, CommandError};
use crate::rest::state::AppState;
use crate::tables::Tables;

#[utoipa::path(
    get,
    path = "/api/v1/tables",
    description = "Return the lookup tables (schemes, subdomains, TLDs, HTML tags, netmasks and lorem-ipsum text) the generators draw from.",
    responses(
        (status = 200, description = "Tables in use", body = ApiResponse<Tables>),
        (status = 503, description = "Handler unavailable", body = ApiResponse<Tables>)
    ),
    tag = "tables"
)]
pub async fn get_tables(State(state): State<AppState>) -> Result<impl IntoResponse, CommandError> {
    let tables = send_command(&state, |tx| Command::GetTables { response: tx }).await?;
    Ok((StatusCode::OK, Json(ApiResponse::ok(tables))))
}
