use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::time::Duration;
use tokio::{sync::oneshot, time};
use utoipa::ToSchema;

use crate::commands::Command;
use crate::rest::state::AppState;

// Upper bound on one handler round trip.
const HANDLER_TIMEOUT: Duration = Duration::from_secs(5);

/// JSON envelope for every endpoint: `{"status": "ok", "data": ...}` or
/// `{"status": "error", "error": "..."}`.
#[derive(Serialize, ToSchema)]
pub struct ApiResponse<T: Serialize> {
    status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            status: "ok".to_string(),
            data: Some(data),
            error: None,
        }
    }

    pub fn error(msg: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            data: None,
            error: Some(msg.into()),
        }
    }
}

#[derive(Debug)]
pub enum CommandError {
    Timeout,
    ChannelClosed,
    /// The generator rejected its arguments.
    Rejected(String),
    HandlerUnavailable,
}

impl CommandError {
    fn status_and_message(&self) -> (StatusCode, &str) {
        match self {
            Self::Timeout => (StatusCode::GATEWAY_TIMEOUT, "timeout"),
            Self::ChannelClosed => (StatusCode::INTERNAL_SERVER_ERROR, "channel closed"),
            Self::Rejected(e) => (StatusCode::BAD_REQUEST, e.as_str()),
            Self::HandlerUnavailable => (StatusCode::SERVICE_UNAVAILABLE, "handler-unavailable"),
        }
    }
}

impl IntoResponse for CommandError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();
        (status, Json(ApiResponse::<()>::error(message))).into_response()
    }
}

/// Waits for the handler's reply. A dropped sender means the handler died
/// mid-request.
pub async fn await_response<T>(rx: oneshot::Receiver<Result<T, String>>) -> Result<T, CommandError> {
    let reply = time::timeout(HANDLER_TIMEOUT, rx)
        .await
        .map_err(|_| CommandError::Timeout)?
        .map_err(|_| CommandError::ChannelClosed)?;
    reply.map_err(CommandError::Rejected)
}

/// Queues a command for the handler task and waits for its reply. `cmd_fn`
/// receives the reply channel and builds the command around it.
pub async fn send_command<T>(
    state: &AppState,
    cmd_fn: impl FnOnce(oneshot::Sender<Result<T, String>>) -> Command,
) -> Result<T, CommandError> {
    let (tx, rx) = oneshot::channel();
    state
        .command_tx
        .send(cmd_fn(tx))
        .await
        .map_err(|_| CommandError::HandlerUnavailable)?;
    await_response(rx).await
}
