use once_cell::sync::Lazy;
use tokio_util::sync::CancellationToken;

static SHUTDOWN: Lazy<CancellationToken> = Lazy::new(CancellationToken::new);

/// Asks the server and the handler task to stop.
pub fn trigger_shutdown() {
    SHUTDOWN.cancel();
}

pub fn shutdown_token() -> CancellationToken {
    SHUTDOWN.clone()
}
