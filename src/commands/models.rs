use tokio::sync::oneshot;

use crate::generators::{GenerateRequest, GeneratedValue};
use crate::tables::Tables;

pub enum Command {
    Generate {
        request: GenerateRequest,
        response: oneshot::Sender<Result<Vec<GeneratedValue>, String>>,
    },
    GetTables {
        response: oneshot::Sender<Result<Tables, String>>,
    },
}
