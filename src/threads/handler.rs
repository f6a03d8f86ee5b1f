use async_trait::async_trait;
use log::{debug, warn};
use tokio::sync::mpsc::Receiver;
use tokio_util::sync::CancellationToken;

use crate::commands::{Command, Commander};
use crate::statics::shutdown::shutdown_token;

#[async_trait]
pub trait Handler<C: Commander>: Send {
    fn new(commander: C, rx: Receiver<Command>) -> Self;
    async fn main_loop(&mut self);
}

/// Owns the commander, and with it the only sampler the service draws from.
pub struct ConcreteHandler<C: Commander> {
    commander: C,
    rx: Receiver<Command>,
    cancel_token: CancellationToken,
}

#[async_trait]
impl<C: Commander> Handler<C> for ConcreteHandler<C> {
    fn new(commander: C, rx: Receiver<Command>) -> Self {
        Self::new_with_token(commander, rx, shutdown_token())
    }

    async fn main_loop(&mut self) {
        loop {
            tokio::select! {
                _ = self.cancel_token.cancelled() => {
                    debug!("Handler cancelled. Shutting down.");
                    break;
                }

                cmd_option = self.rx.recv() => {
                    match cmd_option {
                        Some(cmd) => self.process_command(cmd),
                        None => break,
                    }
                }
            }
        }
    }
}

impl<C: Commander> ConcreteHandler<C> {
    pub fn new_with_token(commander: C, rx: Receiver<Command>, cancel_token: CancellationToken) -> Self {
        Self {
            commander,
            rx,
            cancel_token,
        }
    }

    pub fn process_command(&mut self, cmd: Command) {
        match cmd {
            Command::Generate { request, response } => {
                let result = self.commander.generate(&request).map_err(|e| {
                    warn!("Generation failed: {}", e);
                    e.to_string()
                });
                let _ = response.send(result);
            }

            Command::GetTables { response } => {
                let _ = response.send(Ok(self.commander.tables()));
            }
        }
    }
}
