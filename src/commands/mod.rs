pub mod commander;
pub mod models;

pub use commander::{generate_batch, Commander, ConcreteCommander};
pub use models::Command;

#[cfg(test)]
pub use commander::MockCommander;
