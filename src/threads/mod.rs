pub mod handler;

pub use handler::{ConcreteHandler, Handler};
