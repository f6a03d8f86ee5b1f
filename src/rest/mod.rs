pub mod command;
pub mod generate;
pub mod state;
pub mod tables;
