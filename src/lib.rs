//! Randomised, format-constrained test data: alphabetic and numeric strings,
//! Unicode text, network addresses, identifiers, markup and timestamps.
//!
//! Every draw goes through a [`Sampler`], so swapping its [`RandomSource`]
//! changes the behaviour of every generator at once.
//!
//! ```
//! use fauxgen::{generators, Sampler, Tables};
//!
//! let mut sampler = Sampler::from_seed(7);
//! let tables = Tables::default();
//! let email = generators::gen_email(&mut sampler, &tables, None, None, Some("org")).unwrap();
//! assert!(email.ends_with(".org"));
//! ```

pub mod commands;
pub mod corpus;
pub mod error;
pub mod generators;
pub mod rest;
pub mod sampler;
pub mod statics;
pub mod strings;
pub mod tables;
pub mod threads;

pub use error::GenError;
pub use sampler::{with_thread_sampler, RandomSource, RngSource, Sampler};
pub use tables::Tables;
