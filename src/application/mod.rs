// Application layer - validation, rate normalization and conversion.
// Persistence is behind the `RateStore` trait so any backend (SQLite,
// in-memory, remote) can sit underneath.

pub mod error;
pub mod service;

pub use error::*;
pub use service::*;
