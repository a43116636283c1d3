//! Shared constants and value types used across the engine.

pub mod bounded;
pub mod constants;

pub use bounded::Bounded;
