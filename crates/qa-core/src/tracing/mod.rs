//! Observability for QA bookkeeping.
//! `tracing` crate with `EnvFilter`, structured events per status change.

pub mod events;
pub mod setup;

pub use setup::{init_tracing, init_tracing_with_filter};
