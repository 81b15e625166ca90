//! Observability utilities.
//!
//! The crate emits `tracing` events (variant materialization, registry
//! construction) and leaves subscriber installation to the host.
//! [`init_tracing`] is a convenience for binaries, tests and benches.

mod subscriber;

pub use subscriber::{init_tracing, TracingConfig};
