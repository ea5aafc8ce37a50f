//! Shared utilities for the bestchain workspace.

pub mod logging;

pub use logging::init_tracing;
