//! Caller-visible error taxonomy.
//!
//! The internal per-node timeout never reaches callers — the driver absorbs
//! it. What can reach a caller is the host ceiling expiring (the worker is
//! presumed dead and gets replaced) or an unexpected fault from the worker.
//! A position with no legal moves is `Ok(None)`, not an error.

use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    /// The host's hard ceiling expired with no reply; the search thread has
    /// been replaced. The caller may retry on the fresh worker.
    #[error("engine did not respond within {0:?}; search thread restarted")]
    HostTimeout(Duration),

    /// The worker reported or suffered an unrecoverable fault. The message
    /// is passed through uninterpreted.
    #[error("engine fault: {0}")]
    Fault(String),
}
