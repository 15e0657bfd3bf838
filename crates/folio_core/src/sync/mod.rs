//! Deferred work driven by the host event loop.
//!
//! # Responsibility
//! - Model debounced effects (URL replace, cross-fade end) as owned,
//!   cancellable task handles instead of timer callbacks.
//!
//! # Invariants
//! - Time is always passed in explicitly; nothing here reads the clock.
//! - At most one task is pending per debouncer.

pub mod debounce;
