//! Page-level use-case services.
//!
//! # Responsibility
//! - Own per-page view state with lifecycle tied to mount/unmount.
//! - Combine filter engines and deferred tasks into render-ready views.
//!
//! # Invariants
//! - Services borrow content; they never copy or mutate catalog records.
//! - Teardown cancels every pending deferred task.

pub mod creations;
pub mod music;
pub mod work;
