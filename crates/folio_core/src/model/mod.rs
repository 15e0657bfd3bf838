//! Portfolio content model.
//!
//! # Responsibility
//! - Define the immutable display records shown by listing pages.
//! - Expose one shared [`DisplayItem`] view used by filter engines.
//!
//! # Invariants
//! - Records are created at content-load time and never mutated afterwards.
//! - Label sequences keep insertion order for display.

pub mod creation;
pub mod item;
pub mod profile;
pub mod project;
pub mod track;
