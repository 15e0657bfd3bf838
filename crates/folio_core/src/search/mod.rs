//! Search entry points.
//!
//! # Responsibility
//! - Narrow long tag lists for the compact filter dropdown.

pub mod tags;
