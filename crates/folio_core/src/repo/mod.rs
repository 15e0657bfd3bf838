//! Content repository layer.
//!
//! # Responsibility
//! - Keep content loading and validation behind the [`ContentRepository`] seam.
//! - Services read slices through the trait and never own content.
//!
//! [`ContentRepository`]: content_repo::ContentRepository

pub mod content_repo;
