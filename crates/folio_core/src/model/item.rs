//! Shared read-only view over listing records.

/// Common accessors for records rendered as cards in a listing.
///
/// Filter engines only depend on this trait, so projects and creations can
/// share the same tag matching code.
pub trait DisplayItem {
    /// Unique identifier inside its collection (slug or id).
    fn id(&self) -> &str;
    /// Card title.
    fn title(&self) -> &str;
    /// Short card description.
    fn description(&self) -> &str;
    /// Non-exclusive labels in display order.
    fn labels(&self) -> &[String];
}
