//! Work-grid project record.

use crate::model::item::DisplayItem;
use serde::{Deserialize, Serialize};

/// One project shown on the work grid and its detail page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// URL slug, also the unique id (`/work/<slug>`).
    pub slug: String,
    pub title: String,
    /// Card summary.
    pub description: String,
    /// Long-form detail page text. Falls back to `description` when absent.
    #[serde(default)]
    pub full_description: Option<String>,
    /// Filterable tags in display order.
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub cover_image: Option<String>,
    /// Gallery images; the first one doubles as the cover on the detail page.
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub live_url: Option<String>,
    #[serde(default)]
    pub repo_url: Option<String>,
    #[serde(default)]
    pub figma_embed: Option<String>,
    /// Tools listed in the detail page sidebar.
    #[serde(default)]
    pub tools: Vec<String>,
}

impl Project {
    /// Creates a minimal project without links or media.
    pub fn new(
        slug: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        tags: &[&str],
    ) -> Self {
        Self {
            slug: slug.into(),
            title: title.into(),
            description: description.into(),
            full_description: None,
            tags: tags.iter().map(|tag| (*tag).to_string()).collect(),
            cover_image: None,
            images: Vec::new(),
            live_url: None,
            repo_url: None,
            figma_embed: None,
            tools: Vec::new(),
        }
    }

    /// Text shown in the detail page overview section.
    pub fn detail_text(&self) -> &str {
        self.full_description
            .as_deref()
            .unwrap_or(self.description.as_str())
    }

    /// Detail page route for this project.
    pub fn route(&self) -> String {
        format!("/work/{}", self.slug)
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|value| value == tag)
    }
}

impl DisplayItem for Project {
    fn id(&self) -> &str {
        &self.slug
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn labels(&self) -> &[String] {
        &self.tags
    }
}
