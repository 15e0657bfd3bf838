//! Creations gallery record.
//!
//! # Invariants
//! - Every creation belongs to exactly one [`CreationCategory`].
//! - Categories form a closed enumeration known at compile time.

use crate::model::item::DisplayItem;
use serde::{Deserialize, Serialize};

/// Mutually exclusive partition of the creations gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CreationCategory {
    Animations,
    Arts,
    /// Graphic design: branding, posters, layouts.
    Graphic,
    /// Experimental work that fits no other bucket.
    Other,
}

impl CreationCategory {
    /// All categories in gallery tab order.
    pub const ALL: [CreationCategory; 4] = [
        CreationCategory::Animations,
        CreationCategory::Arts,
        CreationCategory::Graphic,
        CreationCategory::Other,
    ];

    /// Stable string id used in content files and URLs.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Animations => "animations",
            Self::Arts => "arts",
            Self::Graphic => "graphic",
            Self::Other => "other",
        }
    }

    /// User-facing tab label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Animations => "Animations",
            Self::Arts => "Arts",
            Self::Graphic => "Graphic Design",
            Self::Other => "Other",
        }
    }

    /// Parses a stable string id. Returns `None` for unknown ids.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == value.trim())
    }
}

/// Technology badges shown on a gallery card: the first few entries plus
/// the number of hidden ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TechBadges<'a> {
    pub shown: Vec<&'a str>,
    pub overflow: usize,
}

/// One piece of creative work in the creations gallery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreationItem {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: CreationCategory,
    #[serde(default)]
    pub technology: Vec<String>,
    pub thumbnail: String,
    #[serde(default)]
    pub href: Option<String>,
    #[serde(default)]
    pub code_sandbox_url: Option<String>,
}

impl CreationItem {
    /// Link target for the "View Project" button. The sandbox wins over `href`.
    pub fn primary_link(&self) -> Option<&str> {
        self.code_sandbox_url.as_deref().or(self.href.as_deref())
    }

    /// Splits technologies into at most `limit` visible badges and an overflow count.
    pub fn tech_badges(&self, limit: usize) -> TechBadges<'_> {
        let shown = self
            .technology
            .iter()
            .take(limit)
            .map(String::as_str)
            .collect::<Vec<_>>();
        TechBadges {
            overflow: self.technology.len() - shown.len(),
            shown,
        }
    }
}

impl DisplayItem for CreationItem {
    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn labels(&self) -> &[String] {
        &self.technology
    }
}

#[cfg(test)]
mod tests {
    use super::{CreationCategory, CreationItem};

    fn item(technology: &[&str]) -> CreationItem {
        CreationItem {
            id: "wave".to_string(),
            title: "Wave".to_string(),
            description: "water".to_string(),
            category: CreationCategory::Animations,
            technology: technology.iter().map(|value| (*value).to_string()).collect(),
            thumbnail: "/wave.svg".to_string(),
            href: Some("https://example.com/wave".to_string()),
            code_sandbox_url: None,
        }
    }

    #[test]
    fn category_ids_round_trip_through_parse() {
        for category in CreationCategory::ALL {
            assert_eq!(CreationCategory::parse(category.as_str()), Some(category));
        }
        assert_eq!(CreationCategory::parse("sculpture"), None);
    }

    #[test]
    fn tech_badges_report_overflow() {
        let creation = item(&["WebGL", "GLSL", "Noise", "Shaders", "Canvas"]);
        let badges = creation.tech_badges(3);
        assert_eq!(badges.shown, vec!["WebGL", "GLSL", "Noise"]);
        assert_eq!(badges.overflow, 2);

        let small = item(&["WebGL"]);
        assert_eq!(small.tech_badges(3).overflow, 0);
    }

    #[test]
    fn primary_link_prefers_sandbox() {
        let mut creation = item(&[]);
        assert_eq!(creation.primary_link(), Some("https://example.com/wave"));
        creation.code_sandbox_url = Some("https://codesandbox.io/s/wave".to_string());
        assert_eq!(creation.primary_link(), Some("https://codesandbox.io/s/wave"));
    }
}
