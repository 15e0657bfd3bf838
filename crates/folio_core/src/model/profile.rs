//! Biography and contact details for the home, about and contact pages.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One milestone on the about page timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub year: String,
    pub title: String,
    pub description: String,
}

/// Site owner information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub name: String,
    pub title: String,
    /// Meta description used by the home page.
    pub description: String,
    pub hero_description: String,
    pub email: String,
    pub location: String,
    #[serde(default)]
    pub resume_url: Option<String>,
    /// Platform id (`github`, `twitter`, ...) to profile URL.
    #[serde(default)]
    pub social: BTreeMap<String, String>,
    #[serde(default)]
    pub about_intro: String,
    #[serde(default)]
    pub timeline: Vec<TimelineEntry>,
}

impl PersonalInfo {
    /// Social links with blank URLs skipped, sorted by platform id.
    pub fn social_links(&self) -> impl Iterator<Item = (&str, &str)> {
        self.social
            .iter()
            .filter(|(_, url)| !url.trim().is_empty())
            .map(|(platform, url)| (platform.as_str(), url.as_str()))
    }

    /// `mailto:` link for the contact page.
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}
