//! Content repository contracts and the in-memory catalog.
//!
//! # Responsibility
//! - Expose read-only access to projects, creations, tracks and profile.
//! - Load catalog content from JSON and reject malformed collections.
//!
//! # Invariants
//! - Ids are unique per collection and match the slug pattern.
//! - Tags are non-blank and never contain the query separator `,`.
//! - A catalog is immutable once constructed.

use crate::filter::query::TAG_SEPARATOR;
use crate::filter::tags::available_tags;
use crate::model::creation::CreationItem;
use crate::model::item::DisplayItem;
use crate::model::profile::PersonalInfo;
use crate::model::project::Project;
use crate::model::track::Track;
use log::{error, info};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

const BUILTIN_CATALOG_JSON: &str = include_str!("../../content/catalog.json");

static SLUG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("valid slug regex"));

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Error for catalog loading, validation and lookups.
#[derive(Debug)]
pub enum CatalogError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse(serde_json::Error),
    DuplicateId {
        collection: &'static str,
        id: String,
    },
    InvalidSlug {
        collection: &'static str,
        id: String,
    },
    InvalidTag {
        item: String,
        tag: String,
    },
    ProjectNotFound(String),
    TrackNotFound(String),
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read catalog `{}`: {source}", path.display())
            }
            Self::Parse(err) => write!(f, "invalid catalog json: {err}"),
            Self::DuplicateId { collection, id } => {
                write!(f, "duplicate {collection} id: `{id}`")
            }
            Self::InvalidSlug { collection, id } => {
                write!(f, "invalid {collection} id `{id}`; expected lowercase-kebab-case")
            }
            Self::InvalidTag { item, tag } => write!(f, "invalid tag `{tag}` on `{item}`"),
            Self::ProjectNotFound(slug) => write!(f, "project not found: {slug}"),
            Self::TrackNotFound(id) => write!(f, "track not found: {id}"),
        }
    }
}

impl Error for CatalogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

/// Read-only access to site content.
pub trait ContentRepository {
    fn profile(&self) -> &PersonalInfo;
    fn projects(&self) -> &[Project];
    fn creations(&self) -> &[CreationItem];
    fn tracks(&self) -> &[Track];

    /// Looks up one project by slug for the detail page.
    fn project(&self, slug: &str) -> CatalogResult<&Project> {
        self.projects()
            .iter()
            .find(|project| project.slug == slug)
            .ok_or_else(|| CatalogError::ProjectNotFound(slug.to_string()))
    }

    fn track(&self, id: &str) -> CatalogResult<&Track> {
        self.tracks()
            .iter()
            .find(|track| track.id == id)
            .ok_or_else(|| CatalogError::TrackNotFound(id.to_string()))
    }

    /// Sorted, deduplicated project tags for the work grid pills.
    fn project_tags(&self) -> Vec<String> {
        available_tags(self.projects())
    }
}

/// In-memory content collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    profile: PersonalInfo,
    #[serde(default)]
    projects: Vec<Project>,
    #[serde(default)]
    creations: Vec<CreationItem>,
    #[serde(default)]
    tracks: Vec<Track>,
}

impl Catalog {
    /// Builds and validates a catalog.
    pub fn try_new(
        profile: PersonalInfo,
        projects: Vec<Project>,
        creations: Vec<CreationItem>,
        tracks: Vec<Track>,
    ) -> CatalogResult<Self> {
        let catalog = Self {
            profile,
            projects,
            creations,
            tracks,
        };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Content shipped with the crate.
    pub fn builtin() -> CatalogResult<Self> {
        Self::from_json_str(BUILTIN_CATALOG_JSON)
    }

    /// Parses and validates catalog JSON.
    pub fn from_json_str(json: &str) -> CatalogResult<Self> {
        let catalog: Catalog = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Reads a JSON catalog from disk.
    pub fn load(path: &Path) -> CatalogResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        match Self::from_json_str(&json) {
            Ok(catalog) => {
                info!(
                    "event=catalog_load module=repo status=ok path={} projects={} creations={} tracks={}",
                    path.display(),
                    catalog.projects.len(),
                    catalog.creations.len(),
                    catalog.tracks.len()
                );
                Ok(catalog)
            }
            Err(err) => {
                error!(
                    "event=catalog_load module=repo status=error path={} error={}",
                    path.display(),
                    err
                );
                Err(err)
            }
        }
    }

    /// Checks id uniqueness, id shape and tag shape across all collections.
    pub fn validate(&self) -> CatalogResult<()> {
        validate_ids("project", self.projects.iter().map(DisplayItem::id))?;
        validate_ids("creation", self.creations.iter().map(DisplayItem::id))?;
        validate_ids("track", self.tracks.iter().map(|track| track.id.as_str()))?;

        for project in &self.projects {
            for tag in &project.tags {
                if tag.trim().is_empty() || tag.contains(TAG_SEPARATOR) {
                    return Err(CatalogError::InvalidTag {
                        item: project.slug.clone(),
                        tag: tag.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Serializes the catalog back to pretty JSON.
    pub fn to_json_pretty(&self) -> CatalogResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl ContentRepository for Catalog {
    fn profile(&self) -> &PersonalInfo {
        &self.profile
    }

    fn projects(&self) -> &[Project] {
        &self.projects
    }

    fn creations(&self) -> &[CreationItem] {
        &self.creations
    }

    fn tracks(&self) -> &[Track] {
        &self.tracks
    }
}

fn validate_ids<'a>(
    collection: &'static str,
    ids: impl Iterator<Item = &'a str>,
) -> CatalogResult<()> {
    let mut seen = BTreeSet::new();
    for id in ids {
        if !SLUG_RE.is_match(id) {
            return Err(CatalogError::InvalidSlug {
                collection,
                id: id.to_string(),
            });
        }
        if !seen.insert(id) {
            return Err(CatalogError::DuplicateId {
                collection,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{validate_ids, Catalog, CatalogError, ContentRepository};

    #[test]
    fn builtin_catalog_is_valid() {
        let catalog = Catalog::builtin().expect("builtin catalog should validate");
        assert!(!catalog.projects().is_empty());
        assert_eq!(catalog.creations().len(), 9);
        assert_eq!(catalog.tracks().len(), 5);
    }

    #[test]
    fn slug_pattern_accepts_kebab_case_only() {
        assert!(validate_ids("project", ["neon-dreams", "a1", "x-2-y"].into_iter()).is_ok());
        for bad in ["Neon", "-lead", "trail-", "double--dash", "", "with space"] {
            let err = validate_ids("project", [bad].into_iter()).expect_err("slug must be rejected");
            assert!(matches!(err, CatalogError::InvalidSlug { .. }), "{bad}");
        }
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let err = validate_ids("track", ["one", "two", "one"].into_iter())
            .expect_err("duplicate must be rejected");
        assert!(matches!(err, CatalogError::DuplicateId { id, .. } if id == "one"));
    }
}
