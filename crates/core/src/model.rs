//! Portfolio document model.
//!
//! Field names follow the JSON wire format (camelCase) so a document
//! fetched from any source decodes directly into these types.

use serde::{Deserialize, Serialize};

/// A finished project shown in the project gallery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub image: String,
    pub github_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    /// Display only. Never used for lookup.
    #[serde(default)]
    pub technologies: Vec<String>,
}

/// A work-in-progress project. Same shape as [`Project`] without a live URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WipProject {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub image: String,
    pub github_url: String,
    #[serde(default)]
    pub technologies: Vec<String>,
}

/// A multimedia gallery entry. Ordered by position, no identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultimediaItem {
    pub title: String,
    pub description: String,
    pub image: String,
}

/// The root payload rendered by the page.
///
/// Absent top-level sections decode as empty; unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioDocument {
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub multimedia: Vec<MultimediaItem>,
    #[serde(default)]
    pub wip: Vec<WipProject>,
}

/// Number of entries per section, used for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionCounts {
    pub projects: usize,
    pub multimedia: usize,
    pub wip: usize,
}

impl PortfolioDocument {
    /// Decode a document from raw JSON bytes.
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }

    /// Every image reference in document order: projects, multimedia, wip.
    pub fn images(&self) -> impl Iterator<Item = &str> {
        self.projects
            .iter()
            .map(|p| p.image.as_str())
            .chain(self.multimedia.iter().map(|m| m.image.as_str()))
            .chain(self.wip.iter().map(|w| w.image.as_str()))
    }

    /// Mutable access to every image reference, in the same order as
    /// [`images`](Self::images). Only used before the document is published.
    pub fn images_mut(&mut self) -> impl Iterator<Item = &mut String> {
        self.projects
            .iter_mut()
            .map(|p| &mut p.image)
            .chain(self.multimedia.iter_mut().map(|m| &mut m.image))
            .chain(self.wip.iter_mut().map(|w| &mut w.image))
    }

    pub fn counts(&self) -> SectionCounts {
        SectionCounts {
            projects: self.projects.len(),
            multimedia: self.multimedia.len(),
            wip: self.wip.len(),
        }
    }
}
