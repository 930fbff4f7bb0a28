// Project Model
// Portfolio project cards and filter results

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectStats {
    pub stars: u32,
    pub forks: u32,
}

/// A project card as stored in projects.json. `categories` drives the
/// filter buttons; `keywords` is the search haystack.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub summary: String,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub keywords: String,
    #[serde(default)]
    pub tech: Vec<String>,
    #[serde(default)]
    pub completed_on: Option<NaiveDate>,
    #[serde(default)]
    pub repo_url: Option<String>,
    #[serde(default)]
    pub live_url: Option<String>,
    #[serde(default)]
    pub stats: Option<ProjectStats>,
}

/// Presentation form of a project: the completion date is already
/// formatted per the user's date format setting.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectView {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub categories: Vec<String>,
    pub tech: Vec<String>,
    pub completed_on: Option<String>,
    pub repo_url: Option<String>,
    pub live_url: Option<String>,
    pub stats: Option<ProjectStats>,
}

/// Outcome of one category + search pass over the collection.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterOutcome {
    pub visible_ids: Vec<String>,
    pub visible_count: usize,
    pub total: usize,
    pub no_results: bool,
}
