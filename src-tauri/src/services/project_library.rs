// ProjectLibrary Service
// Loads the project collection and answers filter queries

use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use chrono::NaiveDate;
use thiserror::Error;

use crate::models::{FilterOutcome, Project, ProjectView, Settings};

const PROJECTS_FILE: &str = "projects.json";

/// Filter category that matches every project.
pub const CATEGORY_ALL: &str = "all";

#[derive(Debug, Error)]
enum LibraryError {
    #[error("Failed to read projects file: {0}")]
    Read(#[from] std::io::Error),
    #[error("Failed to parse projects file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Owns the project collection: projects.json under the app data
/// directory when present and valid, otherwise the built-in sample
/// set. Read failures are logged and fall back, never fatal.
#[derive(Clone)]
pub struct ProjectLibrary {
    projects_path: PathBuf,
    cache: Arc<RwLock<Option<Vec<Project>>>>,
}

impl ProjectLibrary {
    pub fn new(app_data_dir: PathBuf) -> Self {
        Self {
            projects_path: app_data_dir.join(PROJECTS_FILE),
            cache: Arc::new(RwLock::new(None)),
        }
    }

    /// The full collection, in file order.
    pub fn all(&self) -> Vec<Project> {
        if let Ok(cache) = self.cache.read() {
            if let Some(ref projects) = *cache {
                return projects.clone();
            }
        }

        let projects = match self.read_from_disk() {
            Ok(Some(projects)) => projects,
            Ok(None) => builtin_projects(),
            Err(e) => {
                log::warn!("{e}, using built-in projects");
                builtin_projects()
            }
        };

        if let Ok(mut cache) = self.cache.write() {
            *cache = Some(projects.clone());
        }

        projects
    }

    fn read_from_disk(&self) -> Result<Option<Vec<Project>>, LibraryError> {
        if !self.projects_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&self.projects_path)?;
        Ok(Some(serde_json::from_str(&content)?))
    }

    /// One category + search pass over the collection. `all` matches
    /// everything; otherwise a project must carry the category. A
    /// non-empty term must additionally appear in the project's
    /// keyword string, case-insensitively.
    pub fn filter(&self, category: &str, search: &str) -> FilterOutcome {
        let projects = self.all();
        let total = projects.len();

        let visible_ids: Vec<String> = projects
            .iter()
            .filter(|project| matches_filter(project, category, search))
            .map(|project| project.id.clone())
            .collect();

        let visible_count = visible_ids.len();
        FilterOutcome {
            visible_ids,
            visible_count,
            total,
            no_results: visible_count == 0,
        }
    }

    /// Presentation records, completion dates formatted per the
    /// user's date format setting.
    pub fn views(&self, settings: &Settings) -> Vec<ProjectView> {
        self.all()
            .into_iter()
            .map(|project| project_view(project, &settings.date_format))
            .collect()
    }
}

fn matches_filter(project: &Project, category: &str, search: &str) -> bool {
    let matches_category = category == CATEGORY_ALL
        || project.categories.iter().any(|c| c == category);
    if !matches_category {
        return false;
    }

    let term = search.to_lowercase();
    term.is_empty() || project.keywords.to_lowercase().contains(&term)
}

fn project_view(project: Project, date_format: &str) -> ProjectView {
    ProjectView {
        completed_on: project
            .completed_on
            .map(|date| format_display_date(date, date_format)),
        id: project.id,
        title: project.title,
        summary: project.summary,
        categories: project.categories,
        tech: project.tech,
        repo_url: project.repo_url,
        live_url: project.live_url,
        stats: project.stats,
    }
}

/// Translate the settings panel's date format choices into chrono
/// patterns. Unrecognized values render with the default format
/// rather than erroring.
fn format_display_date(date: NaiveDate, date_format: &str) -> String {
    let pattern = match date_format {
        "DD/MM/YYYY" => "%d/%m/%Y",
        "YYYY-MM-DD" => "%Y-%m-%d",
        _ => "%m/%d/%Y",
    };
    date.format(pattern).to_string()
}

/// Sample collection shown until the user drops a projects.json into
/// the app data directory.
fn builtin_projects() -> Vec<Project> {
    fn sample(
        id: &str,
        title: &str,
        summary: &str,
        categories: &[&str],
        keywords: &str,
        tech: &[&str],
        completed_on: Option<NaiveDate>,
        repo_url: Option<&str>,
    ) -> Project {
        Project {
            id: id.to_string(),
            title: title.to_string(),
            summary: summary.to_string(),
            categories: categories.iter().map(|c| c.to_string()).collect(),
            keywords: keywords.to_string(),
            tech: tech.iter().map(|t| t.to_string()).collect(),
            completed_on,
            repo_url: repo_url.map(|u| u.to_string()),
            live_url: None,
            stats: None,
        }
    }

    vec![
        sample(
            "task-board",
            "Task Board",
            "Kanban-style task tracker with offline sync and drag-and-drop lanes.",
            &["web"],
            "kanban tasks productivity offline sync typescript react",
            &["TypeScript", "React", "IndexedDB"],
            NaiveDate::from_ymd_opt(2024, 11, 2),
            Some("https://github.com/example/task-board"),
        ),
        sample(
            "railgrep",
            "railgrep",
            "Fast structured log search for terminal people.",
            &["cli"],
            "logs grep search terminal cli rust performance",
            &["Rust", "clap"],
            NaiveDate::from_ymd_opt(2024, 5, 18),
            Some("https://github.com/example/railgrep"),
        ),
        sample(
            "trail-companion",
            "Trail Companion",
            "Offline-first hiking maps with elevation profiles.",
            &["mobile"],
            "hiking maps gps offline mobile kotlin android",
            &["Kotlin", "MapLibre"],
            NaiveDate::from_ymd_opt(2023, 9, 30),
            None,
        ),
        sample(
            "commit-pulse",
            "Commit Pulse",
            "Dashboard visualizing team commit activity and review latency.",
            &["web", "data"],
            "dashboard charts git analytics d3 visualization",
            &["SvelteKit", "D3"],
            NaiveDate::from_ymd_opt(2025, 2, 14),
            Some("https://github.com/example/commit-pulse"),
        ),
    ]
}
