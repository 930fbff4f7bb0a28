// Document State Model
// The projection of the preferences record onto the page root

use serde::{Deserialize, Serialize};

use crate::models::ViewMode;

/// A theme after `auto` resolution: what the page actually renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolvedTheme {
    Light,
    Dark,
}

/// Image rendering hint applied to page images.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageRendering {
    Auto,
    Pixelated,
}

/// Live system preferences sampled by the webview (`matchMedia`) and
/// passed in with each apply, so `auto` theme resolution is never
/// cached on the backend.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemPreferences {
    pub prefers_dark_scheme: bool,
    pub prefers_reduced_motion: bool,
}

/// Everything the page applies to its root element and content
/// blocks after a settings change. Produced only by
/// `appearance::project_document`; same record in, same state out.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentState {
    pub theme: ResolvedTheme,
    pub accent: String,
    pub view_mode: ViewMode,
    pub reduced_motion: bool,
    pub high_contrast: bool,
    pub language: String,
    pub show_tech_badges: bool,
    pub show_project_stats: bool,
    pub auto_play_videos: bool,
    pub image_rendering: ImageRendering,
    pub lazy_loading: bool,
    pub preload_images: bool,
    pub projects_per_page: u32,
}
