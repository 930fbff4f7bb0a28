// Settings Model
// The user preferences record persisted to settings.json

use serde::{Deserialize, Serialize};

/// Theme selection as stored. `Auto` is resolved against the system
/// color scheme at apply time and is never written back as a
/// concrete theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeChoice {
    #[default]
    Light,
    Dark,
    Auto,
}

/// Layout density of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Desktop,
    Tablet,
    Mobile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ImageQuality {
    Low,
    #[default]
    Medium,
    High,
}

/// The preferences record: one flat object with a fixed key set.
/// Unknown persisted keys are dropped on load; missing keys fall back
/// to the defaults below. Values are not validated beyond what the
/// settings panel offers (`accent` is a free string on purpose).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    // Appearance
    pub theme: ThemeChoice,
    pub accent: String,
    pub view_mode: ViewMode,

    // Accessibility
    pub reduced_motion: bool,
    pub high_contrast: bool,

    // Content
    pub projects_per_page: u32,
    pub show_tech_badges: bool,
    pub show_project_stats: bool,
    pub auto_play_videos: bool,

    // Performance
    pub image_quality: ImageQuality,
    pub lazy_loading: bool,
    pub preload_images: bool,

    // Localization
    pub language: String,
    pub date_format: String,

    // Privacy & consent
    pub analytics: bool,
    pub cookies: bool,
    pub tracking: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: ThemeChoice::default(),
            accent: "blue".to_string(),
            view_mode: ViewMode::default(),
            reduced_motion: false,
            high_contrast: false,
            projects_per_page: 9,
            show_tech_badges: true,
            show_project_stats: true,
            auto_play_videos: false,
            image_quality: ImageQuality::default(),
            lazy_loading: true,
            preload_images: false,
            language: "en".to_string(),
            date_format: "MM/DD/YYYY".to_string(),
            analytics: true,
            cookies: true,
            tracking: false,
        }
    }
}
