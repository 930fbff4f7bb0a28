// Appearance Service
// Projects the preferences record onto the document state

use crate::models::{
    DocumentState, ImageQuality, ImageRendering, ResolvedTheme, Settings, SystemPreferences,
    ThemeChoice,
};

/// Resolve the stored theme choice against the live system
/// preference. `auto` is decided here, at apply time, and nowhere
/// else; the resolution is never persisted.
pub fn resolve_theme(choice: ThemeChoice, system: &SystemPreferences) -> ResolvedTheme {
    match choice {
        ThemeChoice::Light => ResolvedTheme::Light,
        ThemeChoice::Dark => ResolvedTheme::Dark,
        ThemeChoice::Auto => {
            if system.prefers_dark_scheme {
                ResolvedTheme::Dark
            } else {
                ResolvedTheme::Light
            }
        }
    }
}

fn image_rendering(quality: ImageQuality) -> ImageRendering {
    match quality {
        ImageQuality::Low => ImageRendering::Pixelated,
        ImageQuality::Medium | ImageQuality::High => ImageRendering::Auto,
    }
}

/// Build the document state for the current record. Pure and
/// idempotent: applying an unchanged record yields an identical
/// projection.
pub fn project_document(settings: &Settings, system: &SystemPreferences) -> DocumentState {
    DocumentState {
        theme: resolve_theme(settings.theme, system),
        accent: settings.accent.clone(),
        view_mode: settings.view_mode,
        reduced_motion: settings.reduced_motion,
        high_contrast: settings.high_contrast,
        language: settings.language.clone(),
        show_tech_badges: settings.show_tech_badges,
        show_project_stats: settings.show_project_stats,
        auto_play_videos: settings.auto_play_videos,
        image_rendering: image_rendering(settings.image_quality),
        lazy_loading: settings.lazy_loading,
        preload_images: settings.preload_images,
        projects_per_page: settings.projects_per_page,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dark_system() -> SystemPreferences {
        SystemPreferences {
            prefers_dark_scheme: true,
            prefers_reduced_motion: false,
        }
    }

    #[test]
    fn test_auto_theme_resolves_at_apply_time() {
        let settings = Settings {
            theme: ThemeChoice::Auto,
            ..Settings::default()
        };

        let dark = project_document(&settings, &dark_system());
        assert_eq!(dark.theme, ResolvedTheme::Dark);

        // Same record, flipped system preference: resolution follows
        let light = project_document(&settings, &SystemPreferences::default());
        assert_eq!(light.theme, ResolvedTheme::Light);
    }

    #[test]
    fn test_explicit_theme_ignores_system() {
        let settings = Settings {
            theme: ThemeChoice::Light,
            ..Settings::default()
        };

        let state = project_document(&settings, &dark_system());
        assert_eq!(state.theme, ResolvedTheme::Light);
    }

    #[test]
    fn test_projection_is_idempotent() {
        let settings = Settings::default();
        let system = SystemPreferences::default();

        assert_eq!(
            project_document(&settings, &system),
            project_document(&settings, &system)
        );
    }

    #[test]
    fn test_low_quality_pixelates_images() {
        let settings = Settings {
            image_quality: ImageQuality::Low,
            ..Settings::default()
        };
        let state = project_document(&settings, &SystemPreferences::default());
        assert_eq!(state.image_rendering, ImageRendering::Pixelated);

        let state = project_document(&Settings::default(), &SystemPreferences::default());
        assert_eq!(state.image_rendering, ImageRendering::Auto);
    }
}
