use serde::Deserialize;

use crate::contact::ContactTimings;
use crate::sections::ScrollConfig;

/// Scroll-driven presentation settings outside the section tracker.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Scroll offset past which the back-to-top button shows.
    pub back_to_top_threshold: f64,
    /// Scroll distance over which the hero's scroll indicator fades out.
    pub indicator_fade_distance: f64,
    /// Height kept clear above a section when scrolling back to it.
    pub navbar_offset: f64,
    /// Projects shown before "View All Projects" is clicked.
    pub initial_projects: usize,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            back_to_top_threshold: 400.0,
            indicator_fade_distance: 300.0,
            navbar_offset: 80.0,
            initial_projects: 2,
        }
    }
}

impl PageConfig {
    pub fn shows_back_to_top(&self, scroll_y: f64) -> bool {
        scroll_y > self.back_to_top_threshold
    }

    pub fn indicator_opacity(&self, scroll_y: f64) -> f64 {
        if self.indicator_fade_distance <= 0.0 {
            return if scroll_y > 0.0 { 0.0 } else { 1.0 };
        }
        (1.0 - scroll_y / self.indicator_fade_distance).clamp(0.0, 1.0)
    }

    /// Document offset to scroll to so a section whose top is at `rect_top`
    /// (relative to the viewport) lands just below the navbar.
    pub fn section_scroll_target(&self, rect_top: f64, scroll_y: f64) -> f64 {
        rect_top + scroll_y - self.navbar_offset
    }

    /// Splits the projects into the always-visible ones and the expandable rest.
    pub fn split_projects<'a, T>(&self, projects: &'a [T]) -> (&'a [T], &'a [T]) {
        projects.split_at(self.initial_projects.min(projects.len()))
    }
}

/// Every tunable of the page in one place, provided as context to the app.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteSettings {
    pub scroll: ScrollConfig,
    pub contact: ContactTimings,
    pub page: PageConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_back_to_top_threshold() {
        let config = PageConfig::default();
        assert!(!config.shows_back_to_top(0.0));
        assert!(!config.shows_back_to_top(400.0));
        assert!(config.shows_back_to_top(400.5));
    }

    #[test]
    fn test_indicator_fades_out() {
        let config = PageConfig::default();
        assert_eq!(config.indicator_opacity(0.0), 1.0);
        assert_eq!(config.indicator_opacity(150.0), 0.5);
        assert_eq!(config.indicator_opacity(300.0), 0.0);
        assert_eq!(config.indicator_opacity(1200.0), 0.0);

        let instant = PageConfig {
            indicator_fade_distance: 0.0,
            ..Default::default()
        };
        assert_eq!(instant.indicator_opacity(0.0), 1.0);
        assert_eq!(instant.indicator_opacity(1.0), 0.0);
    }

    #[test]
    fn test_section_scroll_target() {
        let config = PageConfig::default();
        // section is 500px above the viewport while scrolled to 3000
        assert_eq!(config.section_scroll_target(-500.0, 3000.0), 2420.0);
    }

    #[test]
    fn test_split_projects() {
        let config = PageConfig::default();
        let items = [1, 2, 3, 4];
        assert_eq!(config.split_projects(&items), (&items[..2], &items[2..]));
        let few = [1];
        assert_eq!(config.split_projects(&few), (&few[..], &few[1..]));
    }

    #[test]
    fn test_settings_partial_override() {
        let settings: SiteSettings =
            serde_json::from_str(r#"{ "page": { "initial_projects": 4 } }"#)
                .expect("settings should parse");
        assert_eq!(settings.page.initial_projects, 4);
        assert_eq!(settings.page.navbar_offset, 80.0);
        assert_eq!(settings.scroll, ScrollConfig::default());
        assert_eq!(settings.contact, ContactTimings::default());
    }
}
