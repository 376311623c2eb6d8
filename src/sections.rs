use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

/// The page sections, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Home,
    About,
    Skills,
    Projects,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 5] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Skills,
        SectionId::Projects,
        SectionId::Contact,
    ];

    /// DOM id of the `<section>` element.
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Skills => "skills",
            SectionId::Projects => "projects",
            SectionId::Contact => "contact",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::About => "About",
            SectionId::Skills => "Skills",
            SectionId::Projects => "Projects",
            SectionId::Contact => "Contact",
        }
    }

    pub fn href(&self) -> String {
        format!("#{}", self.as_str())
    }

    pub fn last() -> SectionId {
        SectionId::Contact
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown section: {0}")]
pub struct UnknownSection(pub String);

impl FromStr for SectionId {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.strip_prefix('#').unwrap_or(s);
        SectionId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

/// Vertical geometry of a rendered section, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds {
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn contains(&self, y: f64) -> bool {
        self.top <= y && y < self.top + self.height
    }
}

/// Read-only view of the rendered page, queried by the tracker.
pub trait PageLayout {
    /// `None` when the section is not rendered.
    fn section_bounds(&self, id: SectionId) -> Option<SectionBounds>;
    fn viewport_height(&self) -> f64;
    fn document_height(&self) -> f64;
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    /// Lookahead added to the scroll offset before matching sections.
    pub probe_offset: f64,
    /// Distance from the document bottom that counts as "at the bottom".
    pub bottom_threshold: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            probe_offset: 200.0,
            bottom_threshold: 50.0,
        }
    }
}

/// Computes the active section for a scroll offset.
///
/// Returns `None` when no section contains the probe and the page is not
/// scrolled to the bottom; callers keep their previous value in that case.
pub fn active_section(
    config: &ScrollConfig,
    scroll_y: f64,
    layout: &impl PageLayout,
) -> Option<SectionId> {
    if scroll_y + layout.viewport_height() >= layout.document_height() - config.bottom_threshold {
        return Some(SectionId::last());
    }

    let probe = scroll_y + config.probe_offset;
    SectionId::ALL
        .into_iter()
        .filter(|id| {
            layout
                .section_bounds(*id)
                .is_some_and(|bounds| bounds.contains(probe))
        })
        .last()
}

/// Holds the active section for a page session.
#[derive(Debug, Clone)]
pub struct ScrollTracker {
    config: ScrollConfig,
    active: SectionId,
}

impl ScrollTracker {
    pub fn new(config: ScrollConfig) -> Self {
        Self {
            config,
            active: SectionId::Home,
        }
    }

    pub fn active(&self) -> SectionId {
        self.active
    }

    /// Re-evaluates the active section. Returns the new section only when it
    /// changed, so the caller can skip re-rendering otherwise.
    pub fn observe(&mut self, scroll_y: f64, layout: &impl PageLayout) -> Option<SectionId> {
        let next = active_section(&self.config, scroll_y, layout)?;
        if next == self.active {
            return None;
        }
        log::debug!("active section {} -> {}", self.active, next);
        self.active = next;
        Some(next)
    }
}

impl Default for ScrollTracker {
    fn default() -> Self {
        Self::new(ScrollConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Sections stacked top to bottom with the given heights.
    struct StaticLayout {
        bounds: Vec<(SectionId, SectionBounds)>,
        viewport: f64,
        document: f64,
    }

    impl StaticLayout {
        fn stacked(heights: &[(SectionId, f64)], viewport: f64) -> Self {
            let mut top = 0.0;
            let mut bounds = Vec::new();
            for (id, height) in heights {
                bounds.push((
                    *id,
                    SectionBounds {
                        top,
                        height: *height,
                    },
                ));
                top += height;
            }
            Self {
                bounds,
                viewport,
                // footer below the last section
                document: top + 100.0,
            }
        }

        fn page() -> Self {
            Self::stacked(
                &[
                    (SectionId::Home, 900.0),
                    (SectionId::About, 800.0),
                    (SectionId::Skills, 700.0),
                    (SectionId::Projects, 1200.0),
                    (SectionId::Contact, 150.0),
                ],
                900.0,
            )
        }
    }

    impl PageLayout for StaticLayout {
        fn section_bounds(&self, id: SectionId) -> Option<SectionBounds> {
            self.bounds.iter().find(|(s, _)| *s == id).map(|(_, b)| *b)
        }

        fn viewport_height(&self) -> f64 {
            self.viewport
        }

        fn document_height(&self) -> f64 {
            self.document
        }
    }

    #[test]
    fn test_section_parsing() {
        assert_eq!("about".parse::<SectionId>(), Ok(SectionId::About));
        assert_eq!("#contact".parse::<SectionId>(), Ok(SectionId::Contact));
        assert!("blog".parse::<SectionId>().is_err());
        assert_eq!(SectionId::Projects.href(), "#projects");
        for id in SectionId::ALL {
            assert_eq!(id.label().to_lowercase(), id.as_str());
        }
    }

    #[test]
    fn test_probe_lookahead() {
        let layout = StaticLayout::page();
        let config = ScrollConfig::default();

        assert_eq!(active_section(&config, 0.0, &layout), Some(SectionId::Home));
        // 699 + 200 still inside home
        assert_eq!(active_section(&config, 699.0, &layout), Some(SectionId::Home));
        // 700 + 200 hits the top of about
        assert_eq!(active_section(&config, 700.0, &layout), Some(SectionId::About));
        assert_eq!(
            active_section(&config, 1600.0, &layout),
            Some(SectionId::Skills)
        );
        assert_eq!(
            active_section(&config, 2500.0, &layout),
            Some(SectionId::Projects)
        );
    }

    #[test]
    fn test_bottom_forces_last_section() {
        let layout = StaticLayout::page();
        let config = ScrollConfig::default();
        // document = 3850, viewport = 900, bottom rule applies from 2900
        assert_eq!(
            active_section(&config, 2899.0, &layout),
            Some(SectionId::Projects)
        );
        for s in [2900.0, 2925.5, 2950.0, 5000.0] {
            assert_eq!(active_section(&config, s, &layout), Some(SectionId::Contact));
        }
    }

    #[test]
    fn test_short_page_is_always_contact() {
        // the whole document fits in the viewport
        let layout = StaticLayout::stacked(&[(SectionId::Home, 300.0)], 900.0);
        let config = ScrollConfig::default();
        assert_eq!(active_section(&config, 0.0, &layout), Some(SectionId::Contact));
    }

    #[test]
    fn test_overlapping_sections_last_match_wins() {
        let layout = StaticLayout {
            bounds: vec![
                (SectionId::About, SectionBounds { top: 0.0, height: 1000.0 }),
                (SectionId::Skills, SectionBounds { top: 100.0, height: 500.0 }),
            ],
            viewport: 500.0,
            document: 5000.0,
        };
        let config = ScrollConfig::default();
        assert_eq!(active_section(&config, 0.0, &layout), Some(SectionId::Skills));
        assert_eq!(active_section(&config, 500.0, &layout), Some(SectionId::About));
    }

    #[test]
    fn test_missing_sections_are_skipped() {
        let layout = StaticLayout {
            bounds: vec![(SectionId::Skills, SectionBounds { top: 1000.0, height: 500.0 })],
            viewport: 500.0,
            document: 5000.0,
        };
        let config = ScrollConfig::default();
        assert_eq!(active_section(&config, 0.0, &layout), None);
        assert_eq!(active_section(&config, 900.0, &layout), Some(SectionId::Skills));
    }

    #[test]
    fn test_tracker_reports_changes_only() {
        let layout = StaticLayout::page();
        let mut tracker = ScrollTracker::default();
        assert_eq!(tracker.active(), SectionId::Home);

        // initial mount at the top: no change
        assert_eq!(tracker.observe(0.0, &layout), None);
        assert_eq!(tracker.observe(800.0, &layout), Some(SectionId::About));
        // idempotent for identical input
        assert_eq!(tracker.observe(800.0, &layout), None);
        assert_eq!(tracker.observe(801.0, &layout), None);
        assert_eq!(tracker.active(), SectionId::About);

        assert_eq!(tracker.observe(3000.0, &layout), Some(SectionId::Contact));
        assert_eq!(tracker.observe(0.0, &layout), Some(SectionId::Home));
    }

    #[test]
    fn test_tracker_keeps_previous_on_gap() {
        let layout = StaticLayout {
            bounds: vec![(SectionId::About, SectionBounds { top: 0.0, height: 400.0 })],
            viewport: 500.0,
            document: 5000.0,
        };
        let mut tracker = ScrollTracker::default();
        assert_eq!(tracker.observe(0.0, &layout), Some(SectionId::About));
        assert_eq!(tracker.observe(1000.0, &layout), None);
        assert_eq!(tracker.active(), SectionId::About);
    }

    #[test]
    fn test_custom_probe() {
        let layout = StaticLayout::page();
        let config = ScrollConfig {
            probe_offset: 0.0,
            bottom_threshold: 0.0,
        };
        assert_eq!(active_section(&config, 899.0, &layout), Some(SectionId::Home));
        assert_eq!(active_section(&config, 900.0, &layout), Some(SectionId::About));
    }
}
