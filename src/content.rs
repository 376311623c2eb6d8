use rust_embed::Embed;
use serde::Deserialize;
use std::sync::LazyLock;
use thiserror::Error;

use crate::page::SiteSettings;

pub const SITE_FILE: &str = "site.json";

static SITE_CONTENT: LazyLock<Result<SiteContent, ContentError>> =
    LazyLock::new(|| load(SITE_FILE));

#[derive(Embed)]
#[folder = "content"]
pub struct ContentAssets;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("content file not found: {0}")]
    Missing(String),
    #[error("content file {0} is not valid UTF-8")]
    Utf8(String),
    #[error("couldn't parse {path}: {message}")]
    Parse { path: String, message: String },
}

#[derive(Debug, Clone, Deserialize)]
pub struct SiteContent {
    pub owner: Owner,
    pub hero: Hero,
    pub about: About,
    pub skills: Skills,
    pub projects: Projects,
    pub contact: ContactInfo,
    #[serde(default)]
    pub socials: Vec<SocialLink>,
    #[serde(default)]
    pub settings: SiteSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Owner {
    pub name: String,
    /// Logo text in the sidebar.
    pub brand: String,
    pub role: String,
    pub avatar: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Hero {
    pub badge: String,
    pub headline: String,
    pub highlight: String,
    pub intro: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct About {
    pub image: String,
    pub paragraphs: Vec<String>,
    #[serde(default)]
    pub stats: Vec<Stat>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Stat {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Skills {
    pub intro: String,
    pub categories: Vec<SkillCategory>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SkillCategory {
    pub title: String,
    pub icon: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Projects {
    pub intro: String,
    pub items: Vec<Project>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub image: String,
    pub link: String,
    pub github: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContactInfo {
    pub intro: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub quote: String,
    pub quote_author: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SocialLink {
    pub platform: String,
    pub url: String,
    pub icon: String,
}

pub fn parse(path: &str, raw: &str) -> Result<SiteContent, ContentError> {
    serde_json::from_str(raw).map_err(|e| ContentError::Parse {
        path: path.to_string(),
        message: e.to_string(),
    })
}

fn load(path: &str) -> Result<SiteContent, ContentError> {
    let file = ContentAssets::get(path).ok_or_else(|| ContentError::Missing(path.to_string()))?;
    let raw = std::str::from_utf8(&file.data).map_err(|_| ContentError::Utf8(path.to_string()))?;
    parse(path, raw)
}

/// The embedded page content, parsed on first use.
pub fn site_content() -> Result<&'static SiteContent, ContentError> {
    SITE_CONTENT.as_ref().map_err(Clone::clone)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_content_parses() {
        let content = site_content().expect("embedded content should parse");
        assert!(!content.owner.name.is_empty());
        assert!(content.projects.items.len() > content.settings.page.initial_projects);
        assert!(!content.skills.categories.is_empty());
        for category in &content.skills.categories {
            assert!(!category.skills.is_empty(), "{} has no skills", category.title);
        }
    }

    #[test]
    fn test_project_ids_unique() {
        let content = site_content().expect("embedded content should parse");
        let mut ids = content
            .projects
            .items
            .iter()
            .map(|p| p.id)
            .collect::<Vec<_>>();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), content.projects.items.len());
    }

    #[test]
    fn test_content_icons_have_styles() {
        let css = include_str!("../input.css");
        let content = site_content().expect("embedded content should parse");
        let icons = content
            .skills
            .categories
            .iter()
            .map(|c| c.icon.as_str())
            .chain(content.socials.iter().map(|s| s.icon.as_str()));
        for icon in icons {
            assert!(css.contains(&format!(".{icon} {{")), "no style for {icon}");
        }
    }

    #[test]
    fn test_missing_file() {
        assert_eq!(
            load("nope.json").map(|_| ()),
            Err(ContentError::Missing("nope.json".to_string()))
        );
    }

    #[test]
    fn test_parse_error_names_file() {
        let err = parse("broken.json", "{ \"owner\": 1 }").expect_err("should not parse");
        assert!(matches!(err, ContentError::Parse { ref path, .. } if path == "broken.json"));
        assert!(err.to_string().starts_with("couldn't parse broken.json"));
    }
}
