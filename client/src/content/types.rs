//! Static content records rendered by the portfolio sections.
//!
//! DESIGN
//! ======
//! Every record is hand-authored in `content/portfolio.json` and never changes
//! after load. Category and section keys are closed enums so a typo in the data
//! file fails at parse time instead of silently producing an empty filter.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use crate::state::filter::Category;

/// Number of technology tags shown on a project card before the `+N` tag.
pub const PREVIEW_TECH_LIMIT: usize = 3;

/// Named in-page regions the navigation can jump to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    Home,
    About,
    Projects,
    Skills,
    Contact,
}

impl SectionId {
    /// DOM id of the section element.
    #[must_use]
    pub fn anchor(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Projects => "projects",
            Self::Skills => "skills",
            Self::Contact => "contact",
        }
    }

    /// Fragment link used as the `href` fallback when scripting is off.
    #[must_use]
    pub fn href(self) -> &'static str {
        match self {
            Self::Home => "#home",
            Self::About => "#about",
            Self::Projects => "#projects",
            Self::Skills => "#skills",
            Self::Contact => "#contact",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectCategory {
    Frontend,
    Backend,
    Fullstack,
    Mobile,
}

impl Category for ProjectCategory {
    const ALL: &'static [Self] = &[Self::Frontend, Self::Backend, Self::Fullstack, Self::Mobile];

    fn key(self) -> &'static str {
        match self {
            Self::Frontend => "frontend",
            Self::Backend => "backend",
            Self::Fullstack => "fullstack",
            Self::Mobile => "mobile",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Frontend => "Frontend",
            Self::Backend => "Backend",
            Self::Fullstack => "Full Stack",
            Self::Mobile => "Mobile",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Frontend,
    Backend,
    Tools,
    Mobile,
}

impl Category for SkillCategory {
    const ALL: &'static [Self] = &[Self::Frontend, Self::Backend, Self::Tools, Self::Mobile];

    fn key(self) -> &'static str {
        match self {
            Self::Frontend => "frontend",
            Self::Backend => "backend",
            Self::Tools => "tools",
            Self::Mobile => "mobile",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Frontend => "Frontend",
            Self::Backend => "Backend",
            Self::Tools => "Tools",
            Self::Mobile => "Mobile",
        }
    }
}

impl SkillCategory {
    /// Icon class shown on the filter button for this category.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Frontend => "fas fa-palette",
            Self::Backend => "fas fa-server",
            Self::Tools => "fas fa-tools",
            Self::Mobile => "fas fa-mobile-alt",
        }
    }
}

/// Owner details shared by the hero, about, contact and footer sections.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub brand: String,
    /// Role line revealed by the hero typing animation.
    pub role: String,
    pub hero_blurb: String,
    pub about_heading: String,
    pub about_paragraphs: Vec<String>,
    pub footer_blurb: String,
    pub resume_href: String,
    pub email: String,
    pub phone: String,
    pub phone_href: String,
    pub github_url: String,
}

impl Profile {
    #[must_use]
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NavLink {
    pub label: String,
    pub target: SectionId,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
    pub icon: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Highlight {
    pub title: String,
    pub description: String,
    pub icon: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub category: ProjectCategory,
    pub summary: String,
    pub details: String,
    pub technologies: Vec<String>,
    pub live_url: String,
    pub source_url: String,
    #[serde(default)]
    pub featured: bool,
}

impl Project {
    /// Technologies shown on the card, plus how many were left off.
    #[must_use]
    pub fn preview_technologies(&self) -> (&[String], usize) {
        let shown = self.technologies.len().min(PREVIEW_TECH_LIMIT);
        (&self.technologies[..shown], self.technologies.len() - shown)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Proficiency percentage, `0..=100`.
    pub level: u8,
    pub icon: String,
    pub color: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SkillGroup {
    pub category: SkillCategory,
    pub title: String,
    pub icon: String,
    pub skills: Vec<Skill>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SummaryItem {
    pub value: String,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContactEntry {
    pub title: String,
    pub value: String,
    pub icon: String,
    pub color: String,
    #[serde(default)]
    pub link: Option<String>,
}

impl ContactEntry {
    /// External links open in a new tab; `mailto:`/`tel:` stay in place.
    #[must_use]
    pub fn opens_new_tab(&self) -> bool {
        self.link.as_deref().is_some_and(is_external)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub platform: String,
    pub icon: String,
    pub url: String,
    pub color: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub title: String,
    pub description: String,
    pub icon: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FooterLink {
    pub label: String,
    pub href: String,
}

/// Whether a link leaves the site.
#[must_use]
pub fn is_external(link: &str) -> bool {
    link.starts_with("http")
}
