//! Portfolio content loaded from `content/portfolio.json`.
//!
//! SYSTEM CONTEXT
//! ==============
//! Sections render from one immutable [`Portfolio`] value. The JSON file is
//! embedded at compile time and parsed once on first access, so SSR and the
//! hydrated bundle always see the same data.
//!
//! ERROR HANDLING
//! ==============
//! A malformed file is a build-time mistake caught by the unit tests. At
//! runtime a load failure is logged and the page renders with empty content
//! instead of panicking during hydration.


pub mod types;

use std::collections::HashSet;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

pub use types::*;

const PORTFOLIO_JSON: &str = include_str!("../../content/portfolio.json");

static PORTFOLIO: LazyLock<Portfolio> = LazyLock::new(|| match parse(PORTFOLIO_JSON) {
    Ok(portfolio) => portfolio,
    Err(e) => {
        log::error!("portfolio content failed to load: {e}");
        Portfolio::default()
    }
});

#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("content parse failed: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("duplicate project id {0}")]
    DuplicateProjectId(u32),

    #[error("skill {name:?} has level {level}, expected 0..=100")]
    SkillLevel { name: String, level: u8 },

    #[error("{0} must not be empty")]
    Empty(&'static str),
}

/// Everything the page displays.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    pub profile: Profile,
    pub nav_links: Vec<NavLink>,
    pub stats: Vec<Stat>,
    pub highlights: Vec<Highlight>,
    pub projects: Vec<Project>,
    pub skill_groups: Vec<SkillGroup>,
    pub skill_summary: Vec<SummaryItem>,
    pub contact_entries: Vec<ContactEntry>,
    pub social_links: Vec<SocialLink>,
    pub footer_social_links: Vec<SocialLink>,
    pub services: Vec<Service>,
    pub footer_links: Vec<FooterLink>,
}

impl Portfolio {
    /// Check the invariants the sections rely on.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant.
    pub fn validate(&self) -> Result<(), ContentError> {
        if self.nav_links.is_empty() {
            return Err(ContentError::Empty("nav_links"));
        }
        if self.projects.is_empty() {
            return Err(ContentError::Empty("projects"));
        }
        if self.skill_groups.is_empty() {
            return Err(ContentError::Empty("skill_groups"));
        }

        let mut seen = HashSet::new();
        for project in &self.projects {
            if !seen.insert(project.id) {
                return Err(ContentError::DuplicateProjectId(project.id));
            }
        }

        for skill in self.skill_groups.iter().flat_map(|group| &group.skills) {
            if skill.level > 100 {
                return Err(ContentError::SkillLevel { name: skill.name.clone(), level: skill.level });
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn project(&self, id: u32) -> Option<&Project> {
        self.projects.iter().find(|project| project.id == id)
    }

    #[must_use]
    pub fn skill_group(&self, category: SkillCategory) -> Option<&SkillGroup> {
        self.skill_groups.iter().find(|group| group.category == category)
    }

    /// Contact entries that carry a link, used by the footer quick-contact list.
    pub fn linked_contacts(&self) -> impl Iterator<Item = &ContactEntry> {
        self.contact_entries.iter().filter(|entry| entry.link.is_some())
    }
}

/// Parse and validate portfolio content.
///
/// # Errors
///
/// Returns [`ContentError`] if the JSON is malformed or violates an invariant.
pub fn parse(raw: &str) -> Result<Portfolio, ContentError> {
    let portfolio: Portfolio = serde_json::from_str(raw)?;
    portfolio.validate()?;
    Ok(portfolio)
}

/// The embedded portfolio, parsed on first call.
pub fn portfolio() -> &'static Portfolio {
    &PORTFOLIO
}
