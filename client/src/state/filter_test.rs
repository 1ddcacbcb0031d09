use std::collections::HashSet;

use super::*;
use crate::content::{self, ProjectCategory, SkillCategory};

#[test]
fn default_filter_is_all() {
    let state = FilterState::<ProjectCategory>::default();
    assert_eq!(state.active(), Filter::All);
    assert!(state.is_active(Filter::All));
}

#[test]
fn select_replaces_active_key() {
    let mut state = FilterState::default();
    state.select(Filter::Only(SkillCategory::Tools));
    assert!(state.is_active(Filter::Only(SkillCategory::Tools)));
    state.select(Filter::Only(SkillCategory::Mobile));
    assert!(!state.is_active(Filter::Only(SkillCategory::Tools)));
    assert_eq!(state.active().key(), "mobile");
    state.select(Filter::All);
    assert_eq!(state.active(), Filter::All);
}

#[test]
fn filter_keys_are_distinct_and_all_first() {
    let keys: Vec<_> = Filter::<ProjectCategory>::options().into_iter().map(Filter::key).collect();
    assert_eq!(keys[0], ALL_KEY);
    let unique: HashSet<_> = keys.iter().collect();
    assert_eq!(unique.len(), keys.len());
    assert_eq!(Filter::Only(SkillCategory::Tools).key(), "tools");
}

#[test]
fn options_list_all_first() {
    let options = Filter::<SkillCategory>::options();
    assert_eq!(options.len(), 1 + SkillCategory::ALL.len());
    assert_eq!(options[0], Filter::All);
    assert_eq!(options[1], Filter::Only(SkillCategory::Frontend));
}

#[test]
fn backend_projects_are_exactly_the_backend_subset() {
    let portfolio = content::parse(include_str!("../../content/portfolio.json")).unwrap();
    let mut state = FilterState::default();
    state.select(Filter::Only(ProjectCategory::Backend));

    let picked = state.apply(&portfolio.projects, |p| p.category);
    let expected: Vec<_> = portfolio.projects.iter().filter(|p| p.category == ProjectCategory::Backend).collect();
    assert_eq!(picked, expected);
    assert!(!picked.is_empty());
    assert!(picked.iter().all(|p| p.category == ProjectCategory::Backend));
}

#[test]
fn backend_skills_are_exactly_the_backend_subset() {
    let portfolio = content::parse(include_str!("../../content/portfolio.json")).unwrap();
    let all: Vec<_> = portfolio
        .skill_groups
        .iter()
        .flat_map(|group| group.skills.iter().map(move |skill| (group.category, skill)))
        .collect();
    let mut state = FilterState::default();
    state.select(Filter::Only(SkillCategory::Backend));

    let picked = state.apply(&all, |(category, _)| *category);
    let backend = portfolio.skill_group(SkillCategory::Backend).unwrap();
    let names: Vec<_> = picked.iter().map(|(_, skill)| skill.name.as_str()).collect();
    let expected: Vec<_> = backend.skills.iter().map(|skill| skill.name.as_str()).collect();
    assert_eq!(names, expected);
}

#[test]
fn all_yields_full_list_without_duplicates_or_omissions() {
    let portfolio = content::parse(include_str!("../../content/portfolio.json")).unwrap();
    let state = FilterState::<ProjectCategory>::default();

    let picked = state.apply(&portfolio.projects, |p| p.category);
    assert_eq!(picked.len(), portfolio.projects.len());
    let ids: HashSet<_> = picked.iter().map(|p| p.id).collect();
    assert_eq!(ids.len(), portfolio.projects.len());
    let original_order: Vec<_> = portfolio.projects.iter().map(|p| p.id).collect();
    let picked_order: Vec<_> = picked.iter().map(|p| p.id).collect();
    assert_eq!(picked_order, original_order);
}

#[test]
fn empty_category_yields_empty_list() {
    let items: Vec<(u32, SkillCategory)> = vec![(1, SkillCategory::Frontend)];
    let mut state = FilterState::default();
    state.select(Filter::Only(SkillCategory::Mobile));
    assert!(state.apply(&items, |(_, c)| *c).is_empty());
}

// =============================================================
// Selection
// =============================================================

#[test]
fn selection_starts_closed() {
    let selection = Selection::<u32>::default();
    assert_eq!(selection.selected(), None);
    assert!(!selection.is_open());
}

#[test]
fn opening_second_item_replaces_first() {
    let mut selection = Selection::default();
    selection.open(3_u32);
    selection.open(5);
    assert_eq!(selection.selected(), Some(5));
}

#[test]
fn close_clears_selection() {
    let mut selection = Selection::default();
    selection.open(1_u32);
    selection.close();
    assert_eq!(selection.selected(), None);
    selection.close();
    assert!(!selection.is_open());
}
