//! Skills section.
//!
//! `All` lists every group with linear bars; a single category switches to
//! circular progress cards. Bars and rings start empty and fill once the
//! section is revealed.

#[cfg(test)]
#[path = "skills_test.rs"]
mod skills_test;

use std::f64::consts::PI;

use leptos::prelude::*;

use super::reveal::{grid_step, list_step, reveal_class, staggered_class, step_delay};
use super::section_header::SectionHeader;
use crate::content::{SectionId, Skill, SkillCategory, SkillGroup, portfolio};
use crate::state::filter::{Category, Filter, FilterState};
use crate::state::visibility::DEFAULT_THRESHOLD;
use crate::util::viewport::use_section_visibility;

/// Radius of the progress ring, in SVG user units.
pub const RING_RADIUS: f64 = 52.0;

pub fn ring_circumference() -> f64 {
    2.0 * PI * RING_RADIUS
}

/// Dash offset that leaves `level` percent of the ring drawn.
pub fn ring_offset(level: u8) -> f64 {
    ring_circumference() * (1.0 - f64::from(level.min(100)) / 100.0)
}

pub fn filter_label(filter: Filter<SkillCategory>) -> &'static str {
    match filter {
        Filter::All => "All Skills",
        Filter::Only(category) => category.label(),
    }
}

pub fn filter_icon(filter: Filter<SkillCategory>) -> &'static str {
    match filter {
        Filter::All => "fas fa-th",
        Filter::Only(category) => category.icon(),
    }
}

#[component]
pub fn Skills() -> impl IntoView {
    let content = portfolio();
    let visible = use_section_visibility(SectionId::Skills, DEFAULT_THRESHOLD);
    let filter = RwSignal::new(FilterState::<SkillCategory>::default());

    let buttons = Filter::<SkillCategory>::options()
        .into_iter()
        .map(|option| {
            view! {
                <button
                    data-filter=option.key()
                    class=move || if filter.with(|f| f.is_active(option)) { "filter-btn active" } else { "filter-btn" }
                    on:click=move |_| filter.update(|f| f.select(option))
                >
                    <i class=filter_icon(option)></i>
                    {filter_label(option)}
                </button>
            }
        })
        .collect_view();

    let body = move || match filter.with(FilterState::active) {
        Filter::All => {
            let groups = content
                .skill_groups
                .iter()
                .enumerate()
                .map(|(index, group)| view! { <SkillGroupBars group index visible/> })
                .collect_view();
            view! { <div class="skills-categories">{groups}</div> }.into_any()
        }
        Filter::Only(category) => {
            let cards = content
                .skill_group(category)
                .map(|group| group.skills.as_slice())
                .unwrap_or_default()
                .iter()
                .enumerate()
                .map(|(index, skill)| view! { <SkillRing skill index visible/> })
                .collect_view();
            view! {
                <div class="filtered-skills">
                    <div class="skills-grid large">{cards}</div>
                </div>
            }
            .into_any()
        }
    };

    let summary = content
        .skill_summary
        .iter()
        .map(|item| {
            view! {
                <div class="summary-item">
                    <h4>{item.value.clone()}</h4>
                    <p>{item.label.clone()}</p>
                </div>
            }
        })
        .collect_view();

    view! {
        <section id=SectionId::Skills.anchor() class="skills section-padding">
            <div class="container">
                <SectionHeader
                    title="Skills & Expertise"
                    subtitle="Technologies and tools I work with to bring ideas to life"
                    visible=visible
                />

                <div class=move || reveal_class("skill-filters", "fade-in", visible.get())>{buttons}</div>

                {body}

                <div class=move || reveal_class("skills-footer", "fade-in", visible.get())>
                    <div class="skills-summary">{summary}</div>
                    <div class="learning-note">
                        <p>
                            <i class="fas fa-lightbulb"></i>
                            "I'm always learning new technologies and expanding my skillset. These proficiency levels reflect my current experience and comfort level with each technology."
                        </p>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn SkillGroupBars(group: &'static SkillGroup, index: usize, visible: ReadSignal<bool>) -> impl IntoView {
    let rows = group
        .skills
        .iter()
        .enumerate()
        .map(|(row, skill)| {
            let level = skill.level;
            view! {
                <div class="skill-item">
                    <div class="skill-info">
                        <div class="skill-icon" style:color=skill.color.clone()>
                            <i class=skill.icon.clone()></i>
                        </div>
                        <div class="skill-details">
                            <h4>{skill.name.clone()}</h4>
                            <div class="skill-level">
                                <div class="progress-bar">
                                    <div
                                        class="progress-fill"
                                        style:width=move || if visible.get() { format!("{level}%") } else { "0%".to_owned() }
                                        style:background-color=skill.color.clone()
                                        style:transition-delay=step_delay(row)
                                    ></div>
                                </div>
                                <span class="level-text">{format!("{level}%")}</span>
                            </div>
                        </div>
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class=move || staggered_class("skill-category", visible.get(), list_step(index))>
            <div class="category-header">
                <div class="category-icon">
                    <i class=group.icon.clone()></i>
                </div>
                <h3>{group.title.clone()}</h3>
            </div>
            <div class="skills-grid">{rows}</div>
        </div>
    }
}

#[component]
fn SkillRing(skill: &'static Skill, index: usize, visible: ReadSignal<bool>) -> impl IntoView {
    let circumference = ring_circumference();
    let filled = ring_offset(skill.level);

    view! {
        <div class=move || staggered_class("skill-card", visible.get(), grid_step(index))>
            <div class="skill-card-header">
                <div class="skill-icon large" style:color=skill.color.clone()>
                    <i class=skill.icon.clone()></i>
                </div>
                <h3>{skill.name.clone()}</h3>
            </div>

            <div class="skill-progress">
                <div class="circular-progress">
                    <svg class="progress-ring" width="120" height="120">
                        <circle
                            class="progress-ring-circle-bg"
                            stroke="#e2e8f0"
                            stroke-width="8"
                            fill="transparent"
                            r="52"
                            cx="60"
                            cy="60"
                        />
                        <circle
                            class="progress-ring-circle"
                            stroke=skill.color.clone()
                            stroke-width="8"
                            fill="transparent"
                            r="52"
                            cx="60"
                            cy="60"
                            style:stroke-dasharray=circumference.to_string()
                            style:stroke-dashoffset=move || {
                                if visible.get() { filled.to_string() } else { circumference.to_string() }
                            }
                            style:transition=format!("stroke-dashoffset 1.5s ease-in-out {}", step_delay(index))
                        />
                    </svg>
                    <div class="progress-text">
                        <span class="percentage">{format!("{}%", skill.level)}</span>
                    </div>
                </div>
            </div>
        </div>
    }
}
