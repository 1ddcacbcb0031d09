//! Filterable project gallery.
//!
//! DESIGN
//! ======
//! The active category and the open project live in two signals owned by this
//! section. The grid re-renders from the static project list on every filter
//! change; cards open [`ProjectModal`] through the shared selection.

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

use leptos::prelude::*;

use super::project_modal::ProjectModal;
use super::reveal::{grid_step, reveal_class, staggered_class};
use super::section_header::SectionHeader;
use crate::content::{Project, ProjectCategory, SectionId, portfolio};
use crate::state::filter::{Category, Filter, FilterState, Selection};
use crate::state::visibility::PROJECTS_THRESHOLD;
use crate::util::viewport::use_section_visibility;

/// Filter button caption.
pub fn filter_label(filter: Filter<ProjectCategory>) -> &'static str {
    match filter {
        Filter::All => "All Projects",
        Filter::Only(category) => category.label(),
    }
}

#[component]
pub fn Projects() -> impl IntoView {
    let content = portfolio();
    let visible = use_section_visibility(SectionId::Projects, PROJECTS_THRESHOLD);
    let filter = RwSignal::new(FilterState::<ProjectCategory>::default());
    let selection = RwSignal::new(Selection::<u32>::default());

    let buttons = Filter::<ProjectCategory>::options()
        .into_iter()
        .map(|option| {
            view! {
                <button
                    data-filter=option.key()
                    class=move || if filter.with(|f| f.is_active(option)) { "filter-btn active" } else { "filter-btn" }
                    on:click=move |_| filter.update(|f| f.select(option))
                >
                    {filter_label(option)}
                </button>
            }
        })
        .collect_view();

    let cards = move || {
        filter.with(|f| {
            f.apply(&content.projects, |project| project.category)
                .into_iter()
                .enumerate()
                .map(|(index, project)| view! { <ProjectCard project index visible selection/> })
                .collect_view()
        })
    };

    view! {
        <section id=SectionId::Projects.anchor() class="projects section-padding">
            <div class="container">
                <SectionHeader
                    title="My Projects"
                    subtitle="Here are some of my recent works that showcase my skills and experience"
                    visible=visible
                />

                <div class=move || reveal_class("filter-buttons", "fade-in", visible.get())>{buttons}</div>

                <div class="projects-grid">{cards}</div>

                <div class=move || reveal_class("projects-cta text-center", "fade-in", visible.get())>
                    <p>"Want to see more of my work?"</p>
                    <a
                        href=content.profile.github_url.clone()
                        target="_blank"
                        rel="noopener noreferrer"
                        class="btn btn-outline"
                    >
                        <i class="fab fa-github"></i>
                        "View All on GitHub"
                    </a>
                </div>
            </div>

            <ProjectModal selection/>
        </section>
    }
}

#[component]
fn ProjectCard(
    project: &'static Project,
    index: usize,
    visible: ReadSignal<bool>,
    selection: RwSignal<Selection<u32>>,
) -> impl IntoView {
    let id = project.id;
    let base = if project.featured { "project-card featured" } else { "project-card" };
    let (preview, hidden) = project.preview_technologies();

    let tags = preview.iter().map(|tech| view! { <span class="tech-tag">{tech.clone()}</span> }).collect_view();

    view! {
        <div
            class=move || staggered_class(base, visible.get(), grid_step(index))
            on:click=move |_| selection.update(|s| s.open(id))
        >
            <div class="project-image">
                <div class="image-placeholder">
                    <i class="fas fa-laptop-code"></i>
                    <span>"Project Screenshot"</span>
                </div>
                <div class="project-overlay">
                    <div class="overlay-content">
                        <h4>{project.title.clone()}</h4>
                        <p>{project.summary.clone()}</p>
                        <div class="project-links">
                            <a
                                href=project.live_url.clone()
                                target="_blank"
                                rel="noopener noreferrer"
                                class="project-link"
                                on:click=|ev: leptos::ev::MouseEvent| ev.stop_propagation()
                            >
                                <i class="fas fa-external-link-alt"></i>
                                "Live Demo"
                            </a>
                            <a
                                href=project.source_url.clone()
                                target="_blank"
                                rel="noopener noreferrer"
                                class="project-link"
                                on:click=|ev: leptos::ev::MouseEvent| ev.stop_propagation()
                            >
                                <i class="fab fa-github"></i>
                                "Code"
                            </a>
                        </div>
                    </div>
                </div>
                {project.featured.then(|| view! { <div class="featured-badge">"Featured"</div> })}
            </div>

            <div class="project-info">
                <h3>{project.title.clone()}</h3>
                <p>{project.summary.clone()}</p>
                <div class="technologies">
                    {tags}
                    {(hidden > 0).then(|| view! { <span class="tech-tag more">{format!("+{hidden}")}</span> })}
                </div>
            </div>
        </div>
    }
}
