//! About section: story, stats, highlights and the resume download.

use leptos::prelude::*;

use super::reveal::{list_step, reveal_class, staggered_class};
use super::section_header::SectionHeader;
use crate::content::{SectionId, portfolio};
use crate::state::visibility::DEFAULT_THRESHOLD;
use crate::util::scroll::scroll_to_section;
use crate::util::viewport::use_section_visibility;

#[component]
pub fn About() -> impl IntoView {
    let content = portfolio();
    let profile = &content.profile;
    let visible = use_section_visibility(SectionId::About, DEFAULT_THRESHOLD);

    let stats = content
        .stats
        .iter()
        .enumerate()
        .map(|(index, stat)| {
            view! {
                <div class=move || staggered_class("stat-item", visible.get(), list_step(index))>
                    <i class=stat.icon.clone()></i>
                    <div class="stat-content">
                        <h3>{stat.value.clone()}</h3>
                        <p>{stat.label.clone()}</p>
                    </div>
                </div>
            }
        })
        .collect_view();

    let highlights = content
        .highlights
        .iter()
        .enumerate()
        .map(|(index, highlight)| {
            view! {
                <div class=move || staggered_class("highlight-item", visible.get(), list_step(index))>
                    <div class="highlight-icon">
                        <i class=highlight.icon.clone()></i>
                    </div>
                    <div class="highlight-content">
                        <h5>{highlight.title.clone()}</h5>
                        <p>{highlight.description.clone()}</p>
                    </div>
                </div>
            }
        })
        .collect_view();

    let paragraphs = profile.about_paragraphs.iter().map(|text| view! { <p>{text.clone()}</p> }).collect_view();

    view! {
        <section id=SectionId::About.anchor() class="about section-padding">
            <div class="container">
                <SectionHeader
                    title="About Me"
                    subtitle="Get to know me better - my story, passion, and what drives me"
                    visible=visible
                />

                <div class="about-content">
                    <div class=move || reveal_class("about-left", "slide-in-left", visible.get())>
                        <div class="about-image">
                            <div class="image-container">
                                <div class="profile-placeholder">
                                    <i class="fas fa-user"></i>
                                    <p>"Professional Photo"</p>
                                </div>
                                <div class="image-decoration decoration-1"></div>
                                <div class="image-decoration decoration-2"></div>
                            </div>
                        </div>
                        <div class="stats-grid">{stats}</div>
                    </div>

                    <div class=move || reveal_class("about-right", "slide-in-right", visible.get())>
                        <div class="about-text">
                            <h3>{profile.about_heading.clone()}</h3>
                            {paragraphs}

                            <div class="highlights">
                                <h4>"What Sets Me Apart"</h4>
                                <div class="highlights-grid">{highlights}</div>
                            </div>

                            <div class="about-cta">
                                <a
                                    href=SectionId::Contact.href()
                                    class="btn btn-primary"
                                    on:click=move |ev: leptos::ev::MouseEvent| {
                                        ev.prevent_default();
                                        scroll_to_section(SectionId::Contact);
                                    }
                                >
                                    <i class="fas fa-comment"></i>
                                    "Let's Work Together"
                                </a>
                                <a
                                    href=profile.resume_href.clone()
                                    class="btn btn-outline"
                                    target="_blank"
                                    rel="noopener noreferrer"
                                >
                                    <i class="fas fa-download"></i>
                                    "Download Resume"
                                </a>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
