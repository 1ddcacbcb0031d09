//! Landing section with the typed-out role line.

use leptos::prelude::*;

use crate::content::{SectionId, portfolio};
use crate::state::typing::TypingAnimator;
use crate::util::scroll::scroll_to_section;

#[component]
pub fn Hero() -> impl IntoView {
    let content = portfolio();
    let profile = &content.profile;
    let typing = RwSignal::new(TypingAnimator::new(&profile.role));

    #[cfg(feature = "hydrate")]
    {
        use crate::state::typing::TICK;
        use crate::util::task::ScopedTask;

        // Stops on completion, or when teardown aborts the task mid-animation.
        let task = ScopedTask::new();
        task.spawn(async move {
            loop {
                gloo_timers::future::sleep(TICK).await;
                if typing.try_update(TypingAnimator::tick) != Some(true) {
                    break;
                }
            }
        });
    }

    view! {
        <section id=SectionId::Home.anchor() class="hero">
            <div class="container">
                <div class="hero-content">
                    <div class="hero-text">
                        <h1 class="hero-greeting">
                            "Hi, I'm " <span class="highlight">{profile.name.clone()}</span>
                        </h1>

                        <h2 class="hero-title">
                            "I'm a "
                            <span class="typing-text">{move || typing.with(TypingAnimator::visible_text)}</span>
                            <span class="cursor">"|"</span>
                        </h2>

                        <p class="hero-description">{profile.hero_blurb.clone()}</p>

                        <div class="hero-buttons">
                            <button
                                class="btn btn-primary"
                                aria-label="Contact me"
                                on:click=move |_| scroll_to_section(SectionId::Contact)
                            >
                                <i class="fas fa-envelope"></i>
                                "Get In Touch"
                            </button>
                            <button
                                class="btn btn-outline"
                                aria-label="View my work"
                                on:click=move |_| scroll_to_section(SectionId::Projects)
                            >
                                <i class="fas fa-code"></i>
                                "View My Work"
                            </button>
                        </div>
                    </div>

                    <div class="hero-image">
                        <div class="image-placeholder">
                            <i class="fas fa-code"></i>
                            <p>"Your Photo Here"</p>
                        </div>
                    </div>
                </div>

                <div class="scroll-indicator">
                    <div class="scroll-arrow">
                        <i class="fas fa-chevron-down"></i>
                    </div>
                    <span>"Scroll to explore"</span>
                </div>
            </div>

            <div class="hero-bg">
                <div class="bg-shape shape-1"></div>
                <div class="bg-shape shape-2"></div>
                <div class="bg-shape shape-3"></div>
            </div>
        </section>
    }
}
