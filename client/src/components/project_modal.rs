//! Detail overlay for the selected project.
//!
//! Closes on the close button, a backdrop click, or Escape. Clicks inside the
//! panel stop propagating so they never reach the backdrop.

use leptos::prelude::*;

use crate::content::portfolio;
use crate::state::filter::Selection;

#[component]
pub fn ProjectModal(selection: RwSignal<Selection<u32>>) -> impl IntoView {
    let content = portfolio();
    let close = move || selection.update(Selection::close);

    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(leptos::ev::keydown, move |ev| {
            if ev.key() == "Escape" {
                selection.maybe_update(|s| {
                    let was_open = s.is_open();
                    s.close();
                    was_open
                });
            }
        });
        on_cleanup(move || handle.remove());
    }

    move || {
        let project = selection.with(Selection::selected).and_then(|id| content.project(id))?;
        let technologies =
            project.technologies.iter().map(|tech| view! { <span class="tech-tag">{tech.clone()}</span> }).collect_view();

        Some(view! {
            <div class="modal-overlay" on:click=move |_| close()>
                <div class="modal-content" on:click=|ev: leptos::ev::MouseEvent| ev.stop_propagation()>
                    <button class="modal-close" aria-label="Close" on:click=move |_| close()>
                        <i class="fas fa-times"></i>
                    </button>

                    <div class="modal-header">
                        <h3>{project.title.clone()}</h3>
                        <div class="modal-links">
                            <a
                                href=project.live_url.clone()
                                target="_blank"
                                rel="noopener noreferrer"
                                class="btn btn-primary"
                            >
                                <i class="fas fa-external-link-alt"></i>
                                "Live Demo"
                            </a>
                            <a
                                href=project.source_url.clone()
                                target="_blank"
                                rel="noopener noreferrer"
                                class="btn btn-outline"
                            >
                                <i class="fab fa-github"></i>
                                "Source Code"
                            </a>
                        </div>
                    </div>

                    <div class="modal-body">
                        <div class="modal-image">
                            <div class="image-placeholder">
                                <i class="fas fa-laptop-code"></i>
                                <span>"Project Screenshot"</span>
                            </div>
                        </div>
                        <div class="modal-details">
                            <p>{project.details.clone()}</p>
                            <h4>"Technologies Used:"</h4>
                            <div class="modal-technologies">{technologies}</div>
                        </div>
                    </div>
                </div>
            </div>
        })
    }
}
