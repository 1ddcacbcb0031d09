//! Fixed top navigation with a mobile menu.
//!
//! The bar turns opaque once the page scrolls past
//! [`crate::state::nav::SCROLLED_OFFSET`]. Scroll events are gated through
//! [`NavState::record_scroll`], so the signal only changes at the crossing.

use leptos::prelude::*;

use crate::content::{NavLink, SectionId, portfolio};
use crate::state::nav::NavState;
use crate::util::scroll::scroll_to_section;

#[component]
pub fn Navbar() -> impl IntoView {
    let content = portfolio();
    let nav = RwSignal::new(NavState::default());

    #[cfg(feature = "hydrate")]
    {
        use crate::util::scroll::scroll_offset;

        // A reload can restore a scrolled page before any scroll event fires.
        Effect::new(move || {
            nav.maybe_update(|state| state.record_scroll(scroll_offset()));
        });
        let handle = window_event_listener(leptos::ev::scroll, move |_| {
            nav.maybe_update(|state| state.record_scroll(scroll_offset()));
        });
        on_cleanup(move || handle.remove());
    }

    let go = move |target: SectionId| {
        scroll_to_section(target);
        nav.update(NavState::close_menu);
    };

    view! {
        <nav class=move || if nav.with(|s| s.scrolled) { "navbar scrolled" } else { "navbar" }>
            <div class="container">
                <div class="nav-content">
                    <div class="nav-brand">
                        <a
                            href=SectionId::Home.href()
                            on:click=move |ev: leptos::ev::MouseEvent| {
                                ev.prevent_default();
                                go(SectionId::Home);
                            }
                        >
                            {content.profile.brand.clone()}
                        </a>
                    </div>

                    <ul class="nav-links">{nav_items(&content.nav_links, go)}</ul>

                    <button
                        class=move || if nav.with(|s| s.menu_open) { "mobile-menu-btn active" } else { "mobile-menu-btn" }
                        aria-label="Toggle mobile menu"
                        on:click=move |_| nav.update(NavState::toggle_menu)
                    >
                        <span></span>
                        <span></span>
                        <span></span>
                    </button>
                </div>

                <div class=move || if nav.with(|s| s.menu_open) { "mobile-menu active" } else { "mobile-menu" }>
                    <ul>{nav_items(&content.nav_links, go)}</ul>
                </div>
            </div>
        </nav>
    }
}

/// `<li>` anchors that smooth-scroll instead of jumping.
pub(crate) fn nav_items(
    links: &'static [NavLink],
    go: impl Fn(SectionId) + Copy + Send + Sync + 'static,
) -> impl IntoView {
    links
        .iter()
        .map(|link| {
            let target = link.target;
            view! {
                <li>
                    <a
                        href=target.href()
                        on:click=move |ev: leptos::ev::MouseEvent| {
                            ev.prevent_default();
                            go(target);
                        }
                    >
                        {link.label.clone()}
                    </a>
                </li>
            }
        })
        .collect_view()
}
