//! Centered title block shared by the content sections.

use leptos::prelude::*;

use super::reveal::reveal_class;

#[component]
pub fn SectionHeader(
    title: &'static str,
    subtitle: &'static str,
    #[prop(into)] visible: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class=move || reveal_class("section-header text-center", "fade-in", visible.get())>
            <h2>{title}</h2>
            <p>{subtitle}</p>
        </div>
    }
}
