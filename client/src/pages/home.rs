//! The single scrolling page: fixed navbar, five sections, footer.

use leptos::prelude::*;

use crate::components::{
    about::About, contact::Contact, footer::Footer, hero::Hero, navbar::Navbar, projects::Projects, skills::Skills,
};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="app">
            <Navbar/>
            <main>
                <Hero/>
                <About/>
                <Projects/>
                <Skills/>
                <Contact/>
            </main>
            <Footer/>
        </div>
    }
}
