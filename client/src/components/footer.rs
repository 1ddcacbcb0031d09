//! Page footer: brand, quick links, quick contact, services and copyright.

#[cfg(test)]
#[path = "footer_test.rs"]
mod footer_test;

use leptos::prelude::*;

use super::navbar::nav_items;
use crate::content::{ContactEntry, portfolio};
use crate::util::scroll::{scroll_to_section, scroll_to_top};

/// Calendar year for the copyright line.
pub fn current_year() -> i32 {
    #[cfg(feature = "hydrate")]
    {
        i32::try_from(js_sys::Date::new_0().get_full_year()).unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        time::OffsetDateTime::now_utc().year()
    }
}

pub fn copyright_line(year: i32, name: &str) -> String {
    format!("© {year} {name}. All rights reserved.")
}

#[component]
pub fn Footer() -> impl IntoView {
    let content = portfolio();
    let profile = &content.profile;

    let socials = content
        .footer_social_links
        .iter()
        .map(|social| {
            view! {
                <a
                    href=social.url.clone()
                    target="_blank"
                    rel="noopener noreferrer"
                    class="social-link"
                    style=format!("--social-color: {}", social.color)
                    title=social.platform.clone()
                >
                    <i class=social.icon.clone()></i>
                </a>
            }
        })
        .collect_view();

    let quick_contact = content.linked_contacts().map(quick_contact_item).collect_view();

    let services = content
        .services
        .iter()
        .map(|service| {
            view! {
                <div class="service-item">
                    <i class=service.icon.clone()></i>
                    <div>
                        <h5>{service.title.clone()}</h5>
                        <p>{service.description.clone()}</p>
                    </div>
                </div>
            }
        })
        .collect_view();

    let bottom_links = content
        .footer_links
        .iter()
        .map(|link| view! { <a href=link.href.clone()>{link.label.clone()}</a> })
        .collect_view();

    view! {
        <footer class="footer">
            <div class="container">
                <div class="footer-content">
                    <div class="footer-section brand-section">
                        <div class="footer-logo">
                            <h3>{profile.brand.clone()}</h3>
                            <p>{profile.role.clone()}</p>
                        </div>
                        <p class="footer-description">{profile.footer_blurb.clone()}</p>
                        <div class="footer-social">
                            <h4>"Connect with me"</h4>
                            <div class="social-links">{socials}</div>
                        </div>
                    </div>

                    <div class="footer-section">
                        <h4>"Quick Links"</h4>
                        <ul class="footer-links">{nav_items(&content.nav_links, scroll_to_section)}</ul>
                    </div>

                    <div class="footer-section">
                        <h4>"Get In Touch"</h4>
                        <div class="contact-info">{quick_contact}</div>
                        <div class="newsletter">
                            <h5>"Stay Updated"</h5>
                            <p>"Get notified about my latest projects and blog posts."</p>
                            <div class="newsletter-form">
                                <input type="email" placeholder="Enter your email" class="newsletter-input"/>
                                <button type="button" class="newsletter-btn" aria-label="Subscribe">
                                    <i class="fas fa-paper-plane"></i>
                                </button>
                            </div>
                        </div>
                    </div>

                    <div class="footer-section">
                        <h4>"What I Do"</h4>
                        <div class="services-list">{services}</div>
                    </div>
                </div>

                <div class="footer-bottom">
                    <div class="footer-bottom-content">
                        <div class="copyright">
                            <p>
                                {copyright_line(current_year(), &profile.name)}
                                " Made with "
                                <i class="fas fa-heart"></i>
                                " and "
                                <i class="fas fa-coffee"></i>
                            </p>
                        </div>
                        <div class="footer-bottom-links">{bottom_links}</div>
                    </div>
                    <button class="back-to-top" title="Back to top" on:click=move |_| scroll_to_top()>
                        <i class="fas fa-chevron-up"></i>
                    </button>
                </div>
            </div>

            <div class="footer-bg">
                <div class="bg-shape shape-1"></div>
                <div class="bg-shape shape-2"></div>
                <div class="bg-shape shape-3"></div>
            </div>
        </footer>
    }
}

fn quick_contact_item(entry: &'static ContactEntry) -> impl IntoView {
    let external = entry.opens_new_tab();
    view! {
        <div class="contact-item">
            <i class=entry.icon.clone()></i>
            <a
                href=entry.link.clone().unwrap_or_default()
                target=if external { "_blank" } else { "_self" }
                rel=external.then_some("noopener noreferrer")
            >
                {entry.value.clone()}
            </a>
        </div>
    }
}
