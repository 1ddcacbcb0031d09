//! Contact section: details, social links and the message form.
//!
//! SYSTEM CONTEXT
//! ==============
//! The form state machine lives in [`crate::state::contact_form`]. This
//! component binds it to inputs and runs the send through
//! [`SimulatedTransport`] on a [`ScopedTask`].
//!
//! ERROR HANDLING
//! ==============
//! Validation and transport errors land in the status banner. Teardown aborts
//! the send and abandons its ticket, so a late completion writes nothing.

use leptos::prelude::*;

use super::reveal::{list_step, reveal_class, staggered_class};
use super::section_header::SectionHeader;
use crate::content::{ContactEntry, SectionId, portfolio};
use crate::net::contact::{ContactTransport, SimulatedTransport};
use crate::state::contact_form::{ContactField, ContactForm, SubmitOutcome};
use crate::state::visibility::DEFAULT_THRESHOLD;
use crate::util::task::ScopedTask;
use crate::util::viewport::use_section_visibility;

#[component]
pub fn Contact() -> impl IntoView {
    let content = portfolio();
    let profile = &content.profile;
    let visible = use_section_visibility(SectionId::Contact, DEFAULT_THRESHOLD);
    let form = RwSignal::new(ContactForm::default());
    let task = ScopedTask::new();

    on_cleanup(move || {
        form.try_update(ContactForm::abandon);
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(outcome) = form.try_update(ContactForm::submit) else {
            return;
        };
        match outcome {
            SubmitOutcome::Started(ticket, message) => {
                log::info!("contact form submitted");
                task.spawn(async move {
                    let result = SimulatedTransport::default().send(&message).await;
                    match &result {
                        Ok(()) => log::info!("contact message sent"),
                        Err(e) => log::warn!("contact message failed: {e}"),
                    }
                    if form.try_update(|f| f.complete(ticket, result)) != Some(true) {
                        log::debug!("stale contact completion dropped");
                    }
                });
            }
            SubmitOutcome::Rejected(e) => log::debug!("contact form rejected: {e}"),
            SubmitOutcome::Ignored => {}
        }
    };

    let cards = content
        .contact_entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            view! {
                <div class=move || staggered_class("contact-card", visible.get(), list_step(index))>
                    <div class="card-icon" style:color=entry.color.clone()>
                        <i class=entry.icon.clone()></i>
                    </div>
                    <div class="card-content">
                        <h4>{entry.title.clone()}</h4>
                        {contact_value(entry)}
                    </div>
                </div>
            }
        })
        .collect_view();

    let socials = content
        .social_links
        .iter()
        .map(|social| {
            view! {
                <a
                    href=social.url.clone()
                    target="_blank"
                    rel="noopener noreferrer"
                    class="social-link"
                    style:background-color=social.color.clone()
                    title=social.platform.clone()
                >
                    <i class=social.icon.clone()></i>
                </a>
            }
        })
        .collect_view();

    let submitting = move || form.with(ContactForm::is_submitting);

    view! {
        <section id=SectionId::Contact.anchor() class="contact section-padding">
            <div class="container">
                <SectionHeader
                    title="Get In Touch"
                    subtitle="Ready to start your next project? Let's work together to bring your ideas to life!"
                    visible=visible
                />

                <div class="contact-content">
                    <div class=move || reveal_class("contact-info", "slide-in-left", visible.get())>
                        <div class="contact-intro">
                            <h3>"Let's Start a Conversation"</h3>
                            <p>
                                "I'm always interested in new opportunities and exciting projects. Whether you have a specific project in mind or just want to connect, I'd love to hear from you!"
                            </p>
                        </div>
                        <div class="contact-cards">{cards}</div>
                        <div class="social-section">
                            <h4>"Connect with me"</h4>
                            <div class="social-links">{socials}</div>
                        </div>
                    </div>

                    <div class=move || reveal_class("contact-form-container", "slide-in-right", visible.get())>
                        <div class="form-header">
                            <h3>"Send Me a Message"</h3>
                            <p>"Fill out the form below and I'll get back to you as soon as possible."</p>
                        </div>

                        <form class="contact-form" on:submit=on_submit>
                            <div class="form-row">
                                <div class="form-group">
                                    <label for="name">"Full Name"</label>
                                    <input
                                        type="text"
                                        id="name"
                                        name="name"
                                        placeholder="Your Name"
                                        required
                                        prop:value=move || form.with(|f| f.field(ContactField::Name).to_owned())
                                        on:input=move |ev| form.update(|f| f.set_field(ContactField::Name, event_target_value(&ev)))
                                    />
                                </div>
                                <div class="form-group">
                                    <label for="email">"Email Address"</label>
                                    <input
                                        type="email"
                                        id="email"
                                        name="email"
                                        placeholder="your.email@example.com"
                                        required
                                        prop:value=move || form.with(|f| f.field(ContactField::Email).to_owned())
                                        on:input=move |ev| form.update(|f| f.set_field(ContactField::Email, event_target_value(&ev)))
                                    />
                                </div>
                            </div>

                            <div class="form-group">
                                <label for="subject">"Subject"</label>
                                <input
                                    type="text"
                                    id="subject"
                                    name="subject"
                                    placeholder="What's this about?"
                                    required
                                    prop:value=move || form.with(|f| f.field(ContactField::Subject).to_owned())
                                    on:input=move |ev| form.update(|f| f.set_field(ContactField::Subject, event_target_value(&ev)))
                                />
                            </div>

                            <div class="form-group">
                                <label for="message">"Message"</label>
                                <textarea
                                    id="message"
                                    name="message"
                                    placeholder="Tell me about your project or idea..."
                                    rows="6"
                                    required
                                    prop:value=move || form.with(|f| f.field(ContactField::Message).to_owned())
                                    on:input=move |ev| form.update(|f| f.set_field(ContactField::Message, event_target_value(&ev)))
                                ></textarea>
                            </div>

                            {move || {
                                form.with(|f| {
                                    let class = if f.is_error() { "form-status error" } else { "form-status success" };
                                    f.status_message().map(|text| view! { <div class=class>{text}</div> })
                                })
                            }}

                            <button
                                type="submit"
                                class=move || if submitting() { "btn btn-primary submit-btn submitting" } else { "btn btn-primary submit-btn" }
                                disabled=submitting
                            >
                                <Show
                                    when=submitting
                                    fallback=|| view! { <i class="fas fa-paper-plane"></i> "Send Message" }
                                >
                                    <i class="fas fa-spinner fa-spin"></i>
                                    "Sending..."
                                </Show>
                            </button>
                        </form>
                    </div>
                </div>

                <div class=move || reveal_class("contact-cta", "fade-in", visible.get())>
                    <div class="cta-content">
                        <h3>"Ready to work together?"</h3>
                        <p>"Let's create something amazing! I'm excited to hear about your project."</p>
                        <div class="cta-buttons">
                            <a href=profile.mailto() class="btn btn-primary">
                                <i class="fas fa-envelope"></i>
                                "Email Me Directly"
                            </a>
                            <a href=profile.phone_href.clone() class="btn btn-outline">
                                <i class="fas fa-phone"></i>
                                "Call Me"
                            </a>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

/// Linked entries become anchors; the rest render as plain text.
fn contact_value(entry: &'static ContactEntry) -> AnyView {
    match entry.link.as_deref() {
        Some(link) => {
            let external = entry.opens_new_tab();
            view! {
                <a
                    href=link
                    target=if external { "_blank" } else { "_self" }
                    rel=external.then_some("noopener noreferrer")
                >
                    {entry.value.clone()}
                </a>
            }
            .into_any()
        }
        None => view! { <span>{entry.value.clone()}</span> }.into_any(),
    }
}
