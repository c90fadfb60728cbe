use gloo_timers::callback::Timeout;
use log::{debug, info, warn};
use serde::Serialize;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn with_field(&self, field: ContactField, value: String) -> Self {
        let mut next = self.clone();
        match field {
            ContactField::Name => next.name = value,
            ContactField::Email => next.email = value,
            ContactField::Message => next.message = value,
        }
        next
    }

    pub fn is_complete(&self) -> bool {
        [&self.name, &self.email, &self.message]
            .iter()
            .all(|value| !value.trim().is_empty())
    }

    /// Accepts the form locally. Nothing leaves the browser; a complete form
    /// comes back cleared, an incomplete one is handed back untouched.
    pub fn submit(self) -> Result<ContactForm, ContactForm> {
        if !self.is_complete() {
            return Err(self);
        }
        match serde_json::to_string(&self) {
            Ok(json) => debug!("Contact form submitted: {}", json),
            Err(e) => warn!("Could not serialize contact form: {}", e),
        }
        Ok(ContactForm::default())
    }
}

#[derive(Clone, Copy, PartialEq)]
enum Notice {
    Sent,
    Incomplete,
}

const SOCIAL_LINKS: &[(&str, &str)] = &[
    ("Twitter", "#"),
    ("GitHub", "#"),
    ("LinkedIn", "#"),
];

#[function_component(ContactSection)]
pub fn contact_section() -> Html {
    let form = use_state(ContactForm::default);
    let notice = use_state(|| None::<Notice>);

    let on_field = |field: ContactField| {
        let form = form.clone();
        let notice = notice.clone();
        move |value: String| {
            form.set(form.with_field(field, value));
            if *notice == Some(Notice::Incomplete) {
                notice.set(None);
            }
        }
    };

    let on_name = {
        let update = on_field(ContactField::Name);
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            update(input.value());
        })
    };
    let on_email = {
        let update = on_field(ContactField::Email);
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            update(input.value());
        })
    };
    let on_message = {
        let update = on_field(ContactField::Message);
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            update(input.value());
        })
    };

    let onsubmit = {
        let form = form.clone();
        let notice = notice.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match (*form).clone().submit() {
                Ok(cleared) => {
                    info!("Contact message accepted");
                    form.set(cleared);
                    notice.set(Some(Notice::Sent));

                    let notice = notice.clone();
                    Timeout::new(config::ACK_DISMISS_MS, move || notice.set(None)).forget();
                }
                Err(_) => {
                    debug!("Contact form rejected, fields missing");
                    notice.set(Some(Notice::Incomplete));
                }
            }
        })
    };

    html! {
        <section id="contact" class="contact-section">
            <div class="section-header">
                <h2>{"Get in Touch"}</h2>
                <p>{"Have questions about the Vibeathon? We'd love to hear from you."}</p>
            </div>

            <div class="contact-grid">
                <div class="contact-card">
                    <h3>{"Contact Information"}</h3>
                    <div class="contact-item">
                        <span class="contact-label">{"Email"}</span>
                        <a href="mailto:hello@vibeathon.com">{"hello@vibeathon.com"}</a>
                    </div>
                    <div class="contact-item">
                        <span class="contact-label">{"Phone"}</span>
                        <span>{"+1 (555) 123-4567"}</span>
                    </div>
                    <div class="contact-item">
                        <span class="contact-label">{"Location"}</span>
                        <span>{config::VENUE_NAME}</span>
                    </div>
                    <div class="social-links">
                        { for SOCIAL_LINKS.iter().map(|(label, href)| html! {
                            <a href={*href} aria-label={*label} key={*label}>{*label}</a>
                        }) }
                    </div>
                </div>

                <form class="contact-card contact-form" {onsubmit}>
                    <h3>{"Send a Message"}</h3>
                    <input
                        type="text"
                        name="name"
                        placeholder="Your Name"
                        required=true
                        value={form.name.clone()}
                        oninput={on_name}
                    />
                    <input
                        type="email"
                        name="email"
                        placeholder="Your Email"
                        required=true
                        value={form.email.clone()}
                        oninput={on_email}
                    />
                    <textarea
                        name="message"
                        placeholder="Your Message"
                        rows="5"
                        required=true
                        value={form.message.clone()}
                        oninput={on_message}
                    />
                    <button type="submit" class="primary-button">{"Send Message"}</button>
                    {
                        match *notice {
                            Some(Notice::Sent) => html! {
                                <div class="form-notice success">
                                    <strong>{"Message Sent!"}</strong>
                                    <p>{"Thanks for reaching out. We'll get back to you soon!"}</p>
                                </div>
                            },
                            Some(Notice::Incomplete) => html! {
                                <div class="form-notice error">
                                    {"Please fill in your name, email and message."}
                                </div>
                            },
                            None => html! {},
                        }
                    }
                </form>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm::default()
            .with_field(ContactField::Name, "Asha".to_string())
            .with_field(ContactField::Email, "asha@example.com".to_string())
            .with_field(ContactField::Message, "Can alumni join?".to_string())
    }

    #[test]
    fn fields_update_independently() {
        let form = filled();
        assert_eq!(form.name, "Asha");
        assert_eq!(form.email, "asha@example.com");
        assert_eq!(form.message, "Can alumni join?");

        let renamed = form.with_field(ContactField::Name, "Ravi".to_string());
        assert_eq!(renamed.name, "Ravi");
        assert_eq!(renamed.email, form.email);
    }

    #[test]
    fn complete_form_submits_and_clears() {
        assert_eq!(filled().submit(), Ok(ContactForm::default()));
    }

    #[test]
    fn blank_field_is_rejected_and_kept() {
        let form = filled().with_field(ContactField::Email, "   ".to_string());
        assert!(!form.is_complete());
        assert_eq!(form.clone().submit(), Err(form));
        assert!(!ContactForm::default().is_complete());
    }
}
