use yew::prelude::*;

use crate::scroll::scroll_callback;

const HIGHLIGHTS: &[&str] = &[
    "6 hours of intense coding",
    "Cutting-edge technology tracks",
    "₹50,000 in prizes",
];

#[function_component(CtaSection)]
pub fn cta_section() -> Html {
    html! {
        <section id="cta" class="cta-section">
            <h2>{"Ready to Vibe?"}</h2>
            <p class="subtitle">
                {"Join fellow builders for a day of creativity, collaboration and code."}
            </p>

            <div class="cta-highlights">
                { for HIGHLIGHTS.iter().map(|text| html! {
                    <div class="cta-highlight">{*text}</div>
                }) }
            </div>

            <div class="cta-actions">
                <button class="primary-button" onclick={scroll_callback("contact")}>
                    {"Register Now"}
                </button>
                <button class="secondary-button" onclick={scroll_callback("tracks")}>
                    {"Learn More"}
                </button>
            </div>
        </section>
    }
}
