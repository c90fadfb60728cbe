use yew::prelude::*;

use crate::components::countdown_timer::CountdownTimer;
use crate::components::faq_chatbot::FaqChatbot;
use crate::config;
use crate::countdown::event_start;
use crate::scroll::scroll_callback;

#[function_component(HeroSection)]
pub fn hero_section() -> Html {
    let target = use_memo(|_| event_start(), ());

    html! {
        <section id="hero" class="hero">
            <div class="hero-overlay"></div>
            <div class="hero-content">
                <h1 class="hero-title">
                    <span class="hero-title-light">{"Vibe"}</span>
                    <span class="hero-title-accent">{"athon"}</span>
                </h1>

                <div class="hero-taglines">
                    <span>{"Build the Future."}</span>
                    <span>{"Code the Innovation."}</span>
                    <span>{"Win Amazing Prizes."}</span>
                </div>

                <div class="hero-meta">
                    <span class="hero-date">{config::EVENT_DATE_LABEL}</span>
                    <a
                        class="hero-venue"
                        href={config::VENUE_MAP_URL}
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        {config::VENUE_NAME}
                    </a>
                </div>

                <CountdownTimer target={*target} />

                <div class="hero-actions">
                    <button class="primary-button" onclick={scroll_callback("contact")}>
                        {"Register Now"}
                    </button>
                </div>
            </div>

            <FaqChatbot />
        </section>
    }
}
