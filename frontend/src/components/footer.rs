use yew::prelude::*;

use crate::config;
use crate::scroll::scroll_callback;

const QUICK_LINKS: &[(&str, &str)] = &[
    ("Home", "hero"),
    ("About", "introduction"),
    ("Tracks", "tracks"),
    ("Prizes", "cta"),
    ("Contact", "contact"),
];

const SOCIAL_LINKS: &[(&str, &str)] = &[
    ("Twitter", "#"),
    ("GitHub", "#"),
    ("LinkedIn", "#"),
    ("Email", "mailto:hello@vibeathon.com"),
];

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div class="footer-about">
                    <h3>{config::EVENT_NAME}</h3>
                    <p>
                        {"A six-hour sprint of building, learning and networking for college innovators."}
                    </p>
                    <ul class="footer-details">
                        <li>{config::EVENT_DATE_LABEL}</li>
                        <li>{config::VENUE_NAME}</li>
                    </ul>
                </div>

                <div class="footer-links">
                    <h4>{"Quick Links"}</h4>
                    <ul>
                        { for QUICK_LINKS.iter().map(|(name, id)| html! {
                            <li key={*name}>
                                <a href={format!("#{}", id)} onclick={scroll_callback(*id)}>{*name}</a>
                            </li>
                        }) }
                    </ul>
                </div>

                <div class="footer-social">
                    <h4>{"Connect"}</h4>
                    <div class="social-links">
                        { for SOCIAL_LINKS.iter().map(|(label, href)| html! {
                            <a href={*href} aria-label={*label} key={*label}>{*label}</a>
                        }) }
                    </div>
                </div>
            </div>

            <div class="footer-bottom">
                <p>{"© 2025 Vibeathon. All rights reserved."}</p>
                <div class="footer-legal">
                    <a href="#">{"Privacy Policy"}</a>
                    <a href="#">{"Terms of Service"}</a>
                    <a href="#">{"Code of Conduct"}</a>
                </div>
            </div>
        </footer>
    }
}
