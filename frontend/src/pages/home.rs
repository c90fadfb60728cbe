use log::info;
use yew::prelude::*;

use crate::components::{
    contact::ContactSection,
    cta::CtaSection,
    footer::Footer,
    hero::HeroSection,
    introduction::Introduction,
    tracks::TracksSection,
};

#[function_component]
pub fn Home() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                info!("Landing page mounted");
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="landing-page">
            <HeroSection />
            <Introduction />
            <TracksSection />
            <CtaSection />
            <ContactSection />
            <Footer />
        </div>
    }
}
