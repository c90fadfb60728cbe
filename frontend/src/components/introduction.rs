use yew::prelude::*;
use yew_hooks::prelude::*;

pub const EVENT_RULES: &[&str] = &[
    "Teams can have up to 4 members.",
    "All projects must be submitted before the deadline.",
    "Judging criteria include innovation, impact, and presentation.",
    "Follow the code of conduct at all times.",
    "Participants must have hands-on knowledge of Git and GitHub.",
    "Ensure your project aligns with the theme of the Vibeathon.",
    "Be prepared to present your project to the judges in a 5-minute pitch.",
];

#[function_component(Introduction)]
pub fn introduction() -> Html {
    let show_rules = use_bool_toggle(false);

    let toggle_rules = {
        let show_rules = show_rules.clone();
        Callback::from(move |_: MouseEvent| show_rules.toggle())
    };

    html! {
        <section id="introduction" class="introduction-section">
            <div class="section-header">
                <h2>
                    <span>{"Welcome to"}</span>
                    <span class="accent">{"Vibeathon"}</span>
                </h2>
                <p>{"Where ideas meet code and innovation comes alive."}</p>
            </div>

            <div class="intro-card">
                <h3>{"SAP Inside Track & Vibeathon"}</h3>
                <p>
                    {"A community-driven SAP event and hackathon experience. Learn, share, network, and compete for prizes. Let your ideas vibe and come alive!"}
                </p>
            </div>

            <button class="secondary-button" onclick={toggle_rules}>
                { if *show_rules { "Hide Rules" } else { "More Information & Rules" } }
            </button>

            if *show_rules {
                <div class="rules-panel">
                    <h3>{"Event Rules"}</h3>
                    <ul class="rules-list">
                        { for EVENT_RULES.iter().map(|rule| html! { <li>{*rule}</li> }) }
                    </ul>
                </div>
            }
        </section>
    }
}
