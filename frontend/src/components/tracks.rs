use yew::prelude::*;

pub struct Track {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub details: &'static str,
}

pub const TRACKS: &[Track] = &[
    Track {
        id: "ai-ml",
        title: "AI/ML",
        description: "Build intelligent solutions using machine learning and artificial intelligence",
        details: "Create innovative AI models, chatbots, computer vision systems, or data analytics platforms.",
    },
    Track {
        id: "cloud",
        title: "Cloud Computing",
        description: "Develop scalable applications using cloud technologies",
        details: "Build cloud-native apps, microservices, serverless functions, or infrastructure solutions.",
    },
    Track {
        id: "web3",
        title: "Web3 & Blockchain",
        description: "Create decentralized applications and blockchain solutions",
        details: "Develop DApps, smart contracts, NFT platforms, or cryptocurrency solutions.",
    },
    Track {
        id: "iot",
        title: "IoT & Hardware",
        description: "Build connected devices and IoT ecosystems",
        details: "Create smart devices, sensor networks, home automation, or industrial IoT solutions.",
    },
    Track {
        id: "gaming",
        title: "Gaming & AR/VR",
        description: "Develop immersive gaming experiences and virtual worlds",
        details: "Build games, AR/VR applications, metaverse experiences, or interactive simulations.",
    },
    Track {
        id: "mobile",
        title: "Mobile Innovation",
        description: "Create innovative mobile applications and experiences",
        details: "Develop mobile apps, cross-platform solutions, or mobile-first web experiences.",
    },
];

/// Tapping the expanded track collapses it, tapping another one switches.
pub fn toggle_active(current: Option<&'static str>, id: &'static str) -> Option<&'static str> {
    if current == Some(id) {
        None
    } else {
        Some(id)
    }
}

#[function_component(TracksSection)]
pub fn tracks_section() -> Html {
    let active = use_state(|| None::<&'static str>);

    html! {
        <section id="tracks" class="tracks-section">
            <div class="section-header">
                <h2>{"Hackathon Tracks"}</h2>
                <p>{"Choose your track and build something amazing. Each track offers unique challenges and opportunities."}</p>
            </div>

            <div class="tracks-grid">
                { for TRACKS.iter().map(|track| {
                    let is_active = *active == Some(track.id);
                    let id = track.id;

                    let onmouseenter = {
                        let active = active.clone();
                        Callback::from(move |_: MouseEvent| active.set(Some(id)))
                    };
                    let onmouseleave = {
                        let active = active.clone();
                        Callback::from(move |_: MouseEvent| active.set(None))
                    };
                    let onclick = {
                        let active = active.clone();
                        Callback::from(move |_: MouseEvent| active.set(toggle_active(*active, id)))
                    };
                    let onkeydown = {
                        let active = active.clone();
                        Callback::from(move |e: KeyboardEvent| {
                            if e.key() == "Enter" || e.key() == " " {
                                e.prevent_default();
                                active.set(toggle_active(*active, id));
                            }
                        })
                    };

                    html! {
                        <div
                            key={id}
                            class={classes!("track-card", is_active.then(|| "active"))}
                            role="button"
                            tabindex="0"
                            aria-expanded={is_active.to_string()}
                            {onmouseenter}
                            {onmouseleave}
                            {onclick}
                            {onkeydown}
                        >
                            <h3>{track.title}</h3>
                            <p class="track-description">{track.description}</p>
                            if is_active {
                                <div class="track-details">
                                    <p>{track.details}</p>
                                </div>
                            }
                        </div>
                    }
                }) }
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clicking_toggles_and_switches() {
        let opened = toggle_active(None, "cloud");
        assert_eq!(opened, Some("cloud"));
        assert_eq!(toggle_active(opened, "cloud"), None);
        assert_eq!(toggle_active(opened, "iot"), Some("iot"));
    }

    #[test]
    fn track_ids_are_unique() {
        for (i, track) in TRACKS.iter().enumerate() {
            assert!(TRACKS[i + 1..].iter().all(|other| other.id != track.id));
        }
        assert_eq!(TRACKS.len(), 6);
    }
}
