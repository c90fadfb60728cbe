use chrono::{DateTime, Utc};
use gloo_timers::callback::Interval;
use log::debug;
use yew::prelude::*;

use crate::config;
use crate::countdown::{compute_remaining, TimeRemaining};

#[derive(Properties, PartialEq)]
pub struct CountdownTimerProps {
    pub target: DateTime<Utc>,
}

#[function_component(CountdownTimer)]
pub fn countdown_timer(props: &CountdownTimerProps) -> Html {
    let target = props.target;
    let remaining = use_state(|| compute_remaining(target, Utc::now()));

    {
        let remaining = remaining.clone();
        use_effect_with_deps(
            move |target: &DateTime<Utc>| {
                let target = *target;
                debug!("Starting countdown to {}", target);
                remaining.set(compute_remaining(target, Utc::now()));

                let interval = Interval::new(config::COUNTDOWN_TICK_MS, move || {
                    remaining.set(compute_remaining(target, Utc::now()));
                });

                move || {
                    // Dropping the handle clears the browser interval
                    debug!("Stopping countdown");
                    drop(interval);
                }
            },
            target,
        );
    }

    let TimeRemaining { days, hours, minutes, seconds } = *remaining;
    let units = [
        (days, "Days"),
        (hours, "Hours"),
        (minutes, "Minutes"),
        (seconds, "Seconds"),
    ];

    html! {
        <>
            <div class="countdown-grid">
                { for units.iter().map(|(value, label)| html! {
                    <div class="countdown-cell" key={*label}>
                        <span class="countdown-value">{format!("{:02}", value)}</span>
                        <span class="countdown-label">{*label}</span>
                    </div>
                }) }
            </div>
            if remaining.is_zero() {
                <p class="countdown-started">{"The Vibeathon is live!"}</p>
            }
        </>
    }
}
