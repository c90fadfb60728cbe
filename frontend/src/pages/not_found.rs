use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <h1>{"404"}</h1>
            <p>{"This page wandered off the schedule."}</p>
            <Link<Route> to={Route::Home} classes="primary-button">
                {"Back to the Vibeathon"}
            </Link<Route>>
        </div>
    }
}
