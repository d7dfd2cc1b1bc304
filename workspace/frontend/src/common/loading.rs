use yew::prelude::*;

/// Placeholder for a turn still waiting on its answer.
#[function_component(Thinking)]
pub fn thinking() -> Html {
    html! {
        <span class="message-content thinking flex items-center gap-2 text-gray-500">
            <span class="dot-typing loading loading-dots loading-sm"></span>
            {"Thinking..."}
        </span>
    }
}

/// Spinner shown inside the send button while a request is in flight.
#[function_component(Spinner)]
pub fn spinner() -> Html {
    html! { <span class="spinner loading loading-spinner loading-sm"></span> }
}
