use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ErrorMessageProps {
    pub message: Option<String>,
}

/// Error line shown under the chat input.
#[function_component(ErrorMessage)]
pub fn error_message(props: &ErrorMessageProps) -> Html {
    let Some(message) = &props.message else {
        return html! {};
    };

    html! {
        <div class="error-message alert alert-error mt-2 py-2 text-sm" role="alert">
            <i class="fas fa-exclamation-circle"></i>
            <span>{message}</span>
        </div>
    }
}
