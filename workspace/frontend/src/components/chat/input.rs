use finchat_common::layout;
use web_sys::{HtmlElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::common::dom;
use crate::common::error::ErrorMessage;
use crate::common::loading::Spinner;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub value: String,
    pub textarea_ref: NodeRef,
    pub loading: bool,
    pub error: Option<String>,
    pub placeholder: AttrValue,
    pub container_class: AttrValue,
    pub on_change: Callback<String>,
    pub on_submit: Callback<String>,
    /// Textarea height in px after each resize
    pub on_resize: Callback<f64>,
}

#[function_component(ChatInput)]
pub fn chat_input(props: &Props) -> Html {
    {
        let textarea_ref = props.textarea_ref.clone();
        let on_resize = props.on_resize.clone();
        use_effect_with(props.value.clone(), move |value| {
            if let Some(textarea) = textarea_ref.cast::<HtmlElement>() {
                // Measure from the minimal height so shrinking works too
                dom::set_height(&textarea_ref, &format!("{}px", layout::INPUT_MIN_HEIGHT));
                let height = layout::input_height(
                    value,
                    f64::from(textarea.scroll_height()),
                    f64::from(textarea.client_height()),
                );
                dom::set_height(&textarea_ref, &format!("{height}px"));
                on_resize.emit(height);
            }
            || ()
        });
    }

    let oninput = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlTextAreaElement>().value();
            on_change.emit(value);
        })
    };

    let onkeydown = {
        let on_submit = props.on_submit.clone();
        let value = props.value.clone();
        Callback::from(move |e: KeyboardEvent| {
            let modified = e.shift_key() || e.ctrl_key() || e.alt_key() || e.meta_key();
            if e.key() == "Enter" && !modified {
                e.prevent_default();
                on_submit.emit(value.clone());
            }
        })
    };

    let onclick = {
        let on_submit = props.on_submit.clone();
        let value = props.value.clone();
        Callback::from(move |_| on_submit.emit(value.clone()))
    };

    html! {
        <div class={classes!(props.container_class.to_string(), "p-4")}>
            <div class="chat-input flex items-end gap-2 bg-base-100 rounded-box shadow px-3 py-2">
                <textarea
                    ref={props.textarea_ref.clone()}
                    class="textarea textarea-ghost flex-1 resize-none min-h-0 leading-5"
                    rows="1"
                    value={props.value.clone()}
                    placeholder={props.placeholder.clone()}
                    disabled={props.loading}
                    oninput={oninput}
                    onkeydown={onkeydown}
                />
                <button
                    onclick={onclick}
                    disabled={props.loading}
                    class="action-btn send-btn btn btn-primary btn-circle btn-sm"
                    aria-label="Send message"
                >
                    if props.loading {
                        <Spinner />
                    } else {
                        <img src="/Assets/send.png" alt="Send" class="send-icon w-5 h-5" />
                    }
                </button>
            </div>
            <ErrorMessage message={props.error.clone()} />
        </div>
    }
}
