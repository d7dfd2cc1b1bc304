use finchat_common::chart::ChartStyle;
use finchat_common::conversation::validate_question;
use finchat_common::layout;
use gloo_timers::callback::Timeout;
use yew::prelude::*;

use super::input::ChatInput;
use super::message::MessageGroup;
use crate::api_client::post_query;
use crate::common::dom;
use crate::components::home::Home;
use crate::hooks::{ChatAction, use_conversation, use_scroll_to_end};
use crate::settings;

const FOCUS_DELAY_MS: u32 = 300;
const RELAYOUT_DELAY_MS: u32 = 100;
const RESCROLL_DELAY_MS: u32 = 200;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum ChatView {
    Home,
    Conversation,
}

fn update_log_height(log_ref: &NodeRef) {
    let height = layout::log_viewport_height(
        dom::offset_height(".chat-input-container"),
        dom::offset_height(".back-btn"),
    );
    log::trace!("Log viewport height: {}", height);
    dom::set_height(log_ref, &height);
}

/// Chat controller: owns the question text, the request state, the error slot
/// and the conversation log, and switches between home and conversation views.
#[function_component(ChatPage)]
pub fn chat_page() -> Html {
    let conversation = use_conversation();
    let question = use_state(String::new);
    let loading = use_state(|| false);
    let error = use_state(|| None::<String>);
    let view = use_state(|| ChatView::Home);
    let input_height = use_state_eq(|| layout::INPUT_MIN_HEIGHT);
    let in_flight = use_mut_ref(|| false);

    let textarea_ref = use_node_ref();
    let log_ref = use_node_ref();
    let end_ref = use_node_ref();

    let chart_style = use_memo((), |_| ChartStyle::from(&settings::get_settings().chat));

    use_scroll_to_end(end_ref.clone(), conversation.revision);

    {
        let textarea_ref = textarea_ref.clone();
        use_effect_with(*view, move |view| {
            let timeout = (*view == ChatView::Conversation)
                .then(|| Timeout::new(FOCUS_DELAY_MS, move || dom::focus(&textarea_ref)));
            move || drop(timeout)
        });
    }

    {
        let log_ref = log_ref.clone();
        use_effect_with((*input_height, *view), move |_| {
            update_log_height(&log_ref);
            || ()
        });
    }

    let on_ask = {
        let conversation = conversation.clone();
        let question = question.clone();
        let loading = loading.clone();
        let error = error.clone();
        let view = view.clone();
        let in_flight = in_flight.clone();
        let textarea_ref = textarea_ref.clone();
        let log_ref = log_ref.clone();
        let end_ref = end_ref.clone();

        Callback::from(move |text: String| {
            let question_text = match validate_question(&text) {
                Ok(q) => q.to_string(),
                Err(err) => {
                    log::debug!("Rejected submit: {}", err);
                    error.set(Some(err.to_string()));
                    return;
                }
            };

            if *in_flight.borrow() {
                log::debug!("Query already in flight, ignoring submit");
                return;
            }
            *in_flight.borrow_mut() = true;
            loading.set(true);
            error.set(None);

            let id = conversation.log.next_id();
            conversation.dispatch(ChatAction::Submit(question_text.clone()));

            let conversation = conversation.clone();
            let question = question.clone();
            let loading = loading.clone();
            let error = error.clone();
            let view = view.clone();
            let in_flight = in_flight.clone();
            let textarea_ref = textarea_ref.clone();
            let log_ref = log_ref.clone();
            let end_ref = end_ref.clone();

            wasm_bindgen_futures::spawn_local(async move {
                match post_query(&question_text).await {
                    Ok(payload) => {
                        conversation.dispatch(ChatAction::Resolve(id, payload));
                        question.set(String::new());
                        view.set(ChatView::Conversation);

                        Timeout::new(RELAYOUT_DELAY_MS, move || update_log_height(&log_ref)).forget();
                        Timeout::new(RESCROLL_DELAY_MS, move || {
                            dom::scroll_into_view(&end_ref);
                            dom::focus(&textarea_ref);
                        })
                        .forget();
                    }
                    Err(err) => {
                        log::error!("Query for turn {} failed: {}", id.index(), err);
                        error.set(Some(err));
                    }
                }
                *in_flight.borrow_mut() = false;
                loading.set(false);
            });
        })
    };

    let on_change = {
        let question = question.clone();
        Callback::from(move |text: String| question.set(text))
    };

    let on_resize = {
        let input_height = input_height.clone();
        Callback::from(move |height: f64| input_height.set(height))
    };

    let on_back = {
        let view = view.clone();
        Callback::from(move |_| {
            log::debug!("Back to home view");
            view.set(ChatView::Home);
        })
    };

    let in_conversation = *view == ChatView::Conversation;
    let input = html! {
        <ChatInput
            value={(*question).clone()}
            textarea_ref={textarea_ref.clone()}
            loading={*loading}
            error={(*error).clone()}
            placeholder={if in_conversation {
                "Ask another question..."
            } else {
                "Ask a question about our financial performance..."
            }}
            container_class={if in_conversation { "chat-input-container" } else { "home-chat-input-container" }}
            on_change={on_change}
            on_submit={on_ask.clone()}
            on_resize={on_resize}
        />
    };

    if in_conversation {
        html! {
            <div class="full-screen-chat flex flex-col">
                <button class="back-btn action-btn btn btn-ghost btn-sm self-start" onclick={on_back}>
                    <span class="back-arrow">{"←"}</span>{" Back"}
                </button>
                <div class="chat-container overflow-y-auto" ref={log_ref}>
                    <div class="chat-messages full-screen-messages flex flex-col gap-4 p-4">
                        { for conversation.log.turns().iter().enumerate().map(|(index, turn)| html! {
                            <MessageGroup key={index} index={index} turn={turn.clone()} style={*chart_style} />
                        }) }
                        <div ref={end_ref} />
                    </div>
                </div>
                { input }
            </div>
        }
    } else {
        html! {
            <>
                <Home on_ask={on_ask} />
                { input }
            </>
        }
    }
}
