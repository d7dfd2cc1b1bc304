use finchat_common::chart::{self, ChartStyle};
use finchat_common::{ChatTurn, ResponsePayload};
use yew::prelude::*;

use super::chart::ResponseChart;
use super::table::TableData;
use crate::common::loading::Thinking;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub index: usize,
    pub turn: ChatTurn,
    pub style: ChartStyle,
}

/// One question bubble and its answer (or the thinking indicator).
#[function_component(MessageGroup)]
pub fn message_group(props: &Props) -> Html {
    html! {
        <div class="message-group">
            <div class="message user-message chat chat-end">
                <span class="message-content chat-bubble chat-bubble-primary whitespace-pre-wrap">
                    {&props.turn.question}
                </span>
            </div>
            <div class="message ai-message chat chat-start">
                <div class="message-content-wrapper chat-bubble bg-base-100 text-base-content max-w-full">
                    {match props.turn.response() {
                        Some(payload) => render_answer(props.index, payload, &props.style),
                        None => html! { <Thinking /> },
                    }}
                </div>
            </div>
        </div>
    }
}

fn render_answer(index: usize, payload: &ResponsePayload, style: &ChartStyle) -> Html {
    let rendered = chart::render(&payload.graph(), style);

    html! {
        <>
            <span class="message-content whitespace-pre-wrap">{payload.answer()}</span>
            if let Some(pretty) = payload.table_pretty() {
                <TableData pretty={pretty} />
            }
            <ResponseChart turn={index} chart={rendered} />
        </>
    }
}
