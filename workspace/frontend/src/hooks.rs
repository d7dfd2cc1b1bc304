use std::rc::Rc;

use finchat_common::{Conversation, ResponsePayload, TurnId};
use yew::prelude::*;

use crate::common::dom;

/// Conversation log actions
pub enum ChatAction {
    Submit(String),
    Resolve(TurnId, ResponsePayload),
}

/// Conversation log plus a counter bumped on every accepted change, so
/// effects can depend on "the log changed" cheaply.
#[derive(Clone, PartialEq, Default)]
pub struct ConversationState {
    pub log: Conversation,
    pub revision: u32,
}

impl Reducible for ConversationState {
    type Action = ChatAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        let applied = match action {
            ChatAction::Submit(question) => next.log.submit(&question).map(|_| ()),
            ChatAction::Resolve(id, payload) => next.log.resolve(id, payload),
        };

        match applied {
            Ok(()) => {
                next.revision = next.revision.wrapping_add(1);
                Rc::new(next)
            }
            Err(err) => {
                log::warn!("Conversation update rejected: {}", err);
                self
            }
        }
    }
}

#[hook]
pub fn use_conversation() -> UseReducerHandle<ConversationState> {
    use_reducer(ConversationState::default)
}

/// Smoothly scroll `end_ref` into view whenever `revision` changes.
#[hook]
pub fn use_scroll_to_end(end_ref: NodeRef, revision: u32) {
    use_effect_with(revision, move |revision| {
        log::trace!("Log revision {} - scrolling to end", revision);
        dom::scroll_into_view(&end_ref);
        || ()
    });
}
