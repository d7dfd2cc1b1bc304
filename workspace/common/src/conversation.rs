//! Append-only conversation log.
//!
//! A turn is created pending when the question is submitted and resolved at
//! most once when the answer arrives. Turns are never removed; a failed query
//! leaves its turn pending for the rest of the session.

use tracing::{debug, warn};

use crate::error::ChatError;
use crate::payload::ResponsePayload;

/// Position of a turn in the log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TurnId(usize);

impl TurnId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TurnState {
    Pending,
    Resolved(Box<ResponsePayload>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatTurn {
    pub question: String,
    pub state: TurnState,
}

impl ChatTurn {
    pub fn response(&self) -> Option<&ResponsePayload> {
        match &self.state {
            TurnState::Resolved(payload) => Some(payload),
            TurnState::Pending => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.state, TurnState::Pending)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Conversation {
    turns: Vec<ChatTurn>,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate `question` and append it as a pending turn.
    ///
    /// Blank input is rejected and leaves the log untouched. The stored
    /// question is trimmed.
    pub fn submit(&mut self, question: &str) -> Result<TurnId, ChatError> {
        let question = validate_question(question)?;
        let id = TurnId(self.turns.len());
        self.turns.push(ChatTurn {
            question: question.to_string(),
            state: TurnState::Pending,
        });
        debug!(turn = id.0, "Question submitted");
        Ok(id)
    }

    /// Attach the answer to a pending turn.
    pub fn resolve(&mut self, id: TurnId, payload: ResponsePayload) -> Result<(), ChatError> {
        let turn = self.turns.get_mut(id.0).ok_or_else(|| {
            warn!(turn = id.0, "Resolve for unknown turn");
            ChatError::UnknownTurn(id.0)
        })?;

        if !turn.is_pending() {
            warn!(turn = id.0, "Turn resolved twice");
            return Err(ChatError::AlreadyResolved(id.0));
        }

        turn.state = TurnState::Resolved(Box::new(payload));
        debug!(turn = id.0, "Turn resolved");
        Ok(())
    }

    /// Id the next successful [`submit`](Self::submit) will return.
    pub fn next_id(&self) -> TurnId {
        TurnId(self.turns.len())
    }

    pub fn turns(&self) -> &[ChatTurn] {
        &self.turns
    }

    pub fn get(&self, id: TurnId) -> Option<&ChatTurn> {
        self.turns.get(id.0)
    }

    pub fn last(&self) -> Option<&ChatTurn> {
        self.turns.last()
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}

/// Trimmed question, or [`ChatError::EmptyQuestion`] when nothing is left.
pub fn validate_question(question: &str) -> Result<&str, ChatError> {
    let trimmed = question.trim();
    if trimmed.is_empty() {
        Err(ChatError::EmptyQuestion)
    } else {
        Ok(trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn answer(text: &str) -> ResponsePayload {
        serde_json::from_value(json!({ "content": text, "graph_needed": "no" })).unwrap()
    }

    #[test]
    fn test_submit_appends_one_pending_turn() {
        let mut log = Conversation::new();
        let expected = log.next_id();
        let id = log.submit("  What is the NPL ratio in FY2024\n").unwrap();

        assert_eq!(id, expected);
        assert_eq!(log.len(), 1);
        let turn = log.get(id).unwrap();
        assert_eq!(turn.question, "What is the NPL ratio in FY2024");
        assert!(turn.is_pending());
        assert!(turn.response().is_none());
    }

    #[test]
    fn test_empty_question_is_rejected() {
        let mut log = Conversation::new();
        log.submit("first").unwrap();

        for blank in ["", "   ", "\n\t"] {
            assert_eq!(log.submit(blank), Err(ChatError::EmptyQuestion));
        }
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn test_resolve_once() {
        let mut log = Conversation::new();
        let id = log.submit("q").unwrap();

        log.resolve(id, answer("a")).unwrap();
        assert_eq!(log.get(id).unwrap().response().unwrap().answer(), "a");

        assert_eq!(log.resolve(id, answer("b")), Err(ChatError::AlreadyResolved(0)));
        assert_eq!(log.get(id).unwrap().response().unwrap().answer(), "a");
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn test_resolve_targets_its_own_turn() {
        let mut log = Conversation::new();
        let first = log.submit("first").unwrap();
        let second = log.submit("second").unwrap();

        log.resolve(second, answer("two")).unwrap();
        assert!(log.get(first).unwrap().is_pending());
        assert_eq!(log.last().unwrap().response().unwrap().answer(), "two");
    }

    #[test]
    fn test_unknown_turn() {
        let mut log = Conversation::new();
        let mut other = Conversation::new();
        other.submit("x").unwrap();
        let foreign = other.submit("y").unwrap();

        assert_eq!(log.resolve(foreign, answer("a")), Err(ChatError::UnknownTurn(1)));
        assert!(log.is_empty());
    }

    #[test]
    fn test_failed_query_leaves_turn_pending() {
        let mut log = Conversation::new();
        log.submit("first").unwrap();
        let id = log.submit("second").unwrap();
        log.resolve(id, answer("ok")).unwrap();

        assert!(log.turns()[0].is_pending());
        assert_eq!(log.len(), 2);
    }
}
