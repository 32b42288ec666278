use crate::MagicBoxError;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Which side of the interaction a feedback cue belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    User,
    Magician,
}

/// One inbound question. Immutable once created; the id exists only so log
/// lines from the same cycle can be correlated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub id: Uuid,
    pub text: String,
}

impl Question {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
        }
    }
}

/// The answering service's reply text. The service is asked to keep it short
/// enough for the display; nothing here enforces that.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub text: String,
}

impl Answer {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

/// Result of one question/answer cycle. Exactly one of these is produced per
/// question; failures are never retried.
#[derive(Debug, Clone)]
pub enum InteractionOutcome {
    Answered(Answer),
    Failed(MagicBoxError),
}

impl InteractionOutcome {
    /// Text to relay back over the session channel, if any.
    ///
    /// A failed cycle relays nothing; the caller sees silence rather than a
    /// stale answer.
    pub fn reply_payload(&self) -> Option<&str> {
        match self {
            InteractionOutcome::Answered(answer) => Some(answer.as_str()),
            InteractionOutcome::Failed(_) => None,
        }
    }
}

/// Fire-and-forget cues for the indicator panel. Each fires at most once per
/// question or session event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackEvent {
    UserAcknowledged,
    AnswerReady,
    SessionOpened,
    SessionClosed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answered_relays_payload() {
        let outcome = InteractionOutcome::Answered(Answer::new("4, obviously"));
        assert_eq!(outcome.reply_payload(), Some("4, obviously"));
    }

    #[test]
    fn test_failed_relays_nothing() {
        let outcome = InteractionOutcome::Failed(MagicBoxError::EmptyAnswer);
        assert_eq!(outcome.reply_payload(), None);
    }

    #[test]
    fn test_question_ids_are_unique() {
        let a = Question::new("first");
        let b = Question::new("second");
        assert_ne!(a.id, b.id);
    }
}
