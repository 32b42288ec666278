//! Interaction orchestrator: one inbound question, one outcome.
//!
//! Sequences the indicator panel, the answering service call, and the reply
//! for a single question/answer cycle. Each question runs a fresh pass
//! through the phases; there is no cross-question state, and the outcome
//! travels back as the return value, never through anything shared.

use crate::messages::{FeedbackEvent, InteractionOutcome, Question, Role};
use crate::oracle::AnswerService;
use crate::panel::PanelHandle;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Shown while the answering service call is in flight.
pub const THINKING_STATUS: &str = "Thinking ...";

/// Shown when the answering service call fails.
pub const FAILURE_STATUS: &str = "No answer ...";

/// Shown when a client connects.
pub const WELCOME_STATUS: &str = "I am a magician! Ask questions";

/// Shown when a client disconnects.
pub const FAREWELL_STATUS: &str = "Bye !! :(";

/// Phases of one question/answer cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Acknowledging,
    Querying,
    Succeeded,
    Failed,
}

pub struct Orchestrator {
    panel: PanelHandle,
    oracle: Arc<dyn AnswerService>,
}

impl Orchestrator {
    pub fn new(panel: PanelHandle, oracle: Arc<dyn AnswerService>) -> Self {
        Self { panel, oracle }
    }

    /// Convert one question into exactly one outcome, with physical feedback
    /// bracketing the remote call.
    pub async fn handle_question(&self, question: Question) -> InteractionOutcome {
        let mut phase = Phase::Acknowledging;
        debug!(id = %question.id, ?phase, "question accepted");
        self.feedback(FeedbackEvent::UserAcknowledged, Some(THINKING_STATUS))
            .await;

        phase = Phase::Querying;
        debug!(id = %question.id, ?phase, "waiting on answering service");
        // The only unbounded-latency step. The panel lock is not held here,
        // so independent sessions can query concurrently.
        let outcome = match self.oracle.ask(&question).await {
            Ok(answer) => {
                phase = Phase::Succeeded;
                info!(id = %question.id, answer = %answer.as_str(), "answer received");
                self.feedback(FeedbackEvent::AnswerReady, Some(answer.as_str()))
                    .await;
                InteractionOutcome::Answered(answer)
            }
            Err(e) => {
                phase = Phase::Failed;
                warn!(id = %question.id, error = %e, "answering service failed");
                self.show(FAILURE_STATUS).await;
                InteractionOutcome::Failed(e)
            }
        };

        debug!(id = %question.id, ?phase, "question resolved");
        outcome
    }

    /// Welcome a newly connected client. Display only, no LEDs or buzzers.
    pub async fn session_opened(&self) {
        self.feedback(FeedbackEvent::SessionOpened, Some(WELCOME_STATUS))
            .await;
    }

    /// See a disconnecting client off. Display only.
    pub async fn session_closed(&self) {
        self.feedback(FeedbackEvent::SessionClosed, Some(FAREWELL_STATUS))
            .await;
    }

    /// Drive one feedback cue and optional display update. The panel lock is
    /// held for the whole cue so concurrent sessions cannot interleave their
    /// acknowledge/show sequences.
    async fn feedback(&self, event: FeedbackEvent, display: Option<&str>) {
        let mut panel = self.panel.lock().await;
        match event {
            FeedbackEvent::UserAcknowledged => panel.acknowledge(Role::User).await,
            FeedbackEvent::AnswerReady => panel.acknowledge(Role::Magician).await,
            // Session lifecycle cues touch the display only.
            FeedbackEvent::SessionOpened | FeedbackEvent::SessionClosed => {}
        }
        if let Some(text) = display {
            panel.show(text).await;
        }
    }

    async fn show(&self, text: &str) {
        self.panel.lock().await.show(text).await;
    }
}
