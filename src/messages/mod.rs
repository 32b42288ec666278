pub mod types;

pub use types::{Answer, FeedbackEvent, InteractionOutcome, Question, Role};
