//! Answer service client: one question out, one short answer back.

pub mod client;
pub mod config;

pub use client::{extract_answer, OracleClient};
pub use config::OracleConfig;

use crate::messages::{Answer, Question};
use crate::Result;
use async_trait::async_trait;

/// The remote answering service as the orchestrator sees it.
///
/// A single request/response exchange per question. Failures distinguish
/// transport problems, unparseable responses, and empty answers; the
/// orchestrator treats all three the same.
#[async_trait]
pub trait AnswerService: Send + Sync {
    async fn ask(&self, question: &Question) -> Result<Answer>;
}
