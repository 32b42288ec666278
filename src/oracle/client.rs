//! HTTP client for the chat-completions answering service.

use crate::messages::{Answer, Question};
use crate::oracle::{AnswerService, OracleConfig};
use crate::{MagicBoxError, Result};
use async_trait::async_trait;
use serde_json::{json, Value};
use std::time::Duration;
use tracing::debug;

pub struct OracleClient {
    config: OracleConfig,
    http: reqwest::Client,
}

impl OracleClient {
    pub fn new(config: OracleConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| MagicBoxError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { config, http })
    }

    /// One user-role message carrying the persona instruction plus the
    /// question text.
    fn request_body(&self, question: &Question) -> Value {
        json!({
            "model": self.config.model_id,
            "messages": [{
                "role": "user",
                "content": format!("{}{}", self.config.persona, question.text),
            }],
        })
    }
}

#[async_trait]
impl AnswerService for OracleClient {
    async fn ask(&self, question: &Question) -> Result<Answer> {
        let url = format!(
            "{}/chat/completions",
            self.config.endpoint.trim_end_matches('/')
        );
        debug!(id = %question.id, model = %self.config.model_id, "asking answering service");

        let response = self
            .http
            .post(url)
            .bearer_auth(&self.config.api_key)
            .json(&self.request_body(question))
            .send()
            .await
            .map_err(|e| MagicBoxError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MagicBoxError::Transport(format!(
                "answering service returned {status}: {body}"
            )));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| MagicBoxError::Parse(e.to_string()))?;
        extract_answer(&body)
    }
}

/// Pull the answer text out of a chat-completions response body.
///
/// The text lives at `choices[0].message.content`; anything else is a parse
/// failure, and a present-but-blank field is an empty answer.
pub fn extract_answer(body: &Value) -> Result<Answer> {
    let content = body
        .get("choices")
        .and_then(|choices| choices.get(0))
        .and_then(|choice| choice.get("message"))
        .and_then(|message| message.get("content"))
        .and_then(|content| content.as_str())
        .ok_or_else(|| {
            MagicBoxError::Parse("response missing choices[0].message.content".to_string())
        })?;

    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Err(MagicBoxError::EmptyAnswer);
    }
    Ok(Answer::new(trimmed))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn completion_body(content: &str) -> Value {
        json!({
            "choices": [{
                "message": { "role": "assistant", "content": content }
            }]
        })
    }

    #[test]
    fn test_extracts_answer_text() {
        let answer = extract_answer(&completion_body("4, obviously")).unwrap();
        assert_eq!(answer.as_str(), "4, obviously");
    }

    #[test]
    fn test_trims_answer_whitespace() {
        let answer = extract_answer(&completion_body("  presto \n")).unwrap();
        assert_eq!(answer.as_str(), "presto");
    }

    #[test]
    fn test_missing_choices_is_parse_error() {
        let body = json!({ "error": "rate limited" });
        assert!(matches!(
            extract_answer(&body),
            Err(MagicBoxError::Parse(_))
        ));
    }

    #[test]
    fn test_non_string_content_is_parse_error() {
        let body = json!({ "choices": [{ "message": { "content": 42 } }] });
        assert!(matches!(
            extract_answer(&body),
            Err(MagicBoxError::Parse(_))
        ));
    }

    #[test]
    fn test_blank_content_is_empty_answer() {
        assert!(matches!(
            extract_answer(&completion_body("   ")),
            Err(MagicBoxError::EmptyAnswer)
        ));
    }

    #[test]
    fn test_request_body_carries_persona_and_model() {
        let client = OracleClient::new(OracleConfig::new("key").with_model("m")).unwrap();
        let body = client.request_body(&Question::new("What is 2+2?"));

        assert_eq!(body["model"], "m");
        let content = body["messages"][0]["content"].as_str().unwrap();
        assert!(content.starts_with("You are a helpful magician"));
        assert!(content.ends_with("What is 2+2?"));
        assert_eq!(body["messages"][0]["role"], "user");
    }
}
