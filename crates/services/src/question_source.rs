use std::env;

use rand::seq::SliceRandom;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::warn;

use exam_core::{Domain, Question};

use crate::error::QuestionSourceError;
use crate::question_bank;

#[derive(Clone, Debug)]
pub struct QuestionSourceConfig {
    pub base_url: String,
    pub api_key: String,
    pub model: String,
}

impl QuestionSourceConfig {
    /// Read provider settings from the environment, `None` without a key.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let api_key = env::var("EXAM_AI_API_KEY").ok()?;
        if api_key.trim().is_empty() {
            return None;
        }
        let base_url =
            env::var("EXAM_AI_BASE_URL").unwrap_or_else(|_| "https://api.openai.com/v1".into());
        let model = env::var("EXAM_AI_MODEL").unwrap_or_else(|_| "gpt-4o-mini".into());
        Some(Self {
            base_url,
            api_key,
            model,
        })
    }
}

/// What to ask the provider for.
#[derive(Clone, Debug, Default)]
pub struct GenerationRequest {
    /// Restrict questions to one domain; `None` mixes all three.
    pub domain: Option<Domain>,
    /// Restrict questions to one topic within the body of knowledge.
    pub topic: Option<String>,
    /// How many questions the session needs.
    pub count: usize,
}

impl GenerationRequest {
    /// A mixed-domain request for `count` questions.
    #[must_use]
    pub fn mixed(count: usize) -> Self {
        Self {
            domain: None,
            topic: None,
            count,
        }
    }

    /// A request focused on a single domain.
    #[must_use]
    pub fn focused(domain: Domain, count: usize) -> Self {
        Self {
            domain: Some(domain),
            topic: None,
            count,
        }
    }
}

/// AI-backed question provider with the bundled bank as a safety net.
#[derive(Clone)]
pub struct QuestionSource {
    client: Client,
    config: Option<QuestionSourceConfig>,
}

impl QuestionSource {
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(QuestionSourceConfig::from_env())
    }

    #[must_use]
    pub fn new(config: Option<QuestionSourceConfig>) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    #[must_use]
    pub fn enabled(&self) -> bool {
        self.config.is_some()
    }

    /// Ask the provider for freshly generated questions.
    ///
    /// # Errors
    ///
    /// Returns `QuestionSourceError` when the source is disabled, the
    /// request fails, or the response cannot be turned into valid
    /// questions.
    pub async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<Vec<Question>, QuestionSourceError> {
        let config = self.config.as_ref().ok_or(QuestionSourceError::Disabled)?;

        let url = format!("{}/chat/completions", config.base_url.trim_end_matches('/'));
        let payload = ChatRequest {
            model: config.model.clone(),
            messages: vec![ChatMessage {
                role: "user",
                content: build_prompt(request),
            }],
            temperature: 0.2,
        };

        let response = self
            .client
            .post(url)
            .bearer_auth(&config.api_key)
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(QuestionSourceError::HttpStatus(response.status()));
        }

        let body: ChatResponse = response.json().await?;
        let content = body
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .unwrap_or_default();

        let questions = parse_question_payload(&content)?;
        if questions.is_empty() {
            return Err(QuestionSourceError::EmptyResponse);
        }
        Ok(questions)
    }

    /// Assemble an exam of exactly `request.count` questions, shuffled.
    ///
    /// Provider failures are logged and absorbed: short or missing batches
    /// are padded by cycling through the bundled bank, so the session can
    /// always start (the user just gets canned content).
    pub async fn fetch_exam(&self, request: &GenerationRequest) -> Vec<Question> {
        let mut pool = if self.enabled() {
            match self.generate(request).await {
                Ok(questions) => questions,
                Err(err) => {
                    warn!(error = %err, "question provider failed, using bundled bank");
                    Vec::new()
                }
            }
        } else {
            Vec::new()
        };

        let bank = question_bank::fallback_questions();
        let mut cursor = 0;
        while pool.len() < request.count {
            pool.push(bank[cursor % bank.len()].clone());
            cursor += 1;
        }
        pool.truncate(request.count);

        pool.shuffle(&mut rand::rng());
        pool
    }
}

fn build_prompt(request: &GenerationRequest) -> String {
    let focus = match (&request.domain, &request.topic) {
        (_, Some(topic)) => {
            format!("specifically for the topic \"{topic}\" within the CPACC Body of Knowledge")
        }
        (Some(domain), None) => format!("specifically for {}", domain.label()),
        (None, None) => "covering all three CPACC domains".to_owned(),
    };

    format!(
        "Act as an accessibility expert. Generate {count} high-quality multiple-choice \
         practice questions for the IAAP CPACC certification {focus}. Base them on the CPACC \
         Body of Knowledge content. Ensure a mix of difficulty levels. Provide clear \
         explanations for the correct answer. Respond with only a JSON array; each element \
         must have the fields id (string), domain (one of {d1:?}, {d2:?}, {d3:?}), topic, \
         text, options (exactly 4 strings), correctAnswer (0-based index), explanation.",
        count = request.count,
        d1 = Domain::DisabilitiesChallengesAt.label(),
        d2 = Domain::AccessibilityUniversalDesign.label(),
        d3 = Domain::StandardsLawsManagement.label(),
    )
}

/// Parse the provider's JSON payload into validated questions.
fn parse_question_payload(content: &str) -> Result<Vec<Question>, QuestionSourceError> {
    let records: Vec<QuestionRecord> = serde_json::from_str(strip_code_fences(content))?;
    records.into_iter().map(QuestionRecord::into_question).collect()
}

/// Models sometimes wrap JSON in a markdown fence despite instructions.
fn strip_code_fences(content: &str) -> &str {
    let trimmed = content.trim();
    trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .and_then(|rest| rest.strip_suffix("```"))
        .map_or(trimmed, str::trim)
}

/// Provider wire shape for one question, before validation.
#[derive(Debug, Deserialize)]
struct QuestionRecord {
    id: String,
    domain: String,
    #[serde(default)]
    topic: String,
    text: String,
    options: Vec<String>,
    #[serde(rename = "correctAnswer")]
    correct_answer: usize,
    explanation: String,
}

impl QuestionRecord {
    fn into_question(self) -> Result<Question, QuestionSourceError> {
        let domain = Domain::from_label(&self.domain)
            .ok_or(QuestionSourceError::UnknownDomain(self.domain))?;
        Ok(Question::new(
            self.id,
            domain,
            self.topic,
            self.text,
            self.options,
            self.correct_answer,
            self.explanation,
        )?)
    }
}

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Deserialize)]
struct ChatResponseMessage {
    content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAYLOAD: &str = r#"[
        {
            "id": "gen-1",
            "domain": "Domain 2: Accessibility & Universal Design",
            "topic": "POUR Principles",
            "text": "Which WCAG principle requires content to be presentable in ways users can perceive?",
            "options": ["Operable", "Perceivable", "Understandable", "Robust"],
            "correctAnswer": 1,
            "explanation": "Perceivable is the P in POUR."
        }
    ]"#;

    #[test]
    fn prompt_reflects_the_requested_focus() {
        let mixed = build_prompt(&GenerationRequest::mixed(5));
        assert!(mixed.contains("Generate 5"));
        assert!(mixed.contains("covering all three CPACC domains"));

        let focused =
            build_prompt(&GenerationRequest::focused(Domain::StandardsLawsManagement, 3));
        assert!(focused.contains("specifically for Domain 3: Standards, Laws & Management"));

        let topical = build_prompt(&GenerationRequest {
            domain: None,
            topic: Some("Universal Design".into()),
            count: 4,
        });
        assert!(topical.contains("specifically for the topic \"Universal Design\""));
    }

    #[test]
    fn parses_a_provider_payload() {
        let questions = parse_question_payload(PAYLOAD).unwrap();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].id(), "gen-1");
        assert_eq!(
            questions[0].domain(),
            Domain::AccessibilityUniversalDesign
        );
        assert_eq!(questions[0].correct_answer(), 1);
    }

    #[test]
    fn parses_a_fenced_payload() {
        let fenced = format!("```json\n{PAYLOAD}\n```");
        let questions = parse_question_payload(&fenced).unwrap();
        assert_eq!(questions.len(), 1);
    }

    #[test]
    fn rejects_unknown_domain_labels() {
        let payload = PAYLOAD.replace(
            "Domain 2: Accessibility & Universal Design",
            "Domain 9: Mystery",
        );
        let err = parse_question_payload(&payload).unwrap_err();
        assert!(matches!(err, QuestionSourceError::UnknownDomain(_)));
    }

    #[test]
    fn rejects_out_of_range_correct_answer() {
        let payload = PAYLOAD.replace("\"correctAnswer\": 1", "\"correctAnswer\": 7");
        let err = parse_question_payload(&payload).unwrap_err();
        assert!(matches!(err, QuestionSourceError::InvalidQuestion(_)));
    }

    #[test]
    fn missing_topic_defaults_to_blank_and_rolls_up_as_general() {
        let payload = PAYLOAD.replace("\"topic\": \"POUR Principles\",", "");
        let questions = parse_question_payload(&payload).unwrap();
        assert_eq!(questions[0].topic_key(), "General");
    }

    #[tokio::test]
    async fn disabled_source_reports_disabled() {
        let source = QuestionSource::new(None);
        assert!(!source.enabled());
        let err = source
            .generate(&GenerationRequest::mixed(5))
            .await
            .unwrap_err();
        assert!(matches!(err, QuestionSourceError::Disabled));
    }

    #[tokio::test]
    async fn disabled_source_still_assembles_a_full_exam() {
        let source = QuestionSource::new(None);
        let exam = source.fetch_exam(&GenerationRequest::mixed(12)).await;

        assert_eq!(exam.len(), 12);
        // Padding cycles the five bundled questions.
        let bank = question_bank::fallback_questions();
        assert!(exam.iter().all(|q| bank.iter().any(|b| b.id() == q.id())));
    }
}
