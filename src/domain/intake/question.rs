//! Questions, answers, and decoding of the question source payload.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::FlowError;

/// One question as delivered by the question source.
///
/// `placeholder` marks where the answer lands in the downstream document.
/// It is carried through untouched and never interpreted here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub placeholder: String,
    pub question: String,
}

impl Question {
    pub fn new(placeholder: impl Into<String>, question: impl Into<String>) -> Self {
        Self {
            placeholder: placeholder.into(),
            question: question.into(),
        }
    }
}

/// A recorded answer, carrying a copy of the question it answers.
///
/// Serialized exactly as the answer sink expects each entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub placeholder: String,
    pub question: String,
    pub answer: String,
}

impl Answer {
    /// Builds the answer record for `question`.
    pub fn for_question(question: &Question, answer: impl Into<String>) -> Self {
        Self {
            placeholder: question.placeholder.clone(),
            question: question.question.clone(),
            answer: answer.into(),
        }
    }
}

/// Body returned by the question source, before any decoding.
///
/// `questions` arrives either as a JSON array or as a string holding the
/// same array serialized as text. `processed` marks a document whose
/// answers were already submitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuestionPayload {
    #[serde(default)]
    pub questions: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processed: Option<Value>,
}

impl QuestionPayload {
    /// Payload carrying the given questions as a typed array.
    pub fn from_questions(questions: &[Question]) -> Self {
        Self {
            questions: serde_json::to_value(questions).unwrap_or(Value::Null),
            processed: None,
        }
    }

    /// Payload carrying the given questions serialized as JSON text.
    pub fn from_encoded_questions(questions: &[Question]) -> Self {
        let text = serde_json::to_string(questions).unwrap_or_default();
        Self {
            questions: Value::String(text),
            processed: None,
        }
    }

    /// Payload for a document that was already submitted.
    pub fn already_processed() -> Self {
        Self {
            questions: Value::Null,
            processed: Some(Value::Bool(true)),
        }
    }

    /// True when the source flags the document as already submitted.
    ///
    /// Accepts a boolean or any string equal to "true" ignoring case.
    pub fn is_processed(&self) -> bool {
        match &self.processed {
            Some(Value::Bool(flag)) => *flag,
            Some(Value::String(text)) => text.trim().eq_ignore_ascii_case("true"),
            _ => false,
        }
    }
}

/// Decodes the `questions` field in either of its two representations.
///
/// # Errors
///
/// - `InvalidQuestionData` if the value is neither an array of
///   `{placeholder, question}` records nor a string containing one
pub fn decode_questions(raw: &Value) -> Result<Vec<Question>, FlowError> {
    match raw {
        Value::String(text) => {
            let inner: Value = serde_json::from_str(text)
                .map_err(|e| FlowError::invalid_question_data(format!("questions text is not JSON: {}", e)))?;
            decode_array(&inner)
        }
        other => decode_array(other),
    }
}

fn decode_array(raw: &Value) -> Result<Vec<Question>, FlowError> {
    if !raw.is_array() {
        return Err(FlowError::invalid_question_data(format!(
            "expected an array of questions, got {}",
            kind_of(raw)
        )));
    }
    serde_json::from_value(raw.clone()).map_err(|e| FlowError::invalid_question_data(e.to_string()))
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
