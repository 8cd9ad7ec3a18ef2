use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::catalog::{QuestionId, SurveyKind};

/// Identifier wrapper for respondent records.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RespondentId(pub String);

/// The survey recipient: a client representative or a placed candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Respondent {
    pub id: RespondentId,
    pub kind: SurveyKind,
    pub name: String,
    pub email: String,
    pub mobile: String,
    /// Company name for client respondents; absent for candidates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invite: Option<InviteRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completion: Option<CompletionRecord>,
}

impl Respondent {
    pub fn status(&self) -> SurveyStatus {
        if self.completion.is_some() {
            SurveyStatus::Completed
        } else if self.invite.is_some() {
            SurveyStatus::EmailSent
        } else {
            SurveyStatus::NotSent
        }
    }

    pub fn is_completed(&self) -> bool {
        self.completion.is_some()
    }
}

/// Stamp left once the invitation email has gone out.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InviteRecord {
    pub sent_at: DateTime<Utc>,
}

/// Stamp left by the one successful submission; terminal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompletionRecord {
    pub completed_at: DateTime<Utc>,
    pub total_score: f64,
}

/// Lifecycle of a respondent's survey. `Completed` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SurveyStatus {
    NotSent,
    EmailSent,
    Completed,
}

impl SurveyStatus {
    pub const fn label(self) -> &'static str {
        match self {
            SurveyStatus::NotSent => "not_sent",
            SurveyStatus::EmailSent => "email_sent",
            SurveyStatus::Completed => "completed",
        }
    }
}

/// Contact details for creating a respondent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewRespondent {
    pub name: String,
    pub email: String,
    pub mobile: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
}

/// Partial contact update; absent fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RespondentUpdate {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub mobile: Option<String>,
    #[serde(default)]
    pub organization: Option<String>,
}

/// Answer payload at the wire boundary.
///
/// The interactive flows store every answer as a string; one flow JSON-
/// stringifies structured values. The distinction is decoded explicitly here
/// rather than by a parse-and-hope fallback deeper in the pipeline.
#[derive(Debug, Clone, PartialEq)]
pub enum AnswerValue {
    Scalar(String),
    EncodedStructured(String),
}

impl AnswerValue {
    /// The verbatim text persisted and scored for this answer.
    pub fn as_text(&self) -> &str {
        match self {
            AnswerValue::Scalar(text) | AnswerValue::EncodedStructured(text) => text,
        }
    }

    pub fn is_blank(&self) -> bool {
        self.as_text().trim().is_empty()
    }
}

impl Serialize for AnswerValue {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_text())
    }
}

impl<'de> Deserialize<'de> for AnswerValue {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        match value {
            serde_json::Value::String(text) => Ok(AnswerValue::Scalar(text)),
            other => Ok(AnswerValue::EncodedStructured(other.to_string())),
        }
    }
}

/// One answered question in a submission. Skipped questions and untriggered
/// sub-questions never appear.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmittedAnswer {
    pub question_id: QuestionId,
    pub answer: AnswerValue,
}

/// Persisted answer row, annotated with its computed score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerRecord {
    pub respondent_id: RespondentId,
    pub question_id: QuestionId,
    pub answer: String,
    pub answer_score: f64,
    pub answered_at: DateTime<Utc>,
}
