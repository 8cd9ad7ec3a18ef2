//! Compiled-in question catalogs for both survey audiences.
//!
//! A catalog is the single source of truth for question order, branching
//! triggers, and scoring metadata. Both the interactive fill-out session and
//! the server-side submission path resolve questions through it, so the two
//! can never disagree on which answers are visible or how they score.

mod definitions;

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

/// Identifier for a catalog question. Sub-questions extend their parent's
/// main number with a sub index, rendered as `5.1` at the wire boundary.
/// Kept structured internally so ids are never compared as floats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QuestionId {
    pub main: u16,
    pub sub: Option<u16>,
}

impl QuestionId {
    pub const fn top_level(main: u16) -> Self {
        Self { main, sub: None }
    }

    pub const fn nested(main: u16, sub: u16) -> Self {
        Self {
            main,
            sub: Some(sub),
        }
    }

    pub const fn is_sub_question(self) -> bool {
        self.sub.is_some()
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.sub {
            Some(sub) => write!(f, "{}.{}", self.main, sub),
            None => write!(f, "{}", self.main),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("question ids look like '5' or '5.1', got '{0}'")]
pub struct ParseQuestionIdError(String);

impl FromStr for QuestionId {
    type Err = ParseQuestionIdError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseQuestionIdError(raw.to_string());
        match raw.split_once('.') {
            None => {
                let main = raw.parse().map_err(|_| invalid())?;
                Ok(Self::top_level(main))
            }
            Some((main, sub)) => {
                let main = main.parse().map_err(|_| invalid())?;
                let sub = sub.parse().map_err(|_| invalid())?;
                Ok(Self::nested(main, sub))
            }
        }
    }
}

impl Serialize for QuestionId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for QuestionId {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// The two survey audiences, each with its own catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SurveyKind {
    Client,
    Candidate,
}

impl SurveyKind {
    pub const fn label(self) -> &'static str {
        match self {
            SurveyKind::Client => "client",
            SurveyKind::Candidate => "candidate",
        }
    }

    /// Public URL path segment for this audience's survey pages.
    pub const fn survey_path(self) -> &'static str {
        match self {
            SurveyKind::Client => "client-satisfaction-survey",
            SurveyKind::Candidate => "candidate-satisfaction-survey",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("survey kind must be 'client' or 'candidate', got '{0}'")]
pub struct ParseSurveyKindError(String);

impl FromStr for SurveyKind {
    type Err = ParseSurveyKindError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "client" => Ok(SurveyKind::Client),
            "candidate" => Ok(SurveyKind::Candidate),
            _ => Err(ParseSurveyKindError(raw.to_string())),
        }
    }
}

/// Input control presented to the respondent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    SingleChoice,
    ShortText,
    LongText,
}

/// One catalog entry, including its scoring metadata and optional branch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Question {
    pub id: QuestionId,
    pub text: &'static str,
    pub kind: QuestionKind,
    pub options: Vec<&'static str>,
    /// Absent or non-positive weight means the question never scores.
    pub weight: Option<f64>,
    /// Answers counting as a positive response. Empty means never qualifies.
    pub qualifying_answers: Vec<&'static str>,
    pub sub_question: Option<Box<SubQuestion>>,
}

impl Question {
    /// True when the question can contribute a non-zero score.
    pub fn is_scored(&self) -> bool {
        matches!(self.weight, Some(weight) if weight > 0.0) && !self.qualifying_answers.is_empty()
    }
}

/// A nested question shown only while the parent's answer equals the trigger.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubQuestion {
    pub trigger_value: &'static str,
    pub question: Question,
}

/// Ordered, immutable question sequence for one survey audience.
#[derive(Debug, Serialize)]
pub struct Catalog {
    kind: SurveyKind,
    questions: Vec<Question>,
}

impl Catalog {
    /// Shared compiled-in catalog for the given audience.
    pub fn for_kind(kind: SurveyKind) -> &'static Catalog {
        static CLIENT: OnceLock<Catalog> = OnceLock::new();
        static CANDIDATE: OnceLock<Catalog> = OnceLock::new();

        match kind {
            SurveyKind::Client => CLIENT.get_or_init(|| Catalog {
                kind,
                questions: definitions::client_questions(),
            }),
            SurveyKind::Candidate => CANDIDATE.get_or_init(|| Catalog {
                kind,
                questions: definitions::candidate_questions(),
            }),
        }
    }

    #[cfg(test)]
    pub(crate) fn with_questions(kind: SurveyKind, questions: Vec<Question>) -> Catalog {
        Catalog { kind, questions }
    }

    pub fn kind(&self) -> SurveyKind {
        self.kind
    }

    /// Ordered top-level questions; sub-questions stay nested in their parent.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn step_count(&self) -> usize {
        self.questions.len()
    }

    /// Id-exact lookup across top-level questions and their sub-questions.
    pub fn find(&self, id: QuestionId) -> Option<&Question> {
        for question in &self.questions {
            if question.id == id {
                return Some(question);
            }
            if let Some(sub) = &question.sub_question {
                if sub.question.id == id {
                    return Some(&sub.question);
                }
            }
        }
        None
    }

    /// Prompt text for a question id, if the id belongs to this catalog.
    pub fn question_text(&self, id: QuestionId) -> Option<&'static str> {
        self.find(id).map(|question| question.text)
    }
}
