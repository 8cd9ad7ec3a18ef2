use serde::{Deserialize, Serialize};

use super::catalog::{QuestionId, SurveyKind};
use super::domain::{AnswerRecord, CompletionRecord, Respondent, RespondentId};

/// Storage abstraction so the service module can be exercised in isolation.
/// Implementations must back `complete_submission` with an atomic multi-write
/// primitive (a transaction, or a single lock over the whole mutation).
pub trait SurveyStore: Send + Sync {
    /// Persist a new respondent. `Conflict` when a respondent of the same
    /// kind already uses the email address.
    fn insert_respondent(&self, respondent: Respondent) -> Result<Respondent, StoreError>;

    fn fetch_respondent(&self, id: &RespondentId) -> Result<Option<Respondent>, StoreError>;

    fn update_respondent(&self, respondent: Respondent) -> Result<(), StoreError>;

    fn delete_respondent(&self, id: &RespondentId) -> Result<(), StoreError>;

    fn list_respondents(&self, kind: SurveyKind) -> Result<Vec<Respondent>, StoreError>;

    fn find_by_email(
        &self,
        kind: SurveyKind,
        email: &str,
    ) -> Result<Option<Respondent>, StoreError>;

    /// Atomically persist every answer row plus the completion stamp, or
    /// nothing. The completion check must happen under the same guard that
    /// applies the write: of two concurrent submissions for one respondent,
    /// exactly one may observe "not completed" and win; the other gets
    /// `Conflict`.
    fn complete_submission(
        &self,
        id: &RespondentId,
        answers: Vec<AnswerRecord>,
        completion: CompletionRecord,
    ) -> Result<Respondent, StoreError>;

    fn answers_for_respondent(&self, id: &RespondentId) -> Result<Vec<AnswerRecord>, StoreError>;

    /// All stored answers for one question across a survey audience, for the
    /// analytics aggregator.
    fn answers_for_question(
        &self,
        kind: SurveyKind,
        question_id: QuestionId,
    ) -> Result<Vec<AnswerRecord>, StoreError>;
}

/// Error enumeration for storage failures.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Outbound email seam: survey invitations and completion notices.
pub trait SurveyMailer: Send + Sync {
    /// Deliver the survey link to the respondent. A failure here must
    /// surface to the caller; the record is only stamped after success.
    fn send_invitation(&self, invitation: SurveyInvitation) -> Result<(), MailerError>;

    /// Best-effort completion notice with the resolved question/answer set.
    /// Callers log failures and never roll back the submission.
    fn send_completion_notice(&self, notice: CompletionNotice) -> Result<(), MailerError>;
}

/// Invitation payload handed to the mailer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveyInvitation {
    pub respondent_id: RespondentId,
    pub kind: SurveyKind,
    pub recipient_name: String,
    pub recipient_email: String,
    pub survey_link: String,
}

/// Completion notice payload: the respondent's identity plus every answer
/// with its resolved prompt text, sub-questions included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionNotice {
    pub respondent_id: RespondentId,
    pub kind: SurveyKind,
    pub respondent_name: String,
    pub total_score: f64,
    pub answers: Vec<ResolvedAnswer>,
}

/// One question/answer pair with the prompt resolved from the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedAnswer {
    pub question_id: QuestionId,
    pub question_text: String,
    pub answer: String,
}

/// Mail dispatch error.
#[derive(Debug, thiserror::Error)]
pub enum MailerError {
    #[error("mail transport unavailable: {0}")]
    Transport(String),
}
