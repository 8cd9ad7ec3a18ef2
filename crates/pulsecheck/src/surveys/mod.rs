//! Survey administration: catalogs, branching sessions, scoring, the
//! submission aggregator, analytics, and the CSV export surface.

pub mod analytics;
pub mod catalog;
pub mod domain;
pub mod export;
pub mod repository;
pub mod router;
pub mod scoring;
pub mod service;
pub mod session;

#[cfg(test)]
mod tests;

pub use analytics::{OptionCount, QuestionBreakdown};
pub use catalog::{
    Catalog, ParseQuestionIdError, ParseSurveyKindError, Question, QuestionId, QuestionKind,
    SubQuestion, SurveyKind,
};
pub use domain::{
    AnswerRecord, AnswerValue, CompletionRecord, InviteRecord, NewRespondent, Respondent,
    RespondentId, RespondentUpdate, SubmittedAnswer, SurveyStatus,
};
pub use repository::{
    CompletionNotice, MailerError, ResolvedAnswer, StoreError, SurveyInvitation, SurveyMailer,
    SurveyStore,
};
pub use router::survey_router;
pub use service::{
    Page, PageRequest, Pagination, SubmissionOutcome, SurveyService, SurveyServiceError,
};
pub use session::SurveySession;
