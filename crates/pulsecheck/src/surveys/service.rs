use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::analytics::{tally_responses, QuestionBreakdown};
use super::catalog::{Catalog, QuestionId, SurveyKind};
use super::domain::{
    AnswerRecord, CompletionRecord, InviteRecord, NewRespondent, Respondent, RespondentId,
    RespondentUpdate, SubmittedAnswer,
};
use super::export::respondents_csv;
use super::repository::{
    CompletionNotice, MailerError, ResolvedAnswer, StoreError, SurveyInvitation, SurveyMailer,
    SurveyStore,
};
use super::scoring::answer_score;

/// Service composing the store, the mailer, and the shared scoring rules.
pub struct SurveyService<S, M> {
    store: Arc<S>,
    mailer: Arc<M>,
    public_base_url: String,
}

static RESPONDENT_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_respondent_id() -> RespondentId {
    let id = RESPONDENT_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    RespondentId(format!("rsp-{id:06}"))
}

impl<S, M> SurveyService<S, M>
where
    S: SurveyStore + 'static,
    M: SurveyMailer + 'static,
{
    pub fn new(store: Arc<S>, mailer: Arc<M>, public_base_url: impl Into<String>) -> Self {
        Self {
            store,
            mailer,
            public_base_url: public_base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Create a respondent record. The contact email is the unique identity
    /// within a survey audience.
    pub fn create_respondent(
        &self,
        kind: SurveyKind,
        input: NewRespondent,
    ) -> Result<Respondent, SurveyServiceError> {
        let name = require_field(&input.name, "name")?;
        let email = require_field(&input.email, "email")?;
        let mobile = require_field(&input.mobile, "mobile")?;

        if self
            .store
            .find_by_email(kind, &email)
            .map_err(SurveyServiceError::Store)?
            .is_some()
        {
            return Err(SurveyServiceError::DuplicateIdentity(email));
        }

        let now = Utc::now();
        let respondent = Respondent {
            id: next_respondent_id(),
            kind,
            name,
            email: email.clone(),
            mobile,
            organization: input
                .organization
                .map(|org| org.trim().to_string())
                .filter(|org| !org.is_empty()),
            created_at: now,
            updated_at: now,
            invite: None,
            completion: None,
        };

        self.store.insert_respondent(respondent).map_err(|err| match err {
            StoreError::Conflict => SurveyServiceError::DuplicateIdentity(email),
            other => SurveyServiceError::Store(other),
        })
    }

    pub fn get_respondent(&self, id: &RespondentId) -> Result<Respondent, SurveyServiceError> {
        self.store
            .fetch_respondent(id)
            .map_err(SurveyServiceError::Store)?
            .ok_or(SurveyServiceError::NotFound)
    }

    /// Update contact fields; untouched fields keep their current value.
    pub fn update_respondent(
        &self,
        id: &RespondentId,
        update: RespondentUpdate,
    ) -> Result<Respondent, SurveyServiceError> {
        let mut respondent = self.get_respondent(id)?;

        if let Some(name) = update.name {
            respondent.name = require_field(&name, "name")?;
        }
        if let Some(mobile) = update.mobile {
            respondent.mobile = require_field(&mobile, "mobile")?;
        }
        if let Some(organization) = update.organization {
            let organization = organization.trim().to_string();
            respondent.organization = (!organization.is_empty()).then_some(organization);
        }
        if let Some(email) = update.email {
            let email = require_field(&email, "email")?;
            if email != respondent.email {
                let taken = self
                    .store
                    .find_by_email(respondent.kind, &email)
                    .map_err(SurveyServiceError::Store)?
                    .is_some_and(|existing| existing.id != respondent.id);
                if taken {
                    return Err(SurveyServiceError::DuplicateIdentity(email));
                }
                respondent.email = email;
            }
        }

        respondent.updated_at = Utc::now();
        self.store
            .update_respondent(respondent.clone())
            .map_err(|err| match err {
                StoreError::NotFound => SurveyServiceError::NotFound,
                other => SurveyServiceError::Store(other),
            })?;
        Ok(respondent)
    }

    pub fn delete_respondent(&self, id: &RespondentId) -> Result<(), SurveyServiceError> {
        self.store.delete_respondent(id).map_err(|err| match err {
            StoreError::NotFound => SurveyServiceError::NotFound,
            other => SurveyServiceError::Store(other),
        })
    }

    /// Paginated listing, newest first, with a case-insensitive contact
    /// search over name, email, and mobile.
    pub fn list_respondents(
        &self,
        kind: SurveyKind,
        request: PageRequest,
    ) -> Result<Page<Respondent>, SurveyServiceError> {
        let mut respondents = self
            .store
            .list_respondents(kind)
            .map_err(SurveyServiceError::Store)?;

        if let Some(needle) = request
            .search
            .as_deref()
            .map(str::trim)
            .filter(|needle| !needle.is_empty())
        {
            let needle = needle.to_lowercase();
            respondents.retain(|respondent| {
                respondent.name.to_lowercase().contains(&needle)
                    || respondent.email.to_lowercase().contains(&needle)
                    || respondent.mobile.to_lowercase().contains(&needle)
            });
        }

        respondents.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let limit = request.limit.max(1);
        let page = request.page.max(1);
        let total = respondents.len();
        let total_pages = total.div_ceil(limit);
        let data = respondents
            .into_iter()
            .skip((page - 1) * limit)
            .take(limit)
            .collect();

        Ok(Page {
            data,
            pagination: Pagination {
                page,
                limit,
                total,
                total_pages,
                has_next: page < total_pages,
                has_prev: page > 1 && total_pages > 0,
            },
        })
    }

    /// Email the survey link. The record is stamped `EmailSent` only after
    /// the mailer accepts the invitation; a transport failure surfaces to
    /// the caller and leaves the record untouched.
    pub fn send_invitation(&self, id: &RespondentId) -> Result<Respondent, SurveyServiceError> {
        let mut respondent = self.get_respondent(id)?;
        if respondent.is_completed() {
            return Err(SurveyServiceError::AlreadyCompleted);
        }

        let survey_link = format!(
            "{}/{}/{}",
            self.public_base_url,
            respondent.kind.survey_path(),
            respondent.id.0
        );
        self.mailer.send_invitation(SurveyInvitation {
            respondent_id: respondent.id.clone(),
            kind: respondent.kind,
            recipient_name: respondent.name.clone(),
            recipient_email: respondent.email.clone(),
            survey_link,
        })?;

        let now = Utc::now();
        respondent.invite = Some(InviteRecord { sent_at: now });
        respondent.updated_at = now;
        self.store
            .update_respondent(respondent.clone())
            .map_err(|err| match err {
                StoreError::NotFound => SurveyServiceError::NotFound,
                other => SurveyServiceError::Store(other),
            })?;
        Ok(respondent)
    }

    /// Final submit for one respondent: validate, score every answer through
    /// the shared rules, persist atomically, then fire the best-effort
    /// completion notice.
    pub fn submit_survey(
        &self,
        id: &RespondentId,
        answers: Vec<SubmittedAnswer>,
    ) -> Result<SubmissionOutcome, SurveyServiceError> {
        let respondent = self.get_respondent(id)?;
        if respondent.is_completed() {
            return Err(SurveyServiceError::AlreadyCompleted);
        }

        let answers: Vec<SubmittedAnswer> = answers
            .into_iter()
            .filter(|entry| !entry.answer.is_blank())
            .collect();
        if answers.is_empty() {
            return Err(SurveyServiceError::InvalidInput(
                "at least one answer is required".to_string(),
            ));
        }

        let catalog = Catalog::for_kind(respondent.kind);
        let now = Utc::now();
        let records: Vec<AnswerRecord> = answers
            .iter()
            .map(|entry| {
                let text = entry.answer.as_text().to_string();
                let score = catalog
                    .find(entry.question_id)
                    .map(|question| answer_score(question, &text))
                    .unwrap_or(0.0);
                AnswerRecord {
                    respondent_id: respondent.id.clone(),
                    question_id: entry.question_id,
                    answer: text,
                    answer_score: score,
                    answered_at: now,
                }
            })
            .collect();
        let total_score: f64 = records.iter().map(|record| record.answer_score).sum();

        let completed = self
            .store
            .complete_submission(
                &respondent.id,
                records.clone(),
                CompletionRecord {
                    completed_at: now,
                    total_score,
                },
            )
            .map_err(|err| match err {
                StoreError::Conflict => SurveyServiceError::AlreadyCompleted,
                StoreError::NotFound => SurveyServiceError::NotFound,
                other => SurveyServiceError::Store(other),
            })?;

        let notice = CompletionNotice {
            respondent_id: completed.id.clone(),
            kind: completed.kind,
            respondent_name: completed.name.clone(),
            total_score,
            answers: records
                .iter()
                .map(|record| ResolvedAnswer {
                    question_id: record.question_id,
                    question_text: catalog
                        .question_text(record.question_id)
                        .map(str::to_string)
                        .unwrap_or_else(|| format!("Question {}", record.question_id)),
                    answer: record.answer.clone(),
                })
                .collect(),
        };
        if let Err(err) = self.mailer.send_completion_notice(notice) {
            warn!(
                respondent = %completed.id.0,
                error = %err,
                "completion notice failed; submission stands"
            );
        }

        Ok(SubmissionOutcome {
            respondent: completed,
            answers: records,
            total_score,
        })
    }

    pub fn answers_for_respondent(
        &self,
        id: &RespondentId,
    ) -> Result<Vec<AnswerRecord>, SurveyServiceError> {
        self.get_respondent(id)?;
        self.store
            .answers_for_respondent(id)
            .map_err(SurveyServiceError::Store)
    }

    /// Per-question analytics across every stored answer of one audience.
    pub fn question_responses(
        &self,
        kind: SurveyKind,
        question_id: QuestionId,
        options: &[String],
    ) -> Result<QuestionBreakdown, SurveyServiceError> {
        let answers = self
            .store
            .answers_for_question(kind, question_id)
            .map_err(SurveyServiceError::Store)?;
        Ok(tally_responses(question_id, options, &answers))
    }

    /// CSV export of every respondent of one audience with their answers.
    pub fn export_csv(&self, kind: SurveyKind) -> Result<String, SurveyServiceError> {
        let mut respondents = self
            .store
            .list_respondents(kind)
            .map_err(SurveyServiceError::Store)?;
        respondents.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let mut rows = Vec::with_capacity(respondents.len());
        for respondent in respondents {
            let answers = self
                .store
                .answers_for_respondent(&respondent.id)
                .map_err(SurveyServiceError::Store)?;
            rows.push((respondent, answers));
        }
        Ok(respondents_csv(&rows)?)
    }
}

fn require_field(value: &str, field: &str) -> Result<String, SurveyServiceError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(SurveyServiceError::InvalidInput(format!(
            "{field} is required"
        )));
    }
    Ok(trimmed.to_string())
}

/// Everything persisted by one successful submission.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmissionOutcome {
    pub respondent: Respondent,
    pub answers: Vec<AnswerRecord>,
    pub total_score: f64,
}

/// Listing request: 1-based page, page size, optional contact search.
#[derive(Debug, Clone, Deserialize)]
pub struct PageRequest {
    #[serde(default = "default_page")]
    pub page: usize,
    #[serde(default = "default_limit")]
    pub limit: usize,
    #[serde(default)]
    pub search: Option<String>,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: default_page(),
            limit: default_limit(),
            search: None,
        }
    }
}

fn default_page() -> usize {
    1
}

fn default_limit() -> usize {
    10
}

/// One page of results plus navigation metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub pagination: Pagination,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pagination {
    pub page: usize,
    pub limit: usize,
    pub total: usize,
    pub total_pages: usize,
    pub has_next: bool,
    pub has_prev: bool,
}

/// Error raised by the survey service.
#[derive(Debug, thiserror::Error)]
pub enum SurveyServiceError {
    #[error("respondent not found")]
    NotFound,
    #[error("survey already completed")]
    AlreadyCompleted,
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("a respondent with email '{0}' already exists")]
    DuplicateIdentity(String),
    #[error(transparent)]
    Store(StoreError),
    #[error(transparent)]
    Mail(#[from] MailerError),
    #[error("export failed: {0}")]
    Export(#[from] csv::Error),
}
