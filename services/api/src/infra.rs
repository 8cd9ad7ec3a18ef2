use metrics_exporter_prometheus::PrometheusHandle;
use pulsecheck::surveys::{
    AnswerRecord, CompletionNotice, CompletionRecord, MailerError, QuestionId, Respondent,
    RespondentId, StoreError, SurveyInvitation, SurveyKind, SurveyMailer, SurveyStore,
};
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default)]
struct SurveyStoreState {
    respondents: HashMap<RespondentId, Respondent>,
    answers: Vec<AnswerRecord>,
}

/// In-memory store backing the service binary and demos. A single mutex over
/// the whole state gives `complete_submission` its atomicity and makes the
/// completion check race-free.
#[derive(Default, Clone)]
pub(crate) struct InMemorySurveyStore {
    state: Arc<Mutex<SurveyStoreState>>,
}

impl SurveyStore for InMemorySurveyStore {
    fn insert_respondent(&self, respondent: Respondent) -> Result<Respondent, StoreError> {
        let mut state = self.state.lock().expect("store mutex poisoned");
        let duplicate = state.respondents.values().any(|existing| {
            existing.kind == respondent.kind && existing.email == respondent.email
        });
        if duplicate || state.respondents.contains_key(&respondent.id) {
            return Err(StoreError::Conflict);
        }
        state
            .respondents
            .insert(respondent.id.clone(), respondent.clone());
        Ok(respondent)
    }

    fn fetch_respondent(&self, id: &RespondentId) -> Result<Option<Respondent>, StoreError> {
        let state = self.state.lock().expect("store mutex poisoned");
        Ok(state.respondents.get(id).cloned())
    }

    fn update_respondent(&self, respondent: Respondent) -> Result<(), StoreError> {
        let mut state = self.state.lock().expect("store mutex poisoned");
        if !state.respondents.contains_key(&respondent.id) {
            return Err(StoreError::NotFound);
        }
        state.respondents.insert(respondent.id.clone(), respondent);
        Ok(())
    }

    fn delete_respondent(&self, id: &RespondentId) -> Result<(), StoreError> {
        let mut state = self.state.lock().expect("store mutex poisoned");
        if state.respondents.remove(id).is_none() {
            return Err(StoreError::NotFound);
        }
        state.answers.retain(|record| record.respondent_id != *id);
        Ok(())
    }

    fn list_respondents(&self, kind: SurveyKind) -> Result<Vec<Respondent>, StoreError> {
        let state = self.state.lock().expect("store mutex poisoned");
        Ok(state
            .respondents
            .values()
            .filter(|respondent| respondent.kind == kind)
            .cloned()
            .collect())
    }

    fn find_by_email(
        &self,
        kind: SurveyKind,
        email: &str,
    ) -> Result<Option<Respondent>, StoreError> {
        let state = self.state.lock().expect("store mutex poisoned");
        Ok(state
            .respondents
            .values()
            .find(|respondent| respondent.kind == kind && respondent.email == email)
            .cloned())
    }

    fn complete_submission(
        &self,
        id: &RespondentId,
        answers: Vec<AnswerRecord>,
        completion: CompletionRecord,
    ) -> Result<Respondent, StoreError> {
        let mut state = self.state.lock().expect("store mutex poisoned");
        let respondent = state.respondents.get_mut(id).ok_or(StoreError::NotFound)?;
        if respondent.completion.is_some() {
            return Err(StoreError::Conflict);
        }
        respondent.completion = Some(completion);
        respondent.updated_at = completion.completed_at;
        let respondent = respondent.clone();
        state.answers.extend(answers);
        Ok(respondent)
    }

    fn answers_for_respondent(&self, id: &RespondentId) -> Result<Vec<AnswerRecord>, StoreError> {
        let state = self.state.lock().expect("store mutex poisoned");
        Ok(state
            .answers
            .iter()
            .filter(|record| record.respondent_id == *id)
            .cloned()
            .collect())
    }

    fn answers_for_question(
        &self,
        kind: SurveyKind,
        question_id: QuestionId,
    ) -> Result<Vec<AnswerRecord>, StoreError> {
        let state = self.state.lock().expect("store mutex poisoned");
        Ok(state
            .answers
            .iter()
            .filter(|record| {
                record.question_id == question_id
                    && state
                        .respondents
                        .get(&record.respondent_id)
                        .is_some_and(|respondent| respondent.kind == kind)
            })
            .cloned()
            .collect())
    }
}

/// Mailer that records outbound mail and logs it instead of delivering.
/// Stands in for the SMTP adapter in demos and local runs.
#[derive(Default, Clone)]
pub(crate) struct InMemorySurveyMailer {
    invitations: Arc<Mutex<Vec<SurveyInvitation>>>,
    notices: Arc<Mutex<Vec<CompletionNotice>>>,
}

impl InMemorySurveyMailer {
    pub(crate) fn invitations(&self) -> Vec<SurveyInvitation> {
        self.invitations
            .lock()
            .expect("mailer mutex poisoned")
            .clone()
    }

    pub(crate) fn notices(&self) -> Vec<CompletionNotice> {
        self.notices.lock().expect("mailer mutex poisoned").clone()
    }
}

impl SurveyMailer for InMemorySurveyMailer {
    fn send_invitation(&self, invitation: SurveyInvitation) -> Result<(), MailerError> {
        info!(
            recipient = %invitation.recipient_email,
            link = %invitation.survey_link,
            "survey invitation queued"
        );
        self.invitations
            .lock()
            .expect("mailer mutex poisoned")
            .push(invitation);
        Ok(())
    }

    fn send_completion_notice(&self, notice: CompletionNotice) -> Result<(), MailerError> {
        info!(
            respondent = %notice.respondent_id.0,
            score = notice.total_score,
            "completion notice queued"
        );
        self.notices
            .lock()
            .expect("mailer mutex poisoned")
            .push(notice);
        Ok(())
    }
}

pub(crate) fn parse_survey_kind(raw: &str) -> Result<SurveyKind, String> {
    raw.parse::<SurveyKind>().map_err(|err| err.to_string())
}
