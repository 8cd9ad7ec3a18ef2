use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::surveys::catalog::{QuestionId, SurveyKind};
use crate::surveys::domain::{
    AnswerRecord, AnswerValue, CompletionRecord, NewRespondent, Respondent, RespondentId,
    SubmittedAnswer,
};
use crate::surveys::repository::{
    CompletionNotice, MailerError, StoreError, SurveyInvitation, SurveyMailer, SurveyStore,
};
use crate::surveys::service::SurveyService;

pub(super) const BASE_URL: &str = "https://surveys.example.com";

#[derive(Default)]
struct StoreState {
    respondents: HashMap<RespondentId, Respondent>,
    answers: Vec<AnswerRecord>,
}

/// In-memory store; one mutex over the whole state makes the completion
/// write atomic and serializes the completion check against it.
#[derive(Default, Clone)]
pub(super) struct MemoryStore {
    state: Arc<Mutex<StoreState>>,
}

impl SurveyStore for MemoryStore {
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

#[derive(Default, Clone)]
pub(super) struct RecordingMailer {
    invitations: Arc<Mutex<Vec<SurveyInvitation>>>,
    notices: Arc<Mutex<Vec<CompletionNotice>>>,
}

impl RecordingMailer {
    pub(super) fn invitations(&self) -> Vec<SurveyInvitation> {
        self.invitations.lock().expect("mailer mutex poisoned").clone()
    }

    pub(super) fn notices(&self) -> Vec<CompletionNotice> {
        self.notices.lock().expect("mailer mutex poisoned").clone()
    }
}

impl SurveyMailer for RecordingMailer {
    fn send_invitation(&self, invitation: SurveyInvitation) -> Result<(), MailerError> {
        self.invitations
            .lock()
            .expect("mailer mutex poisoned")
            .push(invitation);
        Ok(())
    }

    fn send_completion_notice(&self, notice: CompletionNotice) -> Result<(), MailerError> {
        self.notices
            .lock()
            .expect("mailer mutex poisoned")
            .push(notice);
        Ok(())
    }
}

pub(super) struct FailingMailer;

impl SurveyMailer for FailingMailer {
    fn send_invitation(&self, _invitation: SurveyInvitation) -> Result<(), MailerError> {
        Err(MailerError::Transport("smtp offline".to_string()))
    }

    fn send_completion_notice(&self, _notice: CompletionNotice) -> Result<(), MailerError> {
        Err(MailerError::Transport("smtp offline".to_string()))
    }
}

pub(super) struct UnavailableStore;

impl SurveyStore for UnavailableStore {
    fn insert_respondent(&self, _respondent: Respondent) -> Result<Respondent, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }

    fn fetch_respondent(&self, _id: &RespondentId) -> Result<Option<Respondent>, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }

    fn update_respondent(&self, _respondent: Respondent) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }

    fn delete_respondent(&self, _id: &RespondentId) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }

    fn list_respondents(&self, _kind: SurveyKind) -> Result<Vec<Respondent>, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }

    fn find_by_email(
        &self,
        _kind: SurveyKind,
        _email: &str,
    ) -> Result<Option<Respondent>, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }

    fn complete_submission(
        &self,
        _id: &RespondentId,
        _answers: Vec<AnswerRecord>,
        _completion: CompletionRecord,
    ) -> Result<Respondent, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }

    fn answers_for_respondent(&self, _id: &RespondentId) -> Result<Vec<AnswerRecord>, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }

    fn answers_for_question(
        &self,
        _kind: SurveyKind,
        _question_id: QuestionId,
    ) -> Result<Vec<AnswerRecord>, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }
}

pub(super) fn build_service() -> (
    Arc<SurveyService<MemoryStore, RecordingMailer>>,
    Arc<MemoryStore>,
    Arc<RecordingMailer>,
) {
    let store = Arc::new(MemoryStore::default());
    let mailer = Arc::new(RecordingMailer::default());
    let service = Arc::new(SurveyService::new(store.clone(), mailer.clone(), BASE_URL));
    (service, store, mailer)
}

pub(super) fn client_contact() -> NewRespondent {
    NewRespondent {
        name: "Priya Nair".to_string(),
        email: "priya.nair@example.com".to_string(),
        mobile: "+91 98200 11223".to_string(),
        organization: Some("Meridian Analytics".to_string()),
    }
}

pub(super) fn candidate_contact() -> NewRespondent {
    NewRespondent {
        name: "Rahul Mehta".to_string(),
        email: "rahul.mehta@example.com".to_string(),
        mobile: "+91 98111 22334".to_string(),
        organization: None,
    }
}

pub(super) fn submitted(id: &str, answer: &str) -> SubmittedAnswer {
    SubmittedAnswer {
        question_id: id.parse().expect("valid question id"),
        answer: AnswerValue::Scalar(answer.to_string()),
    }
}

/// Full client survey pass: question 5 triggers its branch, eight scored
/// questions qualify for 0.1 each.
pub(super) fn client_answers() -> Vec<SubmittedAnswer> {
    vec![
        submitted("1", "Talent Advisory"),
        submitted("2", "Web/Search"),
        submitted("3", "4 - Mostly achieved"),
        submitted("4", "5 - Highly Satisfied"),
        submitted("5", "Yes"),
        submitted("5.1", "Monthly"),
        submitted("6", "3 - Minor delays / largely on track"),
        submitted("7", "4 - Likely"),
        submitted("8", "2 - Unlikely"),
        submitted("9", "4 - Satisfied"),
        submitted("10", "Reputation and brand credibility"),
        submitted("11", "5 - Extremely clear"),
        submitted("12", "4 - Met most objectives"),
        submitted("13", "No"),
        submitted("14", "Keep the weekly summaries, they were useful."),
    ]
}

pub(super) const CLIENT_ANSWERS_EXPECTED_SCORE: f64 = 0.8;
