//! Interactive fill-out state for one respondent's pass through a catalog.
//!
//! The session is an explicit object owned by the caller; there is no
//! ambient form state. It applies the same visibility and completeness rules
//! the server consults at submission time, through the shared catalog.

use std::collections::BTreeMap;

use super::catalog::{Catalog, Question, QuestionId, SurveyKind};
use super::domain::{AnswerValue, SubmittedAnswer};

/// True iff the question branches and the recorded parent answer equals the
/// trigger exactly. No trimming, no case folding.
pub fn sub_question_visible(question: &Question, answers: &BTreeMap<QuestionId, String>) -> bool {
    let Some(sub) = &question.sub_question else {
        return false;
    };
    answers
        .get(&question.id)
        .is_some_and(|answer| answer == sub.trigger_value)
}

/// True when the question group blocks nothing: the top-level answer is
/// present and non-blank, and so is the sub-answer whenever the branch is
/// visible.
pub fn group_satisfied(question: &Question, answers: &BTreeMap<QuestionId, String>) -> bool {
    let answered = |id: QuestionId| {
        answers
            .get(&id)
            .is_some_and(|answer| !answer.trim().is_empty())
    };

    if !answered(question.id) {
        return false;
    }
    if let Some(sub) = &question.sub_question {
        if sub_question_visible(question, answers) {
            return answered(sub.question.id);
        }
    }
    true
}

/// Multi-step fill-out state: the current step over the top-level sequence
/// plus the accumulated answers. Navigation is strictly linear; sub-questions
/// are never steps of their own.
#[derive(Debug, Clone)]
pub struct SurveySession {
    catalog: &'static Catalog,
    step: usize,
    answers: BTreeMap<QuestionId, String>,
}

impl SurveySession {
    pub fn new(kind: SurveyKind) -> Self {
        Self {
            catalog: Catalog::for_kind(kind),
            step: 0,
            answers: BTreeMap::new(),
        }
    }

    pub fn catalog(&self) -> &'static Catalog {
        self.catalog
    }

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn current_question(&self) -> &Question {
        &self.catalog.questions()[self.step]
    }

    pub fn is_first_step(&self) -> bool {
        self.step == 0
    }

    pub fn is_last_step(&self) -> bool {
        self.step + 1 == self.catalog.step_count()
    }

    pub fn answer(&self, id: QuestionId) -> Option<&str> {
        self.answers.get(&id).map(String::as_str)
    }

    /// Record an answer. Changing a parent answer away from its branch
    /// trigger clears the recorded sub-answer so a stale branch answer can
    /// never survive into the submission.
    pub fn set_answer(&mut self, id: QuestionId, value: impl Into<String>) {
        let value = value.into();
        if let Some(question) = self.catalog.find(id) {
            if let Some(sub) = &question.sub_question {
                if value != sub.trigger_value {
                    self.answers.remove(&sub.question.id);
                }
            }
        }
        self.answers.insert(id, value);
    }

    pub fn should_show_sub_question(&self) -> bool {
        sub_question_visible(self.current_question(), &self.answers)
    }

    pub fn can_advance(&self) -> bool {
        group_satisfied(self.current_question(), &self.answers)
    }

    /// Move forward one step. Refuses on the last step or while the current
    /// group is incomplete.
    pub fn advance(&mut self) -> bool {
        if self.is_last_step() || !self.can_advance() {
            return false;
        }
        self.step += 1;
        true
    }

    /// Move back one step; always allowed except from the first question.
    pub fn retreat(&mut self) -> bool {
        if self.is_first_step() {
            return false;
        }
        self.step -= 1;
        true
    }

    /// True once every group in the catalog is satisfied.
    pub fn is_complete(&self) -> bool {
        self.catalog
            .questions()
            .iter()
            .all(|question| group_satisfied(question, &self.answers))
    }

    /// Drain the session into submission pairs, dropping blank entries.
    pub fn into_answers(self) -> Vec<SubmittedAnswer> {
        self.answers
            .into_iter()
            .filter(|(_, answer)| !answer.trim().is_empty())
            .map(|(question_id, answer)| SubmittedAnswer {
                question_id,
                answer: AnswerValue::Scalar(answer),
            })
            .collect()
    }
}
