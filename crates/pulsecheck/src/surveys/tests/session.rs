use crate::surveys::catalog::{QuestionId, SurveyKind};
use crate::surveys::session::SurveySession;

fn answered(session: &SurveySession, id: &str) -> bool {
    session
        .answer(id.parse().expect("valid question id"))
        .is_some()
}

#[test]
fn sub_question_appears_only_on_exact_trigger_match() {
    let mut session = SurveySession::new(SurveyKind::Client);
    while session.current_question().id != QuestionId::top_level(5) {
        let id = session.current_question().id;
        session.set_answer(id, "1 - Not at all achieved");
        // Options differ per question; any non-blank answer satisfies nav.
        assert!(session.advance(), "stuck at question {id}");
    }

    assert!(!session.should_show_sub_question());
    session.set_answer(QuestionId::top_level(5), "No");
    assert!(!session.should_show_sub_question());

    // Case and whitespace matter.
    session.set_answer(QuestionId::top_level(5), "yes");
    assert!(!session.should_show_sub_question());

    session.set_answer(QuestionId::top_level(5), "Yes");
    assert!(session.should_show_sub_question());
}

#[test]
fn advancing_requires_the_visible_sub_answer() {
    let mut session = SurveySession::new(SurveyKind::Client);
    while session.current_question().id != QuestionId::top_level(5) {
        let id = session.current_question().id;
        session.set_answer(id, "3 - Partially achieved");
        session.advance();
    }

    assert!(!session.can_advance());
    session.set_answer(QuestionId::top_level(5), "Yes");
    assert!(!session.can_advance(), "visible branch must be answered");

    session.set_answer(QuestionId::nested(5, 1), "Monthly");
    assert!(session.can_advance());

    // Collapsing the branch satisfies the group on the parent alone.
    session.set_answer(QuestionId::top_level(5), "No");
    assert!(session.can_advance());
}

#[test]
fn changing_the_parent_away_from_the_trigger_clears_the_sub_answer() {
    let mut session = SurveySession::new(SurveyKind::Client);
    session.set_answer(QuestionId::top_level(5), "Yes");
    session.set_answer(QuestionId::nested(5, 1), "Weekly");
    assert!(answered(&session, "5.1"));

    session.set_answer(QuestionId::top_level(5), "No");
    assert!(!answered(&session, "5.1"), "stale branch answer must go");

    // Re-answering the trigger does not resurrect the cleared value.
    session.set_answer(QuestionId::top_level(5), "Yes");
    assert!(!answered(&session, "5.1"));
}

#[test]
fn re_recording_the_trigger_keeps_the_sub_answer() {
    let mut session = SurveySession::new(SurveyKind::Client);
    session.set_answer(QuestionId::top_level(5), "Yes");
    session.set_answer(QuestionId::nested(5, 1), "Weekly");
    session.set_answer(QuestionId::top_level(5), "Yes");
    assert_eq!(session.answer(QuestionId::nested(5, 1)), Some("Weekly"));
}

#[test]
fn navigation_is_linear_and_gated() {
    let mut session = SurveySession::new(SurveyKind::Candidate);
    assert!(session.is_first_step());
    assert!(!session.retreat(), "cannot move before the first question");
    assert!(!session.advance(), "unanswered question blocks forward");

    session.set_answer(QuestionId::top_level(1), "Asha");
    assert!(session.advance());
    assert_eq!(session.step(), 1);

    // Backward is always allowed off the first step, answered or not.
    assert!(session.retreat());
    assert!(session.is_first_step());
}

#[test]
fn blank_answers_do_not_satisfy_a_group() {
    let mut session = SurveySession::new(SurveyKind::Candidate);
    session.set_answer(QuestionId::top_level(1), "   ");
    assert!(!session.can_advance());
    session.set_answer(QuestionId::top_level(1), "Asha");
    assert!(session.can_advance());
}

#[test]
fn full_candidate_walkthrough_reaches_the_last_step() {
    let mut session = SurveySession::new(SurveyKind::Candidate);
    session.set_answer(QuestionId::top_level(1), "Asha");
    session.set_answer(QuestionId::top_level(2), "LinkedIn");
    session.set_answer(QuestionId::top_level(3), "4 - Satisfied");
    session.set_answer(QuestionId::top_level(4), "Yes");
    session.set_answer(QuestionId::top_level(5), "Sometimes");
    session.set_answer(QuestionId::top_level(6), "Yes");
    session.set_answer(QuestionId::top_level(7), "5 - Highly Satisfied");
    session.set_answer(QuestionId::top_level(8), "Maybe");
    session.set_answer(QuestionId::top_level(9), "4 - Satisfied");

    while !session.is_last_step() {
        assert!(session.advance());
    }
    assert!(session.is_complete());

    let answers = session.into_answers();
    assert_eq!(answers.len(), 9);
    assert!(answers
        .iter()
        .all(|entry| !entry.question_id.is_sub_question()));
}

#[test]
fn draining_the_session_drops_blanks_and_keeps_triggered_branches() {
    let mut session = SurveySession::new(SurveyKind::Client);
    session.set_answer(QuestionId::top_level(2), "Other (specify)");
    session.set_answer(QuestionId::nested(2, 1), "A conference talk");
    session.set_answer(QuestionId::top_level(14), "  ");

    let answers = session.into_answers();
    let ids: Vec<String> = answers
        .iter()
        .map(|entry| entry.question_id.to_string())
        .collect();
    assert_eq!(ids, vec!["2", "2.1"]);
}
