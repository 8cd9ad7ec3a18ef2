//! CSV export of a survey audience's respondents and answers.
//!
//! One row per respondent: fixed metadata columns, then one answer column
//! per historically-seen question id (numeric main id ascending, sub id
//! ascending), then the parallel block of per-answer score percentages.
//! Quoting is handled by the `csv` writer (RFC 4180).

use std::collections::BTreeSet;

use super::catalog::QuestionId;
use super::domain::{AnswerRecord, Respondent};

const METADATA_HEADERS: [&str; 12] = [
    "Respondent ID",
    "Name",
    "Email",
    "Mobile",
    "Organization",
    "Survey Email Sent",
    "Survey Email Sent At",
    "Survey Completed",
    "Survey Completed At",
    "Score (%)",
    "Created At",
    "Updated At",
];

/// Render the export for a set of respondents with their answers.
pub fn respondents_csv(rows: &[(Respondent, Vec<AnswerRecord>)]) -> Result<String, csv::Error> {
    // Column domain: every question id that ever received an answer, in
    // catalog order rather than first-seen order.
    let question_ids: BTreeSet<QuestionId> = rows
        .iter()
        .flat_map(|(_, answers)| answers.iter().map(|record| record.question_id))
        .collect();

    let mut writer = csv::Writer::from_writer(Vec::new());

    let mut headers: Vec<String> = METADATA_HEADERS.iter().map(|h| h.to_string()).collect();
    headers.extend(question_ids.iter().map(|id| format!("Question {id}")));
    headers.extend(question_ids.iter().map(|id| format!("Question Score {id} (%)")));
    writer.write_record(&headers)?;

    for (respondent, answers) in rows {
        let mut record: Vec<String> = vec![
            respondent.id.0.clone(),
            respondent.name.clone(),
            respondent.email.clone(),
            respondent.mobile.clone(),
            respondent.organization.clone().unwrap_or_default(),
            yes_no(respondent.invite.is_some()),
            respondent
                .invite
                .map(|invite| invite.sent_at.to_rfc3339())
                .unwrap_or_default(),
            yes_no(respondent.completion.is_some()),
            respondent
                .completion
                .map(|completion| completion.completed_at.to_rfc3339())
                .unwrap_or_default(),
            respondent
                .completion
                .map(|completion| percentage(completion.total_score))
                .unwrap_or_default(),
            respondent.created_at.to_rfc3339(),
            respondent.updated_at.to_rfc3339(),
        ];

        for id in &question_ids {
            record.push(
                answer_for(answers, *id)
                    .map(|found| found.answer.clone())
                    .unwrap_or_default(),
            );
        }
        for id in &question_ids {
            record.push(
                answer_for(answers, *id)
                    .map(|found| percentage(found.answer_score))
                    .unwrap_or_default(),
            );
        }

        writer.write_record(&record)?;
    }

    let bytes = writer.into_inner().map_err(|err| err.into_error())?;
    Ok(String::from_utf8(bytes).expect("csv writer emits utf-8"))
}

fn answer_for(answers: &[AnswerRecord], id: QuestionId) -> Option<&AnswerRecord> {
    answers.iter().find(|record| record.question_id == id)
}

fn yes_no(flag: bool) -> String {
    if flag { "Yes" } else { "No" }.to_string()
}

fn percentage(score: f64) -> String {
    format!("{:.1}%", score * 100.0)
}
