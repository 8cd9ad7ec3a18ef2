//! Per-question response tallies across the stored answer population.

use serde::Serialize;

use super::catalog::QuestionId;
use super::domain::AnswerRecord;
use super::scoring::{mean_score, round3};

/// Count for one defined option. Options never chosen still appear with a
/// zero count; the option list is the output domain, not the observed values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionCount {
    pub option: String,
    pub count: usize,
}

/// Aggregate view of one question across all historical submissions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestionBreakdown {
    pub question_id: QuestionId,
    pub data: Vec<OptionCount>,
    pub total_responses: usize,
    /// Answers matching none of the defined options. Counted in
    /// `total_responses` but in no option bucket.
    pub unmatched: usize,
    pub total_score: f64,
    pub csat_score: f64,
}

/// Tally stored answers for one question against its defined option list.
///
/// Unknown answer strings contribute to the totals but never to a bucket;
/// the per-question CSAT score is the mean stored answer score, zero when no
/// responses exist.
pub fn tally_responses(
    question_id: QuestionId,
    options: &[String],
    answers: &[AnswerRecord],
) -> QuestionBreakdown {
    let mut counts = vec![0usize; options.len()];
    let mut unmatched = 0usize;
    let mut score_sum = 0.0;

    for record in answers {
        match options.iter().position(|option| *option == record.answer) {
            Some(index) => counts[index] += 1,
            None => unmatched += 1,
        }
        score_sum += record.answer_score;
    }

    let total_responses = answers.len();
    QuestionBreakdown {
        question_id,
        data: options
            .iter()
            .zip(counts)
            .map(|(option, count)| OptionCount {
                option: option.clone(),
                count,
            })
            .collect(),
        total_responses,
        unmatched,
        total_score: round3(score_sum),
        csat_score: round3(mean_score(score_sum, total_responses)),
    }
}
