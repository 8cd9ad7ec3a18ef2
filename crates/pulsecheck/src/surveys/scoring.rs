//! Pure qualification scoring shared by the submission, analytics, and
//! export paths. Nothing here allocates or fails: questions without scoring
//! metadata and answers outside the qualifying set degrade to zero.

use super::catalog::{Catalog, Question, QuestionId};

/// Score one answer against its question's metadata.
///
/// Qualification is binary: a qualifying answer earns the full weight, any
/// other answer (or a question without positive weight and qualifiers) earns
/// exactly zero.
pub fn answer_score(question: &Question, answer: &str) -> f64 {
    let weight = match question.weight {
        Some(weight) if weight > 0.0 => weight,
        _ => return 0.0,
    };
    if question.qualifying_answers.is_empty() {
        return 0.0;
    }
    if question
        .qualifying_answers
        .iter()
        .any(|qualifier| *qualifier == answer)
    {
        weight
    } else {
        0.0
    }
}

/// Unnormalized weighted sum over a submission's answers.
///
/// Ids missing from the catalog contribute zero; they are informational, not
/// an error. The result is stored as-is and presented as a percentage by
/// downstream consumers.
pub fn total_score<'a, I>(catalog: &Catalog, answers: I) -> f64
where
    I: IntoIterator<Item = (QuestionId, &'a str)>,
{
    answers
        .into_iter()
        .map(|(id, answer)| {
            catalog
                .find(id)
                .map(|question| answer_score(question, answer))
                .unwrap_or(0.0)
        })
        .sum()
}

/// Mean per-answer score over a population. Zero when the population is
/// empty, never NaN.
pub fn mean_score(score_sum: f64, response_count: usize) -> f64 {
    if response_count == 0 {
        0.0
    } else {
        score_sum / response_count as f64
    }
}

/// Three-decimal rounding used by the reporting surfaces.
pub fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
