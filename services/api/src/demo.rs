use crate::infra::{parse_survey_kind, InMemorySurveyMailer, InMemorySurveyStore};
use chrono::SecondsFormat;
use clap::Args;
use pulsecheck::config::AppConfig;
use pulsecheck::error::AppError;
use pulsecheck::surveys::{
    Catalog, NewRespondent, QuestionId, SurveyKind, SurveyService, SurveySession,
};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct CatalogArgs {
    /// Survey audience whose catalog to print (client or candidate)
    #[arg(long, default_value = "client", value_parser = parse_survey_kind)]
    pub(crate) kind: SurveyKind,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Write the client CSV export produced by the demo to this path
    #[arg(long)]
    pub(crate) export_csv: Option<PathBuf>,
    /// Skip the per-question analytics portion of the demo output
    #[arg(long)]
    pub(crate) skip_analytics: bool,
}

pub(crate) fn run_catalog(args: CatalogArgs) -> Result<(), AppError> {
    let catalog = Catalog::for_kind(args.kind);
    println!("{} survey catalog", args.kind.label());
    for question in catalog.questions() {
        println!("\n{}. {}", question.id, question.text);
        for option in &question.options {
            println!("   - {option}");
        }
        match (question.weight, question.qualifying_answers.is_empty()) {
            (Some(weight), false) => println!(
                "   scored: weight {weight}, qualifying on {}",
                question.qualifying_answers.join(" | ")
            ),
            _ => println!("   informational (never scored)"),
        }
        if let Some(sub) = &question.sub_question {
            println!(
                "   branches on '{}' -> {}. {}",
                sub.trigger_value, sub.question.id, sub.question.text
            );
        }
    }
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let store = Arc::new(InMemorySurveyStore::default());
    let mailer = Arc::new(InMemorySurveyMailer::default());
    let service = Arc::new(SurveyService::new(
        store,
        mailer.clone(),
        config.survey.public_base_url.clone(),
    ));

    println!("Survey administration demo");

    let respondent = service
        .create_respondent(
            SurveyKind::Client,
            NewRespondent {
                name: "Priya Nair".to_string(),
                email: "priya.nair@example.com".to_string(),
                mobile: "+91 98200 11223".to_string(),
                organization: Some("Meridian Analytics".to_string()),
            },
        )
        .map_err(AppError::from)?;
    println!(
        "- Created {} respondent {} ({})",
        respondent.kind.label(),
        respondent.id.0,
        respondent.email
    );

    let invited = service
        .send_invitation(&respondent.id)
        .map_err(AppError::from)?;
    let invitations = mailer.invitations();
    println!(
        "- Invitation sent, status {} -> {}",
        invited.status().label(),
        invitations[0].survey_link
    );

    println!("\nInteractive fill-out (question 5 branches on 'Yes')");
    let mut session = SurveySession::new(SurveyKind::Client);
    session.set_answer(QuestionId::top_level(1), "Talent Advisory");
    session.set_answer(QuestionId::top_level(2), "Industry Referral");
    session.set_answer(QuestionId::top_level(3), "5 - Fully achieved");
    session.set_answer(QuestionId::top_level(4), "4 - Satisfied");
    session.set_answer(QuestionId::top_level(5), "Yes");
    session.set_answer(QuestionId::nested(5, 1), "Weekly");
    session.set_answer(
        QuestionId::top_level(6),
        "4 - On time with minimal deviation",
    );
    session.set_answer(QuestionId::top_level(7), "4 - Likely");
    session.set_answer(QuestionId::top_level(8), "5 - Extremely likely");
    session.set_answer(QuestionId::top_level(9), "4 - Satisfied");
    session.set_answer(
        QuestionId::top_level(10),
        "Prior relationship or referral trust",
    );
    session.set_answer(QuestionId::top_level(11), "4 - Very clear");
    session.set_answer(QuestionId::top_level(12), "4 - Met most objectives");
    // Briefly take the question 13 branch, then abandon it: the recorded
    // sub-answer is cleared and never reaches the submission.
    session.set_answer(QuestionId::top_level(13), "Yes");
    session.set_answer(QuestionId::nested(13, 1), "Faster first shortlist");
    session.set_answer(QuestionId::top_level(13), "No");
    session.set_answer(QuestionId::top_level(14), "Thanks for the partnership.");

    let mut steps = 1;
    while session.advance() {
        steps += 1;
    }
    println!(
        "- Walked {steps} steps, complete: {}, abandoned branch retained: {}",
        session.is_complete(),
        session.answer(QuestionId::nested(13, 1)).is_some()
    );

    let outcome = service
        .submit_survey(&respondent.id, session.into_answers())
        .map_err(AppError::from)?;
    println!(
        "- Submitted {} answers, CSAT {:.1}%",
        outcome.answers.len(),
        outcome.total_score * 100.0
    );
    if let Some(completion) = outcome.respondent.completion {
        println!(
            "  Completed at {}",
            completion
                .completed_at
                .to_rfc3339_opts(SecondsFormat::Secs, true)
        );
    }
    println!("  Scored answers:");
    for record in outcome
        .answers
        .iter()
        .filter(|record| record.answer_score > 0.0)
    {
        println!(
            "    - {}: '{}' -> {:.1}%",
            record.question_id,
            record.answer,
            record.answer_score * 100.0
        );
    }

    if !args.skip_analytics {
        let breakdown = service
            .question_responses(
                SurveyKind::Client,
                QuestionId::top_level(5),
                &["Yes".to_string(), "No".to_string()],
            )
            .map_err(AppError::from)?;
        println!("\nQuestion 5 analytics");
        for entry in &breakdown.data {
            println!("  - {}: {}", entry.option, entry.count);
        }
        println!(
            "  total responses {}, CSAT {:.3}",
            breakdown.total_responses, breakdown.csat_score
        );
    }

    let csv = service
        .export_csv(SurveyKind::Client)
        .map_err(AppError::from)?;
    match args.export_csv {
        Some(path) => {
            std::fs::write(&path, &csv)?;
            println!("\nClient export written to {}", path.display());
        }
        None => println!(
            "\nClient export: {} rows (pass --export-csv to write the file)",
            csv.lines().count().saturating_sub(1)
        ),
    }

    let notices = mailer.notices();
    println!(
        "Completion notices dispatched: {} (first covers {} answers)",
        notices.len(),
        notices.first().map(|notice| notice.answers.len()).unwrap_or(0)
    );

    Ok(())
}
