use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::catalog::{Catalog, QuestionId, SurveyKind};
use super::domain::{NewRespondent, RespondentId, RespondentUpdate, SubmittedAnswer};
use super::repository::{SurveyMailer, SurveyStore};
use super::service::{PageRequest, SurveyService, SurveyServiceError};

/// Router builder exposing the survey administration endpoints.
pub fn survey_router<S, M>(service: Arc<SurveyService<S, M>>) -> Router
where
    S: SurveyStore + 'static,
    M: SurveyMailer + 'static,
{
    Router::new()
        .route(
            "/api/v1/respondents/:kind",
            get(list_handler::<S, M>).post(create_handler::<S, M>),
        )
        .route(
            "/api/v1/respondents/:kind/export",
            get(export_handler::<S, M>),
        )
        .route(
            "/api/v1/respondents/:kind/:id",
            get(detail_handler::<S, M>)
                .put(update_handler::<S, M>)
                .delete(delete_handler::<S, M>),
        )
        .route(
            "/api/v1/respondents/:kind/:id/send-survey",
            post(send_survey_handler::<S, M>),
        )
        .route(
            "/api/v1/respondents/:kind/:id/submit-survey",
            post(submit_survey_handler::<S, M>),
        )
        .route(
            "/api/v1/respondents/:kind/:id/answers",
            get(answers_handler::<S, M>),
        )
        .route("/api/v1/surveys/:kind/questions", get(catalog_handler))
        .route(
            "/api/v1/surveys/:kind/question-responses",
            post(question_responses_handler::<S, M>),
        )
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub struct SubmitSurveyRequest {
    pub answers: Vec<SubmittedAnswer>,
}

#[derive(Debug, Deserialize)]
pub struct QuestionResponsesRequest {
    pub question_id: QuestionId,
    pub options: Vec<String>,
}

fn parse_kind(raw: &str) -> Result<SurveyKind, Response> {
    raw.parse::<SurveyKind>().map_err(|err| {
        let payload = json!({ "error": err.to_string() });
        (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response()
    })
}

fn error_response(error: SurveyServiceError) -> Response {
    let status = match &error {
        SurveyServiceError::NotFound => StatusCode::NOT_FOUND,
        SurveyServiceError::AlreadyCompleted
        | SurveyServiceError::InvalidInput(_)
        | SurveyServiceError::DuplicateIdentity(_) => StatusCode::BAD_REQUEST,
        SurveyServiceError::Store(_)
        | SurveyServiceError::Mail(_)
        | SurveyServiceError::Export(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    let payload = json!({ "error": error.to_string() });
    (status, axum::Json(payload)).into_response()
}

pub(crate) async fn create_handler<S, M>(
    State(service): State<Arc<SurveyService<S, M>>>,
    Path(kind): Path<String>,
    axum::Json(input): axum::Json<NewRespondent>,
) -> Response
where
    S: SurveyStore + 'static,
    M: SurveyMailer + 'static,
{
    let kind = match parse_kind(&kind) {
        Ok(kind) => kind,
        Err(response) => return response,
    };
    match service.create_respondent(kind, input) {
        Ok(respondent) => (StatusCode::CREATED, axum::Json(respondent)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn list_handler<S, M>(
    State(service): State<Arc<SurveyService<S, M>>>,
    Path(kind): Path<String>,
    Query(request): Query<PageRequest>,
) -> Response
where
    S: SurveyStore + 'static,
    M: SurveyMailer + 'static,
{
    let kind = match parse_kind(&kind) {
        Ok(kind) => kind,
        Err(response) => return response,
    };
    match service.list_respondents(kind, request) {
        Ok(page) => (StatusCode::OK, axum::Json(page)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn detail_handler<S, M>(
    State(service): State<Arc<SurveyService<S, M>>>,
    Path((kind, id)): Path<(String, String)>,
) -> Response
where
    S: SurveyStore + 'static,
    M: SurveyMailer + 'static,
{
    if let Err(response) = parse_kind(&kind) {
        return response;
    }
    match service.get_respondent(&RespondentId(id)) {
        Ok(respondent) => (StatusCode::OK, axum::Json(respondent)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn update_handler<S, M>(
    State(service): State<Arc<SurveyService<S, M>>>,
    Path((kind, id)): Path<(String, String)>,
    axum::Json(update): axum::Json<RespondentUpdate>,
) -> Response
where
    S: SurveyStore + 'static,
    M: SurveyMailer + 'static,
{
    if let Err(response) = parse_kind(&kind) {
        return response;
    }
    match service.update_respondent(&RespondentId(id), update) {
        Ok(respondent) => (StatusCode::OK, axum::Json(respondent)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn delete_handler<S, M>(
    State(service): State<Arc<SurveyService<S, M>>>,
    Path((kind, id)): Path<(String, String)>,
) -> Response
where
    S: SurveyStore + 'static,
    M: SurveyMailer + 'static,
{
    if let Err(response) = parse_kind(&kind) {
        return response;
    }
    match service.delete_respondent(&RespondentId(id)) {
        Ok(()) => (
            StatusCode::OK,
            axum::Json(json!({ "message": "respondent deleted" })),
        )
            .into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn send_survey_handler<S, M>(
    State(service): State<Arc<SurveyService<S, M>>>,
    Path((kind, id)): Path<(String, String)>,
) -> Response
where
    S: SurveyStore + 'static,
    M: SurveyMailer + 'static,
{
    if let Err(response) = parse_kind(&kind) {
        return response;
    }
    match service.send_invitation(&RespondentId(id)) {
        Ok(respondent) => (StatusCode::OK, axum::Json(respondent)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn submit_survey_handler<S, M>(
    State(service): State<Arc<SurveyService<S, M>>>,
    Path((kind, id)): Path<(String, String)>,
    axum::Json(request): axum::Json<SubmitSurveyRequest>,
) -> Response
where
    S: SurveyStore + 'static,
    M: SurveyMailer + 'static,
{
    if let Err(response) = parse_kind(&kind) {
        return response;
    }
    match service.submit_survey(&RespondentId(id), request.answers) {
        Ok(outcome) => (StatusCode::OK, axum::Json(outcome)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn answers_handler<S, M>(
    State(service): State<Arc<SurveyService<S, M>>>,
    Path((kind, id)): Path<(String, String)>,
) -> Response
where
    S: SurveyStore + 'static,
    M: SurveyMailer + 'static,
{
    if let Err(response) = parse_kind(&kind) {
        return response;
    }
    match service.answers_for_respondent(&RespondentId(id)) {
        Ok(answers) => (StatusCode::OK, axum::Json(answers)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn catalog_handler(Path(kind): Path<String>) -> Response {
    let kind = match parse_kind(&kind) {
        Ok(kind) => kind,
        Err(response) => return response,
    };
    (StatusCode::OK, axum::Json(Catalog::for_kind(kind))).into_response()
}

pub(crate) async fn question_responses_handler<S, M>(
    State(service): State<Arc<SurveyService<S, M>>>,
    Path(kind): Path<String>,
    axum::Json(request): axum::Json<QuestionResponsesRequest>,
) -> Response
where
    S: SurveyStore + 'static,
    M: SurveyMailer + 'static,
{
    let kind = match parse_kind(&kind) {
        Ok(kind) => kind,
        Err(response) => return response,
    };
    match service.question_responses(kind, request.question_id, &request.options) {
        Ok(breakdown) => (StatusCode::OK, axum::Json(breakdown)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn export_handler<S, M>(
    State(service): State<Arc<SurveyService<S, M>>>,
    Path(kind): Path<String>,
) -> Response
where
    S: SurveyStore + 'static,
    M: SurveyMailer + 'static,
{
    let kind = match parse_kind(&kind) {
        Ok(kind) => kind,
        Err(response) => return response,
    };
    match service.export_csv(kind) {
        Ok(csv) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, "text/csv".to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}s-export.csv\"", kind.label()),
                ),
            ],
            csv,
        )
            .into_response(),
        Err(error) => error_response(error),
    }
}
