//! Company handlers: list, read, details, create, update, delete, skills.

use crate::error::AppError;
use crate::extractors::{JsonBody, ListParams};
use crate::handlers::parse_id;
use crate::models::Company;
use crate::response::{accepted, created, QueryResult};
use crate::service::{CompanyService, FieldErrors};
use crate::state::AppState;
use crate::view_models::{
    CompanyDetailViewModel, CompanyEditViewModel, CompanyListViewModel, SkillListViewModel,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Response,
    Json,
};

pub const SKILL_ID_FILTER: &str = "skillId";

fn location(id: i64) -> String {
    format!("/api/companies/{}", id)
}

/// Query companies.
#[utoipa::path(
    get,
    path = "/api/companies",
    tag = "companies",
    params(
        ("$offset" = Option<u32>, Query, description = "Number of results to skip"),
        ("$limit" = Option<u32>, Query, description = "Maximum number of results"),
        ("$sort" = Option<String>, Query, description = "`name`, prefixed with `-` for descending"),
        ("search" = Option<String>, Query, description = "Substring of the company name"),
        ("skillId" = Option<i64>, Query, description = "Only companies with a contact holding this skill"),
    ),
    responses((status = 200, description = "Matching companies", body = QueryResult<CompanyListViewModel>))
)]
pub async fn list(
    State(state): State<AppState>,
    params: ListParams,
) -> Result<Json<QueryResult<CompanyListViewModel>>, AppError> {
    let (rows, count) = CompanyService::list(&state.pool, &params.page, params.int(SKILL_ID_FILTER)).await?;
    Ok(Json(QueryResult {
        results: rows.iter().map(CompanyListViewModel::from).collect(),
        count,
    }))
}

/// Get a company by id.
#[utoipa::path(
    get,
    path = "/api/companies/{id}",
    tag = "companies",
    params(("id" = i64, Path, description = "Company id")),
    responses(
        (status = 200, description = "The company", body = CompanyListViewModel),
        (status = 404, description = "No such company"),
    )
)]
pub async fn read(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<Json<CompanyListViewModel>, AppError> {
    let id = parse_id(&id_str)?;
    let company = CompanyService::find(&state.pool, id).await?.ok_or(AppError::NotFound)?;
    Ok(Json((&company).into()))
}

/// Get a company with the skills of its contacts.
#[utoipa::path(
    get,
    path = "/api/companies/{id}/details",
    tag = "companies",
    params(("id" = i64, Path, description = "Company id")),
    responses(
        (status = 200, description = "The company with skills", body = CompanyDetailViewModel),
        (status = 404, description = "No such company"),
    )
)]
pub async fn details(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<Json<CompanyDetailViewModel>, AppError> {
    let id = parse_id(&id_str)?;
    let company = CompanyService::find(&state.pool, id).await?.ok_or(AppError::NotFound)?;
    let skills = CompanyService::skills(&state.pool, id).await?;
    Ok(Json(CompanyDetailViewModel::new(&company, &skills)))
}

/// Register a new company.
#[utoipa::path(
    post,
    path = "/api/companies",
    tag = "companies",
    request_body = CompanyEditViewModel,
    responses(
        (status = 201, description = "Created company", body = CompanyListViewModel),
        (status = 400, description = "Field errors keyed by field name"),
    )
)]
pub async fn create(
    State(state): State<AppState>,
    JsonBody(vm): JsonBody<CompanyEditViewModel>,
) -> Result<Response, AppError> {
    let mut errors = FieldErrors::default();
    vm.validate(&mut errors);
    errors.into_result()?;

    let mut company = Company::default();
    vm.apply_to(&mut company);
    let company = CompanyService::create(&state.pool, &company).await?;
    Ok(created(location(company.id), CompanyListViewModel::from(&company)))
}

/// Update an existing company; every field is overwritten.
#[utoipa::path(
    put,
    path = "/api/companies/{id}",
    tag = "companies",
    params(("id" = i64, Path, description = "Company id")),
    request_body = CompanyEditViewModel,
    responses(
        (status = 202, description = "Updated company", body = CompanyListViewModel),
        (status = 400, description = "Field errors keyed by field name"),
        (status = 404, description = "No such company"),
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    JsonBody(vm): JsonBody<CompanyEditViewModel>,
) -> Result<Response, AppError> {
    let id = parse_id(&id_str)?;
    let mut company = CompanyService::find(&state.pool, id).await?.ok_or(AppError::NotFound)?;

    let mut errors = FieldErrors::default();
    vm.validate(&mut errors);
    errors.into_result()?;

    vm.apply_to(&mut company);
    if !CompanyService::update(&state.pool, &company).await? {
        return Err(AppError::NotFound);
    }
    Ok(accepted(location(company.id), CompanyListViewModel::from(&company)))
}

/// Remove a company. Its contacts stay, with no company.
#[utoipa::path(
    delete,
    path = "/api/companies/{id}",
    tag = "companies",
    params(("id" = i64, Path, description = "Company id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "No such company"),
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<StatusCode, AppError> {
    let id = parse_id(&id_str)?;
    if !CompanyService::delete(&state.pool, id).await? {
        return Err(AppError::NotFound);
    }
    Ok(StatusCode::NO_CONTENT)
}

/// Distinct skills held by the company's contacts.
#[utoipa::path(
    get,
    path = "/api/companies/{id}/skills",
    tag = "companies",
    params(("id" = i64, Path, description = "Company id")),
    responses(
        (status = 200, description = "Company skills", body = Vec<SkillListViewModel>),
        (status = 404, description = "No such company"),
    )
)]
pub async fn skills(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<Json<Vec<SkillListViewModel>>, AppError> {
    let id = parse_id(&id_str)?;
    if !CompanyService::exists(&state.pool, id).await? {
        return Err(AppError::NotFound);
    }
    let skills = CompanyService::skills(&state.pool, id).await?;
    Ok(Json(skills.iter().map(SkillListViewModel::from).collect()))
}
