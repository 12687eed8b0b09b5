//! Skill handlers.

use crate::error::AppError;
use crate::extractors::{JsonBody, ListParams};
use crate::handlers::parse_id;
use crate::models::Skill;
use crate::response::{accepted, created, QueryResult};
use crate::service::{FieldErrors, SkillService};
use crate::state::AppState;
use crate::view_models::{SkillDetailViewModel, SkillEditViewModel, SkillListViewModel};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Response,
    Json,
};

fn location(id: i64) -> String {
    format!("/api/skills/{}", id)
}

/// Query skills.
#[utoipa::path(
    get,
    path = "/api/skills",
    tag = "skills",
    params(
        ("$offset" = Option<u32>, Query, description = "Number of results to skip"),
        ("$limit" = Option<u32>, Query, description = "Maximum number of results"),
        ("$sort" = Option<String>, Query, description = "`name`, prefixed with `-` for descending"),
        ("search" = Option<String>, Query, description = "Substring of the skill name"),
    ),
    responses((status = 200, description = "Matching skills", body = QueryResult<SkillListViewModel>))
)]
pub async fn list(
    State(state): State<AppState>,
    params: ListParams,
) -> Result<Json<QueryResult<SkillListViewModel>>, AppError> {
    let (rows, count) = SkillService::list(&state.pool, &params.page).await?;
    Ok(Json(QueryResult {
        results: rows.iter().map(SkillListViewModel::from).collect(),
        count,
    }))
}

/// Get a skill by id.
#[utoipa::path(
    get,
    path = "/api/skills/{id}",
    tag = "skills",
    params(("id" = i64, Path, description = "Skill id")),
    responses(
        (status = 200, description = "The skill", body = SkillListViewModel),
        (status = 404, description = "No such skill"),
    )
)]
pub async fn read(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<Json<SkillListViewModel>, AppError> {
    let id = parse_id(&id_str)?;
    let skill = SkillService::find(&state.pool, id).await?.ok_or(AppError::NotFound)?;
    Ok(Json((&skill).into()))
}

/// Get a skill with the contacts holding it.
#[utoipa::path(
    get,
    path = "/api/skills/{id}/details",
    tag = "skills",
    params(("id" = i64, Path, description = "Skill id")),
    responses(
        (status = 200, description = "The skill with contacts", body = SkillDetailViewModel),
        (status = 404, description = "No such skill"),
    )
)]
pub async fn details(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<Json<SkillDetailViewModel>, AppError> {
    let id = parse_id(&id_str)?;
    let skill = SkillService::find(&state.pool, id).await?.ok_or(AppError::NotFound)?;
    let contacts = SkillService::contacts(&state.pool, id).await?;
    Ok(Json(SkillDetailViewModel::new(&skill, &contacts)))
}

/// Register a new skill. Names are unique.
#[utoipa::path(
    post,
    path = "/api/skills",
    tag = "skills",
    request_body = SkillEditViewModel,
    responses(
        (status = 201, description = "Created skill", body = SkillListViewModel),
        (status = 400, description = "Field errors keyed by field name"),
    )
)]
pub async fn create(
    State(state): State<AppState>,
    JsonBody(vm): JsonBody<SkillEditViewModel>,
) -> Result<Response, AppError> {
    let mut errors = FieldErrors::default();
    vm.validate(&mut errors);
    SkillService::check_name(&state.pool, &vm, None, &mut errors).await?;
    errors.into_result()?;

    let mut skill = Skill::default();
    vm.apply_to(&mut skill);
    let skill = SkillService::create(&state.pool, &skill).await?;
    Ok(created(location(skill.id), SkillListViewModel::from(&skill)))
}

/// Rename a skill.
#[utoipa::path(
    put,
    path = "/api/skills/{id}",
    tag = "skills",
    params(("id" = i64, Path, description = "Skill id")),
    request_body = SkillEditViewModel,
    responses(
        (status = 202, description = "Updated skill", body = SkillListViewModel),
        (status = 400, description = "Field errors keyed by field name"),
        (status = 404, description = "No such skill"),
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    JsonBody(vm): JsonBody<SkillEditViewModel>,
) -> Result<Response, AppError> {
    let id = parse_id(&id_str)?;
    let mut skill = SkillService::find(&state.pool, id).await?.ok_or(AppError::NotFound)?;

    let mut errors = FieldErrors::default();
    vm.validate(&mut errors);
    SkillService::check_name(&state.pool, &vm, Some(id), &mut errors).await?;
    errors.into_result()?;

    vm.apply_to(&mut skill);
    if !SkillService::update(&state.pool, &skill).await? {
        return Err(AppError::NotFound);
    }
    Ok(accepted(location(id), SkillListViewModel::from(&skill)))
}

/// Remove a skill and its contact associations.
#[utoipa::path(
    delete,
    path = "/api/skills/{id}",
    tag = "skills",
    params(("id" = i64, Path, description = "Skill id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "No such skill"),
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<StatusCode, AppError> {
    let id = parse_id(&id_str)?;
    if !SkillService::delete(&state.pool, id).await? {
        return Err(AppError::NotFound);
    }
    Ok(StatusCode::NO_CONTENT)
}
