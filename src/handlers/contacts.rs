//! Contact handlers, including the contact/skill association endpoints.

use crate::error::AppError;
use crate::extractors::{JsonBody, ListParams};
use crate::handlers::parse_id;
use crate::models::Contact;
use crate::response::{accepted, created, created_empty, QueryResult};
use crate::service::{ContactFilters, ContactService, FieldErrors, SkillService};
use crate::state::AppState;
use crate::view_models::{
    ContactDetailViewModel, ContactEditViewModel, ContactListViewModel, SkillListViewModel,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Response,
    Json,
};

pub const COMPANY_ID_FILTER: &str = "companyId";
pub const SKILL_ID_FILTER: &str = "skillId";

fn location(id: i64) -> String {
    format!("/api/contacts/{}", id)
}

async fn load(state: &AppState, id: i64) -> Result<ContactListViewModel, AppError> {
    let row = ContactService::find(&state.pool, id).await?.ok_or(AppError::NotFound)?;
    Ok((&row).into())
}

/// Query contacts.
#[utoipa::path(
    get,
    path = "/api/contacts",
    tag = "contacts",
    params(
        ("$offset" = Option<u32>, Query, description = "Number of results to skip"),
        ("$limit" = Option<u32>, Query, description = "Maximum number of results"),
        ("$sort" = Option<String>, Query, description = "`firstName`, `lastName` or `company`, prefixed with `-` for descending"),
        ("search" = Option<String>, Query, description = "Substring of first name, last name or company name"),
        ("companyId" = Option<i64>, Query, description = "Only contacts of this company"),
        ("skillId" = Option<i64>, Query, description = "Only contacts holding this skill"),
    ),
    responses((status = 200, description = "Matching contacts", body = QueryResult<ContactListViewModel>))
)]
pub async fn list(
    State(state): State<AppState>,
    params: ListParams,
) -> Result<Json<QueryResult<ContactListViewModel>>, AppError> {
    let filters = ContactFilters {
        company_id: params.int(COMPANY_ID_FILTER),
        skill_id: params.int(SKILL_ID_FILTER),
    };
    let (rows, count) = ContactService::list(&state.pool, &params.page, filters).await?;
    Ok(Json(QueryResult {
        results: rows.iter().map(ContactListViewModel::from).collect(),
        count,
    }))
}

/// Get a contact by id, with its company.
#[utoipa::path(
    get,
    path = "/api/contacts/{id}",
    tag = "contacts",
    params(("id" = i64, Path, description = "Contact id")),
    responses(
        (status = 200, description = "The contact", body = ContactListViewModel),
        (status = 404, description = "No such contact"),
    )
)]
pub async fn read(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<Json<ContactListViewModel>, AppError> {
    let id = parse_id(&id_str)?;
    Ok(Json(load(&state, id).await?))
}

/// Get a contact with its company and skills.
#[utoipa::path(
    get,
    path = "/api/contacts/{id}/details",
    tag = "contacts",
    params(("id" = i64, Path, description = "Contact id")),
    responses(
        (status = 200, description = "The contact with skills", body = ContactDetailViewModel),
        (status = 404, description = "No such contact"),
    )
)]
pub async fn details(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<Json<ContactDetailViewModel>, AppError> {
    let id = parse_id(&id_str)?;
    let row = ContactService::find(&state.pool, id).await?.ok_or(AppError::NotFound)?;
    let skills = ContactService::skills(&state.pool, id).await?;
    Ok(Json(ContactDetailViewModel::new(&row, &skills)))
}

/// Register a new contact.
#[utoipa::path(
    post,
    path = "/api/contacts",
    tag = "contacts",
    request_body = ContactEditViewModel,
    responses(
        (status = 201, description = "Created contact", body = ContactListViewModel),
        (status = 400, description = "Field errors keyed by field name"),
    )
)]
pub async fn create(
    State(state): State<AppState>,
    JsonBody(vm): JsonBody<ContactEditViewModel>,
) -> Result<Response, AppError> {
    let mut errors = FieldErrors::default();
    vm.validate(&mut errors);
    ContactService::check_company(&state.pool, &vm, None, &mut errors).await?;
    errors.into_result()?;

    let mut contact = Contact::default();
    vm.apply_to(&mut contact);
    let id = ContactService::create(&state.pool, &contact).await?;
    Ok(created(location(id), load(&state, id).await?))
}

/// Update an existing contact; every field is overwritten.
#[utoipa::path(
    put,
    path = "/api/contacts/{id}",
    tag = "contacts",
    params(("id" = i64, Path, description = "Contact id")),
    request_body = ContactEditViewModel,
    responses(
        (status = 202, description = "Updated contact", body = ContactListViewModel),
        (status = 400, description = "Field errors keyed by field name"),
        (status = 404, description = "No such contact"),
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    JsonBody(vm): JsonBody<ContactEditViewModel>,
) -> Result<Response, AppError> {
    let id = parse_id(&id_str)?;
    let row = ContactService::find(&state.pool, id).await?.ok_or(AppError::NotFound)?;
    let mut contact = row.contact;

    let mut errors = FieldErrors::default();
    vm.validate(&mut errors);
    ContactService::check_company(&state.pool, &vm, contact.company_id, &mut errors).await?;
    errors.into_result()?;

    vm.apply_to(&mut contact);
    if !ContactService::update(&state.pool, &contact).await? {
        return Err(AppError::NotFound);
    }
    Ok(accepted(location(id), load(&state, id).await?))
}

/// Remove a contact and its skill associations.
#[utoipa::path(
    delete,
    path = "/api/contacts/{id}",
    tag = "contacts",
    params(("id" = i64, Path, description = "Contact id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "No such contact"),
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<StatusCode, AppError> {
    let id = parse_id(&id_str)?;
    if !ContactService::delete(&state.pool, id).await? {
        return Err(AppError::NotFound);
    }
    Ok(StatusCode::NO_CONTENT)
}

/// Skills of a contact.
#[utoipa::path(
    get,
    path = "/api/contacts/{contactId}/skills",
    tag = "contacts",
    params(("contactId" = i64, Path, description = "Contact id")),
    responses(
        (status = 200, description = "Contact skills", body = Vec<SkillListViewModel>),
        (status = 404, description = "No such contact"),
    )
)]
pub async fn skills(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<Json<Vec<SkillListViewModel>>, AppError> {
    let id = parse_id(&id_str)?;
    if !ContactService::exists(&state.pool, id).await? {
        return Err(AppError::NotFound);
    }
    let skills = ContactService::skills(&state.pool, id).await?;
    Ok(Json(skills.iter().map(SkillListViewModel::from).collect()))
}

/// Add a skill to a contact. Adding an existing association changes nothing.
#[utoipa::path(
    post,
    path = "/api/contacts/{contactId}/skills/{skillId}",
    tag = "contacts",
    params(
        ("contactId" = i64, Path, description = "Contact id"),
        ("skillId" = i64, Path, description = "Skill id"),
    ),
    responses(
        (status = 201, description = "Associated"),
        (status = 404, description = "No such contact or skill"),
    )
)]
pub async fn add_skill(
    State(state): State<AppState>,
    Path((contact_str, skill_str)): Path<(String, String)>,
) -> Result<Response, AppError> {
    let contact_id = parse_id(&contact_str)?;
    let skill_id = parse_id(&skill_str)?;
    if !ContactService::exists(&state.pool, contact_id).await?
        || SkillService::find(&state.pool, skill_id).await?.is_none()
    {
        return Err(AppError::NotFound);
    }
    ContactService::add_skill(&state.pool, contact_id, skill_id).await?;
    Ok(created_empty(format!("{}/skills", location(contact_id))))
}

/// Remove a skill from a contact.
#[utoipa::path(
    delete,
    path = "/api/contacts/{contactId}/skills/{skillId}",
    tag = "contacts",
    params(
        ("contactId" = i64, Path, description = "Contact id"),
        ("skillId" = i64, Path, description = "Skill id"),
    ),
    responses(
        (status = 204, description = "Removed"),
        (status = 404, description = "No such contact, skill or association"),
    )
)]
pub async fn remove_skill(
    State(state): State<AppState>,
    Path((contact_str, skill_str)): Path<(String, String)>,
) -> Result<StatusCode, AppError> {
    let contact_id = parse_id(&contact_str)?;
    let skill_id = parse_id(&skill_str)?;
    if !ContactService::remove_skill(&state.pool, contact_id, skill_id).await? {
        return Err(AppError::NotFound);
    }
    Ok(StatusCode::NO_CONTENT)
}
