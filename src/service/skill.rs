//! Skill persistence and name uniqueness.

use crate::error::{is_unique_violation, AppError};
use crate::models::{ContactWithCompany, Skill};
use crate::service::{CrudService, FieldErrors};
use crate::sql::{ListSpec, Page, SortField};
use crate::view_models::SkillEditViewModel;
use sqlx::SqlitePool;

pub const DUPLICATE_NAME: &str = "A skill with the same name already exists.";

pub const SKILL_LIST: ListSpec = ListSpec {
    from: "skills s",
    columns: "s.id, s.name",
    id: "s.id",
    search: &["s.name"],
    sort_fields: &[SortField {
        name: "name",
        expr: "s.name",
    }],
};

pub struct SkillService;

impl SkillService {
    pub async fn list(pool: &SqlitePool, page: &Page) -> Result<(Vec<Skill>, i64), AppError> {
        CrudService::list(pool, &SKILL_LIST, page, &[]).await
    }

    pub async fn find(pool: &SqlitePool, id: i64) -> Result<Option<Skill>, AppError> {
        let row = sqlx::query_as::<_, Skill>("SELECT id, name FROM skills WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row)
    }

    /// Record a `Name` error when another skill already uses the name. `except` is the skill being updated.
    pub async fn check_name(
        pool: &SqlitePool,
        vm: &SkillEditViewModel,
        except: Option<i64>,
        errors: &mut FieldErrors,
    ) -> Result<(), AppError> {
        let Some(name) = vm.name.as_deref() else {
            return Ok(());
        };
        let existing: Option<i64> = sqlx::query_scalar("SELECT id FROM skills WHERE name = ?")
            .bind(name)
            .fetch_optional(pool)
            .await?;
        if matches!(existing, Some(id) if Some(id) != except) {
            errors.add(SkillEditViewModel::NAME.field, DUPLICATE_NAME);
        }
        Ok(())
    }

    pub async fn create(pool: &SqlitePool, skill: &Skill) -> Result<Skill, AppError> {
        let row = sqlx::query_as::<_, Skill>("INSERT INTO skills (name) VALUES (?) RETURNING id, name")
            .bind(&skill.name)
            .fetch_one(pool)
            .await
            .map_err(name_write_error)?;
        tracing::info!(id = row.id, "skill created");
        Ok(row)
    }

    /// Rename the stored row. False when the skill no longer exists.
    pub async fn update(pool: &SqlitePool, skill: &Skill) -> Result<bool, AppError> {
        let result = sqlx::query("UPDATE skills SET name = ? WHERE id = ?")
            .bind(&skill.name)
            .bind(skill.id)
            .execute(pool)
            .await
            .map_err(name_write_error)?;
        let updated = result.rows_affected() > 0;
        if updated {
            tracing::info!(id = skill.id, "skill updated");
        }
        Ok(updated)
    }

    /// Delete by id; contact associations go with it. False when no row matched.
    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM skills WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        let deleted = result.rows_affected() > 0;
        if deleted {
            tracing::info!(id, "skill deleted");
        }
        Ok(deleted)
    }

    /// Contacts holding the skill, with their companies, by last then first name.
    pub async fn contacts(pool: &SqlitePool, skill_id: i64) -> Result<Vec<ContactWithCompany>, AppError> {
        let rows = sqlx::query_as::<_, ContactWithCompany>(
            "SELECT c.id, c.first_name, c.last_name, c.phone, c.email, c.company_id, \
             co.name AS company_name, co.website AS company_website \
             FROM contacts c \
             JOIN contact_skills cs ON cs.contact_id = c.id \
             LEFT JOIN companies co ON co.id = c.company_id \
             WHERE cs.skill_id = ? ORDER BY c.last_name, c.first_name, c.id",
        )
        .bind(skill_id)
        .fetch_all(pool)
        .await?;
        Ok(rows)
    }
}

/// A concurrent insert of the same name trips the unique index.
fn name_write_error(e: sqlx::Error) -> AppError {
    if is_unique_violation(&e) {
        AppError::field(SkillEditViewModel::NAME.field, DUPLICATE_NAME)
    } else {
        AppError::Db(e)
    }
}
