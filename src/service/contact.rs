//! Contact persistence and the contact-skill association.

use crate::error::{is_foreign_key_violation, AppError};
use crate::models::{Contact, ContactWithCompany, Skill};
use crate::service::{CompanyService, CrudService, FieldErrors};
use crate::sql::{Filter, ListSpec, Page, SortField};
use crate::view_models::ContactEditViewModel;
use sqlx::SqlitePool;

pub const COMPANY_NOT_FOUND: &str = "Company not found.";

const COLUMNS: &str = "c.id, c.first_name, c.last_name, c.phone, c.email, c.company_id, \
     co.name AS company_name, co.website AS company_website";
const FROM: &str = "contacts c LEFT JOIN companies co ON co.id = c.company_id";

pub const CONTACT_LIST: ListSpec = ListSpec {
    from: FROM,
    columns: COLUMNS,
    id: "c.id",
    search: &["c.first_name", "c.last_name", "co.name"],
    sort_fields: &[
        SortField {
            name: "firstName",
            expr: "c.first_name",
        },
        SortField {
            name: "lastName",
            expr: "c.last_name",
        },
        SortField {
            name: "company",
            expr: "co.name",
        },
    ],
};

const IN_COMPANY: &str = "c.company_id = ?";
const HAS_SKILL: &str = "EXISTS (SELECT 1 FROM contact_skills cs WHERE cs.contact_id = c.id AND cs.skill_id = ?)";

#[derive(Clone, Copy, Debug, Default)]
pub struct ContactFilters {
    pub company_id: Option<i64>,
    pub skill_id: Option<i64>,
}

pub struct ContactService;

impl ContactService {
    pub async fn list(
        pool: &SqlitePool,
        page: &Page,
        filters: ContactFilters,
    ) -> Result<(Vec<ContactWithCompany>, i64), AppError> {
        let mut f = Vec::new();
        if let Some(id) = filters.company_id {
            f.push(Filter::new(IN_COMPANY, id));
        }
        if let Some(id) = filters.skill_id {
            f.push(Filter::new(HAS_SKILL, id));
        }
        CrudService::list(pool, &CONTACT_LIST, page, &f).await
    }

    /// Contact with its company joined in.
    pub async fn find(pool: &SqlitePool, id: i64) -> Result<Option<ContactWithCompany>, AppError> {
        let sql = format!("SELECT {} FROM {} WHERE c.id = ?", COLUMNS, FROM);
        let row = sqlx::query_as::<_, ContactWithCompany>(&sql)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row)
    }

    pub async fn exists(pool: &SqlitePool, id: i64) -> Result<bool, AppError> {
        let found: Option<i64> = sqlx::query_scalar("SELECT id FROM contacts WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(found.is_some())
    }

    /// Record a `CompanyId` error when the edit names a company that does not exist.
    /// Skipped when the reference equals `current`, the value already stored.
    pub async fn check_company(
        pool: &SqlitePool,
        vm: &ContactEditViewModel,
        current: Option<i64>,
        errors: &mut FieldErrors,
    ) -> Result<(), AppError> {
        if let Some(company_id) = vm.company_id {
            if Some(company_id) != current && !CompanyService::exists(pool, company_id).await? {
                errors.add(ContactEditViewModel::COMPANY_ID, COMPANY_NOT_FOUND);
            }
        }
        Ok(())
    }

    /// Insert and return the new id.
    pub async fn create(pool: &SqlitePool, contact: &Contact) -> Result<i64, AppError> {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO contacts (first_name, last_name, phone, email, company_id) \
             VALUES (?, ?, ?, ?, ?) RETURNING id",
        )
        .bind(&contact.first_name)
        .bind(&contact.last_name)
        .bind(&contact.phone)
        .bind(&contact.email)
        .bind(contact.company_id)
        .fetch_one(pool)
        .await
        .map_err(company_write_error)?;
        tracing::info!(id, company_id = ?contact.company_id, "contact created");
        Ok(id)
    }

    /// Overwrite the stored row. False when the contact no longer exists.
    pub async fn update(pool: &SqlitePool, contact: &Contact) -> Result<bool, AppError> {
        let result = sqlx::query(
            "UPDATE contacts SET first_name = ?, last_name = ?, phone = ?, email = ?, company_id = ? \
             WHERE id = ?",
        )
        .bind(&contact.first_name)
        .bind(&contact.last_name)
        .bind(&contact.phone)
        .bind(&contact.email)
        .bind(contact.company_id)
        .bind(contact.id)
        .execute(pool)
        .await
        .map_err(company_write_error)?;
        let updated = result.rows_affected() > 0;
        if updated {
            tracing::info!(id = contact.id, "contact updated");
        }
        Ok(updated)
    }

    /// Delete by id; skill associations go with it. False when no row matched.
    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM contacts WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        let deleted = result.rows_affected() > 0;
        if deleted {
            tracing::info!(id, "contact deleted");
        }
        Ok(deleted)
    }

    /// Skills associated with the contact, by name.
    pub async fn skills(pool: &SqlitePool, contact_id: i64) -> Result<Vec<Skill>, AppError> {
        let rows = sqlx::query_as::<_, Skill>(
            "SELECT s.id, s.name FROM skills s \
             JOIN contact_skills cs ON cs.skill_id = s.id \
             WHERE cs.contact_id = ? ORDER BY s.name, s.id",
        )
        .bind(contact_id)
        .fetch_all(pool)
        .await?;
        Ok(rows)
    }

    /// Associate a skill. Returns false when the pair already existed.
    pub async fn add_skill(pool: &SqlitePool, contact_id: i64, skill_id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("INSERT OR IGNORE INTO contact_skills (contact_id, skill_id) VALUES (?, ?)")
            .bind(contact_id)
            .bind(skill_id)
            .execute(pool)
            .await?;
        let added = result.rows_affected() > 0;
        tracing::info!(contact_id, skill_id, added, "contact skill added");
        Ok(added)
    }

    /// Remove an association. Returns false when the pair did not exist.
    pub async fn remove_skill(pool: &SqlitePool, contact_id: i64, skill_id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM contact_skills WHERE contact_id = ? AND skill_id = ?")
            .bind(contact_id)
            .bind(skill_id)
            .execute(pool)
            .await?;
        let removed = result.rows_affected() > 0;
        if removed {
            tracing::info!(contact_id, skill_id, "contact skill removed");
        }
        Ok(removed)
    }
}

/// A company deleted after `check_company` surfaces as a foreign-key failure.
fn company_write_error(e: sqlx::Error) -> AppError {
    if is_foreign_key_violation(&e) {
        AppError::field(ContactEditViewModel::COMPANY_ID, COMPANY_NOT_FOUND)
    } else {
        AppError::Db(e)
    }
}
