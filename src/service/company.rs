//! Company persistence and the company-skill aggregate.

use crate::error::AppError;
use crate::models::{Company, Skill};
use crate::service::CrudService;
use crate::sql::{Filter, ListSpec, Page, SortField};
use sqlx::SqlitePool;

pub const COMPANY_LIST: ListSpec = ListSpec {
    from: "companies co",
    columns: "co.id, co.name, co.website",
    id: "co.id",
    search: &["co.name"],
    sort_fields: &[SortField {
        name: "name",
        expr: "co.name",
    }],
};

/// Companies with at least one contact holding the skill.
const HAS_SKILL: &str = "EXISTS (SELECT 1 FROM contacts ct JOIN contact_skills cs ON cs.contact_id = ct.id \
     WHERE ct.company_id = co.id AND cs.skill_id = ?)";

pub struct CompanyService;

impl CompanyService {
    pub async fn list(
        pool: &SqlitePool,
        page: &Page,
        skill_id: Option<i64>,
    ) -> Result<(Vec<Company>, i64), AppError> {
        let filters: Vec<Filter> = skill_id.map(|id| Filter::new(HAS_SKILL, id)).into_iter().collect();
        CrudService::list(pool, &COMPANY_LIST, page, &filters).await
    }

    pub async fn find(pool: &SqlitePool, id: i64) -> Result<Option<Company>, AppError> {
        let row = sqlx::query_as::<_, Company>("SELECT id, name, website FROM companies WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row)
    }

    pub async fn exists(pool: &SqlitePool, id: i64) -> Result<bool, AppError> {
        let found: Option<i64> = sqlx::query_scalar("SELECT id FROM companies WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(found.is_some())
    }

    /// Insert and return the stored row with its new id.
    pub async fn create(pool: &SqlitePool, company: &Company) -> Result<Company, AppError> {
        let row = sqlx::query_as::<_, Company>(
            "INSERT INTO companies (name, website) VALUES (?, ?) RETURNING id, name, website",
        )
        .bind(&company.name)
        .bind(&company.website)
        .fetch_one(pool)
        .await?;
        tracing::info!(id = row.id, "company created");
        Ok(row)
    }

    /// Overwrite the stored row. False when the company no longer exists.
    pub async fn update(pool: &SqlitePool, company: &Company) -> Result<bool, AppError> {
        let result = sqlx::query("UPDATE companies SET name = ?, website = ? WHERE id = ?")
            .bind(&company.name)
            .bind(&company.website)
            .bind(company.id)
            .execute(pool)
            .await?;
        let updated = result.rows_affected() > 0;
        if updated {
            tracing::info!(id = company.id, "company updated");
        }
        Ok(updated)
    }

    /// Delete by id; contacts keep existing with a null company. False when no row matched.
    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM companies WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        let deleted = result.rows_affected() > 0;
        if deleted {
            tracing::info!(id, "company deleted");
        }
        Ok(deleted)
    }

    /// Distinct skills held by any contact of the company, by name.
    pub async fn skills(pool: &SqlitePool, company_id: i64) -> Result<Vec<Skill>, AppError> {
        let rows = sqlx::query_as::<_, Skill>(
            "SELECT DISTINCT s.id, s.name FROM skills s \
             JOIN contact_skills cs ON cs.skill_id = s.id \
             JOIN contacts c ON c.id = cs.contact_id \
             WHERE c.company_id = ? ORDER BY s.name, s.id",
        )
        .bind(company_id)
        .fetch_all(pool)
        .await?;
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DatabaseConfig;
    use crate::migration::apply_migrations;
    use crate::store::connect;

    async fn pool() -> SqlitePool {
        let pool = connect(&DatabaseConfig::in_memory()).await.unwrap();
        apply_migrations(&pool).await.unwrap();
        pool
    }

    #[tokio::test]
    async fn update_reports_whether_the_row_exists() {
        let pool = pool().await;
        let mut acme = CompanyService::create(
            &pool,
            &Company {
                name: "Acme".into(),
                ..Default::default()
            },
        )
        .await
        .unwrap();

        acme.website = Some("https://acme.test".into());
        assert!(CompanyService::update(&pool, &acme).await.unwrap());
        assert_eq!(CompanyService::find(&pool, acme.id).await.unwrap(), Some(acme.clone()));

        assert!(CompanyService::delete(&pool, acme.id).await.unwrap());
        assert!(!CompanyService::update(&pool, &acme).await.unwrap());
    }
}
