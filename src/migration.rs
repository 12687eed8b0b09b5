//! Schema DDL for the four tables. Idempotent; applied at startup.
//! Order follows foreign-key dependencies: companies, contacts, skills, contact_skills.

use crate::error::AppError;
use sqlx::SqlitePool;

const DDL: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS companies (
        id INTEGER PRIMARY KEY AUTOINCREMENT NOT NULL,
        name TEXT NOT NULL,
        website TEXT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS contacts (
        id INTEGER PRIMARY KEY AUTOINCREMENT NOT NULL,
        first_name TEXT NOT NULL,
        last_name TEXT NOT NULL,
        phone TEXT NULL,
        email TEXT NOT NULL,
        company_id INTEGER NULL REFERENCES companies(id) ON DELETE SET NULL
    )
    "#,
    "CREATE INDEX IF NOT EXISTS idx_contacts_company_id ON contacts(company_id)",
    r#"
    CREATE TABLE IF NOT EXISTS skills (
        id INTEGER PRIMARY KEY AUTOINCREMENT NOT NULL,
        name TEXT NOT NULL
    )
    "#,
    // Backs the duplicate-name check against concurrent creates.
    "CREATE UNIQUE INDEX IF NOT EXISTS idx_skills_name ON skills(name)",
    r#"
    CREATE TABLE IF NOT EXISTS contact_skills (
        contact_id INTEGER NOT NULL REFERENCES contacts(id) ON DELETE CASCADE,
        skill_id INTEGER NOT NULL REFERENCES skills(id) ON DELETE CASCADE,
        PRIMARY KEY (contact_id, skill_id)
    )
    "#,
    "CREATE INDEX IF NOT EXISTS idx_contact_skills_skill_id ON contact_skills(skill_id)",
];

/// Create tables and indexes that do not exist yet.
pub async fn apply_migrations(pool: &SqlitePool) -> Result<(), AppError> {
    for ddl in DDL {
        sqlx::query(ddl).execute(pool).await?;
    }
    tracing::info!(statements = DDL.len(), "schema applied");
    Ok(())
}
