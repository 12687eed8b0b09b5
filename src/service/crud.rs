//! Shared list execution: count and page queries from one `ListSpec`.

use crate::error::AppError;
use crate::sql::{select_count, select_page, Filter, ListSpec, Page, QueryBuf};
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, SqlitePool};

pub struct CrudService;

impl CrudService {
    /// Run the list protocol for `spec`: search, filters, total count, sort, offset, limit.
    /// The returned count ignores paging.
    pub async fn list<T>(
        pool: &SqlitePool,
        spec: &ListSpec,
        page: &Page,
        filters: &[Filter],
    ) -> Result<(Vec<T>, i64), AppError>
    where
        T: for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
    {
        let count = Self::query_count(pool, &select_count(spec, page, filters)).await?;
        let rows = Self::query_many(pool, &select_page(spec, page, filters)).await?;
        Ok((rows, count))
    }

    async fn query_count(pool: &SqlitePool, q: &QueryBuf) -> Result<i64, AppError> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let mut query = sqlx::query_scalar::<_, i64>(&q.sql);
        for p in &q.params {
            query = query.bind(p.clone());
        }
        Ok(query.fetch_one(pool).await?)
    }

    async fn query_many<T>(pool: &SqlitePool, q: &QueryBuf) -> Result<Vec<T>, AppError>
    where
        T: for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
    {
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let mut query = sqlx::query_as::<_, T>(&q.sql);
        for p in &q.params {
            query = query.bind(p.clone());
        }
        Ok(query.fetch_all(pool).await?)
    }
}
