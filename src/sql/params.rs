//! Values that the list builder binds into SQLite statements.

use sqlx::encode::{Encode, IsNull};
use sqlx::sqlite::{Sqlite, SqliteTypeInfo};
use sqlx::Database;

/// A value that can be bound to a SQLite query. Builders collect these in placeholder order.
#[derive(Clone, Debug, PartialEq)]
pub enum BindValue {
    Int(i64),
    Text(String),
}

impl From<i64> for BindValue {
    fn from(v: i64) -> Self {
        BindValue::Int(v)
    }
}

impl<'q> Encode<'q, Sqlite> for BindValue {
    fn encode_by_ref(
        &self,
        buf: &mut <Sqlite as Database>::ArgumentBuffer<'q>,
    ) -> Result<IsNull, Box<dyn std::error::Error + Send + Sync>> {
        match self {
            BindValue::Int(n) => <i64 as Encode<Sqlite>>::encode_by_ref(n, buf),
            BindValue::Text(s) => <String as Encode<Sqlite>>::encode_by_ref(s, buf),
        }
    }
}

impl sqlx::Type<Sqlite> for BindValue {
    fn type_info() -> SqliteTypeInfo {
        <String as sqlx::Type<Sqlite>>::type_info()
    }

    fn compatible(_ty: &SqliteTypeInfo) -> bool {
        true
    }
}
