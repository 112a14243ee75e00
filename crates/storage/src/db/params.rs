use sqlx::encode::{Encode, IsNull};
use sqlx::error::BoxDynError;
use sqlx::sqlite::{Sqlite, SqliteArgumentValue, SqliteTypeInfo};
use sqlx::Type;

/// A positional statement parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlParam {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
}

impl<'q> Encode<'q, Sqlite> for SqlParam {
    fn encode_by_ref(
        &self,
        buf: &mut Vec<SqliteArgumentValue<'q>>,
    ) -> Result<IsNull, BoxDynError> {
        match self {
            SqlParam::Null => Ok(IsNull::Yes),
            SqlParam::Integer(value) => <i64 as Encode<'q, Sqlite>>::encode_by_ref(value, buf),
            SqlParam::Real(value) => <f64 as Encode<'q, Sqlite>>::encode_by_ref(value, buf),
            SqlParam::Text(value) => <String as Encode<'q, Sqlite>>::encode_by_ref(value, buf),
        }
    }

    fn produces(&self) -> Option<SqliteTypeInfo> {
        match self {
            SqlParam::Null => None,
            SqlParam::Integer(_) => Some(<i64 as Type<Sqlite>>::type_info()),
            SqlParam::Real(_) => Some(<f64 as Type<Sqlite>>::type_info()),
            SqlParam::Text(_) => Some(<String as Type<Sqlite>>::type_info()),
        }
    }
}

impl Type<Sqlite> for SqlParam {
    fn type_info() -> SqliteTypeInfo {
        <String as Type<Sqlite>>::type_info()
    }

    fn compatible(_ty: &SqliteTypeInfo) -> bool {
        true
    }
}

impl From<i64> for SqlParam {
    fn from(value: i64) -> Self {
        SqlParam::Integer(value)
    }
}

impl From<f64> for SqlParam {
    fn from(value: f64) -> Self {
        SqlParam::Real(value)
    }
}

impl From<&str> for SqlParam {
    fn from(value: &str) -> Self {
        SqlParam::Text(value.to_string())
    }
}

impl From<String> for SqlParam {
    fn from(value: String) -> Self {
        SqlParam::Text(value)
    }
}

impl<T> From<Option<T>> for SqlParam
where
    T: Into<SqlParam>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(SqlParam::Null, Into::into)
    }
}
