/// Errors shared by the client layers.
///
/// The temporal values only ever raise [`QueryError::InvalidSqlDate`], the other
/// variants belong to query execution and row decoding. Library functions return
/// [`crate::Result`], so a `QueryError` is found again with `downcast_ref`:
/// ```rust
/// use sqltime_core::{CalendarCache, QueryError, SqlDate, TimeZone};
/// let cache = CalendarCache::new();
/// let error = SqlDate::parse("2024-13-01 00:00:00", &TimeZone::Utc, &cache).unwrap_err();
/// assert_eq!(
///     error.downcast_ref::<QueryError>(),
///     Some(&QueryError::InvalidSqlDate("2024-13-01 00:00:00".into()))
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    #[error("MySQL execution error: {message}, for query: {query}")]
    QueryExecution { message: String, query: String },
    #[error("MySQL result fetch error: {message}, for query: {query}")]
    ResultFetch { message: String, query: String },
    #[error("MySQL no field error: {query}")]
    ResultNoField { query: String },
    #[error("MySQL row fetch error: {query}")]
    ResultRowFetch { query: String },
    #[error("MySQL field fetch error: {query}")]
    ResultFieldFetch { query: String },
    #[error("MySQL parse error: {message}, result: {result}")]
    ResultParse { message: String, result: String },
    #[error("MySQL field index out of bounds: {field_name}, index: {attempted} (fields: {field_count})")]
    FieldIndexOutOfBounds {
        field_count: usize,
        attempted: usize,
        field_name: String,
    },
    #[error("MySQL cast error: actual {actual}, expected: {expected}, key: {key}")]
    Cast {
        actual: String,
        expected: String,
        key: String,
    },
    #[error("MySQL missing key error: {key}")]
    MissingKey { key: String },
    /// The literal is reported as received, before trimming.
    #[error("MySQL invalid date error: {0}")]
    InvalidSqlDate(String),
}

impl QueryError {
    pub fn invalid_sql_date(literal: impl Into<String>) -> Self {
        Self::InvalidSqlDate(literal.into())
    }
}

#[cfg(test)]
mod tests {
    use super::QueryError;

    #[test]
    fn messages() {
        assert_eq!(
            QueryError::invalid_sql_date("2015-02-30").to_string(),
            "MySQL invalid date error: 2015-02-30"
        );
        assert_eq!(
            QueryError::Cast {
                actual: "VARCHAR".into(),
                expected: "DATETIME".into(),
                key: "created_at".into(),
            }
            .to_string(),
            "MySQL cast error: actual VARCHAR, expected: DATETIME, key: created_at"
        );
        assert_eq!(
            QueryError::FieldIndexOutOfBounds {
                field_count: 2,
                attempted: 5,
                field_name: "updated_at".into(),
            }
            .to_string(),
            "MySQL field index out of bounds: updated_at, index: 5 (fields: 2)"
        );
    }

    #[test]
    fn through_anyhow() {
        let error: anyhow::Error = QueryError::invalid_sql_date("20151").into();
        let error = error.context("While decoding the column `created_at`");
        assert_eq!(
            error.downcast_ref::<QueryError>(),
            Some(&QueryError::InvalidSqlDate("20151".into()))
        );
        assert_eq!(error.root_cause().to_string(), "MySQL invalid date error: 20151");
    }
}
