//! Dynamic partial-update statement builder
//!
//! Repositories accept partial field sets and must write exactly the supplied
//! columns. The builder renders one parameterized UPDATE per call: column
//! names come from a fixed per-entity allow-list (never from external input)
//! and values are always bound parameters. Assignments keep their insertion
//! order so the rendered statement is deterministic.

use chrono::{DateTime, Utc};
use sqlx::postgres::PgArguments;
use sqlx::query::QueryAs;
use sqlx::Postgres;

use crate::utils::errors::{Result, TicketryError};

/// Value shapes bindable to an UPDATE assignment.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Text(String),
    BigInt(i64),
    Bool(bool),
    Timestamp(DateTime<Utc>),
}

impl From<String> for SqlValue {
    fn from(value: String) -> Self {
        SqlValue::Text(value)
    }
}

impl From<&str> for SqlValue {
    fn from(value: &str) -> Self {
        SqlValue::Text(value.to_string())
    }
}

impl From<i64> for SqlValue {
    fn from(value: i64) -> Self {
        SqlValue::BigInt(value)
    }
}

impl From<bool> for SqlValue {
    fn from(value: bool) -> Self {
        SqlValue::Bool(value)
    }
}

impl From<DateTime<Utc>> for SqlValue {
    fn from(value: DateTime<Utc>) -> Self {
        SqlValue::Timestamp(value)
    }
}

impl SqlValue {
    /// Bind this value as the next parameter of a query
    pub fn bind_to<'q, O>(
        self,
        query: QueryAs<'q, Postgres, O, PgArguments>,
    ) -> QueryAs<'q, Postgres, O, PgArguments> {
        match self {
            SqlValue::Text(value) => query.bind(value),
            SqlValue::BigInt(value) => query.bind(value),
            SqlValue::Bool(value) => query.bind(value),
            SqlValue::Timestamp(value) => query.bind(value),
        }
    }
}

/// Builder for `UPDATE <table> SET .. WHERE <key> = $1 RETURNING *`
///
/// The key value binds at `$1`; assignments number from `$2` in the order
/// they were supplied.
#[derive(Debug)]
pub struct UpdateBuilder {
    table: &'static str,
    key_column: &'static str,
    allowed: &'static [&'static str],
    assignments: Vec<(&'static str, SqlValue)>,
}

impl UpdateBuilder {
    pub fn new(
        table: &'static str,
        key_column: &'static str,
        allowed: &'static [&'static str],
    ) -> Self {
        Self {
            table,
            key_column,
            allowed,
            assignments: Vec::new(),
        }
    }

    /// Add an assignment for `column`
    pub fn set(mut self, column: &'static str, value: impl Into<SqlValue>) -> Result<Self> {
        if !self.allowed.contains(&column) {
            return Err(TicketryError::InvalidInput(format!(
                "column {} is not updatable on {}",
                column, self.table
            )));
        }
        if self.assignments.iter().any(|(existing, _)| *existing == column) {
            return Err(TicketryError::InvalidInput(format!(
                "column {} supplied twice for {}",
                column, self.table
            )));
        }
        self.assignments.push((column, value.into()));
        Ok(self)
    }

    /// Add an assignment only when a value was supplied
    pub fn maybe_set(
        self,
        column: &'static str,
        value: Option<impl Into<SqlValue>>,
    ) -> Result<Self> {
        match value {
            Some(value) => self.set(column, value),
            None => Ok(self),
        }
    }

    /// Render the statement and hand back the ordered values
    pub fn build(self) -> Result<(String, Vec<SqlValue>)> {
        if self.assignments.is_empty() {
            return Err(TicketryError::InvalidInput(format!(
                "no fields supplied for {} update",
                self.table
            )));
        }

        let set_clause = self
            .assignments
            .iter()
            .enumerate()
            .map(|(index, (column, _))| format!("{} = ${}", column, index + 2))
            .collect::<Vec<_>>()
            .join(", ");

        let sql = format!(
            "UPDATE {} SET {} WHERE {} = $1 RETURNING *",
            self.table, set_clause, self.key_column
        );

        let values = self
            .assignments
            .into_iter()
            .map(|(_, value)| value)
            .collect();

        Ok((sql, values))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const COLUMNS: &[&str] = &["title", "location", "is_free", "organizer_id"];

    #[test]
    fn test_single_assignment() {
        let (sql, values) = UpdateBuilder::new("events", "id", COLUMNS)
            .set("title", "Rust Meetup")
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(sql, "UPDATE events SET title = $2 WHERE id = $1 RETURNING *");
        assert_eq!(values, vec![SqlValue::Text("Rust Meetup".to_string())]);
    }

    #[test]
    fn test_assignments_keep_insertion_order() {
        let (sql, values) = UpdateBuilder::new("events", "id", COLUMNS)
            .set("location", "Berlin")
            .unwrap()
            .set("is_free", true)
            .unwrap()
            .set("title", "Rust Meetup")
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(
            sql,
            "UPDATE events SET location = $2, is_free = $3, title = $4 WHERE id = $1 RETURNING *"
        );
        assert_eq!(values.len(), 3);
        assert_eq!(values[1], SqlValue::Bool(true));
    }

    #[test]
    fn test_empty_builder_is_rejected() {
        let err = UpdateBuilder::new("events", "id", COLUMNS)
            .build()
            .unwrap_err();
        assert!(matches!(err, TicketryError::InvalidInput(_)));
    }

    #[test]
    fn test_unknown_column_is_rejected() {
        let err = UpdateBuilder::new("events", "id", COLUMNS)
            .set("id", 7i64)
            .unwrap_err();
        assert!(matches!(err, TicketryError::InvalidInput(_)));
    }

    #[test]
    fn test_duplicate_column_is_rejected() {
        let err = UpdateBuilder::new("events", "id", COLUMNS)
            .set("title", "first")
            .unwrap()
            .set("title", "second")
            .unwrap_err();
        assert!(matches!(err, TicketryError::InvalidInput(_)));
    }

    #[test]
    fn test_maybe_set_skips_missing_values() {
        let (sql, values) = UpdateBuilder::new("events", "id", COLUMNS)
            .maybe_set("title", None::<String>)
            .unwrap()
            .maybe_set("location", Some("Berlin"))
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(
            sql,
            "UPDATE events SET location = $2 WHERE id = $1 RETURNING *"
        );
        assert_eq!(values.len(), 1);
    }

    proptest! {
        /// Any non-empty subset of the allow-list renders those columns, in
        /// order, with sequential placeholders starting at $2.
        #[test]
        fn prop_statement_shape(selection in proptest::sample::subsequence(COLUMNS.to_vec(), 1..=COLUMNS.len())) {
            let mut builder = UpdateBuilder::new("events", "id", COLUMNS);
            for column in &selection {
                builder = builder.set(*column, "value").unwrap();
            }
            let (sql, values) = builder.build().unwrap();

            prop_assert_eq!(values.len(), selection.len());
            let expected_clause = selection
                .iter()
                .enumerate()
                .map(|(index, column)| format!("{} = ${}", column, index + 2))
                .collect::<Vec<_>>()
                .join(", ");
            prop_assert_eq!(
                sql,
                format!("UPDATE events SET {} WHERE id = $1 RETURNING *", expected_clause)
            );
        }
    }
}
