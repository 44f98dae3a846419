//! Filter, join and CTE fragments accumulated by [`QueryAssembler`].
//!
//! Field names, operators and table names are opaque strings: they are
//! emitted verbatim, never quoted or checked.

use crate::assembler::QueryAssembler;
use crate::param::Arg;
use std::fmt::Write;
use tokio_postgres::types::ToSql;

/// A single `<field> <operator> $N` predicate.
#[derive(Clone, Debug)]
pub struct Condition {
    pub field: String,
    /// e.g. `=`, `>`, `LIKE`
    pub operator: String,
    pub value: Arg,
}

impl Condition {
    pub fn new<T>(field: impl Into<String>, operator: impl Into<String>, value: T) -> Self
    where
        T: ToSql + Send + Sync + 'static,
    {
        Self {
            field: field.into(),
            operator: operator.into(),
            value: Arg::new(value),
        }
    }

    /// Write `<field> <operator> $<placeholder>` into `out`.
    pub(crate) fn write_sql(&self, out: &mut String, placeholder: usize) {
        // Writing into a String cannot fail.
        let _ = write!(out, "{} {} ${}", self.field, self.operator, placeholder);
    }
}

/// Join of the primary table to `table` on
/// `<primary>.<primary_key> = <table>.<foreign_key>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Relation {
    pub table: String,
    pub foreign_key: String,
    pub primary_key: String,
}

impl Relation {
    pub fn new(
        table: impl Into<String>,
        foreign_key: impl Into<String>,
        primary_key: impl Into<String>,
    ) -> Self {
        Self {
            table: table.into(),
            foreign_key: foreign_key.into(),
            primary_key: primary_key.into(),
        }
    }

    pub(crate) fn write_sql(&self, out: &mut String, primary_table: &str) {
        let _ = write!(
            out,
            " JOIN {table} ON {primary_table}.{pk} = {table}.{fk}",
            table = self.table,
            pk = self.primary_key,
            fk = self.foreign_key,
        );
    }
}

/// A named sub-query rendered as `<name> AS (<sql>)` ahead of the main SELECT.
#[derive(Clone, Debug)]
pub struct Cte {
    pub name: String,
    pub assembler: QueryAssembler,
}
