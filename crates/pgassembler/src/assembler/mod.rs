//! Fluent SELECT assembler.
//!
//! # Example
//!
//! ```ignore
//! use pgassembler::QueryAssembler;
//!
//! let mut q = QueryAssembler::new("users");
//! q.select(["id", "name"])
//!     .and_where("age", ">", 18_i32)
//!     .or_where("status", "=", "active");
//!
//! let (sql, args) = q.build_query();
//! assert_eq!(sql, "SELECT id, name FROM users WHERE age > $1 AND (status = $2)");
//! let rows = client.query(&sql, &args.as_refs()).await?;
//! ```

mod render;


use crate::condition::{Condition, Cte, Relation};
use crate::config::AssemblerConfig;
use tokio_postgres::types::ToSql;

/// Accumulates SELECT fragments and renders them with `$N` placeholders.
///
/// Every mutator appends and returns the same assembler. Nothing is validated
/// on the way in; see [`QueryAssembler::validate`] for an opt-in check.
#[derive(Clone, Debug)]
pub struct QueryAssembler {
    table: String,
    /// Insertion order = projection order, duplicates kept
    fields: Vec<String>,
    conditions: Vec<Condition>,
    or_conditions: Vec<Condition>,
    relations: Vec<Relation>,
    ctes: Vec<Cte>,
    config: AssemblerConfig,
}

impl QueryAssembler {
    /// Create an empty assembler selecting from `table`.
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            fields: Vec::new(),
            conditions: Vec::new(),
            or_conditions: Vec::new(),
            relations: Vec::new(),
            ctes: Vec::new(),
            config: AssemblerConfig::default(),
        }
    }

    /// Attach a render configuration (consuming).
    ///
    /// Only the configuration of the assembler that is rendered applies; the
    /// configs of nested CTE assemblers are ignored.
    pub fn with_config(mut self, config: AssemblerConfig) -> Self {
        self.config = config;
        self
    }

    // ==================== Mutators ====================

    /// Append projection fields in the given order.
    pub fn select<I, S>(&mut self, fields: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields.extend(fields.into_iter().map(Into::into));
        self
    }

    /// Append a condition to the AND group.
    pub fn and_where<T>(
        &mut self,
        field: impl Into<String>,
        operator: impl Into<String>,
        value: T,
    ) -> &mut Self
    where
        T: ToSql + Send + Sync + 'static,
    {
        self.conditions.push(Condition::new(field, operator, value));
        self
    }

    /// Append a condition to the OR group.
    ///
    /// The OR group renders as one parenthesized unit AND-ed after the AND group.
    pub fn or_where<T>(
        &mut self,
        field: impl Into<String>,
        operator: impl Into<String>,
        value: T,
    ) -> &mut Self
    where
        T: ToSql + Send + Sync + 'static,
    {
        self.or_conditions.push(Condition::new(field, operator, value));
        self
    }

    /// Append `JOIN <table> ON <self.table>.<primary_key> = <table>.<foreign_key>`.
    pub fn join(
        &mut self,
        table: impl Into<String>,
        foreign_key: impl Into<String>,
        primary_key: impl Into<String>,
    ) -> &mut Self {
        self.relations
            .push(Relation::new(table, foreign_key, primary_key));
        self
    }

    /// Append a named CTE. The assembler is rendered lazily, at build time.
    pub fn add_cte(&mut self, name: impl Into<String>, assembler: QueryAssembler) -> &mut Self {
        self.ctes.push(Cte {
            name: name.into(),
            assembler,
        });
        self
    }

    /// Mutable access to the first CTE assembler named `name`.
    pub fn cte_mut(&mut self, name: &str) -> Option<&mut QueryAssembler> {
        self.ctes
            .iter_mut()
            .find(|cte| cte.name == name)
            .map(|cte| &mut cte.assembler)
    }

    // ==================== Accessors ====================

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    pub fn or_conditions(&self) -> &[Condition] {
        &self.or_conditions
    }

    pub fn relations(&self) -> &[Relation] {
        &self.relations
    }

    pub fn ctes(&self) -> &[Cte] {
        &self.ctes
    }

    pub fn config(&self) -> &AssemblerConfig {
        &self.config
    }
}
