//! `build_query`: clause ordering and placeholder numbering.

use super::QueryAssembler;
use crate::condition::Condition;
use crate::config::CteNumbering;
use crate::param::Args;

/// Output of one render pass.
#[derive(Debug, Default)]
pub(crate) struct Rendered {
    pub(crate) sql: String,
    pub(crate) args: Args,
    /// Placeholder numbers in the order they appear in `sql`.
    pub(crate) placeholders: Vec<usize>,
}

impl Rendered {
    fn push_condition(&mut self, condition: &Condition, next: &mut usize) {
        condition.write_sql(&mut self.sql, *next);
        self.args.push_arg(condition.value.clone());
        self.placeholders.push(*next);
        *next += 1;
    }

    fn append_nested(&mut self, nested: Rendered) {
        self.sql.push_str(&nested.sql);
        self.args.extend(&nested.args);
        self.placeholders.extend(nested.placeholders);
    }
}

impl QueryAssembler {
    /// Render to `(sql, args)`.
    ///
    /// CTEs come first, then `SELECT ... FROM`, joins, and the filter clause.
    /// AND conditions are numbered before OR conditions, and `args` follows the
    /// same order: CTE arguments, AND values, OR values.
    ///
    /// Rendering never fails and does not mutate the assembler, so calling it
    /// twice yields identical output. How CTE placeholders are numbered
    /// depends on [`CteNumbering`].
    pub fn build_query(&self) -> (String, Args) {
        let rendered = self.render();

        #[cfg(feature = "tracing")]
        {
            let sql = self.config.truncate_for_trace(&rendered.sql);
            tracing::debug!(
                target: "pgassembler.sql",
                table = %self.table,
                param_count = rendered.args.len(),
                cte_count = self.ctes.len(),
                sql = %sql,
            );
        }

        (rendered.sql, rendered.args)
    }

    /// Rendered SQL text only.
    pub fn to_sql(&self) -> String {
        self.render().sql
    }

    pub(crate) fn render(&self) -> Rendered {
        let mut next = 1;
        self.render_into(self.config.cte_numbering, &mut next)
    }

    fn render_into(&self, numbering: CteNumbering, next: &mut usize) -> Rendered {
        let mut out = Rendered::default();

        if !self.ctes.is_empty() {
            out.sql.push_str("WITH ");
            for (i, cte) in self.ctes.iter().enumerate() {
                if i > 0 {
                    out.sql.push_str(", ");
                }
                let nested = match numbering {
                    CteNumbering::Independent => {
                        let mut fresh = 1;
                        cte.assembler.render_into(numbering, &mut fresh)
                    }
                    CteNumbering::Continuous => cte.assembler.render_into(numbering, next),
                };
                out.sql.push_str(&cte.name);
                out.sql.push_str(" AS (");
                out.append_nested(nested);
                out.sql.push(')');
            }
            out.sql.push(' ');
        }

        out.sql.push_str("SELECT ");
        out.sql.push_str(&self.fields.join(", "));
        out.sql.push_str(" FROM ");
        out.sql.push_str(&self.table);

        for relation in &self.relations {
            relation.write_sql(&mut out.sql, &self.table);
        }

        if self.conditions.is_empty() && self.or_conditions.is_empty() {
            return out;
        }

        out.sql.push_str(" WHERE ");
        for (i, condition) in self.conditions.iter().enumerate() {
            if i > 0 {
                out.sql.push_str(" AND ");
            }
            out.push_condition(condition, next);
        }

        if !self.or_conditions.is_empty() {
            if !self.conditions.is_empty() {
                out.sql.push_str(" AND ");
            }
            out.sql.push('(');
            for (i, condition) in self.or_conditions.iter().enumerate() {
                if i > 0 {
                    out.sql.push_str(" OR ");
                }
                out.push_condition(condition, next);
            }
            out.sql.push(')');
        }

        out
    }
}
