//! Opt-in checks for configurations that render to broken SQL.
//!
//! [`QueryAssembler::build_query`] is total; nothing here runs unless asked.

use crate::assembler::QueryAssembler;
use crate::error::{AssemblerError, AssemblerResult};
use crate::param::Args;

impl QueryAssembler {
    /// Check this assembler and every nested CTE assembler.
    ///
    /// Fails on an empty table name, an empty projection, an empty CTE name,
    /// or when the k-th placeholder in the rendered text is not `$k` (which
    /// [`crate::CteNumbering::Independent`] produces once both the CTEs and
    /// the main query carry conditions).
    pub fn validate(&self) -> AssemblerResult<()> {
        let result = self
            .check_shape()
            .and_then(|()| check_alignment(&self.render().placeholders));

        #[cfg(feature = "tracing")]
        {
            if let Err(err) = &result {
                tracing::warn!(
                    target: "pgassembler.sql",
                    table = %self.table(),
                    error = %err,
                    "query validation failed"
                );
            }
        }

        result
    }

    /// [`validate`](Self::validate), then [`build_query`](Self::build_query).
    pub fn try_build_query(&self) -> AssemblerResult<(String, Args)> {
        self.validate()?;
        Ok(self.build_query())
    }

    fn check_shape(&self) -> AssemblerResult<()> {
        if self.table().is_empty() {
            return Err(AssemblerError::EmptyTable);
        }
        if self.fields().is_empty() {
            return Err(AssemblerError::no_fields(self.table()));
        }
        for cte in self.ctes() {
            if cte.name.is_empty() {
                return Err(AssemblerError::EmptyCteName);
            }
            cte.assembler.check_shape()?;
        }
        Ok(())
    }
}

fn check_alignment(placeholders: &[usize]) -> AssemblerResult<()> {
    for (i, &placeholder) in placeholders.iter().enumerate() {
        let position = i + 1;
        if placeholder != position {
            return Err(AssemblerError::PlaceholderMisaligned {
                position,
                placeholder,
            });
        }
    }
    Ok(())
}
