//! Render configuration.
//!
//! ```ignore
//! let config = AssemblerConfig::from_toml_str(r#"cte_numbering = "continuous""#)?;
//! let q = QueryAssembler::new("recent").with_config(config);
//! ```

use crate::error::AssemblerResult;
use serde::Deserialize;

/// How placeholders inside CTE sub-queries are numbered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CteNumbering {
    /// Every nested assembler numbers from `$1`, and the parent counter is not
    /// advanced by nested renders. Arguments are still ordered CTEs first, so
    /// a statement that has both CTE and main-query conditions repeats
    /// placeholder numbers.
    #[default]
    Independent,
    /// One counter runs across the whole statement, CTEs first, so `$k`
    /// always binds to `args[k - 1]`.
    Continuous,
}

/// Configuration for [`crate::QueryAssembler`] rendering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AssemblerConfig {
    pub cte_numbering: CteNumbering,
    /// Truncate SQL in trace events (in bytes, cut at a char boundary).
    /// `None` means no truncation.
    pub trace_sql_max_length: Option<usize>,
}

impl Default for AssemblerConfig {
    fn default() -> Self {
        Self {
            cte_numbering: CteNumbering::Independent,
            trace_sql_max_length: Some(200),
        }
    }
}

impl AssemblerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(raw: &str) -> AssemblerResult<Self> {
        Ok(toml::from_str(raw)?)
    }

    pub fn with_cte_numbering(mut self, numbering: CteNumbering) -> Self {
        self.cte_numbering = numbering;
        self
    }

    pub fn with_trace_sql_max_length(mut self, len: usize) -> Self {
        self.trace_sql_max_length = Some(len);
        self
    }

    /// Disable SQL truncation in trace events.
    pub fn no_truncate(mut self) -> Self {
        self.trace_sql_max_length = None;
        self
    }

    #[cfg_attr(not(feature = "tracing"), allow(dead_code))]
    pub(crate) fn truncate_for_trace<'a>(&self, sql: &'a str) -> std::borrow::Cow<'a, str> {
        match self.trace_sql_max_length {
            Some(max) if sql.len() > max => {
                let mut end = max;
                while !sql.is_char_boundary(end) {
                    end -= 1;
                }
                format!("{}...", &sql[..end]).into()
            }
            _ => sql.into(),
        }
    }
}
