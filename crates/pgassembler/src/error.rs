//! Error types for pgassembler

use thiserror::Error;

/// Result type alias for pgassembler operations
pub type AssemblerResult<T> = Result<T, AssemblerError>;

/// Errors reported by the opt-in validation layer and config loading.
///
/// Rendering itself never fails; see [`crate::QueryAssembler::build_query`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AssemblerError {
    /// The assembler was created with an empty table name
    #[error("Empty table name")]
    EmptyTable,

    /// No projection fields were selected
    #[error("No fields selected for table '{table}'")]
    NoFields { table: String },

    /// A CTE entry was attached with an empty name
    #[error("Empty CTE name")]
    EmptyCteName,

    /// The `position`-th placeholder in the text is not `$position`
    #[error("Placeholder misaligned: position {position} renders ${placeholder}")]
    PlaceholderMisaligned { position: usize, placeholder: usize },

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),
}

impl AssemblerError {
    /// Create a no-fields error for a table
    pub fn no_fields(table: impl Into<String>) -> Self {
        Self::NoFields {
            table: table.into(),
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Check if this is a placeholder alignment error
    pub fn is_misaligned(&self) -> bool {
        matches!(self, Self::PlaceholderMisaligned { .. })
    }
}

impl From<toml::de::Error> for AssemblerError {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(err.to_string())
    }
}
