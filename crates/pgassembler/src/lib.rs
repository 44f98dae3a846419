//! # pgassembler
//!
//! Assemble a PostgreSQL `SELECT` from fragments and render it to SQL text with
//! `$1, $2, ...` placeholders plus the ordered argument list to bind.
//!
//! ## Features
//!
//! - **Fluent accumulation**: fields, AND/OR conditions, joins and CTEs are appended in order
//! - **Positional arguments**: the returned [`Args`] bind directly with `tokio-postgres`
//! - **Nested CTEs**: sub-assemblers render recursively, arguments spliced CTEs first
//! - **Minimal magic**: identifiers and operators are emitted verbatim
//! - **Opt-in validation**: [`QueryAssembler::validate`] catches empty projections and
//!   misaligned placeholders
//!
//! ## Example
//!
//! ```ignore
//! use pgassembler::QueryAssembler;
//!
//! let mut recent = QueryAssembler::new("orders");
//! recent.select(["id"]).and_where("created_at", ">", cutoff);
//!
//! let mut q = QueryAssembler::new("recent");
//! q.select(["*"]).add_cte("recent", recent);
//!
//! let (sql, args) = q.build_query();
//! // WITH recent AS (SELECT id FROM orders WHERE created_at > $1) SELECT * FROM recent
//! let rows = client.query(&sql, &args.as_refs()).await?;
//! ```

pub mod assembler;
pub mod condition;
pub mod config;
pub mod error;
pub mod param;
pub mod prelude;
mod validate;

pub use assembler::QueryAssembler;
pub use condition::{Condition, Cte, Relation};
pub use config::{AssemblerConfig, CteNumbering};
pub use error::{AssemblerError, AssemblerResult};
pub use param::{Arg, Args};
