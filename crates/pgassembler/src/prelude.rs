//! Convenient imports for typical `pgassembler` usage.
//!
//! ```ignore
//! use pgassembler::prelude::*;
//! ```

pub use crate::{
    AssemblerConfig, AssemblerError, AssemblerResult, Args, CteNumbering, QueryAssembler,
};
