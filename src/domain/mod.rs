//! Domain layer containing case data and template vocabulary.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (ids, enums, formatting, errors)
//! - `case` - The read-only case aggregate
//! - `template` - Placeholder keys, template values and wording tables

pub mod case;
pub mod foundation;
pub mod template;
