//! Domain layer containing the exercise rules and their vocabulary.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (mode, value objects, IDs, phase trait, errors)
//! - `filter` - "What actually matters?" prioritisation with a three-item cap
//! - `decision` - Weighted criteria decision and its scoring engine
//! - `teach` - Three-level teach-back journaling

pub mod decision;
pub mod filter;
pub mod foundation;
pub mod teach;
