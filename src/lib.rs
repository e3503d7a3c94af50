#![deny(missing_docs)]
//! Three-valued match result for record-selection predicates.
//!
//! Evaluating a field comparison over a structured record can succeed and
//! hold, succeed and not hold, or fail to mean anything at all (a string
//! field compared against a numeric literal, a missing field). This crate
//! provides the single value type an evaluator threads through its
//! combinators to keep that third outcome honest: [`Truth`], a closed
//! three-variant enum with Kleene AND/OR/NOT, a stable `{0, 1, 2}` wire
//! code, and a diagnostic rendering. Parsing selection text and resolving
//! or comparing field values live in the callers; keep the surface tight.

mod logging;
mod truth;

pub use truth::Truth;
