// crates/extract_operator_examples/src/lib.rs

//! Orchestration over the extraction engine: locate the reference page for
//! each named operator, pull its example code blocks, and materialize the
//! non-empty examples as fixture folders under the resource root.

pub mod audit;
pub mod config;
pub mod example;
pub mod operator;
