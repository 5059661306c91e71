#![allow(dead_code)]
//! Shared test utilities for factsheet integration harnesses.
//!
//! Import everything you need via `mod common; use common::*;` at the top of
//! each harness file. Fixtures are static JSON documents; builders produce
//! fact documents programmatically for targeted cases.

pub mod assertions;
pub mod builders;
pub mod fixtures;

pub use assertions::*;
pub use builders::*;
pub use fixtures::*;
