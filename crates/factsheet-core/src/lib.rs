//! factsheet-core — fact normalization layers for factsheet.
//!
//! This crate exposes the normalization pipeline as public modules, plus the
//! shared types used across all layers.
//!
//! # Architecture
//!
//! ```text
//! RawFactDocument ──► Normalizer ──► HostRecord
//!                        │
//!        ┌───────────────┼────────────────┐
//!     Resolver      Unit Parser    User/Group Extractor
//! ```
//!
//! Everything is fault tolerant by contract: a missing or malformed fact
//! resolves to a documented default, never to an error. Fact documents come
//! from collectors whose schemas drift across versions, so every logical
//! field is looked up through a priority list of alternative key names.

pub mod config;
pub mod normalize;
pub mod resolve;
pub mod types;
pub mod units;
pub mod users;

pub use config::Config;
pub use types::{GroupEntry, HostRecord, MachineKind, UserEntry};
