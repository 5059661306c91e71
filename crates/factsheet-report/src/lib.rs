//! factsheet-report — record-set assembly and report rendering.
//!
//! Downstream of the normalizer everything is mechanical: collect the
//! canonical records, sort them by IP, and render the same column model to a
//! spreadsheet and to a plain-text table.

pub mod assemble;
pub mod text;
pub mod xlsx;

pub use assemble::HostRecordSet;

/// Rendering failures. Output-path write failures propagate fatally; there
/// is no partial-write recovery.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("failed to write spreadsheet: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
}
