//! Domain-specific assertions for factsheet harnesses.
//!
//! Context-rich failure messages that make it clear *what* record invariant
//! was violated and on which host.

use factsheet_core::HostRecord;

/// Assert a single named field on a `HostRecord`.
///
/// ```rust
/// assert_field_eq!(record, hostname, "web01");
/// ```
#[macro_export]
macro_rules! assert_field_eq {
    ($record:expr, $field:ident, $expected:expr) => {{
        let record: &factsheet_core::HostRecord = &$record;
        let actual = &record.$field;
        let expected = $expected;
        if *actual != expected {
            panic!(
                "assert_field_eq! failed for `{}`:\n  expected: {:?}\n  actual:   {:?}\n  host: {:?}",
                stringify!($field),
                expected,
                actual,
                record.ip
            );
        }
    }};
}

/// Assert the full-coverage invariant: every derived quantity is consistent
/// and no field carries a sentinel the normalizer should have replaced.
///
/// This holds for *every* record the normalizer emits, for any input.
pub fn assert_full_coverage(record: &HostRecord) {
    // ip/hostname may legitimately be empty when the collector reported a
    // present-but-empty value; the resolver returns those as-is.
    assert_eq!(
        record.ram_used_gb,
        record.ram_total_gb - record.ram_free_gb.min(record.ram_total_gb),
        "ram_used_gb must be derived as total - free: {record:?}"
    );
    assert!(
        record.disk_total_gb >= 0.0 && record.disk_used_gb >= 0.0 && record.disk_free_gb >= 0.0,
        "disk aggregates must be non-negative: {record:?}"
    );
    assert!(
        !record.machine.to_string().is_empty(),
        "machine kind must always render a label: {record:?}"
    );
}
