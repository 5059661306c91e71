//! Static fact-document corpora used across harnesses.
//!
//! Each document is a `&'static str` of raw JSON exactly as a collector
//! would have written it to disk, covering the two accepted top-level
//! shapes and the common schema-drift variants.

/// Flat fact mapping, `ansible_`-prefixed keys, a full set of facts.
pub const DOC_FLAT_FULL: &str = r#"{
    "ansible_default_ipv4": { "address": "10.0.0.5", "interface": "eth0" },
    "ansible_hostname": "web01",
    "ansible_fqdn": "web01.example.com",
    "ansible_distribution": "Ubuntu",
    "ansible_distribution_version": "22.04",
    "ansible_kernel": "5.15.0-101-generic",
    "ansible_architecture": "x86_64",
    "ansible_processor": ["0", "GenuineIntel", "Intel(R) Xeon(R) Gold 6230", "1"],
    "ansible_processor_cores": 8,
    "ansible_processor_count": 2,
    "ansible_memtotal_mb": 15872,
    "ansible_memfree_mb": 4096,
    "ansible_devices": {
        "sda": { "size": "100 GB", "model": "PERC H730" },
        "sr0": { "size": "1024 MB" }
    },
    "ansible_mounts": [
        { "device": "/dev/sda1", "mount": "/", "size_total": 107374182400, "size_available": 42949672960 },
        { "device": "tmpfs", "mount": "/run", "size_total": 8589934592, "size_available": 8589934592 }
    ],
    "ansible_virtualization_role": "guest",
    "ansible_virtualization_type": "kvm",
    "puertos": [22, 80, 443],
    "MySQL": true,
    "PostgreSQL": false
}"#;

/// Wrapper shape: facts nested one level down, bare key spellings, plus an
/// inventory identifier and a usuarios text block at the wrapper level.
pub const DOC_WRAPPED: &str = r#"{
    "inventory_hostname": "db02.example.com",
    "facts": {
        "default_ipv4": { "address": "10.0.0.2" },
        "hostname": "db02",
        "distribution": "Debian",
        "distribution_version": "12",
        "kernel": "6.1.0-18-amd64",
        "architecture": "x86_64",
        "processor": ["AMD EPYC 7543"],
        "processor_cores": 16,
        "processor_count": 32,
        "memtotal_mb": 64512,
        "memory_mb": { "real": { "total": 64512, "free": 32256 } },
        "devices": {
            "nvme0n1": { "size": "1 TB" },
            "loop0": { "size": "4 GB" }
        },
        "virtualization_role": "host",
        "virtualization_type": "kvm",
        "listening_ports": ["5432"],
        "PostgreSQL": "sí"
    },
    "usuarios": [
        "=== Usuarios del sistema ===",
        "alice (UID: 1000, GID: 1000, Shell: /bin/bash)",
        "postgres (UID: 116, GID: 122, Shell: /usr/sbin/nologin)",
        "=== Grupos del sistema ===",
        "sudo:x:27:alice,bob",
        "postgres:x:122:"
    ]
}"#;

/// A document with almost everything missing. Must still normalize to a
/// fully-populated record with defaults.
pub const DOC_SPARSE: &str = r#"{ "ansible_hostname": "lonely" }"#;

/// Not JSON at all — exercises the per-file skip path.
pub const DOC_MALFORMED: &str = "{ this is not json";

/// The §4.4-shaped users/groups block quoted as lines.
pub const USUARIOS_LINES: &[&str] = &[
    "=== Usuarios del sistema ===",
    "alice (UID: 1000, GID: 1000, Shell: /bin/bash)",
    "=== Grupos del sistema ===",
    "sudo:x:27:alice,bob",
];

/// Write the named fixture documents into `dir` and return their paths.
pub fn write_fixture_files(dir: &std::path::Path) -> Vec<std::path::PathBuf> {
    let docs = [
        ("web01.json", DOC_FLAT_FULL),
        ("db02.json", DOC_WRAPPED),
        ("lonely.json", DOC_SPARSE),
    ];
    docs.iter()
        .map(|(name, body)| {
            let path = dir.join(name);
            std::fs::write(&path, body).expect("fixture write must succeed");
            path
        })
        .collect()
}
