//! Host normalizer — one raw fact document in, one [`HostRecord`] out.
//!
//! Every field derivation is a resolver lookup with a documented default.
//! Nothing here returns an error and nothing panics: a document with every
//! fact missing still yields a fully-populated record. That edge-case policy
//! is the defining contract of the subsystem.
//!
//! Two top-level document shapes are accepted transparently: a flat fact
//! mapping, or a wrapper with a `facts` sub-mapping plus an inventory
//! identifier and an optional `usuarios` text block.

use crate::config::Config;
use crate::resolve::{resolve, resolve_str, resolve_u64, value_as_f64, value_as_u64};
use crate::types::{DbEngines, HostRecord, MachineKind};
use crate::units::parse_size_gib;
use crate::users;
use serde_json::{Map, Value};
use tracing::debug;

const UNKNOWN: &str = "Desconocido";

// Candidate tables cover both the `ansible_`-prefixed and bare spellings
// seen across collector versions.
const IPV4: &[&[&str]] = &[&["ansible_default_ipv4", "default_ipv4"]];
const HOSTNAME: &[&[&str]] = &[&["ansible_hostname", "hostname"], &["ansible_fqdn", "fqdn"]];
const DISTRIBUTION: &[&[&str]] = &[&["ansible_distribution", "distribution"]];
const DISTRIBUTION_VERSION: &[&[&str]] =
    &[&["ansible_distribution_version", "distribution_version"]];
const KERNEL: &[&[&str]] = &[&["ansible_kernel", "kernel"]];
const ARCHITECTURE: &[&[&str]] = &[&["ansible_architecture", "architecture"]];
const PROCESSOR: &[&[&str]] = &[&["ansible_processor", "processor"]];
const PROCESSOR_CORES: &[&[&str]] = &[&["ansible_processor_cores", "processor_cores"]];
const PROCESSOR_COUNT: &[&[&str]] = &[&["ansible_processor_count", "processor_count"]];
const MEMTOTAL_MB: &[&[&str]] = &[&["ansible_memtotal_mb", "memtotal_mb"]];
const MEMFREE_MB: &[&[&str]] =
    &[&["ansible_memfree_mb", "memfree_mb"], &["ansible_memory_mb", "memory_mb"]];
const DEVICES: &[&[&str]] = &[&["ansible_devices", "devices"]];
const MOUNTS: &[&[&str]] = &[&["ansible_mounts", "mounts"]];
const VIRT_ROLE: &[&[&str]] = &[&["ansible_virtualization_role", "virtualization_role"]];
const VIRT_TYPE: &[&[&str]] = &[&["ansible_virtualization_type", "virtualization_type"]];
const PORTS: &[&[&str]] = &[&["puertos", "listening_ports", "tcp_listen_ports"]];
const INVENTORY_ID: &[&[&str]] = &[&["inventory_hostname", "host"]];

/// Normalize one raw fact document into a canonical host record.
///
/// `doc` is the whole parsed file: either a flat fact mapping or the wrapper
/// shape. Never fails; unresolvable fields carry their documented defaults.
pub fn normalize(doc: &Map<String, Value>, cfg: &Config) -> HostRecord {
    // Collector-format variant: facts nested one level down, identifier and
    // usuarios block at the wrapper level.
    let facts = doc.get("facts").and_then(Value::as_object).unwrap_or(doc);
    let inventory_id = resolve_str(doc, INVENTORY_ID, UNKNOWN);

    let ip = resolve(facts, IPV4)
        .and_then(Value::as_object)
        .and_then(|v4| v4.get("address"))
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| inventory_id.clone());

    let hostname = resolve_str(facts, HOSTNAME, &inventory_id);

    let distribution = resolve_str(facts, DISTRIBUTION, "");
    let version = resolve_str(facts, DISTRIBUTION_VERSION, "");
    let os = format!("{} {}", distribution.trim(), version.trim()).trim().to_string();

    let ram_total_mb = resolve_u64(facts, MEMTOTAL_MB, 0);
    let ram_free_mb = free_memory_mb(facts);
    let ram_total_gb = ceil_mb_to_gb(ram_total_mb);
    let ram_free_gb = ceil_mb_to_gb(ram_free_mb);

    let (disk_total_gb, disks) = physical_disks(facts, cfg);
    let (disk_used_gb, disk_free_gb) = mount_usage(facts, cfg);

    let (users, groups) = match doc.get("usuarios") {
        Some(block) => users::extract(&text_lines(block), &cfg.users),
        None => (Vec::new(), Vec::new()),
    };

    let record = HostRecord {
        ip,
        hostname,
        os,
        kernel: resolve_str(facts, KERNEL, ""),
        architecture: resolve_str(facts, ARCHITECTURE, ""),
        cpu_model: cpu_model(facts),
        physical_cores: resolve_u64(facts, PROCESSOR_CORES, 0),
        logical_cpus: resolve_u64(facts, PROCESSOR_COUNT, 0),
        ram_total_gb,
        ram_used_gb: ram_total_gb.saturating_sub(ram_free_gb),
        ram_free_gb,
        disk_total_gb,
        disk_used_gb,
        disk_free_gb,
        disks,
        machine: machine_kind(facts),
        ports: ports(facts),
        db_engines: db_engines(facts),
        users,
        groups,
    };
    debug!(ip = %record.ip, hostname = %record.hostname, "normalized host document");
    record
}

/// Ceiling division of megabytes into whole GiB (1500 MB → 2).
fn ceil_mb_to_gb(mb: u64) -> u64 {
    mb.div_ceil(1024)
}

/// Free memory in MB. The resolved value may be a scalar (`memfree_mb`) or
/// the whole memory breakdown mapping, in which case descend `real` → `free`.
fn free_memory_mb(facts: &Map<String, Value>) -> u64 {
    match resolve(facts, MEMFREE_MB) {
        Some(Value::Object(breakdown)) => breakdown
            .get("real")
            .and_then(Value::as_object)
            .and_then(|real| real.get("free"))
            .and_then(value_as_u64)
            .unwrap_or(0),
        Some(value) => value_as_u64(value).unwrap_or(0),
        None => 0,
    }
}

/// CPU model from the collector's processor list.
///
/// Assumed layout is `[index, vendor, model, ...]` repeating triplets, hence
/// index 2 when the list has more than 2 elements, else the last element.
/// Whether that holds for every collector version is an open question; the
/// convention is preserved as observed rather than corrected.
fn cpu_model(facts: &Map<String, Value>) -> String {
    let Some(list) = resolve(facts, PROCESSOR).and_then(Value::as_array) else {
        return String::new();
    };
    let element = if list.len() > 2 { list.get(2) } else { list.last() };
    element.and_then(Value::as_str).unwrap_or("").to_string()
}

/// Sum physical device sizes over recognized storage devices and build the
/// per-device summary string. Devices outside the recognized prefixes
/// ("sr0", "loop0", device-mapper nodes) are excluded entirely.
fn physical_disks(facts: &Map<String, Value>, cfg: &Config) -> (f64, String) {
    let Some(devices) = resolve(facts, DEVICES).and_then(Value::as_object) else {
        return (0.0, String::new());
    };

    let mut total = 0.0;
    let mut summary = Vec::new();
    for (name, info) in devices {
        if !cfg.storage.device_prefixes.iter().any(|p| name.starts_with(p.as_str())) {
            continue;
        }
        let size = info.get("size").and_then(Value::as_str);
        total += size.map(parse_size_gib).unwrap_or(0.0);
        summary.push(format!("{}: {}", name, size.unwrap_or("desconocido")));
    }
    (total, summary.join("; "))
}

/// Used/free GiB over mounts whose device path matches a recognized storage
/// path prefix. Byte sums convert at 1024³ and round to 2 decimals; used is
/// derived from the rounded totals.
fn mount_usage(facts: &Map<String, Value>, cfg: &Config) -> (f64, f64) {
    let Some(mounts) = resolve(facts, MOUNTS).and_then(Value::as_array) else {
        return (0.0, 0.0);
    };

    let mut total_bytes = 0.0;
    let mut free_bytes = 0.0;
    for mount in mounts {
        let Some(mount) = mount.as_object() else { continue };
        let device = mount.get("device").and_then(Value::as_str).unwrap_or("");
        if !cfg.storage.mount_prefixes.iter().any(|p| device.starts_with(p.as_str())) {
            continue;
        }
        total_bytes += mount.get("size_total").and_then(value_as_f64).unwrap_or(0.0);
        free_bytes += mount.get("size_available").and_then(value_as_f64).unwrap_or(0.0);
    }

    const GIB: f64 = 1024.0 * 1024.0 * 1024.0;
    let total = round2(total_bytes / GIB);
    let free = round2(free_bytes / GIB);
    (round2(total - free), free)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn machine_kind(facts: &Map<String, Value>) -> MachineKind {
    let tech = resolve_str(facts, VIRT_TYPE, "");
    match resolve(facts, VIRT_ROLE).and_then(Value::as_str) {
        Some("guest") => MachineKind::Guest { tech },
        Some("host") => MachineKind::VirtHost { tech },
        _ => MachineKind::Physical,
    }
}

fn ports(facts: &Map<String, Value>) -> Vec<String> {
    let Some(list) = resolve(facts, PORTS).and_then(Value::as_array) else {
        return Vec::new();
    };
    list.iter()
        .map(|p| match p {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
        .collect()
}

/// Same-named boolean-ish flags on the document: bool true, non-zero number,
/// or an affirmative string.
fn db_engines(facts: &Map<String, Value>) -> DbEngines {
    let flag = |key: &str| facts.get(key).map(is_truthy).unwrap_or(false);
    DbEngines {
        mysql: flag("MySQL"),
        postgresql: flag("PostgreSQL"),
        sqlserver: flag("SQLServer"),
        oracle: flag("Oracle"),
        mongodb: flag("MongoDB"),
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(false),
        Value::String(s) => {
            matches!(s.trim().to_lowercase().as_str(), "true" | "yes" | "si" | "sí" | "1" | "activo")
        }
        _ => false,
    }
}

/// The `usuarios` block arrives as either a list of line strings or one
/// newline-separated string, depending on how the collector registered it.
fn text_lines(block: &Value) -> Vec<String> {
    match block {
        Value::Array(lines) => lines
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect(),
        Value::String(text) => text.lines().map(str::to_string).collect(),
        _ => Vec::new(),
    }
}
