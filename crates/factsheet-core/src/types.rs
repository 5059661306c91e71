//! Core types for factsheet-core.
//!
//! This module defines the fundamental data structures shared across all
//! layers: the canonical [`HostRecord`], its [`MachineKind`] discriminant,
//! and the structured [`UserEntry`]/[`GroupEntry`] records extracted from
//! the users/groups text block.

/// A canonical host record produced by the normalizer from one raw fact
/// document.
///
/// Every field is always populated: when a fact cannot be resolved the field
/// carries its documented default (`""`, `0`, `0.0`, `"Desconocido"`) rather
/// than an `Option`. Normalization never fails for missing data.
#[derive(Debug, Clone, PartialEq)]
pub struct HostRecord {
    /// Primary IPv4 address, or the inventory identifier when the collector
    /// reported no address. Default `"Desconocido"`.
    pub ip: String,
    /// Short hostname, falling back to FQDN, then the inventory identifier.
    pub hostname: String,
    /// Distribution name and version joined by a space (e.g. "Ubuntu 22.04").
    pub os: String,
    pub kernel: String,
    pub architecture: String,
    /// CPU model string, extracted positionally from the collector's
    /// processor list (see the normalizer for the layout assumption).
    pub cpu_model: String,
    pub physical_cores: u64,
    pub logical_cpus: u64,
    /// Memory in GiB, ceiling-rounded from the collector's megabyte counts.
    /// `ram_used_gb` is always derived as total − free, never resolved
    /// independently.
    pub ram_total_gb: u64,
    pub ram_used_gb: u64,
    pub ram_free_gb: u64,
    /// Physical disk capacity in GiB, summed over recognized storage devices.
    pub disk_total_gb: f64,
    pub disk_used_gb: f64,
    pub disk_free_gb: f64,
    /// Per-device summary, e.g. `"sda: 100.00 GB; nvme0n1: 500 GB"`.
    pub disks: String,
    pub machine: MachineKind,
    /// Listening ports as reported, in collector order.
    pub ports: Vec<String>,
    pub db_engines: DbEngines,
    /// Users and groups parsed from the document's `usuarios` text block.
    /// Empty when the document carried none.
    pub users: Vec<UserEntry>,
    pub groups: Vec<GroupEntry>,
}

impl HostRecord {
    /// The ports list joined with `", "`; an empty list yields `""`.
    pub fn ports_joined(&self) -> String {
        self.ports.join(", ")
    }
}

/// Physical/virtual classification of a host, derived from the collector's
/// virtualization role and technology facts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MachineKind {
    Physical,
    /// Virtualization role "guest"; `tech` is the hypervisor name ("kvm",
    /// "vmware", …) or `""` when unreported.
    Guest { tech: String },
    /// Virtualization role "host".
    VirtHost { tech: String },
}

impl std::fmt::Display for MachineKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MachineKind::Physical => write!(f, "Equipo físico"),
            MachineKind::Guest { tech } => write!(f, "Máquina Virtual ({tech})"),
            MachineKind::VirtHost { tech } => write!(f, "Host de Virtualización ({tech})"),
        }
    }
}

/// Presence flags for the database engines the inventory tracks.
///
/// Each flag reflects a same-named boolean-ish fact on the host document;
/// absence means not installed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DbEngines {
    pub mysql: bool,
    pub postgresql: bool,
    pub sqlserver: bool,
    pub oracle: bool,
    pub mongodb: bool,
}

impl DbEngines {
    /// Flags paired with their report column labels, in fixed column order.
    pub fn labeled(&self) -> [(&'static str, bool); 5] {
        [
            ("MySQL", self.mysql),
            ("PostgreSQL", self.postgresql),
            ("SQLServer", self.sqlserver),
            ("Oracle", self.oracle),
            ("MongoDB", self.mongodb),
        ]
    }

    /// Render one flag as its report label.
    pub fn label(active: bool) -> &'static str {
        if active {
            "Activo"
        } else {
            "Inactivo"
        }
    }
}

/// A system user parsed from the users section of the text block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserEntry {
    pub name: String,
    pub uid: String,
    pub gid: String,
    pub shell: String,
    /// False when the shell is on the nologin denylist.
    pub login: bool,
}

impl UserEntry {
    /// Report label for the login flag.
    pub fn login_label(&self) -> &'static str {
        if self.login {
            "Sí"
        } else {
            "No"
        }
    }
}

/// A system group parsed from the groups section of the text block.
///
/// Malformed group lines pass through as an opaque label: `name` holds the
/// whole line and `members` is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupEntry {
    pub name: String,
    /// Member usernames in file order, trimmed, empties dropped.
    pub members: Vec<String>,
}

impl GroupEntry {
    /// Members joined with `", "` for tabular rendering.
    pub fn members_joined(&self) -> String {
        self.members.join(", ")
    }
}
