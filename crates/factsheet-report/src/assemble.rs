//! Record-set assembly — the single owned collection behind both renderers.
//!
//! The set is built once per invocation by the orchestration layer, sorted by
//! IP address string as a final deterministic step, and handed to the
//! renderers by reference. There is no module-level state.

use factsheet_core::types::DbEngines;
use factsheet_core::HostRecord;

/// Column labels for the inventory sheet, in fixed render order.
pub const INVENTORY_COLUMNS: &[&str] = &[
    "IP",
    "Hostname",
    "Sistema Operativo",
    "Kernel",
    "Arquitectura",
    "CPU",
    "Núcleos Físicos",
    "Núcleos Lógicos",
    "RAM Total (GB)",
    "RAM Usada (GB)",
    "RAM Libre (GB)",
    "Disco Total (GB)",
    "Disco Usado (GB)",
    "Disco Libre (GB)",
    "Disco(s)",
    "Tipo de Máquina",
    "Puertos",
    "MySQL",
    "PostgreSQL",
    "SQLServer",
    "Oracle",
    "MongoDB",
];

/// Column labels for the per-user sheet (one row per host-user pair).
pub const USER_COLUMNS: &[&str] = &["IP", "Hostname", "Usuario", "UID", "GID", "Shell", "Login"];

/// Column labels for the per-group sheet (one row per host-group pair).
pub const GROUP_COLUMNS: &[&str] = &["IP", "Hostname", "Grupo", "Miembros"];

/// One rendered cell. Renderers decide how to write each variant (the
/// spreadsheet keeps numbers numeric, the text table stringifies).
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Int(u64),
    Float(f64),
}

impl std::fmt::Display for CellValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CellValue::Text(s) => write!(f, "{s}"),
            CellValue::Int(n) => write!(f, "{n}"),
            CellValue::Float(x) => write!(f, "{x:.2}"),
        }
    }
}

/// The full collection of canonical host records for one batch run.
#[derive(Debug, Default)]
pub struct HostRecordSet {
    records: Vec<HostRecord>,
}

impl HostRecordSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: HostRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[HostRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Final deterministic ordering: plain string comparison on the IP field.
    pub fn sort_by_ip(&mut self) {
        self.records.sort_by(|a, b| a.ip.cmp(&b.ip));
    }

    /// Whether any host carried user records (drives the optional sheets).
    pub fn has_users(&self) -> bool {
        self.records.iter().any(|r| !r.users.is_empty())
    }

    pub fn has_groups(&self) -> bool {
        self.records.iter().any(|r| !r.groups.is_empty())
    }
}

/// One inventory row, cells in [`INVENTORY_COLUMNS`] order.
pub fn inventory_cells(record: &HostRecord) -> Vec<CellValue> {
    let mut cells = vec![
        CellValue::Text(record.ip.clone()),
        CellValue::Text(record.hostname.clone()),
        CellValue::Text(record.os.clone()),
        CellValue::Text(record.kernel.clone()),
        CellValue::Text(record.architecture.clone()),
        CellValue::Text(record.cpu_model.clone()),
        CellValue::Int(record.physical_cores),
        CellValue::Int(record.logical_cpus),
        CellValue::Int(record.ram_total_gb),
        CellValue::Int(record.ram_used_gb),
        CellValue::Int(record.ram_free_gb),
        CellValue::Float(record.disk_total_gb),
        CellValue::Float(record.disk_used_gb),
        CellValue::Float(record.disk_free_gb),
        CellValue::Text(record.disks.clone()),
        CellValue::Text(record.machine.to_string()),
        CellValue::Text(record.ports_joined()),
    ];
    for (_, active) in record.db_engines.labeled() {
        cells.push(CellValue::Text(DbEngines::label(active).to_string()));
    }
    cells
}

/// Ports joined for display, truncated to the first `limit` entries with a
/// "+N more" suffix when longer. An empty list yields `""`.
pub fn ports_preview(record: &HostRecord, limit: usize) -> String {
    if record.ports.len() <= limit {
        return record.ports_joined();
    }
    let shown = record.ports[..limit].join(", ");
    format!("{} +{} more", shown, record.ports.len() - limit)
}
