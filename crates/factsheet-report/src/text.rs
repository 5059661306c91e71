//! Plain-text rendering — a grid table on stdout with a reduced column set.

use crate::assemble::{ports_preview, HostRecordSet};
use comfy_table::{presets::UTF8_FULL, Attribute, Cell, ContentArrangement, Table};

const TEXT_COLUMNS: &[&str] = &[
    "IP",
    "Hostname",
    "Sistema Operativo",
    "CPU",
    "RAM (GB)",
    "Disco (GB)",
    "Tipo de Máquina",
    "Puertos",
];

/// Render the record set as a grid-lined table string.
///
/// `ports_limit` caps the Puertos cell at that many entries, appending
/// "+N more" when longer.
pub fn render(set: &HostRecordSet, ports_limit: usize) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(
        TEXT_COLUMNS
            .iter()
            .map(|label| Cell::new(label).add_attribute(Attribute::Bold))
            .collect::<Vec<_>>(),
    );

    for record in set.records() {
        table.add_row(vec![
            Cell::new(&record.ip),
            Cell::new(&record.hostname),
            Cell::new(&record.os),
            Cell::new(&record.cpu_model),
            Cell::new(record.ram_total_gb),
            Cell::new(format!("{:.2}", record.disk_total_gb)),
            Cell::new(record.machine.to_string()),
            Cell::new(ports_preview(record, ports_limit)),
        ]);
    }

    table.to_string()
}
