//! Spreadsheet rendering — one styled table per sheet.
//!
//! The "Inventario" sheet always exists; "Usuarios" and "Grupos" sheets are
//! added only when at least one host carried user/group records. Each sheet
//! is a banded worksheet table with autofitted columns.

use crate::assemble::{
    inventory_cells, CellValue, HostRecordSet, GROUP_COLUMNS, INVENTORY_COLUMNS, USER_COLUMNS,
};
use crate::ReportError;
use rust_xlsxwriter::{Table, TableColumn, TableStyle, Workbook, Worksheet};
use std::path::Path;
use tracing::info;

/// Write the workbook to `path`. Write failures propagate fatally.
pub fn write_workbook(path: &Path, set: &HostRecordSet) -> Result<(), ReportError> {
    let mut workbook = Workbook::new();

    write_inventory(workbook.add_worksheet(), set)?;
    if set.has_users() {
        write_users(workbook.add_worksheet(), set)?;
    }
    if set.has_groups() {
        write_groups(workbook.add_worksheet(), set)?;
    }

    workbook.save(path)?;
    info!(path = %path.display(), hosts = set.len(), "spreadsheet written");
    Ok(())
}

fn write_inventory(sheet: &mut Worksheet, set: &HostRecordSet) -> Result<(), ReportError> {
    sheet.set_name("Inventario")?;
    for (i, record) in set.records().iter().enumerate() {
        let row = (i + 1) as u32;
        for (col, cell) in inventory_cells(record).iter().enumerate() {
            write_cell(sheet, row, col as u16, cell)?;
        }
    }
    add_table(sheet, INVENTORY_COLUMNS, set.len())?;
    Ok(())
}

/// One row per host-user pair.
fn write_users(sheet: &mut Worksheet, set: &HostRecordSet) -> Result<(), ReportError> {
    sheet.set_name("Usuarios")?;
    let mut row = 0u32;
    for record in set.records() {
        for user in &record.users {
            row += 1;
            sheet
                .write_string(row, 0, &record.ip)?
                .write_string(row, 1, &record.hostname)?
                .write_string(row, 2, &user.name)?
                .write_string(row, 3, &user.uid)?
                .write_string(row, 4, &user.gid)?
                .write_string(row, 5, &user.shell)?
                .write_string(row, 6, user.login_label())?;
        }
    }
    add_table(sheet, USER_COLUMNS, row as usize)?;
    Ok(())
}

/// One row per host-group pair.
fn write_groups(sheet: &mut Worksheet, set: &HostRecordSet) -> Result<(), ReportError> {
    sheet.set_name("Grupos")?;
    let mut row = 0u32;
    for record in set.records() {
        for group in &record.groups {
            row += 1;
            sheet
                .write_string(row, 0, &record.ip)?
                .write_string(row, 1, &record.hostname)?
                .write_string(row, 2, &group.name)?
                .write_string(row, 3, group.members_joined())?;
        }
    }
    add_table(sheet, GROUP_COLUMNS, row as usize)?;
    Ok(())
}

fn write_cell(sheet: &mut Worksheet, row: u32, col: u16, cell: &CellValue) -> Result<(), ReportError> {
    match cell {
        CellValue::Text(s) => sheet.write_string(row, col, s)?,
        CellValue::Int(n) => sheet.write_number(row, col, *n as f64)?,
        CellValue::Float(x) => sheet.write_number(row, col, *x)?,
    };
    Ok(())
}

/// Wrap the written range in a banded table (the table writes the header row
/// itself) and autofit column widths to content.
fn add_table(sheet: &mut Worksheet, columns: &[&str], rows: usize) -> Result<(), ReportError> {
    let table_columns: Vec<TableColumn> = columns
        .iter()
        .map(|label| TableColumn::new().set_header(*label))
        .collect();
    let table = Table::new()
        .set_columns(&table_columns)
        .set_banded_rows(true)
        .set_style(TableStyle::Medium9);
    sheet.add_table(0, 0, rows.max(1) as u32, (columns.len() - 1) as u16, &table)?;
    sheet.autofit();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use factsheet_core::{GroupEntry, HostRecord, MachineKind, UserEntry};

    fn record(ip: &str) -> HostRecord {
        HostRecord {
            ip: ip.to_string(),
            hostname: "host".into(),
            os: "Debian 12".into(),
            kernel: "6.1.0".into(),
            architecture: "x86_64".into(),
            cpu_model: "Xeon".into(),
            physical_cores: 4,
            logical_cpus: 8,
            ram_total_gb: 16,
            ram_used_gb: 10,
            ram_free_gb: 6,
            disk_total_gb: 100.0,
            disk_used_gb: 60.0,
            disk_free_gb: 40.0,
            disks: "sda: 100 GB".into(),
            machine: MachineKind::Physical,
            ports: vec!["22".into()],
            db_engines: Default::default(),
            users: vec![],
            groups: vec![],
        }
    }

    #[test]
    fn writes_inventory_only_workbook() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventario.xlsx");

        let mut set = HostRecordSet::new();
        set.push(record("10.0.0.1"));
        write_workbook(&path, &set).unwrap();

        assert!(path.exists());
        assert!(std::fs::metadata(&path).unwrap().len() > 0);
    }

    #[test]
    fn writes_user_and_group_sheets_when_present() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventario.xlsx");

        let mut rec = record("10.0.0.1");
        rec.users.push(UserEntry {
            name: "alice".into(),
            uid: "1000".into(),
            gid: "1000".into(),
            shell: "/bin/bash".into(),
            login: true,
        });
        rec.groups.push(GroupEntry { name: "sudo".into(), members: vec!["alice".into()] });

        let mut set = HostRecordSet::new();
        set.push(rec);
        write_workbook(&path, &set).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn unwritable_path_is_an_error() {
        let path = Path::new("/nonexistent-dir/inventario.xlsx");
        let mut set = HostRecordSet::new();
        set.push(record("10.0.0.1"));
        assert!(write_workbook(path, &set).is_err());
    }
}
