//! User/group extractor — structured records from the `usuarios` text block.
//!
//! Some collectors embed a two-section plain-text report in the fact
//! document: a system-users section followed by a system-groups section, each
//! introduced by a header line containing a marker phrase. The scan is a
//! single forward pass with a current-section state; data lines before any
//! marker are ignored, and marker lines are never parsed as data.
//!
//! The interface is deliberately narrow (lines in, records out) so the
//! upstream text format can be swapped for structured JSON without touching
//! the normalizer.

use crate::config::UsersConfig;
use crate::types::{GroupEntry, UserEntry};
use regex::Regex;
use std::sync::LazyLock;
use tracing::warn;

/// Marker phrase introducing the users section.
pub const USERS_MARKER: &str = "Usuarios del sistema";
/// Marker phrase introducing the groups section.
pub const GROUPS_MARKER: &str = "Grupos del sistema";

/// `<name> (UID: <uid>, GID: <gid>, Shell: <shell>)`
static USER_LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\S+) \(UID: (\d+), GID: (\d+), Shell: (.+)\)$")
        .expect("user line regex must compile")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    None,
    Users,
    Groups,
}

/// Scan the text block and return the structured user and group records.
///
/// Malformed user lines are dropped with a diagnostic rather than passed
/// through; group lines with fewer than 4 colon-separated fields pass through
/// as an opaque group label with no members.
pub fn extract(lines: &[String], cfg: &UsersConfig) -> (Vec<UserEntry>, Vec<GroupEntry>) {
    let mut users = Vec::new();
    let mut groups = Vec::new();
    let mut section = Section::None;

    for raw in lines {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        if line.contains(USERS_MARKER) {
            section = Section::Users;
            continue;
        }
        if line.contains(GROUPS_MARKER) {
            section = Section::Groups;
            continue;
        }

        match section {
            Section::None => {}
            Section::Users => match USER_LINE_RE.captures(line) {
                Some(caps) => {
                    let shell = caps[4].to_string();
                    let login = !cfg.nologin_shells.iter().any(|s| s == &shell);
                    users.push(UserEntry {
                        name: caps[1].to_string(),
                        uid: caps[2].to_string(),
                        gid: caps[3].to_string(),
                        shell,
                        login,
                    });
                }
                None => warn!(line, "dropping malformed user line"),
            },
            Section::Groups => {
                let fields: Vec<&str> = line.splitn(4, ':').collect();
                if fields.len() == 4 {
                    let members = fields[3]
                        .split(',')
                        .map(str::trim)
                        .filter(|m| !m.is_empty())
                        .map(str::to_string)
                        .collect();
                    groups.push(GroupEntry { name: fields[0].to_string(), members });
                } else {
                    // Opaque label: keep the whole line so nothing is lost.
                    groups.push(GroupEntry { name: line.to_string(), members: Vec::new() });
                }
            }
        }
    }

    (users, groups)
}
