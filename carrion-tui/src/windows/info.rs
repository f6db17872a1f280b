//! Map metadata as shown in log and detail panes.

use termnav::{SelectOptions, Surface, TextBox};

use crate::library::MapRecord;

pub const MAP_NAME: &str = "Map: ";
pub const VERSION: &str = "Version: ";
pub const AUTHOR: &str = "Author: ";
pub const STARTUP_LEVEL: &str = "Startup Level: ";
pub const IS_WIP: &str = "Work in progress: ";
pub const DESCRIPTION: &str = "Description: ";

const SEPARATOR: &str = " | ";
const NO_VERSION: &str = "-";
const NO_AUTHOR: &str = "Unknown";
const NO_STARTUP_LEVEL: &str = "-not set-";
const ISSUE_MARKER: &str = "[!] ";

pub const SHOW_ISSUES: &str = "Show Issues";

fn or_placeholder<'a>(value: &'a Option<String>, placeholder: &'a str) -> &'a str {
    match value.as_deref() {
        Some(text) if !text.is_empty() => text,
        _ => placeholder,
    }
}

pub fn version_line(map: &MapRecord) -> String {
    format!("{}{}", VERSION, or_placeholder(&map.version, NO_VERSION))
}

pub fn author_line(map: &MapRecord) -> String {
    format!("{}{}", AUTHOR, or_placeholder(&map.author, NO_AUTHOR))
}

pub fn startup_level_line(map: &MapRecord) -> String {
    format!("{}{}", STARTUP_LEVEL, or_placeholder(&map.startup_level, NO_STARTUP_LEVEL))
}

/// One-glance summary for the log region: name, version and author on one
/// line, the short description, then as many issues as fit.
pub fn write_short_info(log: &mut TextBox, map: &MapRecord, surface: &mut dyn Surface) {
    log.clear_content(surface);

    let mut first = format!("{}{}", MAP_NAME, map.name);
    if let Some(version) = &map.version {
        first.push_str(SEPARATOR);
        first.push_str(VERSION);
        first.push_str(version);
    }
    if let Some(author) = &map.author {
        first.push_str(SEPARATOR);
        first.push_str(AUTHOR);
        first.push_str(author);
    }
    log.write_line(first, surface);

    if let Some(description) = &map.short_description {
        log.write_line(format!("{}{}", DESCRIPTION, description), surface);
    }

    write_issues(log, map, surface);
}

/// Full metadata for a detail pane. The long description is word-wrapped
/// into whatever rows remain.
pub fn write_long_info(pane: &mut TextBox, map: &MapRecord, surface: &mut dyn Surface) {
    pane.clear_content(surface);
    pane.write_line(format!("{}{}", MAP_NAME, map.name), surface);
    pane.write_line(version_line(map), surface);
    pane.write_line(author_line(map), surface);
    pane.write_line(startup_level_line(map), surface);

    match map.long_description.as_deref() {
        Some(description) if !description.is_empty() => {
            pane.write_line(DESCRIPTION, surface);
            pane.write_wrapped(description, surface);
        }
        _ => pane.write_line(DESCRIPTION, surface),
    }
}

/// One issue per row. When they do not all fit, the last free row counts
/// the rest.
pub fn write_issues(log: &mut TextBox, map: &MapRecord, surface: &mut dyn Surface) {
    let total = map.issues.len();
    for (index, issue) in map.issues.iter().enumerate() {
        let left = total - index;
        if log.remaining_free_lines() > 1 || left == 1 {
            log.write_line(format!("{}{}", ISSUE_MARKER, issue), surface);
        } else {
            log.write_line(format!("{}{} more issues...", ISSUE_MARKER, left), surface);
            break;
        }
    }
}

/// Choices offered for a map: the action alone, or the action plus
/// "Show Issues" (preselected) when the map has problems.
pub fn actions_for(action: &'static str, map: &MapRecord) -> (Vec<&'static str>, SelectOptions) {
    if map.is_valid() {
        (vec![action], SelectOptions::cancellable())
    } else {
        (vec![action, SHOW_ISSUES], SelectOptions::cancellable().with_index(1))
    }
}
