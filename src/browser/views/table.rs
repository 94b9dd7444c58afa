//! # Table Composition
//!
//! Turns a [`RenderSnapshot`] into plain text lines: title, filter selector,
//! table and page strip. The terminal renderer styles these lines; print mode
//! writes them as they are.

use super::formatting::UserRow;
use crate::browser::models::{DerivedView, FilterCriterion, LoadState, SortState};
use crate::browser::view_models::RenderSnapshot;

pub const TITLE: &str = "User List Page";
pub const LOADING_TEXT: &str = "Loading...";
pub const EMPTY_TEXT: &str = "No users to display";

const COLUMN_SEPARATOR: &str = " | ";
/// Both arrows: column can be sorted but is not
const SORTABLE: &str = "↑↓";

/// Header titles, with the active sort direction marked
pub fn column_titles(sort: SortState) -> [String; 6] {
    let id_marker = match sort {
        SortState::ByIdentifierDescending => "↓",
        _ => SORTABLE,
    };
    let name_marker = match sort {
        SortState::ByNameAscending => "↑",
        _ => SORTABLE,
    };

    [
        format!("ID {id_marker}"),
        "Image".to_string(),
        format!("Full Name {name_marker}"),
        "Age".to_string(),
        "Gender".to_string(),
        "Country".to_string(),
    ]
}

/// Gender selector with the active option bracketed
pub fn filter_line(active: FilterCriterion) -> String {
    let options: Vec<String> = FilterCriterion::ALL
        .iter()
        .map(|criterion| {
            if *criterion == active {
                format!("[{}]", criterion.label())
            } else {
                format!(" {} ", criterion.label())
            }
        })
        .collect();
    format!("Sort By Gender: {}", options.join(" "))
}

/// Page buttons `1..=page_count`, the active one bracketed; empty with no pages
pub fn page_strip(view: &DerivedView) -> String {
    view.page_buttons()
        .map(|n| {
            if n == view.current_page {
                format!("[{n}]")
            } else {
                format!(" {n} ")
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Header, separator and one line per row, columns padded to their widest cell
pub fn table_lines(view: &DerivedView) -> Vec<String> {
    let titles = column_titles(view.sort);
    let rows: Vec<UserRow> = view.rows.iter().map(UserRow::from).collect();

    let mut widths: [usize; 6] = titles.each_ref().map(|t| t.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.cells()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(join_cells(titles.iter().map(String::as_str), &widths));
    lines.push(
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("-+-"),
    );
    for row in &rows {
        lines.push(join_cells(row.cells().into_iter(), &widths));
    }
    lines
}

fn join_cells<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize; 6]) -> String {
    cells
        .zip(widths)
        .map(|(cell, width)| {
            let pad = width.saturating_sub(cell.chars().count());
            format!("{cell}{}", " ".repeat(pad))
        })
        .collect::<Vec<_>>()
        .join(COLUMN_SEPARATOR)
        .trim_end()
        .to_string()
}

/// Body lines between the filter selector and the page strip
pub fn body_lines(snapshot: &RenderSnapshot) -> Vec<String> {
    match &snapshot.load_state {
        LoadState::Idle | LoadState::Loading => vec![LOADING_TEXT.to_string()],
        LoadState::Failed { message } => vec![format!("Failed to load users: {message}")],
        LoadState::Ready => {
            let mut lines = table_lines(&snapshot.view);
            if snapshot.view.is_empty() {
                lines.push(EMPTY_TEXT.to_string());
            }
            lines
        }
    }
}

/// One-line summary for the status bar
pub fn status_text(snapshot: &RenderSnapshot) -> String {
    match &snapshot.load_state {
        LoadState::Idle | LoadState::Loading => {
            if snapshot.source_label.is_empty() {
                "Loading users...".to_string()
            } else {
                format!("Loading users from {}...", snapshot.source_label)
            }
        }
        LoadState::Failed { message } => format!("Error: {message}"),
        LoadState::Ready => {
            let view = &snapshot.view;
            format!(
                "{} of {} users | page {}/{} | filter {} | sort {}",
                view.filtered_count,
                snapshot.total_users,
                view.current_page,
                view.page_count.max(1),
                view.filter,
                view.sort
            )
        }
    }
}

/// Whole screen as plain text, for non-interactive output
pub fn compose_plain(snapshot: &RenderSnapshot) -> String {
    let mut lines = vec![
        TITLE.to_string(),
        filter_line(snapshot.view.filter),
        String::new(),
    ];
    lines.extend(body_lines(snapshot));

    if snapshot.shows_table() {
        let strip = page_strip(&snapshot.view);
        if !strip.is_empty() {
            lines.push(String::new());
            lines.push(format!("Pages: {strip}"));
        }
    }

    let mut text = lines.join("\n");
    text.push('\n');
    text
}
