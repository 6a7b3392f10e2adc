//! Snapshot mode execution
//!
//! Prints one table page and the quote list as plain text, or the page as
//! JSON, and exits.

use super::setup::build_state;
use crate::config::DashboardSettings;
use crate::data::{ProjectRow, QUOTES};
use crate::router::{NAV_LINKS, Router};
use crate::ui::dashboard::components::{hero, navbar};
use crate::ui::dashboard::utils::progress_bar;
use crate::widgets::DataTable;
use serde::Serialize;
use std::error::Error;

/// A single table page as written by `snapshot --json`.
#[derive(Debug, Serialize)]
pub struct SnapshotPage<'a> {
    pub page: usize,
    pub total_pages: usize,
    pub page_size: usize,
    pub total_rows: usize,
    pub rows: &'a [ProjectRow],
}

impl<'a> SnapshotPage<'a> {
    pub fn new(table: &'a DataTable) -> Self {
        Self {
            page: table.page(),
            total_pages: table.total_pages(),
            page_size: table.page_size(),
            total_rows: table.len(),
            rows: table.current_slice(),
        }
    }
}

/// Navigation line with the active link in brackets.
pub fn render_navigation(router: &Router) -> String {
    let links: Vec<String> = NAV_LINKS
        .iter()
        .map(|link| {
            if router.is_active(link) {
                format!("[{}]", link.label)
            } else {
                link.label.to_string()
            }
        })
        .collect();
    format!("{}  {}", navbar::BRAND, links.join("  "))
}

/// Plain-text rendering of the current table page followed by every quote.
pub fn render_snapshot(router: &Router, table: &DataTable) -> String {
    let mut lines = vec![
        render_navigation(router),
        String::new(),
        hero::TITLE.to_string(),
        String::new(),
        "Active Projects".to_string(),
        format!(
            "{:<5} {:<14} {:<8} {:<16} {}",
            "#", "Name", "Owner", "Progress", "Status"
        ),
    ];
    lines.extend(table.current_slice().iter().map(|row| {
        format!(
            "{:<5} {:<14} {:<8} {:<16} {}",
            row.id,
            row.name,
            row.owner,
            progress_bar(row.progress, 10),
            row.status.label()
        )
    }));
    lines.push(format!(
        "Prev  Page {} of {}  Next",
        table.page(),
        table.total_pages()
    ));
    lines.push(String::new());
    lines.push("Wisdom & Quotes".to_string());
    lines.extend(
        QUOTES
            .iter()
            .map(|quote| format!("  {}. “{}” — {}", quote.id, quote.text, quote.author)),
    );

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Runs snapshot mode: print page `page` (clamped) and exit.
pub fn run_snapshot_mode(
    settings: &DashboardSettings,
    page: usize,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    let mut state = build_state(settings)?;
    let Some(home) = state.home.as_mut() else {
        return Ok(());
    };
    home.table.go_to(page);

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&SnapshotPage::new(&home.table))?
        );
    } else {
        print!("{}", render_snapshot(&state.router, &home.table));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::generate_projects;
    use crate::router::Route;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::sync::Arc;

    fn table(count: usize) -> DataTable {
        let rows: Arc<[ProjectRow]> =
            generate_projects(count, &mut StdRng::seed_from_u64(2)).into();
        DataTable::with_page_size(rows, 10).unwrap()
    }

    #[test]
    fn test_snapshot_last_page() {
        let mut table = table(200);
        table.go_to(20);
        let text = render_snapshot(&Router::new(Route::Home), &table);

        assert!(text.starts_with("MyBrand  [Home]  About"));
        assert!(text.contains("Prev  Page 20 of 20  Next"));
        assert!(text.contains("Project 191"));
        assert!(text.contains("Project 200"));
        assert!(!text.contains("Project 190 "));
        assert!(text.contains("“Done is better than perfect.” — Sheryl Sandberg"));
    }

    #[test]
    fn test_snapshot_line_layout() {
        let text = render_snapshot(&Router::new(Route::Home), &table(3));
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[4], "Active Projects");
        assert!(lines[5].starts_with("#     Name"));
        assert!(lines[6].starts_with("1     Project 1 "));
        assert_eq!(lines[9], "Prev  Page 1 of 1  Next");
        assert_eq!(lines.len(), 12 + QUOTES.len());
        assert!(text.ends_with("— Sheryl Sandberg\n"));
    }

    #[test]
    fn test_snapshot_json_page() {
        let mut table = table(25);
        table.go_to(3);
        let json = serde_json::to_value(SnapshotPage::new(&table)).unwrap();

        assert_eq!(json["page"], 3);
        assert_eq!(json["total_pages"], 3);
        assert_eq!(json["total_rows"], 25);
        assert_eq!(json["rows"].as_array().unwrap().len(), 5);
        assert_eq!(json["rows"][0]["id"], 21);
        assert_eq!(json["rows"][0]["status"], "completed");
    }
}
