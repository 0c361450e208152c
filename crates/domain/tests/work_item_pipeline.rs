//! Integration tests for the CSV → calendar event pipeline
//!
//! Exercises the parser and mapper together against tracker-style exports.

use chrono::NaiveDate;
use workdeck_domain::{map_to_event, parse_csv, CalendarConfig, ColorCategory, WorkItem};

const TRACKER_EXPORT: &str = r#"
ID,Work Item Type,Title,Assigned To,State,Tags,Start Date,Target Date
"18540","User Story","[FE] GlobalSearch (Main Navigation) - Integration","Nguyen, Vincent - Contractor {PEP} <Vincent.Nguyen.Contractor@example.com>","New","Sprint 5","8/12/2025 7:00:00 AM","8/15/2025 7:00:00 AM"
"19113","User Story","[FE] [Visual QA] Brands Carousel: Bug fixing","Nguyen, Vincent - Contractor {PEP} <Vincent.Nguyen.Contractor@example.com>","New","Sprint 5",,
"19200","Bug","Footer links, social icons","Bui, Harvey <harvey@example.com>","Resolved","Discussing","8/4/2025","8/6/2025"
"19201","Task","Release checklist","","Closed","","2025-08-01","2025-08-01"
"#;

// ============================================================================
// Helpers
// ============================================================================

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

/// Serialize rows back to CSV using the given column order (no quoting).
fn write_csv(columns: &[&str], rows: &[WorkItem]) -> String {
    let mut out = columns.join(",");
    out.push('\n');
    for row in rows {
        let cells: Vec<&str> = columns.iter().map(|column| row.get(column)).collect();
        out.push_str(&cells.join(","));
        out.push('\n');
    }
    out
}

// ============================================================================
// Pipeline
// ============================================================================

#[test]
fn test_tracker_export_maps_dated_rows_only() {
    let config = CalendarConfig::default();
    let events: Vec<_> =
        parse_csv(TRACKER_EXPORT).filter_map(|row| map_to_event(&row, &config)).collect();

    assert_eq!(events.len(), 3, "undated row should be skipped silently");

    let search = &events[0];
    assert_eq!(search.assignee, "Vincent");
    assert_eq!(search.title, "[FE] GlobalSearch (Main Navigation) - Integration");
    assert_eq!(search.start, date(2025, 8, 12));
    assert_eq!(search.end, date(2025, 8, 16));
    assert_eq!(search.color_category, ColorCategory::Dev);
    assert_eq!(
        search.detail.notes[0].link.as_deref(),
        Some("https://dev.azure.com/PepsiCoIT2/CGF_PepsiCocom_Redesign/_workitems/edit/18540")
    );

    let footer = &events[1];
    assert_eq!(footer.assignee, "Harvey");
    assert_eq!(footer.title, "Footer links, social icons");
    assert_eq!(footer.color_category, ColorCategory::Warning);

    let release = &events[2];
    assert_eq!(release.assignee, "Unassigned");
    assert_eq!(release.color_category, ColorCategory::Done);
    assert_eq!(release.end, date(2025, 8, 2));
}

#[test]
fn test_every_event_ends_after_it_starts() {
    let config = CalendarConfig::default();
    for event in parse_csv(TRACKER_EXPORT).filter_map(|row| map_to_event(&row, &config)) {
        assert!(event.end > event.start, "{} has a non-positive span", event.title);
        assert!(!event.assignee.is_empty());
    }
}

#[test]
fn test_round_trip_reproduces_rows() {
    let input = "\
ID,Title,State,Start Date,Target Date
1,Write docs,Active,8/1/2025,8/2/2025
2,Fix bug,Resolved,,
3,Ship,Done,2025-08-03,2025-08-04
";
    let columns = ["ID", "Title", "State", "Start Date", "Target Date"];

    let first: Vec<WorkItem> = parse_csv(input).collect();
    let second: Vec<WorkItem> = parse_csv(&write_csv(&columns, &first)).collect();

    assert_eq!(first.len(), 3);
    assert_eq!(first, second);
}

#[test]
fn test_parser_is_usable_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|_| {
            std::thread::spawn(|| {
                let config = CalendarConfig::default();
                parse_csv(TRACKER_EXPORT).filter_map(|row| map_to_event(&row, &config)).count()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().expect("thread should not panic"), 3);
    }
}
