//! Work item → calendar event mapping.
//!
//! Assignee extraction is a best-effort heuristic over the tracker's
//! `LastName, FirstName - suffix <email>` display format and falls back to
//! [`UNASSIGNED`] whenever the pattern does not match.

use chrono::{Days, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::CalendarConfig;
use crate::constants::{
    COLUMN_ASSIGNED_TO, COLUMN_ID, COLUMN_START_DATE, COLUMN_STATE, COLUMN_TAGS,
    COLUMN_TARGET_DATE, COLUMN_TITLE, COLUMN_WORK_ITEM_TYPE, TICKET_NOTE_TITLE, UNASSIGNED,
};
use crate::types::{CalendarEvent, ColorCategory, EventDetail, EventNote, WorkItem};

static ASSIGNEE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r",\s*(\w+)").expect("ASSIGNEE_REGEX should compile - this is a bug"));

/// Date layouts accepted for the start/target columns, tried in order.
const DATE_FORMATS: [&str; 3] = ["%m/%d/%Y", "%Y-%m-%d", "%Y/%m/%d"];

/// Map a work item to a calendar event.
///
/// Returns `None` when either date column is empty or unparseable. The
/// event's `end` is the target date plus one day.
pub fn map_to_event(item: &WorkItem, config: &CalendarConfig) -> Option<CalendarEvent> {
    let start_raw = item.get(COLUMN_START_DATE);
    let target_raw = item.get(COLUMN_TARGET_DATE);
    if start_raw.is_empty() || target_raw.is_empty() {
        return None;
    }

    let start = parse_calendar_date(start_raw)?;
    let end = parse_calendar_date(target_raw)?.checked_add_days(Days::new(1))?;

    let base = ColorCategory::from_state(item.get(COLUMN_STATE));
    let color_category = apply_tag_overrides(base, item.get(COLUMN_TAGS));

    let note = EventNote {
        title: TICKET_NOTE_TITLE.to_string(),
        status: item.get(COLUMN_WORK_ITEM_TYPE).to_string(),
        link: Some(work_item_link(&config.work_item_base_url, item.get(COLUMN_ID))),
    };

    Some(CalendarEvent::new(
        extract_assignee(item.get(COLUMN_ASSIGNED_TO)),
        item.get(COLUMN_TITLE),
        start,
        end,
        color_category,
        EventDetail { notes: vec![note] },
    ))
}

/// First word after the first comma, or [`UNASSIGNED`].
pub fn extract_assignee(assigned_to: &str) -> String {
    ASSIGNEE_REGEX
        .captures(assigned_to)
        .and_then(|caps| caps.get(1))
        .map_or_else(|| UNASSIGNED.to_string(), |m| m.as_str().to_string())
}

/// Tag overrides applied on top of the state-derived category.
///
/// `discussing` forces `Warning`, then `block` forces `Blocker`; when both
/// match, `Blocker` wins because it is applied last.
pub fn apply_tag_overrides(base: ColorCategory, tags: &str) -> ColorCategory {
    let tags = tags.to_lowercase();
    let mut category = base;
    if tags.contains("discussing") {
        category = ColorCategory::Warning;
    }
    if tags.contains("block") {
        category = ColorCategory::Blocker;
    }
    category
}

/// Parse a date-only value, ignoring any time-of-day suffix.
pub fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    let date_part = raw.trim().split(|c: char| c.is_whitespace() || c == 'T').next()?;
    DATE_FORMATS.iter().find_map(|format| NaiveDate::parse_from_str(date_part, format).ok())
}

fn work_item_link(base_url: &str, id: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(pairs: &[(&str, &str)]) -> WorkItem {
        pairs.iter().copied().collect()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn blocked_tag_wins_over_active_state() {
        let item = row(&[
            ("Assigned To", "Nguyen, Vincent - Contractor"),
            ("State", "Active"),
            ("Tags", "blocked,urgent"),
            ("Start Date", "8/1/2025"),
            ("Target Date", "8/1/2025"),
        ]);

        let event = map_to_event(&item, &CalendarConfig::default()).unwrap();

        assert_eq!(event.assignee, "Vincent");
        assert_eq!(event.color_category, ColorCategory::Blocker);
        assert_eq!(event.start, date(2025, 8, 1));
        assert_eq!(event.end, date(2025, 8, 2));
    }

    #[test]
    fn empty_target_date_drops_row() {
        let item = row(&[("Start Date", "8/1/2025"), ("Target Date", "")]);
        assert!(map_to_event(&item, &CalendarConfig::default()).is_none());

        let item = row(&[("Target Date", "8/1/2025")]);
        assert!(map_to_event(&item, &CalendarConfig::default()).is_none());
    }

    #[test]
    fn unparseable_date_drops_row() {
        let item = row(&[("Start Date", "someday"), ("Target Date", "8/1/2025")]);
        assert!(map_to_event(&item, &CalendarConfig::default()).is_none());
    }

    #[test]
    fn block_beats_discussing_when_both_present() {
        assert_eq!(
            apply_tag_overrides(ColorCategory::Done, "Discussing; Blocked"),
            ColorCategory::Blocker
        );
        assert_eq!(apply_tag_overrides(ColorCategory::Dev, "DISCUSSING"), ColorCategory::Warning);
        assert_eq!(apply_tag_overrides(ColorCategory::Qa, "Sprint 5"), ColorCategory::Qa);
    }

    #[test]
    fn assignee_falls_back_to_unassigned() {
        assert_eq!(extract_assignee("Vincent Nguyen"), UNASSIGNED);
        assert_eq!(extract_assignee(""), UNASSIGNED);
        assert_eq!(
            extract_assignee("Nguyen, Vincent - Contractor {PEP} <v@example.com>"),
            "Vincent"
        );
    }

    #[test]
    fn time_of_day_is_ignored() {
        assert_eq!(parse_calendar_date("8/12/2025 7:00:00 AM"), Some(date(2025, 8, 12)));
        assert_eq!(parse_calendar_date("2025-08-12T23:30:00Z"), Some(date(2025, 8, 12)));
        assert_eq!(parse_calendar_date("2025/08/12"), Some(date(2025, 8, 12)));
        assert_eq!(parse_calendar_date("13/45/2025"), None);
    }

    #[test]
    fn end_rolls_over_month_boundary() {
        let item = row(&[("Start Date", "8/30/2025"), ("Target Date", "8/31/2025")]);
        let event = map_to_event(&item, &CalendarConfig::default()).unwrap();
        assert_eq!(event.end, date(2025, 9, 1));
    }

    #[test]
    fn ticket_note_links_to_work_item() {
        let item = row(&[
            ("ID", "18540"),
            ("Work Item Type", "User Story"),
            ("Title", "[FE] GlobalSearch"),
            ("State", "New"),
            ("Start Date", "8/12/2025 7:00:00 AM"),
            ("Target Date", "8/15/2025 7:00:00 AM"),
        ]);
        let config = CalendarConfig { work_item_base_url: "https://tracker.test/edit/".into() };

        let event = map_to_event(&item, &config).unwrap();

        assert_eq!(event.title, "[FE] GlobalSearch");
        assert_eq!(event.color_category, ColorCategory::Dev);
        assert_eq!(event.detail.notes.len(), 1);
        let note = &event.detail.notes[0];
        assert_eq!(note.title, "Ticket");
        assert_eq!(note.status, "User Story");
        assert_eq!(note.link.as_deref(), Some("https://tracker.test/edit/18540"));
    }
}
