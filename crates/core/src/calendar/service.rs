//! Work-item calendar service

use tracing::info;
use workdeck_domain::{map_to_event, parse_csv, CalendarConfig, CalendarEvent};

/// Turns tracker CSV exports into calendar events
#[derive(Debug, Clone, Default)]
pub struct WorkItemCalendar {
    config: CalendarConfig,
}

impl WorkItemCalendar {
    pub fn new(config: CalendarConfig) -> Self {
        Self { config }
    }

    /// Lazily map every dated row of `csv` to an event.
    ///
    /// Rows without both dates are skipped silently.
    pub fn events<'a>(&'a self, csv: &'a str) -> impl Iterator<Item = CalendarEvent> + 'a {
        parse_csv(csv).filter_map(move |row| map_to_event(&row, &self.config))
    }

    /// Collect all events, logging how many rows were skipped.
    pub fn load_events(&self, csv: &str) -> Vec<CalendarEvent> {
        let mut rows = 0usize;
        let events: Vec<CalendarEvent> = parse_csv(csv)
            .inspect(|_| rows += 1)
            .filter_map(|row| map_to_event(&row, &self.config))
            .collect();

        info!(rows, events = events.len(), skipped = rows - events.len(), "mapped work items");
        events
    }
}

#[cfg(test)]
mod tests {
    use workdeck_domain::ColorCategory;

    use super::*;

    const EXPORT: &str = "\
ID,Title,Assigned To,State,Tags,Start Date,Target Date
1,Alpha,\"Doe, Jane\",Active,,8/1/2025,8/3/2025
2,Beta,\"Roe, Rick\",Closed,,,
3,Gamma,\"Roe, Rick\",Resolved,block,8/2/2025,8/2/2025
";

    #[test]
    fn events_skip_undated_rows() {
        let calendar = WorkItemCalendar::default();
        let titles: Vec<String> = calendar.events(EXPORT).map(|event| event.title).collect();
        assert_eq!(titles, vec!["Alpha", "Gamma"]);
    }

    #[test]
    fn load_events_matches_lazy_sequence() {
        let calendar = WorkItemCalendar::default();
        let events = calendar.load_events(EXPORT);

        assert_eq!(events, calendar.events(EXPORT).collect::<Vec<_>>());
        assert_eq!(events[1].color_category, ColorCategory::Blocker);
    }

    #[test]
    fn deep_links_use_configured_base() {
        let calendar = WorkItemCalendar::new(CalendarConfig {
            work_item_base_url: "https://tracker.test/items".into(),
        });

        let event = calendar.events(EXPORT).next().unwrap();
        assert_eq!(event.detail.notes[0].link.as_deref(), Some("https://tracker.test/items/1"));
    }
}
