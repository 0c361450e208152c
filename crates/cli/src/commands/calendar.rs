use std::path::Path;

use anyhow::{Context, Result};
use workdeck_core::{assignees, filter_by_assignees, WorkItemCalendar};
use workdeck_domain::CalendarConfig;

pub fn run(
    csv_path: &Path,
    selected: &[String],
    list_assignees: bool,
    config: &CalendarConfig,
) -> Result<()> {
    let text = std::fs::read_to_string(csv_path)
        .with_context(|| format!("failed to read {}", csv_path.display()))?;

    println!("{}", render(&text, selected, list_assignees, config)?);
    Ok(())
}

fn render(
    csv: &str,
    selected: &[String],
    list_assignees: bool,
    config: &CalendarConfig,
) -> Result<String> {
    let events = WorkItemCalendar::new(config.clone()).load_events(csv);

    if list_assignees {
        return Ok(assignees(&events).join("\n"));
    }

    let visible = filter_by_assignees(&events, selected);
    Ok(serde_json::to_string_pretty(&visible)?)
}
