//! Assignee filtering for rendered calendars

use std::collections::BTreeSet;

use workdeck_domain::CalendarEvent;

/// Sorted, de-duplicated assignees across `events`.
pub fn assignees(events: &[CalendarEvent]) -> Vec<String> {
    events
        .iter()
        .map(|event| event.assignee.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Events whose assignee is in `selected`; an empty selection keeps all.
pub fn filter_by_assignees<'a, S>(events: &'a [CalendarEvent], selected: &[S]) -> Vec<&'a CalendarEvent>
where
    S: AsRef<str>,
{
    if selected.is_empty() {
        return events.iter().collect();
    }

    events
        .iter()
        .filter(|event| selected.iter().any(|name| name.as_ref() == event.assignee))
        .collect()
}
