//! Work items and the calendar events derived from them

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single parsed CSV row keyed by header name.
///
/// Unvalidated: any column may be absent or empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkItem {
    fields: BTreeMap<String, String>,
}

impl WorkItem {
    /// Value for `column`, or `""` when the column is absent.
    pub fn get(&self, column: &str) -> &str {
        self.fields.get(column).map_or("", String::as_str)
    }
}

impl<K, V> FromIterator<(K, V)> for WorkItem
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self { fields: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect() }
    }
}

/// Display category of a calendar event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorCategory {
    Dev,
    Qa,
    Blocker,
    Warning,
    Done,
}

impl ColorCategory {
    /// Base category for a work-item state. Unknown states map to `Warning`.
    pub fn from_state(state: &str) -> Self {
        match state.trim().to_lowercase().as_str() {
            "new" | "active" | "in progress" => Self::Dev,
            "resolved" => Self::Qa,
            "closed" | "completed" | "done" => Self::Done,
            _ => Self::Warning,
        }
    }

    /// Palette colour used by the calendar renderer.
    pub const fn color(self) -> &'static str {
        match self {
            Self::Dev => "#5cb85c",
            Self::Qa => "lightgreen",
            Self::Blocker => "#ff00008f",
            Self::Warning => "#baba18",
            Self::Done => "#2577c8",
        }
    }
}

/// One line in an event's detail panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventNote {
    pub title: String,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDetail {
    pub notes: Vec<EventNote>,
}

/// A renderable calendar record derived from a work item.
///
/// `end` is exclusive: one day past the work item's target date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub assignee: String,
    pub title: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub color_category: ColorCategory,
    pub color: String,
    pub detail: EventDetail,
}

impl CalendarEvent {
    pub fn new(
        assignee: impl Into<String>,
        title: impl Into<String>,
        start: NaiveDate,
        end: NaiveDate,
        color_category: ColorCategory,
        detail: EventDetail,
    ) -> Self {
        Self {
            assignee: assignee.into(),
            title: title.into(),
            start,
            end,
            color_category,
            color: color_category.color().to_string(),
            detail,
        }
    }
}
