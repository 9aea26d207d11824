// ABOUTME: Org-mode outline model and the Todoist tree → outline conversion
// ABOUTME: Every item becomes a TODO headline, scheduled from its due date

use crate::model::TodoistDue;
use crate::tree::{TodoistTreeItem, TodoistTreeProject};
use crate::{Error, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime};

pub const TODO_KEYWORD: &str = "TODO";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrgHeadline {
    pub title: String,
    pub todo_state: Option<String>,
    pub scheduling: Option<NaiveDateTime>,
    pub sub_headlines: Vec<OrgHeadline>,
}

pub type OrgDocument = Vec<OrgHeadline>;

/// Converts the project trees into one top-level headline per project.
pub fn convert_to_org(tree: &[TodoistTreeProject<'_>]) -> Result<OrgDocument> {
    tree.iter().map(project_to_org_headline).collect()
}

fn project_to_org_headline(project: &TodoistTreeProject<'_>) -> Result<OrgHeadline> {
    Ok(OrgHeadline {
        title: project.project.name.clone(),
        todo_state: None,
        scheduling: None,
        sub_headlines: project
            .items
            .iter()
            .map(item_to_org_headline)
            .collect::<Result<_>>()?,
    })
}

// Completion state is not consulted: every item is TODO.
fn item_to_org_headline(node: &TodoistTreeItem<'_>) -> Result<OrgHeadline> {
    Ok(OrgHeadline {
        title: node.item.content.clone(),
        todo_state: Some(TODO_KEYWORD.to_string()),
        scheduling: node.item.due.as_ref().map(due_to_org).transpose()?,
        sub_headlines: node
            .sub_items
            .iter()
            .map(item_to_org_headline)
            .collect::<Result<_>>()?,
    })
}

/// Parses the due descriptor's ISO-8601 date or date-time.
///
/// A bare date is scheduled at midnight. Date and time may be separated by
/// `T` or a single space. A trailing `Z` or UTC offset is accepted and the
/// time is kept as written.
pub fn due_to_org(due: &TodoistDue) -> Result<NaiveDateTime> {
    let date = due.date.as_str();

    if !date.contains(['T', ' ']) {
        return NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .map(|d| d.and_time(chrono::NaiveTime::MIN))
            .map_err(|source| invalid_due(date, source));
    }

    let normalized = date.replacen(' ', "T", 1);

    if let Ok(dt) = DateTime::parse_from_rfc3339(&normalized) {
        return Ok(dt.naive_local());
    }

    NaiveDateTime::parse_from_str(&normalized, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(&normalized, "%Y-%m-%dT%H:%M"))
        .map_err(|source| invalid_due(date, source))
}

fn invalid_due(date: &str, source: chrono::ParseError) -> Error {
    Error::InvalidDue {
        date: date.to_string(),
        source,
    }
}
