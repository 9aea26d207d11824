// ABOUTME: Writes an org outline as plain text, one heading per line
// ABOUTME: Rewrites markdown links and emits SCHEDULED lines for due dates

use crate::org::{OrgDocument, OrgHeadline};
use chrono::{NaiveDateTime, Timelike};
use once_cell::sync::Lazy;
use regex::Regex;
use std::io::{self, Write};

static MARKDOWN_LINK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^]]+)\]\(([^)]+)\)").expect("valid markdown link regex"));

/// Rewrites every `[label](url)` into org's `[[url][label]]`.
pub fn convert_org_title(title: &str) -> String {
    MARKDOWN_LINK_RE
        .replace_all(title, "[[$2][$1]]")
        .into_owned()
}

fn scheduling_line(when: &NaiveDateTime) -> String {
    if when.hour() == 0 && when.minute() == 0 {
        format!("SCHEDULED: <{}>", when.format("%Y-%m-%d"))
    } else {
        format!("SCHEDULED: <{}>", when.format("%Y-%m-%d %H:%M"))
    }
}

fn write_headline<W: Write>(out: &mut W, depth: usize, headline: &OrgHeadline) -> io::Result<()> {
    let stars = "*".repeat(depth);
    let keyword = headline
        .todo_state
        .as_deref()
        .map(|state| format!("{} ", state))
        .unwrap_or_default();
    writeln!(
        out,
        "{} {}{}",
        stars,
        keyword,
        convert_org_title(&headline.title)
    )?;

    if let Some(when) = &headline.scheduling {
        writeln!(out, "{}", scheduling_line(when))?;
    }

    for sub in &headline.sub_headlines {
        write_headline(out, depth + 1, sub)?;
    }
    Ok(())
}

/// Writes the document depth-first, top-level headlines at depth one.
pub fn write_org<W: Write>(out: &mut W, doc: &OrgDocument) -> io::Result<()> {
    for headline in doc {
        write_headline(out, 1, headline)?;
    }
    Ok(())
}

#[cfg(test)]
pub(crate) fn render_org(doc: &OrgDocument) -> String {
    let mut buf = Vec::new();
    write_org(&mut buf, doc).unwrap();
    String::from_utf8(buf).unwrap()
}


#[cfg(test)]
mod snapshot_tests {
    use super::*;
    use crate::model::TodoistState;
    use crate::org::convert_to_org;
    use crate::tree::build_todoist_tree;
    use crate::tree::fixtures::{due, item, project};

    #[test]
    fn test_org_output_snapshot() {
        let mut dentist = item(11, 1, None, "Call the dentist");
        dentist.due = Some(due("2024-03-01"));
        let mut standup = item(21, 2, None, "Prepare standup, see [notes](https://example.com/notes)");
        standup.due = Some(due("2024-03-04T09:15:00"));
        let mut deleted = item(22, 2, None, "Old idea");
        deleted.is_deleted = true;

        let state = TodoistState {
            projects: vec![project(1, "Personal"), project(2, "Work"), project(3, "Someday")],
            items: vec![
                dentist,
                item(12, 1, Some(11), "Find the insurance card"),
                item(13, 1, Some(12), "Check the drawer"),
                standup,
                deleted,
                item(23, 2, None, "Review [PR](https://example.com/pr/1) and [issue](https://example.com/i/2)"),
            ],
        };

        let doc = convert_to_org(&build_todoist_tree(&state)).unwrap();
        insta::assert_snapshot!(render_org(&doc));
    }
}
