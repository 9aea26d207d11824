// ABOUTME: Rebuilds the project → item → sub-item tree from the flat sync state
// ABOUTME: Also renders the plain root-item listing used for debugging

use crate::model::{TodoistId, TodoistItem, TodoistProject, TodoistState};
use std::collections::HashMap;
use std::io::{self, Write};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct TodoistTreeItem<'a> {
    pub item: &'a TodoistItem,
    pub sub_items: Vec<TodoistTreeItem<'a>>,
}

#[derive(Debug, Clone)]
pub struct TodoistTreeProject<'a> {
    pub project: &'a TodoistProject,
    pub items: Vec<TodoistTreeItem<'a>>,
}

pub type TodoistTree<'a> = Vec<TodoistTreeProject<'a>>;

/// Children of every parent id, in the order they appear in the flat list.
struct ChildIndex<'a> {
    by_parent: HashMap<&'a TodoistId, Vec<&'a TodoistItem>>,
}

impl<'a> ChildIndex<'a> {
    fn new(items: &'a [TodoistItem]) -> Self {
        let mut by_parent: HashMap<&TodoistId, Vec<&TodoistItem>> = HashMap::new();
        for item in items {
            if let Some(parent_id) = &item.parent_id {
                by_parent.entry(parent_id).or_default().push(item);
            }
        }
        ChildIndex { by_parent }
    }

    fn children_of(&self, id: &TodoistId) -> &[&'a TodoistItem] {
        self.by_parent.get(id).map(Vec::as_slice).unwrap_or_default()
    }
}

/// A root item belongs to the project, has no parent, and is neither deleted
/// nor archived.
fn is_root_of(item: &TodoistItem, project: &TodoistProject) -> bool {
    item.project_id == project.id
        && item.parent_id.is_none()
        && !item.is_deleted
        && !item.in_history
}

/// Builds one tree per project, in the state's project order.
///
/// Only root selection looks at the deleted/history flags. Every descendant
/// of a selected root is attached, whatever its own flags say.
pub fn build_todoist_tree(state: &TodoistState) -> TodoistTree<'_> {
    let index = ChildIndex::new(&state.items);

    state
        .projects
        .iter()
        .map(|project| {
            let items: Vec<_> = state
                .items
                .iter()
                .filter(|item| is_root_of(item, project))
                .map(|item| build_item_tree(&index, item))
                .collect();
            debug!(project = %project.name, roots = items.len(), "built project tree");
            TodoistTreeProject { project, items }
        })
        .collect()
}

/// Recursion depth equals the longest parent chain in the data; the service
/// caps sub-task nesting at a handful of levels.
fn build_item_tree<'a>(index: &ChildIndex<'a>, item: &'a TodoistItem) -> TodoistTreeItem<'a> {
    TodoistTreeItem {
        item,
        sub_items: index
            .children_of(&item.id)
            .iter()
            .map(|&child| build_item_tree(index, child))
            .collect(),
    }
}

/// Writes the content of every project's root items, indented by two spaces.
pub fn write_root_items<W: Write>(out: &mut W, tree: &[TodoistTreeProject<'_>]) -> io::Result<()> {
    for project in tree {
        for root in &project.items {
            writeln!(out, "  {}", root.item.content)?;
        }
    }
    Ok(())
}
