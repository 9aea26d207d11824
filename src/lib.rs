// ABOUTME: Public library API for the Todoist → org-mode exporter
// ABOUTME: Re-exports core modules for external use

pub mod api;
pub mod auth;
pub mod cli;
pub mod error;
pub mod model;
pub mod org;
pub mod render;
pub mod tree;

pub use error::{Error, Result};
pub use model::{TodoistDue, TodoistItem, TodoistProject, TodoistState};
pub use org::{OrgDocument, OrgHeadline};
