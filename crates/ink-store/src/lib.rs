// ABOUTME: Project persistence for inkgrid.
// ABOUTME: Key-value JSON store of projects and their page grids, keyed by id.

mod project;
mod store;

pub use project::{Page, PageId, Project, ProjectId, ProjectSummary};
pub use store::{ProjectStore, StoreError};
