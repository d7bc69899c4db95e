// ABOUTME: Project and page types: the document a grid belongs to.
// ABOUTME: A project is an ordered set of pages, each owning one panel grid.

use ink_grid::GridLayout;
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

pub type ProjectId = Uuid;
pub type PageId = Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub pages: Vec<Page>,
    /// Unix seconds
    pub created_at: u64,
    pub updated_at: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub id: PageId,
    pub name: String,
    pub grid: GridLayout,
}

/// Listing entry: everything needed to show a project picker without
/// loading full page grids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectSummary {
    pub id: ProjectId,
    pub title: String,
    pub page_count: usize,
    pub updated_at: u64,
}

impl Project {
    /// A new project with one empty page.
    pub fn new(title: impl Into<String>) -> Self {
        let now = unix_now();
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            pages: vec![Page::new("Page 1")],
            created_at: now,
            updated_at: now,
        }
    }

    /// Append an empty page named after its position.
    pub fn add_page(&mut self) -> PageId {
        let page = Page::new(format!("Page {}", self.pages.len() + 1));
        let id = page.id;
        self.pages.push(page);
        id
    }

    /// Bump the modification timestamp; callers do this before saving.
    pub fn touch(&mut self) {
        self.updated_at = unix_now();
    }

    pub fn summary(&self) -> ProjectSummary {
        ProjectSummary {
            id: self.id,
            title: self.title.clone(),
            page_count: self.pages.len(),
            updated_at: self.updated_at,
        }
    }
}

impl Page {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            grid: GridLayout::new(),
        }
    }
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_project_has_one_default_page() {
        let project = Project::new("My Comic");
        assert_eq!(project.title, "My Comic");
        assert_eq!(project.pages.len(), 1);
        assert_eq!(project.pages[0].name, "Page 1");
        assert_eq!(project.pages[0].grid.rows.len(), 1);
        assert_eq!(project.created_at, project.updated_at);
    }

    #[test]
    fn test_add_page_numbers_sequentially() {
        let mut project = Project::new("Storyboard");
        project.add_page();
        project.add_page();
        let names: Vec<&str> = project.pages.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Page 1", "Page 2", "Page 3"]);
    }

    #[test]
    fn test_summary_reflects_project() {
        let mut project = Project::new("Zine");
        project.add_page();
        let summary = project.summary();
        assert_eq!(summary.id, project.id);
        assert_eq!(summary.page_count, 2);
    }
}
