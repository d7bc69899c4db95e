// ABOUTME: Filesystem-backed key-value store for projects.
// ABOUTME: One pretty-printed JSON file per project id, save/load/list/delete.

use std::path::{Path, PathBuf};

use crate::project::{Project, ProjectId, ProjectSummary};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Project not found: {0}")]
    NotFound(ProjectId),

    #[error("Could not determine data directory")]
    NoDataDir,
}

/// Project store over a directory of `<project-id>.json` files.
#[derive(Debug, Clone)]
pub struct ProjectStore {
    dir: PathBuf,
}

impl ProjectStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The default store directory (~/.local/share/inkgrid/projects)
    pub fn default_dir() -> Option<PathBuf> {
        dirs::data_local_dir().map(|p| p.join("inkgrid").join("projects"))
    }

    /// Open the store at the default directory
    pub fn open_default() -> Result<Self, StoreError> {
        Ok(Self::new(Self::default_dir().ok_or(StoreError::NoDataDir)?))
    }

    pub fn path_for(&self, id: ProjectId) -> PathBuf {
        self.dir.join(format!("{id}.json"))
    }

    /// Write a project to its file, creating the store directory if needed
    pub fn save(&self, project: &Project) -> Result<(), StoreError> {
        std::fs::create_dir_all(&self.dir)?;
        let json = serde_json::to_string_pretty(project)?;
        std::fs::write(self.path_for(project.id), json)?;
        tracing::debug!(
            "Saved project {} ({} pages)",
            project.id,
            project.pages.len()
        );
        Ok(())
    }

    pub fn load(&self, id: ProjectId) -> Result<Project, StoreError> {
        let path = self.path_for(id);
        if !path.exists() {
            return Err(StoreError::NotFound(id));
        }
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Summaries of every stored project, newest first.
    ///
    /// Files that fail to parse are skipped with a warning rather than
    /// failing the whole listing.
    pub fn list(&self) -> Result<Vec<ProjectSummary>, StoreError> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }
        let mut summaries = Vec::new();
        for entry in std::fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            match read_summary(&path) {
                Ok(summary) => summaries.push(summary),
                Err(e) => {
                    tracing::warn!("Skipping unreadable project file {:?}: {e}", path);
                }
            }
        }
        summaries.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(summaries)
    }

    pub fn delete(&self, id: ProjectId) -> Result<(), StoreError> {
        let path = self.path_for(id);
        if !path.exists() {
            return Err(StoreError::NotFound(id));
        }
        std::fs::remove_file(path)?;
        tracing::info!("Deleted project {id}");
        Ok(())
    }

    /// Find a project id by exact title match.
    pub fn find_by_title(&self, title: &str) -> Result<Option<ProjectId>, StoreError> {
        Ok(self
            .list()?
            .into_iter()
            .find(|s| s.title == title)
            .map(|s| s.id))
    }
}

fn read_summary(path: &Path) -> Result<ProjectSummary, StoreError> {
    let content = std::fs::read_to_string(path)?;
    let project: Project = serde_json::from_str(&content)?;
    Ok(project.summary())
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn temp_store() -> ProjectStore {
        let dir = std::env::temp_dir().join(format!("inkgrid_store_{}", Uuid::new_v4()));
        ProjectStore::new(dir)
    }

    #[test]
    fn test_save_load_roundtrip() {
        let store = temp_store();
        let project = Project::new("Roundtrip");
        store.save(&project).unwrap();

        let loaded = store.load(project.id).unwrap();
        assert_eq!(loaded, project);

        let _ = std::fs::remove_dir_all(store.path_for(project.id).parent().unwrap());
    }

    #[test]
    fn test_load_missing_is_not_found() {
        let store = temp_store();
        let id = Uuid::new_v4();
        assert!(matches!(store.load(id), Err(StoreError::NotFound(found)) if found == id));
    }

    #[test]
    fn test_list_and_delete() {
        let store = temp_store();
        let mut first = Project::new("First");
        first.updated_at = 100;
        let mut second = Project::new("Second");
        second.updated_at = 200;
        store.save(&first).unwrap();
        store.save(&second).unwrap();

        let listed = store.list().unwrap();
        assert_eq!(listed.len(), 2);
        // Newest first
        assert_eq!(listed[0].id, second.id);
        assert_eq!(listed[1].id, first.id);

        store.delete(first.id).unwrap();
        let listed = store.list().unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, second.id);
        assert!(matches!(store.delete(first.id), Err(StoreError::NotFound(_))));

        let _ = std::fs::remove_dir_all(store.path_for(second.id).parent().unwrap());
    }

    #[test]
    fn test_find_by_title() {
        let store = temp_store();
        let project = Project::new("Named");
        store.save(&project).unwrap();

        assert_eq!(store.find_by_title("Named").unwrap(), Some(project.id));
        assert_eq!(store.find_by_title("Missing").unwrap(), None);

        let _ = std::fs::remove_dir_all(store.path_for(project.id).parent().unwrap());
    }

    #[test]
    fn test_list_on_missing_dir_is_empty() {
        let store = temp_store();
        assert!(store.list().unwrap().is_empty());
    }
}
