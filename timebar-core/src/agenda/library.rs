//! Agenda discovery and loading.
//!
//! Agendas live as `<name>.json` documents in a single directory. A name may
//! also be a direct path to a document, in which case the directory is not
//! consulted.

use std::path::{Path, PathBuf};

use crate::error::{CoreError, CoreResult};

use super::{Agenda, AgendaDocument};

/// Resolves agenda names against a directory of JSON documents.
#[derive(Debug, Clone)]
pub struct AgendaLibrary {
    dir: PathBuf,
}

impl AgendaLibrary {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Maps an agenda name to the document path it refers to.
    ///
    /// Existing file paths are used as-is; anything else becomes
    /// `<dir>/<name>.json`.
    pub fn resolve(&self, name: &str) -> PathBuf {
        let direct = Path::new(name);
        if direct.is_file() {
            return direct.to_path_buf();
        }
        if name.to_ascii_lowercase().ends_with(".json") {
            return self.dir.join(name);
        }
        self.dir.join(format!("{name}.json"))
    }

    /// Loads and partitions the agenda called `name`.
    ///
    /// # Returns
    ///
    /// * `Ok(Agenda)` - The parsed agenda
    /// * `Err(CoreError::AgendaNotFound)` - If no document exists for the name
    /// * `Err(CoreError::AgendaParse)` - If the document is not a valid agenda
    pub fn load(&self, name: &str) -> CoreResult<Agenda> {
        let path = self.resolve(name);
        if !path.is_file() {
            return Err(CoreError::AgendaNotFound(format!(
                "'{}' (looked for {})",
                name,
                path.display()
            )));
        }
        Self::load_path(&path)
    }

    /// Loads an agenda document from an explicit path.
    pub fn load_path(path: &Path) -> CoreResult<Agenda> {
        let content = std::fs::read_to_string(path)?;
        let document: AgendaDocument = serde_json::from_str(&content)
            .map_err(|e| CoreError::AgendaParse(format!("{}: {}", path.display(), e)))?;
        let agenda = document.into_agenda();
        log::debug!(
            "Loaded agenda '{}' from {} ({} sequences, {} min)",
            agenda.title,
            path.display(),
            agenda.len(),
            agenda.total_minutes()
        );
        Ok(agenda)
    }

    /// Lists the names of the agendas available in the directory, sorted.
    pub fn list(&self) -> CoreResult<Vec<String>> {
        let read_dir = std::fs::read_dir(&self.dir)?;
        let mut names: Vec<String> = read_dir
            .filter_map(|entry| {
                let path = entry.ok()?.path();
                if !path.is_file() {
                    return None;
                }
                path.extension()
                    .and_then(|ext| ext.to_str())
                    .filter(|ext| ext.eq_ignore_ascii_case("json"))?;
                path.file_stem()
                    .and_then(|stem| stem.to_str())
                    .map(str::to_string)
            })
            .collect();
        names.sort();
        Ok(names)
    }
}
