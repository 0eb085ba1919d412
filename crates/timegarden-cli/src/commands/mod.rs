pub mod config;
pub mod currency;
pub mod project;
pub mod timer;

use timegarden_core::ProjectStore;

pub(crate) type CliResult = Result<(), Box<dyn std::error::Error>>;

/// Find a project by id or, failing that, by exact name.
pub(crate) fn resolve_project_id(store: &ProjectStore, needle: &str) -> Option<String> {
    store
        .projects()
        .iter()
        .find(|p| p.id == needle)
        .or_else(|| store.projects().iter().find(|p| p.name == needle))
        .map(|p| p.id.clone())
}
