//! Project management commands.

use std::path::PathBuf;

use clap::Subcommand;
use timegarden_core::{
    duration_to_seconds, extract_field, seconds_to_duration, CurrencyLedger, DurationField,
    Project, ProjectStore,
};

use super::{resolve_project_id, CliResult};

#[derive(Subcommand)]
pub enum ProjectAction {
    /// Create a new project in an open slot
    Add {
        /// Project name
        name: String,
    },
    /// List all projects as JSON
    List,
    /// Rename a project
    Rename {
        /// Project id or name
        project: String,
        /// New name
        name: String,
    },
    /// Mark a project completed
    Complete {
        /// Project id or name
        project: String,
    },
    /// Abandon a project (forfeits currency)
    Abandon {
        /// Project id or name
        project: String,
    },
    /// Overwrite a project's accrued time
    SetTime {
        /// Project id or name
        project: String,
        /// New total as HH:MM:SS
        duration: String,
    },
    /// Buy one more project slot with currency
    UpgradeSlots,
    /// Export all projects as JSON
    Export {
        /// Write to a file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Import projects from an exported JSON file, skipping known ids
    Import {
        /// Path to the exported JSON
        path: PathBuf,
    },
}

pub fn run(action: ProjectAction) -> CliResult {
    let mut store = ProjectStore::load()?;
    let mut ledger = CurrencyLedger::load()?;

    match action {
        ProjectAction::Add { name } => {
            let project = store.add(&name, &mut ledger)?;
            println!("Project created: {}", project.id);
            println!("{}", serde_json::to_string_pretty(project)?);
        }
        ProjectAction::List => {
            println!("{}", serde_json::to_string_pretty(store.projects())?);
            for project in store.projects() {
                eprintln!(
                    "{}  {:?}  {}  {}",
                    project.id,
                    project.status,
                    seconds_to_duration(project.total_seconds_spent),
                    project.name
                );
            }
        }
        ProjectAction::Rename { project, name } => {
            let id = resolve(&store, &project)?;
            store.rename(&id, &name)?;
            println!("Project renamed: {id}");
        }
        ProjectAction::Complete { project } => {
            let id = resolve(&store, &project)?;
            store.complete(&id)?;
            println!("Project completed: {id}");
        }
        ProjectAction::Abandon { project } => {
            let id = resolve(&store, &project)?;
            store.abandon(&id, &mut ledger)?;
            println!("Project abandoned: {id}");
        }
        ProjectAction::SetTime { project, duration } => {
            let id = resolve(&store, &project)?;
            let hours = parse_field(&duration, DurationField::Hours)?;
            let minutes = parse_field(&duration, DurationField::Minutes)?;
            let seconds = parse_field(&duration, DurationField::Seconds)?;
            let total = duration_to_seconds(hours, minutes, seconds);
            if total < 0 {
                return Err(format!("duration '{duration}' is negative").into());
            }
            store.record_total_seconds(&id, total as u64);
            println!(
                "Project time set: {id} -> {}",
                seconds_to_duration(total as u64)
            );
        }
        ProjectAction::UpgradeSlots => {
            let cost = store.slot_upgrade_cost();
            store.upgrade_slots(&mut ledger)?;
            println!(
                "Slots upgraded to {} (cost {cost}, balance {})",
                store.max_projects(),
                ledger.balance()
            );
        }
        ProjectAction::Export { output } => {
            let json = serde_json::to_string_pretty(store.projects())?;
            match output {
                Some(path) => std::fs::write(path, json)?,
                None => println!("{json}"),
            }
        }
        ProjectAction::Import { path } => {
            let content = std::fs::read_to_string(path)?;
            let incoming: Vec<Project> = serde_json::from_str(&content)?;
            let added = store.merge_imported(incoming);
            println!("Imported {added} project(s)");
        }
    }

    store.save()?;
    ledger.save()?;
    Ok(())
}

fn resolve(store: &ProjectStore, needle: &str) -> Result<String, Box<dyn std::error::Error>> {
    resolve_project_id(store, needle).ok_or_else(|| format!("no project matching '{needle}'").into())
}

/// The codec slice is best-effort; the numeric guard lives here.
fn parse_field(
    duration: &str,
    field: DurationField,
) -> Result<i64, Box<dyn std::error::Error>> {
    extract_field(duration, field)
        .parse()
        .map_err(|_| format!("malformed duration '{duration}': expected HH:MM:SS").into())
}
