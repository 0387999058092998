//! Providers backed by live process state: environment variables, running
//! processes and executables on `PATH`.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::candidate::{truncate_description, Candidate, Completion};
use crate::error::ProviderError;
use crate::os_context::OsContext;

/// Environment variables with their (clamped) values
pub fn environment_variables(ctx: &impl OsContext) -> Completion {
    Completion::Candidates(
        ctx.environ()
            .iter()
            .map(|entry| match entry.split_once('=') {
                Some((name, value)) => Candidate::described(name, truncate_description(value)),
                None => Candidate::new(entry.as_str()),
            })
            .collect(),
    )
}

/// Executable names of running processes, described by pid
pub fn process_executables(ctx: &impl OsContext) -> Result<Completion, ProviderError> {
    let processes = ctx.processes().map_err(|e| {
        warn!("process table query failed: {}", e);
        e
    })?;
    Ok(Completion::described(
        processes
            .into_iter()
            .map(|p| (p.executable, p.pid.to_string())),
    ))
}

/// Executables found in the directories of `PATH`, deduplicated by name
pub fn path_executables(ctx: &impl OsContext) -> Completion {
    let path = ctx.var("PATH").unwrap_or_default();
    let mut executables = HashSet::new();

    for dir in path.split(':').filter(|d| !d.is_empty()) {
        collect_executables(Path::new(dir), &mut executables);
    }

    Completion::values(executables)
}

fn collect_executables(dir: &Path, into: &mut HashSet<String>) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            debug!("skipping PATH entry {:?}: {}", dir, e);
            return;
        }
    };

    for entry in entries.flatten() {
        // lstat semantics: symlinks are not regular files
        let Ok(metadata) = entry.metadata() else {
            continue;
        };
        if metadata.is_file() && is_exec_any(&metadata) {
            into.insert(entry.file_name().to_string_lossy().into_owned());
        }
    }
}

#[cfg(unix)]
fn is_exec_any(metadata: &fs::Metadata) -> bool {
    use std::os::unix::fs::PermissionsExt;
    metadata.permissions().mode() & 0o111 != 0
}

#[cfg(not(unix))]
fn is_exec_any(_metadata: &fs::Metadata) -> bool {
    true
}
