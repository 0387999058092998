//! OS access for completion providers
//!
//! Providers never touch the process environment, the process table or
//! child processes directly; they go through an `OsContext`. The
//! `SystemContext` reads the live system, `FixedContext` serves a canned
//! snapshot so completions can be checked without mutating the real
//! environment.

use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::runtime::{Handle, RuntimeFlavor};
use tracing::debug;

use crate::error::ProviderError;
use crate::external;

/// Default bound on external listing commands
pub const DEFAULT_COMMAND_TIMEOUT: Duration = Duration::from_millis(500);

/// One row of the process table
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessEntry {
    pub pid: u32,
    pub executable: String,
}

impl ProcessEntry {
    pub fn new(pid: u32, executable: impl Into<String>) -> Self {
        Self {
            pid,
            executable: executable.into(),
        }
    }
}

/// Read-only view of the operating system
pub trait OsContext {
    /// Environment as raw `NAME=value` entries, in OS order
    fn environ(&self) -> Vec<String>;

    /// A single environment variable
    fn var(&self, key: &str) -> Option<String>;

    /// File contents; invalid UTF-8 is replaced rather than rejected
    fn read_file(&self, path: &Path) -> std::io::Result<String> {
        let bytes = std::fs::read(path)?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    /// Snapshot of the live process table
    fn processes(&self) -> Result<Vec<ProcessEntry>, ProviderError>;

    /// Run a command to completion and return its stdout
    fn run_command(&self, program: &str, args: &[String]) -> Result<String, ProviderError>;
}

/// The live system
#[derive(Clone, Debug)]
pub struct SystemContext {
    command_timeout: Duration,
}

impl SystemContext {
    pub fn new(command_timeout: Duration) -> Self {
        Self { command_timeout }
    }

    pub fn command_timeout(&self) -> Duration {
        self.command_timeout
    }
}

impl Default for SystemContext {
    fn default() -> Self {
        Self::new(DEFAULT_COMMAND_TIMEOUT)
    }
}

impl OsContext for SystemContext {
    fn environ(&self) -> Vec<String> {
        std::env::vars_os()
            .map(|(k, v)| format!("{}={}", k.to_string_lossy(), v.to_string_lossy()))
            .collect()
    }

    fn var(&self, key: &str) -> Option<String> {
        std::env::var_os(key).map(|v| v.to_string_lossy().into_owned())
    }

    fn processes(&self) -> Result<Vec<ProcessEntry>, ProviderError> {
        if !sysinfo::IS_SUPPORTED_SYSTEM {
            return Err(ProviderError::ProcessTable(format!(
                "not supported on {}",
                std::env::consts::OS
            )));
        }

        let mut system = sysinfo::System::new();
        system.refresh_processes();

        let mut entries: Vec<ProcessEntry> = system
            .processes()
            .iter()
            .map(|(pid, process)| ProcessEntry::new(pid.as_u32(), process.name()))
            .collect();
        if entries.is_empty() {
            return Err(ProviderError::ProcessTable("no processes visible".into()));
        }
        entries.sort_by_key(|e| e.pid);
        debug!("read {} processes", entries.len());
        Ok(entries)
    }

    fn run_command(&self, program: &str, args: &[String]) -> Result<String, ProviderError> {
        let limit = self.command_timeout();
        match Handle::try_current().map(|h| h.runtime_flavor()) {
            // Inside a multi-threaded host runtime: leave it for the duration
            Ok(RuntimeFlavor::MultiThread) => {
                tokio::task::block_in_place(|| run_on_private_runtime(program, args, limit))
            }
            // A current-thread host can't give up its thread, so use another one
            Ok(_) => std::thread::scope(|scope| {
                scope
                    .spawn(|| run_on_private_runtime(program, args, limit))
                    .join()
                    .unwrap_or_else(|_| {
                        Err(ProviderError::Runtime(format!("{}: runner thread panicked", program)))
                    })
            }),
            Err(_) => run_on_private_runtime(program, args, limit),
        }
    }
}

fn run_on_private_runtime(
    program: &str,
    args: &[String],
    limit: Duration,
) -> Result<String, ProviderError> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| ProviderError::Runtime(e.to_string()))?;
    runtime.block_on(external::run_listing(program, args, limit))
}

/// Canned outcome of a command in a `FixedContext`
#[derive(Clone, Debug)]
pub enum CommandOutcome {
    Stdout(String),
    /// Ran and exited unsuccessfully with this status text
    Failed(String),
    TimedOut,
}

/// A fixed OS snapshot
#[derive(Clone, Debug, Default)]
pub struct FixedContext {
    environ: Vec<String>,
    processes: Option<Vec<ProcessEntry>>,
    commands: HashMap<String, CommandOutcome>,
}

impl FixedContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a raw `NAME=value` environment entry
    pub fn with_env_entry(mut self, entry: impl Into<String>) -> Self {
        self.environ.push(entry.into());
        self
    }

    pub fn with_env(self, key: &str, value: &str) -> Self {
        self.with_env_entry(format!("{}={}", key, value))
    }

    /// Serve this process table; without it the table query fails
    pub fn with_processes(mut self, processes: Vec<ProcessEntry>) -> Self {
        self.processes = Some(processes);
        self
    }

    pub fn with_command(mut self, program: &str, outcome: CommandOutcome) -> Self {
        self.commands.insert(program.to_string(), outcome);
        self
    }
}

impl OsContext for FixedContext {
    fn environ(&self) -> Vec<String> {
        self.environ.clone()
    }

    fn var(&self, key: &str) -> Option<String> {
        self.environ.iter().find_map(|entry| {
            let (name, value) = entry.split_once('=')?;
            (name == key).then(|| value.to_string())
        })
    }

    fn processes(&self) -> Result<Vec<ProcessEntry>, ProviderError> {
        self.processes
            .clone()
            .ok_or_else(|| ProviderError::ProcessTable("no process table in fixed context".into()))
    }

    fn run_command(&self, program: &str, _args: &[String]) -> Result<String, ProviderError> {
        match self.commands.get(program) {
            Some(CommandOutcome::Stdout(out)) => Ok(out.clone()),
            Some(CommandOutcome::Failed(status)) => Err(ProviderError::CommandFailed {
                program: program.to_string(),
                status: status.clone(),
            }),
            Some(CommandOutcome::TimedOut) => Err(ProviderError::CommandTimeout {
                program: program.to_string(),
                timeout: DEFAULT_COMMAND_TIMEOUT,
            }),
            None => Err(ProviderError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("{}: command not found", program),
            ))),
        }
    }
}
