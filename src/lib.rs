//! sysact_core - system-introspection completion actions
//!
//! Turns live OS state into completion candidates for an interactive shell.
//!
//! Modules:
//! - candidate: Candidate/Completion model and description clamping
//! - action: The `Action` provider type and its `invoke`
//! - compound: Delimiter-split compound values (`user:group`)
//! - tables: Kill signals and process states
//! - records: passwd/group database parsing
//! - live: Environment, running processes, PATH executables
//! - external: Listing commands with a timeout
//! - os_context: Injected OS access (live or fixed)
//! - registry: Named actions
//! - config: YAML settings
//! - error: Error types

pub mod candidate;
pub mod action;
pub mod compound;
pub mod tables;
pub mod records;
pub mod live;
pub mod external;
pub mod os_context;
pub mod registry;
pub mod config;
pub mod error;

// Re-export key types for convenience
pub use candidate::{Candidate, Completion, truncate_description, DESCRIPTION_LIMIT};

pub use action::{Action, Request};

pub use compound::Compound;

pub use os_context::{OsContext, SystemContext, FixedContext, CommandOutcome, ProcessEntry};

pub use registry::Registry;

pub use config::Config;

pub use error::{ProviderError, ConfigError};
