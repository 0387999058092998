//! Completion actions
//!
//! An `Action` is one provider kind. Every kind is answered through the
//! same `invoke`, which is also the point where OS failures are turned into
//! a `Completion::Message`.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::candidate::{Candidate, Completion};
use crate::compound::Compound;
use crate::os_context::OsContext;
use crate::{external, live, records, tables};

/// What the hosting framework knows about the position being completed
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    /// Tokens already on the command line, left to right
    #[serde(default)]
    pub args: Vec<String>,
    /// The partial token under the cursor
    #[serde(default)]
    pub current: String,
    /// Segments already completed when invoked from a `Compound`
    #[serde(default)]
    pub parts: Vec<String>,
}

impl Request {
    pub fn new(args: Vec<String>, current: impl Into<String>) -> Self {
        Self {
            args,
            current: current.into(),
            parts: Vec::new(),
        }
    }

    /// Request for the token `current` with no preceding arguments
    pub fn current(current: impl Into<String>) -> Self {
        Self::new(Vec::new(), current)
    }
}

/// A completion provider
#[derive(Clone, Debug)]
pub enum Action {
    /// Fixed candidates
    Values(Vec<Candidate>),
    /// Fixed advisory text
    Message(String),
    KillSignals,
    ProcessStates,
    /// Users from a passwd-style file
    Users(PathBuf),
    /// Groups from a group-style file
    Groups(PathBuf),
    Environment,
    ProcessExecutables,
    PathExecutables,
    /// Lines printed by an external command
    Command { program: String, args: Vec<String> },
    Compound(Compound),
    /// Another action with a suffix appended to each value
    Suffixed(Box<Action>, String),
}

impl Action {
    pub fn values<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Action::Values(values.into_iter().map(Candidate::new).collect())
    }

    pub fn described<I, V, D>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (V, D)>,
        V: Into<String>,
        D: Into<String>,
    {
        Action::Values(
            pairs
                .into_iter()
                .map(|(v, d)| Candidate::described(v, d))
                .collect(),
        )
    }

    /// System users: `root (0)`, `daemon (1)`
    pub fn users() -> Self {
        Action::Users(PathBuf::from(records::PASSWD_PATH))
    }

    /// System groups: `root (0)`, `ssh (101)`
    pub fn groups() -> Self {
        Action::Groups(PathBuf::from(records::GROUP_PATH))
    }

    /// Available login shells as reported by `chsh --list-shells`
    pub fn shells() -> Self {
        Action::command("chsh", ["--list-shells"])
    }

    pub fn command<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Action::Command {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// `user:group`, completed one part at a time
    pub fn user_group() -> Self {
        Self::user_group_from(Action::users(), Action::groups())
    }

    pub fn user_group_from(users: Action, groups: Action) -> Self {
        Action::Compound(Compound::new(":", vec![users, groups]))
    }

    pub fn suffix(self, suffix: impl Into<String>) -> Self {
        Action::Suffixed(Box::new(self), suffix.into())
    }

    /// Compute the completion for `request`. Never fails: OS errors that
    /// matter to the user come back as a message.
    pub fn invoke(&self, ctx: &impl OsContext, request: &Request) -> Completion {
        match self {
            Action::Values(candidates) => Completion::Candidates(candidates.clone()),
            Action::Message(text) => Completion::message(text.as_str()),
            Action::KillSignals => tables::kill_signals(),
            Action::ProcessStates => tables::process_states(),
            Action::Users(path) | Action::Groups(path) => records::read_records(ctx, path),
            Action::Environment => live::environment_variables(ctx),
            Action::ProcessExecutables => {
                live::process_executables(ctx).unwrap_or_else(|e| Completion::message(e.to_string()))
            }
            Action::PathExecutables => live::path_executables(ctx),
            Action::Command { program, args } => match ctx.run_command(program, args) {
                Ok(output) => external::split_output(&output),
                Err(e) => Completion::message(e.to_string()),
            },
            Action::Compound(compound) => compound.invoke(ctx, request),
            Action::Suffixed(inner, suffix) => inner.invoke(ctx, request).suffix(suffix),
        }
    }
}
