//! Candidate model for sysact_core
//!
//! A `Candidate` is one value the user could type next plus an optional
//! description. A provider answers with a `Completion`: either a list of
//! candidates or a single message shown in place of them.

use serde::{Deserialize, Serialize};

/// Longest description emitted for live data, ellipsis included
pub const DESCRIPTION_LIMIT: usize = 40;

const ELLIPSIS: &str = "...";

/// A single completion value
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    /// The text inserted on the command line
    pub value: String,
    /// Short human-readable hint, may be empty
    #[serde(default)]
    pub description: String,
}

impl Candidate {
    /// Candidate without a description
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            description: String::new(),
        }
    }

    /// Candidate with a description
    pub fn described(value: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            description: description.into(),
        }
    }
}

/// Result of invoking an action
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Completion {
    Candidates(Vec<Candidate>),
    /// Advisory text shown instead of candidates
    Message(String),
}

impl Completion {
    pub fn empty() -> Self {
        Completion::Candidates(Vec::new())
    }

    pub fn message(text: impl Into<String>) -> Self {
        Completion::Message(text.into())
    }

    /// Value-only candidates
    pub fn values<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Completion::Candidates(values.into_iter().map(Candidate::new).collect())
    }

    /// Candidates from `(value, description)` pairs
    pub fn described<I, V, D>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (V, D)>,
        V: Into<String>,
        D: Into<String>,
    {
        Completion::Candidates(
            pairs
                .into_iter()
                .map(|(v, d)| Candidate::described(v, d))
                .collect(),
        )
    }

    pub fn is_message(&self) -> bool {
        matches!(self, Completion::Message(_))
    }

    /// Candidates, or an empty slice for a message
    pub fn candidates(&self) -> &[Candidate] {
        match self {
            Completion::Candidates(c) => c,
            Completion::Message(_) => &[],
        }
    }

    /// Values in order, mostly for assertions and plain output
    pub fn value_list(&self) -> Vec<&str> {
        self.candidates().iter().map(|c| c.value.as_str()).collect()
    }

    /// Append `suffix` to every value
    pub fn suffix(self, suffix: &str) -> Self {
        self.map_values(|v| format!("{}{}", v, suffix))
    }

    /// Prepend `prefix` to every value
    pub fn prefix(self, prefix: &str) -> Self {
        self.map_values(|v| format!("{}{}", prefix, v))
    }

    /// Keep only candidates whose value starts with `prefix`
    pub fn filter_prefix(self, prefix: &str) -> Self {
        match self {
            Completion::Candidates(candidates) => Completion::Candidates(
                candidates
                    .into_iter()
                    .filter(|c| c.value.starts_with(prefix))
                    .collect(),
            ),
            message => message,
        }
    }

    fn map_values(self, f: impl Fn(&str) -> String) -> Self {
        match self {
            Completion::Candidates(candidates) => Completion::Candidates(
                candidates
                    .into_iter()
                    .map(|c| Candidate {
                        value: f(&c.value),
                        description: c.description,
                    })
                    .collect(),
            ),
            message => message,
        }
    }
}

/// Clamp a description to `DESCRIPTION_LIMIT` characters.
///
/// Longer text keeps its first 37 characters followed by `...`. Counting is
/// per `char`, so multi-byte text is never cut inside a code point.
pub fn truncate_description(description: &str) -> String {
    if description.chars().count() <= DESCRIPTION_LIMIT {
        return description.to_string();
    }
    let keep = DESCRIPTION_LIMIT - ELLIPSIS.len();
    let mut out: String = description.chars().take(keep).collect();
    out.push_str(ELLIPSIS);
    out
}
