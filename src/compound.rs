//! Compound arguments such as `user:group`
//!
//! The token under the cursor is split on a delimiter. The number of
//! delimiters already typed selects the segment action that answers; every
//! segment but the last gets the delimiter appended so the user keeps
//! typing into the next part.

use tracing::debug;

use crate::action::{Action, Request};
use crate::candidate::Completion;
use crate::os_context::OsContext;

#[derive(Clone, Debug)]
pub struct Compound {
    delimiter: String,
    segments: Vec<Action>,
}

impl Compound {
    pub fn new(delimiter: impl Into<String>, segments: Vec<Action>) -> Self {
        Self {
            delimiter: delimiter.into(),
            segments,
        }
    }

    /// Split `current` into completed parts and the part being typed
    pub fn split<'a>(&self, current: &'a str) -> (Vec<&'a str>, &'a str) {
        if self.delimiter.is_empty() {
            return (Vec::new(), current);
        }
        let mut parts: Vec<&str> = current.split(self.delimiter.as_str()).collect();
        // split always yields at least one item
        let partial = parts.pop().unwrap_or_default();
        (parts, partial)
    }

    pub fn invoke(&self, ctx: &impl OsContext, request: &Request) -> Completion {
        let (parts, partial) = self.split(&request.current);
        let index = parts.len();

        let Some(segment) = self.segments.get(index) else {
            debug!("compound value complete after {} segments", index);
            return Completion::empty();
        };

        let sub_request = Request {
            args: request.args.clone(),
            current: partial.to_string(),
            parts: parts.iter().map(|p| p.to_string()).collect(),
        };
        let completion = segment.invoke(ctx, &sub_request);

        if index + 1 < self.segments.len() {
            completion.suffix(&self.delimiter)
        } else {
            completion
        }
    }
}
