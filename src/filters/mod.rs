//! Output filter chain.
//!
//! The session layer may suffix a command line with filter requests
//! (e.g. `... | tail 5 | count`); each request names a filter and carries its
//! argument tokens. Filters run strictly in the requested order over the
//! shared output buffer, and the first failure aborts the remainder of the
//! chain so the caller never sees partial output.

pub mod count;
pub mod head;
pub mod tail;

pub use count::CountFilter;
pub use head::HeadFilter;
pub use tail::TailFilter;

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::{ConsoleError, Result};
use crate::output::CommandOutputBuffer;

/// A pure transformation over a command's output buffer.
///
/// Filters are stateless: they hold no invocation-scoped state between calls
/// and may replace the buffer's contents but not its identity.
pub trait CommandOutputFilter: Send + Sync {
    /// Runs the filter with the caller-supplied argument tokens against the
    /// output buffer, which may already have been rewritten by earlier
    /// filters in the chain.
    fn run(&self, params: &[String], output: &mut CommandOutputBuffer) -> Result<()>;
}

/// One element of a requested filter chain: a filter name plus its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterRequest {
    /// Filter name, matched case-insensitively against the registered set.
    pub name: String,
    /// Argument tokens for this invocation.
    pub params: Vec<String>,
}

impl FilterRequest {
    /// Creates a request for the named filter with the given arguments.
    pub fn new(name: impl Into<String>, params: &[&str]) -> Self {
        Self {
            name: name.into(),
            params: params.iter().map(|p| p.to_string()).collect(),
        }
    }
}

/// The fixed set of named filters available to callers.
pub struct FilterSet {
    filters: HashMap<String, Arc<dyn CommandOutputFilter>>,
}

impl Default for FilterSet {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl FilterSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self {
            filters: HashMap::new(),
        }
    }

    /// Creates a set with the standard filters registered: `tail`, `head`,
    /// and `count`.
    pub fn with_defaults() -> Self {
        let mut set = Self::new();
        set.register("tail", Arc::new(TailFilter));
        set.register("head", Arc::new(HeadFilter));
        set.register("count", Arc::new(CountFilter));
        set
    }

    /// Registers a filter under the given name, replacing any prior holder.
    pub fn register(&mut self, name: &str, filter: Arc<dyn CommandOutputFilter>) {
        self.filters.insert(name.to_lowercase(), filter);
    }

    /// Looks up a filter by name, case-insensitively.
    pub fn get(&self, name: &str) -> Option<Arc<dyn CommandOutputFilter>> {
        self.filters.get(&name.to_lowercase()).map(Arc::clone)
    }

    /// The registered filter names, for help output.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.filters.keys().cloned().collect();
        names.sort();
        names
    }

    /// Applies the requested chain in order, aborting on the first failure.
    pub fn apply(&self, requests: &[FilterRequest], output: &mut CommandOutputBuffer) -> Result<()> {
        for request in requests {
            let filter = self
                .get(&request.name)
                .ok_or_else(|| ConsoleError::unknown_filter(&request.name))?;
            filter.run(&request.params, output)?;
        }
        Ok(())
    }
}

/// Parses a filter's line-count argument: the sole parameter, defaulting to
/// 10 when none is supplied. A non-integer parameter is a filter-argument
/// error carrying the offending literal.
pub(crate) fn parse_wanted(params: &[String]) -> Result<usize> {
    match params.first() {
        None => Ok(10),
        Some(raw) => raw
            .parse::<usize>()
            .map_err(|_| ConsoleError::filter_argument(raw)),
    }
}
