//! The command abstraction the registry dispatches to.
//!
//! Concrete commands are constructed by their owning modules and handed to
//! the registry as trait objects; the registry never knows concrete types.

use async_trait::async_trait;

use crate::output::CommandOutputBuffer;
use crate::session::Session;

/// A named, invokable unit of work with a permission tier.
///
/// Implementations must be thread-safe (Send + Sync): one instance may be
/// registered under several tokens across several registries and invoked from
/// any session concurrently.
#[async_trait]
pub trait Command: Send + Sync {
    /// Logical name of this command. Deletion from a registry matches on this
    /// name (case-insensitively), regardless of which token was used to
    /// register the command.
    fn name(&self) -> &str;

    /// The tokens this command answers to. Tokens are matched
    /// case-insensitively; a leading `*` marks a wildcard fallback entry.
    fn handles(&self) -> Vec<String>;

    /// Whether only administrative callers may invoke this command.
    fn is_admin_only(&self) -> bool {
        false
    }

    /// Human description of what this command does, keyed by the invoking
    /// token so one implementation can present different help text per alias.
    fn describe(&self, token: &str) -> String;

    /// Executes the command for the given caller and full token list
    /// (element 0 is the command name as typed), appending message lines to
    /// `output`.
    ///
    /// A returned error is a handler fault: the dispatcher logs it and
    /// replaces the output with a generic notice. It never propagates.
    async fn handle(
        &self,
        session: &dyn Session,
        params: &[String],
        output: &mut CommandOutputBuffer,
    ) -> anyhow::Result<()>;
}
