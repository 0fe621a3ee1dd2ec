//! Dispatch boundary between the session layer and the command registry.
//!
//! The session layer tokenizes an incoming line, splits off any filter
//! requests, and calls [`Dispatcher::handle`]. Everything the caller is told
//! about a dispatch flows out of that one call: either the filtered output
//! lines, or a typed error the session layer renders to the user.

use std::sync::Arc;

use tracing::error;

use crate::error::{ConsoleError, Result};
use crate::filters::{FilterRequest, FilterSet};
use crate::output::CommandOutputBuffer;
use crate::registry::{CommandTree, RegistryId};
use crate::session::Session;

/// Ties permission checking to resolution and invocation for one registry
/// node. The embedding application constructs one per account, pointing at
/// that account's registry.
pub struct Dispatcher {
    tree: Arc<CommandTree>,
    node: RegistryId,
    filters: Arc<FilterSet>,
}

impl Dispatcher {
    /// Creates a dispatcher bound to a registry node and a filter set.
    pub fn new(tree: Arc<CommandTree>, node: RegistryId, filters: Arc<FilterSet>) -> Self {
        Self {
            tree,
            node,
            filters,
        }
    }

    /// The registry node this dispatcher resolves against.
    pub fn node(&self) -> RegistryId {
        self.node
    }

    /// Handles one tokenized command line for the given caller.
    ///
    /// Element 0 of `params` is the command name. An admin-only command
    /// dispatched by a non-administrative caller fails with the same
    /// not-found error as a nonexistent command, so unprivileged callers
    /// cannot probe for privileged command names.
    ///
    /// A fault inside the handler is logged and converted into a single
    /// generic notice line; it never propagates out of this call and leaves
    /// the registry untouched. Filter failures abort the chain and surface
    /// as the error instead of partial output.
    pub async fn handle(
        &self,
        session: &dyn Session,
        params: &[String],
        filters: &[FilterRequest],
    ) -> Result<Vec<String>> {
        let token = params.first().map(String::as_str).unwrap_or("");
        if token.trim().is_empty() {
            return Err(ConsoleError::invalid_input("no valid command given"));
        }

        let command = self.tree.get_command(self.node, token)?;
        if command.is_admin_only() && !session.is_admin() {
            return Err(ConsoleError::not_found(token));
        }

        let mut output = CommandOutputBuffer::new();
        if let Err(fault) = command.handle(session, params, &mut output).await {
            error!(command = token, error = %fault, "command handler failed");
            output.set_messages(vec![format!(
                "There has been an error with the command '{token}'"
            )]);
        }

        self.filters.apply(filters, &mut output)?;
        Ok(output.into_messages())
    }
}
