//! The `showcommands` command: lists what the caller can run.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::command::Command;
use crate::output::CommandOutputBuffer;
use crate::registry::{CommandTree, RegistryId};
use crate::session::Session;

/// Lists every command reachable from a registry node, sorted by token.
/// Wildcard entries are skipped; admin-only commands appear in a separate
/// trailing section that only administrative callers get to see.
pub struct ShowCommandsCommand {
    tree: Arc<CommandTree>,
    node: RegistryId,
}

impl ShowCommandsCommand {
    /// Creates the command, bound to the registry node it will list.
    pub fn new(tree: Arc<CommandTree>, node: RegistryId) -> Self {
        Self { tree, node }
    }
}

#[async_trait]
impl Command for ShowCommandsCommand {
    fn name(&self) -> &str {
        "showcommands"
    }

    fn handles(&self) -> Vec<String> {
        vec!["showcommands".to_string()]
    }

    fn describe(&self, _token: &str) -> String {
        "This command shows what commands are available to you".to_string()
    }

    async fn handle(
        &self,
        session: &dyn Session,
        params: &[String],
        output: &mut CommandOutputBuffer,
    ) -> anyhow::Result<()> {
        let scope = params.get(1).map(|s| s.to_lowercase()).unwrap_or_default();
        let show_user = scope.is_empty() || scope == "all" || scope == "user";
        let show_admin = scope.is_empty() || scope == "all" || scope == "admin";

        // Sorted full-tree listing; this is the expensive introspection path.
        let commands: BTreeMap<String, Arc<dyn Command>> =
            self.tree.all_commands(self.node).into_iter().collect();

        let mut admin_lines = Vec::new();
        if show_user {
            output.add_message("----------------");
            output.add_message("The following commands are available to you:");
        }
        for (token, command) in &commands {
            if token.starts_with('*') {
                continue;
            }
            let line = format!("{token:<20} - {}", command.describe(token));
            if command.is_admin_only() {
                admin_lines.push(line);
            } else if show_user {
                output.add_message(line);
            }
        }

        if show_admin {
            if session.is_admin() {
                if !admin_lines.is_empty() {
                    if show_user {
                        output.add_message("");
                    }
                    output.add_message("----------------");
                    if scope == "admin" {
                        output.add_message("The following admin-only commands are available to you:");
                    } else {
                        output
                            .add_message("The following admin-only commands are also available to you:");
                    }
                    for line in admin_lines {
                        output.add_message(line);
                    }
                }
            } else if scope == "admin" {
                output.add_message("----------------");
                output.add_message("Admin commands are not available to you.");
            }
        }

        Ok(())
    }
}
