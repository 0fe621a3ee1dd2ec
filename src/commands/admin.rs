//! Administrative commands: account creation, suspension, shutdown.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::command::Command;
use crate::output::CommandOutputBuffer;
use crate::session::{AccountStore, Session};

/// Creates a new account with a generated password.
pub struct AddUserCommand {
    accounts: Arc<dyn AccountStore>,
}

impl AddUserCommand {
    /// Creates the command against the given account store.
    pub fn new(accounts: Arc<dyn AccountStore>) -> Self {
        Self { accounts }
    }
}

#[async_trait]
impl Command for AddUserCommand {
    fn name(&self) -> &str {
        "adduser"
    }

    fn handles(&self) -> Vec<String> {
        vec!["adduser".to_string()]
    }

    fn is_admin_only(&self) -> bool {
        true
    }

    fn describe(&self, _token: &str) -> String {
        "This command will let you add a user to the BNC".to_string()
    }

    async fn handle(
        &self,
        _session: &dyn Session,
        params: &[String],
        output: &mut CommandOutputBuffer,
    ) -> anyhow::Result<()> {
        let Some(account) = params.get(1) else {
            output.add_message("You need to specify a username to add.");
            return Ok(());
        };
        if self.accounts.exists(account) {
            output.add_message(format!(
                "An account with the name '{account}' already exists."
            ));
            return Ok(());
        }
        output.add_message(format!("Creating account '{account}'..."));
        let password = self.accounts.create(account)?;
        output.add_message(format!(
            "Account created. Password has been set to '{password}'"
        ));
        Ok(())
    }
}

/// Suspends an account with a reason.
pub struct SuspendCommand {
    accounts: Arc<dyn AccountStore>,
}

impl SuspendCommand {
    /// Creates the command against the given account store.
    pub fn new(accounts: Arc<dyn AccountStore>) -> Self {
        Self { accounts }
    }
}

#[async_trait]
impl Command for SuspendCommand {
    fn name(&self) -> &str {
        "suspend"
    }

    fn handles(&self) -> Vec<String> {
        vec!["suspend".to_string()]
    }

    fn is_admin_only(&self) -> bool {
        true
    }

    fn describe(&self, _token: &str) -> String {
        "This command will let you suspend a user on the BNC".to_string()
    }

    async fn handle(
        &self,
        session: &dyn Session,
        params: &[String],
        output: &mut CommandOutputBuffer,
    ) -> anyhow::Result<()> {
        let Some(account) = params.get(1) else {
            output.add_message("You need to specify a username to suspend.");
            return Ok(());
        };
        if !self.accounts.exists(account) {
            output.add_message(format!("No account with the name '{account}' exists."));
            return Ok(());
        }
        if account.eq_ignore_ascii_case(session.account_name()) {
            output.add_message("You can't suspend yourself.");
            return Ok(());
        }
        if self.accounts.is_suspended(account) {
            let reason = self
                .accounts
                .suspend_reason(account)
                .unwrap_or_else(|| "no reason given".to_string());
            output.add_message(format!(
                "The account '{account}' is already suspended ({reason})."
            ));
            return Ok(());
        }
        let reason = params[2..].join(" ");
        output.add_message(format!("Suspending account '{account}'.."));
        self.accounts.suspend(account, &reason)?;
        output.add_message(format!("Account suspended with reason: {reason}"));
        Ok(())
    }
}

/// Requests a process shutdown through a channel owned by the embedding
/// application; the reason text travels with the request.
pub struct ShutdownCommand {
    shutdown: mpsc::Sender<String>,
}

impl ShutdownCommand {
    /// Creates the command around the application's shutdown channel.
    pub fn new(shutdown: mpsc::Sender<String>) -> Self {
        Self { shutdown }
    }
}

#[async_trait]
impl Command for ShutdownCommand {
    fn name(&self) -> &str {
        "shutdown"
    }

    fn handles(&self) -> Vec<String> {
        vec!["shutdown".to_string()]
    }

    fn is_admin_only(&self) -> bool {
        true
    }

    fn describe(&self, _token: &str) -> String {
        "This command will shut down the BNC".to_string()
    }

    async fn handle(
        &self,
        session: &dyn Session,
        params: &[String],
        output: &mut CommandOutputBuffer,
    ) -> anyhow::Result<()> {
        let reason = if params.len() > 1 {
            params[1..].join(" ")
        } else {
            format!("Shutdown requested by {}", session.account_name())
        };
        output.add_message("Shutting down.");
        self.shutdown.send(reason).await?;
        Ok(())
    }
}
