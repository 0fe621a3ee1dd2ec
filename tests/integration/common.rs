//! Common test utilities: a mock session and simple probe commands.

use std::sync::Arc;

use async_trait::async_trait;

use bnc_console::command::Command;
use bnc_console::output::CommandOutputBuffer;
use bnc_console::session::Session;

/// A session with a fixed name and admin flag.
pub struct MockSession {
    pub name: String,
    pub admin: bool,
}

impl MockSession {
    pub fn user(name: &str) -> Self {
        Self {
            name: name.to_string(),
            admin: false,
        }
    }

    pub fn admin(name: &str) -> Self {
        Self {
            name: name.to_string(),
            admin: true,
        }
    }
}

impl Session for MockSession {
    fn account_name(&self) -> &str {
        &self.name
    }

    fn is_admin(&self) -> bool {
        self.admin
    }

    fn send_bot_message(&self, _line: &str) {}
}

/// A command that replies with its own logical name, one line per reply.
pub struct ReplyCommand {
    name: String,
    tokens: Vec<String>,
    admin_only: bool,
    replies: usize,
}

impl ReplyCommand {
    pub fn new(name: &str, tokens: &[&str]) -> Arc<Self> {
        Self::build(name, tokens, false, 1)
    }

    pub fn admin_only(name: &str, tokens: &[&str]) -> Arc<Self> {
        Self::build(name, tokens, true, 1)
    }

    pub fn with_replies(name: &str, tokens: &[&str], replies: usize) -> Arc<Self> {
        Self::build(name, tokens, false, replies)
    }

    fn build(name: &str, tokens: &[&str], admin_only: bool, replies: usize) -> Arc<Self> {
        Arc::new(Self {
            name: name.to_string(),
            tokens: tokens.iter().map(|t| t.to_string()).collect(),
            admin_only,
            replies,
        })
    }
}

#[async_trait]
impl Command for ReplyCommand {
    fn name(&self) -> &str {
        &self.name
    }

    fn handles(&self) -> Vec<String> {
        self.tokens.clone()
    }

    fn is_admin_only(&self) -> bool {
        self.admin_only
    }

    fn describe(&self, token: &str) -> String {
        format!("Replies as {} when invoked via {token}", self.name)
    }

    async fn handle(
        &self,
        _session: &dyn Session,
        _params: &[String],
        output: &mut CommandOutputBuffer,
    ) -> anyhow::Result<()> {
        for i in 1..=self.replies {
            output.add_message(format!("{} reply {i}", self.name));
        }
        Ok(())
    }
}

/// A command whose handler always faults.
pub struct FaultyCommand;

#[async_trait]
impl Command for FaultyCommand {
    fn name(&self) -> &str {
        "broken"
    }

    fn handles(&self) -> Vec<String> {
        vec!["broken".to_string()]
    }

    fn describe(&self, _token: &str) -> String {
        "Always fails".to_string()
    }

    async fn handle(
        &self,
        _session: &dyn Session,
        _params: &[String],
        _output: &mut CommandOutputBuffer,
    ) -> anyhow::Result<()> {
        anyhow::bail!("deliberate fault")
    }
}

/// Tokenizes a &str slice into the owned params the dispatcher takes.
pub fn params(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}
