//! Collaborator surfaces supplied by the embedding application.
//!
//! The console core never talks to sockets or the account database directly.
//! The session layer hands in a [`Session`] per dispatch, and the admin
//! commands reach the account database only through [`AccountStore`].

/// Opaque handle for the caller that issued a command line.
///
/// Implemented by the embedding application's session layer, typically
/// wrapping a user socket plus its authenticated account.
pub trait Session: Send + Sync {
    /// The account name this session is authenticated as.
    fn account_name(&self) -> &str;

    /// Whether the caller has administrative standing.
    fn is_admin(&self) -> bool;

    /// Emits a formatted bot-style message directly to the session, outside
    /// any output buffer. Used for asynchronous notices, not command output.
    fn send_bot_message(&self, line: &str);
}

/// Account database surface used by the administrative commands.
pub trait AccountStore: Send + Sync {
    /// Whether an account with the given name exists.
    fn exists(&self, name: &str) -> bool;

    /// Creates an account, returning the generated password.
    fn create(&self, name: &str) -> anyhow::Result<String>;

    /// Suspends an account with the given reason.
    fn suspend(&self, name: &str, reason: &str) -> anyhow::Result<()>;

    /// Whether the account is currently suspended.
    fn is_suspended(&self, name: &str) -> bool;

    /// The reason the account was suspended, if it is.
    fn suspend_reason(&self, name: &str) -> Option<String>;
}
