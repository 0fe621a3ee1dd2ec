//! Built-in command handlers.
//!
//! These are the leaf commands the console ships with; feature modules in the
//! embedding application register their own alongside them. Handlers only see
//! the [`crate::session::Session`] and [`crate::session::AccountStore`]
//! collaborator surfaces, never sockets or the account database directly.

pub mod admin;
pub mod show_commands;

pub use admin::{AddUserCommand, ShutdownCommand, SuspendCommand};
pub use show_commands::ShowCommandsCommand;
