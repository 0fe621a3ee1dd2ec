//! bnc-console - command resolution and output delivery for a multi-account
//! network bouncer.
//!
//! This crate is the dispatch core embedded inside a larger bouncer
//! application: the session layer hands in a tokenized command line and an
//! opaque caller handle, and this crate resolves the handler through a tree
//! of command registries, enforces the permission tier, runs the handler into
//! an output buffer, and applies the caller-requested filter chain before
//! handing the lines back for transmission. Sockets, accounts, and the wire
//! protocol live in the embedding application.

pub mod command;
pub mod commands;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod filters;
pub mod logging;
pub mod output;
pub mod registry;
pub mod session;
