//! Hierarchical command registry.
//!
//! Registries form a tree: each node owns a token-to-command mapping and an
//! ordered list of delegated child registries. All nodes live in a single
//! arena owned by [`CommandTree`]; callers address nodes through copyable
//! [`RegistryId`] handles, so "contains" and cycle checks are reachability
//! queries over indices rather than pointer chasing.
//!
//! One reader-writer lock guards the whole arena: dispatches resolve in
//! parallel under a read lock, structural mutation takes the write lock and
//! completes atomically. `CommandTree` deliberately does not implement
//! `Clone` - a node's identity must stay singular for the acyclicity checks
//! to remain valid.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::debug;

use crate::command::Command;
use crate::error::{ConsoleError, Result};

/// Resolution gives up delegating past this depth and reports not-found.
/// With the add-time cycle checks in place it should never trigger; a test
/// that hits it has found a cycle-invariant bug.
const NESTING_LIMIT: usize = 10;

/// Stable handle for a registry node.
///
/// Ids are only meaningful for the [`CommandTree`] that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RegistryId(usize);

#[derive(Default)]
struct Node {
    /// Lowercase token -> command. A `*`-prefixed key is a wildcard fallback.
    commands: HashMap<String, Arc<dyn Command>>,
    /// Delegated children, insertion order = precedence order.
    children: Vec<RegistryId>,
}

#[derive(Default)]
struct TreeInner {
    nodes: Vec<Node>,
}

/// Arena of registry nodes, created with a root node.
pub struct CommandTree {
    inner: RwLock<TreeInner>,
}

impl Default for CommandTree {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandTree {
    /// Creates a tree containing only the root registry.
    pub fn new() -> Self {
        let inner = TreeInner {
            nodes: vec![Node::default()],
        };
        Self {
            inner: RwLock::new(inner),
        }
    }

    /// The root registry, created at construction.
    pub fn root(&self) -> RegistryId {
        RegistryId(0)
    }

    /// Creates a new detached registry node, e.g. for a feature module that
    /// wants an independently togglable command namespace. Attach it with
    /// [`CommandTree::add_sub`].
    pub fn create_registry(&self) -> RegistryId {
        let mut inner = self.write();
        inner.nodes.push(Node::default());
        RegistryId(inner.nodes.len() - 1)
    }

    /// Registers a command under every token it declares.
    pub fn add_command(&self, id: RegistryId, command: Arc<dyn Command>) -> Result<()> {
        let tokens = command.handles();
        self.add_command_as(id, &tokens, command)
    }

    /// Registers a command under the given tokens.
    ///
    /// New registrations take priority: an existing holder of a token is
    /// silently evicted. If any token is blank, every token this call already
    /// bound is rolled back and a registration error is returned, so no
    /// partial registration survives.
    pub fn add_command_as(
        &self,
        id: RegistryId,
        tokens: &[String],
        command: Arc<dyn Command>,
    ) -> Result<()> {
        let mut inner = self.write();
        debug!(command = command.name(), "adding command");
        for token in tokens {
            let key = token.trim().to_lowercase();
            if key.is_empty() {
                inner.remove_by_name(id, command.name());
                return Err(ConsoleError::registration(format!(
                    "command '{}' declares a blank token",
                    command.name()
                )));
            }
            debug!(token = %key, "added handler");
            inner.node_mut(id).commands.insert(key, Arc::clone(&command));
        }
        Ok(())
    }

    /// Removes every token mapped to a command whose logical name matches the
    /// given command's, regardless of which token string registered it.
    pub fn del_command(&self, id: RegistryId, command: &dyn Command) {
        let mut inner = self.write();
        debug!(command = command.name(), "deleting command");
        inner.remove_by_name(id, command.name());
    }

    /// Removes all direct command registrations from this node. Children are
    /// left attached.
    pub fn clear_commands(&self, id: RegistryId) {
        self.write().node_mut(id).commands.clear();
    }

    /// Attaches `child` to `parent`'s ordered child list.
    ///
    /// Rejected (returns false) if the attachment would break the acyclicity
    /// invariants: parent already reaches child, child is parent, child
    /// reaches parent, or child reaches an existing sibling (which would form
    /// a diamond that a later addition could close into a cycle).
    pub fn add_sub(&self, parent: RegistryId, child: RegistryId) -> bool {
        let mut inner = self.write();
        if parent == child || inner.reaches(parent, child) || inner.reaches(child, parent) {
            return false;
        }
        let siblings = inner.node(parent).children.clone();
        if siblings.iter().any(|&s| inner.reaches(child, s)) {
            return false;
        }
        inner.node_mut(parent).children.push(child);
        true
    }

    /// Detaches `child` from `parent` if present; returns whether it was.
    pub fn del_sub(&self, parent: RegistryId, child: RegistryId) -> bool {
        let mut inner = self.write();
        let children = &mut inner.node_mut(parent).children;
        match children.iter().position(|&c| c == child) {
            Some(pos) => {
                children.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Whether `target` is a direct child of `id` or reachable through any
    /// descendant.
    pub fn has_sub(&self, id: RegistryId, target: RegistryId) -> bool {
        self.read().reaches(id, target)
    }

    /// Resolves the command for a token.
    ///
    /// Lookup order: direct registration, wildcard (`*token`) registration,
    /// then each child registry in insertion order. Delegation is bounded at
    /// ten levels; anything deeper reports not-found.
    pub fn get_command(&self, id: RegistryId, token: &str) -> Result<Arc<dyn Command>> {
        let key = token.to_lowercase();
        self.read()
            .resolve(id, &key, 0)
            .ok_or_else(|| ConsoleError::not_found(token))
    }

    /// Returns the union of this registry's mapping and every descendant's.
    ///
    /// This registry's own entries win over any descendant's for the same
    /// token, and earlier-added children win over later ones. Expensive;
    /// intended for help listings, not hot-path dispatch.
    pub fn all_commands(&self, id: RegistryId) -> HashMap<String, Arc<dyn Command>> {
        self.read().collect(id)
    }

    fn read(&self) -> RwLockReadGuard<'_, TreeInner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, TreeInner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl TreeInner {
    fn node(&self, id: RegistryId) -> &Node {
        &self.nodes[id.0]
    }

    fn node_mut(&mut self, id: RegistryId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    fn remove_by_name(&mut self, id: RegistryId, name: &str) {
        self.node_mut(id)
            .commands
            .retain(|_, cmd| !cmd.name().eq_ignore_ascii_case(name));
    }

    /// Depth-first reachability over the child lists. No cycle guard needed:
    /// `add_sub` keeps the graph acyclic.
    fn reaches(&self, from: RegistryId, target: RegistryId) -> bool {
        let mut stack = self.node(from).children.clone();
        while let Some(id) = stack.pop() {
            if id == target {
                return true;
            }
            stack.extend(self.node(id).children.iter().copied());
        }
        false
    }

    fn resolve(&self, id: RegistryId, key: &str, nesting: usize) -> Option<Arc<dyn Command>> {
        let node = self.node(id);
        if let Some(cmd) = node.commands.get(key) {
            return Some(Arc::clone(cmd));
        }
        if let Some(cmd) = node.commands.get(&format!("*{key}")) {
            return Some(Arc::clone(cmd));
        }
        if nesting <= NESTING_LIMIT {
            for &child in &node.children {
                if let Some(cmd) = self.resolve(child, key, nesting + 1) {
                    return Some(cmd);
                }
            }
        }
        None
    }

    fn collect(&self, id: RegistryId) -> HashMap<String, Arc<dyn Command>> {
        let mut result = self.node(id).commands.clone();
        for &child in &self.node(id).children {
            for (token, cmd) in self.collect(child) {
                result.entry(token).or_insert(cmd);
            }
        }
        result
    }
}
