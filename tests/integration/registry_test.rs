//! Registry tree integration tests: module-style registration, delegation,
//! and the acyclicity invariants.

use std::sync::Arc;

use pretty_assertions::assert_eq;

use bnc_console::command::Command;
use bnc_console::registry::CommandTree;

use super::common::ReplyCommand;

#[test]
fn test_module_registry_lifecycle() {
    // A feature module builds its own registry, registers commands into it,
    // and attaches it under the root; detaching makes them unresolvable again.
    let tree = CommandTree::new();
    let module = tree.create_registry();
    tree.add_command(module, ReplyCommand::new("greet", &["hello", "hi"]))
        .unwrap();

    assert!(tree.get_command(tree.root(), "hello").is_err());
    assert!(tree.add_sub(tree.root(), module));
    assert_eq!(tree.get_command(tree.root(), "hello").unwrap().name(), "greet");
    assert_eq!(tree.get_command(tree.root(), "HI").unwrap().name(), "greet");

    assert!(tree.del_sub(tree.root(), module));
    assert!(tree.get_command(tree.root(), "hello").is_err());
}

#[test]
fn test_cycle_rejected_through_chain() {
    let tree = CommandTree::new();
    let a = tree.create_registry();
    let b = tree.create_registry();
    let c = tree.create_registry();

    assert!(tree.add_sub(a, b));
    assert!(tree.add_sub(b, c));

    // A reaches C through B, so attaching A under C would close a cycle.
    assert!(!tree.add_sub(c, a));
    // The failed attempt left nothing behind.
    assert!(!tree.has_sub(c, a));
}

#[test]
fn test_self_attachment_always_fails() {
    let tree = CommandTree::new();
    let node = tree.create_registry();
    assert!(!tree.add_sub(node, node));
    assert!(!tree.add_sub(tree.root(), tree.root()));
}

#[test]
fn test_all_commands_prefers_parent_and_earlier_children() {
    let tree = CommandTree::new();
    let early = tree.create_registry();
    let late = tree.create_registry();

    tree.add_command(tree.root(), ReplyCommand::new("root-foo", &["foo"]))
        .unwrap();
    tree.add_command(early, ReplyCommand::new("early-foo", &["foo", "bar"]))
        .unwrap();
    tree.add_command(late, ReplyCommand::new("late-foo", &["foo", "bar", "baz"]))
        .unwrap();
    assert!(tree.add_sub(tree.root(), early));
    assert!(tree.add_sub(tree.root(), late));

    let all = tree.all_commands(tree.root());
    assert_eq!(all.len(), 3);
    assert_eq!(all["foo"].name(), "root-foo");
    assert_eq!(all["bar"].name(), "early-foo");
    assert_eq!(all["baz"].name(), "late-foo");
}

#[test]
fn test_wildcard_requires_literal_entry() {
    let tree = CommandTree::new();
    tree.add_command(tree.root(), ReplyCommand::new("real", &["real"]))
        .unwrap();

    // "*anything" is only resolvable when a literal wildcard-prefixed entry
    // or a matching direct entry exists.
    assert!(tree.get_command(tree.root(), "*anything").is_err());

    tree.add_command(tree.root(), ReplyCommand::new("fallback", &["*anything"]))
        .unwrap();
    assert_eq!(
        tree.get_command(tree.root(), "anything").unwrap().name(),
        "fallback"
    );
}

#[test]
fn test_reregistering_same_handler_still_wins() {
    let tree = CommandTree::new();
    let cmd = ReplyCommand::new("stable", &["stable"]);
    tree.add_command(tree.root(), Arc::clone(&cmd) as Arc<dyn Command>)
        .unwrap();
    // Repeated registration with the same handler is not an error and the
    // token still resolves.
    tree.add_command(tree.root(), Arc::clone(&cmd) as Arc<dyn Command>)
        .unwrap();
    assert_eq!(tree.get_command(tree.root(), "stable").unwrap().name(), "stable");
}

#[test]
fn test_delegated_lookup_prefers_own_entries() {
    let tree = CommandTree::new();
    let child = tree.create_registry();
    tree.add_command(tree.root(), ReplyCommand::new("own", &["status"]))
        .unwrap();
    tree.add_command(child, ReplyCommand::new("delegated", &["status"]))
        .unwrap();
    assert!(tree.add_sub(tree.root(), child));
    assert_eq!(tree.get_command(tree.root(), "status").unwrap().name(), "own");
}

#[test]
fn test_deep_delegation_resolves_within_bound() {
    // Ten nested registries: the deepest command is still reachable, and the
    // add-time invariant keeps the chain acyclic throughout.
    let tree = CommandTree::new();
    let mut current = tree.root();
    for _ in 0..10 {
        let next = tree.create_registry();
        assert!(tree.add_sub(current, next));
        current = next;
    }
    tree.add_command(current, ReplyCommand::new("deep", &["deep"]))
        .unwrap();
    assert_eq!(tree.get_command(tree.root(), "deep").unwrap().name(), "deep");
}
