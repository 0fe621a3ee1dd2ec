//! Filter chain tests over the full dispatch path.

use std::sync::Arc;

use pretty_assertions::assert_eq;

use bnc_console::dispatcher::Dispatcher;
use bnc_console::error::ConsoleError;
use bnc_console::filters::{FilterRequest, FilterSet};
use bnc_console::registry::CommandTree;

use super::common::{params, MockSession, ReplyCommand};

fn dispatcher_with(replies: usize) -> Dispatcher {
    let tree = Arc::new(CommandTree::new());
    let root = tree.root();
    tree.add_command(root, ReplyCommand::with_replies("lines", &["lines"], replies))
        .unwrap();
    Dispatcher::new(tree, root, Arc::new(FilterSet::with_defaults()))
}

#[tokio::test]
async fn test_tail_default_on_long_output() {
    let dispatcher = dispatcher_with(15);
    let lines = dispatcher
        .handle(
            &MockSession::user("u"),
            &params(&["lines"]),
            &[FilterRequest::new("tail", &[])],
        )
        .await
        .unwrap();
    assert_eq!(lines.len(), 10);
    // Original order is preserved, only the head was dropped.
    assert_eq!(lines.first().unwrap(), "lines reply 6");
    assert_eq!(lines.last().unwrap(), "lines reply 15");
}

#[tokio::test]
async fn test_tail_larger_than_output_is_noop() {
    let dispatcher = dispatcher_with(2);
    let lines = dispatcher
        .handle(
            &MockSession::user("u"),
            &params(&["lines"]),
            &[FilterRequest::new("tail", &["3"])],
        )
        .await
        .unwrap();
    assert_eq!(lines, ["lines reply 1", "lines reply 2"]);
}

#[tokio::test]
async fn test_tail_bad_argument_reports_literal() {
    let dispatcher = dispatcher_with(5);
    let err = dispatcher
        .handle(
            &MockSession::user("u"),
            &params(&["lines"]),
            &[FilterRequest::new("tail", &["abc"])],
        )
        .await
        .unwrap_err();
    assert_eq!(err, ConsoleError::filter_argument("abc"));
    assert!(err.to_string().contains("abc"));
}

#[tokio::test]
async fn test_chained_filters_in_request_order() {
    let dispatcher = dispatcher_with(20);
    let lines = dispatcher
        .handle(
            &MockSession::user("u"),
            &params(&["lines"]),
            &[
                FilterRequest::new("head", &["12"]),
                FilterRequest::new("tail", &["2"]),
                FilterRequest::new("count", &[]),
            ],
        )
        .await
        .unwrap();
    assert_eq!(lines, ["Matched: 2 lines"]);
}

#[tokio::test]
async fn test_unknown_filter_aborts_dispatch_output() {
    let dispatcher = dispatcher_with(5);
    let err = dispatcher
        .handle(
            &MockSession::user("u"),
            &params(&["lines"]),
            &[FilterRequest::new("grep", &["x"])],
        )
        .await
        .unwrap_err();
    assert_eq!(err, ConsoleError::unknown_filter("grep"));
}
