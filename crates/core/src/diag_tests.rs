// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn collect_sink_records_in_order() {
    let (diag, sink) = CollectSink::pair();
    diag.note("task", "candidate hinted-cluster missed");
    diag.note("host", "no container instance");
    diag.note("task", "candidate arn-cluster hit");

    let events = sink.events();
    assert_eq!(events.len(), 3);
    assert_eq!(events[0].0, "task");
    assert_eq!(
        sink.for_stage("task"),
        vec!["candidate hinted-cluster missed".to_string(), "candidate arn-cluster hit".to_string()]
    );
    assert_eq!(sink.for_stage("vpc"), Vec::<String>::new());
}

#[test]
fn disabled_sink_is_silent() {
    let diag = Diagnostics::disabled();
    // Nothing to observe; just must not panic or block.
    diag.note("task", "dropped");
}

#[test]
fn handles_are_cloneable_and_share_the_sink() {
    let (diag, sink) = CollectSink::pair();
    let clone = diag.clone();
    clone.note("chain", "from clone");
    assert_eq!(sink.events().len(), 1);
}
