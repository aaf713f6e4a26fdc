//! Tests for the events emitted with the `tracing` feature.
#![cfg(feature = "tracing")]

use okay::{all, call_if, create_rule, gt, lt};
use tracing_test::traced_test;

#[test]
#[traced_test]
fn test_contract_violation_is_logged() {
    let broken = create_rule(|_: &i32, _: &(), _: &()| None::<bool>, ());
    assert!(broken.check(&1, &()).is_err());
    assert!(logs_contain("did not produce a boolean verdict"));
}

#[test]
#[traced_test]
fn test_composition_results_are_traced() {
    let rule = all([gt(0), lt(5)]).unwrap();
    assert!(!rule.check(&7, &()).unwrap());
    assert!(logs_contain("composed rules evaluated"));
    assert!(logs_contain("[true, false]"));
}

#[test]
#[traced_test]
fn test_conditional_branch_is_traced() {
    let rule = call_if(gt(0), None, None);
    assert!(rule.check(&1, &()).unwrap());
    assert!(logs_contain("conditional rule evaluated"));
    assert!(logs_contain("fired=false"));
}

#[test]
fn test_rules_run_under_fmt_subscriber() {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        let rule = all([gt(0), lt(5)]).unwrap();
        assert!(rule.check(&3, &()).unwrap());
    });
}
