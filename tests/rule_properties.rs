//! Property-based tests for rule combinators.

use okay::testing::CallCounter;
use okay::{all, compose, create_rule, not, Rule};
use proptest::prelude::*;

fn constant(result: bool) -> Rule<i64> {
    create_rule(move |_: &i64, _: &(), _: &()| result, ())
}

fn threshold(limit: i64) -> Rule<i64> {
    okay::gt(limit)
}

proptest! {
    #[test]
    fn prop_all_is_conjunction(results in prop::collection::vec(any::<bool>(), 1..8)) {
        let rule = all(results.iter().copied().map(constant)).unwrap();
        prop_assert_eq!(rule.check_value(&0).unwrap(), results.iter().all(|r| *r));
    }

    #[test]
    fn prop_any_is_disjunction(results in prop::collection::vec(any::<bool>(), 1..8)) {
        let rule = okay::any(results.iter().copied().map(constant)).unwrap();
        prop_assert_eq!(rule.check_value(&0).unwrap(), results.iter().any(|r| *r));
    }

    #[test]
    fn prop_compose_preserves_order(
        limits in prop::collection::vec(-100i64..100, 1..8),
        value in -100i64..100
    ) {
        let composed = compose(limits.iter().copied().map(threshold)).unwrap();
        let expected: Vec<bool> = limits.iter().map(|limit| value > *limit).collect();
        prop_assert_eq!(composed.apply(&value, &()).unwrap(), expected);
    }

    #[test]
    fn prop_not_inverts(limit in any::<i64>(), value in any::<i64>()) {
        let rule = threshold(limit);
        prop_assert_eq!(
            not(rule.clone()).check_value(&value).unwrap(),
            !rule.check_value(&value).unwrap()
        );
    }

    #[test]
    fn prop_double_negation(limit in any::<i64>(), value in any::<i64>()) {
        let rule = threshold(limit);
        prop_assert_eq!(
            (!!rule.clone()).check_value(&value).unwrap(),
            rule.check_value(&value).unwrap()
        );
    }

    #[test]
    fn prop_combinators_never_short_circuit(results in prop::collection::vec(any::<bool>(), 1..8)) {
        let calls = CallCounter::new();
        let stubs: Vec<Rule<i64>> = results.iter().map(|r| calls.stub(*r)).collect();

        all(stubs.clone()).unwrap().check_value(&0).unwrap();
        prop_assert_eq!(calls.count(), results.len());

        okay::any(stubs).unwrap().check_value(&0).unwrap();
        prop_assert_eq!(calls.count(), 2 * results.len());
    }

    #[test]
    fn prop_de_morgan(a in any::<bool>(), b in any::<bool>()) {
        let lhs = not(all([constant(a), constant(b)]).unwrap());
        let rhs = okay::any([not(constant(a)), not(constant(b))]).unwrap();
        prop_assert_eq!(lhs.check_value(&0).unwrap(), rhs.check_value(&0).unwrap());
    }
}
